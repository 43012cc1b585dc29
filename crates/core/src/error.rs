use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollscopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid analysis unit {path}: {reason}")]
    InvalidUnit { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, CollscopeError>;
