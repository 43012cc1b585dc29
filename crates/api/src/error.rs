#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid range: {start}..{end} exceeds source of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },
    #[error("Not found: {0}")]
    NotFound(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
