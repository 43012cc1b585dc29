pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod unit;

pub use config::CollscopeConfig;
pub use engine::{AnalysisEngine, UnitReport};
pub use error::{CollscopeError, Result};
pub use unit::{AnalysisUnit, discover_units};
