pub mod diagnostic;
pub mod inspection;
pub mod types;

pub use diagnostic::*;
pub use inspection::*;
pub use types::*;
