// Public modules
pub mod dump;
pub mod error;
pub mod query;
pub mod report;
pub mod resource;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
