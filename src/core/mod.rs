//! Core Module - Infrastructure components of the application
//!
//! - Configuration
//! - Error handling
//! - Request extractors
//! - Application state

pub mod config;
pub mod error;
pub mod extract;
pub mod state;

// Re-exports per facilitare l'import
pub use config::Config;
pub use error::{AppError, ErrorResponse, FieldError};
pub use extract::{AppJson, AppPath, AppQuery};
pub use state::AppState;
