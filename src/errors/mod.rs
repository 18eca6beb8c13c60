//! Centralized error handling for the brand extraction pipeline
//!
//! # Error Categories
//!
//! - **Render Errors**: the rendering collaborator could not load the page
//! - **External Service Errors**: logo download failures
//! - **Configuration Errors**: unreadable, unparseable or invalid config files
//!
//! Palette failures have their own [`PaletteError`]: the orchestrator turns
//! them into warnings and never lifts them into [`AppError`].
//!
//! # Usage
//!
//! ```rust
//! use brand_extract::errors::{AppError, AppResult};
//!
//! fn example_function() -> AppResult<String> {
//!     Err(AppError::configuration("brand_api_url has no {domain} placeholder"))
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for palette extraction Results
pub type PaletteResult<T> = Result<T, PaletteError>;
