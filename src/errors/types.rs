//! Error type definitions for the brand extraction pipeline
//!
//! Nothing in here ever escapes `BrandingOrchestrator::extract_branding`.
//! Collaborators and components return these, and the orchestrator turns
//! every one of them into a warning plus the documented default.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Rendering collaborator failures (navigation, screenshot, script evaluation)
    #[error("Render error: {message}")]
    Render { message: String },

    /// Config values that parse but cannot be used
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// External service errors
    #[error("External service error: {service} - {message}")]
    ExternalService { service: String, message: String },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Filesystem errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file parse errors
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Signals file parse errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Screenshot palette extraction errors
#[derive(Error, Debug)]
pub enum PaletteError {
    /// The buffer is not a decodable raster image
    #[error("Failed to decode screenshot: {0}")]
    Decode(#[from] image::ImageError),

    /// Zero-sized image or no opaque pixels
    #[error("Screenshot contains no usable pixels")]
    Empty,

    /// Every sampled pixel falls in one color bucket (blank page, failed paint)
    #[error("Screenshot is a single uniform color ({color})")]
    Uniform { color: String },
}

/// Convenience methods for creating common error types
impl AppError {
    /// Create a render error
    pub fn render<S: Into<String>>(message: S) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an external service error
    pub fn external_service<S: Into<String>, M: Into<String>>(service: S, message: M) -> Self {
        Self::ExternalService {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
