//! Error types for the letterbox application.
//!
//! The animation core is infallible: every transition is a plain flag
//! assignment, and the one geometry read substitutes a fixed fallback
//! offset instead of failing. Errors only arise at the edges — terminal
//! I/O, configuration files, and logging setup — and are modelled here
//! with `thiserror`, composing via `From` and `?`.

use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// Returned from `main`-adjacent glue. Domain-specific error types convert
/// into it automatically so the entry point stays a straight line of `?`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load or parse the configuration file.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Failed to initialize the tracing subscriber or its log file.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal setup, drawing, or event polling failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] crate::view::TuiError),
}
