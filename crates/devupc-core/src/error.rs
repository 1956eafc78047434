//! Error types for devupc

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for devupc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for devupc
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String, help: String },

    /// Makefile fragment error
    #[error("Makefile fragment error: {message}")]
    Mak { message: String, help: String },

    /// Source checkout error
    #[error("Checkout error: {message}")]
    Checkout { message: String, help: String },

    /// Build step error
    #[error("Build error: {message}")]
    Build { message: String, help: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            help: help.into(),
        }
    }

    /// Create a makefile fragment error
    pub fn mak(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Mak {
            message: message.into(),
            help: help.into(),
        }
    }

    /// Create a checkout error
    pub fn checkout(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
            help: help.into(),
        }
    }

    /// Create a build error
    pub fn build(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
            help: help.into(),
        }
    }
}
