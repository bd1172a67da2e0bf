//! Error types for codesmith
//!
//! This module defines the error hierarchy used throughout the application.
//! We use `thiserror` for library-style errors that are part of the API,
//! and convert to HTTP responses at the server boundary.

use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Generator registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Access denied: {0}")]
    AccessDenied(#[from] AccessDeniedError),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Missing required configuration: {field}")]
    Missing { field: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Generator registry initialization errors
///
/// Any of these is fatal at startup: a registry is published in full or
/// not at all.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("unknown generator kind '{kind}' for generator '{id}'")]
    UnknownKind { id: String, kind: String },

    #[error("invalid options for generator '{id}' (kind '{kind}'): {reason}")]
    InvalidOptions {
        id: String,
        kind: String,
        reason: String,
    },
}

/// Access control error
///
/// The display message is the canonical body of the 403 response.
#[derive(Error, Debug)]
#[error("You are not allowed to access this page.")]
pub struct AccessDeniedError {
    /// The caller IP that failed the allow-list check
    pub ip: String,
}

impl AccessDeniedError {
    pub fn new(ip: impl Into<String>) -> Self {
        Self { ip: ip.into() }
    }
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for registry operations
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
