//! Configuration types for codesmith
//!
//! This module defines the configuration structure that can be loaded from
//! TOML files and/or environment variables.

use crate::access::DEFAULT_ALLOWED_IPS;
use crate::generators::GeneratorDescriptor;
use serde::Deserialize;
use std::collections::HashMap;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,

    /// IP access control
    pub access: AccessConfig,

    /// Generator overrides, keyed by generator ID
    ///
    /// Merged over the built-in set at startup; an entry with a built-in's
    /// ID replaces it entirely.
    pub generators: HashMap<String, GeneratorDescriptor>,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Permissions applied to generated files and directories
    pub files: FileModeConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind
    pub host: String,

    /// Port to bind
    pub port: u16,

    /// Service name reported by the info endpoint
    pub name: String,

    /// Service version reported by the info endpoint
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 19420,
            name: "codesmith".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// IP access control configuration
///
/// codesmith generates code files on the machine it runs on, so by default
/// it only answers localhost. Widen `allowed_ips` deliberately; an entry of
/// `"*"` makes the service reachable from anywhere.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Allow-list of caller IPs: exact addresses, segment wildcards
    /// (`192.168.0.*`), or `*`
    pub allowed_ips: Vec<String>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            allowed_ips: DEFAULT_ALLOWED_IPS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Permissions for newly generated files and directories
///
/// Plain configuration handed to generators when they write output; the
/// service itself never touches the filesystem.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileModeConfig {
    /// Mode for newly generated files
    pub new_file_mode: u32,

    /// Mode for newly generated directories
    pub new_dir_mode: u32,
}

impl Default for FileModeConfig {
    fn default() -> Self {
        Self {
            new_file_mode: 0o666,
            new_dir_mode: 0o777,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Output format (pretty, json)
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output
    #[default]
    Pretty,
    /// JSON structured output
    Json,
}
