//! Error types for Smite Dashboard
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use std::path::PathBuf;

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
pub enum Error {
    /// IO error (config file, log directory, etc.)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error in {}: {source}", path.display()))]
    TomlDe {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// No usable platform directory for configuration or logs
    #[snafu(display("Could not determine the {kind} directory"))]
    ConfigDir { kind: &'static str },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
