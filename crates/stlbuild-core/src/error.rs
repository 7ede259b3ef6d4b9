//! Error types for stlbuild-core.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for stlbuild-core operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Errors that can occur while composing or running the build.
#[derive(Error, Diagnostic, Debug)]
pub enum BuildError {
    /// The host operating system has no compiler template.
    #[error("Unsupported platform: {name}")]
    #[diagnostic(
        code(stlbuild::unsupported_platform),
        help("supported platforms are Linux and Darwin")
    )]
    UnsupportedPlatform { name: String },

    /// Failed to remove the artifact left by a previous build.
    #[error("Failed to remove previous build output {}: {source}", path.display())]
    #[diagnostic(code(stlbuild::cleanup))]
    Cleanup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The compiler process could not be started.
    #[error("Failed to execute compiler `{program}`: {source}")]
    #[diagnostic(
        code(stlbuild::spawn),
        help("make sure a C compiler is installed and on PATH")
    )]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read configuration file.
    #[error("Failed to read config file {}: {source}", path.display())]
    #[diagnostic(code(stlbuild::read_config))]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    #[diagnostic(code(stlbuild::parse_config))]
    ParseToml(#[from] toml::de::Error),
}
