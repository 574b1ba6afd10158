//! Error handling for forgebaker.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use thiserror::Error;

/// Errors that can occur while building placeholder properties,
/// rendering templates, or writing the generated project.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Errors reported by the MiniJinja engine (missing template, syntax error, ...)
    #[error("Template rendering error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors that occur during template processing
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents errors in the project description file
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// A version string could not be split into parts
    #[error("Invalid version '{version}'.")]
    VersionError { version: String },

    /// The MCP mappings version lacks the `channel_version` separator
    #[error("Malformed MCP version '{version}': expected '<channel>_<version>'.")]
    MalformedMcpVersion { version: String },

    #[error("Output directory '{output_dir}' already exists. Use --force to overwrite it.")]
    OutputDirectoryExistsError { output_dir: String },

    /// The interactive prompt failed
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
