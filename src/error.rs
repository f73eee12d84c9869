//! Error handling for the bru2md application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for bru2md operations.
///
/// Every variant is fatal for the whole run. Problems with a single `.bru`
/// file are not represented here; they are reported through a
/// [`DiagnosticSink`](crate::diagnostics::DiagnosticSink) and the file is skipped.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The collection root has no `bruno.json` descriptor
    #[error("'bruno.json' not found in '{collection_dir}'. Please provide a valid Bruno collection directory.")]
    CollectionNotFound { collection_dir: String },

    /// Represents errors that occur while reading or parsing `bruno.json`
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors in building the directory ignore set
    #[error("Ignore error: {0}.")]
    IgnoreError(String),

    /// Represents errors raised while walking the collection tree
    #[error("Walk error: {0}.")]
    WalkError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
