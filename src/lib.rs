//! bru2md converts a Bruno API collection into Markdown documentation.
//! It parses the collection's `.bru` request descriptors and writes a mirrored
//! tree of Markdown documents with a root index linking to the top-level folders.

/// Command-line interface module for the bru2md application
pub mod cli;

/// Collection descriptor handling (`bruno.json`)
pub mod config;

/// Common constants: file names, placeholders and defaults
pub mod constants;

/// Reporting of skipped files and other recoverable problems
pub mod diagnostics;

/// Error types and handling for the bru2md application
pub mod error;

/// Directory ignore patterns
/// Combines the collection's ignore list with `.git` and `node_modules`
pub mod ignore;

/// Logger initialization
pub mod logger;

/// Request descriptor parsing
/// Extracts method, URL, parameters, headers and body from `.bru` files
pub mod parser;

/// Collection traversal and document generation
/// Combines all components to generate the final output
pub mod processor;

/// Markdown rendering of folder documents and the root index
pub mod renderer;
