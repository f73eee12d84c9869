//! Directory ignore handling for collection traversal.
//! Combines the collection's `ignore` list with the directories that are
//! always skipped, compiled into a glob set matched against directory names.

use crate::constants::ALWAYS_IGNORED;
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::path::Path;

/// Builds the set of ignored directory names.
///
/// # Arguments
/// * `patterns` - Entries of the collection's `ignore` list
///
/// # Returns
/// * `Result<GlobSet>` - Compiled patterns, including `.git` and `node_modules`
///
/// # Notes
/// - A plain name matches only a directory with exactly that name
/// - Glob syntax such as `tmp*` is accepted as well
///
/// # Errors
/// * `Error::IgnoreError` if a pattern is not a valid glob
pub fn build_ignore_set<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    let all = patterns
        .iter()
        .map(|p| p.as_ref().to_string())
        .chain(ALWAYS_IGNORED.iter().map(|name| name.to_string()));
    for pattern in all {
        debug!("Ignoring directories named '{pattern}'");
        builder.add(Glob::new(&pattern).map_err(|e| {
            Error::IgnoreError(format!("invalid ignore pattern '{pattern}': {e}"))
        })?);
    }
    builder
        .build()
        .map_err(|e| Error::IgnoreError(format!("ignore set loading failed: {e}")))
}

/// Returns true if the directory at `path` is named by one of the ignore patterns.
pub fn is_ignored(ignore: &GlobSet, path: &Path) -> bool {
    path.file_name().is_some_and(|name| ignore.is_match(name))
}
