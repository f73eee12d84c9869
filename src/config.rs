//! Collection descriptor handling.
//! Loads `bruno.json` from the collection root and resolves the collection's
//! display name and directory ignore list.

use crate::constants::COLLECTION_FILE;
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Raw contents of `bruno.json`. Only the fields used for documentation are read.
#[derive(Debug, Default, Deserialize)]
pub struct CollectionConfig {
    /// Display name of the collection
    #[serde(default)]
    pub name: Option<String>,
    /// Directory names to skip while walking the collection
    #[serde(default)]
    pub ignore: Vec<String>,
}

/// A collection root together with its resolved descriptor values.
#[derive(Debug)]
pub struct Collection {
    pub root: PathBuf,
    pub name: String,
    pub ignore: Vec<String>,
}

/// Parses the descriptor content.
///
/// # Errors
/// * `Error::ConfigError` if the content is not a valid descriptor
pub fn parse_config(content: &str) -> Result<CollectionConfig> {
    serde_json::from_str(content)
        .map_err(|e| Error::ConfigError(format!("Invalid {COLLECTION_FILE}: {e}")))
}

/// Loads the collection descriptor from `collection_root`.
///
/// # Arguments
/// * `collection_root` - Root directory of the Bruno collection
///
/// # Returns
/// * `Result<Collection>` - Collection with its display name and ignore list
///
/// # Errors
/// * `Error::CollectionNotFound` if `bruno.json` is missing
/// * `Error::ConfigError` if `bruno.json` cannot be read or parsed
pub fn load_collection<P: AsRef<Path>>(collection_root: P) -> Result<Collection> {
    let root = collection_root.as_ref();
    let config_path = root.join(COLLECTION_FILE);
    if !config_path.is_file() {
        return Err(Error::CollectionNotFound {
            collection_dir: root.display().to_string(),
        });
    }

    debug!("Loading collection descriptor from {}", config_path.display());
    let content = std::fs::read_to_string(&config_path).map_err(|e| {
        Error::ConfigError(format!("Failed to read {}: {e}", config_path.display()))
    })?;
    let config = parse_config(&content)?;

    Ok(Collection {
        name: config.name.unwrap_or_else(|| dir_name(root)),
        root: root.to_path_buf(),
        ignore: config.ignore,
    })
}

/// Returns the last component of `path`, resolving `.`-like paths first.
pub fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .or_else(|| {
            path.canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        })
        .unwrap_or_default()
}
