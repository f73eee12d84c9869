//! Common constants used throughout the bru2md application.

/// Collection descriptor file name
pub const COLLECTION_FILE: &str = "bruno.json";

/// Per-folder descriptor file name
pub const FOLDER_FILE: &str = "folder.bru";

/// Extension of request description files
pub const BRU_EXTENSION: &str = ".bru";

/// Directory names that are skipped regardless of the collection's ignore list
pub const ALWAYS_IGNORED: [&str; 2] = [".git", "node_modules"];

/// Name of every generated Markdown document
pub const README_FILE: &str = "README.md";

/// Output directory used when none is given on the command line
pub const DEFAULT_OUTPUT_DIR: &str = "bruno-docs";

/// Title used for requests without a `name:` in their meta block
pub const UNNAMED_REQUEST: &str = "Unnamed Request";

/// URL used for requests without a `url:` in their method block
pub const MISSING_URL: &str = "No URL found";

/// Sequence number of requests without a `seq:`; sorts after declared ones
pub const DEFAULT_SEQ: u64 = u64::MAX;
