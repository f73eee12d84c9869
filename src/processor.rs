//! Collection traversal and document generation.
//! Walks a Bruno collection, parses the request descriptors of every
//! directory and writes one Markdown document per directory plus a root index.

use globset::GlobSet;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::{
    config::{dir_name, Collection},
    constants::{BRU_EXTENSION, FOLDER_FILE, README_FILE},
    diagnostics::DiagnosticSink,
    error::{Error, Result},
    ignore::{build_ignore_set, is_ignored},
    parser::{parse, parse_folder_name, RequestRecord},
    renderer::{DocumentRenderer, IndexEntry},
};

/// The requests of one directory, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderDocument {
    /// Display title of the directory
    pub title: String,
    /// Directory path relative to the collection root
    pub relative_path: PathBuf,
    /// Requests sorted by `seq`; equal keys keep discovery order
    pub requests: Vec<RequestRecord>,
}

impl FolderDocument {
    pub fn new<S: Into<String>>(
        title: S,
        relative_path: PathBuf,
        mut requests: Vec<RequestRecord>,
    ) -> Self {
        requests.sort_by_key(|request| request.seq);
        Self { title: title.into(), relative_path, requests }
    }
}

/// Formats `path` as a `/`-separated Markdown link target.
pub fn link_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Converts a collection into a tree of Markdown documents.
pub struct Processor<'a> {
    renderer: &'a dyn DocumentRenderer,
    sink: &'a dyn DiagnosticSink,
    collection: &'a Collection,
    output_root: PathBuf,
    ignore: GlobSet,
}

impl<'a> Processor<'a> {
    /// Creates a processor for `collection`, writing below `output_root`.
    ///
    /// # Errors
    /// * `Error::IgnoreError` if the collection's ignore list is invalid
    pub fn new<P: AsRef<Path>>(
        renderer: &'a dyn DocumentRenderer,
        sink: &'a dyn DiagnosticSink,
        collection: &'a Collection,
        output_root: P,
    ) -> Result<Self> {
        Ok(Self {
            renderer,
            sink,
            collection,
            output_root: output_root.as_ref().to_path_buf(),
            ignore: build_ignore_set(&collection.ignore)?,
        })
    }

    /// Reads and parses a single request descriptor.
    ///
    /// Unreadable files are reported to the sink. Both unreadable files and
    /// files that do not describe a request yield `None`.
    pub fn read_request(&self, path: &Path) -> Option<RequestRecord> {
        match fs::read_to_string(path) {
            Ok(text) => {
                let request = parse(&text);
                if request.is_none() {
                    debug!("Skipping {}: not a request descriptor", path.display());
                }
                request
            }
            Err(e) => {
                self.sink.report(&format!("Error parsing file {}: {e}", path.display()));
                None
            }
        }
    }

    /// Returns the display title of `dir`, taken from its folder descriptor when present.
    pub fn folder_title(&self, dir: &Path) -> String {
        let default = dir_name(dir);
        let descriptor = dir.join(FOLDER_FILE);
        if !descriptor.is_file() {
            return default;
        }
        match fs::read_to_string(&descriptor) {
            Ok(text) => parse_folder_name(&text).unwrap_or(default),
            Err(e) => {
                self.sink.report(&format!("Could not parse {}: {e}", descriptor.display()));
                default
            }
        }
    }

    /// Collects the requests stored directly in `dir`.
    ///
    /// # Returns
    /// * `Result<Option<FolderDocument>>` - `None` if no file in `dir` describes a request
    pub fn process(&self, dir: &Path) -> Result<Option<FolderDocument>> {
        let mut requests = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    self.sink.report(&format!("Could not read entry in {}: {e}", dir.display()));
                    continue;
                }
            };
            let file_name = entry.file_name().to_string_lossy();
            if file_name == FOLDER_FILE
                || !file_name.ends_with(BRU_EXTENSION)
                || !entry.path().is_file()
            {
                continue;
            }
            if let Some(request) = self.read_request(entry.path()) {
                requests.push(request);
            }
        }

        if requests.is_empty() {
            debug!("No requests found in {}", dir.display());
            return Ok(None);
        }

        let relative_path = dir
            .strip_prefix(&self.collection.root)
            .map_err(|e| Error::WalkError(format!("{}: {e}", dir.display())))?
            .to_path_buf();

        Ok(Some(FolderDocument::new(self.folder_title(dir), relative_path, requests)))
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(Error::IoError)?;
        }
        fs::write(path, content).map_err(Error::IoError)?;
        println!("Generated: {}", path.display());
        Ok(())
    }

    /// Converts the whole collection.
    ///
    /// # Returns
    /// * `Result<Vec<PathBuf>>` - Every written document, the root index last
    ///
    /// # Flow
    /// 1. Walks the collection top-down, skipping ignored directories
    /// 2. Writes `README.md` for each directory containing requests
    /// 3. Writes the root index linking to the top-level folder documents
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.output_root).map_err(Error::IoError)?;

        let mut written = Vec::new();
        let mut entries = Vec::new();
        let mut root_requests = Vec::new();

        let walker = WalkDir::new(&self.collection.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0 || !(e.file_type().is_dir() && is_ignored(&self.ignore, e.path()))
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => return Err(Error::WalkError(e.to_string())),
                Err(e) => {
                    self.sink.report(&format!("Could not read directory entry: {e}"));
                    continue;
                }
            };
            if !entry.file_type().is_dir() {
                continue;
            }

            let Some(document) = self.process(entry.path())? else {
                continue;
            };

            if entry.depth() == 0 {
                root_requests = document.requests;
                continue;
            }

            let target = self.output_root.join(&document.relative_path).join(README_FILE);
            self.write(&target, &self.renderer.render(&document.title, &document.requests))?;
            written.push(target);

            if entry.depth() == 1 {
                entries.push(IndexEntry {
                    path: link_path(&document.relative_path.join(README_FILE)),
                    title: document.title,
                });
            }
        }

        entries.sort();
        let index = self.renderer.render_index(&self.collection.name, &entries, &root_requests);
        let index_path = self.output_root.join(README_FILE);
        self.write(&index_path, &index)?;
        written.push(index_path);

        Ok(written)
    }
}
