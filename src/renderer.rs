//! Markdown rendering of parsed requests.
//! Produces one document per folder and the collection's root index.

use crate::parser::{Params, RequestRecord};

/// Link from the root index to a top-level folder document.
///
/// Ordering is by title, then by path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct IndexEntry {
    /// Display title of the folder
    pub title: String,
    /// Path of the folder document relative to the output root, `/`-separated
    pub path: String,
}

/// Trait for documentation renderers.
pub trait DocumentRenderer {
    /// Renders the document of a single folder.
    ///
    /// # Arguments
    /// * `title` - Display title of the folder
    /// * `requests` - Requests of the folder, already in display order
    fn render(&self, title: &str, requests: &[RequestRecord]) -> String;

    /// Renders the collection's root index.
    ///
    /// # Arguments
    /// * `collection_name` - Display name of the collection
    /// * `entries` - Top-level folders, already sorted
    /// * `root_requests` - Requests stored directly in the collection root
    fn render_index(
        &self,
        collection_name: &str,
        entries: &[IndexEntry],
        root_requests: &[RequestRecord],
    ) -> String;
}

/// Plain Markdown renderer.
#[derive(Debug, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn push_table(lines: &mut Vec<String>, title: &str, params: &Params) {
    if params.is_empty() {
        return;
    }
    lines.push(format!("**{title}**\n"));
    lines.push("| Name | Value / Description |".to_string());
    lines.push("|------|---------------------|".to_string());
    for (key, value) in params {
        lines.push(format!("| `{key}` | {value} |"));
    }
    lines.push(String::new());
}

/// Renders the section of a single request, terminated by a horizontal rule.
pub fn render_request(request: &RequestRecord) -> String {
    let mut lines = vec![
        format!("### {}\n", request.name),
        format!("**`{}`** `{}`\n", request.method, request.url),
    ];

    push_table(&mut lines, "Path Parameters", &request.path_params);
    push_table(&mut lines, "Query Parameters", &request.query_params);
    push_table(&mut lines, "Headers", &request.headers);

    if !request.body.is_empty() {
        lines.push("**Body**\n".to_string());
        lines.push(request.body.clone());
    }

    lines.join("\n") + "\n---\n"
}

fn render_sections(requests: &[RequestRecord]) -> Vec<String> {
    requests.iter().map(render_request).collect()
}

impl DocumentRenderer for MarkdownRenderer {
    fn render(&self, title: &str, requests: &[RequestRecord]) -> String {
        let mut parts = vec![format!("# {title}\n")];
        parts.extend(render_sections(requests));
        parts.join("\n")
    }

    fn render_index(
        &self,
        collection_name: &str,
        entries: &[IndexEntry],
        root_requests: &[RequestRecord],
    ) -> String {
        let mut lines = vec![format!("# API Documentation: {collection_name}\n")];
        if !entries.is_empty() {
            lines.push("## Endpoints\n".to_string());
            for entry in entries {
                lines.push(format!("- [{}]({})", entry.title, entry.path));
            }
        }
        let mut document = lines.join("\n");

        if !root_requests.is_empty() {
            document.push_str(if document.ends_with('\n') { "\n" } else { "\n\n" });
            document.push_str(&render_sections(root_requests).join("\n"));
        }
        document
    }
}
