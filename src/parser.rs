//! Request descriptor parsing.
//!
//! A `.bru` file is a sequence of named, brace-delimited blocks:
//!
//! ```text
//! meta {
//!   name: Get user
//!   seq: 2
//! }
//!
//! get {
//!   url: {{baseUrl}}/users/:id
//! }
//!
//! params:path {
//!   id: 42
//! }
//! ```
//!
//! Blocks are located by their tag and their extent is found by counting
//! braces, so nested braces (`{{variables}}`, JSON bodies) stay inside the
//! block they belong to. Everything inside a block is read line by line.

use crate::constants::{DEFAULT_SEQ, MISSING_URL, UNNAMED_REQUEST};
use indexmap::IndexMap;
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Insertion-ordered `key: value` entries of a parameter block.
pub type Params = IndexMap<String, String>;

/// HTTP methods recognised as request blocks.
pub const HTTP_METHODS: [&str; 7] = ["get", "post", "put", "patch", "delete", "options", "head"];

/// A single request extracted from a request descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRecord {
    /// Display title
    pub name: String,
    /// Ordering key within a folder; [`DEFAULT_SEQ`] when undeclared
    pub seq: u64,
    /// Upper-cased HTTP method
    pub method: String,
    /// Raw URL template
    pub url: String,
    pub path_params: Params,
    pub query_params: Params,
    pub headers: Params,
    /// Pre-rendered fenced code block, or empty when the request has no body
    pub body: String,
}

/// A block found in the source text.
struct Block<'t> {
    /// Captures of the tag pattern
    tag: Captures<'t>,
    /// Text between the opening brace and its matching closing brace
    content: &'t str,
}

impl<'t> Block<'t> {
    /// Returns the capture group `index` of the tag, or an empty string.
    fn tag_group(&self, index: usize) -> &'t str {
        self.tag.get(index).map_or("", |m| m.as_str())
    }
}

fn meta_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bmeta\s*\{").unwrap())
}

fn method_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"(?i)\b({})\s*\{{", HTTP_METHODS.join("|"))).unwrap()
    })
}

fn path_params_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bparams:path\s*\{").unwrap())
}

fn query_params_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bparams:query\s*\{").unwrap())
}

fn headers_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bheaders\s*\{").unwrap())
}

fn body_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bbody:([\w-]+)\s*\{").unwrap())
}

fn name_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^\s*name:[ \t]*(.*)$").unwrap())
}

fn seq_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^\s*seq:[ \t]*(\d+)").unwrap())
}

fn url_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^\s*url:[ \t]*(.*)$").unwrap())
}

/// Finds the first block whose tag matches `tag`.
///
/// `tag` must end with the opening brace. Returns `None` when no tag matches
/// or when the first matching block is never closed.
fn find_block<'t>(text: &'t str, tag: &Regex) -> Option<Block<'t>> {
    let captures = tag.captures(text)?;
    let start = captures.get(0)?.end();
    let end = closing_brace(&text[start..], false)?;
    Some(Block {
        content: &text[start..start + end],
        tag: captures,
    })
}

/// Returns the byte offset of the `}` closing an already opened brace.
///
/// With `skip_strings`, braces inside double-quoted JSON string literals
/// are not counted.
fn closing_brace(text: &str, skip_strings: bool) -> Option<usize> {
    let mut depth = 1usize;
    let mut in_string = false;
    let mut escaped = false;
    for (offset, byte) in text.bytes().enumerate() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' if skip_strings => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// Returns the trimmed first capture of `line` in `text`, if non-empty.
fn line_value(line: &Regex, text: &str) -> Option<String> {
    line.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Parses the `key: value` lines of the first block matching `tag`.
///
/// Lines without a colon are skipped. Only the first colon separates key
/// from value. A repeated key keeps its first position and takes the last value.
fn parse_params(text: &str, tag: &Regex) -> Params {
    let mut params = Params::new();
    if let Some(block) = find_block(text, tag) {
        for line in block.content.lines() {
            if let Some((key, value)) = line.trim().split_once(':') {
                params.insert(key.trim().to_string(), value.trim().to_string());
            }
        }
    }
    params
}

/// Wraps `content` in a fenced code block labelled with `label`.
fn fence(label: &str, content: &str) -> String {
    format!("```{label}\n{content}\n```")
}

/// Returns the span from the first `{` to the last `}` of `raw`.
fn embedded_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

/// Renders a `body:json` block.
///
/// The object embedded in the block is pretty-printed. Invalid JSON falls
/// back to an unlabelled fence around the raw text.
fn render_json_body(raw: &str) -> String {
    let Some(object) = embedded_object(raw) else {
        return fence("json", raw);
    };
    match serde_json::from_str::<serde_json::Value>(object)
        .and_then(|value| serde_json::to_string_pretty(&value))
    {
        Ok(pretty) => fence("json", &pretty),
        Err(e) => {
            log::debug!("Body is not valid JSON, keeping raw text: {e}");
            fence("", raw)
        }
    }
}

/// Renders the first `body:<subtype>` block as a fenced code block.
///
/// JSON bodies ignore braces inside string literals. A body block that is
/// never closed ends at its first `}`.
fn parse_body(text: &str) -> String {
    let Some(tag) = body_tag().captures(text) else {
        return String::new();
    };
    let (Some(whole), Some(subtype)) = (tag.get(0), tag.get(1)) else {
        return String::new();
    };
    let subtype = subtype.as_str();
    let is_json = subtype.eq_ignore_ascii_case("json");

    let rest = &text[whole.end()..];
    let Some(end) = closing_brace(rest, is_json).or_else(|| rest.find('}')) else {
        return String::new();
    };
    let raw = rest[..end].trim();
    if is_json {
        render_json_body(raw)
    } else {
        fence(subtype, raw)
    }
}

/// Parses the raw text of a request descriptor.
///
/// # Arguments
/// * `text` - Full content of a `.bru` file
///
/// # Returns
/// * `Some(RequestRecord)` - The request described by the file
/// * `None` - The file has no `meta` block or no HTTP method block,
///   e.g. a folder descriptor or a settings file
pub fn parse(text: &str) -> Option<RequestRecord> {
    let meta = find_block(text, meta_tag())?;
    let method_block = find_block(text, method_tag())?;

    let seq = seq_line()
        .captures(meta.content)
        .and_then(|c| c.get(1))
        // Declared but out of range: still ahead of undeclared
        .map(|m| m.as_str().parse().unwrap_or(DEFAULT_SEQ - 1))
        .unwrap_or(DEFAULT_SEQ);

    Some(RequestRecord {
        name: line_value(name_line(), meta.content)
            .unwrap_or_else(|| UNNAMED_REQUEST.to_string()),
        seq,
        method: method_block.tag_group(1).to_uppercase(),
        url: line_value(url_line(), method_block.content)
            .unwrap_or_else(|| MISSING_URL.to_string()),
        path_params: parse_params(text, path_params_tag()),
        query_params: parse_params(text, query_params_tag()),
        headers: parse_params(text, headers_tag()),
        body: parse_body(text),
    })
}

/// Extracts the display name from a folder descriptor (`folder.bru`).
///
/// Returns `None` when the file has no non-empty `name:` line.
pub fn parse_folder_name(text: &str) -> Option<String> {
    line_value(name_line(), text)
}
