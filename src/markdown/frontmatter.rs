//! Frontmatter splitting.
//!
//! A document may open with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! name: reviewer
//! tags: [rust, review]
//! ---
//! Body text starts here.
//! ```
//!
//! The opening fence must be the very first line. The body is everything after
//! the closing fence with exactly one line break removed, so blank lines the
//! author left between the fence and the text survive. Documents that do not
//! open with a fence have no metadata and their whole text is the body.

use std::path::Path;

use crate::constants::FRONTMATTER_DELIMITER;
use crate::core::{Metadata, ParsedDocument, ResolutionError};

/// Frontmatter and body slices of a document, before YAML parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontmatterBlock<'a> {
    /// Text between the two fences, including its trailing newline.
    pub yaml: &'a str,
    /// Text after the closing fence and its line break.
    pub body: &'a str,
}

/// Split raw document text into metadata and body.
///
/// `path` only labels errors.
///
/// # Errors
///
/// Returns [`ResolutionError::ParseFailure`] if the opening fence has no
/// matching closing fence, the block is not valid YAML, or the YAML is not a
/// mapping.
///
/// # Examples
///
/// ```rust
/// use docweave::markdown::split_document;
/// use std::path::Path;
///
/// let doc = split_document("---\nname: a\n---\nHead\n", Path::new("a.md")).unwrap();
/// assert_eq!(doc.metadata.get("name").and_then(|v| v.as_str()), Some("a"));
/// assert_eq!(doc.body, "Head\n");
///
/// let plain = split_document("no frontmatter", Path::new("b.md")).unwrap();
/// assert!(plain.metadata.is_empty());
/// assert_eq!(plain.body, "no frontmatter");
/// ```
pub fn split_document(raw: &str, path: &Path) -> Result<ParsedDocument, ResolutionError> {
    let Some(block) = locate_frontmatter(raw).map_err(|reason| ResolutionError::parse_failure(path, reason))?
    else {
        return Ok(ParsedDocument::new(Metadata::new(), raw.to_string()));
    };

    let metadata = parse_metadata(block.yaml, path)?;
    Ok(ParsedDocument::new(metadata, block.body.to_string()))
}

/// Find the frontmatter block without parsing it.
///
/// Returns `Ok(None)` when the document does not open with a fence.
///
/// # Errors
///
/// Returns a reason string when the opening fence is never closed.
pub fn locate_frontmatter(raw: &str) -> Result<Option<FrontmatterBlock<'_>>, String> {
    let Some((first, mut offset)) = next_line(raw, 0) else {
        return Ok(None);
    };
    if !is_delimiter(first) {
        return Ok(None);
    }

    let yaml_start = offset;
    while let Some((line, next)) = next_line(raw, offset) {
        if is_delimiter(line) {
            return Ok(Some(FrontmatterBlock {
                yaml: &raw[yaml_start..offset],
                body: &raw[next..],
            }));
        }
        offset = next;
    }

    Err(format!("unterminated frontmatter block (missing closing '{FRONTMATTER_DELIMITER}')"))
}

fn parse_metadata(yaml: &str, path: &Path) -> Result<Metadata, ResolutionError> {
    if yaml.trim().is_empty() {
        return Ok(Metadata::new());
    }

    let value: serde_yaml::Value = serde_yaml::from_str(yaml)
        .map_err(|e| ResolutionError::parse_failure(path, e.to_string()))?;

    match value {
        serde_yaml::Value::Mapping(mapping) => Ok(mapping),
        serde_yaml::Value::Null => Ok(Metadata::new()),
        other => Err(ResolutionError::parse_failure(
            path,
            format!("frontmatter must be a mapping, found {}", describe(&other)),
        )),
    }
}

fn describe(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}

/// The line starting at `start` (terminator excluded) and the offset just past
/// its `\n`. `None` once `start` reaches the end of the text.
fn next_line(text: &str, start: usize) -> Option<(&str, usize)> {
    if start >= text.len() {
        return None;
    }
    let rest = &text[start..];
    match rest.find('\n') {
        Some(pos) => Some((&rest[..pos], start + pos + 1)),
        None => Some((rest, text.len())),
    }
}

fn is_delimiter(line: &str) -> bool {
    line.strip_suffix('\r').unwrap_or(line) == FRONTMATTER_DELIMITER
}
