//! Import directive scanning.
//!
//! A body pulls in another document with `@(reference)`. The reference runs
//! up to the first `)`, so references cannot themselves contain a closing
//! parenthesis. There is no escape syntax and no nesting: `@(a(b))` is read as
//! the reference `a(b` followed by a literal `)`.
//!
//! Whitespace around the reference is trimmed. A reference beginning with `/`
//! is resolved from the document root; anything else is resolved from the
//! importing document's directory.

use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// One `@(...)` occurrence in a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDirective<'a> {
    /// Byte range of the whole directive, `@(` through `)`.
    pub span: Range<usize>,
    /// The reference with surrounding whitespace trimmed. May be empty.
    pub reference: &'a str,
}

fn import_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"@\(([^)]*)\)").expect("import directive pattern is valid"))
}

/// All import directives in `body`, left to right.
///
/// # Examples
///
/// ```rust
/// use docweave::markdown::find_imports;
///
/// let body = "Head @(./b) Tail @( /shared/footer )";
/// let refs: Vec<_> = find_imports(body).into_iter().map(|d| d.reference).collect();
/// assert_eq!(refs, vec!["./b", "/shared/footer"]);
/// ```
#[must_use]
pub fn find_imports(body: &str) -> Vec<ImportDirective<'_>> {
    import_pattern()
        .captures_iter(body)
        .filter_map(|cap| {
            let whole = cap.get(0)?;
            let reference = cap.get(1)?;
            Some(ImportDirective {
                span: whole.range(),
                reference: reference.as_str().trim(),
            })
        })
        .collect()
}
