//! Line classification for tab-delimited dictionary entries.
//!
//! One raw input line either yields the fields of an [`Entry`] or a
//! [`LineReject`]. Classification is a pure function: no IO, no state,
//! never panics. Lines carry at most 4 logical columns
//! (source, target, part of speech, linguistic annotation); anything
//! after the third tab belongs to the annotation verbatim.
//!
//! [`Entry`]: crate::types::Entry

use thiserror::Error;

/// The fields extracted from one accepted line, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub source: String,
    pub target: String,
    pub part: Option<String>,
    pub ling: Option<String>,
}

/// Why a candidate line was dropped.
///
/// Rejects are absorbed by the parser (skip and continue); they never
/// terminate a run.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LineReject {
    /// No tab in the line, so there is no translation field.
    #[error("no tab separator (missing translation field)")]
    NoFieldSeparator,

    /// Source column trimmed to nothing.
    #[error("empty headword")]
    EmptyHeadword,

    /// Target column trimmed to nothing.
    #[error("empty translation")]
    EmptyTranslation,
}

/// Split `text` on the first `\t`, or return it whole.
fn split_first_tab(text: &str) -> (&str, Option<&str>) {
    match text.split_once('\t') {
        Some((head, rest)) => (head, Some(rest)),
        None => (text, None),
    }
}

/// Trim a field; empty becomes `None`.
fn optional_field(field: &str) -> Option<String> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Classify one candidate entry line into its logical columns.
///
/// The caller is expected to have filtered out comment, indented, and
/// blank lines already.
///
/// Columns are peeled off front-to-back, each optional step falling back
/// to "no further fields":
/// 1. `source` ends at the first tab; no tab rejects the line.
/// 2. `target` ends at the next tab, or takes the whole remainder.
/// 3. `part` ends at the next tab, or takes the whole remainder.
/// 4. `ling` is everything left, tabs included.
pub fn classify(line: &str) -> Result<ParsedLine, LineReject> {
    let (source, rest) = split_first_tab(line);
    let rest = rest.ok_or(LineReject::NoFieldSeparator)?;

    let (target, rest2) = split_first_tab(rest);
    let (part, ling) = match rest2 {
        Some(rest2) => {
            let (part, ling) = split_first_tab(rest2);
            (optional_field(part), ling.and_then(optional_field))
        }
        None => (None, None),
    };

    let source = source.trim();
    let target = target.trim();
    if source.is_empty() {
        return Err(LineReject::EmptyHeadword);
    }
    if target.is_empty() {
        return Err(LineReject::EmptyTranslation);
    }

    Ok(ParsedLine {
        source: source.to_string(),
        target: target.to_string(),
        part,
        ling,
    })
}
