//! Dictionary text file parsing.
//!
//! Reads the tab-delimited source file in one pass, skips non-entry
//! lines, classifies the rest, and appends accepted entries to the
//! store with gap-free 1-based ids. Malformed lines are dropped and
//! counted; only stream-level failures abort the run.

use std::fs;
use std::path::Path;

use encoding_rs::Encoding;

use crate::classify::classify;
use crate::error::{ConvertError, Result};
use crate::store::EntryStore;
use crate::types::Entry;

/// Outcome of one parse pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseSummary {
    /// Entries accepted and stored.
    pub accepted: u64,

    /// Candidate lines dropped by the classifier.
    pub rejected: u64,
}

/// A line is a candidate entry unless it is blank, a `#` comment, or
/// indented (continuation lines start with a space or tab).
fn is_candidate(line: &str) -> bool {
    !(line.is_empty() || line.starts_with(['#', ' ', '\t']))
}

/// Parse a dictionary text file into the store.
///
/// The file is decoded with `encoding` before any line is examined;
/// malformed byte sequences fail the whole run with
/// [`ConvertError::Encoding`].
pub fn parse_dict_file(
    path: &Path,
    encoding: &'static Encoding,
    store: &EntryStore,
) -> Result<ParseSummary> {
    let bytes = fs::read(path)?;
    let (text, _, had_errors) = encoding.decode(&bytes);
    if had_errors {
        return Err(ConvertError::Encoding {
            path: path.to_path_buf(),
            encoding: encoding.name().to_string(),
        });
    }

    let mut summary = ParseSummary::default();
    for (line_no, line) in text.lines().enumerate() {
        let line_no = line_no + 1;
        if !is_candidate(line) {
            continue;
        }
        match classify(line) {
            Ok(parsed) => {
                let id = summary.accepted as i64 + 1;
                store.append(&Entry::new(
                    id,
                    parsed.source,
                    parsed.target,
                    parsed.part,
                    parsed.ling,
                ))?;
                summary.accepted += 1;
            }
            Err(reject) => {
                tracing::debug!(line = line_no, reason = %reject, "Dropped malformed line");
                summary.rejected += 1;
            }
        }
    }

    tracing::info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        "Parsed {}",
        path.display()
    );
    Ok(summary)
}
