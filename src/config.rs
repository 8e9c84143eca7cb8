//! Configuration constants and validation helpers for the converter.

use std::path::Path;

use encoding_rs::Encoding;

use crate::error::{ConvertError, Result};

/// Input file name expected inside the dictionary directory.
pub const DICT_FILE_NAME: &str = "dict.txt";

/// SQLite store file name written next to the input.
pub const DB_FILE_NAME: &str = "lex.db";

/// XDXF output file name written next to the input.
pub const XDXF_FILE_NAME: &str = "dict.xdxf";

/// XDXF format revision emitted on the root element.
pub const XDXF_REVISION: &str = "34";

/// DOCTYPE system identifier for the XDXF format standard.
pub const XDXF_DOCTYPE_URL: &str =
    "https://github.com/soshial/xdxf_makedict/tree/master/format_standard";

/// Default text encoding label for input and output files.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Default language pair codes (source, target).
pub const DEFAULT_LANGUAGES: (&str, &str) = ("DE", "BG");

/// Resolve a text encoding label against the WHATWG encoding set.
///
/// # Examples
/// ```
/// use dictcc_xdxf::config::resolve_encoding;
///
/// assert!(resolve_encoding("utf-8").is_ok());
/// assert!(resolve_encoding("windows-1252").is_ok());
/// assert!(resolve_encoding("not-an-encoding").is_err());
/// ```
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.as_bytes())
        .ok_or_else(|| ConvertError::UnknownEncoding(label.to_string()))
}

/// Check that `dir` exists and is a directory before any work starts.
pub fn validate_dictionary_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Err(ConvertError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Dictionary directory does not exist: {}", dir.display()),
        )));
    }
    if !dir.is_dir() {
        return Err(ConvertError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Dictionary path is not a directory: {}", dir.display()),
        )));
    }
    Ok(())
}
