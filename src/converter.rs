//! End-to-end conversion pipeline.
//!
//! Ties the components together: resolve and validate the configuration,
//! parse `dict.txt` into `lex.db`, then render `dict.xdxf`. The two
//! phases are strictly sequential; the parse fully drains the input
//! before rendering begins.

use std::path::{Path, PathBuf};

use crate::config::{
    resolve_encoding, validate_dictionary_dir, DB_FILE_NAME, DICT_FILE_NAME, XDXF_FILE_NAME,
};
use crate::error::Result;
use crate::parser::parse_dict_file;
use crate::store::EntryStore;
use crate::types::LanguagePair;
use crate::xdxf::save_xdxf;

/// Outcome of a completed conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    /// Entries accepted into the store.
    pub accepted: u64,

    /// Malformed candidate lines dropped during parsing.
    pub rejected: u64,

    /// Path of the SQLite store.
    pub db_path: PathBuf,

    /// Path of the generated XDXF file.
    pub xdxf_path: PathBuf,
}

/// Convert the dictionary in `dir` to an XDXF file.
///
/// Expects `dir/dict.txt`; produces `dir/lex.db` and `dir/dict.xdxf`.
/// Configuration is validated up front, so an unknown encoding label or
/// language code fails before any file is created.
///
/// # Arguments
/// * `dir` - Directory containing `dict.txt`
/// * `encoding_label` - Text encoding for input and output (WHATWG label)
/// * `from`/`to` - Language codes of the dictionary's source and target
pub fn convert_directory(
    dir: &Path,
    encoding_label: &str,
    from: &str,
    to: &str,
) -> Result<ConvertReport> {
    validate_dictionary_dir(dir)?;
    let encoding = resolve_encoding(encoding_label)?;
    let languages = LanguagePair::from_codes(from, to)?;

    let dict_path = dir.join(DICT_FILE_NAME);
    let db_path = dir.join(DB_FILE_NAME);
    let xdxf_path = dir.join(XDXF_FILE_NAME);

    let store = EntryStore::create(&db_path)?;
    let summary = parse_dict_file(&dict_path, encoding, &store)?;
    save_xdxf(&store, &languages, encoding, &xdxf_path)?;

    Ok(ConvertReport {
        accepted: summary.accepted,
        rejected: summary.rejected,
        db_path,
        xdxf_path,
    })
}
