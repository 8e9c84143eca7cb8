//! XDXF document generation and saving.

use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::Path;

use encoding_rs::Encoding;

use crate::config::{XDXF_DOCTYPE_URL, XDXF_REVISION};
use crate::error::{ConvertError, Result};
use crate::store::EntryStore;
use crate::types::{Entry, LanguagePair};
use crate::xdxf::escape::escape_xml;

/// Render one entry as an `<ar>` article element.
///
/// Absent `part`/`ling` render as empty text and an empty `cmt`
/// attribute; the attribute is always present.
fn write_article(doc: &mut String, entry: &Entry) {
    let ling = entry.ling.as_deref().unwrap_or("");
    let part = entry.part.as_deref().unwrap_or("");

    // The writeln! target is a String, which cannot fail.
    let _ = writeln!(
        doc,
        "<ar><k>{}</k><def><deftext cmt=\"{}\">{}</deftext><gr>{}</gr></def></ar>",
        escape_xml(&entry.source),
        escape_xml(ling),
        escape_xml(&entry.target),
        escape_xml(part),
    );
}

/// Generate a complete XDXF document from the store.
///
/// Entries appear in ascending id order, which is the source file order
/// minus rejected lines. `encoding` only names the declared encoding;
/// the returned document is a Rust string.
pub fn generate_xdxf(
    store: &EntryStore,
    languages: &LanguagePair,
    encoding: &'static Encoding,
) -> Result<String> {
    let mut doc = String::new();

    let _ = writeln!(
        doc,
        "<?xml version=\"1.0\" encoding=\"{}\" ?>\
         <!DOCTYPE xdxf SYSTEM \"{XDXF_DOCTYPE_URL}\">\n\
         <xdxf revision=\"{XDXF_REVISION}\">\n\
         <meta_info>\n\
         <title>{}</title>\n\
         <full_title>{}</full_title>\n\
         <languages><from>{}</from><to>{}</to></languages></meta_info>\n\
         <lexicon>",
        encoding.name(),
        languages.title(),
        languages.full_title(),
        languages.from.code(),
        languages.to.code(),
    );

    store.scan_ordered(|entry| {
        write_article(&mut doc, &entry);
        Ok(())
    })?;

    doc.push_str("</lexicon></xdxf>\n");
    Ok(doc)
}

/// Generate the XDXF document and save it to `path`.
///
/// The document is encoded with the configured output encoding and
/// written atomically (temp file, sync, rename), so an aborted run never
/// leaves a partial file at the target path.
pub fn save_xdxf(
    store: &EntryStore,
    languages: &LanguagePair,
    encoding: &'static Encoding,
    path: &Path,
) -> Result<()> {
    let doc = generate_xdxf(store, languages, encoding)?;

    let (bytes, _, had_errors) = encoding.encode(&doc);
    if had_errors {
        return Err(ConvertError::Encoding {
            path: path.to_path_buf(),
            encoding: encoding.name().to_string(),
        });
    }

    let temp_path = match (path.parent(), path.file_name()) {
        (Some(dir), Some(name)) => dir.join(format!(".{}.tmp", name.to_string_lossy())),
        _ => {
            return Err(ConvertError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid output path: {}", path.display()),
            )))
        }
    };

    {
        let mut file = File::create(&temp_path)?;
        file.write_all(&bytes)?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_path, path)?;
    Ok(())
}
