//! End-to-end integration tests for the conversion pipeline.
//!
//! Runs the full pipeline on a DE-BG fixture word list and checks the
//! store contents and the generated XDXF document.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;

use dictcc_xdxf::convert_directory;
use dictcc_xdxf::converter::ConvertReport;

/// Copy the fixture word list into a fresh directory and convert it.
fn run_pipeline(dir: &Path) -> ConvertReport {
    let fixture = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("de_bg")
        .join("dict.txt");
    fs::copy(&fixture, dir.join("dict.txt"))
        .unwrap_or_else(|e| panic!("Failed to copy {}: {}", fixture.display(), e));

    convert_directory(dir, "utf-8", "DE", "BG").unwrap_or_else(|e| panic!("Conversion failed: {e}"))
}

#[test]
fn test_fixture_counts() {
    let dir = tempfile::tempdir().unwrap();
    let report = run_pipeline(dir.path());

    // 5 entry lines; "no separator line" and "leer\t" are dropped;
    // comments, the blank line, and the indented line never count.
    assert_eq!(report.accepted, 5);
    assert_eq!(report.rejected, 2);
}

#[test]
fn test_store_contents_match_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let report = run_pipeline(dir.path());

    let conn = rusqlite::Connection::open(&report.db_path).unwrap();
    let mut stmt = conn
        .prepare("SELECT id, source, target, part, ling FROM lex ORDER BY id ASC")
        .unwrap();
    let rows: Vec<(i64, String, String, Option<String>, Option<String>)> = stmt
        .query_map([], |r| {
            Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?, r.get(4)?))
        })
        .unwrap()
        .map(|r| r.unwrap())
        .collect();

    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].0, 1);
    assert_eq!(rows[0].1, "Hund {m}");
    assert_eq!(rows[0].2, "куче {ср}");
    assert_eq!(rows[0].3.as_deref(), Some("noun"));
    // Trailing empty fourth column is absence, not an empty string
    assert_eq!(rows[0].4, None);

    assert_eq!(rows[1].3.as_deref(), Some("noun"));
    assert_eq!(rows[1].4.as_deref(), Some("zool."));

    // Two-column entry: both optionals absent
    assert_eq!(rows[3].1, "Miau & Wow");
    assert_eq!(rows[3].3, None);
    assert_eq!(rows[3].4, None);

    // Empty third column with populated fourth: ling keeps its inner tab
    assert_eq!(rows[4].1, "danke");
    assert_eq!(rows[4].3, None);
    assert_eq!(rows[4].4.as_deref(), Some("ugs.\tveraltet"));

    // Ids are gap-free over accepted lines
    assert_eq!(rows.iter().map(|r| r.0).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_xdxf_document_structure() {
    let dir = tempfile::tempdir().unwrap();
    let report = run_pipeline(dir.path());

    let xdxf = fs::read_to_string(&report.xdxf_path).unwrap();

    assert!(xdxf.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>"));
    assert!(xdxf.contains("<xdxf revision=\"34\">"));
    assert!(xdxf.contains("<title>DE-BG dict</title>"));
    assert!(xdxf.contains("<full_title>German-Bulgarian dictionary based on dict.cc</full_title>"));
    assert!(xdxf.contains("<languages><from>DE</from><to>BG</to></languages>"));
    assert!(xdxf.trim_end().ends_with("</lexicon></xdxf>"));

    // Markup characters in entry text are escaped
    assert!(xdxf.contains("<ar><k>Miau &amp; Wow</k>"));
    assert!(xdxf.contains("<deftext cmt=\"\">Мяу &amp; Бау</deftext><gr></gr>"));
    // Absent part renders as empty element text, present part verbatim
    assert!(xdxf.contains("<deftext cmt=\"zool.\">котка {ж}</deftext><gr>noun</gr>"));
}

#[test]
fn test_xdxf_is_well_formed_and_ordered() {
    let dir = tempfile::tempdir().unwrap();
    let report = run_pipeline(dir.path());

    let xdxf = fs::read_to_string(&report.xdxf_path).unwrap();
    // roxmltree rejects DTDs by default; parse from the root element on
    let start = xdxf.find("<xdxf").unwrap();
    let doc = roxmltree::Document::parse(&xdxf[start..]).unwrap();

    let headwords: Vec<&str> = doc
        .descendants()
        .filter(|n| n.has_tag_name("k"))
        .filter_map(|n| n.text())
        .collect();
    assert_eq!(
        headwords,
        vec!["Hund {m}", "Katze {f}", "gehen", "Miau & Wow", "danke"]
    );
}

#[test]
fn test_rerun_is_repeatable() {
    // A second run replaces lex.db and dict.xdxf instead of failing.
    let dir = tempfile::tempdir().unwrap();
    let first = run_pipeline(dir.path());
    let second = convert_directory(dir.path(), "utf-8", "DE", "BG").unwrap();

    assert_eq!(first.accepted, second.accepted);
    let xdxf = fs::read_to_string(&second.xdxf_path).unwrap();
    assert_eq!(xdxf.matches("<ar>").count(), 5);
}
