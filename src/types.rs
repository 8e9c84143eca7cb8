//! Core data types for the converter.
//!
//! An [`Entry`] is one source-to-target translation unit; a
//! [`LanguagePair`] carries the metadata for the generated document.

use crate::error::{ConvertError, Result};

/// A single dictionary entry.
///
/// Created only by the classifier during parsing, stored once in the
/// entry store, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// 1-based sequence number of accepted lines, gap-free in file order.
    pub id: i64,

    /// Headword in the source language. Non-empty after trimming.
    pub source: String,

    /// Translation in the target language. Non-empty after trimming.
    pub target: String,

    /// Part of speech, when the line carried a third column.
    pub part: Option<String>,

    /// Linguistic/usage annotation, when the line carried a fourth column.
    pub ling: Option<String>,
}

impl Entry {
    /// Create a new entry.
    #[must_use]
    pub fn new(
        id: i64,
        source: impl Into<String>,
        target: impl Into<String>,
        part: Option<String>,
        ling: Option<String>,
    ) -> Self {
        Self {
            id,
            source: source.into(),
            target: target.into(),
            part,
            ling,
        }
    }
}

/// Supported dictionary languages.
///
/// The table is fixed: language metadata in the output document is only
/// ever produced for codes listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    German,
    Bulgarian,
    Russian,
}

impl Language {
    /// Parse a two-letter language code (case-insensitive).
    ///
    /// # Examples
    /// ```
    /// use dictcc_xdxf::types::Language;
    ///
    /// assert_eq!(Language::from_code("DE").unwrap(), Language::German);
    /// assert!(Language::from_code("XX").is_err());
    /// ```
    pub fn from_code(code: &str) -> Result<Self> {
        match code.to_uppercase().as_str() {
            "EN" => Ok(Self::English),
            "DE" => Ok(Self::German),
            "BG" => Ok(Self::Bulgarian),
            "RU" => Ok(Self::Russian),
            _ => Err(ConvertError::UnknownLanguage(code.to_string())),
        }
    }

    /// The two-letter code used in titles and the `languages` block.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "EN",
            Self::German => "DE",
            Self::Bulgarian => "BG",
            Self::Russian => "RU",
        }
    }

    /// Full display name used in the document's full title.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::German => "German",
            Self::Bulgarian => "Bulgarian",
            Self::Russian => "Russian",
        }
    }
}

/// Ordered (source, target) language pair for the output document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguagePair {
    pub from: Language,
    pub to: Language,
}

impl LanguagePair {
    /// Resolve a pair of codes against the supported table.
    ///
    /// Fails with [`ConvertError::UnknownLanguage`] on the first code that
    /// is not in the table.
    pub fn from_codes(from: &str, to: &str) -> Result<Self> {
        Ok(Self {
            from: Language::from_code(from)?,
            to: Language::from_code(to)?,
        })
    }

    /// Short title, e.g. `DE-BG dict`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{}-{} dict", self.from.code(), self.to.code())
    }

    /// Full title, e.g. `German-Bulgarian dictionary based on dict.cc`.
    #[must_use]
    pub fn full_title(&self) -> String {
        format!(
            "{}-{} dictionary based on dict.cc",
            self.from.display_name(),
            self.to.display_name()
        )
    }
}
