//! dictcc-xdxf - Convert tab-delimited word lists to XDXF dictionaries.
//!
//! This crate reads dict.cc style bilingual word lists (one entry per
//! line, up to four tab-separated columns), stores the entries in a
//! SQLite database, and renders the store as an XDXF dictionary
//! document for offline dictionary readers.
//!
//! # Example
//!
//! ```
//! use dictcc_xdxf::classify::classify;
//!
//! let parsed = classify("hello\tworld\tnoun").unwrap();
//! assert_eq!(parsed.source, "hello");
//! assert_eq!(parsed.part.as_deref(), Some("noun"));
//! ```
//!
//! # Architecture
//!
//! The converter is organized into several modules:
//!
//! - [`config`]: Constants, encoding resolution, and validation
//! - [`types`]: Core data types (Entry, Language, LanguagePair)
//! - [`error`]: Error types and Result alias
//! - [`classify`]: Line classification into logical columns
//! - [`parser`]: Dictionary text file parsing
//! - [`store`]: SQLite-backed ordered entry store
//! - [`xdxf`]: XDXF escaping and document generation
//! - [`converter`]: End-to-end conversion pipeline
//! - [`cli`]: Command-line interface

pub mod classify;
pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod parser;
pub mod store;
pub mod types;
pub mod xdxf;

// Re-export main functions
pub use converter::{convert_directory, ConvertReport};

// Re-export commonly used items
pub use error::{ConvertError, Result};
pub use store::EntryStore;
pub use types::{Entry, Language, LanguagePair};
