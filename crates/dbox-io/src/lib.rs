//! # dbox-io
//!
//! Input and output collaborators for dbox.
//!
//! This crate provides:
//! - Input sources (file, raw text, stdin) and encoding-aware loading
//! - TSV, CSV and JSON export of a row matrix
//!
//! ## Architecture
//!
//! This is Layer 1 in the architecture - it depends only on dbox-core and
//! never looks inside the parsers.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod export;
pub mod loader;

// Re-export commonly used types
pub use export::{render, to_csv, to_json, to_tsv, write_export, ExportOptions};
pub use loader::{InputSource, Loader};
