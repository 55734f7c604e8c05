//! # dbox-core
//!
//! Core types for dbox.
//!
//! This crate contains all fundamental types with **no internal dependencies**
//! on other dbox crates. It provides:
//!
//! - Character classification for rule, cross and delimiter glyphs
//! - Compiled pattern sets (ruler, borders, footers)
//! - Dialects and their line layouts
//! - Column boundaries and the row matrix
//! - Configuration and error types
//!
//! ## Architecture
//!
//! This is Layer 0 in the architecture - all other crates depend on this one,
//! but this crate has no dependencies on other dbox crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod charset;
pub mod config;
pub mod dialect;
pub mod error;
pub mod patterns;
pub mod table;

// Re-export commonly used types
pub use charset::{CharClasses, Classification};
pub use config::{
    DboxConfig, ExportFormat, ExportSettings, InputSettings, ParseSettings, Strategy,
};
pub use dialect::{Dialect, Layout};
pub use error::{Error, Result};
pub use patterns::{PatternConfig, PatternSet};
pub use table::{ColumnBoundaries, RowMatrix};
