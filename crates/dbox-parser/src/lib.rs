//! # dbox-parser
//!
//! Table parsing engine for dbox.
//!
//! This crate provides:
//! - Ruler analysis (dialect, column boundaries)
//! - Fixed-width box-table parsing for mysql, psql and psql-unicode output
//! - Delimiter-split parsing as a fallback strategy
//! - A pipeline that picks parsers by strategy
//!
//! ## Architecture
//!
//! This is Layer 1 in the architecture - it depends only on dbox-core.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod boxtable;
pub mod delimited;
pub mod parsing;
pub mod ruler;

// Re-export commonly used types
pub use boxtable::{BoxTableParser, RULER_SCAN_LINES};
pub use delimited::DelimiterSplitParser;
pub use parsing::{ParsePipeline, ParsedTable, TableParser};
pub use ruler::{Anomaly, RulerAnalysis, RulerAnalyzer};
