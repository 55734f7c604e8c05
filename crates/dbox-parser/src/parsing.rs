//! Core parsing types and traits.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use dbox_core::{Dialect, Error, ParseSettings, Result, RowMatrix, Strategy};

use crate::boxtable::BoxTableParser;
use crate::delimited::DelimiterSplitParser;
use crate::ruler::RulerAnalysis;

/// Table produced by a single parse call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedTable {
    /// Name of the parser that produced the table
    pub parser: &'static str,
    /// Header row followed by data rows
    pub matrix: RowMatrix,
    /// Ruler analysis (box-table parsing only)
    pub ruler: Option<RulerAnalysis>,
}

impl ParsedTable {
    /// Create a parsed table.
    pub fn new(parser: &'static str, matrix: RowMatrix, ruler: Option<RulerAnalysis>) -> Self {
        Self {
            parser,
            matrix,
            ruler,
        }
    }

    /// Header row.
    pub fn header(&self) -> &[String] {
        self.matrix.header()
    }

    /// Row matrix, header first.
    pub fn matrix(&self) -> &RowMatrix {
        &self.matrix
    }

    /// Detected dialect, when a ruler was analyzed.
    pub fn dialect(&self) -> Option<Dialect> {
        self.ruler.as_ref().map(|r| r.dialect)
    }

    /// Consume the table, returning the row matrix.
    pub fn into_matrix(self) -> RowMatrix {
        self.matrix
    }
}

/// Trait for table parsers.
pub trait TableParser: Send + Sync {
    /// Parser name for debugging/logging.
    fn name(&self) -> &'static str;

    /// Parse a whole text block.
    fn parse(&self, text: &str) -> Result<ParsedTable>;
}

/// Runs parsers in order; a later parser is tried only when the previous
/// one found no ruler.
pub struct ParsePipeline {
    parsers: Vec<Arc<dyn TableParser>>,
}

impl ParsePipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self {
            parsers: Vec::new(),
        }
    }

    /// Build the pipeline for a strategy from parse settings.
    pub fn from_settings(settings: &ParseSettings) -> Result<Self> {
        let patterns = settings.patterns()?;
        let box_parser = Arc::new(
            BoxTableParser::with_patterns(patterns.clone()).skip_footer(settings.skip_footer),
        );
        let split_parser = Arc::new(DelimiterSplitParser::with_patterns(patterns));

        let mut pipeline = Self::new();
        match settings.strategy {
            Strategy::Box => pipeline.add_parser(box_parser),
            Strategy::Split => pipeline.add_parser(split_parser),
            Strategy::Auto => {
                pipeline.add_parser(box_parser);
                pipeline.add_parser(split_parser);
            }
        }

        Ok(pipeline)
    }

    /// Append a parser to the pipeline.
    pub fn add_parser(&mut self, parser: Arc<dyn TableParser>) {
        self.parsers.push(parser);
    }

    /// Names of the parsers, in run order.
    pub fn parser_names(&self) -> Vec<&'static str> {
        self.parsers.iter().map(|p| p.name()).collect()
    }

    /// Parse text with the first parser that recognizes it.
    pub fn parse(&self, text: &str) -> Result<ParsedTable> {
        let mut last_err = Error::MissingRuler { scanned: 0 };

        for parser in &self.parsers {
            match parser.parse(text) {
                Err(err @ Error::MissingRuler { .. }) => {
                    info!(parser = parser.name(), "{err}; trying next parser");
                    last_err = err;
                }
                result => return result,
            }
        }

        Err(last_err)
    }
}

impl Default for ParsePipeline {
    fn default() -> Self {
        let mut pipeline = Self::new();
        pipeline.add_parser(Arc::new(BoxTableParser::new()));
        pipeline
    }
}
