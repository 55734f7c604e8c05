//! Delimiter-split parser.
//!
//! Fallback strategy that ignores ruler geometry and splits each row on
//! delimiter characters bracketed by whitespace. Rule lines, blank lines and
//! footers carry no such delimiter and drop out on their own. Values that
//! themselves contain ` | ` get split; prefer [`crate::BoxTableParser`].

use tracing::debug;

use dbox_core::{PatternSet, Result, RowMatrix};

use crate::parsing::{ParsedTable, TableParser};

/// Delimiter-split parser.
#[derive(Debug, Clone, Default)]
pub struct DelimiterSplitParser {
    patterns: PatternSet,
}

impl DelimiterSplitParser {
    /// Create a parser using the built-in pattern set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser using a custom pattern set.
    pub fn with_patterns(patterns: PatternSet) -> Self {
        Self { patterns }
    }

    /// Split a trimmed line on whitespace-bracketed delimiters.
    fn split_fields(&self, line: &str) -> Vec<String> {
        let classes = self.patterns.classes();
        let chars: Vec<(usize, char)> = line.char_indices().collect();
        let mut fields = Vec::new();
        let mut start = 0;

        for (i, &(offset, c)) in chars.iter().enumerate() {
            if !classes.is_delimiter(c) {
                continue;
            }

            let spaced_before = i == 0 || chars[i - 1].1.is_whitespace();
            let spaced_after = chars.get(i + 1).map_or(true, |&(_, next)| next.is_whitespace());

            if spaced_before && spaced_after {
                fields.push(line[start..offset].trim().to_string());
                start = offset + c.len_utf8();
            }
        }

        fields.push(line[start..].trim().to_string());
        fields
    }
}

impl TableParser for DelimiterSplitParser {
    fn name(&self) -> &'static str {
        "split"
    }

    fn parse(&self, text: &str) -> Result<ParsedTable> {
        let rows: Vec<Vec<String>> = text
            .lines()
            .map(|line| self.patterns.strip_borders(line))
            .filter(|line| self.patterns.has_delimiter_run(line))
            .map(|line| self.split_fields(line.trim()))
            .collect();

        let matrix = RowMatrix::from_rows(rows);
        debug!(
            columns = matrix.width(),
            rows = matrix.data_len(),
            "parsed by delimiter splitting"
        );

        Ok(ParsedTable::new(self.name(), matrix, None))
    }
}
