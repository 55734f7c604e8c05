//! Box-table parser: fixed-width field slicing driven by the ruler line.

use tracing::{debug, warn};

use dbox_core::{Error, PatternSet, Result, RowMatrix};

use crate::parsing::{ParsedTable, TableParser};
use crate::ruler::{RulerAnalysis, RulerAnalyzer};

/// 0-based line indices searched for the ruler.
///
/// psql puts its ruler on the 2nd line, mysql on the 3rd.
pub const RULER_SCAN_LINES: [usize; 2] = [1, 2];

/// Box-table parser for mysql, psql and psql-unicode output.
#[derive(Debug, Clone)]
pub struct BoxTableParser {
    analyzer: RulerAnalyzer,
    skip_footer: bool,
}

impl BoxTableParser {
    /// Create a parser using the built-in pattern set.
    pub fn new() -> Self {
        Self::with_patterns(PatternSet::default())
    }

    /// Create a parser using a custom pattern set.
    pub fn with_patterns(patterns: PatternSet) -> Self {
        Self {
            analyzer: RulerAnalyzer::with_patterns(patterns),
            skip_footer: true,
        }
    }

    /// Keep or drop trailing footer lines such as `(3 rows)`.
    pub fn skip_footer(mut self, skip: bool) -> Self {
        self.skip_footer = skip;
        self
    }

    fn patterns(&self) -> &PatternSet {
        self.analyzer.patterns()
    }

    /// Split text into lines, dropping the trailing empty lines and footer.
    ///
    /// Only zero-length lines are dropped: a whitespace-only line is an
    /// all-empty data row.
    fn content_lines<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut lines: Vec<&str> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        let has_footer = lines
            .last()
            .is_some_and(|line| self.patterns().is_footer(line));
        if self.skip_footer && has_footer {
            lines.pop();
        }

        lines
    }

    /// Find the ruler among the scanned lines.
    ///
    /// Returns the 1-based line position and the line itself.
    fn find_ruler<'a>(&self, lines: &[&'a str]) -> Option<(usize, &'a str)> {
        RULER_SCAN_LINES.iter().find_map(|&index| {
            lines
                .get(index)
                .filter(|line| self.patterns().is_ruler(line))
                .map(|line| (index + 1, *line))
        })
    }

    /// Slice one row into trimmed fields at the column boundaries.
    fn slice_row(&self, line: &str, analysis: &RulerAnalysis) -> Vec<String> {
        let line = if analysis.layout.trim_borders {
            self.patterns().strip_borders(line)
        } else {
            line
        };
        let chars: Vec<char> = line.chars().collect();

        analysis
            .boundaries
            .spans()
            .map(|(start, end)| {
                let end = end.min(chars.len());
                let start = start.min(end);
                chars[start..end]
                    .iter()
                    .collect::<String>()
                    .trim()
                    .to_string()
            })
            .collect()
    }

    /// Index of the last data line.
    fn last_data_line(&self, lines: &[&str], analysis: &RulerAnalysis) -> usize {
        let last = lines.len().saturating_sub(1);
        if !analysis.layout.trailing_ruler {
            return last;
        }

        match lines.last() {
            Some(line) if self.patterns().is_ruler(line) => last.saturating_sub(1),
            _ => {
                warn!(
                    dialect = %analysis.dialect,
                    "closing ruler missing; keeping last line as data"
                );
                last
            }
        }
    }
}

impl Default for BoxTableParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TableParser for BoxTableParser {
    fn name(&self) -> &'static str {
        "box"
    }

    fn parse(&self, text: &str) -> Result<ParsedTable> {
        let lines = self.content_lines(text);

        let (position, ruler) = self.find_ruler(&lines).ok_or(Error::MissingRuler {
            scanned: lines.len().min(RULER_SCAN_LINES[1] + 1),
        })?;
        let analysis = self.analyzer.analyze(ruler, position, true)?;
        let layout = analysis.layout;

        let header = lines
            .get(layout.header_line)
            .map(|line| self.slice_row(line, &analysis))
            .unwrap_or_default();
        let mut matrix = RowMatrix::new(header);

        let last = self.last_data_line(&lines, &analysis);
        for line in lines
            .iter()
            .take(last + 1)
            .skip(layout.first_data_line)
        {
            matrix.push(self.slice_row(line, &analysis));
        }

        debug!(
            dialect = %analysis.dialect,
            columns = matrix.width(),
            rows = matrix.data_len(),
            "parsed box-table"
        );

        Ok(ParsedTable::new(self.name(), matrix, Some(analysis)))
    }
}
