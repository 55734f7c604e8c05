//! Ruler analyzer: dialect and column boundaries from a single ruler line.

use serde::Serialize;
use tracing::{debug, warn};

use dbox_core::{ColumnBoundaries, Dialect, Error, Layout, PatternSet, Result};

/// Cosmetic format problem found while analyzing a ruler.
///
/// Anomalies never stop a parse; they are logged and kept on the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Anomaly {
    /// mysql ruler does not start with a cross
    MissingLeftCross,
    /// mysql ruler does not end with a cross
    MissingRightCross,
}

/// Result of analyzing a ruler line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RulerAnalysis {
    /// Detected dialect
    pub dialect: Dialect,
    /// Header and data line positions
    pub layout: Layout,
    /// Column end offsets, relative to the (border-stripped) row
    pub boundaries: ColumnBoundaries,
    /// Character acting as the cross mark, if any
    pub cross: Option<char>,
    /// Non-fatal format anomalies
    pub anomalies: Vec<Anomaly>,
}

/// Ruler analyzer.
#[derive(Debug, Clone, Default)]
pub struct RulerAnalyzer {
    patterns: PatternSet,
}

impl RulerAnalyzer {
    /// Create an analyzer using the built-in pattern set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer using a custom pattern set.
    pub fn with_patterns(patterns: PatternSet) -> Self {
        Self { patterns }
    }

    /// Pattern set in use.
    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Analyze a ruler line.
    ///
    /// `position` is the 1-based line number of the ruler within the input
    /// and `is_ruler` tells whether the line matched the ruler pattern.
    pub fn analyze(&self, line: &str, position: usize, is_ruler: bool) -> Result<RulerAnalysis> {
        if !is_ruler {
            return Err(Error::MissingRuler { scanned: position });
        }

        let ruler: Vec<char> = line.trim_end().chars().collect();
        let classes = self.patterns.classes();

        let (dialect, ruler, anomalies) = match position {
            3 => {
                let (stripped, anomalies) = self.strip_outer_crosses(&ruler);
                (Dialect::Mysql, stripped, anomalies)
            }
            2 if ruler.iter().any(|&c| classes.is_cross(c)) => {
                (Dialect::Postgres, &ruler[..], Vec::new())
            }
            2 => (Dialect::Sqlite, &ruler[..], Vec::new()),
            other => return Err(Error::UnsupportedRulerPosition(other)),
        };

        let cross = self.choose_cross(ruler);
        let dialect = match cross {
            Some(c) if !c.is_ascii() => dialect.unicode(),
            _ => dialect,
        };

        let crosses = cross.map(|c| cross_offsets(ruler, c)).unwrap_or_default();
        let boundaries = ColumnBoundaries::from_crosses(&crosses, ruler.len());

        debug!(
            %dialect,
            ?cross,
            boundaries = ?boundaries.offsets(),
            "analyzed ruler"
        );

        Ok(RulerAnalysis {
            dialect,
            layout: dialect.layout(),
            boundaries,
            cross,
            anomalies,
        })
    }

    /// Strip one leading and one trailing cross from a mysql ruler.
    fn strip_outer_crosses<'a>(&self, ruler: &'a [char]) -> (&'a [char], Vec<Anomaly>) {
        let classes = self.patterns.classes();
        let mut anomalies = Vec::new();
        let mut ruler = ruler;

        match ruler.split_first() {
            Some((&first, rest)) if classes.is_cross(first) => ruler = rest,
            _ => {
                warn!("mysql ruler has no leading cross; column offsets may be shifted");
                anomalies.push(Anomaly::MissingLeftCross);
            }
        }

        match ruler.split_last() {
            Some((&last, rest)) if classes.is_cross(last) => ruler = rest,
            _ => {
                warn!("mysql ruler has no trailing cross");
                anomalies.push(Anomaly::MissingRightCross);
            }
        }

        (ruler, anomalies)
    }

    /// Pick the character acting as the cross mark.
    ///
    /// Cross characters are tried in class order, then a plain space for
    /// rulers that only show alignment gaps.
    fn choose_cross(&self, ruler: &[char]) -> Option<char> {
        self.patterns
            .classes()
            .cross
            .iter()
            .copied()
            .chain(std::iter::once(' '))
            .find(|c| ruler.contains(c))
    }
}

/// Offsets of every occurrence of `cross` in the ruler.
fn cross_offsets(ruler: &[char], cross: char) -> Vec<usize> {
    ruler
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c == cross)
        .map(|(i, _)| i)
        .collect()
}
