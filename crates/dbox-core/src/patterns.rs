//! Compiled pattern set used by the table parsers.
//!
//! [`PatternConfig`] is the serializable description (character tables plus
//! optional regex overrides); [`PatternSet`] is the immutable compiled form
//! handed to a parser. Border patterns are expected to be anchored: the left
//! one at the start of a line, the right one at the end.

use lazy_static::lazy_static;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::charset::CharClasses;

lazy_static! {
    static ref DEFAULT_PATTERNS: PatternSet = PatternSet::compile(&PatternConfig::default())
        .expect("built-in pattern set must compile");
}

/// Serializable pattern configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PatternConfig {
    /// Character class tables
    #[serde(flatten)]
    pub classes: CharClasses,
    /// Left border regex (default: a delimiter at line start)
    pub left_border: Option<String>,
    /// Right border regex (default: a delimiter at line end)
    pub right_border: Option<String>,
    /// Trailing footer lines to drop, e.g. psql's `(3 rows)`
    pub footers: Vec<String>,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            classes: CharClasses::default(),
            left_border: None,
            right_border: None,
            footers: vec![
                r"^\(\d+ rows?\)$".to_string(),
                r"^\d+ rows? in set\b".to_string(),
            ],
        }
    }
}

/// Immutable, compiled set of patterns.
#[derive(Debug, Clone)]
pub struct PatternSet {
    classes: CharClasses,
    ruler: Regex,
    left_border: Regex,
    right_border: Regex,
    delimiter_run: Regex,
    footers: Vec<Regex>,
}

/// Build a regex character class body from literal characters.
fn class_body(chars: &[char]) -> String {
    chars
        .iter()
        .map(|c| format!("\\x{{{:X}}}", *c as u32))
        .collect()
}

impl PatternSet {
    /// Compile a pattern configuration.
    pub fn compile(config: &PatternConfig) -> crate::Result<Self> {
        config.classes.validate()?;

        let horizontal = class_body(&config.classes.horizontal);
        let delimiter = class_body(&config.classes.delimiter);

        let ruler = Regex::new(&format!(
            r"^[\s{horizontal}]*[{horizontal}][\s{horizontal}]*$"
        ))?;
        let left_border = match &config.left_border {
            Some(pattern) => Regex::new(pattern)?,
            None => Regex::new(&format!("^[{delimiter}]"))?,
        };
        let right_border = match &config.right_border {
            Some(pattern) => Regex::new(pattern)?,
            None => Regex::new(&format!(r"[{delimiter}]\s*$"))?,
        };
        let delimiter_run = Regex::new(&format!(r"\s[{delimiter}]\s"))?;
        let footers = config
            .footers
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            classes: config.classes.clone(),
            ruler,
            left_border,
            right_border,
            delimiter_run,
            footers,
        })
    }

    /// Shared default pattern set.
    pub fn builtin() -> &'static PatternSet {
        &DEFAULT_PATTERNS
    }

    /// Character class tables.
    pub fn classes(&self) -> &CharClasses {
        &self.classes
    }

    /// Check if a line consists solely of rule characters and whitespace.
    pub fn is_ruler(&self, line: &str) -> bool {
        self.ruler.is_match(line)
    }

    /// Check if a line has a whitespace-bracketed delimiter.
    pub fn has_delimiter_run(&self, line: &str) -> bool {
        self.delimiter_run.is_match(line)
    }

    /// Check if a line is a result footer.
    pub fn is_footer(&self, line: &str) -> bool {
        let line = line.trim();
        self.footers.iter().any(|re| re.is_match(line))
    }

    /// Strip the left and right border patterns from a row.
    pub fn strip_borders<'a>(&self, line: &'a str) -> &'a str {
        let start = self.left_border.find(line).map_or(0, |m| m.end());
        let rest = &line[start..];
        let end = self
            .right_border
            .find(rest)
            .map_or(rest.len(), |m| m.start());
        &rest[..end]
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
