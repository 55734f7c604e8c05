//! Character classification for box-table rule, cross and delimiter glyphs.
//!
//! Membership is table-driven: each class is a closed list of code points.
//! The default tables cover mysql/psql ASCII output and the psql
//! `linestyle=unicode` variant.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Box drawings light horizontal (U+2500).
pub const LIGHT_HORIZONTAL: char = '─';
/// Box drawings light vertical and horizontal (U+253C).
pub const LIGHT_CROSS: char = '┼';
/// Box drawings light vertical (U+2502).
pub const LIGHT_VERTICAL: char = '│';

/// Classes a single code point belongs to.
///
/// A code point may sit in several classes at once: `+` is both a
/// horizontal-rule character and a cross.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
    /// Part of a horizontal rule
    pub horizontal: bool,
    /// Ruler/column intersection mark
    pub cross: bool,
    /// Column delimiter in header and data rows
    pub delimiter: bool,
}

impl Classification {
    /// True when the code point belongs to no class.
    pub fn is_none(&self) -> bool {
        !self.horizontal && !self.cross && !self.delimiter
    }
}

/// Membership tables for the three character classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CharClasses {
    /// Characters allowed in a ruler line
    pub horizontal: Vec<char>,
    /// Cross characters, in detection order
    pub cross: Vec<char>,
    /// Column delimiters
    pub delimiter: Vec<char>,
}

impl Default for CharClasses {
    fn default() -> Self {
        Self {
            horizontal: vec!['-', '+', LIGHT_HORIZONTAL, LIGHT_CROSS],
            cross: vec!['+', LIGHT_CROSS],
            delimiter: vec!['|', LIGHT_VERTICAL],
        }
    }
}

impl CharClasses {
    /// Classify one code point.
    pub fn classify(&self, c: char) -> Classification {
        Classification {
            horizontal: self.is_horizontal(c),
            cross: self.is_cross(c),
            delimiter: self.is_delimiter(c),
        }
    }

    /// Check if `c` is a horizontal-rule character.
    pub fn is_horizontal(&self, c: char) -> bool {
        self.horizontal.contains(&c)
    }

    /// Check if `c` is a cross character.
    pub fn is_cross(&self, c: char) -> bool {
        self.cross.contains(&c)
    }

    /// Check if `c` is a column delimiter.
    pub fn is_delimiter(&self, c: char) -> bool {
        self.delimiter.contains(&c)
    }

    /// Check the tables are usable for parsing.
    pub fn validate(&self) -> crate::Result<()> {
        for (name, class) in [
            ("horizontal", &self.horizontal),
            ("cross", &self.cross),
            ("delimiter", &self.delimiter),
        ] {
            if class.is_empty() {
                return Err(crate::Error::Config(format!(
                    "{name} character class cannot be empty"
                )));
            }
            if let Some(c) = class.iter().find(|c| c.is_whitespace()) {
                return Err(crate::Error::Config(format!(
                    "{name} character class cannot contain whitespace ({c:?})"
                )));
            }
        }

        Ok(())
    }
}
