//! Table dialects and their line layouts.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source tool whose output style a table follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// mysql client: `+---+` rulers above and below, `|` borders on every row
    Mysql,
    /// psql with ASCII line style
    Postgres,
    /// psql with `\pset linestyle unicode`
    PostgresUnicode,
    /// psql-style layout whose ruler has no visible cross (`border=0`, sqlite column mode)
    Sqlite,
}

/// Line layout implied by a dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Layout {
    /// 0-based index of the header line
    pub header_line: usize,
    /// 0-based index of the first data line
    pub first_data_line: usize,
    /// A closing ruler follows the last data line
    pub trailing_ruler: bool,
    /// Row borders must be stripped before slicing
    pub trim_borders: bool,
}

impl Dialect {
    /// Layout facts for this dialect.
    pub fn layout(self) -> Layout {
        match self {
            Dialect::Mysql => Layout {
                header_line: 1,
                first_data_line: 3,
                trailing_ruler: true,
                trim_borders: true,
            },
            Dialect::Postgres | Dialect::PostgresUnicode | Dialect::Sqlite => Layout {
                header_line: 0,
                first_data_line: 2,
                trailing_ruler: false,
                trim_borders: false,
            },
        }
    }

    /// Variant drawn with box-drawing glyphs.
    ///
    /// Only psql has a unicode line style; other dialects are returned as is.
    pub fn unicode(self) -> Self {
        match self {
            Dialect::Postgres => Dialect::PostgresUnicode,
            other => other,
        }
    }

    /// Tag used in logs and serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Mysql => "mysql",
            Dialect::Postgres => "postgres",
            Dialect::PostgresUnicode => "postgres_unicode",
            Dialect::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mysql_layout() {
        let layout = Dialect::Mysql.layout();
        assert_eq!(layout.header_line, 1);
        assert_eq!(layout.first_data_line, 3);
        assert!(layout.trailing_ruler);
        assert!(layout.trim_borders);
    }

    #[test]
    fn test_psql_style_layouts() {
        for dialect in [Dialect::Postgres, Dialect::PostgresUnicode, Dialect::Sqlite] {
            let layout = dialect.layout();
            assert_eq!(layout.header_line, 0);
            assert_eq!(layout.first_data_line, 2);
            assert!(!layout.trailing_ruler);
            assert!(!layout.trim_borders);
        }
    }

    #[test]
    fn test_unicode_upgrade() {
        assert_eq!(Dialect::Postgres.unicode(), Dialect::PostgresUnicode);
        assert_eq!(Dialect::Mysql.unicode(), Dialect::Mysql);
    }

    #[test]
    fn test_dialect_serialization() {
        let json = serde_json::to_string(&Dialect::PostgresUnicode).unwrap();
        assert_eq!(json, "\"postgres_unicode\"");
        assert_eq!(Dialect::PostgresUnicode.to_string(), "postgres_unicode");
    }
}
