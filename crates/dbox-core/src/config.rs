//! Configuration types for dbox.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::patterns::{PatternConfig, PatternSet};

/// dbox configuration loaded from a YAML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
#[serde(default)]
pub struct DboxConfig {
    /// Input settings
    pub input: InputSettings,
    /// Parse settings
    pub parse: ParseSettings,
    /// Export settings
    pub export: ExportSettings,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: Option<String>,
}

impl DboxConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    pub fn from_yaml(yaml: &str) -> crate::Result<Self> {
        let config: DboxConfig =
            serde_yaml::from_str(yaml).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> crate::Result<()> {
        if self.input.encoding.trim().is_empty() {
            return Err(crate::Error::Config(
                "input.encoding cannot be empty".to_string(),
            ));
        }

        // Compiling checks both the character tables and the regex overrides
        self.parse.patterns()?;

        Ok(())
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> crate::Result<String> {
        let schema = schemars::schema_for!(DboxConfig);
        Ok(serde_json::to_string_pretty(&schema)?)
    }
}

/// Input settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct InputSettings {
    /// Encoding label (WHATWG names, e.g. `utf-8`, `latin1`, `shift_jis`)
    pub encoding: String,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            encoding: "utf-8".to_string(),
        }
    }
}

/// Parsing strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Fixed-width slicing driven by the ruler line
    #[default]
    Box,
    /// Split rows on whitespace-bracketed delimiters
    Split,
    /// Ruler slicing, falling back to delimiter splitting when no ruler exists
    Auto,
}

/// Parse settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ParseSettings {
    /// Parsing strategy
    pub strategy: Strategy,
    /// Drop trailing footer lines such as `(3 rows)`
    pub skip_footer: bool,
    /// Character tables and pattern overrides
    #[serde(flatten)]
    pub pattern_config: PatternConfig,
}

impl Default for ParseSettings {
    fn default() -> Self {
        Self {
            strategy: Strategy::Box,
            skip_footer: true,
            pattern_config: PatternConfig::default(),
        }
    }
}

impl ParseSettings {
    /// Compile the configured pattern set.
    pub fn patterns(&self) -> crate::Result<PatternSet> {
        if self.pattern_config == PatternConfig::default() {
            return Ok(PatternSet::builtin().clone());
        }
        PatternSet::compile(&self.pattern_config)
    }
}

/// Export format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Tab-separated values
    #[default]
    Tsv,
    /// Comma-separated values
    Csv,
    /// JSON array
    Json,
}

/// Export settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ExportSettings {
    /// Output format
    pub format: ExportFormat,
    /// Emit the header row
    pub header: bool,
    /// Columns to keep, by header name (empty = all)
    pub columns: Vec<String>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            format: ExportFormat::Tsv,
            header: true,
            columns: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DboxConfig::default();
        assert_eq!(config.input.encoding, "utf-8");
        assert_eq!(config.parse.strategy, Strategy::Box);
        assert!(config.parse.skip_footer);
        assert_eq!(config.export.format, ExportFormat::Tsv);
        assert!(config.export.header);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = DboxConfig::from_yaml("{}").unwrap();
        assert_eq!(config.input.encoding, "utf-8");
        assert_eq!(config.parse.pattern_config, PatternConfig::default());
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r#"
input:
  encoding: latin1
parse:
  strategy: auto
  skip_footer: false
export:
  format: csv
  header: false
  columns: [id, amount]
log_level: debug
"#;

        let config = DboxConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.input.encoding, "latin1");
        assert_eq!(config.parse.strategy, Strategy::Auto);
        assert!(!config.parse.skip_footer);
        assert_eq!(config.export.format, ExportFormat::Csv);
        assert!(!config.export.header);
        assert_eq!(config.export.columns, vec!["id", "amount"]);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_pattern_overrides() {
        let yaml = r#"
parse:
  horizontal: ["-", "+", "="]
  cross: ["+"]
  delimiter: ["|"]
  left_border: '^\s*\|'
"#;

        let config = DboxConfig::from_yaml(yaml).unwrap();
        let patterns = config.parse.patterns().unwrap();
        assert!(patterns.is_ruler("===+==="));
        assert!(!patterns.classes().is_cross('┼'));
        assert_eq!(patterns.strip_borders("  | a |"), " a ");
    }

    #[test]
    fn test_invalid_regex_pattern() {
        let yaml = r#"
parse:
  right_border: "([unclosed"
"#;

        let result = DboxConfig::from_yaml(yaml);
        assert!(matches!(result, Err(crate::Error::Pattern(_))));
    }

    #[test]
    fn test_empty_class_rejected() {
        let yaml = r#"
parse:
  cross: []
"#;

        let result = DboxConfig::from_yaml(yaml);
        assert!(matches!(result, Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_empty_encoding_rejected() {
        let yaml = "input:\n  encoding: \"\"\n";
        assert!(DboxConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let yaml = "parse:\n  strategy: guess\n";
        assert!(matches!(
            DboxConfig::from_yaml(yaml),
            Err(crate::Error::Config(_))
        ));
    }

    #[test]
    fn test_json_schema_mentions_sections() {
        let schema = DboxConfig::json_schema().unwrap();
        assert!(schema.contains("\"input\""));
        assert!(schema.contains("\"parse\""));
        assert!(schema.contains("\"export\""));
    }
}
