//! Command-line interface: loader → parser → exporter.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use tracing::{info, warn};

use dbox_core::{DboxConfig, ExportFormat, Strategy};
use dbox_io::{write_export, ExportOptions, InputSource, Loader};
use dbox_parser::ParsePipeline;

/// Output format flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Tab-separated values
    Tsv,
    /// Comma-separated values
    Csv,
    /// JSON array
    Json,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Tsv => ExportFormat::Tsv,
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Json => ExportFormat::Json,
        }
    }
}

/// Parsing strategy flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Fixed-width slicing driven by the ruler line
    Box,
    /// Split rows on whitespace-bracketed delimiters
    Split,
    /// Ruler slicing with delimiter splitting as fallback
    Auto,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Box => Strategy::Box,
            StrategyArg::Split => Strategy::Split,
            StrategyArg::Auto => Strategy::Auto,
        }
    }
}

/// Convert mysql/psql SELECT output into TSV, CSV or JSON.
#[derive(Debug, Parser)]
#[command(name = "dbox", version, about)]
pub struct Cli {
    /// Input file (`-` reads standard input)
    pub file: Option<PathBuf>,

    /// Parse this text instead of a file
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Input encoding label (default utf-8)
    #[arg(short, long)]
    pub encoding: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Parsing strategy
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Only export these columns, by header name
    #[arg(short, long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Omit the header row
    #[arg(long)]
    pub no_header: bool,

    /// Keep trailing footer lines such as `(3 rows)`
    #[arg(long)]
    pub no_skip_footer: bool,

    /// YAML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write output here instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the detected dialect and column boundaries to stderr
    #[arg(long)]
    pub explain: bool,

    /// Print the configuration file JSON schema and exit
    #[arg(long)]
    pub print_config_schema: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Load the configuration file (if any) and apply flag overrides.
    pub fn resolve_config(&self) -> anyhow::Result<DboxConfig> {
        let mut config = match &self.config {
            Some(path) => DboxConfig::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => DboxConfig::default(),
        };

        if let Some(encoding) = &self.encoding {
            config.input.encoding = encoding.clone();
        }
        if let Some(format) = self.format {
            config.export.format = format.into();
        }
        if let Some(strategy) = self.strategy {
            config.parse.strategy = strategy.into();
        }
        if !self.columns.is_empty() {
            config.export.columns = self.columns.clone();
        }
        if self.no_header {
            config.export.header = false;
        }
        if self.no_skip_footer {
            config.parse.skip_footer = false;
        }

        config.validate()?;
        Ok(config)
    }

    /// Default log filter directive.
    pub fn log_level(&self, config: &DboxConfig) -> String {
        match self.verbose {
            0 => config
                .log_level
                .clone()
                .unwrap_or_else(|| "warn".to_string()),
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    }
}

/// Run one conversion.
pub fn run(cli: &Cli, config: &DboxConfig) -> anyhow::Result<()> {
    if cli.print_config_schema {
        println!("{}", DboxConfig::json_schema()?);
        return Ok(());
    }

    let source = InputSource::from_parts(cli.file.as_deref(), cli.text.clone())?;
    let loader = Loader::for_label(&config.input.encoding)?;
    let text = loader
        .load(&source)
        .with_context(|| format!("failed to read input from {source:?}"))?;

    let pipeline = ParsePipeline::from_settings(&config.parse)?;
    let table = pipeline.parse(&text)?;

    info!(
        parser = table.parser,
        dialect = ?table.dialect(),
        columns = table.matrix().width(),
        rows = table.matrix().data_len(),
        "parsed input"
    );

    if cli.explain {
        eprintln!("{}", serde_json::to_string_pretty(&table.ruler)?);
    }

    if !table.matrix().is_rectangular() {
        warn!("rows have differing field counts; a value may contain a delimiter");
    }

    let matrix = if config.export.columns.is_empty() {
        table.into_matrix()
    } else {
        table.matrix().select(&config.export.columns)?
    };

    let options = ExportOptions {
        format: config.export.format,
        header: config.export.header,
    };

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_export(&mut writer, &matrix, options)?;
            writer.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_export(&mut writer, &matrix, options)?;
        }
    }

    Ok(())
}
