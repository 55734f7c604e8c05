//! Row matrix exporters.

use std::io::Write;

use serde_json::{Map, Value};

use dbox_core::{Error, ExportFormat, Result, RowMatrix};

/// Export options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Output format
    pub format: ExportFormat,
    /// Emit the header row (JSON: objects keyed by header)
    pub header: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Tsv,
            header: true,
        }
    }
}

/// Rows to emit: all of them, or data only.
fn selected_rows(matrix: &RowMatrix, header: bool) -> &[Vec<String>] {
    if header {
        matrix.rows()
    } else {
        matrix.data()
    }
}

/// Serialize as tab-separated values, one row per line.
pub fn to_tsv(matrix: &RowMatrix, header: bool) -> String {
    selected_rows(matrix, header)
        .iter()
        .map(|row| format!("{}\n", row.join("\t")))
        .collect()
}

/// Serialize as RFC 4180 comma-separated values.
pub fn to_csv(matrix: &RowMatrix, header: bool) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(vec![]);

    for row in selected_rows(matrix, header) {
        wtr.write_record(row).map_err(|e| Error::Csv(e.to_string()))?;
    }

    let bytes = wtr.into_inner().map_err(|e| Error::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::Csv(e.to_string()))
}

/// Serialize as JSON.
///
/// With `header`, an array of objects keyed by column name; otherwise an
/// array of arrays holding the data rows.
pub fn to_json(matrix: &RowMatrix, header: bool) -> Result<String> {
    let value = if header {
        let records = matrix
            .data()
            .iter()
            .map(|row| {
                let record: Map<String, Value> = matrix
                    .header()
                    .iter()
                    .zip(row)
                    .map(|(name, field)| (name.clone(), Value::String(field.clone())))
                    .collect();
                Value::Object(record)
            })
            .collect();
        Value::Array(records)
    } else {
        serde_json::to_value(matrix.data())?
    };

    Ok(serde_json::to_string_pretty(&value)?)
}

/// Render a matrix in the requested format.
pub fn render(matrix: &RowMatrix, options: ExportOptions) -> Result<String> {
    match options.format {
        ExportFormat::Tsv => Ok(to_tsv(matrix, options.header)),
        ExportFormat::Csv => to_csv(matrix, options.header),
        ExportFormat::Json => {
            let mut json = to_json(matrix, options.header)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Render a matrix and write it out.
pub fn write_export<W: Write>(
    writer: &mut W,
    matrix: &RowMatrix,
    options: ExportOptions,
) -> Result<()> {
    let rendered = render(matrix, options)?;
    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;
    Ok(())
}
