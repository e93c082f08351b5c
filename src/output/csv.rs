//! Delimited-text (CSV/TSV) export of an alignment table.
//!
//! This module serializes the row-oriented view of the alignment table with
//! the `csv` crate. Each record is the row header followed by one field per
//! column; gaps become empty fields. Nothing is wrapped and no placeholder is
//! written, so the payload carries the readings exactly as collated.

use crate::data::AlignmentTable;
use crate::error::{RenderError, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Delimiter convention of the exported text.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn delimiter(&self) -> u8 {
        match self {
            ExportFormat::Csv => b',',
            ExportFormat::Tsv => b'\t',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            _ => Err(RenderError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Exports the table's rows as delimited text.
///
/// # Arguments
/// * `table` - The alignment table whose `rows` are exported
/// * `format` - Comma- or tab-separated output
///
/// # Returns
/// * `Result<String>` - The whole payload; records end with `\n` on every platform
///
/// # Note
/// Fields are quoted only when they contain the delimiter, a quote or a line break.
pub fn export(table: &AlignmentTable, format: ExportFormat) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(format.delimiter())
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(Vec::new());

    for row in &table.rows {
        writer.write_record(std::iter::once(row.header.as_str()).chain(row.to_fields()))?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    debug!(rows = table.rows.len(), %format, bytes = bytes.len(), "exported alignment table");
    Ok(String::from_utf8(bytes)?)
}

/// Parses `format` and exports; an unknown format fails before anything is written.
pub fn export_named(table: &AlignmentTable, format: &str) -> Result<String> {
    let format: ExportFormat = format.parse()?;
    export(table, format)
}
