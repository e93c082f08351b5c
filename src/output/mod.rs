//! Renderers and exporters for alignment tables.
//!
//! Every renderer is a pure function of the alignment table, the witness
//! list and its options. Renderers build a [`crate::table::Table`] and hand
//! it to a [`TableMarkup`]; the exporter writes delimited text directly.
//!
//! # Available Views
//!
//! - **Vertical**: witnesses as tracks, variant columns colored
//! - **Horizontal**: witnesses as rows, colored by agreement with a base witness
//! - **Alignment**: the plain alignment table
//! - **CSV / TSV**: machine-readable export of the row view

pub mod alignment;
pub mod csv;
pub mod horizontal;
pub mod vertical;

pub use self::csv::{ExportFormat, export};
pub use horizontal::{AgreementSort, HorizontalOptions};

use crate::data::{AlignmentTable, Witness};
use crate::error::Result;
use crate::table::TableMarkup;
use clap::ValueEnum;

/// One requested output view.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, ValueEnum)]
pub enum View {
    Vertical,
    Horizontal,
    Alignment,
    Csv,
    Tsv,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Vertical => "vertical",
            View::Horizontal => "horizontal",
            View::Alignment => "alignment",
            View::Csv => "csv",
            View::Tsv => "tsv",
        }
    }

    /// File extension of the view's output under the given markup.
    pub fn extension(&self, markup: &dyn TableMarkup) -> &'static str {
        match self {
            View::Csv => "csv",
            View::Tsv => "tsv",
            _ => markup.extension(),
        }
    }
}

/// Renders one view.
///
/// `horizontal` is only consulted for [`View::Horizontal`] and `markup` is
/// ignored by the delimited views.
pub fn render_view(
    view: View,
    table: &AlignmentTable,
    witnesses: &[Witness],
    horizontal: &HorizontalOptions,
    markup: &dyn TableMarkup,
) -> Result<String> {
    match view {
        View::Vertical => Ok(vertical::render(table, witnesses, markup)),
        View::Horizontal => horizontal::render(table, witnesses, horizontal, markup),
        View::Alignment => Ok(alignment::render(table, witnesses, markup)),
        View::Csv => export(table, ExportFormat::Csv),
        View::Tsv => export(table, ExportFormat::Tsv),
    }
}
