//! Vertical, color-coded rendering of an alignment table.
//!
//! The alignment runs top to bottom: the caption row lists the witness
//! sigils, and each alignment column becomes one table row holding every
//! witness's reading at that position. Each witness therefore occupies one
//! vertical track with exactly one cell per alignment column.

use crate::cell::format_cell;
use crate::data::{AlignmentTable, Witness};
use crate::table::{Table, TableCell, TableMarkup, TableRow, palette};
use tracing::debug;

/// Builds the vertical table structure.
///
/// Every cell of a variant column gets [`palette::VARIANT`], every cell of
/// any other column [`palette::NO_VARIANT`]. Nothing is sorted or filtered.
pub fn build(table: &AlignmentTable, witnesses: &[Witness]) -> Table {
    debug!(
        columns = table.columns.len(),
        witnesses = witnesses.len(),
        "building vertical table"
    );

    let rows = table
        .columns
        .iter()
        .map(|column| {
            let bgcolor = if column.variant {
                palette::VARIANT
            } else {
                palette::NO_VARIANT
            };
            let cells = witnesses
                .iter()
                .map(|w| TableCell::new(format_cell(column.reading(&w.sigil)), bgcolor))
                .collect();
            TableRow::new(cells)
        })
        .collect();

    Table {
        header: Some(witnesses.iter().map(|w| w.sigil.clone()).collect()),
        rows,
    }
}

/// Renders the vertical table with the given markup.
pub fn render(table: &AlignmentTable, witnesses: &[Witness], markup: &dyn TableMarkup) -> String {
    markup.render(&build(table, witnesses))
}
