//! Horizontal rendering annotated with disagreement from a base witness.
//!
//! One row per witness: the sigil, the number of columns at which the
//! witness's reading differs from the base witness's reading, then one cell
//! per alignment column colored by agreement. Rows may be sorted by that
//! count. In the compact (non-segmented) layout a caption row numbers the
//! base witness's readings.
//!
//! # Index numbering
//!
//! Base readings are numbered 2, 4, 6, ... so the odd numbers stay free for
//! the boundaries between columns. Columns where the base witness has no
//! reading are marked with the gap placeholder instead of a number.

use crate::cell::{GAP, WRAP_WIDTH, reading_text, wrap};
use crate::data::{AlignmentTable, Witness};
use crate::error::{RenderError, Result};
use crate::table::{Color, Table, TableCell, TableMarkup, TableRow, palette};
use clap::ValueEnum;
use std::fmt;
use tracing::debug;

/// How witness rows are ordered by their disagreement count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AgreementSort {
    /// Witness-list order.
    #[default]
    #[value(name = "none")]
    Unsorted,
    /// Sort by the count's decimal text, so `"10"` comes before `"2"`.
    /// This is the ordering existing collation reports were produced with.
    #[value(name = "agreement")]
    Lexicographic,
    /// Sort by the count as a number.
    #[value(name = "numeric")]
    Numeric,
}

/// Options of the horizontal renderer.
///
/// # Fields
/// * `segmentation` - When false, a caption row with base reading indices is added
/// * `basetext` - Sigil of the witness every other witness is compared with
/// * `sort` - Row ordering by disagreement count
/// * `ignore_case` - Lowercase readings before comparing and displaying them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HorizontalOptions {
    pub segmentation: bool,
    pub basetext: String,
    pub sort: AgreementSort,
    pub ignore_case: bool,
}

impl HorizontalOptions {
    pub fn new(basetext: impl Into<String>) -> Self {
        Self {
            segmentation: false,
            basetext: basetext.into(),
            sort: AgreementSort::Unsorted,
            ignore_case: false,
        }
    }
}

/// Label of one column in the index caption row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexLabel {
    Position(usize),
    Gap,
}

impl fmt::Display for IndexLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexLabel::Position(index) => write!(f, "{index}"),
            IndexLabel::Gap => f.write_str(GAP),
        }
    }
}

struct WitnessRow<'a> {
    sigil: &'a str,
    distance: usize,
    cells: Vec<TableCell>,
}

struct Comparison<'a> {
    rows: Vec<WitnessRow<'a>>,
    indices: Vec<IndexLabel>,
}

fn compare<'a>(
    table: &AlignmentTable,
    witnesses: &'a [Witness],
    options: &HorizontalOptions,
) -> Result<Comparison<'a>> {
    let base = options.basetext.as_str();
    if !witnesses.iter().any(|w| w.sigil == base) {
        return Err(RenderError::UnknownBaseWitness(options.basetext.clone()));
    }

    let mut indices = Vec::with_capacity(table.columns.len());
    let mut next_index = 2;
    let mut rows = Vec::with_capacity(witnesses.len());

    for witness in witnesses {
        let is_base = witness.sigil == base;
        let mut distance = 0;
        let mut cells = Vec::with_capacity(table.columns.len());

        for column in &table.columns {
            let mut cell_text = reading_text(column.reading(&witness.sigil));
            let mut base_text = reading_text(column.reading(base));
            // Folded readings are also what the cell displays.
            if options.ignore_case {
                cell_text = cell_text.to_lowercase();
                base_text = base_text.to_lowercase();
            }

            let bgcolor: Color = if cell_text != base_text {
                distance += 1;
                palette::DISAGREEMENT
            } else if is_base {
                if base_text == GAP {
                    indices.push(IndexLabel::Gap);
                } else {
                    indices.push(IndexLabel::Position(next_index));
                    next_index += 2;
                }
                palette::BASE
            } else {
                palette::AGREEMENT
            };
            cells.push(TableCell::new(wrap(&cell_text, WRAP_WIDTH), bgcolor));
        }

        rows.push(WitnessRow {
            sigil: &witness.sigil,
            distance,
            cells,
        });
    }

    Ok(Comparison { rows, indices })
}

/// Returns `(sigil, disagreement count)` for every witness in witness-list order.
pub fn disagreement_counts(
    table: &AlignmentTable,
    witnesses: &[Witness],
    options: &HorizontalOptions,
) -> Result<Vec<(String, usize)>> {
    Ok(compare(table, witnesses, options)?
        .rows
        .into_iter()
        .map(|row| (row.sigil.to_string(), row.distance))
        .collect())
}

/// Builds the horizontal table structure.
///
/// # Errors
/// Returns [`RenderError::UnknownBaseWitness`] if `options.basetext` is not
/// the sigil of one of `witnesses`. No table is produced in that case.
pub fn build(
    table: &AlignmentTable,
    witnesses: &[Witness],
    options: &HorizontalOptions,
) -> Result<Table> {
    let Comparison { rows, indices } = compare(table, witnesses, options)?;
    debug!(
        base = %options.basetext,
        rows = rows.len(),
        columns = table.columns.len(),
        sort = ?options.sort,
        "building horizontal table"
    );

    let mut rows: Vec<TableRow> = {
        let mut scored: Vec<(usize, TableRow)> = rows
            .into_iter()
            .map(|row| {
                let mut cells = Vec::with_capacity(row.cells.len() + 2);
                cells.push(TableCell::new(row.sigil, palette::LABEL));
                cells.push(TableCell::new(row.distance.to_string(), palette::LABEL));
                cells.extend(row.cells);
                (row.distance, TableRow::new(cells))
            })
            .collect();

        match options.sort {
            AgreementSort::Unsorted => {}
            AgreementSort::Lexicographic => {
                scored.sort_by(|(_, a), (_, b)| a.cells[1].text.cmp(&b.cells[1].text))
            }
            AgreementSort::Numeric => scored.sort_by_key(|(distance, _)| *distance),
        }
        scored.into_iter().map(|(_, row)| row).collect()
    };

    if !options.segmentation {
        let mut caption = vec![
            TableCell::new("Wit", palette::LABEL),
            TableCell::new("Dist", palette::LABEL),
        ];
        caption.extend(indices.iter().zip(&table.columns).map(|(label, column)| {
            let bgcolor = if column.variant {
                palette::VARIANT_INDEX
            } else {
                palette::LABEL
            };
            TableCell::new(label.to_string(), bgcolor)
        }));
        rows.insert(0, TableRow::new(caption));
    }

    Ok(Table { header: None, rows })
}

/// Renders the horizontal table with the given markup.
pub fn render(
    table: &AlignmentTable,
    witnesses: &[Witness],
    options: &HorizontalOptions,
    markup: &dyn TableMarkup,
) -> Result<String> {
    Ok(markup.render(&build(table, witnesses, options)?))
}
