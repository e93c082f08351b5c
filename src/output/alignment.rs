//! Plain alignment-table view: one row per witness, no agreement coloring.

use crate::cell::format_cell;
use crate::data::{AlignmentTable, Witness};
use crate::table::{Table, TableCell, TableMarkup, TableRow};

pub fn build(table: &AlignmentTable, witnesses: &[Witness]) -> Table {
    let rows = witnesses
        .iter()
        .map(|witness| {
            let mut cells = Vec::with_capacity(table.columns.len() + 1);
            cells.push(TableCell::plain(&witness.sigil));
            cells.extend(
                table
                    .columns
                    .iter()
                    .map(|column| TableCell::plain(format_cell(column.reading(&witness.sigil)))),
            );
            TableRow::new(cells)
        })
        .collect();

    Table { header: None, rows }
}

pub fn render(table: &AlignmentTable, witnesses: &[Witness], markup: &dyn TableMarkup) -> String {
    markup.render(&build(table, witnesses))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Column, Token};
    use crate::table::Terminal;

    #[test]
    fn test_rows_follow_witness_order() {
        let witnesses = vec![Witness::new("B"), Witness::new("A")];
        let table = AlignmentTable::new(vec![
            Column::new(true).with_reading("A", vec![Token::new("cat")]),
            Column::new(false)
                .with_reading("A", vec![Token::new("sat")])
                .with_reading("B", vec![Token::new("sat")]),
        ]);

        let text = render(&table, &witnesses, &Terminal::new(false));

        let expected = "\
+---+-----+-----+
| B |  -  | sat |
+---+-----+-----+
| A | cat | sat |
+---+-----+-----+
";
        assert_eq!(text, expected);
    }
}
