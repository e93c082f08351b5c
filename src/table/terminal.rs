//! Terminal markup for rendered tables.
//!
//! Draws a boxed grid sized to the widest line of every column. Multi-line
//! (wrapped) cells grow their row. With colors enabled, colored cells get a
//! truecolor ANSI background.

use super::{Table, TableCell, TableMarkup};
use owo_colors::{OwoColorize, Style};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy)]
pub struct Terminal {
    pub color: bool,
}

impl Terminal {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new(true)
    }
}

impl TableMarkup for Terminal {
    fn render(&self, table: &Table) -> String {
        let widths = column_widths(table);
        let mut out = String::new();

        out.push_str(&separator(&widths, '-'));
        if let Some(header) = &table.header {
            let cells: Vec<TableCell> = header.iter().map(TableCell::plain).collect();
            self.push_row(&mut out, &cells, &widths);
            out.push_str(&separator(&widths, '='));
        }
        for row in &table.rows {
            self.push_row(&mut out, &row.cells, &widths);
            out.push_str(&separator(&widths, '-'));
        }
        out
    }

    fn extension(&self) -> &'static str {
        "txt"
    }
}

impl Terminal {
    fn push_row(&self, out: &mut String, cells: &[TableCell], widths: &[usize]) {
        let height = cells
            .iter()
            .map(|c| c.text.lines().count().max(1))
            .max()
            .unwrap_or(1);

        for line in 0..height {
            out.push('|');
            for (idx, width) in widths.iter().enumerate() {
                let cell = cells.get(idx);
                let text = cell.and_then(|c| c.text.lines().nth(line)).unwrap_or("");
                let padded = format!(" {} ", center(text, *width));
                match cell.and_then(|c| c.bgcolor) {
                    Some(color) if self.color => {
                        let (r, g, b) = color.rgb();
                        let style = Style::new().black().on_truecolor(r, g, b);
                        out.push_str(&padded.style(style).to_string());
                    }
                    _ => out.push_str(&padded),
                }
                out.push('|');
            }
            out.push('\n');
        }
    }
}

fn column_widths(table: &Table) -> Vec<usize> {
    let mut widths = vec![0; table.width()];
    let header = table
        .header
        .iter()
        .flat_map(|h| h.iter().map(String::as_str).enumerate());
    let cells = table
        .rows
        .iter()
        .flat_map(|r| r.cells.iter().map(|c| c.text.as_str()).enumerate());

    for (idx, text) in header.chain(cells) {
        let width = text.lines().map(UnicodeWidthStr::width).max().unwrap_or(0);
        widths[idx] = widths[idx].max(width);
    }
    widths
}

fn separator(widths: &[usize], fill: char) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.extend(std::iter::repeat_n(fill, width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}
