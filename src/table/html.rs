//! HTML markup for rendered tables.

use super::{Table, TableCell, TableMarkup};

/// Writes a table as an HTML `<table>` element.
///
/// Every cell is centered; cells with a background color get a `bgcolor`
/// attribute. Line breaks produced by word wrapping become `<br/>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Html;

impl TableMarkup for Html {
    fn render(&self, table: &Table) -> String {
        let mut out = String::from(
            "<table border=\"1\" style=\"border: 1px solid #000000; border-collapse: collapse;\" cellpadding=\"4\">\n",
        );

        if let Some(header) = &table.header {
            out.push_str(" <tr>\n");
            for caption in header {
                out.push_str(&format!("  <th>{}</th>\n", escape(caption)));
            }
            out.push_str(" </tr>\n");
        }

        for row in &table.rows {
            out.push_str(" <tr>\n");
            for cell in &row.cells {
                write_cell(&mut out, cell);
            }
            out.push_str(" </tr>\n");
        }

        out.push_str("</table>\n");
        out
    }

    fn extension(&self) -> &'static str {
        "html"
    }
}

fn write_cell(out: &mut String, cell: &TableCell) {
    let text = escape(&cell.text).replace('\n', "<br/>");
    match cell.bgcolor {
        Some(color) => out.push_str(&format!(
            "  <td bgcolor=\"#{color}\" style=\"text-align: center\">{text}</td>\n"
        )),
        None => out.push_str(&format!("  <td style=\"text-align: center\">{text}</td>\n")),
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
