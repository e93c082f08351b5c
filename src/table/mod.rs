//! Generic table model shared by the renderers.
//!
//! Renderers decide *what* goes into each cell (text and background color);
//! a [`TableMarkup`] decides how the finished [`Table`] is written out. This
//! keeps the agreement/disagreement logic independent of the target format.
//!
//! # Available Markups
//!
//! - **Html**: an HTML `<table>` with `bgcolor` attributes per cell
//! - **Terminal**: a boxed text grid, optionally with ANSI background colors

pub mod html;
pub mod terminal;

pub use html::Html;
pub use terminal::Terminal;

use std::fmt;

/// An RGB background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const fn from_hex(rgb: u32) -> Self {
        Self(rgb & 0x00ff_ffff)
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06x}", self.0)
    }
}

/// Background colors used by the renderers.
pub mod palette {
    use super::Color;

    /// Vertical view: column whose readings disagree.
    pub const VARIANT: Color = Color::from_hex(0xff0000);
    /// Vertical view: column whose readings agree.
    pub const NO_VARIANT: Color = Color::from_hex(0x00ffff);
    /// Label cells (sigil, distance, header captions).
    pub const LABEL: Color = Color::from_hex(0xf2f2f2);
    /// Horizontal view: reading differs from the base text.
    pub const DISAGREEMENT: Color = Color::from_hex(0xfa9392);
    /// Horizontal view: the base witness's own reading.
    pub const BASE: Color = Color::from_hex(0xffffff);
    /// Horizontal view: reading equals the base text.
    pub const AGREEMENT: Color = Color::from_hex(0x99ffbb);
    /// Horizontal index header: variant column.
    pub const VARIANT_INDEX: Color = Color::from_hex(0xffde57);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    pub text: String,
    pub bgcolor: Option<Color>,
}

impl TableCell {
    pub fn new(text: impl Into<String>, bgcolor: Color) -> Self {
        Self {
            text: text.into(),
            bgcolor: Some(bgcolor),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bgcolor: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

impl TableRow {
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }
}

/// Rows of colored cells with an optional caption row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub header: Option<Vec<String>>,
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Number of grid columns: the widest of the header and every row.
    pub fn width(&self) -> usize {
        let header = self.header.as_ref().map_or(0, Vec::len);
        self.rows
            .iter()
            .map(|r| r.cells.len())
            .max()
            .unwrap_or(0)
            .max(header)
    }
}

/// Turns a [`Table`] into its final textual form.
pub trait TableMarkup: Send + Sync {
    fn render(&self, table: &Table) -> String;

    /// File extension used when the rendering is written to a directory.
    fn extension(&self) -> &'static str;
}
