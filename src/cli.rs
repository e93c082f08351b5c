//! CLI interface definitions for the `collatab` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes:
//!
//! - [`Args`]: the main struct parsed from CLI inputs
//! - [`MarkupKind`]: an enum selecting HTML or terminal table markup
//!
//! # Example
//!
//! ```bash
//! collatab collation.json --view horizontal --base A --sort agreement --output table.html
//! collatab collation.json --view vertical csv --output-dir out/
//! ```

use crate::output::{AgreementSort, HorizontalOptions, View};
use crate::table::{Html, TableMarkup, Terminal};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for rendering a collation.
#[derive(Parser, Debug)]
#[command(name = "collatab", version, about)]
pub struct Args {
    /// Collation document (JSON); `-` reads stdin
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Views to render
    #[arg(long, value_enum, num_args = 1.., default_values_t = [View::Horizontal])]
    pub view: Vec<View>,

    /// Table markup for the vertical, horizontal and alignment views
    #[arg(long, value_enum, default_value_t = MarkupKind::Html)]
    pub markup: MarkupKind,

    /// Disable ANSI colors in terminal markup
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Sigil of the base witness (default: first witness)
    #[arg(long, value_name = "SIGIL")]
    pub base: Option<String>,

    /// Segmented layout: omit the index caption row of the horizontal view
    #[arg(long, default_value_t = false)]
    pub segmentation: bool,

    /// Sort horizontal rows by disagreement count
    #[arg(long, value_enum, default_value_t = AgreementSort::Unsorted)]
    pub sort: AgreementSort,

    /// Compare readings case-insensitively in the horizontal view
    #[arg(long, default_value_t = false)]
    pub ignore_case: bool,

    /// Write the (single) view to FILE instead of stdout
    #[arg(long, value_name = "FILE", conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Write every view to DIR as `<view>.<ext>`
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Show phase timings after rendering
    #[arg(long, default_value_t = false)]
    pub profile: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Enum for selecting how tables are written out.
///
/// # Variants
/// * `Html` - An HTML `<table>` with background colors
/// * `Terminal` - A boxed text grid, ANSI-colored unless `--no-color`
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum MarkupKind {
    Html,
    Terminal,
}

impl Args {
    pub fn markup(&self) -> Box<dyn TableMarkup> {
        match self.markup {
            MarkupKind::Html => Box::new(Html),
            MarkupKind::Terminal => Box::new(Terminal::new(!self.no_color)),
        }
    }

    /// Horizontal renderer options; `default_base` is used when `--base` is absent.
    pub fn horizontal_options(&self, default_base: &str) -> HorizontalOptions {
        HorizontalOptions {
            segmentation: self.segmentation,
            basetext: self.base.clone().unwrap_or_else(|| default_base.to_string()),
            sort: self.sort,
            ignore_case: self.ignore_case,
        }
    }
}
