//! Library crate for collatab
//!
//! Renders the alignment table produced by a text collation into
//! human-readable tables and machine-readable delimited text.
//!
//! # Features
//!
//! - **Vertical view**: witnesses side by side, variant columns highlighted
//! - **Horizontal view**: disagreement counts against a base witness, optional sorting
//! - **Delimited export**: CSV and TSV of the row view, gaps as empty fields
//! - **Pluggable markup**: the same table structure written as HTML or terminal text
//!
//! # Modules
//!
//! - [`data`]: Core data structures (`Witness`, `Token`, `Column`, `AlignmentTable`)
//! - [`cell`]: Cell formatting and word wrap
//! - [`table`]: Generic colored table model and markups
//! - [`output`]: Renderers and the delimited exporter
//! - [`input`]: Loading collation documents
//! - [`cli`]: Command-line interface definitions
//! - [`metrics`]: Phase timing for `--profile`

pub mod cell;
pub mod cli;
pub mod data;
pub mod error;
pub mod input;
pub mod metrics;
pub mod output;
pub mod table;

pub use cli::Args;
pub use data::{AlignmentTable, Column, Row, Token, Witness};
pub use error::RenderError;
pub use input::Collation;
