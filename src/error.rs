//! Error types for the rendering core.
//!
//! Every fallible operation in the library returns [`RenderError`]. The binary
//! wraps these in `anyhow` with file/view context before reporting them.

use thiserror::Error;

/// Errors reported by renderers, the exporter and the input loader.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The configured base witness is not part of the witness list.
    #[error("base witness '{0}' is not among the collated witnesses")]
    UnknownBaseWitness(String),

    /// An export format other than `csv` or `tsv` was requested.
    #[error("unsupported export format '{0}' (expected 'csv' or 'tsv')")]
    UnsupportedFormat(String),

    /// Two witnesses share the same sigil.
    #[error("duplicate witness sigil '{0}'")]
    DuplicateWitness(String),

    /// The collation document could not be parsed.
    #[error("malformed collation document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("delimited export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("delimited export could not flush its buffer: {0}")]
    Io(#[from] std::io::Error),

    #[error("delimited export produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T, E = RenderError> = std::result::Result<T, E>;
