//! Data structures for representing a finished collation.
//!
//! This module defines the alignment table handed over by the collation step:
//! witnesses, tokens, the ordered columns of the alignment and the
//! row-oriented view used for delimited export. Everything here is read-only
//! from the point of view of the renderers.

use crate::cell::join_tokens;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// One collated source, identified by its sigil.
///
/// The position of a witness is its index in the witness list passed
/// alongside the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Witness {
    pub sigil: String,
}

impl Witness {
    pub fn new(sigil: impl Into<String>) -> Self {
        Self {
            sigil: sigil.into(),
        }
    }
}

/// An atomic unit of witness text.
///
/// # Fields
/// * `text` - The textual payload as it appears in the witness (`"t"`)
/// * `normalized` - Optional normalized form used upstream for matching (`"n"`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "t")]
    pub text: String,
    #[serde(rename = "n", default, skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            normalized: None,
        }
    }
}

/// One position in the alignment.
///
/// A witness without an entry in `tokens_per_witness` has no reading here
/// (a gap). `variant` is computed by the collation step and only consumed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    #[serde(default)]
    pub tokens_per_witness: HashMap<String, Vec<Token>>,
    #[serde(default)]
    pub variant: bool,
}

impl Column {
    pub fn new(variant: bool) -> Self {
        Self {
            tokens_per_witness: HashMap::new(),
            variant,
        }
    }

    /// Builder-style helper that records the reading of `sigil` at this column.
    pub fn with_reading(mut self, sigil: &str, tokens: Vec<Token>) -> Self {
        self.tokens_per_witness.insert(sigil.to_string(), tokens);
        self
    }

    /// Returns the tokens aligned for `sigil`, or `None` for a gap.
    pub fn reading(&self, sigil: &str) -> Option<&[Token]> {
        self.tokens_per_witness.get(sigil).map(Vec::as_slice)
    }
}

/// Row-oriented export view: a header label and one value per column.
///
/// `None` marks a gap, which is distinct from a present but blank value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub header: String,
    #[serde(default)]
    pub cells: Vec<Option<String>>,
}

impl Row {
    /// Returns the cell values as export fields, gaps becoming empty strings.
    pub fn to_fields(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|c| c.as_deref().unwrap_or(""))
    }
}

/// The ordered columns of an alignment plus the row view used for export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentTable {
    pub columns: Vec<Column>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl AlignmentTable {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Builds the row view from the columns, one row per witness in
    /// witness-list order.
    pub fn derive_rows(&self, witnesses: &[Witness]) -> Vec<Row> {
        witnesses
            .iter()
            .map(|witness| Row {
                header: witness.sigil.clone(),
                cells: self
                    .columns
                    .iter()
                    .map(|column| match column.reading(&witness.sigil) {
                        Some(tokens) if !tokens.is_empty() => Some(join_tokens(tokens)),
                        _ => None,
                    })
                    .collect(),
            })
            .collect()
    }

    /// Fills in the row view from the columns if the collation step did not
    /// provide one.
    pub fn with_derived_rows(mut self, witnesses: &[Witness]) -> Self {
        if self.rows.is_empty() {
            self.rows = self.derive_rows(witnesses);
        }
        self
    }

    /// Sigils that appear in some column but not in `witnesses`.
    pub fn unknown_sigils<'a>(&'a self, witnesses: &[Witness]) -> BTreeSet<&'a str> {
        self.columns
            .iter()
            .flat_map(|column| column.tokens_per_witness.keys())
            .map(String::as_str)
            .filter(|sigil| !witnesses.iter().any(|w| w.sigil == *sigil))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<Token> {
        vec![Token::new(text)]
    }

    #[test]
    fn test_gap_lookup_is_none() {
        let column = Column::new(false).with_reading("A", tokens("word"));

        assert_eq!(column.reading("A").map(|t| t.len()), Some(1));
        assert!(column.reading("B").is_none());
    }

    #[test]
    fn test_derive_rows_marks_gaps() {
        let witnesses = vec![Witness::new("A"), Witness::new("B")];
        let table = AlignmentTable::new(vec![
            Column::new(false)
                .with_reading("A", tokens("a "))
                .with_reading("B", tokens("a ")),
            Column::new(true).with_reading("B", vec![Token::new("b"), Token::new("c")]),
        ]);

        let rows = table.derive_rows(&witnesses);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].header, "A");
        assert_eq!(rows[0].cells, vec![Some("a ".to_string()), None]);
        assert_eq!(rows[1].cells, vec![Some("a ".to_string()), Some("bc".to_string())]);
    }

    #[test]
    fn test_with_derived_rows_keeps_supplied_rows() {
        let witnesses = vec![Witness::new("A")];
        let mut table = AlignmentTable::new(vec![Column::new(false).with_reading("A", tokens("x"))]);
        table.rows = vec![Row {
            header: "custom".to_string(),
            cells: vec![Some("y".to_string())],
        }];

        let table = table.with_derived_rows(&witnesses);

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].header, "custom");
    }

    #[test]
    fn test_row_fields_render_gaps_empty() {
        let row = Row {
            header: "A".to_string(),
            cells: vec![Some("x".to_string()), None, Some(String::new())],
        };

        assert_eq!(row.to_fields().collect::<Vec<_>>(), vec!["x", "", ""]);
    }

    #[test]
    fn test_unknown_sigils() {
        let witnesses = vec![Witness::new("A")];
        let table = AlignmentTable::new(vec![
            Column::new(false)
                .with_reading("A", tokens("x"))
                .with_reading("Z", tokens("x")),
        ]);

        assert_eq!(table.unknown_sigils(&witnesses).into_iter().collect::<Vec<_>>(), vec!["Z"]);
    }

    #[test]
    fn test_token_json_field_names() {
        let token: Token = serde_json::from_str(r#"{"t": "Glass", "n": "glass"}"#).unwrap();

        assert_eq!(token.text, "Glass");
        assert_eq!(token.normalized.as_deref(), Some("glass"));
    }
}
