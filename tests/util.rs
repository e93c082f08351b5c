#![allow(dead_code)]

use collatab::{AlignmentTable, Column, Token, Witness};
use std::path::PathBuf;
use tempfile::TempDir;

/// Witnesses "I bought this glass" (A) and "I bought those glasses" (B)
/// aligned into three columns.
pub fn glasses() -> (AlignmentTable, Vec<Witness>) {
    let witnesses = vec![Witness::new("A"), Witness::new("B")];
    let table = AlignmentTable::new(vec![
        Column::new(false)
            .with_reading("A", vec![Token::new("I "), Token::new("bought ")])
            .with_reading("B", vec![Token::new("I "), Token::new("bought ")]),
        Column::new(true)
            .with_reading("A", vec![Token::new("this "), Token::new("glass")])
            .with_reading("B", vec![Token::new("those ")]),
        Column::new(true).with_reading("B", vec![Token::new("glasses")]),
    ])
    .with_derived_rows(&witnesses);
    (table, witnesses)
}

/// Writes `json` into a fresh temporary directory and returns both.
///
/// The directory is removed when the returned handle is dropped.
pub fn write_collation(json: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("collation.json");
    std::fs::write(&path, json)?;
    Ok((dir, path))
}
