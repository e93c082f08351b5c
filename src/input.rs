//! Loading collation documents.
//!
//! The collation step hands its result over as a JSON document holding the
//! witness list and the alignment table. Loading validates the witness list,
//! fills in the row view when it is missing and warns about readings of
//! witnesses that are not in the list (renderers never look them up).

use crate::data::{AlignmentTable, Witness};
use crate::error::{RenderError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// A finished collation: the witnesses and their alignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collation {
    pub witnesses: Vec<Witness>,
    pub table: AlignmentTable,
}

impl Collation {
    /// Parses and validates a collation document.
    pub fn from_json(json: &str) -> Result<Self> {
        let collation: Collation = serde_json::from_str(json)?;
        collation.validated()
    }

    fn validated(self) -> Result<Self> {
        let mut seen = HashSet::new();
        for witness in &self.witnesses {
            if !seen.insert(witness.sigil.as_str()) {
                return Err(RenderError::DuplicateWitness(witness.sigil.clone()));
            }
        }

        for sigil in self.table.unknown_sigils(&self.witnesses) {
            warn!(sigil, "column reading for a witness that is not collated; ignoring");
        }

        let table = self.table.with_derived_rows(&self.witnesses);
        debug!(
            witnesses = self.witnesses.len(),
            columns = table.columns.len(),
            rows = table.rows.len(),
            "loaded collation"
        );
        Ok(Self {
            witnesses: self.witnesses,
            table,
        })
    }

    /// Sigil of the first witness, the default base text.
    pub fn first_sigil(&self) -> Option<&str> {
        self.witnesses.first().map(|w| w.sigil.as_str())
    }
}

/// Loads a collation document from `path`, or from stdin when `path` is `-`.
pub fn load(path: &Path) -> anyhow::Result<Collation> {
    let json = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read collation from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read collation file '{}'", path.display()))?
    };

    Collation::from_json(&json)
        .with_context(|| format!("Invalid collation document '{}'", path.display()))
}
