//! Row codec for the `terms` table
//!
//! List attributes are `Vec<String>` in memory and JSON text in the table.
//! Encoding and decoding happen only here.

use rusqlite::Row;

use super::errors::{StoreError, StoreResult};
use crate::schema::{RenderingType, Term};

/// Column list shared by every SELECT, in `decode_row` order
pub(crate) const TERM_COLUMNS: &str =
    "id, name, description, rendering_type, frameworks, use_cases, advantages, disadvantages";

/// Raw row as stored, before typed decoding
#[derive(Debug, Clone)]
pub(crate) struct TermRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub rendering_type: String,
    pub frameworks: String,
    pub use_cases: String,
    pub advantages: String,
    pub disadvantages: String,
}

impl TermRow {
    /// Reads a row selected with [`TERM_COLUMNS`]
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            rendering_type: row.get(3)?,
            frameworks: row.get(4)?,
            use_cases: row.get(5)?,
            advantages: row.get(6)?,
            disadvantages: row.get(7)?,
        })
    }

    /// Decodes into a typed term
    pub fn decode(self) -> StoreResult<Term> {
        let id = self.id;
        let rendering_type = self
            .rendering_type
            .parse::<RenderingType>()
            .map_err(|e| StoreError::Corrupt {
                id,
                reason: e.to_string(),
            })?;

        Ok(Term {
            id,
            name: self.name,
            description: self.description,
            rendering_type,
            frameworks: decode_list(id, &self.frameworks)?,
            use_cases: decode_list(id, &self.use_cases)?,
            advantages: decode_list(id, &self.advantages)?,
            disadvantages: decode_list(id, &self.disadvantages)?,
        })
    }
}

/// Serializes a list attribute for storage
pub(crate) fn encode_list(values: &[String]) -> StoreResult<String> {
    Ok(serde_json::to_string(values)?)
}

fn decode_list(id: i64, raw: &str) -> StoreResult<Vec<String>> {
    serde_json::from_str(raw).map_err(|e| StoreError::Corrupt {
        id,
        reason: format!("invalid list column: {}", e),
    })
}
