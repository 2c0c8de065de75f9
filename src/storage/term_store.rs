//! # Term Store
//!
//! Owns persisted term records. Every method acquires a connection for the
//! duration of the call only. Mutations are read-modify-write inside one
//! IMMEDIATE transaction, so the write lock is taken before the read and
//! concurrent writers wait on the busy timeout instead of failing on upgrade.

use rusqlite::{params, Connection, OptionalExtension, ToSql, TransactionBehavior};

use super::database::Database;
use super::errors::{StoreError, StoreResult};
use super::record::{encode_list, TermRow, TERM_COLUMNS};
use crate::schema::{NewTerm, RenderingType, Term, TermPatch};

/// Persistence and query operations over the `terms` table
#[derive(Debug)]
pub struct TermStore {
    db: Database,
}

impl TermStore {
    /// Creates a store that owns the given database handle
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Point lookup by id
    pub fn get_by_id(&self, id: i64) -> StoreResult<Option<Term>> {
        let conn = self.db.connect()?;
        fetch_by_id(&conn, id)
    }

    /// Exact-match lookup on the unique name
    pub fn get_by_name(&self, name: &str) -> StoreResult<Option<Term>> {
        let conn = self.db.connect()?;
        let sql = format!("SELECT {} FROM terms WHERE name = ?1", TERM_COLUMNS);
        conn.query_row(&sql, params![name], TermRow::from_row)
            .optional()?
            .map(TermRow::decode)
            .transpose()
    }

    /// Terms in primary-key order, skipping `offset` and returning at most
    /// `limit`, optionally restricted to one rendering type
    pub fn list(
        &self,
        offset: u64,
        limit: u64,
        rendering_type: Option<RenderingType>,
    ) -> StoreResult<Vec<Term>> {
        let conn = self.db.connect()?;
        // SQLite LIMIT is signed; anything above i64::MAX is unbounded anyway
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let offset = i64::try_from(offset).unwrap_or(i64::MAX);

        match rendering_type {
            Some(t) => {
                let sql = format!(
                    "SELECT {} FROM terms WHERE rendering_type = ?1 ORDER BY id LIMIT ?2 OFFSET ?3",
                    TERM_COLUMNS
                );
                query_terms(&conn, &sql, params![t.as_str(), limit, offset])
            }
            None => {
                let sql = format!(
                    "SELECT {} FROM terms ORDER BY id LIMIT ?1 OFFSET ?2",
                    TERM_COLUMNS
                );
                query_terms(&conn, &sql, params![limit, offset])
            }
        }
    }

    /// All terms with the given rendering type
    pub fn list_by_rendering_type(&self, rendering_type: RenderingType) -> StoreResult<Vec<Term>> {
        let conn = self.db.connect()?;
        let sql = format!(
            "SELECT {} FROM terms WHERE rendering_type = ?1 ORDER BY id",
            TERM_COLUMNS
        );
        query_terms(&conn, &sql, params![rendering_type.as_str()])
    }

    /// All terms whose `frameworks` list contains `framework` as an exact
    /// element
    pub fn list_by_framework(&self, framework: &str) -> StoreResult<Vec<Term>> {
        let conn = self.db.connect()?;
        let sql = format!(
            "SELECT {} FROM terms
             WHERE EXISTS (
                 SELECT 1 FROM json_each(terms.frameworks)
                 WHERE json_each.type = 'text' AND json_each.value = ?1
             )
             ORDER BY id",
            TERM_COLUMNS
        );
        query_terms(&conn, &sql, params![framework])
    }

    /// Raw `(rendering_type, frameworks)` pairs for every row, undecoded so
    /// rows with legacy rendering types are still visible
    pub fn scan_classification(&self) -> StoreResult<Vec<(String, Vec<String>)>> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare("SELECT id, rendering_type, frameworks FROM terms ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (id, rendering_type, frameworks) = row?;
            let frameworks: Vec<String> =
                serde_json::from_str(&frameworks).map_err(|e| StoreError::Corrupt {
                    id,
                    reason: format!("invalid list column: {}", e),
                })?;
            out.push((rendering_type, frameworks));
        }
        Ok(out)
    }

    /// Number of stored terms
    pub fn count(&self) -> StoreResult<u64> {
        let conn = self.db.connect()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM terms", [], |r| r.get(0))?;
        Ok(count.max(0) as u64)
    }

    /// Persists a new term and returns it with its assigned id.
    ///
    /// Returns [`StoreError::Conflict`] if the engine's UNIQUE constraint on
    /// `name` rejects the insert.
    pub fn create(&self, term: &NewTerm) -> StoreResult<Term> {
        let conn = self.db.connect()?;
        let inserted = conn.execute(
            "INSERT INTO terms (name, description, rendering_type, frameworks, use_cases, advantages, disadvantages)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                term.name,
                term.description,
                term.rendering_type.as_str(),
                encode_list(&term.frameworks)?,
                encode_list(&term.use_cases)?,
                encode_list(&term.advantages)?,
                encode_list(&term.disadvantages)?,
            ],
        );

        match inserted {
            Ok(_) => {}
            Err(e) if StoreError::is_unique_violation(&e) => {
                return Err(StoreError::Conflict(term.name.clone()))
            }
            Err(e) => return Err(e.into()),
        }

        Ok(Term {
            id: conn.last_insert_rowid(),
            name: term.name.clone(),
            description: term.description.clone(),
            rendering_type: term.rendering_type,
            frameworks: term.frameworks.clone(),
            use_cases: term.use_cases.clone(),
            advantages: term.advantages.clone(),
            disadvantages: term.disadvantages.clone(),
        })
    }

    /// Applies the supplied fields of `patch` to the term with `id`.
    ///
    /// Returns `None` if no such term exists.
    pub fn update(&self, id: i64, patch: &TermPatch) -> StoreResult<Option<Term>> {
        let mut conn = self.db.connect()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let Some(mut term) = fetch_by_id(&tx, id)? else {
            return Ok(None);
        };
        if patch.is_empty() {
            return Ok(Some(term));
        }

        patch.apply_to(&mut term);

        let written = tx.execute(
            "UPDATE terms SET name = ?1, description = ?2, rendering_type = ?3,
                 frameworks = ?4, use_cases = ?5, advantages = ?6, disadvantages = ?7
             WHERE id = ?8",
            params![
                term.name,
                term.description,
                term.rendering_type.as_str(),
                encode_list(&term.frameworks)?,
                encode_list(&term.use_cases)?,
                encode_list(&term.advantages)?,
                encode_list(&term.disadvantages)?,
                id,
            ],
        );

        match written {
            Ok(_) => {}
            Err(e) if StoreError::is_unique_violation(&e) => {
                return Err(StoreError::Conflict(term.name))
            }
            Err(e) => return Err(e.into()),
        }

        tx.commit()?;
        Ok(Some(term))
    }

    /// Removes the term with `id`; returns whether it existed
    pub fn delete(&self, id: i64) -> StoreResult<bool> {
        let mut conn = self.db.connect()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        if fetch_by_id(&tx, id)?.is_none() {
            return Ok(false);
        }
        let removed = tx.execute("DELETE FROM terms WHERE id = ?1", params![id])?;
        tx.commit()?;

        Ok(removed > 0)
    }
}

fn fetch_by_id(conn: &Connection, id: i64) -> StoreResult<Option<Term>> {
    let sql = format!("SELECT {} FROM terms WHERE id = ?1", TERM_COLUMNS);
    conn.query_row(&sql, params![id], TermRow::from_row)
        .optional()?
        .map(TermRow::decode)
        .transpose()
}

fn query_terms(conn: &Connection, sql: &str, params: &[&dyn ToSql]) -> StoreResult<Vec<Term>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, TermRow::from_row)?;

    let mut terms = Vec::new();
    for row in rows {
        terms.push(row?.decode()?);
    }
    Ok(terms)
}
