//! Glossary statistics
//!
//! Recomputed from a full scan on every call; nothing is cached.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::schema::RenderingType;
use crate::storage::{StoreResult, TermStore};

/// Distribution summary over every stored term
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Count of all rows, including rows with unrecognised rendering types
    pub total_terms: u64,
    /// Count per enumerated rendering type; every member is present
    pub rendering_type_distribution: BTreeMap<RenderingType, u64>,
    /// Union of every `frameworks` entry
    pub unique_frameworks: BTreeSet<String>,
    pub total_frameworks_covered: usize,
}

impl Stats {
    /// Folds raw `(rendering_type, frameworks)` rows into a summary
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut distribution: BTreeMap<RenderingType, u64> =
            RenderingType::ALL.into_iter().map(|t| (t, 0)).collect();
        let mut unique_frameworks = BTreeSet::new();
        let mut total_terms = 0;

        for (rendering_type, frameworks) in rows {
            total_terms += 1;
            if let Ok(t) = rendering_type.parse::<RenderingType>() {
                *distribution.entry(t).or_insert(0) += 1;
            }
            unique_frameworks.extend(frameworks);
        }

        Self {
            total_terms,
            rendering_type_distribution: distribution,
            total_frameworks_covered: unique_frameworks.len(),
            unique_frameworks,
        }
    }
}

/// Computes statistics over the whole store
pub fn compute_stats(store: &TermStore) -> StoreResult<Stats> {
    Ok(Stats::from_rows(store.scan_classification()?))
}
