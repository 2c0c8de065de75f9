//! Term store property tests
//!
//! Exercises the store against an on-disk database so every operation goes
//! through its own connection, the way the server uses it.
//!
//! Test Categories:
//! 1. Round-trip and partial update
//! 2. Delete semantics
//! 3. Pagination
//! 4. Framework membership
//! 5. Statistics scenarios
//! 6. Validation and uniqueness scenarios
//! 7. Concurrent writers

use glossary::schema::{NewTerm, RenderingType, TermCreate, TermField, TermPatch, TermUpdate};
use glossary::stats::compute_stats;
use glossary::storage::{Database, StoreError, TermStore};
use serde_json::json;
use tempfile::TempDir;

fn open_store() -> (TempDir, TermStore) {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(dir.path().join("glossary.db")).unwrap();
    (dir, TermStore::new(db))
}

fn term(name: &str, rendering_type: RenderingType, frameworks: &[&str]) -> NewTerm {
    NewTerm {
        name: name.to_string(),
        description: format!("About {}", name),
        rendering_type,
        frameworks: frameworks.iter().map(|s| s.to_string()).collect(),
        use_cases: vec!["Blogs".to_string(), "Docs".to_string()],
        advantages: vec!["Fast".to_string()],
        disadvantages: vec![],
    }
}

// =============================================================================
// ROUND-TRIP AND PARTIAL UPDATE
// =============================================================================

/// A created term reads back identically by id.
#[test]
fn test_create_round_trip() {
    let (_dir, store) = open_store();

    let created = store
        .create(&term("Streaming SSR", RenderingType::Ssr, &["Qwik", "React 18"]))
        .unwrap();

    assert_eq!(store.get_by_id(created.id).unwrap(), Some(created));
}

/// An update supplying no fields leaves the record unchanged.
#[test]
fn test_empty_update_is_noop() {
    let (_dir, store) = open_store();
    let created = store
        .create(&term("SSG", RenderingType::Ssg, &["Hugo"]))
        .unwrap();

    let patch = TermUpdate::default().validate().unwrap();
    let updated = store.update(created.id, &patch).unwrap().unwrap();

    assert_eq!(updated, created);
    assert_eq!(store.get_by_id(created.id).unwrap(), Some(created));
}

/// An update changes exactly the supplied fields.
#[test]
fn test_partial_update_changes_only_supplied_fields() {
    let (_dir, store) = open_store();
    let created = store
        .create(&term("CSR", RenderingType::Csr, &["React"]))
        .unwrap();

    let update: TermUpdate = serde_json::from_value(json!({
        "rendering_type": "SSR",
        "use_cases": []
    }))
    .unwrap();
    let updated = store
        .update(created.id, &update.validate().unwrap())
        .unwrap()
        .unwrap();

    assert_eq!(updated.rendering_type, RenderingType::Ssr);
    assert!(updated.use_cases.is_empty());

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.frameworks, created.frameworks);
    assert_eq!(updated.advantages, created.advantages);
    assert_eq!(updated.disadvantages, created.disadvantages);
}

// =============================================================================
// DELETE
// =============================================================================

/// Deleted terms are gone; deleting again reports false.
#[test]
fn test_delete_then_get() {
    let (_dir, store) = open_store();
    let created = store
        .create(&term("DSR", RenderingType::Dsr, &[]))
        .unwrap();

    assert!(store.delete(created.id).unwrap());
    assert_eq!(store.get_by_id(created.id).unwrap(), None);
    assert!(!store.delete(created.id).unwrap());
    assert!(!store.delete(12345).unwrap());
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Consecutive pages partition the ordered result set.
#[test]
fn test_pages_partition_result_set() {
    let (_dir, store) = open_store();
    for i in 0..7 {
        store
            .create(&term(&format!("term-{}", i), RenderingType::Ssr, &[]))
            .unwrap();
    }

    let all: Vec<i64> = store.list(0, u64::MAX, None).unwrap().iter().map(|t| t.id).collect();
    assert_eq!(all.len(), 7);

    for n in 1..=3u64 {
        let first: Vec<i64> = store.list(0, n, None).unwrap().iter().map(|t| t.id).collect();
        let second: Vec<i64> = store.list(n, n, None).unwrap().iter().map(|t| t.id).collect();

        let mut joined = first.clone();
        joined.extend(&second);
        assert_eq!(joined, all[..(2 * n) as usize].to_vec());
        assert!(first.iter().all(|id| !second.contains(id)));
    }
}

/// The rendering-type filter applies before pagination.
#[test]
fn test_filtered_pagination() {
    let (_dir, store) = open_store();
    let types = [
        RenderingType::Ssr,
        RenderingType::Csr,
        RenderingType::Ssr,
        RenderingType::Isr,
        RenderingType::Ssr,
    ];
    for (i, t) in types.into_iter().enumerate() {
        store.create(&term(&format!("t{}", i), t, &[])).unwrap();
    }

    let page = store.list(1, 10, Some(RenderingType::Ssr)).unwrap();
    let names: Vec<_> = page.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["t2", "t4"]);

    assert_eq!(
        store
            .list_by_rendering_type(RenderingType::Isr)
            .unwrap()
            .len(),
        1
    );
    assert!(store
        .list_by_rendering_type(RenderingType::Dsr)
        .unwrap()
        .is_empty());
}

// =============================================================================
// FRAMEWORK MEMBERSHIP
// =============================================================================

/// Framework search returns exactly the terms listing the literal name.
#[test]
fn test_list_by_framework_exact_subset() {
    let (_dir, store) = open_store();
    let a = store
        .create(&term("a", RenderingType::Ssr, &["Next.js", "Nuxt.js"]))
        .unwrap();
    store
        .create(&term("b", RenderingType::Csr, &["React"]))
        .unwrap();
    let c = store
        .create(&term("c", RenderingType::Isr, &["Next.js"]))
        .unwrap();
    store
        .create(&term("d", RenderingType::Ssg, &["NEXT.JS", "Next.js 14"]))
        .unwrap();

    let hits: Vec<i64> = store
        .list_by_framework("Next.js")
        .unwrap()
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(hits, vec![a.id, c.id]);
}

// =============================================================================
// STATISTICS
// =============================================================================

/// Single SSR term using Next.js.
#[test]
fn test_stats_single_term() {
    let (_dir, store) = open_store();
    store
        .create(&term("SSR", RenderingType::Ssr, &["Next.js"]))
        .unwrap();

    let stats = compute_stats(&store).unwrap();
    assert_eq!(stats.total_terms, 1);
    assert_eq!(stats.rendering_type_distribution[&RenderingType::Ssr], 1);
    assert!(stats.unique_frameworks.contains("Next.js"));
    assert_eq!(stats.total_frameworks_covered, 1);
}

/// Two terms sharing a framework are both found; the framework counts once.
#[test]
fn test_stats_deduplicates_frameworks() {
    let (_dir, store) = open_store();
    store
        .create(&term("SSR", RenderingType::Ssr, &["Next.js"]))
        .unwrap();
    store
        .create(&term("ISR", RenderingType::Isr, &["Next.js"]))
        .unwrap();

    assert_eq!(store.list_by_framework("Next.js").unwrap().len(), 2);

    let stats = compute_stats(&store).unwrap();
    assert_eq!(stats.total_frameworks_covered, 1);
    assert_eq!(stats.rendering_type_distribution.len(), 5);
}

/// Rows with a legacy rendering type count toward the total only.
#[test]
fn test_stats_with_legacy_row() {
    let (dir, store) = open_store();
    store
        .create(&term("CSR", RenderingType::Csr, &["Svelte"]))
        .unwrap();
    Database::open(dir.path().join("glossary.db"))
        .unwrap()
        .connect()
        .unwrap()
        .execute(
            "INSERT INTO terms (name, description, rendering_type, frameworks, use_cases, advantages, disadvantages)
             VALUES ('MPA', 'legacy', 'MPA', '[\"Rails\"]', '[]', '[]', '[]')",
            [],
        )
        .unwrap();

    let stats = compute_stats(&store).unwrap();
    assert_eq!(stats.total_terms, 2);
    assert_eq!(stats.rendering_type_distribution.values().sum::<u64>(), 1);
    assert_eq!(stats.total_frameworks_covered, 2);
}

// =============================================================================
// VALIDATION AND UNIQUENESS
// =============================================================================

/// An out-of-domain rendering type is rejected before the store is touched.
#[test]
fn test_unknown_rendering_type_rejected_before_store() {
    let (_dir, store) = open_store();
    let payload: TermCreate = serde_json::from_value(json!({
        "name": "XSR",
        "description": "Not a thing",
        "rendering_type": "XSR",
        "frameworks": [],
        "use_cases": [],
        "advantages": [],
        "disadvantages": []
    }))
    .unwrap();

    assert!(payload.validate().is_err());
    assert_eq!(store.count().unwrap(), 0);
}

/// A second "Hydration" is a conflict and leaves one record.
#[test]
fn test_duplicate_name_conflict() {
    let (_dir, store) = open_store();
    store
        .create(&term("Hydration", RenderingType::Ssr, &["Next.js"]))
        .unwrap();

    let err = store
        .create(&term("Hydration", RenderingType::Ssr, &[]))
        .unwrap_err();
    assert!(matches!(err, StoreError::Conflict(_)));

    let all = store.list(0, u64::MAX, None).unwrap();
    assert_eq!(all.iter().filter(|t| t.name == "Hydration").count(), 1);
}

/// Data survives reopening the database file.
#[test]
fn test_persists_across_handles() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("glossary.db");

    let id = {
        let store = TermStore::new(Database::open(&path).unwrap());
        let created = store
            .create(&term("Hydration", RenderingType::Ssr, &["SvelteKit"]))
            .unwrap();
        let patch = TermPatch::new().set(TermField::Advantages(vec!["SEO friendly".to_string()]));
        store.update(created.id, &patch).unwrap();
        created.id
    };

    let store = TermStore::new(Database::open(&path).unwrap());
    let term = store.get_by_id(id).unwrap().unwrap();
    assert_eq!(term.frameworks, vec!["SvelteKit"]);
    assert_eq!(term.advantages, vec!["SEO friendly"]);
}

// =============================================================================
// CONCURRENT WRITERS
// =============================================================================

/// Writers racing on one row queue on the write lock; none fail as locked.
#[test]
fn test_concurrent_updates_on_one_term() {
    let (_dir, store) = open_store();
    let created = store
        .create(&term("ISR", RenderingType::Isr, &["Next.js"]))
        .unwrap();

    let failures: Vec<StoreError> = std::thread::scope(|scope| {
        let workers: Vec<_> = (0..8)
            .map(|worker| {
                let store = &store;
                scope.spawn(move || {
                    let mut failed = Vec::new();
                    for round in 0..50 {
                        let patch = TermPatch::new().set(TermField::Description(format!(
                            "worker {} round {}",
                            worker, round
                        )));
                        if let Err(e) = store.update(created.id, &patch) {
                            failed.push(e);
                        }
                    }
                    failed
                })
            })
            .collect();

        workers
            .into_iter()
            .flat_map(|w| w.join().unwrap())
            .collect()
    });

    assert!(failures.is_empty(), "failed updates: {:?}", failures);

    let term = store.get_by_id(created.id).unwrap().unwrap();
    assert!(term.description.ends_with("round 49"));
    assert_eq!(term.frameworks, vec!["Next.js"]);
}

/// Concurrent deletes of one row report it removed exactly once.
#[test]
fn test_concurrent_deletes_remove_once() {
    let (_dir, store) = open_store();
    let created = store
        .create(&term("DSR", RenderingType::Dsr, &[]))
        .unwrap();

    let removed = std::thread::scope(|scope| {
        let workers: Vec<_> = (0..8)
            .map(|_| {
                let store = &store;
                scope.spawn(move || store.delete(created.id).unwrap())
            })
            .collect();

        workers
            .into_iter()
            .map(|w| w.join().unwrap())
            .filter(|removed| *removed)
            .count()
    });

    assert_eq!(removed, 1);
    assert_eq!(store.count().unwrap(), 0);
}

