//! # Glossary Routes
//!
//! Axum handlers mapping the HTTP surface onto the term store and the stats
//! aggregator. Every path is served with and without a trailing slash.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::info;

use super::errors::{RestError, RestResult};
use super::parser::{ListQuery, DEFAULT_LIMIT};
use super::response::MessageResponse;
use crate::observability::Event;
use crate::schema::{parse_rendering_type, Term, TermCreate, TermUpdate};
use crate::stats::{compute_stats, Stats};
use crate::storage::TermStore;

/// State shared by every glossary handler
#[derive(Debug)]
pub struct GlossaryState {
    pub store: TermStore,
    pub default_list_limit: u64,
}

impl GlossaryState {
    pub fn new(store: TermStore) -> Self {
        Self {
            store,
            default_list_limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_default_limit(mut self, limit: u64) -> Self {
        self.default_list_limit = limit;
        self
    }
}

/// Shared state type
type AppState = Arc<GlossaryState>;

/// Build the glossary router
pub fn glossary_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/terms", get(list_handler).post(create_handler))
        .route("/terms/", get(list_handler).post(create_handler))
        .route(
            "/terms/:id",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .route(
            "/terms/:id/",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .route("/terms/type/:rendering_type", get(by_type_handler))
        .route("/terms/type/:rendering_type/", get(by_type_handler))
        .route("/terms/framework/:name", get(by_framework_handler))
        .route("/terms/framework/:name/", get(by_framework_handler))
        .route("/stats", get(stats_handler))
        .route("/stats/", get(stats_handler))
        .with_state(state)
}

async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse::welcome())
}

/// Create term handler
async fn create_handler(
    State(state): State<AppState>,
    body: Result<Json<TermCreate>, JsonRejection>,
) -> RestResult<(StatusCode, Json<Term>)> {
    let Json(body) = body?;
    let new_term = body.validate()?;

    if state.store.get_by_name(&new_term.name)?.is_some() {
        return Err(RestError::term_exists());
    }

    let term = state.store.create(&new_term)?;
    info!(
        event = Event::TermCreated.as_str(),
        id = term.id,
        name = %term.name
    );
    Ok((StatusCode::CREATED, Json(term)))
}

/// List terms handler
async fn list_handler(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> RestResult<Json<Vec<Term>>> {
    let Query(query) = query?;
    let params = query.parse(state.default_list_limit)?;
    let terms = state
        .store
        .list(params.offset, params.limit, params.rendering_type)?;
    Ok(Json(terms))
}

/// Get single term handler
async fn get_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> RestResult<Json<Term>> {
    let Path(id) = id?;
    let term = state
        .store
        .get_by_id(id)?
        .ok_or_else(RestError::term_not_found)?;
    Ok(Json(term))
}

/// Terms of one rendering type; an empty result is a 404
async fn by_type_handler(
    State(state): State<AppState>,
    raw: Result<Path<String>, PathRejection>,
) -> RestResult<Json<Vec<Term>>> {
    let Path(raw) = raw?;
    let rendering_type = parse_rendering_type(&raw)?;
    let terms = state.store.list_by_rendering_type(rendering_type)?;
    if terms.is_empty() {
        return Err(RestError::NotFound(format!(
            "No terms found for rendering type {}",
            rendering_type
        )));
    }
    Ok(Json(terms))
}

/// Terms using one framework; an empty result is a 404
async fn by_framework_handler(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> RestResult<Json<Vec<Term>>> {
    let Path(name) = name?;
    let terms = state.store.list_by_framework(&name)?;
    if terms.is_empty() {
        return Err(RestError::NotFound(format!(
            "No terms found for framework {}",
            name
        )));
    }
    Ok(Json(terms))
}

/// Partial update handler
async fn update_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<TermUpdate>, JsonRejection>,
) -> RestResult<Json<Term>> {
    let Path(id) = id?;
    let Json(body) = body?;
    let patch = body.validate()?;

    // An absent id is a 404 even when the new name is taken
    if let Some(name) = patch.renamed_to() {
        let current = state
            .store
            .get_by_id(id)?
            .ok_or_else(RestError::term_not_found)?;
        if name != current.name && state.store.get_by_name(name)?.is_some() {
            return Err(RestError::term_exists());
        }
    }

    let term = state
        .store
        .update(id, &patch)?
        .ok_or_else(RestError::term_not_found)?;
    info!(
        event = Event::TermUpdated.as_str(),
        id,
        fields = patch.changes().len()
    );
    Ok(Json(term))
}

/// Delete handler
async fn delete_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> RestResult<Json<MessageResponse>> {
    let Path(id) = id?;
    if !state.store.delete(id)? {
        return Err(RestError::term_not_found());
    }
    info!(event = Event::TermDeleted.as_str(), id);
    Ok(Json(MessageResponse::deleted()))
}

/// Aggregate statistics handler
async fn stats_handler(State(state): State<AppState>) -> RestResult<Json<Stats>> {
    Ok(Json(compute_stats(&state.store)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;

    #[test]
    fn test_router_builds() {
        let store = TermStore::new(Database::open_in_memory().unwrap());
        let _router = glossary_routes(Arc::new(GlossaryState::new(store)));
        // If we get here, route registration did not conflict
    }

    #[test]
    fn test_default_limit_override() {
        let store = TermStore::new(Database::open_in_memory().unwrap());
        let state = GlossaryState::new(store).with_default_limit(10);
        assert_eq!(state.default_list_limit, 10);
    }
}
