use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tracing::warn;

use super::domain::CandidateId;
use super::query::{
    filter_candidates, search_candidates, CandidateQuery, FilterParams, FilterSpec,
};
use super::store::{CandidateStore, StoreError};
use super::validation::CandidateDraft;

pub const NOT_FOUND_MESSAGE: &str = "Candidate not found";
pub const DELETED_MESSAGE: &str = "Candidate deleted successfully";

#[derive(Debug, Clone, Copy)]
enum Mutation {
    Create,
    Update,
}

impl Mutation {
    const fn failure_message(self) -> &'static str {
        match self {
            Mutation::Create => "Failed to create candidate",
            Mutation::Update => "Failed to update candidate",
        }
    }
}

/// Router exposing candidate CRUD, search, and filter endpoints.
pub fn candidate_router(store: Arc<CandidateStore>) -> Router {
    Router::new()
        .route("/candidates", get(list_handler).post(create_handler))
        .route("/candidates/search", get(search_handler))
        .route("/candidates/filter", get(filter_handler))
        .route("/candidates/query", get(query_handler))
        .route(
            "/candidates/:id",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .with_state(store)
}

pub(crate) async fn list_handler(State(store): State<Arc<CandidateStore>>) -> Response {
    (StatusCode::OK, Json(store.list())).into_response()
}

pub(crate) async fn get_handler(
    State(store): State<Arc<CandidateStore>>,
    Path(raw_id): Path<String>,
) -> Response {
    let Some(id) = parse_id(&raw_id) else {
        return not_found();
    };

    match store.get(id) {
        Ok(candidate) => (StatusCode::OK, Json(candidate)).into_response(),
        Err(error) => store_error_response(error),
    }
}

pub(crate) async fn create_handler(
    State(store): State<Arc<CandidateStore>>,
    body: Bytes,
) -> Response {
    let draft = match parse_draft(Mutation::Create, &body) {
        Ok(draft) => draft,
        Err(response) => return response,
    };

    match store.create(draft) {
        Ok(candidate) => (StatusCode::CREATED, Json(candidate)).into_response(),
        Err(error) => store_error_response(error),
    }
}

pub(crate) async fn update_handler(
    State(store): State<Arc<CandidateStore>>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Response {
    let draft = match parse_draft(Mutation::Update, &body) {
        Ok(draft) => draft,
        Err(response) => return response,
    };
    let Some(id) = parse_id(&raw_id) else {
        return not_found();
    };

    match store.update(id, draft) {
        Ok(candidate) => (StatusCode::OK, Json(candidate)).into_response(),
        Err(error) => store_error_response(error),
    }
}

pub(crate) async fn delete_handler(
    State(store): State<Arc<CandidateStore>>,
    Path(raw_id): Path<String>,
) -> Response {
    let Some(id) = parse_id(&raw_id) else {
        return not_found();
    };

    match store.delete(id) {
        Ok(_) => (StatusCode::OK, Json(json!({ "message": DELETED_MESSAGE }))).into_response(),
        Err(error) => store_error_response(error),
    }
}

pub(crate) async fn search_handler(
    State(store): State<Arc<CandidateStore>>,
    pairs: Option<Query<QueryPairs>>,
) -> Response {
    let params = filter_params(pairs);
    let search = params.q.unwrap_or_default();
    let matches = search_candidates(&store.list(), &search);
    (StatusCode::OK, Json(matches)).into_response()
}

pub(crate) async fn filter_handler(
    State(store): State<Arc<CandidateStore>>,
    pairs: Option<Query<QueryPairs>>,
) -> Response {
    let params = filter_params(pairs);
    let filter = FilterSpec::from_params(&params);
    let matches = filter_candidates(&store.list(), "", &filter);
    (StatusCode::OK, Json(matches)).into_response()
}

pub(crate) async fn query_handler(
    State(store): State<Arc<CandidateStore>>,
    pairs: Option<Query<QueryPairs>>,
) -> Response {
    let params = filter_params(pairs);
    let query = CandidateQuery::from(&params);
    (StatusCode::OK, Json(query.apply(&store.list()))).into_response()
}

fn parse_id(raw: &str) -> Option<CandidateId> {
    raw.trim().parse::<u64>().ok().map(CandidateId)
}

fn not_found() -> Response {
    let payload = json!({ "error": NOT_FOUND_MESSAGE });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}

/// Decoded query pairs in request order, duplicates included.
type QueryPairs = Vec<(String, String)>;

fn filter_params(pairs: Option<Query<QueryPairs>>) -> FilterParams {
    pairs
        .map(|Query(pairs)| FilterParams::from_pairs(pairs))
        .unwrap_or_default()
}

/// Bodies are read as JSON regardless of the declared content type.
fn parse_draft(mutation: Mutation, body: &[u8]) -> Result<CandidateDraft, Response> {
    serde_json::from_slice(body).map_err(|error| {
        warn!(%error, ?mutation, "malformed candidate payload");
        let payload = json!({ "error": mutation.failure_message() });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
    })
}

fn store_error_response(error: StoreError) -> Response {
    match error {
        StoreError::NotFound(_) => not_found(),
        StoreError::Validation(error) => {
            let payload = json!({
                "error": "candidate failed validation",
                "violations": error.violations,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}
