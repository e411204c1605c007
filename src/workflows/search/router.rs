use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use super::catalog::PropertyCatalog;
use super::domain::{Property, PropertyId, SearchFilters, SortSpec};
use super::engine;

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Candidate listings; the served catalog is used when omitted.
    #[serde(default)]
    pub properties: Option<Vec<Property>>,
    #[serde(default)]
    pub filters: SearchFilters,
    #[serde(default)]
    pub sort: SortSpec,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub count: usize,
    pub results: Vec<Property>,
}

/// Router builder exposing listing search over a shared catalog.
pub fn search_router(catalog: Arc<PropertyCatalog>) -> Router {
    Router::new()
        .route("/api/v1/properties/search", post(search_handler))
        .route("/api/v1/properties/facets", get(facets_handler))
        .route("/api/v1/properties/:property_id", get(detail_handler))
        .with_state(catalog)
}

pub(crate) async fn search_handler(
    State(catalog): State<Arc<PropertyCatalog>>,
    Json(request): Json<SearchRequest>,
) -> Json<SearchResponse> {
    let SearchRequest {
        properties,
        filters,
        sort,
    } = request;

    let results = match properties {
        Some(candidates) => engine::search(&candidates, &filters, sort),
        None => catalog.search(&filters, sort),
    };

    debug!(
        matches = results.len(),
        sort_by = ?sort.sort_by,
        "listing search evaluated"
    );

    Json(SearchResponse {
        count: results.len(),
        results,
    })
}

pub(crate) async fn facets_handler(State(catalog): State<Arc<PropertyCatalog>>) -> Response {
    (StatusCode::OK, Json(catalog.facets().clone())).into_response()
}

pub(crate) async fn detail_handler(
    State(catalog): State<Arc<PropertyCatalog>>,
    Path(property_id): Path<u64>,
) -> Response {
    match catalog.get(PropertyId(property_id)) {
        Some(property) => (StatusCode::OK, Json(property.clone())).into_response(),
        None => {
            let payload = json!({
                "error": format!("property {property_id} not found"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
