//! Request handlers
//!
//! Each handler is a single stateless request/response cycle; the only shared
//! input is the read-only generation config in [`AppState`].

use axum::{
    Json,
    extract::{Query, State},
    http::Uri,
    response::Html,
};
use chrono::{SecondsFormat, Utc};
use jumble_core::{Generator, RequestParams, RngSource, Value};
use tracing::{debug, instrument};

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::types::{ComplexArrayResponse, INDEX_HTML, RESPONSE_DESCRIPTION, ResponseParameters};

/// `GET /`
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /api/complex-array?size=<int>&maxDepth=<int>`
///
/// Both parameters are optional and never rejected; see [`RequestParams::resolve`].
#[instrument(skip_all)]
pub async fn complex_array(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> ApiResult<Json<ComplexArrayResponse>> {
    let params = RequestParams::resolve(
        first_value(&query, "size"),
        first_value(&query, "maxDepth"),
        &state.generation,
    );
    debug!(size = params.size, max_depth = params.max_depth, "Resolved request parameters");

    let config = state.generation.clone();
    let data = tokio::task::spawn_blocking(move || -> Vec<Value> {
        let mut rng = RngSource::thread();
        Generator::new(&config).generate_batch(&mut rng, params.size, params.max_depth)
    })
    .await
    .map_err(|e| ApiError::Internal { message: format!("generation task failed: {e}") })?;

    Ok(Json(ComplexArrayResponse {
        description: RESPONSE_DESCRIPTION.to_string(),
        parameters: ResponseParameters {
            size: params.size,
            max_depth: params.max_depth,
            generated_timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        },
        data,
    }))
}

/// Fallback for unknown paths and unsupported methods
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound { path: uri.path().to_string() }
}

/// First value for `key`; later repeats are ignored.
fn first_value<'a>(query: &'a [(String, String)], key: &str) -> Option<&'a str> {
    query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}
