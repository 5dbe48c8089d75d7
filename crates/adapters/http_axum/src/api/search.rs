//! Public search handler.

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use navhub_app::ports::{AdminVerifier, CategoryRepository, ServiceRepository, SettingsRepository};
use navhub_domain::service::SearchHit;

use crate::api::Envelope;
use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for `GET /api/search`.
#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Possible responses from the search endpoint.
pub enum SearchResponse {
    Ok(Json<Envelope<Vec<SearchHit>>>),
}

impl IntoResponse for SearchResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/search?q=...`
pub async fn search<S, C, T, V>(
    State(state): State<AppState<S, C, T, V>>,
    Query(params): Query<SearchParams>,
) -> Result<SearchResponse, ApiError>
where
    S: ServiceRepository + Send + Sync + 'static,
    C: CategoryRepository + Send + Sync + 'static,
    T: SettingsRepository + Send + Sync + 'static,
    V: AdminVerifier + Send + Sync + 'static,
{
    let hits = state.directory.search(params.q.as_deref()).await?;
    Ok(SearchResponse::Ok(Envelope::ok(hits)))
}
