//! Admin JSON handler for directory statistics.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use navhub_app::ports::{AdminVerifier, CategoryRepository, ServiceRepository, SettingsRepository};
use navhub_domain::stats::DirectoryStats;

use crate::api::Envelope;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the stats endpoint.
pub enum GetResponse {
    Ok(Json<Envelope<DirectoryStats>>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/admin/stats`
pub async fn get<S, C, T, V>(
    State(state): State<AppState<S, C, T, V>>,
) -> Result<GetResponse, ApiError>
where
    S: ServiceRepository + Send + Sync + 'static,
    C: CategoryRepository + Send + Sync + 'static,
    T: SettingsRepository + Send + Sync + 'static,
    V: AdminVerifier + Send + Sync + 'static,
{
    let stats = state.directory.stats().await?;
    Ok(GetResponse::Ok(Envelope::ok(stats)))
}
