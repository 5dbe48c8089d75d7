//! Public site settings handler.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use navhub_app::ports::{AdminVerifier, CategoryRepository, ServiceRepository, SettingsRepository};
use navhub_domain::setting::{SiteMetadata, SiteSettings};

use crate::state::AppState;

/// Resolved settings plus the page metadata derived from them.
#[derive(Debug, Serialize)]
pub struct SettingsBody {
    pub settings: SiteSettings,
    pub metadata: SiteMetadata,
    /// `true` when the store was unreachable and defaults are served.
    pub degraded: bool,
}

/// Possible responses from the settings endpoint.
pub enum GetResponse {
    Ok(Json<SettingsBody>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/settings`. Always succeeds.
pub async fn get<S, C, T, V>(State(state): State<AppState<S, C, T, V>>) -> GetResponse
where
    S: ServiceRepository + Send + Sync + 'static,
    C: CategoryRepository + Send + Sync + 'static,
    T: SettingsRepository + Send + Sync + 'static,
    V: AdminVerifier + Send + Sync + 'static,
{
    let resolution = state.settings.site_settings().await;
    let degraded = resolution.is_degraded();
    let settings = resolution.into_settings();
    GetResponse::Ok(Json(SettingsBody {
        metadata: settings.metadata(),
        settings,
        degraded,
    }))
}
