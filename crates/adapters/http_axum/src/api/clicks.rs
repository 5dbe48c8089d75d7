//! Public click recorder used by the listing cards.

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use navhub_app::ports::{AdminVerifier, CategoryRepository, ServiceRepository, SettingsRepository};
use navhub_domain::id::ServiceId;

use crate::api::{Envelope, path_id};
use crate::error::ApiError;
use crate::state::AppState;

/// Where the client should navigate after the click is counted.
#[derive(Debug, Serialize)]
pub struct ClickTarget {
    pub id: ServiceId,
    pub url: String,
}

/// Possible responses from the click endpoint.
pub enum RecordResponse {
    Ok(Json<Envelope<ClickTarget>>),
}

impl IntoResponse for RecordResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/services/{id}/click`
pub async fn record<S, C, T, V>(
    State(state): State<AppState<S, C, T, V>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<RecordResponse, ApiError>
where
    S: ServiceRepository + Send + Sync + 'static,
    C: CategoryRepository + Send + Sync + 'static,
    T: SettingsRepository + Send + Sync + 'static,
    V: AdminVerifier + Send + Sync + 'static,
{
    let id = path_id(id)?;
    let service = state.directory.record_click(ServiceId::new(id)).await?;
    Ok(RecordResponse::Ok(Envelope::ok(ClickTarget {
        id: service.id,
        url: service.url,
    })))
}
