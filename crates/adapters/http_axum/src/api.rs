//! JSON API handler modules and the success envelope they share.

#[allow(clippy::missing_errors_doc)]
pub mod categories;
#[allow(clippy::missing_errors_doc)]
pub mod clicks;
#[allow(clippy::missing_errors_doc)]
pub mod search;
#[allow(clippy::missing_errors_doc)]
pub mod services;
#[allow(clippy::missing_errors_doc)]
pub mod settings;
#[allow(clippy::missing_errors_doc)]
pub mod stats;

use axum::Json;
use axum::Router;
use axum::extract::Path;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::routing::{get, post, put};
use serde::Serialize;

use navhub_app::ports::{AdminVerifier, CategoryRepository, ServiceRepository, SettingsRepository};
use navhub_domain::error::ValidationError;

use crate::error::ApiError;
use crate::state::AppState;

/// Successful response body: `{success: true, data, message?}`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
            message: None,
        })
    }

    pub fn with_message(data: T, message: &'static str) -> Json<Self> {
        Json(Self {
            success: true,
            data,
            message: Some(message),
        })
    }
}

/// Unwrap a JSON body, reporting any rejection as a malformed body.
pub(crate) fn json_body<B>(body: Result<Json<B>, JsonRejection>) -> Result<B, ApiError> {
    match body {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejected request body");
            Err(ValidationError::MalformedBody.into())
        }
    }
}

/// Unwrap a numeric `{id}` path segment, reporting anything else as an
/// invalid id.
pub(crate) fn path_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    match id {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejected path id");
            Err(ValidationError::InvalidId.into())
        }
    }
}

/// Build the `/api/admin` sub-router. The caller installs the admin guard.
pub fn admin_routes<S, C, T, V>() -> Router<AppState<S, C, T, V>>
where
    S: ServiceRepository + Send + Sync + 'static,
    C: CategoryRepository + Send + Sync + 'static,
    T: SettingsRepository + Send + Sync + 'static,
    V: AdminVerifier + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/services",
            get(services::list::<S, C, T, V>).post(services::create::<S, C, T, V>),
        )
        .route("/services/{id}", put(services::update::<S, C, T, V>))
        .route("/stats", get(stats::get::<S, C, T, V>))
        .route(
            "/categories",
            get(categories::list::<S, C, T, V>).post(categories::create::<S, C, T, V>),
        )
        .route("/categories/{id}", get(categories::get::<S, C, T, V>))
}

/// Build the public `/api` sub-router.
pub fn public_routes<S, C, T, V>() -> Router<AppState<S, C, T, V>>
where
    S: ServiceRepository + Send + Sync + 'static,
    C: CategoryRepository + Send + Sync + 'static,
    T: SettingsRepository + Send + Sync + 'static,
    V: AdminVerifier + Send + Sync + 'static,
{
    Router::new()
        .route("/search", get(search::search::<S, C, T, V>))
        .route("/services/{id}/click", post(clicks::record::<S, C, T, V>))
        .route("/settings", get(settings::get::<S, C, T, V>))
}
