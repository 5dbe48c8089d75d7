//! Admin JSON handlers for services.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use navhub_app::ports::{AdminVerifier, CategoryRepository, ServiceRepository, SettingsRepository};
use navhub_domain::id::ServiceId;
use navhub_domain::service::{ServiceDraft, ServiceRecord};

use crate::api::{Envelope, json_body, path_id};
use crate::error::ApiError;
use crate::state::AppState;

const CREATED_MESSAGE: &str = "创建服务成功";
const UPDATED_MESSAGE: &str = "更新服务成功";

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Envelope<Vec<ServiceRecord>>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Envelope<ServiceRecord>>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Envelope<ServiceRecord>>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/admin/services`
pub async fn list<S, C, T, V>(
    State(state): State<AppState<S, C, T, V>>,
) -> Result<ListResponse, ApiError>
where
    S: ServiceRepository + Send + Sync + 'static,
    C: CategoryRepository + Send + Sync + 'static,
    T: SettingsRepository + Send + Sync + 'static,
    V: AdminVerifier + Send + Sync + 'static,
{
    let services = state.directory.list_services().await?;
    Ok(ListResponse::Ok(Envelope::ok(services)))
}

/// `POST /api/admin/services`
pub async fn create<S, C, T, V>(
    State(state): State<AppState<S, C, T, V>>,
    body: Result<Json<ServiceDraft>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    S: ServiceRepository + Send + Sync + 'static,
    C: CategoryRepository + Send + Sync + 'static,
    T: SettingsRepository + Send + Sync + 'static,
    V: AdminVerifier + Send + Sync + 'static,
{
    let draft = json_body(body)?;
    let record = state.directory.create_service(draft).await?;
    Ok(CreateResponse::Created(Envelope::with_message(
        record,
        CREATED_MESSAGE,
    )))
}

/// `PUT /api/admin/services/{id}`
pub async fn update<S, C, T, V>(
    State(state): State<AppState<S, C, T, V>>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<ServiceDraft>, JsonRejection>,
) -> Result<UpdateResponse, ApiError>
where
    S: ServiceRepository + Send + Sync + 'static,
    C: CategoryRepository + Send + Sync + 'static,
    T: SettingsRepository + Send + Sync + 'static,
    V: AdminVerifier + Send + Sync + 'static,
{
    let id = path_id(id)?;
    let draft = json_body(body)?;
    let record = state
        .directory
        .update_service(ServiceId::new(id), draft)
        .await?;
    Ok(UpdateResponse::Ok(Envelope::with_message(
        record,
        UPDATED_MESSAGE,
    )))
}
