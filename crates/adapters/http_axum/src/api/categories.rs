//! Admin JSON handlers for categories.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use navhub_app::ports::{AdminVerifier, CategoryRepository, ServiceRepository, SettingsRepository};
use navhub_domain::category::{Category, NewCategory};
use navhub_domain::id::CategoryId;

use crate::api::{Envelope, json_body, path_id};
use crate::error::ApiError;
use crate::state::AppState;

const CREATED_MESSAGE: &str = "创建分类成功";

/// Request body for creating a category.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub slug: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Envelope<Vec<Category>>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Envelope<Category>>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Envelope<Category>>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/admin/categories`
pub async fn list<S, C, T, V>(
    State(state): State<AppState<S, C, T, V>>,
) -> Result<ListResponse, ApiError>
where
    S: ServiceRepository + Send + Sync + 'static,
    C: CategoryRepository + Send + Sync + 'static,
    T: SettingsRepository + Send + Sync + 'static,
    V: AdminVerifier + Send + Sync + 'static,
{
    let categories = state.categories.list_categories().await?;
    Ok(ListResponse::Ok(Envelope::ok(categories)))
}

/// `GET /api/admin/categories/{id}`
pub async fn get<S, C, T, V>(
    State(state): State<AppState<S, C, T, V>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<GetResponse, ApiError>
where
    S: ServiceRepository + Send + Sync + 'static,
    C: CategoryRepository + Send + Sync + 'static,
    T: SettingsRepository + Send + Sync + 'static,
    V: AdminVerifier + Send + Sync + 'static,
{
    let id = path_id(id)?;
    let category = state.categories.get_category(CategoryId::new(id)).await?;
    Ok(GetResponse::Ok(Envelope::ok(category)))
}

/// `POST /api/admin/categories`
pub async fn create<S, C, T, V>(
    State(state): State<AppState<S, C, T, V>>,
    body: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    S: ServiceRepository + Send + Sync + 'static,
    C: CategoryRepository + Send + Sync + 'static,
    T: SettingsRepository + Send + Sync + 'static,
    V: AdminVerifier + Send + Sync + 'static,
{
    let req = json_body(body)?;
    let category = NewCategory::builder()
        .name(req.name)
        .slug(req.slug)
        .build()?;
    let created = state.categories.create_category(category).await?;
    Ok(CreateResponse::Created(Envelope::with_message(
        created,
        CREATED_MESSAGE,
    )))
}
