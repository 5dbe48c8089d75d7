//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`NavHubError`]
//! via `#[from]`. Validation messages are the user-facing texts returned by
//! the HTTP API, so they are kept in the site's language.

/// Top-level error for domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum NavHubError {
    /// Caller-supplied input is malformed or references a missing entity.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// Persistence failed. The concrete error stays opaque to callers.
    #[error("storage error")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Input validation failures, in the order they are checked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("服务名称不能为空")]
    EmptyServiceName,

    #[error("服务网址不能为空")]
    EmptyServiceUrl,

    #[error("服务简介不能为空")]
    EmptyServiceDescription,

    #[error("所属分类不能为空")]
    MissingCategory,

    /// The referenced category does not exist. Checked after all field rules.
    #[error("所选分类不存在")]
    CategoryNotFound,

    #[error("分类名称不能为空")]
    EmptyCategoryName,

    #[error("分类别名格式不正确")]
    InvalidCategorySlug,

    #[error("分类别名已存在")]
    DuplicateCategorySlug,

    #[error("搜索关键词不能为空")]
    EmptySearchQuery,

    #[error("请求体格式不正确")]
    MalformedBody,

    /// A path segment that should be a row id is not an integer.
    #[error("无效的ID")]
    InvalidId,
}

/// A lookup by id found nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
