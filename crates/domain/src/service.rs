//! Service — a directory entry linking to an external URL with display metadata.
//!
//! Not to be confused with the application-layer services in `navhub-app`:
//! here a "service" is one listed website or tool.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::id::{CategoryId, ServiceId};
use crate::time::Timestamp;

/// A persisted directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub url: String,
    pub description: String,
    pub icon: Option<String>,
    pub category_id: CategoryId,
    /// Popularity counter. Only ever incremented.
    pub click_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A service annotated with its category's name, as returned to admins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    #[serde(flatten)]
    pub service: Service,
    pub category_name: String,
}

/// Flattened search result row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: ServiceId,
    pub name: String,
    pub url: String,
    pub description: String,
    pub icon: Option<String>,
    pub click_count: i64,
    pub category_id: CategoryId,
    pub category_name: String,
    pub category_slug: String,
}

/// Untyped create/update payload exactly as the client sent it.
///
/// Fields stay as raw JSON values so that type mismatches (a number where a
/// string is expected) are reported with the same per-field message as a
/// missing value, in a fixed order.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceDraft {
    pub name: Value,
    pub url: Value,
    pub description: Value,
    pub category_id: Value,
    pub icon: Value,
}

/// A validated service that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewService {
    pub name: String,
    pub url: String,
    pub description: String,
    pub category_id: CategoryId,
    pub icon: Option<String>,
}

impl TryFrom<ServiceDraft> for NewService {
    type Error = ValidationError;

    /// Validates fail-fast in the order name, url, description, category id.
    fn try_from(draft: ServiceDraft) -> Result<Self, Self::Error> {
        let name = non_empty_string(draft.name).ok_or(ValidationError::EmptyServiceName)?;
        let url = non_empty_string(draft.url).ok_or(ValidationError::EmptyServiceUrl)?;
        let description = non_empty_string(draft.description)
            .ok_or(ValidationError::EmptyServiceDescription)?;
        let category_id = category_id(&draft.category_id)?;

        Ok(Self {
            name,
            url,
            description,
            category_id,
            icon: non_empty_string(draft.icon),
        })
    }
}

/// Absent, non-numeric and zero ids count as missing. Any other number is an
/// id reference; one that cannot name a row (fractional, out of range) is
/// reported as a category that does not exist.
fn category_id(value: &Value) -> Result<CategoryId, ValidationError> {
    let Value::Number(number) = value else {
        return Err(ValidationError::MissingCategory);
    };
    if number.as_f64() == Some(0.0) {
        return Err(ValidationError::MissingCategory);
    }
    number
        .as_i64()
        .map(CategoryId::new)
        .ok_or(ValidationError::CategoryNotFound)
}

fn non_empty_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    }
}
