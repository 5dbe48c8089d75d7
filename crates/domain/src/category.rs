//! Category — a named grouping of services, exposing a slug for linking.

use serde::{Deserialize, Serialize};

use crate::error::{NavHubError, ValidationError};
use crate::id::CategoryId;
use crate::time::Timestamp;

/// A persisted category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A category that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
}

impl NewCategory {
    /// Create a builder for constructing a [`NewCategory`].
    #[must_use]
    pub fn builder() -> NewCategoryBuilder {
        NewCategoryBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyCategoryName`] when `name` is blank and
    /// [`ValidationError::InvalidCategorySlug`] when `slug` is not made of
    /// lowercase ASCII letters, digits and inner dashes.
    pub fn validate(&self) -> Result<(), NavHubError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyCategoryName.into());
        }
        if !is_valid_slug(&self.slug) {
            return Err(ValidationError::InvalidCategorySlug.into());
        }
        Ok(())
    }
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Step-by-step builder for [`NewCategory`].
#[derive(Debug, Default)]
pub struct NewCategoryBuilder {
    name: Option<String>,
    slug: Option<String>,
}

impl NewCategoryBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Consume the builder, validate, and return a [`NewCategory`].
    ///
    /// # Errors
    ///
    /// Returns [`NavHubError::Validation`] if `name` or `slug` is invalid.
    pub fn build(self) -> Result<NewCategory, NavHubError> {
        let category = NewCategory {
            name: self.name.unwrap_or_default(),
            slug: self.slug.unwrap_or_default(),
        };
        category.validate()?;
        Ok(category)
    }
}
