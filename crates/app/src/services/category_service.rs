//! Category service — use-cases for managing categories.

use navhub_domain::category::{Category, NewCategory};
use navhub_domain::error::{NavHubError, NotFoundError};
use navhub_domain::id::CategoryId;

use crate::ports::CategoryRepository;

/// Application service for category operations.
pub struct CategoryService<R> {
    repo: R,
}

impl<R: CategoryRepository> CategoryService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new category after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`NavHubError::Validation`] if invariants fail or the slug is
    /// already taken, or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, category), fields(slug = %category.slug))]
    pub async fn create_category(&self, category: NewCategory) -> Result<Category, NavHubError> {
        category.validate()?;
        self.repo.create(category).await
    }

    /// Look up a category by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`NavHubError::NotFound`] when no category with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_category(&self, id: CategoryId) -> Result<Category, NavHubError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Category",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all categories.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_categories(&self) -> Result<Vec<Category>, NavHubError> {
        self.repo.get_all().await
    }
}
