//! Storage port — repository traits for persistence.

use std::future::Future;

use navhub_domain::category::{Category, NewCategory};
use navhub_domain::error::NavHubError;
use navhub_domain::id::{CategoryId, ServiceId};
use navhub_domain::search::SearchQuery;
use navhub_domain::service::{NewService, SearchHit, Service, ServiceRecord};
use navhub_domain::setting::Setting;

/// Repository for persisting and querying [`Category`]s.
pub trait CategoryRepository {
    /// Insert a new category.
    ///
    /// Fails with [`ValidationError::DuplicateCategorySlug`] when the slug is taken.
    ///
    /// [`ValidationError::DuplicateCategorySlug`]: navhub_domain::error::ValidationError::DuplicateCategorySlug
    fn create(
        &self,
        category: NewCategory,
    ) -> impl Future<Output = Result<Category, NavHubError>> + Send;

    /// Get a category by its unique identifier.
    fn get_by_id(
        &self,
        id: CategoryId,
    ) -> impl Future<Output = Result<Option<Category>, NavHubError>> + Send;

    /// Get all categories, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Category>, NavHubError>> + Send;

    /// Count stored categories.
    fn count(&self) -> impl Future<Output = Result<i64, NavHubError>> + Send;
}

/// Repository for persisting and querying [`Service`]s.
pub trait ServiceRepository {
    /// Insert a service after checking that its category exists, atomically.
    ///
    /// Fails with [`ValidationError::CategoryNotFound`] when the category is missing.
    ///
    /// [`ValidationError::CategoryNotFound`]: navhub_domain::error::ValidationError::CategoryNotFound
    fn create(
        &self,
        service: NewService,
    ) -> impl Future<Output = Result<ServiceRecord, NavHubError>> + Send;

    /// Replace the editable fields of an existing service.
    ///
    /// Returns `Ok(None)` when no service has this id. Fails with
    /// [`ValidationError::CategoryNotFound`] when the new category is missing.
    ///
    /// [`ValidationError::CategoryNotFound`]: navhub_domain::error::ValidationError::CategoryNotFound
    fn update(
        &self,
        id: ServiceId,
        service: NewService,
    ) -> impl Future<Output = Result<Option<ServiceRecord>, NavHubError>> + Send;

    /// Get a service by its unique identifier.
    fn get_by_id(
        &self,
        id: ServiceId,
    ) -> impl Future<Output = Result<Option<Service>, NavHubError>> + Send;

    /// Get every service with its category name, newest id first.
    fn get_all(&self) -> impl Future<Output = Result<Vec<ServiceRecord>, NavHubError>> + Send;

    /// Substring search over name and description, most clicked first.
    fn search(
        &self,
        query: &SearchQuery,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<SearchHit>, NavHubError>> + Send;

    /// Count stored services.
    fn count(&self) -> impl Future<Output = Result<i64, NavHubError>> + Send;

    /// Sum of all click counts, zero when there are no services.
    fn total_clicks(&self) -> impl Future<Output = Result<i64, NavHubError>> + Send;

    /// Increment a service's click counter. Returns the updated service, or
    /// `None` when it does not exist.
    fn record_click(
        &self,
        id: ServiceId,
    ) -> impl Future<Output = Result<Option<Service>, NavHubError>> + Send;
}

/// Read-only access to the site settings table.
pub trait SettingsRepository {
    /// Get every stored setting row, in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Setting>, NavHubError>> + Send;
}
