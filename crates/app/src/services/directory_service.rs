//! Directory service — use-cases over listed services: admin listing and
//! creation, public search, click tracking and aggregate statistics.

use navhub_domain::error::{NavHubError, NotFoundError};
use navhub_domain::id::ServiceId;
use navhub_domain::search::{SEARCH_LIMIT, SearchQuery};
use navhub_domain::service::{NewService, SearchHit, Service, ServiceDraft, ServiceRecord};
use navhub_domain::stats::DirectoryStats;

use crate::ports::{CategoryRepository, ServiceRepository};

/// Application service for directory entries.
pub struct DirectoryService<S, C> {
    services: S,
    categories: C,
}

impl<S, C> DirectoryService<S, C>
where
    S: ServiceRepository,
    C: CategoryRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(services: S, categories: C) -> Self {
        Self {
            services,
            categories,
        }
    }

    /// List every service with its category name, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_services(&self) -> Result<Vec<ServiceRecord>, NavHubError> {
        self.services.get_all().await
    }

    /// Validate a raw payload and create the service.
    ///
    /// Field rules are checked before the category lookup, so a payload with
    /// a bad name and a missing category reports the name.
    ///
    /// # Errors
    ///
    /// Returns [`NavHubError::Validation`] for the first failing field or a
    /// missing category, or a storage error from the repository.
    #[tracing::instrument(skip(self, draft))]
    pub async fn create_service(&self, draft: ServiceDraft) -> Result<ServiceRecord, NavHubError> {
        let service = NewService::try_from(draft)?;
        let record = self.services.create(service).await?;
        tracing::info!(id = %record.service.id, name = %record.service.name, "service created");
        Ok(record)
    }

    /// Validate a raw payload and overwrite an existing service.
    ///
    /// # Errors
    ///
    /// Returns [`NavHubError::Validation`] as for creation,
    /// [`NavHubError::NotFound`] when no service has `id`, or a storage error.
    #[tracing::instrument(skip(self, draft))]
    pub async fn update_service(
        &self,
        id: ServiceId,
        draft: ServiceDraft,
    ) -> Result<ServiceRecord, NavHubError> {
        let service = NewService::try_from(draft)?;
        self.services
            .update(id, service)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Public substring search, capped at [`SEARCH_LIMIT`] hits.
    ///
    /// # Errors
    ///
    /// Returns [`NavHubError::Validation`] when `raw_query` is absent or
    /// empty, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, raw_query: Option<&str>) -> Result<Vec<SearchHit>, NavHubError> {
        let query = SearchQuery::parse(raw_query)?;
        self.services.search(&query, SEARCH_LIMIT).await
    }

    /// Count a visit to a listed service.
    ///
    /// # Errors
    ///
    /// Returns [`NavHubError::NotFound`] when no service has `id`, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn record_click(&self, id: ServiceId) -> Result<Service, NavHubError> {
        self.services
            .record_click(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Gather service, category and click totals.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from either repository.
    pub async fn stats(&self) -> Result<DirectoryStats, NavHubError> {
        let service_count = self.services.count().await?;
        let category_count = self.categories.count().await?;
        let total_clicks = self.services.total_clicks().await?;
        Ok(DirectoryStats {
            service_count,
            category_count,
            total_clicks,
        })
    }
}

fn not_found(id: ServiceId) -> NavHubError {
    NotFoundError {
        entity: "Service",
        id: id.to_string(),
    }
    .into()
}
