//! Shared application state for axum handlers.

use std::sync::Arc;

use navhub_app::ports::{AdminVerifier, CategoryRepository, ServiceRepository, SettingsRepository};
use navhub_app::services::category_service::CategoryService;
use navhub_app::services::directory_service::DirectoryService;
use navhub_app::services::settings_service::SettingsService;

/// Application state shared across all axum handlers.
///
/// Generic over the service, category and settings repositories and the
/// admin verifier to avoid dynamic dispatch. `Clone` is implemented manually
/// so the underlying types themselves do not need to be `Clone`; only the
/// `Arc` wrappers are cloned.
pub struct AppState<S, C, T, V> {
    /// Service listing, creation, search, clicks and stats.
    pub directory: Arc<DirectoryService<S, C>>,
    /// Category management.
    pub categories: Arc<CategoryService<C>>,
    /// Site settings resolver.
    pub settings: Arc<SettingsService<T>>,
    /// Admin credential check used by the `/api/admin` guard.
    pub verifier: Arc<V>,
}

impl<S, C, T, V> Clone for AppState<S, C, T, V> {
    fn clone(&self) -> Self {
        Self {
            directory: Arc::clone(&self.directory),
            categories: Arc::clone(&self.categories),
            settings: Arc::clone(&self.settings),
            verifier: Arc::clone(&self.verifier),
        }
    }
}

impl<S, C, T, V> AppState<S, C, T, V>
where
    S: ServiceRepository + Send + Sync + 'static,
    C: CategoryRepository + Send + Sync + 'static,
    T: SettingsRepository + Send + Sync + 'static,
    V: AdminVerifier + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        directory: DirectoryService<S, C>,
        categories: CategoryService<C>,
        settings: SettingsService<T>,
        verifier: V,
    ) -> Self {
        Self {
            directory: Arc::new(directory),
            categories: Arc::new(categories),
            settings: Arc::new(settings),
            verifier: Arc::new(verifier),
        }
    }
}
