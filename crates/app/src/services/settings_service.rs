//! Settings service — resolves the site settings with a degraded fallback.

use navhub_domain::setting::{SettingsResolution, SiteSettings};

use crate::ports::SettingsRepository;

/// Application service producing the flat site configuration.
pub struct SettingsService<R> {
    repo: R,
}

impl<R: SettingsRepository> SettingsService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Load all stored settings and layer them over the defaults.
    ///
    /// Never fails: a storage error yields [`SettingsResolution::Degraded`]
    /// carrying the defaults and the cause.
    #[tracing::instrument(skip(self))]
    pub async fn site_settings(&self) -> SettingsResolution {
        match self.repo.get_all().await {
            Ok(rows) => {
                tracing::debug!(?rows, "raw settings loaded");
                let stored = SiteSettings::collect_rows(&rows);
                tracing::debug!(?stored, "settings flattened");
                let settings = SiteSettings::from_stored(stored);
                tracing::debug!(?settings, "settings resolved with defaults");
                SettingsResolution::Resolved(settings)
            }
            Err(cause) => {
                tracing::error!(error = %cause, "failed to load site settings, serving defaults");
                SettingsResolution::Degraded {
                    settings: SiteSettings::default(),
                    cause,
                }
            }
        }
    }
}
