//! Site settings — a key/value table flattened into one configuration object.
//!
//! Three keys have built-in defaults ([`SITE_NAME`], [`SITE_DESCRIPTION`],
//! [`STATISTICS_CODE`]). Stored values always win over defaults, even when
//! empty; defaults only fill keys that are entirely absent. Every other key
//! passes through verbatim.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::NavHubError;
use crate::id::SettingId;

pub const SITE_NAME: &str = "siteName";
pub const SITE_DESCRIPTION: &str = "siteDescription";
pub const STATISTICS_CODE: &str = "statisticsCode";
pub const SEO_TITLE: &str = "seoTitle";
pub const SEO_DESCRIPTION: &str = "seoDescription";
pub const SEO_KEYWORDS: &str = "seoKeywords";

pub const DEFAULT_SITE_NAME: &str = "AI导航";
pub const DEFAULT_SITE_DESCRIPTION: &str = "收录优质AI服务和应用的导航网站";
pub const DEFAULT_STATISTICS_CODE: &str = "";

/// One row of the settings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub id: SettingId,
    pub key: String,
    pub value: String,
}

/// Resolved site configuration: stored rows layered over the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteSettings(BTreeMap<String, String>);

impl Default for SiteSettings {
    /// The hardcoded fallback used when nothing is stored.
    fn default() -> Self {
        Self(defaults())
    }
}

fn defaults() -> BTreeMap<String, String> {
    [
        (SITE_NAME, DEFAULT_SITE_NAME),
        (SITE_DESCRIPTION, DEFAULT_SITE_DESCRIPTION),
        (STATISTICS_CODE, DEFAULT_STATISTICS_CODE),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl SiteSettings {
    /// Flatten stored rows into a key/value map. The last row wins for a
    /// duplicated key.
    #[must_use]
    pub fn collect_rows(rows: &[Setting]) -> BTreeMap<String, String> {
        rows.iter()
            .map(|row| (row.key.clone(), row.value.clone()))
            .collect()
    }

    /// Overlay stored values on top of the defaults.
    #[must_use]
    pub fn from_stored(stored: BTreeMap<String, String>) -> Self {
        let mut merged = defaults();
        merged.extend(stored);
        Self(merged)
    }

    /// Look up any key, default or not.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn site_name(&self) -> &str {
        self.get(SITE_NAME).unwrap_or(DEFAULT_SITE_NAME)
    }

    #[must_use]
    pub fn site_description(&self) -> &str {
        self.get(SITE_DESCRIPTION)
            .unwrap_or(DEFAULT_SITE_DESCRIPTION)
    }

    #[must_use]
    pub fn statistics_code(&self) -> &str {
        self.get(STATISTICS_CODE).unwrap_or(DEFAULT_STATISTICS_CODE)
    }

    /// Page metadata: SEO overrides when set and non-empty, otherwise the
    /// site name and description.
    #[must_use]
    pub fn metadata(&self) -> SiteMetadata {
        let non_empty = |key| self.get(key).filter(|v| !v.is_empty());
        SiteMetadata {
            title: non_empty(SEO_TITLE).unwrap_or(self.site_name()).to_string(),
            description: non_empty(SEO_DESCRIPTION)
                .unwrap_or(self.site_description())
                .to_string(),
            keywords: self.get(SEO_KEYWORDS).map(ToString::to_string),
        }
    }
}

/// Title, description and keywords for the HTML head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Option<String>,
}

/// Outcome of loading the site settings.
///
/// Loading never fails outright: when the store is unreachable the defaults
/// are served in [`SettingsResolution::Degraded`], with the cause kept so
/// callers can tell the two cases apart.
#[derive(Debug)]
pub enum SettingsResolution {
    Resolved(SiteSettings),
    Degraded {
        settings: SiteSettings,
        cause: NavHubError,
    },
}

impl SettingsResolution {
    /// Borrow the settings regardless of how they were obtained.
    #[must_use]
    pub fn settings(&self) -> &SiteSettings {
        match self {
            Self::Resolved(settings) | Self::Degraded { settings, .. } => settings,
        }
    }

    /// Take the settings regardless of how they were obtained.
    #[must_use]
    pub fn into_settings(self) -> SiteSettings {
        match self {
            Self::Resolved(settings) | Self::Degraded { settings, .. } => settings,
        }
    }

    #[must_use]
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }
}
