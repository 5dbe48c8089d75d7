//! HTTP API client wrapping `gloo-net` for calls to the public `/api/*` routes.

use std::collections::BTreeMap;

use gloo_net::http::{Request, Response};
use leptos::task::spawn_local;
use navhub_domain::id::ServiceId;
use navhub_domain::listing_card::ClickRecorder;
use navhub_domain::service::SearchHit;
use navhub_domain::setting::SiteMetadata;
use serde::Deserialize;

/// Error returned by API client methods.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// JSON error body returned by the server on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Success envelope wrapping every `data` payload.
#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP {}", resp.status()),
    };
    Err(ApiError { message })
}

/// Site settings and the page metadata derived from them.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteInfo {
    pub settings: BTreeMap<String, String>,
    pub metadata: SiteMetadata,
    pub degraded: bool,
}

impl SiteInfo {
    #[must_use]
    pub fn setting(&self, key: &str) -> &str {
        self.settings.get(key).map_or("", String::as_str)
    }
}

/// Fetch the resolved site settings.
pub async fn fetch_site_info() -> Result<SiteInfo, ApiError> {
    let resp = check_response(Request::get("/api/settings").send().await?).await?;
    let info: SiteInfo = resp.json().await?;
    Ok(info)
}

/// Search services by name or description.
pub async fn search(query: &str) -> Result<Vec<SearchHit>, ApiError> {
    let resp = check_response(
        Request::get("/api/search")
            .query([("q", query)])
            .send()
            .await?,
    )
    .await?;
    let body: Envelope<Vec<SearchHit>> = resp.json().await?;
    Ok(body.data)
}

/// Count one click on a listed service.
pub async fn record_click(id: ServiceId) -> Result<(), ApiError> {
    let url = format!("/api/services/{id}/click");
    check_response(Request::post(&url).send().await?).await?;
    Ok(())
}

/// Opens the service in a new tab and reports the click in the background.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiClickRecorder;

impl ClickRecorder for ApiClickRecorder {
    fn record_click(&self, id: ServiceId, url: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.open_with_url_and_target(url, "_blank") {
                leptos::logging::warn!("failed to open {url}: {err:?}");
            }
        }
        spawn_local(async move {
            if let Err(err) = record_click(id).await {
                leptos::logging::warn!("failed to record click on {id}: {err}");
            }
        });
    }
}
