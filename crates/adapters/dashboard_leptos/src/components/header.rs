//! Site header showing the configured name and description.

use leptos::prelude::*;
use navhub_domain::setting::{
    DEFAULT_SITE_DESCRIPTION, DEFAULT_SITE_NAME, SITE_DESCRIPTION, SITE_NAME,
};

use crate::api::{self, SiteInfo};

/// Set `document.title` from the resolved page metadata.
fn apply_title(info: &SiteInfo) {
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        doc.set_title(&info.metadata.title);
    }
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let info = LocalResource::new(|| api::fetch_site_info());

    Effect::new(move |_| {
        if let Some(Ok(info)) = info.read().as_deref() {
            apply_title(info);
            if info.degraded {
                leptos::logging::warn!("site settings unavailable, showing defaults");
            }
        }
    });

    let setting = move |key: &'static str, fallback: &'static str| {
        move || match info.read().as_deref() {
            Some(Ok(info)) => info.setting(key).to_string(),
            _ => fallback.to_string(),
        }
    };

    view! {
        <header class="site-header">
            <a href="/" class="site-name">{setting(SITE_NAME, DEFAULT_SITE_NAME)}</a>
            <p class="site-description">{setting(SITE_DESCRIPTION, DEFAULT_SITE_DESCRIPTION)}</p>
        </header>
    }
}
