use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
mod components;
mod icon;
mod pages;

use components::{SiteHeader, provide_icon_cache};
use pages::{NotFound, Search};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_icon_cache();

    view! {
        <Router>
            <SiteHeader/>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=Search/>
                </Routes>
            </main>
        </Router>
    }
}
