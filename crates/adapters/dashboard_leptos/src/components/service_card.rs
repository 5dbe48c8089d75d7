//! Listing card: icon with spinner and fallback initial, name, description
//! and a hover/focus tooltip.
//!
//! All state transitions live in [`ListingCard`]; this component only feeds
//! it browser events and renders its [`CardView`].

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use navhub_domain::listing_card::{
    CardListing, CardView, IconView, ListingCard, LoadOutcome, LoadRequest, LoadTicket,
    SessionIconCache,
};

use crate::api::ApiClickRecorder;
use crate::icon::{self, IconFetch};

type IconCacheContext = StoredValue<SessionIconCache, LocalStorage>;

/// Install the page-session icon cache shared by every card.
pub fn provide_icon_cache() {
    provide_context::<IconCacheContext>(StoredValue::new_local(SessionIconCache::new()));
}

fn use_icon_cache() -> SessionIconCache {
    use_context::<IconCacheContext>()
        .and_then(|cache| cache.try_get_value())
        .unwrap_or_default()
}

#[component]
pub fn ServiceCard(listing: CardListing) -> impl IntoView {
    let name = listing.name.clone();
    let alt = name.clone();
    let description = listing.description.clone();

    let card = StoredValue::new_local(ListingCard::new(listing, use_icon_cache()));
    let fetch = StoredValue::new_local(None::<IconFetch>);
    let (card_view, set_card_view) = signal(card.with_value(ListingCard::view));

    let refresh = move || {
        if let Some(view) = card.try_with_value(ListingCard::view) {
            set_card_view.set(view);
        }
    };

    let on_done = move |ticket: LoadTicket, outcome: LoadOutcome| {
        let applied = card
            .try_update_value(|c| c.complete(ticket, outcome))
            .unwrap_or(false);
        if applied {
            refresh();
        }
    };

    let begin = move |request: Option<LoadRequest>| {
        let started = request.and_then(|request| icon::start(request, on_done));
        fetch.set_value(started);
        refresh();
    };

    begin(card.try_update_value(ListingCard::mount).flatten());

    on_cleanup(move || {
        card.try_update_value(ListingCard::unmount);
        fetch.try_update_value(|f| *f = None);
    });

    let set_hovered = move |hovered: bool| {
        card.update_value(|c| c.set_hovered(hovered));
        refresh();
    };
    let set_focused = move |focused: bool| {
        card.update_value(|c| c.set_focused(focused));
        refresh();
    };
    let on_click = move |_| card.with_value(|c| c.click(&ApiClickRecorder));

    let icon = move || {
        let CardView {
            show_spinner, icon, ..
        } = card_view.get();
        let spinner = show_spinner.then(|| view! { <span class="spinner"></span> });
        let icon = match icon {
            IconView::Image { url, visible } => view! {
                <img src=url alt=alt.clone() class="card-icon" class:visible=visible/>
            }
            .into_any(),
            IconView::Initial(letter) => view! {
                <span class="card-initial">{letter}</span>
            }
            .into_any(),
        };
        view! { {spinner} {icon} }
    };

    let tooltip = {
        let description = description.clone();
        move || {
            card_view.get().tooltip_visible.then(|| {
                view! { <div class="tooltip" role="tooltip">{description.clone()}</div> }
            })
        }
    };

    view! {
        <div
            class="service-card"
            tabindex="0"
            on:click=on_click
            on:mouseenter=move |_| set_hovered(true)
            on:mouseleave=move |_| set_hovered(false)
            on:focusin=move |_| set_focused(true)
            on:focusout=move |_| set_focused(false)
        >
            <div class="card-icon-slot">{icon}</div>
            <div class="card-body">
                <h3 class="card-name">{name}</h3>
                <p class="card-description">{description}</p>
            </div>
            {tooltip}
        </div>
    }
}
