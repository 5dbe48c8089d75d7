//! Listing card — the per-card icon loading state machine used by the
//! front-end.
//!
//! The card itself never touches the network. [`ListingCard::mount`] and
//! [`ListingCard::set_icon`] hand back a [`LoadRequest`] when an image fetch
//! is needed; the driver performs it and reports the result through
//! [`ListingCard::complete`] with the request's [`LoadTicket`]. Tickets from a
//! superseded icon or an unmounted card are ignored.
//!
//! ```text
//! Unloaded ──mount/set_icon──▶ Loading ──ok──▶ Loaded
//!     │                           └────err──▶ Errored
//!     └──(icon already in cache)──────────────▶ Loaded
//! ```

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::id::ServiceId;
use crate::service::{SearchHit, ServiceRecord};

/// Remembers which icon URLs already loaded successfully during this page
/// session.
pub trait IconCache {
    fn is_loaded(&self, url: &str) -> bool;
    fn mark_loaded(&self, url: &str);
}

/// Session-lifetime [`IconCache`] shared by every card on the page.
///
/// Cloning shares the same underlying set. Entries are never evicted. The
/// page runs on a single thread, so interior mutability without a lock is
/// enough.
#[derive(Debug, Clone, Default)]
pub struct SessionIconCache(Rc<RefCell<HashSet<String>>>);

impl SessionIconCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IconCache for SessionIconCache {
    fn is_loaded(&self, url: &str) -> bool {
        self.0.borrow().contains(url)
    }

    fn mark_loaded(&self, url: &str) {
        self.0.borrow_mut().insert(url.to_string());
    }
}

/// Records that a visitor opened a listing, then navigates to it.
pub trait ClickRecorder {
    fn record_click(&self, id: ServiceId, url: &str);
}

/// Icon loading state of a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconState {
    Unloaded,
    Loading,
    Loaded,
    /// The fetch failed. Counts as settled (no spinner) but renders the
    /// fallback initial instead of the image.
    Errored,
}

/// Identifies one icon fetch. Only the latest ticket of a mounted card is
/// honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// An image fetch the driver must start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub url: String,
    pub ticket: LoadTicket,
}

/// Result of an image fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
}

/// The data a card displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardListing {
    pub id: ServiceId,
    pub name: String,
    pub url: String,
    pub description: String,
    pub icon: Option<String>,
}

impl From<&SearchHit> for CardListing {
    fn from(hit: &SearchHit) -> Self {
        Self {
            id: hit.id,
            name: hit.name.clone(),
            url: hit.url.clone(),
            description: hit.description.clone(),
            icon: hit.icon.clone(),
        }
    }
}

impl From<&ServiceRecord> for CardListing {
    fn from(record: &ServiceRecord) -> Self {
        let service = &record.service;
        Self {
            id: service.id,
            name: service.name.clone(),
            url: service.url.clone(),
            description: service.description.clone(),
            icon: service.icon.clone(),
        }
    }
}

/// What the icon slot shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconView {
    /// The image, faded in once `visible`.
    Image { url: String, visible: bool },
    /// Uppercased first letter of the name.
    Initial(String),
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub show_spinner: bool,
    pub icon: IconView,
    pub tooltip_visible: bool,
}

/// One card instance.
pub struct ListingCard<C> {
    listing: CardListing,
    cache: C,
    state: IconState,
    generation: u64,
    mounted: bool,
    hovered: bool,
    focused: bool,
}

impl<C: IconCache> ListingCard<C> {
    #[must_use]
    pub fn new(listing: CardListing, cache: C) -> Self {
        Self {
            listing,
            cache,
            state: IconState::Unloaded,
            generation: 0,
            mounted: false,
            hovered: false,
            focused: false,
        }
    }

    /// Attach the card and start loading its icon.
    pub fn mount(&mut self) -> Option<LoadRequest> {
        self.mounted = true;
        self.restart()
    }

    /// Detach the card. Any fetch still in flight becomes stale.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.generation += 1;
    }

    /// Swap the icon reference. An unchanged icon is a no-op.
    pub fn set_icon(&mut self, icon: Option<String>) -> Option<LoadRequest> {
        if self.listing.icon == icon {
            return None;
        }
        self.listing.icon = icon;
        if self.mounted { self.restart() } else { None }
    }

    fn restart(&mut self) -> Option<LoadRequest> {
        self.generation += 1;
        self.state = IconState::Unloaded;

        let url = self.listing.icon.as_deref()?;
        if self.cache.is_loaded(url) {
            self.state = IconState::Loaded;
            return None;
        }

        self.state = IconState::Loading;
        Some(LoadRequest {
            url: url.to_string(),
            ticket: LoadTicket(self.generation),
        })
    }

    /// Apply a fetch result. Returns `false` when the ticket is stale and the
    /// result was dropped.
    pub fn complete(&mut self, ticket: LoadTicket, outcome: LoadOutcome) -> bool {
        if !self.mounted || ticket.0 != self.generation || self.state != IconState::Loading {
            return false;
        }
        match outcome {
            LoadOutcome::Loaded => {
                if let Some(url) = self.listing.icon.as_deref() {
                    self.cache.mark_loaded(url);
                }
                self.state = IconState::Loaded;
            }
            LoadOutcome::Failed => self.state = IconState::Errored,
        }
        true
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Hand the click to the recorder, which also performs navigation.
    pub fn click<R: ClickRecorder + ?Sized>(&self, recorder: &R) {
        recorder.record_click(self.listing.id, &self.listing.url);
    }

    #[must_use]
    pub fn state(&self) -> IconState {
        self.state
    }

    #[must_use]
    pub fn tooltip_visible(&self) -> bool {
        self.hovered || self.focused
    }

    #[must_use]
    pub fn view(&self) -> CardView {
        let settled = matches!(self.state, IconState::Loaded | IconState::Errored);
        let icon = match self.listing.icon.as_deref() {
            Some(url) if self.state != IconState::Errored => IconView::Image {
                url: url.to_string(),
                visible: self.state == IconState::Loaded,
            },
            _ => IconView::Initial(initial(&self.listing.name)),
        };
        CardView {
            show_spinner: self.listing.icon.is_some() && !settled,
            icon,
            tooltip_visible: self.tooltip_visible(),
        }
    }
}

fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
