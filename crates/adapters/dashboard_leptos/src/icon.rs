//! Image preloading for listing card icons.

use navhub_domain::listing_card::{LoadOutcome, LoadRequest, LoadTicket};
use wasm_bindgen::prelude::*;
use web_sys::HtmlImageElement;

/// An in-flight icon fetch. Dropping it detaches the handlers, so a late
/// load or error event is never delivered.
pub struct IconFetch {
    image: HtmlImageElement,
    _on_load: Closure<dyn FnMut()>,
    _on_error: Closure<dyn FnMut()>,
}

impl Drop for IconFetch {
    fn drop(&mut self) {
        self.image.set_onload(None);
        self.image.set_onerror(None);
    }
}

/// Start preloading `request.url`, reporting the outcome to `done` with the
/// request's ticket.
///
/// Returns `None` (after reporting a failure) when the browser refuses to
/// create the image element.
pub fn start<F>(request: LoadRequest, done: F) -> Option<IconFetch>
where
    F: Fn(LoadTicket, LoadOutcome) + Clone + 'static,
{
    let LoadRequest { url, ticket } = request;

    let image = match HtmlImageElement::new() {
        Ok(image) => image,
        Err(err) => {
            leptos::logging::warn!("failed to create image element: {err:?}");
            done(ticket, LoadOutcome::Failed);
            return None;
        }
    };

    let on_load = {
        let done = done.clone();
        Closure::<dyn FnMut()>::new(move || done(ticket, LoadOutcome::Loaded))
    };
    let on_error = Closure::<dyn FnMut()>::new(move || done(ticket, LoadOutcome::Failed));

    image.set_onload(Some(on_load.as_ref().unchecked_ref()));
    image.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    image.set_src(&url);

    Some(IconFetch {
        image,
        _on_load: on_load,
        _on_error: on_error,
    })
}
