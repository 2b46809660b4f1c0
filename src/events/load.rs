use gloo_timers::callback::Timeout;
use std::cell::Cell;
use web_sys as web;

use crate::constants::FEATURE_SELECTOR;
use crate::core::reveal_delay_ms;
use crate::dom;
use crate::session::Subscription;

/// Wire the staggered reveal. Runs immediately when the document already
/// finished loading (the module may be injected late), otherwise on the
/// window `load` event. The returned subscription, if any, keeps that
/// listener alive.
pub fn wire_reveal(
    window: &web::Window,
    document: &web::Document,
) -> anyhow::Result<Option<Subscription>> {
    if document.ready_state() == "complete" {
        run_reveal(document);
        return Ok(None);
    }

    let doc = document.clone();
    let fired = Cell::new(false);
    let sub = Subscription::listen(window, "load", move |_ev| {
        // a re-fired load signal must not schedule the cascade twice
        if fired.replace(true) {
            return;
        }
        run_reveal(&doc);
    })?;
    Ok(Some(sub))
}

/// Capture the feature collection once and schedule one independent one-shot
/// per element, spaced by the stagger interval in document order.
fn run_reveal(document: &web::Document) {
    let features = dom::query_all(document, FEATURE_SELECTOR);
    log::info!("[reveal] scheduling {} feature card(s)", features.len());
    for (i, el) in features.into_iter().enumerate() {
        Timeout::new(reveal_delay_ms(i), move || {
            dom::add_reveal_classes(&el);
        })
        .forget();
    }
}
