#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod session;

use session::PageSession;

thread_local! {
    // The attached session owns every DOM subscription for the page's
    // lifetime; `detach` tears it down.
    static SESSION: RefCell<Option<PageSession>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("landing-fx starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let page = PageSession::attach(&window, &document)?;
    SESSION.with(|s| *s.borrow_mut() = Some(page));
    Ok(())
}

/// Detach both effects and remove their listeners. Reveal timers already
/// scheduled are independent one-shots and still fire.
#[wasm_bindgen]
pub fn detach() {
    SESSION.with(|s| {
        if s.borrow_mut().take().is_some() {
            log::info!("landing-fx detached");
        }
    });
}

/// Re-capture the particle collection after the page adds or removes
/// particles.
#[wasm_bindgen]
pub fn refresh_particles() {
    if let Some(document) = dom::window_document() {
        SESSION.with(|s| {
            if let Some(page) = s.borrow().as_ref() {
                page.refresh_particles(&document);
            }
        });
    }
}
