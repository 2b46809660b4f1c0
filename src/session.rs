use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::PARTICLE_SELECTOR;
use crate::dom;
use crate::events;

/// One registered DOM listener. The listener is removed when the
/// subscription is dropped, so its lifetime is owned, not ambient.
pub struct Subscription {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Subscription {
    pub fn listen(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Particle elements held as explicit handles instead of a per-event
/// selector query. Membership changes are picked up via `refresh`.
pub struct ParallaxLayers {
    elements: Vec<web::HtmlElement>,
}

impl ParallaxLayers {
    pub fn capture(document: &web::Document) -> Self {
        Self {
            elements: dom::query_all(document, PARTICLE_SELECTOR),
        }
    }

    pub fn refresh(&mut self, document: &web::Document) {
        self.elements = dom::query_all(document, PARTICLE_SELECTOR);
    }

    pub fn elements(&self) -> &[web::HtmlElement] {
        &self.elements
    }
}

/// Owns both page effects. Dropping the session detaches every listener;
/// reveal timers already scheduled are independent one-shots and still fire.
pub struct PageSession {
    layers: Rc<RefCell<ParallaxLayers>>,
    _parallax: Subscription,
    _reveal: Option<Subscription>,
}

impl PageSession {
    pub fn attach(window: &web::Window, document: &web::Document) -> anyhow::Result<Self> {
        let layers = Rc::new(RefCell::new(ParallaxLayers::capture(document)));
        log::info!(
            "[session] captured {} particle layer(s)",
            layers.borrow().elements().len()
        );

        let parallax = Subscription::listen(
            window,
            "pointermove",
            events::pointer::parallax_handler(window.clone(), layers.clone()),
        )?;
        let reveal = events::load::wire_reveal(window, document)?;

        Ok(Self {
            layers,
            _parallax: parallax,
            _reveal: reveal,
        })
    }

    /// Re-capture the particle collection after the page mutates it.
    pub fn refresh_particles(&self, document: &web::Document) {
        self.layers.borrow_mut().refresh(document);
        log::info!(
            "[session] refreshed to {} particle layer(s)",
            self.layers.borrow().elements().len()
        );
    }
}
