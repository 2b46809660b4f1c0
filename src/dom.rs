use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::REVEAL_CLASSES;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn viewport_size(window: &web::Window) -> Option<Vec2> {
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some(Vec2::new(w as f32, h as f32))
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<web::HtmlElement>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

#[inline]
pub fn set_transform(el: &web::HtmlElement, value: &str) {
    _ = el.style().set_property("transform", value);
}

// classList.add is idempotent, so re-revealing an element is a no-op.
#[inline]
pub fn add_reveal_classes(el: &web::HtmlElement) {
    let cl = el.class_list();
    _ = cl.add_2(REVEAL_CLASSES[0], REVEAL_CLASSES[1]);
}
