use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::{parallax_offset, pointer_ratio, transform_for_offset};
use crate::dom;
use crate::session::ParallaxLayers;

/// Handler for window `pointermove`. Each event fully determines every
/// layer's transform from the latest pointer position; nothing is carried
/// between events.
pub fn parallax_handler(
    window: web::Window,
    layers: Rc<RefCell<ParallaxLayers>>,
) -> impl FnMut(web::Event) + 'static {
    move |ev: web::Event| {
        let ev = match ev.dyn_into::<web::MouseEvent>() {
            Ok(ev) => ev,
            Err(_) => return,
        };
        let viewport = match dom::viewport_size(&window) {
            Some(v) => v,
            None => return,
        };
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let ratio = match pointer_ratio(client, viewport) {
            Some(r) => r,
            None => {
                // zero-sized viewport; skip instead of writing NaN offsets
                log::debug!("[parallax] degenerate viewport {:?}", viewport);
                return;
            }
        };
        for (i, el) in layers.borrow().elements().iter().enumerate() {
            dom::set_transform(el, &transform_for_offset(parallax_offset(ratio, i)));
        }
    }
}
