use super::Listener;
use crate::core::{InputEvent, InputQueue};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Resize the overlay canvases right away and queue a `Resized` event, so
/// the field is reseeded before the next frame simulates.
pub fn wire_resize(
    window: &web::Window,
    canvases: Vec<web::HtmlCanvasElement>,
    queue: Rc<RefCell<InputQueue>>,
) -> Option<Listener> {
    let target: &web::EventTarget = window.as_ref();
    let window = window.clone();
    Listener::attach(target, "resize", move |_ev: web::Event| {
        for canvas in &canvases {
            dom::sync_canvas_backing_size(&window, canvas);
        }
        let (width, height) = dom::viewport_size(&window);
        log::debug!("[events] resize {:.0}x{:.0}", width, height);
        queue
            .borrow_mut()
            .push(InputEvent::Resized { width, height });
    })
}
