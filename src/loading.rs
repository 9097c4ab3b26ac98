use crate::constants::LOADING_TOGGLE_NAME;
use crate::core::{InputEvent, InputQueue};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// `window.setCursorLoading(bool)`, reachable from any page script while
/// the engine is mounted.
pub struct LoadingToggle {
    window: web::Window,
    _closure: Closure<dyn FnMut(JsValue)>,
}

impl LoadingToggle {
    pub fn install(window: &web::Window, queue: Rc<RefCell<InputQueue>>) -> Option<Self> {
        let closure = Closure::wrap(Box::new(move |value: JsValue| {
            let loading = value.as_bool().unwrap_or(false);
            queue.borrow_mut().push(InputEvent::LoadingChanged(loading));
        }) as Box<dyn FnMut(JsValue)>);
        match js_sys::Reflect::set(
            window.as_ref(),
            &JsValue::from_str(LOADING_TOGGLE_NAME),
            closure.as_ref(),
        ) {
            Ok(_) => Some(Self {
                window: window.clone(),
                _closure: closure,
            }),
            Err(e) => {
                log::warn!("[mount] could not install {}: {:?}", LOADING_TOGGLE_NAME, e);
                None
            }
        }
    }

    pub fn remove(self) {
        _ = js_sys::Reflect::delete_property(
            self.window.unchecked_ref::<js_sys::Object>(),
            &JsValue::from_str(LOADING_TOGGLE_NAME),
        );
    }
}
