use crate::constants::{MAGNET_PULL_TRANSITION, MAGNET_RELEASE_TRANSITION};
use crate::core::magnetic_offset;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Interactive elements currently nudged toward the pointer.
#[derive(Default)]
pub struct Magnetized {
    elements: Vec<web::HtmlElement>,
}

impl Magnetized {
    /// Lean `el` toward the pointer while it is within reach of its centre.
    pub fn pull(&mut self, el: &web::Element, pointer: Vec2) {
        let Some(el) = el.dyn_ref::<web::HtmlElement>() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let center = Vec2::new(
            (rect.left() + rect.width() / 2.0) as f32,
            (rect.top() + rect.height() / 2.0) as f32,
        );
        if let Some(offset) = magnetic_offset(pointer, center) {
            let style = el.style();
            _ = style.set_property(
                "transform",
                &format!("translate({:.2}px, {:.2}px)", offset.x, offset.y),
            );
            _ = style.set_property("transition", MAGNET_PULL_TRANSITION);
            if !self.elements.iter().any(|e| e == el) {
                self.elements.push(el.clone());
            }
        }
    }

    /// Release every element that is neither hovered nor contains `target`.
    pub fn release_others(&mut self, target: &web::Element) {
        let node: &web::Node = target.as_ref();
        self.elements.retain(|el| {
            let keep = el.matches(":hover").unwrap_or(false) || el.contains(Some(node));
            if !keep {
                reset(el);
            }
            keep
        });
    }

    /// Release `interactive` if it is magnetized. Elements that merely
    /// contain it keep their pull.
    pub fn release(&mut self, interactive: &web::Element) {
        self.elements.retain(|el| {
            let el_ref: &web::Element = el.as_ref();
            let hit = el_ref == interactive;
            if hit {
                reset(el);
            }
            !hit
        });
    }

    pub fn release_all(&mut self) {
        for el in self.elements.drain(..) {
            reset(&el);
        }
    }
}

fn reset(el: &web::HtmlElement) {
    let style = el.style();
    _ = style.set_property("transform", "");
    _ = style.set_property("transition", MAGNET_RELEASE_TRANSITION);
}
