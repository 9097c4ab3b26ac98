use super::{Listener, Magnetized};
use crate::core::{HoverTarget, InputEvent, InputQueue, PointerSample};
use crate::dom;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub queue: Rc<RefCell<InputQueue>>,
    pub magnetized: Rc<RefCell<Magnetized>>,
}

pub fn wire_pointer_handlers(w: &PointerWiring, listeners: &mut Vec<Listener>) {
    listeners.extend(wire_pointermove(w));
    listeners.extend(wire_presence(w));
    listeners.extend(wire_press(w));
    listeners.extend(wire_click(w));
    listeners.extend(wire_element_leave(w));
}

#[inline]
fn client_position(ev: &web::Event) -> Option<Vec2> {
    let me = ev.dyn_ref::<web::MouseEvent>()?;
    Some(Vec2::new(me.client_x() as f32, me.client_y() as f32))
}

fn wire_pointermove(w: &PointerWiring) -> Option<Listener> {
    let w = w.clone();
    let target: &web::EventTarget = w.window.as_ref();
    let target = target.clone();
    Listener::attach(&target, "pointermove", move |ev: web::Event| {
        let Some(pos) = client_position(&ev) else {
            return;
        };
        let background = dom::background_at(&w.window, &w.document, pos.x, pos.y);
        let hovered = dom::event_element(&ev);
        let kind = hovered
            .as_ref()
            .map(dom::classify_target)
            .unwrap_or(HoverTarget::None);

        {
            let mut q = w.queue.borrow_mut();
            q.push(InputEvent::Moved(PointerSample::new(
                pos.x,
                pos.y,
                ev.time_stamp(),
            )));
            q.push(InputEvent::BackgroundSampled(background));
            q.push(InputEvent::Hovered(kind));
        }

        let Some(el) = hovered else {
            return;
        };
        let mut magnets = w.magnetized.borrow_mut();
        match kind {
            HoverTarget::Interactive => {
                if let Some(interactive) = dom::closest_interactive(&el) {
                    magnets.pull(&interactive, pos);
                }
            }
            HoverTarget::InputField => {}
            _ => magnets.release_others(&el),
        }
    })
}

fn wire_presence(w: &PointerWiring) -> Vec<Listener> {
    let target: &web::EventTarget = w.document.as_ref();
    let mut out = Vec::new();

    let queue = w.queue.clone();
    let magnetized = w.magnetized.clone();
    out.extend(Listener::attach(target, "mouseleave", move |_ev: web::Event| {
        queue.borrow_mut().push(InputEvent::Left);
        magnetized.borrow_mut().release_all();
    }));

    let queue = w.queue.clone();
    out.extend(Listener::attach(target, "mouseenter", move |_ev: web::Event| {
        queue.borrow_mut().push(InputEvent::Entered);
    }));
    out
}

fn wire_press(w: &PointerWiring) -> Vec<Listener> {
    let target: &web::EventTarget = w.document.as_ref();
    let mut out = Vec::new();

    let queue = w.queue.clone();
    out.extend(Listener::attach(target, "pointerdown", move |_ev: web::Event| {
        queue.borrow_mut().push(InputEvent::Pressed);
    }));

    let queue = w.queue.clone();
    out.extend(Listener::attach(target, "pointerup", move |_ev: web::Event| {
        queue.borrow_mut().push(InputEvent::Released);
    }));
    out
}

fn wire_click(w: &PointerWiring) -> Option<Listener> {
    let target: &web::EventTarget = w.document.as_ref();
    let queue = w.queue.clone();
    Listener::attach(target, "click", move |ev: web::Event| {
        let Some(position) = client_position(&ev) else {
            return;
        };
        let interactive = dom::event_element(&ev)
            .and_then(|el| dom::closest_interactive(&el))
            .is_some();
        queue.borrow_mut().push(InputEvent::Clicked {
            position,
            interactive,
        });
    })
}

fn wire_element_leave(w: &PointerWiring) -> Option<Listener> {
    let target: &web::EventTarget = w.document.as_ref();
    let magnetized = w.magnetized.clone();
    Listener::attach(target, "mouseout", move |ev: web::Event| {
        let interactive = dom::event_element(&ev).and_then(|el| dom::closest_interactive(&el));
        if let Some(interactive) = interactive {
            magnetized.borrow_mut().release(&interactive);
        }
    })
}
