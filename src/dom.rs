use crate::constants::*;
use crate::core::{sampled_background, HoverTarget, Rgba};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Touch-only devices have no hover-capable pointer; the engine stays off
/// there.
pub fn has_hover_pointer(window: &web::Window) -> bool {
    match window.match_media(HOVER_MEDIA_QUERY) {
        Ok(Some(mq)) => mq.matches(),
        _ => false,
    }
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w as f32, h as f32)
}

/// Find the overlay canvas `id`, creating a fixed, click-through,
/// full-viewport one if the page has none. The flag tells whether it was
/// created here (and so must be removed on unmount).
pub fn ensure_overlay_canvas(
    document: &web::Document,
    id: &str,
    z_index: i32,
) -> anyhow::Result<(web::HtmlCanvasElement, bool)> {
    if let Some(el) = document.get_element_by_id(id) {
        let canvas = el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|_| anyhow::anyhow!("#{} is not a canvas", id))?;
        return Ok((canvas, false));
    }
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_id(id);
    _ = canvas.set_attribute("aria-hidden", "true");
    _ = canvas.set_attribute(
        "style",
        &format!(
            "position:fixed;inset:0;width:100vw;height:100vh;pointer-events:none;z-index:{};background:transparent",
            z_index
        ),
    );
    body.append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok((canvas, true))
}

/// Match the canvas backing store to the viewport times devicePixelRatio.
pub fn sync_canvas_backing_size(window: &web::Window, canvas: &web::HtmlCanvasElement) {
    let dpr = window.device_pixel_ratio();
    let (w, h) = viewport_size(window);
    canvas.set_width(((w as f64 * dpr) as u32).max(1));
    canvas.set_height(((h as f64 * dpr) as u32).max(1));
}

#[inline]
fn closest(el: &web::Element, selector: &str) -> Option<web::Element> {
    el.closest(selector).ok().flatten()
}

pub fn closest_interactive(el: &web::Element) -> Option<web::Element> {
    closest(el, INTERACTIVE_SELECTOR)
}

/// Resolve the element under the pointer to a hover category.
pub fn classify_target(el: &web::Element) -> HoverTarget {
    if el.matches(INPUT_SELECTOR).unwrap_or(false) {
        return HoverTarget::InputField;
    }
    if closest_interactive(el).is_some() {
        return HoverTarget::Interactive;
    }
    if closest(el, TEXT_SELECTOR).is_some() && closest(el, LINK_SELECTOR).is_none() {
        return HoverTarget::Text;
    }
    HoverTarget::None
}

/// Element that dispatched `ev`, if it is an element.
pub fn event_element(ev: &web::Event) -> Option<web::Element> {
    ev.target().and_then(|t| t.dyn_into::<web::Element>().ok())
}

/// Computed `background-color` of the topmost element at a viewport point.
/// A transparent element yields a transparent sample, not its ancestor's
/// color; `None` when nothing usable is there.
pub fn background_at(
    window: &web::Window,
    document: &web::Document,
    x: f32,
    y: f32,
) -> Option<Rgba> {
    let el = document.element_from_point(x, y)?;
    let style = window.get_computed_style(&el).ok().flatten()?;
    let value = style.get_property_value("background-color").ok()?;
    sampled_background(&value)
}

/// Hide the native pointer everywhere, including over links and buttons
/// whose user-agent `cursor` would otherwise win. The returned `<style>`
/// element must be removed to restore it.
pub fn hide_native_cursor(document: &web::Document) -> Option<web::Element> {
    let head = document.head()?;
    let style = document.create_element("style").ok()?;
    style.set_id(NATIVE_CURSOR_STYLE_ID);
    style.set_text_content(Some(HIDE_NATIVE_CURSOR_CSS));
    if let Err(e) = head.append_child(&style) {
        log::warn!("[mount] could not hide native cursor: {:?}", e);
        return None;
    }
    Some(style)
}
