use crate::constants::*;
use crate::core::constants::MAX_FIELD_PARTICLES;
use crate::core::{FxConfig, InputEvent, InputQueue, Scene};
use crate::dom;
use crate::events::{self, Listener, Magnetized, PointerWiring};
use crate::frame::{self, FrameContext, FrameLoop};
use crate::loading::LoadingToggle;
use crate::render::CanvasSurface;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

static MOUNTED: AtomicBool = AtomicBool::new(false);

/// Options passed from JavaScript to [`mount`].
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct FxOptions {
    pub seed: u32,
    pub particle_count: u32,
    pub show_cursor: bool,
    pub show_field: bool,
}

#[wasm_bindgen]
impl FxOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FxOptions {
        let defaults = FxConfig::default();
        FxOptions {
            seed: (js_sys::Math::random() * u32::MAX as f64) as u32,
            particle_count: defaults.field.count as u32,
            show_cursor: defaults.show_cursor,
            show_field: defaults.show_field,
        }
    }
}

impl Default for FxOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl From<FxOptions> for FxConfig {
    fn from(o: FxOptions) -> Self {
        let mut config = FxConfig {
            seed: o.seed as u64,
            show_cursor: o.show_cursor,
            show_field: o.show_field,
            ..FxConfig::default()
        };
        config.field.count = (o.particle_count as usize).min(MAX_FIELD_PARTICLES);
        config
    }
}

struct Mounted {
    queue: Rc<RefCell<InputQueue>>,
    listeners: Vec<Listener>,
    frame_loop: FrameLoop,
    loading_toggle: Option<LoadingToggle>,
    magnetized: Rc<RefCell<Magnetized>>,
    created_canvases: Vec<web::HtmlCanvasElement>,
    cursor_style: Option<web::Element>,
}

impl Mounted {
    fn teardown(self) {
        self.frame_loop.stop();
        for listener in self.listeners {
            listener.detach();
        }
        if let Some(toggle) = self.loading_toggle {
            toggle.remove();
        }
        self.magnetized.borrow_mut().release_all();
        for canvas in &self.created_canvases {
            canvas.remove();
        }
        if let Some(style) = self.cursor_style {
            style.remove();
        }
        MOUNTED.store(false, Ordering::SeqCst);
        log::info!("[mount] unmounted");
    }
}

/// A mounted engine. Dropping the handle unmounts it.
#[wasm_bindgen]
pub struct FxHandle {
    inner: Option<Mounted>,
}

#[wasm_bindgen]
impl FxHandle {
    /// Force the cursor into (or out of) its loading state.
    #[wasm_bindgen(js_name = setLoading)]
    pub fn set_loading(&self, loading: bool) {
        if let Some(m) = &self.inner {
            m.queue
                .borrow_mut()
                .push(InputEvent::LoadingChanged(loading));
        }
    }

    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.inner.is_some()
    }

    /// Stop the frame loop and detach everything. Safe to call twice.
    pub fn unmount(&mut self) {
        if let Some(m) = self.inner.take() {
            m.teardown();
        }
    }
}

impl Drop for FxHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pointer-fx loaded");
    Ok(())
}

/// Mount the cursor and particle field on the current page.
///
/// Returns `None` when the device has no hover-capable pointer, when an
/// engine is already mounted, or when setup fails (the reason is logged).
#[wasm_bindgen]
pub fn mount(options: Option<FxOptions>) -> Option<FxHandle> {
    if MOUNTED.swap(true, Ordering::SeqCst) {
        log::warn!("[mount] already mounted");
        return None;
    }
    let config: FxConfig = options.unwrap_or_default().into();
    match try_mount(config) {
        Ok(Some(m)) => Some(FxHandle { inner: Some(m) }),
        Ok(None) => {
            MOUNTED.store(false, Ordering::SeqCst);
            None
        }
        Err(e) => {
            log::error!("[mount] init error: {:?}", e);
            MOUNTED.store(false, Ordering::SeqCst);
            None
        }
    }
}

fn try_mount(config: FxConfig) -> anyhow::Result<Option<Mounted>> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    if !dom::has_hover_pointer(&window) {
        log::info!("[mount] no hover-capable pointer; staying off");
        return Ok(None);
    }

    let (field_canvas, field_created) =
        dom::ensure_overlay_canvas(&document, FIELD_CANVAS_ID, FIELD_CANVAS_Z_INDEX)?;
    let (cursor_canvas, cursor_created) =
        dom::ensure_overlay_canvas(&document, CURSOR_CANVAS_ID, CURSOR_CANVAS_Z_INDEX)?;
    let canvases = vec![field_canvas.clone(), cursor_canvas.clone()];
    for canvas in &canvases {
        dom::sync_canvas_backing_size(&window, canvas);
    }
    let created_canvases = canvases
        .iter()
        .zip([field_created, cursor_created])
        .filter(|(_, created)| *created)
        .map(|(c, _)| c.clone())
        .collect();

    let field_surface = CanvasSurface::new(&field_canvas);
    let cursor_surface = CanvasSurface::new(&cursor_canvas);
    if field_surface.is_none() || cursor_surface.is_none() {
        log::warn!("[mount] missing 2d context; affected layer will not draw");
    }

    let (width, height) = dom::viewport_size(&window);
    let scene = Scene::new(config, width, height);
    log::info!(
        "[mount] {} particles in {:.0}x{:.0} seed={}",
        scene.field().len(),
        width,
        height,
        config.seed
    );

    let queue = Rc::new(RefCell::new(InputQueue::new()));
    let magnetized = Rc::new(RefCell::new(Magnetized::default()));

    let mut listeners = Vec::new();
    events::wire_pointer_handlers(
        &PointerWiring {
            window: window.clone(),
            document: document.clone(),
            queue: queue.clone(),
            magnetized: magnetized.clone(),
        },
        &mut listeners,
    );
    listeners.extend(events::wire_resize(&window, canvases, queue.clone()));

    let loading_toggle = LoadingToggle::install(&window, queue.clone());

    let cursor_style = if config.show_cursor {
        dom::hide_native_cursor(&document)
    } else {
        None
    };

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        scene,
        queue: queue.clone(),
        field_surface,
        cursor_surface,
        last_instant: Instant::now(),
    }));
    let frame_loop = frame::start_loop(frame_ctx);

    Ok(Some(Mounted {
        queue,
        listeners,
        frame_loop,
        loading_toggle,
        magnetized,
        created_canvases,
        cursor_style,
    }))
}
