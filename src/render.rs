use crate::core::{DrawSurface, Hsla};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`DrawSurface`] over a Canvas 2D context. Drawing happens in CSS pixels;
/// the context transform absorbs devicePixelRatio.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `None` when the canvas cannot hand out a 2D context.
    pub fn new(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        let ctx = match canvas.get_context("2d") {
            Ok(Some(obj)) => obj.dyn_into::<web::CanvasRenderingContext2d>().ok()?,
            Ok(None) => return None,
            Err(e) => {
                log::error!("[render] 2d context error: {:?}", e);
                return None;
            }
        };
        Some(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }

    fn circle_path(&self, center: Vec2, radius: f32) -> bool {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .is_ok()
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self) {
        let dpr = web::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);
        _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsla) {
        if color.is_transparent() || !self.circle_path(center, radius) {
            return;
        }
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Hsla) {
        if color.is_transparent() || !self.circle_path(center, radius) {
            return;
        }
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.stroke();
    }

    fn radial_glow(&mut self, center: Vec2, radius: f32, color: Hsla) {
        if color.is_transparent() || radius <= 0.0 {
            return;
        }
        let (x, y, r) = (center.x as f64, center.y as f64, radius as f64);
        let Ok(gradient) = self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) else {
            return;
        };
        _ = gradient.add_color_stop(0.0, &color.to_string());
        _ = gradient.add_color_stop(1.0, "transparent");
        if !self.circle_path(center, radius) {
            return;
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill();
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Hsla) {
        if color.is_transparent() {
            return;
        }
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.stroke();
    }

    fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, width: f32, color: Hsla) {
        if color.is_transparent() {
            return;
        }
        self.ctx.begin_path();
        if self
            .ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius.max(0.0) as f64,
                start as f64,
                end as f64,
            )
            .is_err()
        {
            return;
        }
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.stroke();
    }
}
