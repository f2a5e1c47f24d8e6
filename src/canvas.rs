use crate::color::css_rgba;
use backdrop_core::{Rgba, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Grab the canvas' 2D context. `Ok(None)` means the browser refused one
/// (e.g. the canvas already hosts a different context type).
pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<Option<web::CanvasRenderingContext2d>> {
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?;
    Ok(ctx.and_then(|obj| obj.dyn_into::<web::CanvasRenderingContext2d>().ok()))
}

/// `Surface` backed by a canvas 2D context. Coordinates are CSS pixels; the
/// context transform maps them onto the HiDPI backing store.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    last_fill: Option<Rgba>,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            last_fill: None,
        }
    }

    pub fn set_pixel_ratio(&mut self, dpr: f64) {
        if let Err(e) = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0) {
            log::warn!("setTransform failed: {:?}", e);
        }
        self.last_fill = None;
    }

    // Grid dots share two colors, so skip re-parsing identical fill styles.
    fn fill_color(&mut self, color: Rgba) {
        if self.last_fill != Some(color) {
            self.ctx.set_fill_style_str(&css_rgba(color));
            self.last_fill = Some(color);
        }
    }

    fn disk(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        self.ctx.fill();
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.fill_color(color);
        self.disk(center, radius);
    }

    fn draw_radial_gradient(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba) {
        let (x, y) = (center.x as f64, center.y as f64);
        let gradient = match self
            .ctx
            .create_radial_gradient(x, y, 0.0, x, y, radius as f64)
        {
            Ok(g) => g,
            Err(e) => {
                log::warn!("createRadialGradient failed: {:?}", e);
                return;
            }
        };
        _ = gradient.add_color_stop(0.0, &css_rgba(inner));
        _ = gradient.add_color_stop(1.0, &css_rgba(outer));
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.last_fill = None;
        self.disk(center, radius);
    }
}
