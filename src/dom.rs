use crate::constants::DARK_CLASS;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Theme signal, sampled once per tick.
#[inline]
pub fn is_dark_theme(document: &web::Document) -> bool {
    document
        .document_element()
        .map(|el| el.class_list().contains(DARK_CLASS))
        .unwrap_or(false)
}

/// Size of the canvas in CSS pixels plus the device pixel ratio it should be
/// rendered at.
#[derive(Clone, Copy, Debug)]
pub struct CanvasSize {
    pub css_width: f32,
    pub css_height: f32,
    pub dpr: f64,
}

/// Match the canvas backing store to its CSS size times devicePixelRatio.
/// Resizing the backing store resets the 2D transform, so callers reapply it.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> CanvasSize {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    CanvasSize {
        css_width: rect.width() as f32,
        css_height: rect.height() as f32,
        dpr,
    }
}
