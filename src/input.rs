use glam::Vec2;
use web_sys as web;

/// Pointer position relative to the canvas, in CSS pixels (the simulation's
/// coordinate space).
#[inline]
pub fn pointer_css_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}
