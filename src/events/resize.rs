use super::Listener;
use crate::dom;
use crate::frame::BackdropState;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

/// Resync the backing store and feed the new CSS size to the engine. The
/// grid and pool are rebuilt before this returns, ahead of the next tick.
pub fn apply_canvas_size(state: &mut BackdropState, canvas: &web::HtmlCanvasElement) {
    let size = dom::sync_canvas_backing_size(canvas);
    state.surface.set_pixel_ratio(size.dpr);
    state.orch.resize(size.css_width, size.css_height);
}

pub fn wire_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    state: &Rc<RefCell<BackdropState>>,
) -> anyhow::Result<Listener> {
    let weak: Weak<RefCell<BackdropState>> = Rc::downgrade(state);
    let canvas = canvas.clone();
    Listener::attach(window.as_ref(), "resize", move |_ev| {
        if let Some(state) = weak.upgrade() {
            apply_canvas_size(&mut state.borrow_mut(), &canvas);
        }
    })
}
