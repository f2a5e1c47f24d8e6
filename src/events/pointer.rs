use super::Listener;
use crate::frame::BackdropState;
use crate::input;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub state: Weak<RefCell<BackdropState>>,
}

/// The canvas itself has `pointer-events: none` so it never steals input from
/// the page; moves are observed on the window and leaves on the root element.
pub fn wire_pointer_handlers(w: &PointerWiring) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = vec![wire_pointermove(w)?];
    if let Some(root) = w.document.document_element() {
        listeners.push(wire_pointerleave(w, &root)?);
    }
    Ok(listeners)
}

fn wire_pointermove(w: &PointerWiring) -> anyhow::Result<Listener> {
    let w = w.clone();
    let target = w.window.clone();
    Listener::attach(target.as_ref(), "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let Some(state) = w.state.upgrade() else {
            return;
        };
        let pos = input::pointer_css_px(ev, &w.canvas);
        let spawned = state
            .borrow_mut()
            .orch
            .engine_mut()
            .on_pointer_move(pos.x, pos.y);
        if spawned > 0 {
            log::trace!("[pointer] spawned {} trail particles", spawned);
        }
    })
}

fn wire_pointerleave(w: &PointerWiring, root: &web::Element) -> anyhow::Result<Listener> {
    let state = w.state.clone();
    Listener::attach(root.as_ref(), "pointerleave", move |_ev| {
        if let Some(state) = state.upgrade() {
            state.borrow_mut().orch.engine_mut().on_pointer_leave();
        }
    })
}
