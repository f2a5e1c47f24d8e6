#![cfg(target_arch = "wasm32")]
use backdrop_core::{Engine, EngineConfig, Orchestrator};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod color;
mod constants;
mod dom;
mod events;
mod frame;
mod input;

use frame::{BackdropState, RafScheduler};

thread_local! {
    // Backdrop mounted by `start()`; kept alive for the page's lifetime.
    static AUTO_MOUNTED: RefCell<Option<Backdrop>> = const { RefCell::new(None) };
}

/// A running backdrop bound to one canvas. Dropping it (or calling
/// `unmount`) cancels the pending frame and detaches all listeners.
#[wasm_bindgen]
pub struct Backdrop {
    state: Rc<RefCell<BackdropState>>,
    listeners: Vec<events::Listener>,
}

#[wasm_bindgen]
impl Backdrop {
    pub fn unmount(&mut self) {
        self.state.borrow_mut().orch.teardown();
        self.listeners.clear();
    }

    /// Frames rendered so far.
    pub fn ticks(&self) -> f64 {
        self.state.borrow().orch.ticks() as f64
    }
}

impl Drop for Backdrop {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

    let present = dom::window_document()
        .and_then(|d| d.get_element_by_id(constants::BACKDROP_CANVAS_ID))
        .is_some();
    if !present {
        return Ok(());
    }
    match mount_canvas(constants::BACKDROP_CANVAS_ID) {
        Ok(Some(backdrop)) => AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(backdrop)),
        Ok(None) => {}
        Err(e) => log::error!("mount error: {:?}", e),
    }
    Ok(())
}

/// Mount a backdrop on the canvas with id `canvas_id`. Returns `None` when the
/// canvas has no 2D context; calling again later retries.
#[wasm_bindgen]
pub fn mount(canvas_id: &str) -> Result<Option<Backdrop>, JsValue> {
    mount_canvas(canvas_id).map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

fn mount_canvas(canvas_id: &str) -> anyhow::Result<Option<Backdrop>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{canvas_id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let engine = Engine::new(EngineConfig::default(), rand::random::<u64>())?;
    let mut orch = Orchestrator::new(engine, RafScheduler::new(window.clone()));

    let surface = canvas::context_2d(&canvas)?.map(canvas::CanvasSurface::new);
    if !orch.mount(surface.is_some()) {
        return Ok(None);
    }
    let Some(surface) = surface else {
        return Ok(None);
    };

    let state = Rc::new(RefCell::new(BackdropState::new(
        orch,
        surface,
        document.clone(),
    )));
    frame::start_loop(&state);
    events::apply_canvas_size(&mut state.borrow_mut(), &canvas);

    let mut listeners = vec![events::wire_resize(&window, &canvas, &state)?];
    listeners.extend(events::wire_pointer_handlers(&events::PointerWiring {
        window,
        document,
        canvas,
        state: Rc::downgrade(&state),
    })?);

    log::info!("[mount] backdrop attached to #{}", canvas_id);
    Ok(Some(Backdrop { state, listeners }))
}
