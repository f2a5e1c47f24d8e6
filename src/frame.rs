use crate::canvas::CanvasSurface;
use crate::dom;
use backdrop_core::constants::FRAME_REPORT_INTERVAL_SEC;
use backdrop_core::{FrameStats, Orchestrator, Scheduler, Theme};
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame`-backed scheduler. The frame callback is installed
/// once by `start_loop` and reused for every request.
pub struct RafScheduler {
    window: web::Window,
    callback: TickSlot,
}

impl RafScheduler {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            callback: Rc::new(RefCell::new(None)),
        }
    }
}

impl Scheduler for RafScheduler {
    type Handle = i32;

    // requestAnimationFrame only fails once the window is gone, at which point
    // nothing will deliver ticks anyway; 0 is never a live RAF id.
    fn request_tick(&mut self) -> i32 {
        let slot = self.callback.borrow();
        let Some(cb) = slot.as_ref() else {
            log::warn!("[raf] tick requested before the loop was installed");
            return 0;
        };
        self.window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .unwrap_or_else(|e| {
                log::error!("[raf] requestAnimationFrame failed: {:?}", e);
                0
            })
    }

    fn cancel(&mut self, handle: i32) {
        if let Err(e) = self.window.cancel_animation_frame(handle) {
            log::warn!("[raf] cancelAnimationFrame failed: {:?}", e);
        }
    }
}

struct FrameClock {
    last: Instant,
    stats: FrameStats,
}

impl FrameClock {
    fn new() -> Self {
        Self {
            last: Instant::now(),
            stats: FrameStats::new(Duration::from_secs_f32(FRAME_REPORT_INTERVAL_SEC)),
        }
    }

    fn lap(&mut self) {
        let now = Instant::now();
        let dt = now - self.last;
        self.last = now;
        if let Some(r) = self.stats.record(dt) {
            log::debug!(
                "[frame] {} frames, {:.1} fps avg, worst {:.1} ms",
                r.frames,
                r.avg_fps,
                r.worst_ms
            );
        }
    }
}

/// Everything one mounted backdrop mutates: simulation, drawing backend and
/// frame timing.
pub struct BackdropState {
    pub orch: Orchestrator<RafScheduler>,
    pub surface: CanvasSurface,
    document: web::Document,
    clock: FrameClock,
}

impl BackdropState {
    pub fn new(
        orch: Orchestrator<RafScheduler>,
        surface: CanvasSurface,
        document: web::Document,
    ) -> Self {
        Self {
            orch,
            surface,
            document,
            clock: FrameClock::new(),
        }
    }

    fn frame(&mut self) {
        let Some(handle) = self.orch.pending_handle() else {
            return;
        };
        let theme = Theme::from_dark_flag(dom::is_dark_theme(&self.document));
        if self.orch.on_tick(handle, theme, &mut self.surface) {
            self.clock.lap();
        }
    }
}

/// Install the frame callback. It only holds a weak reference, so dropping
/// the last strong handle to the state ends the loop with it.
pub fn start_loop(state: &Rc<RefCell<BackdropState>>) {
    let weak: Weak<RefCell<BackdropState>> = Rc::downgrade(state);
    let tick = Closure::wrap(Box::new(move |_ts: f64| {
        if let Some(state) = weak.upgrade() {
            state.borrow_mut().frame();
        }
    }) as Box<dyn FnMut(f64)>);
    let slot = state.borrow().orch.scheduler().callback.clone();
    *slot.borrow_mut() = Some(tick);
}
