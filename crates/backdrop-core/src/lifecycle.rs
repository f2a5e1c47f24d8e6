//! Mount/resize/tick/teardown state machine.
//!
//! `Unmounted -> Initializing -> Running -> TornDown`. The orchestrator is the
//! only owner of the pending scheduler handle; every delivered tick runs the
//! engine once and requests the next one, and teardown cancels whatever is
//! outstanding so nothing runs afterwards.

use crate::engine::Engine;
use crate::palette::Theme;
use crate::scheduler::Scheduler;
use crate::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Unmounted,
    Initializing,
    Running,
    TornDown,
}

#[derive(Clone, Copy, Debug)]
enum State<H> {
    Unmounted,
    Initializing,
    Running { pending: H },
    TornDown,
}

pub struct Orchestrator<S: Scheduler> {
    engine: Engine,
    scheduler: S,
    state: State<S::Handle>,
    ticks: u64,
}

impl<S: Scheduler> Orchestrator<S> {
    pub fn new(engine: Engine, scheduler: S) -> Self {
        Self {
            engine,
            scheduler,
            state: State::Unmounted,
            ticks: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Unmounted => Phase::Unmounted,
            State::Initializing => Phase::Initializing,
            State::Running { .. } => Phase::Running,
            State::TornDown => Phase::TornDown,
        }
    }

    pub fn pending_handle(&self) -> Option<S::Handle> {
        match self.state {
            State::Running { pending } => Some(pending),
            _ => None,
        }
    }

    /// Ticks executed since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Attach to a surface. Without a drawing context nothing is initialized
    /// and the orchestrator stays unmounted so a later mount can retry.
    pub fn mount(&mut self, context_available: bool) -> bool {
        match self.state {
            State::Initializing | State::Running { .. } => return true,
            State::Unmounted | State::TornDown => {}
        }
        if !context_available {
            log::warn!("[lifecycle] no drawing context; skipping mount");
            return false;
        }
        self.state = State::Initializing;
        log::info!("[lifecycle] mounted, waiting for a non-empty viewport");
        self.try_start();
        true
    }

    /// Surface size changed. Rebuilds synchronously so the next tick already
    /// sees the new grid and pool.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.resize(width, height);
        if matches!(self.state, State::Initializing) {
            self.try_start();
        }
    }

    fn try_start(&mut self) {
        if self.engine.viewport().is_empty() {
            return;
        }
        let pending = self.scheduler.request_tick();
        self.state = State::Running { pending };
        let vp = self.engine.viewport();
        log::info!("[lifecycle] running at {}x{}", vp.width, vp.height);
    }

    /// Deliver a scheduled tick. Stale or unknown handles are ignored; returns
    /// whether a tick ran.
    pub fn on_tick<T: Surface + ?Sized>(
        &mut self,
        handle: S::Handle,
        theme: Theme,
        surface: &mut T,
    ) -> bool {
        match self.state {
            State::Running { pending } if pending == handle => {}
            _ => {
                log::trace!("[lifecycle] dropping stale tick {:?}", handle);
                return false;
            }
        }
        self.engine.tick(theme, surface);
        self.ticks += 1;
        let pending = self.scheduler.request_tick();
        self.state = State::Running { pending };
        true
    }

    /// Cancel the outstanding tick and stop for good.
    pub fn teardown(&mut self) {
        if let State::Running { pending } = self.state {
            self.scheduler.cancel(pending);
        }
        if !matches!(self.state, State::TornDown) {
            log::info!("[lifecycle] torn down after {} ticks", self.ticks);
        }
        self.state = State::TornDown;
    }
}
