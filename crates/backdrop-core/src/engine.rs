use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::grid::DistortionGrid;
use crate::palette::Theme;
use crate::particles::ParticlePool;
use crate::pointer::{PointerState, PointerTracker};
use crate::render::{render_frame, TickContext};
use crate::surface::Surface;
use crate::viewport::{Viewport, ViewportTracker};
use glam::Vec2;
use rand::prelude::*;

/// Owns all simulation state for one backdrop: the grid, the particle pool
/// and the pointer record. Host events mutate it between ticks.
pub struct Engine {
    pub config: EngineConfig,
    viewport: ViewportTracker,
    grid: DistortionGrid,
    pool: ParticlePool,
    pointer: PointerTracker,
    rng: StdRng,
}

impl Engine {
    pub fn new(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let pointer = PointerTracker::new(config.pointer_smoothing);
        Ok(Self {
            config,
            viewport: ViewportTracker::default(),
            grid: DistortionGrid::default(),
            pool: ParticlePool::default(),
            pointer,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport.current()
    }

    pub fn grid(&self) -> &DistortionGrid {
        &self.grid
    }

    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer.state()
    }

    /// Observe a surface size. A change discards the grid and the whole pool
    /// and rebuilds them for the new size before returning.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        if !self.viewport.observe(width, height) {
            return false;
        }
        self.rebuild();
        true
    }

    fn rebuild(&mut self) {
        let viewport = self.viewport.current();
        self.grid = DistortionGrid::build(viewport, self.config.grid.spacing);
        self.pool = ParticlePool::seeded(viewport, &self.config.ambient, &mut self.rng);
        log::debug!(
            "[engine] rebuilt for {}x{}: points={} ambient={}",
            viewport.width,
            viewport.height,
            self.grid.len(),
            self.pool.len()
        );
    }

    /// Record a pointer-move and spawn its trail burst; returns the number of
    /// particles spawned.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> usize {
        let motion = self.pointer.on_move(Vec2::new(x, y));
        self.pool
            .spawn_trail(&motion, &self.config.trail, &mut self.rng)
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer.on_leave();
    }

    /// Run one simulation step and draw it.
    pub fn tick<S: Surface + ?Sized>(&mut self, theme: Theme, surface: &mut S) {
        let ctx = TickContext {
            viewport: self.viewport.current(),
            pointer: self.pointer.state(),
            theme,
        };
        render_frame(&ctx, &self.config, &mut self.grid, &mut self.pool, surface);
    }
}
