use crate::config::EngineConfig;
use crate::grid::{DistortionGrid, DotStyle};
use crate::palette::{Palette, Theme};
use crate::particles::ParticlePool;
use crate::pointer::PointerState;
use crate::surface::Surface;
use crate::viewport::Viewport;

/// Inputs sampled once at the start of a tick. Nothing in the simulation
/// reads the pointer or theme from anywhere else.
#[derive(Clone, Copy, Debug)]
pub struct TickContext {
    pub viewport: Viewport,
    pub pointer: PointerState,
    pub theme: Theme,
}

/// Step the grid and particles once and draw them: grid, then particles,
/// then the pointer glow on top. An empty viewport draws nothing.
pub fn render_frame<S: Surface + ?Sized>(
    ctx: &TickContext,
    cfg: &EngineConfig,
    grid: &mut DistortionGrid,
    pool: &mut ParticlePool,
    surface: &mut S,
) {
    let viewport = ctx.viewport;
    if viewport.is_empty() {
        return;
    }
    surface.clear(viewport.width, viewport.height);
    let palette = Palette::for_theme(ctx.theme);

    grid.step(ctx.pointer.pos, &cfg.grid);
    for point in grid.points() {
        let style = DotStyle::for_distortion(point.distortion(), &cfg.grid);
        let color = if style.distorted {
            palette.dot_distorted
        } else {
            palette.dot_rest
        };
        surface.draw_circle(point.pos, style.radius, color);
    }

    pool.step(viewport, &cfg.ambient, &cfg.trail);
    for particle in pool.particles() {
        let color = palette
            .particle
            .with_alpha(particle.display_opacity(&cfg.ambient));
        surface.draw_circle(particle.pos, particle.size, color);
    }

    if ctx.pointer.is_on_surface() {
        surface.draw_radial_gradient(
            ctx.pointer.pos,
            cfg.glow_radius,
            palette.glow_inner,
            palette.glow_outer,
        );
    }
}
