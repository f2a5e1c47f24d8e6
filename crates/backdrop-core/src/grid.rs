//! Spring-damped dot lattice that bulges away from the pointer.
//!
//! Each point is an independent damped spring anchored at its rest position.
//! The integrator is semi-implicit Euler in per-frame units: the repulsion
//! impulse and spring pull are added to the velocity, the velocity is damped,
//! then the position advances. With `damping < 1` and a small spring constant
//! every point re-converges to rest once the pointer goes away.

use crate::config::GridConfig;
use crate::viewport::Viewport;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPoint {
    pub base: Vec2,
    pub pos: Vec2,
    pub vel: Vec2,
}

impl GridPoint {
    pub fn at_rest(base: Vec2) -> Self {
        Self {
            base,
            pos: base,
            vel: Vec2::ZERO,
        }
    }

    /// Advance one tick with the pointer at `pointer`.
    pub fn step(&mut self, pointer: Vec2, cfg: &GridConfig) {
        self.vel += repulsion_impulse(self.base, pointer, cfg);
        self.vel += (self.base - self.pos) * cfg.spring;
        self.vel *= cfg.damping;
        self.pos += self.vel;
    }

    /// Distance from rest; drives dot radius and color.
    #[inline]
    pub fn distortion(&self) -> f32 {
        self.pos.distance(self.base)
    }
}

/// Velocity impulse a point at rest position `base` receives this tick.
///
/// Linear falloff from `strength` at the pointer to zero at `radius`, directed
/// away from the pointer. A point exactly under the pointer has no defined
/// direction and receives nothing.
pub fn repulsion_impulse(base: Vec2, pointer: Vec2, cfg: &GridConfig) -> Vec2 {
    let offset = base - pointer;
    let d = offset.length();
    if d <= 0.0 || d >= cfg.radius {
        return Vec2::ZERO;
    }
    let force = (1.0 - d / cfg.radius) * cfg.strength;
    (offset / d) * force * cfg.impulse_scale
}

/// Lattice coordinates `0, s, 2s, ...` strictly below `extent + s`, so the
/// trailing partial cell still gets a row/column.
fn lattice_axis(extent: f32, spacing: f32) -> impl Iterator<Item = f32> {
    let limit = extent + spacing;
    (0u32..)
        .map(move |k| k as f32 * spacing)
        .take_while(move |v| *v < limit)
}

#[derive(Clone, Debug, Default)]
pub struct DistortionGrid {
    points: Vec<GridPoint>,
}

impl DistortionGrid {
    /// Build the lattice for `viewport`. Deterministic; an empty viewport
    /// yields an empty grid.
    pub fn build(viewport: Viewport, spacing: f32) -> Self {
        if viewport.is_empty() || spacing <= 0.0 {
            return Self::default();
        }
        let ys: Vec<f32> = lattice_axis(viewport.height, spacing).collect();
        let points = lattice_axis(viewport.width, spacing)
            .flat_map(|x| ys.iter().map(move |&y| GridPoint::at_rest(Vec2::new(x, y))))
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn step(&mut self, pointer: Vec2, cfg: &GridConfig) {
        for p in &mut self.points {
            p.step(pointer, cfg);
        }
    }
}

/// How a grid point should be drawn given its current displacement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotStyle {
    pub radius: f32,
    pub distorted: bool,
}

impl DotStyle {
    pub fn for_distortion(distortion: f32, cfg: &GridConfig) -> Self {
        Self {
            radius: cfg.dot_base_radius + distortion * cfg.dot_radius_per_distortion,
            distorted: distortion > cfg.distorted_threshold,
        }
    }
}
