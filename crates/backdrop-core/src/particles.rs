//! Ambient and trail particles sharing one pool.
//!
//! Ambient particles are seeded once per rebuild from the viewport area and
//! live until the next rebuild, wrapping at the edges. Trail particles are
//! blown back from fast pointer motion and expire after a randomized number
//! of frames.

use crate::config::{AmbientConfig, TrailConfig};
use crate::pointer::PointerMotion;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    Ambient,
    Trail,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Base opacity for ambient particles, current opacity for trail ones.
    pub opacity: f32,
    /// Frames elapsed.
    pub life: f32,
    /// Frames until expiry; infinite for ambient particles.
    pub max_life: f32,
    pub kind: ParticleKind,
}

#[inline]
fn centered<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen::<f32>() - 0.5
}

impl Particle {
    pub fn ambient<R: Rng + ?Sized>(viewport: Viewport, cfg: &AmbientConfig, rng: &mut R) -> Self {
        Self {
            pos: Vec2::new(
                rng.gen::<f32>() * viewport.width,
                rng.gen::<f32>() * viewport.height,
            ),
            vel: Vec2::new(
                centered(rng) * cfg.speed_span,
                centered(rng) * cfg.speed_span - cfg.upward_bias,
            ),
            size: rng.gen::<f32>() * cfg.size_span + cfg.size_min,
            opacity: rng.gen::<f32>() * cfg.opacity_span + cfg.opacity_min,
            life: rng.gen::<f32>() * cfg.phase_span,
            max_life: f32::INFINITY,
            kind: ParticleKind::Ambient,
        }
    }

    /// A trail particle launched against the pointer's direction of travel.
    pub fn trail<R: Rng + ?Sized>(motion: &PointerMotion, cfg: &TrailConfig, rng: &mut R) -> Self {
        let jitter = Vec2::new(centered(rng), centered(rng)) * cfg.position_jitter;
        let kick = Vec2::new(centered(rng), centered(rng)) * cfg.velocity_jitter;
        Self {
            pos: motion.at + jitter,
            vel: -motion.delta * cfg.blowback + kick,
            size: rng.gen::<f32>() * cfg.size_span + cfg.size_min,
            opacity: cfg.spawn_opacity,
            life: 0.0,
            max_life: cfg.life_min + rng.gen::<f32>() * cfg.life_span,
            kind: ParticleKind::Trail,
        }
    }

    #[inline]
    pub fn is_ambient(&self) -> bool {
        self.kind == ParticleKind::Ambient
    }

    /// Drift, sway, wrap. Jitter is applied before wrapping so the particle
    /// never leaves `[0, width] x [0, height]`.
    pub fn step_ambient(&mut self, viewport: Viewport, cfg: &AmbientConfig) {
        self.pos += self.vel;
        self.pos.x += (self.life * cfg.jitter_freq).sin() * cfg.jitter_amp;
        self.pos.x = wrap(self.pos.x, viewport.width);
        self.pos.y = wrap(self.pos.y, viewport.height);
        self.life += 1.0;
    }

    /// Age, move, slow down, fade. Returns false once the particle has expired.
    pub fn step_trail(&mut self, cfg: &TrailConfig) -> bool {
        self.life += 1.0;
        self.pos += self.vel;
        self.vel *= cfg.drag;
        self.opacity = (1.0 - self.life / self.max_life) * cfg.fade_scale;
        self.life < self.max_life
    }

    /// Opacity to draw with this frame.
    pub fn display_opacity(&self, cfg: &AmbientConfig) -> f32 {
        match self.kind {
            ParticleKind::Ambient => {
                let pulse = (self.life * cfg.pulse_freq).sin() * cfg.pulse_amp;
                (self.opacity + pulse).clamp(0.0, 1.0)
            }
            ParticleKind::Trail => self.opacity.clamp(0.0, 1.0),
        }
    }
}

#[inline]
fn wrap(v: f32, extent: f32) -> f32 {
    if v < 0.0 {
        extent
    } else if v > extent {
        0.0
    } else {
        v
    }
}

/// Number of trail particles a pointer-move of `speed` px should spawn.
pub fn trail_burst_size(speed: f32, cfg: &TrailConfig) -> usize {
    if speed <= cfg.spawn_threshold {
        return 0;
    }
    ((speed / cfg.spawn_ratio).floor() as usize).min(cfg.spawn_cap)
}

#[derive(Clone, Debug, Default)]
pub struct ParticlePool {
    particles: Vec<Particle>,
}

impl ParticlePool {
    /// Fresh pool holding only ambient particles, `floor(area / area_per_particle)`
    /// of them.
    pub fn seeded<R: Rng + ?Sized>(viewport: Viewport, cfg: &AmbientConfig, rng: &mut R) -> Self {
        let count = ambient_count(viewport, cfg);
        let particles = (0..count)
            .map(|_| Particle::ambient(viewport, cfg, rng))
            .collect();
        Self { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn ambient_len(&self) -> usize {
        self.particles.iter().filter(|p| p.is_ambient()).count()
    }

    pub fn trail_len(&self) -> usize {
        self.len() - self.ambient_len()
    }

    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Spawn the trail burst for one pointer-move; returns how many were added.
    pub fn spawn_trail<R: Rng + ?Sized>(
        &mut self,
        motion: &PointerMotion,
        cfg: &TrailConfig,
        rng: &mut R,
    ) -> usize {
        let room = cfg.max_live.saturating_sub(self.trail_len());
        let n = trail_burst_size(motion.speed(), cfg).min(room);
        self.particles
            .extend((0..n).map(|_| Particle::trail(motion, cfg, rng)));
        n
    }

    /// Advance every particle one tick, dropping expired trail particles in
    /// place.
    pub fn step(&mut self, viewport: Viewport, ambient: &AmbientConfig, trail: &TrailConfig) {
        self.particles.retain_mut(|p| match p.kind {
            ParticleKind::Ambient => {
                p.step_ambient(viewport, ambient);
                true
            }
            ParticleKind::Trail => p.step_trail(trail),
        });
    }
}

pub fn ambient_count(viewport: Viewport, cfg: &AmbientConfig) -> usize {
    if viewport.is_empty() {
        return 0;
    }
    (viewport.area() / cfg.area_per_particle).floor() as usize
}
