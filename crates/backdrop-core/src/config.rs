//! Runtime-tunable parameters for the engine.
//!
//! Every default comes from `constants.rs`. Fields are public so a host can
//! adjust the feel of the backdrop before handing the config to `Engine::new`.

use crate::constants::*;
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    pub spacing: f32,
    pub radius: f32,
    pub strength: f32,
    pub impulse_scale: f32,
    pub spring: f32,
    pub damping: f32,
    pub dot_base_radius: f32,
    pub dot_radius_per_distortion: f32,
    pub distorted_threshold: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            spacing: GRID_SPACING,
            radius: DISTORTION_RADIUS,
            strength: DISTORTION_STRENGTH,
            impulse_scale: IMPULSE_SCALE,
            spring: SPRING_STRENGTH,
            damping: DAMPING,
            dot_base_radius: DOT_BASE_RADIUS,
            dot_radius_per_distortion: DOT_RADIUS_PER_DISTORTION,
            distorted_threshold: DISTORTED_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AmbientConfig {
    pub area_per_particle: f32,
    pub speed_span: f32,
    pub upward_bias: f32,
    pub size_min: f32,
    pub size_span: f32,
    pub opacity_min: f32,
    pub opacity_span: f32,
    pub phase_span: f32,
    pub jitter_freq: f32,
    pub jitter_amp: f32,
    pub pulse_freq: f32,
    pub pulse_amp: f32,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            area_per_particle: AMBIENT_AREA_PER_PARTICLE,
            speed_span: AMBIENT_SPEED_SPAN,
            upward_bias: AMBIENT_UPWARD_BIAS,
            size_min: AMBIENT_SIZE_MIN,
            size_span: AMBIENT_SIZE_SPAN,
            opacity_min: AMBIENT_OPACITY_MIN,
            opacity_span: AMBIENT_OPACITY_SPAN,
            phase_span: AMBIENT_PHASE_SPAN,
            jitter_freq: AMBIENT_JITTER_FREQ,
            jitter_amp: AMBIENT_JITTER_AMP,
            pulse_freq: AMBIENT_PULSE_FREQ,
            pulse_amp: AMBIENT_PULSE_AMP,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrailConfig {
    pub spawn_threshold: f32,
    pub spawn_ratio: f32,
    pub spawn_cap: usize,
    pub max_live: usize,
    pub position_jitter: f32,
    pub blowback: f32,
    pub velocity_jitter: f32,
    pub size_min: f32,
    pub size_span: f32,
    pub spawn_opacity: f32,
    pub life_min: f32,
    pub life_span: f32,
    pub drag: f32,
    pub fade_scale: f32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            spawn_threshold: TRAIL_SPAWN_THRESHOLD,
            spawn_ratio: TRAIL_SPAWN_RATIO,
            spawn_cap: TRAIL_SPAWN_CAP,
            max_live: TRAIL_MAX_LIVE,
            position_jitter: TRAIL_POSITION_JITTER,
            blowback: TRAIL_BLOWBACK,
            velocity_jitter: TRAIL_VELOCITY_JITTER,
            size_min: TRAIL_SIZE_MIN,
            size_span: TRAIL_SIZE_SPAN,
            spawn_opacity: TRAIL_SPAWN_OPACITY,
            life_min: TRAIL_LIFE_MIN,
            life_span: TRAIL_LIFE_SPAN,
            drag: TRAIL_DRAG,
            fade_scale: TRAIL_FADE_SCALE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub grid: GridConfig,
    pub ambient: AmbientConfig,
    pub trail: TrailConfig,
    pub pointer_smoothing: f32,
    pub glow_radius: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            ambient: AmbientConfig::default(),
            trail: TrailConfig::default(),
            pointer_smoothing: POINTER_SMOOTHING,
            glow_radius: GLOW_RADIUS,
        }
    }
}

impl EngineConfig {
    /// Reject parameter sets that would make the integrator diverge or the
    /// spawn math undefined.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.grid.spacing > 0.0) {
            return Err(ConfigError::Spacing(self.grid.spacing));
        }
        if !(self.grid.radius > 0.0) {
            return Err(ConfigError::Radius(self.grid.radius));
        }
        unit_open("grid.damping", self.grid.damping)?;
        unit_open("grid.spring", self.grid.spring)?;
        unit_open("trail.drag", self.trail.drag)?;
        if !(self.trail.spawn_ratio > 0.0) {
            return Err(ConfigError::SpawnRatio(self.trail.spawn_ratio));
        }
        if !(self.trail.life_min >= 1.0) || self.trail.life_span < 0.0 {
            return Err(ConfigError::Lifespan {
                min: self.trail.life_min,
                span: self.trail.life_span,
            });
        }
        if !(self.ambient.area_per_particle > 0.0) {
            return Err(ConfigError::AmbientDensity(self.ambient.area_per_particle));
        }
        Ok(())
    }
}

#[inline]
fn unit_open(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::UnitRange { name, value })
    }
}
