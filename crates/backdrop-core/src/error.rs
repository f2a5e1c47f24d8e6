//! Error types for the backdrop core.
//!
//! The simulation itself never fails at runtime; the only checked input is the
//! tunable configuration, validated once when an engine is built.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid spacing must be positive, got {0}")]
    Spacing(f32),
    #[error("distortion radius must be positive, got {0}")]
    Radius(f32),
    #[error("{name} must lie strictly between 0 and 1, got {value}")]
    UnitRange { name: &'static str, value: f32 },
    #[error("trail spawn ratio must be positive, got {0}")]
    SpawnRatio(f32),
    #[error("trail lifespan must be at least one frame (min {min}, span {span})")]
    Lifespan { min: f32, span: f32 },
    #[error("ambient area per particle must be positive, got {0}")]
    AmbientDensity(f32),
}
