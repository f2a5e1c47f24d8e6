// Host-side tests for tuning constants and config validation.

use backdrop_core::constants::*;
use backdrop_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn integrator_constants_are_stable() {
    // damping < 1 and a small spring keep the discrete update from diverging
    assert!(DAMPING > 0.0 && DAMPING < 1.0);
    assert!(SPRING_STRENGTH > 0.0 && SPRING_STRENGTH < 1.0);
    assert!(TRAIL_DRAG > 0.0 && TRAIL_DRAG < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    assert!(GRID_SPACING < DISTORTION_RADIUS);
    assert!(GLOW_RADIUS >= DISTORTION_RADIUS);
    assert!(TRAIL_SPAWN_THRESHOLD < TRAIL_SPAWN_RATIO * TRAIL_SPAWN_CAP as f32);
    assert!(TRAIL_SPAWN_CAP <= TRAIL_MAX_LIVE);
    assert!(AMBIENT_OPACITY_MIN - AMBIENT_PULSE_AMP >= 0.0);
    assert!(AMBIENT_OPACITY_MIN + AMBIENT_OPACITY_SPAN + AMBIENT_PULSE_AMP <= 1.0);
    assert!(TRAIL_SPAWN_OPACITY <= 1.0);
    assert!(POINTER_OFFSCREEN < -DISTORTION_RADIUS);
}

#[test]
fn default_config_is_valid() {
    assert_eq!(EngineConfig::default().validate(), Ok(()));
}

#[test]
fn unstable_damping_is_rejected() {
    let mut cfg = EngineConfig::default();
    cfg.grid.damping = 1.0;
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::UnitRange {
            name: "grid.damping",
            value: 1.0
        })
    );
    assert!(Engine::new(cfg, 0).is_err());
}

#[test]
fn degenerate_values_are_rejected() {
    let mut cfg = EngineConfig::default();
    cfg.grid.spacing = 0.0;
    assert_eq!(cfg.validate(), Err(ConfigError::Spacing(0.0)));

    let mut cfg = EngineConfig::default();
    cfg.grid.radius = -5.0;
    assert_eq!(cfg.validate(), Err(ConfigError::Radius(-5.0)));

    let mut cfg = EngineConfig::default();
    cfg.trail.spawn_ratio = 0.0;
    assert_eq!(cfg.validate(), Err(ConfigError::SpawnRatio(0.0)));

    let mut cfg = EngineConfig::default();
    cfg.trail.life_min = 0.0;
    assert!(matches!(cfg.validate(), Err(ConfigError::Lifespan { .. })));

    let mut cfg = EngineConfig::default();
    cfg.ambient.area_per_particle = f32::NAN;
    assert!(matches!(cfg.validate(), Err(ConfigError::AmbientDensity(_))));
}

#[test]
fn errors_render_readable_messages() {
    let err = ConfigError::UnitRange {
        name: "trail.drag",
        value: 1.5,
    };
    assert_eq!(
        err.to_string(),
        "trail.drag must lie strictly between 0 and 1, got 1.5"
    );
}

#[test]
fn custom_config_changes_density() {
    let mut cfg = EngineConfig::default();
    cfg.ambient.area_per_particle = 1000.0;
    let mut engine = Engine::new(cfg, 3).unwrap();
    engine.resize(100.0, 100.0);
    assert_eq!(engine.pool().ambient_len(), 10);
}
