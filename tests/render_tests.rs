// Host-side tests for frame rendering against a recording surface.

use backdrop_core::*;

fn running_engine(width: f32, height: f32) -> Engine {
    let mut engine = Engine::new(EngineConfig::default(), 42).unwrap();
    engine.resize(width, height);
    engine
}

#[test]
fn draws_grid_then_particles_then_glow() {
    let mut engine = running_engine(600.0, 400.0);
    engine.on_pointer_move(300.0, 200.0);
    engine.on_pointer_move(330.0, 200.0);
    let mut surface = RecordingSurface::new();
    engine.tick(Theme::Dark, &mut surface);

    let grid = engine.grid().len();
    let particles = engine.pool().len();
    assert_eq!(surface.calls.len(), 1 + grid + particles + 1);
    assert_eq!(
        surface.calls[0],
        DrawCall::Clear {
            width: 600.0,
            height: 400.0
        }
    );
    for (i, point) in engine.grid().points().iter().enumerate() {
        match &surface.calls[1 + i] {
            DrawCall::Circle { center, .. } => assert_eq!(*center, point.pos),
            other => panic!("expected grid dot, got {other:?}"),
        }
    }
    for (i, particle) in engine.pool().particles().iter().enumerate() {
        match &surface.calls[1 + grid + i] {
            DrawCall::Circle { center, radius, .. } => {
                assert_eq!(*center, particle.pos);
                assert_eq!(*radius, particle.size);
            }
            other => panic!("expected particle, got {other:?}"),
        }
    }
    match surface.calls.last() {
        Some(DrawCall::RadialGradient {
            center,
            radius,
            inner,
            outer,
        }) => {
            assert_eq!(center.x, 330.0);
            assert_eq!(*radius, 100.0);
            assert_eq!(*inner, DARK_PALETTE.glow_inner);
            assert_eq!(*outer, Rgba::TRANSPARENT);
        }
        other => panic!("expected glow last, got {other:?}"),
    }
}

#[test]
fn no_glow_without_pointer() {
    let mut engine = running_engine(200.0, 200.0);
    let mut surface = RecordingSurface::new();
    engine.tick(Theme::Light, &mut surface);
    assert!(!surface
        .calls
        .iter()
        .any(|c| matches!(c, DrawCall::RadialGradient { .. })));

    engine.on_pointer_move(50.0, 50.0);
    engine.on_pointer_leave();
    surface.take();
    engine.tick(Theme::Light, &mut surface);
    assert!(!surface
        .calls
        .iter()
        .any(|c| matches!(c, DrawCall::RadialGradient { .. })));
}

#[test]
fn rest_dots_use_theme_palette() {
    let mut engine = running_engine(100.0, 100.0);
    let grid = engine.grid().len();

    let mut dark = RecordingSurface::new();
    engine.tick(Theme::Dark, &mut dark);
    for (_, radius, color) in dark.circles().take(grid) {
        assert_eq!(color, DARK_PALETTE.dot_rest);
        assert!((radius - 0.6).abs() < 1e-6);
    }

    let mut light = RecordingSurface::new();
    engine.tick(Theme::Light, &mut light);
    for (_, _, color) in light.circles().take(grid) {
        assert_eq!(color, LIGHT_PALETTE.dot_rest);
    }
}

#[test]
fn dots_near_pointer_recolor_and_grow() {
    let mut engine = running_engine(400.0, 400.0);
    engine.on_pointer_move(200.0, 200.0);
    let mut surface = RecordingSurface::new();
    for _ in 0..5 {
        surface.take();
        engine.tick(Theme::Light, &mut surface);
    }
    let grid = engine.grid().len();
    let distorted: Vec<_> = surface
        .circles()
        .take(grid)
        .filter(|(_, _, c)| *c == LIGHT_PALETTE.dot_distorted)
        .collect();
    assert!(!distorted.is_empty());
    for (center, radius, _) in distorted {
        assert!(center.distance(glam::Vec2::new(200.0, 200.0)) < 100.0);
        assert!(radius > 0.6 + 0.03);
    }
}

#[test]
fn particles_use_their_own_opacity() {
    let mut engine = running_engine(600.0, 400.0);
    let mut surface = RecordingSurface::new();
    engine.tick(Theme::Dark, &mut surface);
    let grid = engine.grid().len();
    let cfg = engine.config.ambient.clone();
    for ((_, _, color), particle) in surface.circles().skip(grid).zip(engine.pool().particles()) {
        assert_eq!((color.r, color.g, color.b), (255, 255, 255));
        assert!((color.a - particle.display_opacity(&cfg)).abs() < 1e-6);
    }
}

#[test]
fn empty_viewport_renders_nothing() {
    let mut engine = Engine::new(EngineConfig::default(), 1).unwrap();
    let mut surface = RecordingSurface::new();
    engine.tick(Theme::Dark, &mut surface);
    assert!(surface.calls.is_empty());
}
