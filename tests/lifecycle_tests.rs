// Host-side tests for the mount/tick/teardown state machine, driven by a
// manual scheduler instead of a display refresh.

use backdrop_core::*;

fn make_orchestrator() -> Orchestrator<ManualScheduler> {
    let engine = Engine::new(EngineConfig::default(), 42).unwrap();
    Orchestrator::new(engine, ManualScheduler::new())
}

/// Deliver the next due tick; returns whether it ran.
fn pump(orch: &mut Orchestrator<ManualScheduler>, surface: &mut RecordingSurface) -> bool {
    match orch.scheduler_mut().next_due() {
        Some(handle) => orch.on_tick(handle, Theme::Dark, surface),
        None => false,
    }
}

#[test]
fn missing_context_skips_mount_and_allows_retry() {
    let mut orch = make_orchestrator();
    assert!(!orch.mount(false));
    assert_eq!(orch.phase(), Phase::Unmounted);
    orch.resize(600.0, 400.0);
    assert_eq!(orch.phase(), Phase::Unmounted);
    assert_eq!(orch.scheduler().pending_len(), 0);

    assert!(orch.mount(true));
    assert_eq!(orch.phase(), Phase::Running);
}

#[test]
fn waits_for_non_empty_viewport() {
    let mut orch = make_orchestrator();
    assert!(orch.mount(true));
    assert_eq!(orch.phase(), Phase::Initializing);

    orch.resize(0.0, 0.0);
    orch.resize(600.0, 0.0);
    assert_eq!(orch.phase(), Phase::Initializing);
    assert_eq!(orch.scheduler().pending_len(), 0);

    orch.resize(600.0, 400.0);
    assert_eq!(orch.phase(), Phase::Running);
    assert_eq!(orch.scheduler().pending_len(), 1);
    assert!(orch.pending_handle().is_some());
}

#[test]
fn every_tick_schedules_exactly_one_more() {
    let mut orch = make_orchestrator();
    orch.mount(true);
    orch.resize(300.0, 200.0);
    let mut surface = RecordingSurface::new();
    for n in 1..=20 {
        assert!(pump(&mut orch, &mut surface));
        assert_eq!(orch.ticks(), n);
        assert_eq!(orch.scheduler().pending_len(), 1);
    }
}

#[test]
fn every_requested_handle_is_delivered_once() {
    let mut orch = make_orchestrator();
    orch.mount(true);
    orch.resize(300.0, 200.0);
    let mut surface = RecordingSurface::new();
    let mut seen = Vec::new();
    for _ in 0..8 {
        let requested = orch.pending_handle().unwrap();
        assert!(!seen.contains(&requested));
        assert_eq!(orch.scheduler_mut().next_due(), Some(requested));
        assert!(orch.on_tick(requested, Theme::Dark, &mut surface));
        // a stale repeat of the same handle does not run again
        assert!(!orch.on_tick(requested, Theme::Dark, &mut surface));
        seen.push(requested);
    }
    assert_eq!(orch.ticks(), 8);
    assert!(orch.scheduler().cancelled().is_empty());
}

#[test]
fn teardown_stops_the_loop() {
    let mut orch = make_orchestrator();
    orch.mount(true);
    orch.resize(300.0, 200.0);
    let mut surface = RecordingSurface::new();
    for _ in 0..10 {
        pump(&mut orch, &mut surface);
    }
    let outstanding = orch.pending_handle().unwrap();

    orch.teardown();
    assert_eq!(orch.phase(), Phase::TornDown);
    assert_eq!(orch.scheduler().cancelled(), &[outstanding]);
    assert!(!pump(&mut orch, &mut surface));

    // even a late delivery of the cancelled handle must not run
    assert!(!orch.on_tick(outstanding, Theme::Light, &mut surface));
    assert_eq!(orch.ticks(), 10);
}

#[test]
fn stale_handles_are_ignored() {
    let mut orch = make_orchestrator();
    orch.mount(true);
    orch.resize(300.0, 200.0);
    let mut surface = RecordingSurface::new();
    let first = orch.pending_handle().unwrap();
    assert!(pump(&mut orch, &mut surface));
    assert!(!orch.on_tick(first, Theme::Light, &mut surface));
    assert_eq!(orch.ticks(), 1);
}

#[test]
fn zero_sized_surface_keeps_ticking_without_drawing() {
    let mut orch = make_orchestrator();
    orch.mount(true);
    orch.resize(300.0, 200.0);
    let mut surface = RecordingSurface::new();
    pump(&mut orch, &mut surface);

    orch.resize(0.0, 0.0);
    assert!(orch.engine().grid().is_empty());
    assert!(orch.engine().pool().is_empty());
    surface.take();
    for _ in 0..3 {
        assert!(pump(&mut orch, &mut surface));
    }
    assert!(surface.calls.is_empty());
    assert_eq!(orch.phase(), Phase::Running);
    assert_eq!(orch.scheduler().pending_len(), 1);
}

#[test]
fn resize_rebuilds_before_next_tick() {
    let mut orch = make_orchestrator();
    orch.mount(true);
    orch.resize(600.0, 400.0);
    let mut surface = RecordingSurface::new();
    pump(&mut orch, &mut surface);
    orch.engine_mut().on_pointer_move(100.0, 100.0);
    orch.engine_mut().on_pointer_move(140.0, 100.0);
    assert!(orch.engine().pool().trail_len() > 0);
    let before = orch.engine().grid().len();

    orch.resize(1200.0, 800.0);
    assert!(orch.engine().grid().len() > before);
    assert_eq!(orch.engine().pool().len(), 64);
    assert_eq!(orch.engine().pool().trail_len(), 0);

    // a redundant notification does not rebuild
    assert!(!orch.engine_mut().resize(1200.0, 800.0));
}

#[test]
fn teardown_before_running_is_clean() {
    let mut orch = make_orchestrator();
    orch.mount(true);
    orch.teardown();
    assert_eq!(orch.phase(), Phase::TornDown);
    assert!(orch.scheduler().cancelled().is_empty());
    orch.resize(300.0, 200.0);
    assert_eq!(orch.phase(), Phase::TornDown);
    assert_eq!(orch.scheduler().pending_len(), 0);
}
