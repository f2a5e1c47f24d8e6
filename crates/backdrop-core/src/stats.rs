use std::time::Duration;

/// Summary over one reporting window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub frames: u32,
    pub avg_fps: f32,
    pub worst_ms: f32,
}

/// Rolling frame-time accumulator; emits a report once per `interval`.
#[derive(Clone, Debug)]
pub struct FrameStats {
    interval: Duration,
    elapsed: Duration,
    frames: u32,
    worst: Duration,
}

impl FrameStats {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
            frames: 0,
            worst: Duration::ZERO,
        }
    }

    pub fn record(&mut self, dt: Duration) -> Option<FrameReport> {
        self.elapsed += dt;
        self.frames += 1;
        self.worst = self.worst.max(dt);
        if self.elapsed < self.interval {
            return None;
        }
        let secs = self.elapsed.as_secs_f32();
        let report = FrameReport {
            frames: self.frames,
            avg_fps: if secs > 0.0 { self.frames as f32 / secs } else { 0.0 },
            worst_ms: self.worst.as_secs_f32() * 1000.0,
        };
        self.elapsed = Duration::ZERO;
        self.frames = 0;
        self.worst = Duration::ZERO;
        Some(report)
    }
}
