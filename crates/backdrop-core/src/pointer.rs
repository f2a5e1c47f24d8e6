use crate::constants::POINTER_OFFSCREEN;
use glam::Vec2;

/// Snapshot of the pointer as the simulation sees it during one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl PointerState {
    pub const OFFSCREEN: Self = Self {
        pos: Vec2::new(POINTER_OFFSCREEN, POINTER_OFFSCREEN),
        vel: Vec2::ZERO,
    };

    /// The glow is only drawn while the pointer sits inside the surface's
    /// positive quadrant; the off-surface sentinel is far outside it.
    #[inline]
    pub fn is_on_surface(&self) -> bool {
        self.pos.x > 0.0 && self.pos.y > 0.0
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::OFFSCREEN
    }
}

/// Displacement between two consecutive pointer-move observations.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerMotion {
    pub at: Vec2,
    pub delta: Vec2,
}

impl PointerMotion {
    #[inline]
    pub fn speed(&self) -> f32 {
        self.delta.length()
    }
}

#[derive(Clone, Debug)]
pub struct PointerTracker {
    state: PointerState,
    last: Option<Vec2>,
    smoothing: f32,
}

impl PointerTracker {
    pub fn new(smoothing: f32) -> Self {
        Self {
            state: PointerState::OFFSCREEN,
            last: None,
            smoothing,
        }
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    /// Record a pointer-move. The first observation after mount has nothing to
    /// diff against, so it reports zero displacement; after a leave the next
    /// move is measured from the last position seen on the surface.
    pub fn on_move(&mut self, pos: Vec2) -> PointerMotion {
        let delta = self.last.map_or(Vec2::ZERO, |last| pos - last);
        self.state = PointerState {
            pos,
            vel: delta * self.smoothing,
        };
        self.last = Some(pos);
        PointerMotion { at: pos, delta }
    }

    pub fn on_leave(&mut self) {
        self.state = PointerState::OFFSCREEN;
    }
}
