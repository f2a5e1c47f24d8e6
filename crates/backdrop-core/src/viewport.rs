/// Size of the drawing surface in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// A zero-sized surface is valid; it just has nothing to draw.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

/// Remembers the last observed surface size so callers can tell a real
/// resize from a redundant notification.
#[derive(Clone, Debug, Default)]
pub struct ViewportTracker {
    current: Viewport,
}

impl ViewportTracker {
    pub fn current(&self) -> Viewport {
        self.current
    }

    /// Record a size observation; returns true if it differs from the last one.
    pub fn observe(&mut self, width: f32, height: f32) -> bool {
        let next = Viewport::new(width, height);
        if next == self.current {
            return false;
        }
        self.current = next;
        true
    }
}
