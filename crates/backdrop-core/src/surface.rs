//! Minimal drawing capability the renderer needs.
//!
//! The browser backend lives in the web crate; `RecordingSurface` keeps the
//! calls in memory for tests and headless use.

use crate::palette::Rgba;
use glam::Vec2;

pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// Filled disk of `radius` shaded from `inner` at the center to `outer`
    /// at the rim.
    fn draw_radial_gradient(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear {
        width: f32,
        height: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    RadialGradient {
        center: Vec2,
        radius: f32,
        inner: Rgba,
        outer: Rgba,
    },
}

#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Rgba)> + '_ {
        self.calls.iter().filter_map(|c| match *c {
            DrawCall::Circle {
                center,
                radius,
                color,
            } => Some((center, radius, color)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.calls.push(DrawCall::Clear { width, height });
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_radial_gradient(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba) {
        self.calls.push(DrawCall::RadialGradient {
            center,
            radius,
            inner,
            outer,
        });
    }
}
