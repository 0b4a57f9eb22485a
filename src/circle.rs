//! Circles.

use crate::rect::{Point, Rect};

/// A circle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
}

impl Circle {
    pub const fn new(cx: f32, cy: f32, radius: f32) -> Circle {
        Circle { cx, cy, radius }
    }

    /// Creates a circle around a center point.
    pub fn around(center: Point, radius: f32) -> Circle {
        Circle::new(center.x, center.y, radius)
    }

    /// Returns the enclosing rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.cx - self.radius,
            self.cy - self.radius,
            self.cx + self.radius,
            self.cy + self.radius,
        )
    }

    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }

    /// Returns a circle with the same center and a radius reduced by `amount`.
    pub fn inset(&self, amount: f32) -> Circle {
        Circle::new(self.cx, self.cy, (self.radius - amount).max(0.))
    }

    pub fn move_by(&self, dx: f32, dy: f32) -> Circle {
        Circle::new(self.cx + dx, self.cy + dy, self.radius)
    }

    pub fn move_to(&self, x: f32, y: f32) -> Circle {
        Circle::new(x, y, self.radius)
    }
}
