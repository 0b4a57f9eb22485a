//! Rectangles and points.

use cgmath::{Point2, Vector2};
use std::ops;

/// A point in view coordinates. The y-axis points down.
pub type Point = Point2<f32>;

/// A size.
pub type Extent = Vector2<f32>;

/// A rectangle, stored as its four edges.
///
/// Apart from [`Rect::EMPTY`], `left <= right` and `top <= bottom` always hold for rectangles
/// produced by this module.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    /// The empty rectangle.
    pub const EMPTY: Rect = Rect {
        left: 0.,
        top: 0.,
        right: 0.,
        bottom: 0.,
    };

    /// Creates a new rectangle from its edges.
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Rect {
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates a new rectangle from an origin and a size.
    pub fn from_origin_size(origin: Point, size: Extent) -> Rect {
        Rect {
            left: origin.x,
            top: origin.y,
            right: origin.x + size.x,
            bottom: origin.y + size.y,
        }
    }

    /// Creates a rectangle at the origin with the given size.
    pub fn from_size(size: Extent) -> Rect {
        Rect::new(0., 0., size.x, size.y)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn size(&self) -> Extent {
        Vector2::new(self.width(), self.height())
    }

    pub fn top_left(&self) -> Point {
        Point2::new(self.left, self.top)
    }

    pub fn bottom_right(&self) -> Point {
        Point2::new(self.right, self.bottom)
    }

    /// Returns the center point.
    pub fn center(&self) -> Point {
        Point2::new(
            self.left + self.width() / 2.,
            self.top + self.height() / 2.,
        )
    }

    /// Returns true if this rectangle has no area.
    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Returns true if the point is inside the rectangle.
    ///
    /// The left and top edges are inclusive; the right and bottom edges are not.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }

    /// Returns true if the other rectangle lies entirely inside this one.
    pub fn contains_rect(&self, other: Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }

    /// Returns true if the two rectangles intersect.
    pub fn intersects(&self, rect: Rect) -> bool {
        self.left < rect.right
            && self.top < rect.bottom
            && rect.left < self.right
            && rect.top < self.bottom
    }

    /// Returns the intersection rectangle, or [`Rect::EMPTY`] if they don’t intersect.
    pub fn intersection(&self, rect: Rect) -> Rect {
        if !self.intersects(rect) {
            return Rect::EMPTY;
        }

        Rect {
            left: self.left.max(rect.left),
            top: self.top.max(rect.top),
            right: self.right.min(rect.right),
            bottom: self.bottom.min(rect.bottom),
        }
    }

    /// Returns the smallest rectangle enclosing both. Empty rectangles are ignored.
    pub fn union(&self, rect: Rect) -> Rect {
        if rect.is_empty() {
            return *self;
        }
        if self.is_empty() {
            return rect;
        }

        Rect {
            left: self.left.min(rect.left),
            top: self.top.min(rect.top),
            right: self.right.max(rect.right),
            bottom: self.bottom.max(rect.bottom),
        }
    }

    /// Returns a new rectangle inset by the specified amount on each side.
    ///
    /// Insetting past the center collapses the rectangle onto its center line.
    pub fn inset(&self, horiz: f32, vert: f32) -> Rect {
        let center = self.center();
        let (left, right) = if 2. * horiz > self.width() {
            (center.x, center.x)
        } else {
            (self.left + horiz, self.right - horiz)
        };
        let (top, bottom) = if 2. * vert > self.height() {
            (center.y, center.y)
        } else {
            (self.top + vert, self.bottom - vert)
        };
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Returns this rectangle offset by `(dx, dy)`.
    pub fn move_by(&self, dx: f32, dy: f32) -> Rect {
        Rect {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    /// Returns this rectangle with its top left corner at `(x, y)`.
    pub fn move_to(&self, x: f32, y: f32) -> Rect {
        self.move_by(x - self.left, y - self.top)
    }

    /// Returns this rectangle with the same top left corner and a new width.
    pub fn with_width(&self, width: f32) -> Rect {
        Rect {
            right: self.left + width,
            ..*self
        }
    }

    /// Returns this rectangle with the same top left corner and a new height.
    pub fn with_height(&self, height: f32) -> Rect {
        Rect {
            bottom: self.top + height,
            ..*self
        }
    }

    /// Returns this rectangle moved so that its center coincides with the center of `enclosing`.
    pub fn center_in(&self, enclosing: Rect) -> Rect {
        let target = enclosing.center();
        let current = self.center();
        self.move_by(target.x - current.x, target.y - current.y)
    }

    pub(crate) fn to_skia(self) -> Option<tiny_skia::Rect> {
        tiny_skia::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

impl ops::Add<Extent> for Rect {
    type Output = Rect;
    fn add(self, offset: Extent) -> Rect {
        self.move_by(offset.x, offset.y)
    }
}
