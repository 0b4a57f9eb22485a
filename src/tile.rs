//! Horizontal and vertical tiles.

use crate::composite::Composite;
use crate::context::{BasicContext, Context};
use crate::element::{Element, ElementId, ViewLimits, FULL_EXTENT};
use crate::events::{CursorTracking, FocusRequest, KeyInfo, MouseButton, TextInfo};
use crate::rect::{Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// `(along, across)` components of a point.
    fn split(self, p: Point) -> (f32, f32) {
        match self {
            Axis::Horizontal => (p.x, p.y),
            Axis::Vertical => (p.y, p.x),
        }
    }

    fn join(self, along: f32, across: f32) -> Point {
        match self {
            Axis::Horizontal => Point::new(along, across),
            Axis::Vertical => Point::new(across, along),
        }
    }
}

/// Children placed side by side along an axis.
///
/// Each child gets at least its minimum size along the axis; space beyond the sum of the
/// minimums is shared out in proportion to how much each child can still grow. Across the axis,
/// children fill the tile up to their maximum.
#[derive(Debug)]
pub struct Tile {
    axis: Axis,
    inner: Composite,
}

impl Tile {
    pub fn new(axis: Axis, children: Vec<Box<dyn Element>>) -> Tile {
        Tile {
            axis,
            inner: Composite::new(children),
        }
    }

    /// A left-to-right tile.
    pub fn horizontal(children: Vec<Box<dyn Element>>) -> Tile {
        Tile::new(Axis::Horizontal, children)
    }

    /// A top-to-bottom tile.
    pub fn vertical(children: Vec<Box<dyn Element>>) -> Tile {
        Tile::new(Axis::Vertical, children)
    }

    /// Appends a child.
    pub fn with<E: 'static + Element>(mut self, child: E) -> Tile {
        self.inner.push(Box::new(child));
        self
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn len(&self) -> usize {
        self.inner.children.len()
    }

    /// Bounds assigned to a child by the last layout.
    pub fn child_bounds(&self, index: usize) -> Rect {
        self.inner.child_bounds(index)
    }

    /// Sizes along the axis for each child, given the available length.
    fn distribute(&self, limits: &[ViewLimits], length: f32) -> Vec<f32> {
        let axis = self.axis;
        let mins: Vec<f32> = limits.iter().map(|l| axis.split(l.min).0).collect();
        let flex: Vec<f32> = limits
            .iter()
            .zip(&mins)
            .map(|(l, min)| (axis.split(l.max).0.min(FULL_EXTENT) - min).max(0.))
            .collect();

        // shares are computed in f64; FULL_EXTENT-sized flex swamps f32 precision
        let extra = f64::from((length - mins.iter().sum::<f32>()).max(0.));
        let total_flex: f64 = flex.iter().map(|f| f64::from(*f)).sum();
        mins.iter()
            .zip(&flex)
            .map(|(min, flex)| {
                if total_flex > 0. {
                    let share = (extra * f64::from(*flex) / total_flex) as f32;
                    min + share.min(*flex)
                } else {
                    *min
                }
            })
            .collect()
    }
}

impl Element for Tile {
    /// Minimums and maximums add up along the axis; across it the tile is as constrained as its
    /// most constrained child.
    fn limits(&self, cx: &BasicContext<'_, '_>) -> ViewLimits {
        let axis = self.axis;
        let (mut min_along, mut max_along) = (0_f32, 0_f32);
        let (mut min_across, mut max_across) = (0_f32, FULL_EXTENT);
        for child in &self.inner.children {
            let l = child.limits(cx);
            let (min_a, min_c) = axis.split(l.min);
            let (max_a, max_c) = axis.split(l.max);
            min_along += min_a;
            max_along += max_a;
            min_across = min_across.max(min_c);
            max_across = max_across.min(max_c);
        }
        let max_along = max_along.min(FULL_EXTENT).max(min_along);
        let max_across = max_across.max(min_across);
        ViewLimits::new(
            axis.join(min_along, min_across),
            axis.join(max_along, max_across),
        )
    }

    fn layout(&mut self, cx: &mut Context<'_, '_>) {
        let outer = cx.bounds;
        let limits: Vec<ViewLimits> = {
            let basic = cx.basic();
            self.inner.children.iter().map(|c| c.limits(&basic)).collect()
        };

        let (length, breadth) = self.axis.split(Point::new(outer.width(), outer.height()));
        let sizes = self.distribute(&limits, length);

        let mut pos = match self.axis {
            Axis::Horizontal => outer.left,
            Axis::Vertical => outer.top,
        };
        let bounds: Vec<Rect> = sizes
            .iter()
            .zip(&limits)
            .map(|(size, l)| {
                let across = breadth.min(self.axis.split(l.max).1);
                let b = match self.axis {
                    Axis::Horizontal => Rect::new(pos, outer.top, pos + size, outer.top + across),
                    Axis::Vertical => Rect::new(outer.left, pos, outer.left + across, pos + size),
                };
                pos += size;
                b
            })
            .collect();
        self.inner.layout(cx, bounds);
    }

    fn draw(&self, cx: &mut Context<'_, '_>) {
        self.inner.draw(cx);
    }

    fn click(&mut self, cx: &mut Context<'_, '_>, btn: MouseButton) -> bool {
        self.inner.click(cx, btn)
    }

    fn drag(&mut self, cx: &mut Context<'_, '_>, btn: MouseButton) {
        self.inner.drag(cx, btn);
    }

    fn cursor(&mut self, cx: &mut Context<'_, '_>, p: Point, status: CursorTracking) -> bool {
        self.inner.cursor(cx, p, status)
    }

    fn scroll(&mut self, cx: &mut Context<'_, '_>, dir: Point, p: Point) -> bool {
        self.inner.scroll(cx, dir, p)
    }

    fn key(&mut self, cx: &mut Context<'_, '_>, k: &KeyInfo) -> bool {
        self.inner.key(cx, k)
    }

    fn text(&mut self, cx: &mut Context<'_, '_>, info: &TextInfo) -> bool {
        self.inner.text(cx, info)
    }

    fn wants_focus(&self) -> bool {
        self.inner.wants_focus()
    }

    fn focus(&mut self, request: FocusRequest) {
        self.inner.focus(request);
    }

    fn has_focus(&self) -> bool {
        self.inner.has_focus()
    }

    fn refresh(&self, cx: &mut Context<'_, '_>, id: ElementId) -> bool {
        self.inner.refresh(cx, id)
    }

    fn is_empty(&self) -> bool {
        self.inner.children.is_empty()
    }
}
