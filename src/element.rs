//! The element contract.
//!
//! Elements are the nodes of a view’s content tree. Containers own their children and forward
//! calls to them with narrowed [`Context`] bounds; leaves draw and handle input themselves. All
//! methods have defaults, so an element only implements the capabilities it has.

use crate::context::{BasicContext, Context};
use crate::events::{CursorTracking, FocusRequest, KeyInfo, MouseButton, TextInfo};
use crate::rect::Point;
use core::fmt;
use uuid::Uuid;

/// Stands in for “unbounded” in limits.
pub const FULL_EXTENT: f32 = 1e6;

/// Limits that accept any size.
pub const FULL_LIMITS: ViewLimits = ViewLimits {
    min: Point { x: 0., y: 0. },
    max: Point {
        x: FULL_EXTENT,
        y: FULL_EXTENT,
    },
};

/// The minimum and maximum size an element accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewLimits {
    pub min: Point,
    pub max: Point,
}

impl ViewLimits {
    pub const fn new(min: Point, max: Point) -> ViewLimits {
        ViewLimits { min, max }
    }

    /// Limits that accept exactly one size.
    pub const fn fixed(width: f32, height: f32) -> ViewLimits {
        ViewLimits {
            min: Point {
                x: width,
                y: height,
            },
            max: Point {
                x: width,
                y: height,
            },
        }
    }

    /// Clamps a width into these limits.
    pub fn clamp_width(&self, width: f32) -> f32 {
        width.max(self.min.x).min(self.max.x.max(self.min.x))
    }

    /// Clamps a height into these limits.
    pub fn clamp_height(&self, height: f32) -> f32 {
        height.max(self.min.y).min(self.max.y.max(self.min.y))
    }
}

impl Default for ViewLimits {
    fn default() -> Self {
        FULL_LIMITS
    }
}

/// Identifies an element for targeted refreshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(Uuid);

impl ElementId {
    pub fn new() -> ElementId {
        ElementId(Uuid::new_v4())
    }
}

impl Default for ElementId {
    fn default() -> Self {
        ElementId::new()
    }
}

/// A node in the content tree.
pub trait Element: fmt::Debug {
    /// The range of sizes this element accepts.
    fn limits(&self, cx: &BasicContext<'_, '_>) -> ViewLimits {
        let _ = cx;
        FULL_LIMITS
    }

    /// Assigns bounds to descendants, given that `cx.bounds` has been fixed by the parent.
    ///
    /// Must be idempotent for the same bounds.
    fn layout(&mut self, cx: &mut Context<'_, '_>) {
        let _ = cx;
    }

    /// Paints the element into `cx.canvas`.
    fn draw(&self, cx: &mut Context<'_, '_>) {
        let _ = cx;
    }

    /// Returns true if `p` hits this element.
    fn hit_test(&self, cx: &Context<'_, '_>, p: Point) -> bool {
        cx.bounds.contains(p)
    }

    /// Handles a button press or release. Returns true if handled.
    fn click(&mut self, cx: &mut Context<'_, '_>, btn: MouseButton) -> bool {
        let _ = (cx, btn);
        false
    }

    /// Handles pointer movement while a button is held.
    fn drag(&mut self, cx: &mut Context<'_, '_>, btn: MouseButton) {
        let _ = (cx, btn);
    }

    /// Handles cursor movement. Returns true if handled (e.g. the element set a cursor icon).
    fn cursor(&mut self, cx: &mut Context<'_, '_>, p: Point, status: CursorTracking) -> bool {
        let _ = (cx, p, status);
        false
    }

    /// Handles a scroll by `dir` at `p`. Returns true if handled.
    fn scroll(&mut self, cx: &mut Context<'_, '_>, dir: Point, p: Point) -> bool {
        let _ = (cx, dir, p);
        false
    }

    fn key(&mut self, cx: &mut Context<'_, '_>, k: &KeyInfo) -> bool {
        let _ = (cx, k);
        false
    }

    fn text(&mut self, cx: &mut Context<'_, '_>, info: &TextInfo) -> bool {
        let _ = (cx, info);
        false
    }

    /// Returns true if this element can take keyboard focus.
    fn wants_focus(&self) -> bool {
        false
    }

    fn focus(&mut self, request: FocusRequest) {
        let _ = request;
    }

    /// Returns true if this element or a descendant holds focus.
    fn has_focus(&self) -> bool {
        false
    }

    /// If `id` is this element or a descendant, invalidates its bounds right away and returns
    /// true.
    fn refresh(&self, cx: &mut Context<'_, '_>, id: ElementId) -> bool {
        if self.id() == Some(id) {
            cx.view.host().refresh_rect(cx.bounds);
            true
        } else {
            false
        }
    }

    /// True for the empty tree.
    fn is_empty(&self) -> bool {
        false
    }

    /// This element’s identity, if it can be refreshed individually.
    fn id(&self) -> Option<ElementId> {
        None
    }
}

impl<E: Element + ?Sized> Element for Box<E> {
    fn limits(&self, cx: &BasicContext<'_, '_>) -> ViewLimits {
        (**self).limits(cx)
    }
    fn layout(&mut self, cx: &mut Context<'_, '_>) {
        (**self).layout(cx)
    }
    fn draw(&self, cx: &mut Context<'_, '_>) {
        (**self).draw(cx)
    }
    fn hit_test(&self, cx: &Context<'_, '_>, p: Point) -> bool {
        (**self).hit_test(cx, p)
    }
    fn click(&mut self, cx: &mut Context<'_, '_>, btn: MouseButton) -> bool {
        (**self).click(cx, btn)
    }
    fn drag(&mut self, cx: &mut Context<'_, '_>, btn: MouseButton) {
        (**self).drag(cx, btn)
    }
    fn cursor(&mut self, cx: &mut Context<'_, '_>, p: Point, status: CursorTracking) -> bool {
        (**self).cursor(cx, p, status)
    }
    fn scroll(&mut self, cx: &mut Context<'_, '_>, dir: Point, p: Point) -> bool {
        (**self).scroll(cx, dir, p)
    }
    fn key(&mut self, cx: &mut Context<'_, '_>, k: &KeyInfo) -> bool {
        (**self).key(cx, k)
    }
    fn text(&mut self, cx: &mut Context<'_, '_>, info: &TextInfo) -> bool {
        (**self).text(cx, info)
    }
    fn wants_focus(&self) -> bool {
        (**self).wants_focus()
    }
    fn focus(&mut self, request: FocusRequest) {
        (**self).focus(request)
    }
    fn has_focus(&self) -> bool {
        (**self).has_focus()
    }
    fn refresh(&self, cx: &mut Context<'_, '_>, id: ElementId) -> bool {
        (**self).refresh(cx, id)
    }
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
    fn id(&self) -> Option<ElementId> {
        (**self).id()
    }
}
