//! Stacked layers.

use crate::composite::Composite;
use crate::context::{BasicContext, Context};
use crate::element::{Element, ElementId, ViewLimits, FULL_LIMITS};
use crate::events::{CursorTracking, FocusRequest, KeyInfo, MouseButton, TextInfo};
use crate::rect::{Point, Rect};

/// Children stacked on top of each other, all sharing the container’s bounds.
///
/// Each child is sized to the container, clamped to the child’s own limits.
///
/// Later children are drawn on top of earlier ones and get first pick of pointer events. A view’s
/// content is always a `Layers`; an empty one is the empty tree.
#[derive(Debug, Default)]
pub struct Layers {
    inner: Composite,
}

impl Layers {
    pub fn new(children: Vec<Box<dyn Element>>) -> Layers {
        Layers {
            inner: Composite::new(children),
        }
    }

    /// Adds a layer on top.
    pub fn with<E: 'static + Element>(mut self, child: E) -> Layers {
        self.inner.push(Box::new(child));
        self
    }

    pub fn push(&mut self, child: Box<dyn Element>) {
        self.inner.push(child);
    }

    pub fn len(&self) -> usize {
        self.inner.children.len()
    }

    pub fn children(&self) -> &[Box<dyn Element>] {
        &self.inner.children
    }

    pub fn children_mut(&mut self) -> &mut [Box<dyn Element>] {
        &mut self.inner.children
    }

    /// Bounds assigned to a child by the last layout.
    pub fn child_bounds(&self, index: usize) -> Rect {
        self.inner.child_bounds(index)
    }

    /// Index of the layer holding focus.
    pub fn focused(&self) -> Option<usize> {
        self.inner.focused()
    }
}

impl Element for Layers {
    /// The largest of the minimums and the smallest of the maximums, never below the minimums.
    fn limits(&self, cx: &BasicContext<'_, '_>) -> ViewLimits {
        let mut limits = FULL_LIMITS;
        for child in &self.inner.children {
            let l = child.limits(cx);
            limits.min.x = limits.min.x.max(l.min.x);
            limits.min.y = limits.min.y.max(l.min.y);
            limits.max.x = limits.max.x.min(l.max.x);
            limits.max.y = limits.max.y.min(l.max.y);
        }
        limits.max.x = limits.max.x.max(limits.min.x);
        limits.max.y = limits.max.y.max(limits.min.y);
        limits
    }

    fn layout(&mut self, cx: &mut Context<'_, '_>) {
        let outer = cx.bounds;
        let bounds: Vec<Rect> = {
            let basic = cx.basic();
            self.inner
                .children
                .iter()
                .map(|child| {
                    let l = child.limits(&basic);
                    let width = outer.width().min(l.max.x).max(l.min.x);
                    let height = outer.height().min(l.max.y).max(l.min.y);
                    Rect::new(outer.left, outer.top, outer.left + width, outer.top + height)
                })
                .collect()
        };
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{with_context, Probe};

    #[test]
    fn limits_intersect_children() {
        let a = ViewLimits::new(Point::new(10., 20.), Point::new(500., 80.));
        let b = ViewLimits::new(Point::new(30., 5.), Point::new(300., 600.));
        let layers = Layers::default()
            .with(Probe::new().limits(a))
            .with(Probe::new().limits(b));
        let limits = with_context(Rect::EMPTY, |cx| layers.limits(&cx.basic()));
        assert_eq!(limits.min, Point::new(30., 20.));
        assert_eq!(limits.max, Point::new(300., 80.));
    }

    #[test]
    fn topmost_layer_gets_first_click() {
        let (bottom, bottom_log) = Probe::new().handles_clicks().logged();
        let (top, top_log) = Probe::new().handles_clicks().logged();
        let mut layers = Layers::default().with(bottom).with(top);
        let bounds = Rect::new(0., 0., 100., 100.);
        with_context(bounds, |cx| {
            layers.layout(cx);
            assert!(layers.click(cx, MouseButton::left_down(Point::new(50., 50.))));
        });
        assert_eq!(top_log.clicks(), 1);
        assert_eq!(bottom_log.clicks(), 0);
    }

    #[test]
    fn unhandled_click_falls_through() {
        let (bottom, bottom_log) = Probe::new().handles_clicks().logged();
        let (top, top_log) = Probe::new().logged();
        let mut layers = Layers::default().with(bottom).with(top);
        with_context(Rect::new(0., 0., 100., 100.), |cx| {
            layers.layout(cx);
            assert!(layers.click(cx, MouseButton::left_down(Point::new(50., 50.))));
        });
        assert_eq!(top_log.clicks(), 1);
        assert_eq!(bottom_log.clicks(), 1);
    }

    #[test]
    fn cursor_falls_through_to_layer_that_claims_it() {
        let (bottom, bottom_log) = Probe::new().handles_clicks().logged();
        let (top, top_log) = Probe::new().logged();
        let mut layers = Layers::default().with(bottom).with(top);
        with_context(Rect::new(0., 0., 100., 100.), |cx| {
            layers.layout(cx);
            assert!(layers.cursor(cx, Point::new(50., 50.), CursorTracking::Hovering));
            assert!(layers.cursor(cx, Point::new(60., 50.), CursorTracking::Hovering));
            assert!(layers.cursor(cx, Point::new(60., 50.), CursorTracking::Leaving));
        });
        assert_eq!(
            bottom_log.cursors(),
            vec![
                CursorTracking::Entering,
                CursorTracking::Hovering,
                CursorTracking::Leaving,
            ]
        );
        // asked on every move, never tracked as hovered
        assert_eq!(
            top_log.cursors(),
            vec![CursorTracking::Entering, CursorTracking::Entering]
        );
    }

    #[test]
    fn claimed_cursor_stops_at_topmost_layer() {
        let (bottom, bottom_log) = Probe::new().handles_clicks().logged();
        let (top, top_log) = Probe::new().handles_clicks().logged();
        let mut layers = Layers::default().with(bottom).with(top);
        with_context(Rect::new(0., 0., 100., 100.), |cx| {
            layers.layout(cx);
            assert!(layers.cursor(cx, Point::new(50., 50.), CursorTracking::Hovering));
        });
        assert_eq!(top_log.cursors(), vec![CursorTracking::Entering]);
        assert!(bottom_log.cursors().is_empty());
    }

    #[test]
    fn layout_keeps_children_at_their_minimum() {
        let (probe, log) = Probe::new()
            .limits(ViewLimits::new(Point::new(300., 60.), Point::new(400., 80.)))
            .logged();
        let mut layers = Layers::default().with(probe);
        with_context(Rect::new(0., 0., 100., 200.), |cx| layers.layout(cx));
        assert_eq!(log.layouts(), vec![Rect::new(0., 0., 300., 80.)]);
    }

    #[test]
    fn tab_moves_focus_between_layers() {
        use crate::events::{KeyAction, KeyCode, Modifiers};

        let (a, a_log) = Probe::new().focusable().logged();
        let (b, b_log) = Probe::new().focusable().logged();
        let mut layers = Layers::default().with(a).with(b);
        let tab = KeyInfo {
            key: KeyCode::Tab,
            action: KeyAction::Press,
            modifiers: Modifiers::empty(),
        };
        with_context(Rect::new(0., 0., 10., 10.), |cx| {
            layers.layout(cx);
            assert!(layers.key(cx, &tab));
            assert_eq!(layers.focused(), Some(0));
            assert!(layers.key(cx, &tab));
            assert_eq!(layers.focused(), Some(1));
            // nowhere left to go
            assert!(!layers.key(cx, &tab));
        });
        assert!(!a_log.focused());
        assert!(b_log.focused());
        assert!(layers.has_focus());
    }
}
