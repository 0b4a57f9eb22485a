//! Basic leaf and wrapper elements.

use crate::color::Color;
use crate::context::{BasicContext, Context};
use crate::element::{Element, ElementId, ViewLimits, FULL_EXTENT};
use crate::events::{CursorTracking, FocusRequest, KeyInfo, MouseButton, TextInfo};
use crate::rect::{Extent, Point, Rect};

/// Fills its bounds with a solid color.
#[derive(Debug, Clone, Copy)]
pub struct FilledBox {
    color: Color,
}

impl FilledBox {
    pub fn new(color: Color) -> FilledBox {
        FilledBox { color }
    }
}

impl Element for FilledBox {
    fn draw(&self, cx: &mut Context<'_, '_>) {
        let canvas = &mut *cx.canvas;
        canvas.begin_path();
        canvas.rect(cx.bounds);
        canvas.fill_style(self.color);
        canvas.fill();
    }
}

/// Forwards everything but limits and layout to `self.subject`, inside `self.subject_bounds`.
macro_rules! forward_to_subject {
    () => {
        fn draw(&self, cx: &mut Context<'_, '_>) {
            let b = self.subject_bounds(cx.bounds);
            self.subject.draw(&mut cx.sub(b));
        }

        fn hit_test(&self, cx: &Context<'_, '_>, p: Point) -> bool {
            self.subject_bounds(cx.bounds).contains(p)
        }

        fn click(&mut self, cx: &mut Context<'_, '_>, btn: MouseButton) -> bool {
            let b = self.subject_bounds(cx.bounds);
            self.subject.click(&mut cx.sub(b), btn)
        }

        fn drag(&mut self, cx: &mut Context<'_, '_>, btn: MouseButton) {
            let b = self.subject_bounds(cx.bounds);
            self.subject.drag(&mut cx.sub(b), btn);
        }

        fn cursor(&mut self, cx: &mut Context<'_, '_>, p: Point, status: CursorTracking) -> bool {
            let b = self.subject_bounds(cx.bounds);
            self.subject.cursor(&mut cx.sub(b), p, status)
        }

        fn scroll(&mut self, cx: &mut Context<'_, '_>, dir: Point, p: Point) -> bool {
            let b = self.subject_bounds(cx.bounds);
            self.subject.scroll(&mut cx.sub(b), dir, p)
        }

        fn key(&mut self, cx: &mut Context<'_, '_>, k: &KeyInfo) -> bool {
            let b = self.subject_bounds(cx.bounds);
            self.subject.key(&mut cx.sub(b), k)
        }

        fn text(&mut self, cx: &mut Context<'_, '_>, info: &TextInfo) -> bool {
            let b = self.subject_bounds(cx.bounds);
            self.subject.text(&mut cx.sub(b), info)
        }

        fn wants_focus(&self) -> bool {
            self.subject.wants_focus()
        }

        fn focus(&mut self, request: FocusRequest) {
            self.subject.focus(request);
        }

        fn has_focus(&self) -> bool {
            self.subject.has_focus()
        }

        fn refresh(&self, cx: &mut Context<'_, '_>, id: ElementId) -> bool {
            let b = self.subject_bounds(cx.bounds);
            self.subject.refresh(&mut cx.sub(b), id)
        }

        fn is_empty(&self) -> bool {
            self.subject.is_empty()
        }
    };
}

/// Gives its subject a fixed size, anchored at the top left.
#[derive(Debug)]
pub struct Fixed<E> {
    size: Extent,
    subject: E,
}

impl<E: Element> Fixed<E> {
    pub fn new(size: Extent, subject: E) -> Fixed<E> {
        Fixed { size, subject }
    }

    pub fn subject(&self) -> &E {
        &self.subject
    }

    pub fn subject_mut(&mut self) -> &mut E {
        &mut self.subject
    }

    fn subject_bounds(&self, outer: Rect) -> Rect {
        Rect::from_origin_size(outer.top_left(), self.size)
    }
}

impl<E: Element> Element for Fixed<E> {
    fn limits(&self, _: &BasicContext<'_, '_>) -> ViewLimits {
        ViewLimits::fixed(self.size.x, self.size.y)
    }

    fn layout(&mut self, cx: &mut Context<'_, '_>) {
        let b = self.subject_bounds(cx.bounds);
        self.subject.layout(&mut cx.sub(b));
    }

    forward_to_subject!();
}

/// Surrounds its subject with empty space. Each side of `margin` is the space on that side.
#[derive(Debug)]
pub struct Margin<E> {
    margin: Rect,
    subject: E,
}

impl<E: Element> Margin<E> {
    pub fn new(margin: Rect, subject: E) -> Margin<E> {
        Margin { margin, subject }
    }

    /// The same margin on all sides.
    pub fn uniform(amount: f32, subject: E) -> Margin<E> {
        Margin::new(Rect::new(amount, amount, amount, amount), subject)
    }

    pub fn subject(&self) -> &E {
        &self.subject
    }

    pub fn subject_mut(&mut self) -> &mut E {
        &mut self.subject
    }

    fn subject_bounds(&self, outer: Rect) -> Rect {
        let m = self.margin;
        let left = outer.left + m.left;
        let top = outer.top + m.top;
        Rect::new(
            left,
            top,
            (outer.right - m.right).max(left),
            (outer.bottom - m.bottom).max(top),
        )
    }
}

impl<E: Element> Element for Margin<E> {
    fn limits(&self, cx: &BasicContext<'_, '_>) -> ViewLimits {
        let l = self.subject.limits(cx);
        let dx = self.margin.left + self.margin.right;
        let dy = self.margin.top + self.margin.bottom;
        ViewLimits::new(
            Point::new(l.min.x + dx, l.min.y + dy),
            Point::new(
                (l.max.x + dx).min(FULL_EXTENT),
                (l.max.y + dy).min(FULL_EXTENT),
            ),
        )
    }

    fn layout(&mut self, cx: &mut Context<'_, '_>) {
        let b = self.subject_bounds(cx.bounds);
        self.subject.layout(&mut cx.sub(b));
    }

    forward_to_subject!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::colors;
    use crate::testing::{with_context, Probe};

    #[test]
    fn filled_box_covers_its_bounds_only() {
        let mut pixmap = tiny_skia::Pixmap::new(4, 4).unwrap();
        {
            let mut canvas = crate::canvas::Canvas::new(pixmap.as_mut());
            let host = std::sync::Arc::new(crate::host::HeadlessView::new(Extent::new(4., 4.)));
            let io = crate::io::EventLoop::new();
            let mut state = crate::view::ViewState::new(host, io.poster().clone());
            let mut cx = Context::new(&mut state, &mut canvas, Rect::new(0., 0., 2., 4.));
            FilledBox::new(colors::WHITE).draw(&mut cx);
        }
        assert_eq!(pixmap.pixel(0, 1).unwrap().alpha(), 255);
        assert_eq!(pixmap.pixel(3, 1).unwrap().alpha(), 0);
    }

    #[test]
    fn margin_adds_to_limits() {
        let margin = Margin::new(
            Rect::new(1., 2., 3., 4.),
            Probe::new().limits(ViewLimits::fixed(10., 10.)),
        );
        let limits = with_context(Rect::EMPTY, |cx| margin.limits(&cx.basic()));
        assert_eq!(limits, ViewLimits::fixed(14., 16.));

        let unbounded = Margin::uniform(5., Probe::new());
        let limits = with_context(Rect::EMPTY, |cx| unbounded.limits(&cx.basic()));
        assert_eq!(limits.max, Point::new(FULL_EXTENT, FULL_EXTENT));
    }

    #[test]
    fn margin_insets_subject() {
        let (probe, log) = Probe::new().handles_clicks().logged();
        let mut margin = Margin::uniform(10., probe);
        with_context(Rect::new(0., 0., 100., 50.), |cx| {
            margin.layout(cx);
            assert!(!margin.hit_test(cx, Point::new(5., 5.)));
            assert!(margin.click(cx, MouseButton::left_down(Point::new(50., 25.))));
        });
        assert_eq!(log.layouts(), vec![Rect::new(10., 10., 90., 40.)]);
        assert_eq!(log.clicks(), 1);
    }

    #[test]
    fn fixed_anchors_at_top_left() {
        let (probe, log) = Probe::new().logged();
        let mut fixed = Fixed::new(Extent::new(20., 30.), probe);
        let limits = with_context(Rect::new(5., 5., 100., 100.), |cx| {
            fixed.layout(cx);
            fixed.limits(&cx.basic())
        });
        assert_eq!(limits, ViewLimits::fixed(20., 30.));
        assert_eq!(log.layouts(), vec![Rect::new(5., 5., 25., 35.)]);
    }
}
