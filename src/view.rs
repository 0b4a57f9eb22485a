//! The view: owns the content tree and turns platform events into element calls.

use crate::canvas::Canvas;
use crate::context::{BasicContext, Context};
use crate::element::{Element, ElementId, ViewLimits};
use crate::events::{CursorTracking, CursorType, FocusRequest, KeyInfo, MouseButton, TextInfo};
use crate::host::{BaseView, Window};
use crate::io::{EventLoop, Poster};
use crate::layers::Layers;
use crate::rect::{Point, Rect};
use crate::{Error, Result};
use core::fmt;
use std::sync::Arc;
use tiny_skia::{Pixmap, PixmapMut};
use tracing::{debug, trace};

/// An undoable edit: a pair of actions that revert and re-apply it.
pub struct UndoRedoTask {
    undo: Box<dyn FnMut()>,
    redo: Box<dyn FnMut()>,
}

impl UndoRedoTask {
    pub fn new<U, R>(undo: U, redo: R) -> UndoRedoTask
    where
        U: 'static + FnMut(),
        R: 'static + FnMut(),
    {
        UndoRedoTask {
            undo: Box::new(undo),
            redo: Box::new(redo),
        }
    }
}

impl fmt::Debug for UndoRedoTask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "UndoRedoTask")
    }
}

/// View state that elements can reach through [`Context::view`] while the content is borrowed.
pub struct ViewState {
    host: Arc<dyn BaseView>,
    poster: Poster,
    current_limits: ViewLimits,
    current_bounds: Rect,
    dirty: Rect,
    relayout: bool,
    is_focus: bool,
    current_button: MouseButton,
    undo_stack: Vec<UndoRedoTask>,
    redo_stack: Vec<UndoRedoTask>,
}

impl fmt::Debug for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ViewState")
            .field("current_limits", &self.current_limits)
            .field("current_bounds", &self.current_bounds)
            .field("dirty", &self.dirty)
            .field("relayout", &self.relayout)
            .field("is_focus", &self.is_focus)
            .field("undo", &self.undo_stack.len())
            .field("redo", &self.redo_stack.len())
            .finish()
    }
}

impl ViewState {
    pub(crate) fn new(host: Arc<dyn BaseView>, poster: Poster) -> ViewState {
        ViewState {
            host,
            poster,
            current_limits: ViewLimits::fixed(0., 0.),
            current_bounds: Rect::EMPTY,
            dirty: Rect::EMPTY,
            relayout: false,
            is_focus: false,
            current_button: MouseButton::default(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// The platform view.
    pub fn host(&self) -> &dyn BaseView {
        &*self.host
    }

    /// A handle for posting work from other threads.
    pub fn poster(&self) -> Poster {
        self.poster.clone()
    }

    /// Requests a repaint of the whole view. May be called from any thread through a
    /// [`Poster`]; this is the UI-thread shorthand.
    pub fn refresh(&self) {
        self.poster.refresh();
    }

    /// Requests a repaint of a region of the view.
    pub fn refresh_rect(&self, area: Rect) {
        self.poster.refresh_rect(area);
    }

    /// Forces the next draw to lay out the content even if the view size did not change.
    pub fn request_relayout(&mut self) {
        self.relayout = true;
    }

    pub fn current_limits(&self) -> ViewLimits {
        self.current_limits
    }

    /// Bounds used by the last layout.
    pub fn current_bounds(&self) -> Rect {
        self.current_bounds
    }

    /// The region being repainted by the current (or last) draw.
    pub fn dirty(&self) -> Rect {
        self.dirty
    }

    /// The last button event the view received.
    pub fn current_button(&self) -> MouseButton {
        self.current_button
    }

    /// True if the content held focus after the last click.
    pub fn is_focus(&self) -> bool {
        self.is_focus
    }

    pub fn set_cursor(&self, cursor: CursorType) {
        self.host.set_cursor(cursor);
    }

    pub fn clipboard(&self) -> String {
        self.host.clipboard()
    }

    pub fn set_clipboard(&self, text: &str) {
        self.host.set_clipboard(text);
    }

    /// Records a new edit. Anything that could have been redone is forgotten.
    pub fn add_undo(&mut self, task: UndoRedoTask) {
        self.undo_stack.push(task);
        self.redo_stack.clear();
    }

    /// Reverts the latest edit. Returns false if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(mut task) => {
                (task.undo)();
                self.redo_stack.push(task);
                true
            }
            None => false,
        }
    }

    /// Re-applies the latest undone edit. Returns false if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(mut task) => {
                (task.redo)();
                self.undo_stack.push(task);
                true
            }
            None => false,
        }
    }

    pub fn has_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn has_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}

/// Runs `f` against the content with a throwaway canvas over the measuring surface.
///
/// Input dispatch never draws anything visible, but elements still get a valid canvas.
fn offscreen<R>(
    measure: &mut Pixmap,
    state: &mut ViewState,
    bounds: Rect,
    f: impl FnOnce(&mut Context<'_, '_>) -> R,
) -> R {
    let mut canvas = Canvas::new(measure.as_mut());
    let mut cx = Context::new(state, &mut canvas, bounds);
    f(&mut cx)
}

/// A view bound to a platform view.
///
/// Everything except [`Poster`] handles must be used from the UI thread.
pub struct View {
    content: Layers,
    state: ViewState,
    measure: Pixmap,
    io: EventLoop,
    on_change_limits: Option<Box<dyn FnMut(ViewLimits)>>,
}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("View")
            .field("content", &self.content)
            .field("state", &self.state)
            .finish()
    }
}

impl View {
    /// Creates a view with empty content.
    pub fn new(host: Arc<dyn BaseView>) -> Result<View> {
        let measure = Pixmap::new(1, 1).ok_or(Error::SurfaceAllocation {
            width: 1,
            height: 1,
        })?;
        let io = EventLoop::new();
        let state = ViewState::new(host, io.poster().clone());
        Ok(View {
            content: Layers::default(),
            state,
            measure,
            io,
            on_change_limits: None,
        })
    }

    /// Creates a view whose window follows the content’s limits.
    pub fn for_window(host: Arc<dyn BaseView>, window: Arc<dyn Window>) -> Result<View> {
        let mut view = View::new(host)?;
        view.set_on_change_limits(move |limits| window.set_limits(limits));
        Ok(view)
    }

    /// Registers the callback invoked whenever the content’s limits change.
    pub fn set_on_change_limits<F: 'static + FnMut(ViewLimits)>(&mut self, f: F) {
        self.on_change_limits = Some(Box::new(f));
    }

    pub fn host(&self) -> &dyn BaseView {
        self.state.host()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    pub fn content(&self) -> &Layers {
        &self.content
    }

    /// Mutable access to the content. Call [`View::request_relayout`] after structural changes.
    pub fn content_mut(&mut self) -> &mut Layers {
        &mut self.content
    }

    /// Replaces the content and measures it right away.
    pub fn set_content(&mut self, content: Layers) {
        self.content = content;
        self.state.relayout = true;
        self.set_limits();
    }

    pub fn current_limits(&self) -> ViewLimits {
        self.state.current_limits
    }

    pub fn current_bounds(&self) -> Rect {
        self.state.current_bounds
    }

    pub fn dirty(&self) -> Rect {
        self.state.dirty
    }

    pub fn is_focus(&self) -> bool {
        self.state.is_focus
    }

    pub fn current_button(&self) -> MouseButton {
        self.state.current_button
    }

    pub fn request_relayout(&mut self) {
        self.state.relayout = true;
    }

    /// Re-measures the content. Returns true if its limits changed.
    pub fn set_limits(&mut self) -> bool {
        if self.content.is_empty() {
            return false;
        }

        let limits = {
            let canvas = Canvas::new(self.measure.as_mut());
            let cx = BasicContext {
                view: &self.state,
                canvas: &canvas,
            };
            self.content.limits(&cx)
        };

        if limits == self.state.current_limits {
            return false;
        }
        debug!(?limits, "content limits changed");
        self.state.current_limits = limits;
        if let Some(on_change_limits) = &mut self.on_change_limits {
            on_change_limits(limits);
        }
        true
    }

    /// Paints the content into `surface`. Called by the platform on expose.
    pub fn draw(&mut self, surface: PixmapMut<'_>, dirty: Rect) {
        if self.content.is_empty() {
            return;
        }
        self.state.dirty = dirty;

        // The window is about to be resized; paint again once it has been.
        if self.set_limits() {
            self.refresh();
            return;
        }

        let size = self.state.host.size();
        let subject = Rect::from_size(size);
        let mut canvas = Canvas::new(surface);
        let mut cx = Context::new(&mut self.state, &mut canvas, subject);

        if cx.view.relayout || subject != cx.view.current_bounds {
            debug!(bounds = ?subject, "layout");
            cx.view.relayout = false;
            cx.view.current_bounds = subject;
            self.content.layout(&mut cx);
        }

        self.content.draw(&mut cx);
    }

    pub fn click(&mut self, btn: MouseButton) -> bool {
        if self.content.is_empty() {
            return false;
        }
        trace!(?btn, "click");
        self.state.current_button = btn;
        let bounds = self.state.current_bounds;
        let View {
            content,
            state,
            measure,
            ..
        } = self;
        let handled = offscreen(measure, state, bounds, |cx| content.click(cx, btn));
        self.state.is_focus = self.content.has_focus();
        handled
    }

    pub fn drag(&mut self, btn: MouseButton) {
        if self.content.is_empty() {
            return;
        }
        self.state.current_button = btn;
        let bounds = self.state.current_bounds;
        let View {
            content,
            state,
            measure,
            ..
        } = self;
        offscreen(measure, state, bounds, |cx| content.drag(cx, btn));
    }

    /// Dispatches cursor movement. Resets the cursor icon if no element claims the cursor.
    pub fn cursor(&mut self, p: Point, status: CursorTracking) -> bool {
        if self.content.is_empty() {
            return false;
        }
        let bounds = self.state.current_bounds;
        let View {
            content,
            state,
            measure,
            ..
        } = self;
        let handled = offscreen(measure, state, bounds, |cx| content.cursor(cx, p, status));
        if !handled {
            self.state.set_cursor(CursorType::Arrow);
        }
        handled
    }

    pub fn scroll(&mut self, dir: Point, p: Point) -> bool {
        if self.content.is_empty() {
            return false;
        }
        let bounds = self.state.current_bounds;
        let View {
            content,
            state,
            measure,
            ..
        } = self;
        offscreen(measure, state, bounds, |cx| content.scroll(cx, dir, p))
    }

    pub fn key(&mut self, k: &KeyInfo) -> bool {
        if self.content.is_empty() {
            return false;
        }
        let bounds = self.state.current_bounds;
        let View {
            content,
            state,
            measure,
            ..
        } = self;
        offscreen(measure, state, bounds, |cx| content.key(cx, k))
    }

    pub fn text(&mut self, info: &TextInfo) -> bool {
        if self.content.is_empty() {
            return false;
        }
        let bounds = self.state.current_bounds;
        let View {
            content,
            state,
            measure,
            ..
        } = self;
        offscreen(measure, state, bounds, |cx| content.text(cx, info))
    }

    /// Forwards a window focus change to the content, if it holds focus.
    pub fn focus(&mut self, request: FocusRequest) {
        if self.content.is_empty() || !self.state.is_focus {
            return;
        }
        self.content.focus(request);
        self.refresh();
    }

    /// Requests a repaint of the whole view.
    pub fn refresh(&self) {
        self.state.refresh();
    }

    /// Requests a repaint of a region.
    pub fn refresh_rect(&self, area: Rect) {
        self.state.refresh_rect(area);
    }

    /// Repaints a single element right away, without relayout. Returns false if the element
    /// isn’t in the content or nothing has been laid out yet.
    pub fn refresh_element(&mut self, id: ElementId) -> bool {
        let bounds = self.state.current_bounds;
        if bounds.is_empty() {
            return false;
        }
        let View {
            content,
            state,
            measure,
            ..
        } = self;
        offscreen(measure, state, bounds, |cx| content.refresh(cx, id))
    }

    pub fn add_undo(&mut self, task: UndoRedoTask) {
        self.state.add_undo(task);
    }

    pub fn undo(&mut self) -> bool {
        self.state.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.state.redo()
    }

    pub fn has_undo(&self) -> bool {
        self.state.has_undo()
    }

    pub fn has_redo(&self) -> bool {
        self.state.has_redo()
    }

    /// A handle for posting work onto this view’s event loop from any thread.
    pub fn poster(&self) -> Poster {
        self.io.poster().clone()
    }

    /// Posts a task onto the event loop. Use this to change the content from other threads.
    pub fn post<F: 'static + FnOnce(&mut View) + Send>(&self, task: F) {
        self.io.poster().post(task);
    }

    /// Runs all pending posted tasks without blocking. Returns how many ran.
    ///
    /// Tasks posted while polling run in the same call.
    pub fn poll(&mut self) -> usize {
        let mut count = 0;
        while let Some(task) = self.io.next_task() {
            task(self);
            count += 1;
        }
        if count > 0 {
            trace!(count, "ran posted tasks");
        }
        count
    }
}

impl Drop for View {
    fn drop(&mut self) {
        self.io.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::colors;
    use crate::element::FULL_EXTENT;
    use crate::events::{KeyAction, KeyCode, Modifiers};
    use crate::host::{HeadlessView, Invalidation};
    use crate::testing::Probe;
    use crate::tile::Tile;
    use crate::basic::FilledBox;
    use cgmath::Vector2;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn headless(width: f32, height: f32) -> (Arc<HeadlessView>, View) {
        let host = Arc::new(HeadlessView::new(Vector2::new(width, height)));
        let view = View::new(host.clone()).unwrap();
        (host, view)
    }

    fn paint(view: &mut View, width: u32, height: u32) -> Pixmap {
        let mut pixmap = Pixmap::new(width, height).unwrap();
        let dirty = Rect::new(0., 0., width as f32, height as f32);
        view.draw(pixmap.as_mut(), dirty);
        pixmap
    }

    #[test]
    fn assigning_content_reports_limits_once() {
        let (_host, mut view) = headless(400., 100.);
        let calls = Rc::new(RefCell::new(Vec::new()));
        let calls2 = calls.clone();
        view.set_on_change_limits(move |limits| calls2.borrow_mut().push(limits));

        let limits = ViewLimits::new(Point::new(300., 60.), Point::new(FULL_EXTENT, FULL_EXTENT));
        view.set_content(Layers::default().with(Probe::new().limits(limits)));

        assert_eq!(view.current_limits(), limits);
        assert_eq!(*calls.borrow(), vec![limits]);
    }

    #[test]
    fn unchanged_limits_are_not_reported() {
        let (_host, mut view) = headless(400., 100.);
        let count = Rc::new(Cell::new(0));
        let count2 = count.clone();
        view.set_on_change_limits(move |_| count2.set(count2.get() + 1));
        view.set_content(Layers::default().with(Probe::new().limits(ViewLimits::fixed(10., 10.))));

        assert!(!view.set_limits());
        assert!(!view.set_limits());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn window_follows_limits() {
        struct Recorder(parking_lot::Mutex<Option<ViewLimits>>);
        impl Window for Recorder {
            fn set_limits(&self, limits: ViewLimits) {
                *self.0.lock() = Some(limits);
            }
        }

        let host = Arc::new(HeadlessView::new(Vector2::new(100., 100.)));
        let window = Arc::new(Recorder(parking_lot::Mutex::new(None)));
        let mut view = View::for_window(host, window.clone()).unwrap();
        view.set_content(Layers::default().with(Probe::new().limits(ViewLimits::fixed(20., 30.))));
        assert_eq!(*window.0.lock(), Some(ViewLimits::fixed(20., 30.)));
    }

    #[test]
    fn empty_content_is_inert() {
        let (host, mut view) = headless(100., 100.);
        let calls = Rc::new(Cell::new(0));
        let calls2 = calls.clone();
        view.set_on_change_limits(move |_| calls2.set(calls2.get() + 1));

        let btn = MouseButton::left_down(Point::new(10., 10.));
        assert!(!view.click(btn));
        view.drag(btn);
        assert!(!view.cursor(Point::new(10., 10.), CursorTracking::Hovering));
        assert!(!view.scroll(Point::new(0., 1.), Point::new(10., 10.)));
        assert!(!view.key(&KeyInfo {
            key: KeyCode::A,
            action: KeyAction::Press,
            modifiers: Modifiers::empty(),
        }));
        assert!(!view.text(&TextInfo {
            codepoint: 'a',
            modifiers: Modifiers::empty(),
        }));
        let pixmap = paint(&mut view, 10, 10);

        assert!(!view.set_limits());
        assert_eq!(calls.get(), 0);
        assert_eq!(view.current_button(), MouseButton::default());
        assert_eq!(view.current_bounds(), Rect::EMPTY);
        assert_eq!(view.poll(), 0);
        assert!(host.take_invalidations().is_empty());
        assert!(pixmap.data().iter().all(|b| *b == 0));
    }

    #[test]
    fn draw_skips_frame_after_resize() {
        let (host, mut view) = headless(50., 50.);
        let (probe, log) = Probe::new().logged();
        // build the content without measuring it, as if it changed behind the view’s back
        view.content_mut().push(Box::new(probe));

        paint(&mut view, 50, 50);
        assert_eq!(log.draws(), 0);
        assert_eq!(view.poll(), 1);
        assert_eq!(host.take_invalidations(), vec![Invalidation::All]);

        paint(&mut view, 50, 50);
        assert_eq!(log.draws(), 1);
        assert_eq!(log.layouts(), vec![Rect::new(0., 0., 50., 50.)]);
    }

    #[test]
    fn relayout_only_when_bounds_change_or_requested() {
        let (host, mut view) = headless(50., 50.);
        let (probe, log) = Probe::new().logged();
        view.set_content(Layers::default().with(probe));

        paint(&mut view, 50, 50);
        paint(&mut view, 50, 50);
        assert_eq!(log.layouts().len(), 1);
        assert_eq!(log.draws(), 2);

        view.request_relayout();
        paint(&mut view, 50, 50);
        assert_eq!(log.layouts().len(), 2);

        host.resize(Vector2::new(80., 40.));
        paint(&mut view, 80, 40);
        assert_eq!(log.layouts().last(), Some(&Rect::new(0., 0., 80., 40.)));
        assert_eq!(view.current_bounds(), Rect::new(0., 0., 80., 40.));
    }

    #[test]
    fn draw_paints_content() {
        let (_host, mut view) = headless(8., 8.);
        view.set_content(Layers::default().with(FilledBox::new(colors::WHITE)));
        let pixmap = paint(&mut view, 8, 8);
        let p = pixmap.pixel(4, 4).unwrap();
        assert_eq!((p.red(), p.green(), p.blue(), p.alpha()), (255, 255, 255, 255));
    }

    #[test]
    fn click_routes_to_child_under_pointer() {
        let (_host, mut view) = headless(200., 100.);
        let (left, left_log) = Probe::new().handles_clicks().focusable().logged();
        let (right, right_log) = Probe::new().handles_clicks().logged();
        view.set_content(Layers::default().with(Tile::horizontal(vec![
            Box::new(left),
            Box::new(right),
        ])));
        paint(&mut view, 200, 100);

        assert!(view.click(MouseButton::left_down(Point::new(20., 50.))));
        assert_eq!(left_log.clicks(), 1);
        assert_eq!(right_log.clicks(), 0);
        assert!(view.is_focus());
        assert!(left_log.focused());

        assert!(!view.click(MouseButton::left_down(Point::new(500., 50.))));
        assert_eq!(left_log.clicks(), 1);
        assert_eq!(right_log.clicks(), 0);
    }

    #[test]
    fn unclaimed_cursor_resets_icon() {
        let (host, mut view) = headless(100., 100.);
        view.set_content(Layers::default().with(Probe::new()));
        paint(&mut view, 100, 100);
        host.set_cursor(CursorType::Hand);

        assert!(!view.cursor(Point::new(10., 10.), CursorTracking::Hovering));
        assert_eq!(host.cursor(), CursorType::Arrow);
    }

    #[test]
    fn focus_is_forwarded_only_while_focused() {
        let (host, mut view) = headless(100., 100.);
        let (probe, log) = Probe::new().handles_clicks().focusable().logged();
        view.set_content(Layers::default().with(probe));
        paint(&mut view, 100, 100);

        view.focus(FocusRequest::EndFocus);
        assert_eq!(view.poll(), 0);

        view.click(MouseButton::left_down(Point::new(10., 10.)));
        assert!(log.focused());
        view.focus(FocusRequest::EndFocus);
        assert!(!log.focused());
        assert_eq!(view.poll(), 1);
        assert_eq!(host.take_invalidations(), vec![Invalidation::All]);
    }

    #[test]
    fn text_goes_to_focused_element() {
        let (_host, mut view) = headless(100., 100.);
        let (a, a_log) = Probe::new().handles_clicks().focusable().logged();
        let (b, b_log) = Probe::new().handles_clicks().focusable().logged();
        view.set_content(Layers::default().with(Tile::vertical(vec![Box::new(a), Box::new(b)])));
        paint(&mut view, 100, 100);

        view.click(MouseButton::left_down(Point::new(10., 80.)));
        assert!(view.text(&TextInfo {
            codepoint: 'x',
            modifiers: Modifiers::empty(),
        }));
        assert!(a_log.texts().is_empty());
        assert_eq!(b_log.texts(), vec!['x']);
    }

    #[test]
    fn refresh_element_invalidates_its_bounds_immediately() {
        let (host, mut view) = headless(200., 100.);
        let id = ElementId::new();
        view.set_content(Layers::default().with(Tile::horizontal(vec![
            Box::new(Probe::new()),
            Box::new(Probe::new().with_id(id)),
        ])));

        // nothing laid out yet
        assert!(!view.refresh_element(id));

        paint(&mut view, 200, 100);
        assert!(view.refresh_element(id));
        assert_eq!(
            host.take_invalidations(),
            vec![Invalidation::Rect(Rect::new(100., 0., 200., 100.))]
        );
        assert!(!view.refresh_element(ElementId::new()));
        assert_eq!(view.poll(), 0);
    }

    #[test]
    fn undo_redo_stack_law() {
        let (_host, mut view) = headless(10., 10.);
        let value = Rc::new(Cell::new(1));
        let (u, r) = (value.clone(), value.clone());
        view.add_undo(UndoRedoTask::new(move || u.set(0), move || r.set(1)));

        assert!(!view.redo());
        assert!(view.undo());
        assert_eq!(value.get(), 0);
        assert!(!view.undo());
        assert!(view.redo());
        assert_eq!(value.get(), 1);

        assert!(view.undo());
        assert!(view.has_redo());
        view.add_undo(UndoRedoTask::new(|| {}, || {}));
        assert!(!view.has_redo());
        assert!(!view.redo());
    }

    #[test]
    fn cross_thread_refreshes_keep_order() {
        let (host, mut view) = headless(100., 100.);
        let poster = view.poster();
        let a = Rect::new(0., 0., 10., 10.);
        let b = Rect::new(20., 20., 30., 30.);
        std::thread::spawn(move || {
            poster.refresh_rect(a);
            poster.refresh_rect(b);
        })
        .join()
        .unwrap();

        assert!(host.take_invalidations().is_empty());
        assert_eq!(view.poll(), 2);
        assert_eq!(
            host.take_invalidations(),
            vec![Invalidation::Rect(a), Invalidation::Rect(b)]
        );
    }

    #[test]
    fn posted_tasks_can_replace_content() {
        let (_host, mut view) = headless(100., 100.);
        let poster = view.poster();
        std::thread::spawn(move || {
            poster.post(|view| {
                view.set_content(Layers::default().with(Probe::new().limits(ViewLimits::fixed(5., 5.))))
            });
        })
        .join()
        .unwrap();

        assert!(view.content().is_empty());
        view.poll();
        assert_eq!(view.content().len(), 1);
        assert_eq!(view.current_limits(), ViewLimits::fixed(5., 5.));
    }

    #[test]
    fn posting_after_drop_is_ignored() {
        let (host, view) = headless(100., 100.);
        let poster = view.poster();
        drop(view);
        assert!(poster.is_stopped());
        poster.refresh();
        assert!(host.take_invalidations().is_empty());
    }
}
