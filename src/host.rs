//! The platform side of a view.
//!
//! Native window creation, event decoding and clipboard access live outside this crate. A
//! platform backend implements [`BaseView`] for its window handle and forwards decoded events to
//! a [`View`](crate::View); [`HeadlessView`] is an in-memory implementation for tests and
//! off-screen rendering.

use crate::element::ViewLimits;
use crate::events::CursorType;
use crate::rect::{Extent, Point, Rect};
use parking_lot::Mutex;

/// A native view handle.
///
/// All methods are called on the UI thread.
pub trait BaseView {
    /// Invalidates the whole view so the platform schedules a paint.
    fn refresh(&self);

    /// Invalidates a region of the view.
    fn refresh_rect(&self, area: Rect);

    /// Current view size.
    fn size(&self) -> Extent;

    /// Current cursor location in view coordinates.
    fn cursor_pos(&self) -> Point;

    fn set_cursor(&self, cursor: CursorType);

    fn clipboard(&self) -> String;

    fn set_clipboard(&self, text: &str);
}

/// A window that can constrain its resizable size.
pub trait Window {
    fn set_limits(&self, limits: ViewLimits);
}

/// An invalidation recorded by [`HeadlessView`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Invalidation {
    All,
    Rect(Rect),
}

#[derive(Debug)]
struct HeadlessState {
    size: Extent,
    cursor_pos: Point,
    cursor: CursorType,
    clipboard: String,
    invalidations: Vec<Invalidation>,
}

/// An off-screen view that records what the view asks of it.
#[derive(Debug)]
pub struct HeadlessView {
    state: Mutex<HeadlessState>,
}

impl HeadlessView {
    pub fn new(size: Extent) -> HeadlessView {
        HeadlessView {
            state: Mutex::new(HeadlessState {
                size,
                cursor_pos: Point::new(0., 0.),
                cursor: CursorType::Arrow,
                clipboard: String::new(),
                invalidations: Vec::new(),
            }),
        }
    }

    /// Resizes the view. Does not trigger a paint on its own.
    pub fn resize(&self, size: Extent) {
        self.state.lock().size = size;
    }

    pub fn set_cursor_pos(&self, pos: Point) {
        self.state.lock().cursor_pos = pos;
    }

    /// The last cursor icon set.
    pub fn cursor(&self) -> CursorType {
        self.state.lock().cursor
    }

    /// Removes and returns all recorded invalidations, oldest first.
    pub fn take_invalidations(&self) -> Vec<Invalidation> {
        std::mem::take(&mut self.state.lock().invalidations)
    }
}

impl BaseView for HeadlessView {
    fn refresh(&self) {
        self.state.lock().invalidations.push(Invalidation::All);
    }

    fn refresh_rect(&self, area: Rect) {
        self.state.lock().invalidations.push(Invalidation::Rect(area));
    }

    fn size(&self) -> Extent {
        self.state.lock().size
    }

    fn cursor_pos(&self) -> Point {
        self.state.lock().cursor_pos
    }

    fn set_cursor(&self, cursor: CursorType) {
        self.state.lock().cursor = cursor;
    }

    fn clipboard(&self) -> String {
        self.state.lock().clipboard.clone()
    }

    fn set_clipboard(&self, text: &str) {
        self.state.lock().clipboard = text.to_owned();
    }
}
