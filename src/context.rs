//! Dispatch contexts.

use crate::canvas::Canvas;
use crate::rect::Rect;
use crate::view::ViewState;

/// What an element gets to see while measuring itself: the view and a canvas, but no bounds.
pub struct BasicContext<'a, 's> {
    pub view: &'a ViewState,
    pub canvas: &'a Canvas<'s>,
}

/// The context passed through every layout, draw and event call.
///
/// `bounds` are the bounds of the element being called; containers narrow them with
/// [`Context::sub`] as dispatch descends.
pub struct Context<'a, 's> {
    pub view: &'a mut ViewState,
    pub canvas: &'a mut Canvas<'s>,
    pub bounds: Rect,
}

impl<'a, 's> Context<'a, 's> {
    pub fn new(view: &'a mut ViewState, canvas: &'a mut Canvas<'s>, bounds: Rect) -> Self {
        Context {
            view,
            canvas,
            bounds,
        }
    }

    /// Returns a context for a child element with the given bounds.
    pub fn sub(&mut self, bounds: Rect) -> Context<'_, 's> {
        Context {
            view: &mut *self.view,
            canvas: &mut *self.canvas,
            bounds,
        }
    }

    /// Returns a measuring context sharing this context’s view and canvas.
    pub fn basic(&self) -> BasicContext<'_, 's> {
        BasicContext {
            view: &*self.view,
            canvas: &*self.canvas,
        }
    }

    /// Requests a repaint of this context’s bounds.
    pub fn refresh(&self) {
        self.view.refresh_rect(self.bounds);
    }
}
