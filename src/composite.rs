//! Machinery shared by containers: child storage, hit-testing, focus and event routing.

use crate::context::Context;
use crate::element::{Element, ElementId};
use crate::events::{
    CursorTracking, FocusRequest, KeyAction, KeyCode, KeyInfo, Modifiers, MouseButton, TextInfo,
};
use crate::rect::{Point, Rect};
use tracing::trace;

/// Children of a container, in z-order (last is topmost), along with their last layout bounds.
#[derive(Debug, Default)]
pub(crate) struct Composite {
    pub children: Vec<Box<dyn Element>>,
    bounds: Vec<Rect>,
    /// The child holding focus.
    focus: Option<usize>,
    /// Focus to restore on the next `BeginFocus`.
    saved_focus: Option<usize>,
    /// The child that handled the last button press; receives drags and the release.
    click_tracking: Option<usize>,
    /// The child that claimed the cursor last.
    hover: Option<usize>,
}

impl Composite {
    pub fn new(children: Vec<Box<dyn Element>>) -> Composite {
        Composite {
            children,
            ..Composite::default()
        }
    }

    pub fn push(&mut self, child: Box<dyn Element>) {
        self.children.push(child);
    }

    /// Bounds assigned by the last layout; empty if the child hasn’t been laid out yet.
    pub fn child_bounds(&self, index: usize) -> Rect {
        self.bounds.get(index).copied().unwrap_or(Rect::EMPTY)
    }

    /// Stores the bounds for each child and lays them out.
    pub fn layout(&mut self, cx: &mut Context<'_, '_>, bounds: Vec<Rect>) {
        debug_assert_eq!(bounds.len(), self.children.len());
        for (child, b) in self.children.iter_mut().zip(&bounds) {
            child.layout(&mut cx.sub(*b));
        }
        self.bounds = bounds;
    }

    pub fn draw(&self, cx: &mut Context<'_, '_>) {
        let dirty = cx.view.dirty();
        for (i, child) in self.children.iter().enumerate() {
            let b = self.child_bounds(i);
            if !dirty.is_empty() && !b.intersects(dirty) {
                continue;
            }
            child.draw(&mut cx.sub(b));
        }
    }

    fn move_focus(&mut self, to: Option<usize>) {
        if self.focus == to {
            return;
        }
        if let Some(old) = self.focus {
            self.children[old].focus(FocusRequest::EndFocus);
        }
        self.focus = to;
        if let Some(new) = to {
            self.children[new].focus(FocusRequest::BeginFocus);
        }
    }

    pub fn click(&mut self, cx: &mut Context<'_, '_>, btn: MouseButton) -> bool {
        if !btn.down {
            if let Some(i) = self.click_tracking.take() {
                let b = self.child_bounds(i);
                return self.children[i].click(&mut cx.sub(b), btn);
            }
        }

        for i in (0..self.children.len()).rev() {
            let mut sub = cx.sub(self.child_bounds(i));
            if !self.children[i].hit_test(&sub, btn.pos) {
                continue;
            }
            if btn.down && self.children[i].wants_focus() {
                self.move_focus(Some(i));
            }
            if self.children[i].click(&mut sub, btn) {
                trace!(child = i, "click handled");
                if btn.down {
                    self.click_tracking = Some(i);
                }
                return true;
            }
        }
        false
    }

    pub fn drag(&mut self, cx: &mut Context<'_, '_>, btn: MouseButton) {
        if let Some(i) = self.click_tracking {
            let b = self.child_bounds(i);
            self.children[i].drag(&mut cx.sub(b), btn);
        }
    }

    pub fn cursor(&mut self, cx: &mut Context<'_, '_>, p: Point, status: CursorTracking) -> bool {
        if status == CursorTracking::Leaving {
            return match self.hover.take() {
                Some(i) => {
                    let b = self.child_bounds(i);
                    self.children[i].cursor(&mut cx.sub(b), p, CursorTracking::Leaving)
                }
                None => false,
            };
        }

        // topmost hit child that claims the cursor becomes the hovered one
        let mut handled_by = None;
        for i in (0..self.children.len()).rev() {
            let mut sub = cx.sub(self.child_bounds(i));
            if !self.children[i].hit_test(&sub, p) {
                continue;
            }
            let child_status = if self.hover == Some(i) {
                status
            } else {
                CursorTracking::Entering
            };
            if self.children[i].cursor(&mut sub, p, child_status) {
                handled_by = Some(i);
                break;
            }
        }

        if handled_by != self.hover {
            if let Some(old) = self.hover {
                let b = self.child_bounds(old);
                self.children[old].cursor(&mut cx.sub(b), p, CursorTracking::Leaving);
            }
            self.hover = handled_by;
        }
        handled_by.is_some()
    }

    pub fn scroll(&mut self, cx: &mut Context<'_, '_>, dir: Point, p: Point) -> bool {
        for i in (0..self.children.len()).rev() {
            let mut sub = cx.sub(self.child_bounds(i));
            if self.children[i].hit_test(&sub, p) && self.children[i].scroll(&mut sub, dir, p) {
                return true;
            }
        }
        false
    }

    pub fn key(&mut self, cx: &mut Context<'_, '_>, k: &KeyInfo) -> bool {
        if let Some(i) = self.focus {
            let b = self.child_bounds(i);
            if self.children[i].key(&mut cx.sub(b), k) {
                return true;
            }
        }

        // tab moves focus among the children that want it
        let is_tab = k.key == KeyCode::Tab && matches!(k.action, KeyAction::Press | KeyAction::Repeat);
        if is_tab {
            let forward = !k.modifiers.contains(Modifiers::SHIFT);
            if let Some(next) = self.next_focusable(forward) {
                self.move_focus(Some(next));
                cx.refresh();
                return true;
            }
        }
        false
    }

    fn next_focusable(&self, forward: bool) -> Option<usize> {
        let wants = |i: &usize| self.children[*i].wants_focus();
        match (self.focus, forward) {
            (None, true) => (0..self.children.len()).find(wants),
            (None, false) => (0..self.children.len()).rev().find(wants),
            (Some(f), true) => (f + 1..self.children.len()).find(wants),
            (Some(f), false) => (0..f).rev().find(wants),
        }
    }

    pub fn text(&mut self, cx: &mut Context<'_, '_>, info: &TextInfo) -> bool {
        match self.focus {
            Some(i) => {
                let b = self.child_bounds(i);
                self.children[i].text(&mut cx.sub(b), info)
            }
            None => false,
        }
    }

    pub fn wants_focus(&self) -> bool {
        self.children.iter().any(|c| c.wants_focus())
    }

    pub fn focus(&mut self, request: FocusRequest) {
        match request {
            FocusRequest::WantsFocus => {}
            FocusRequest::BeginFocus => {
                let target = self
                    .focus
                    .or_else(|| self.saved_focus.take())
                    .or_else(|| self.next_focusable(true));
                if let Some(i) = target {
                    self.focus = Some(i);
                    self.children[i].focus(FocusRequest::BeginFocus);
                }
            }
            FocusRequest::EndFocus => {
                if let Some(i) = self.focus.take() {
                    self.children[i].focus(FocusRequest::EndFocus);
                    self.saved_focus = Some(i);
                }
            }
        }
    }

    pub fn has_focus(&self) -> bool {
        self.focus.is_some()
    }

    /// Index of the child holding focus.
    pub fn focused(&self) -> Option<usize> {
        self.focus
    }

    pub fn refresh(&self, cx: &mut Context<'_, '_>, id: ElementId) -> bool {
        (0..self.children.len())
            .any(|i| self.children[i].refresh(&mut cx.sub(self.child_bounds(i)), id))
    }
}
