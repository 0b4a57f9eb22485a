//! Test helpers: a context factory and a configurable element that records what it receives.

use crate::canvas::Canvas;
use crate::context::{BasicContext, Context};
use crate::element::{Element, ElementId, ViewLimits, FULL_LIMITS};
use crate::events::{CursorTracking, FocusRequest, KeyInfo, MouseButton, TextInfo};
use crate::host::HeadlessView;
use crate::io::EventLoop;
use crate::rect::{Extent, Point, Rect};
use crate::view::ViewState;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use tiny_skia::Pixmap;

/// Runs `f` with a context over a scratch surface covering `bounds`.
pub fn with_context<R>(bounds: Rect, f: impl FnOnce(&mut Context<'_, '_>) -> R) -> R {
    let host = Arc::new(HeadlessView::new(Extent::new(bounds.right, bounds.bottom)));
    let io = EventLoop::new();
    let mut state = ViewState::new(host, io.poster().clone());
    let width = bounds.right.max(1.).ceil() as u32;
    let height = bounds.bottom.max(1.).ceil() as u32;
    let mut pixmap = Pixmap::new(width, height).unwrap();
    let mut canvas = Canvas::new(pixmap.as_mut());
    let mut cx = Context::new(&mut state, &mut canvas, bounds);
    f(&mut cx)
}

#[derive(Debug, Default)]
pub struct Record {
    pub clicks: usize,
    pub drags: usize,
    pub draws: usize,
    pub layouts: Vec<Rect>,
    pub cursors: Vec<CursorTracking>,
    pub scrolls: usize,
    pub keys: usize,
    pub texts: Vec<char>,
    pub focused: bool,
}

/// Shared view of what a [`Probe`] has received.
#[derive(Debug, Clone, Default)]
pub struct ProbeLog(Rc<RefCell<Record>>);

impl ProbeLog {
    pub fn clicks(&self) -> usize {
        self.0.borrow().clicks
    }
    pub fn drags(&self) -> usize {
        self.0.borrow().drags
    }
    pub fn draws(&self) -> usize {
        self.0.borrow().draws
    }
    pub fn layouts(&self) -> Vec<Rect> {
        self.0.borrow().layouts.clone()
    }
    pub fn cursors(&self) -> Vec<CursorTracking> {
        self.0.borrow().cursors.clone()
    }
    pub fn scrolls(&self) -> usize {
        self.0.borrow().scrolls
    }
    pub fn keys(&self) -> usize {
        self.0.borrow().keys
    }
    pub fn texts(&self) -> Vec<char> {
        self.0.borrow().texts.clone()
    }
    pub fn focused(&self) -> bool {
        self.0.borrow().focused
    }
}

/// A leaf element with configurable limits and behavior.
#[derive(Debug)]
pub struct Probe {
    limits: ViewLimits,
    handles: bool,
    focusable: bool,
    id: Option<ElementId>,
    log: ProbeLog,
}

impl Probe {
    pub fn new() -> Probe {
        Probe {
            limits: FULL_LIMITS,
            handles: false,
            focusable: false,
            id: None,
            log: ProbeLog::default(),
        }
    }

    pub fn limits(mut self, limits: ViewLimits) -> Probe {
        self.limits = limits;
        self
    }

    /// Reports pointer, key and text events as handled.
    pub fn handles_clicks(mut self) -> Probe {
        self.handles = true;
        self
    }

    pub fn focusable(mut self) -> Probe {
        self.focusable = true;
        self
    }

    pub fn with_id(mut self, id: ElementId) -> Probe {
        self.id = Some(id);
        self
    }

    pub fn logged(self) -> (Probe, ProbeLog) {
        let log = self.log.clone();
        (self, log)
    }
}

impl Element for Probe {
    fn limits(&self, _: &BasicContext<'_, '_>) -> ViewLimits {
        self.limits
    }

    fn layout(&mut self, cx: &mut Context<'_, '_>) {
        self.log.0.borrow_mut().layouts.push(cx.bounds);
    }

    fn draw(&self, _: &mut Context<'_, '_>) {
        self.log.0.borrow_mut().draws += 1;
    }

    fn click(&mut self, _: &mut Context<'_, '_>, _: MouseButton) -> bool {
        self.log.0.borrow_mut().clicks += 1;
        self.handles
    }

    fn drag(&mut self, _: &mut Context<'_, '_>, _: MouseButton) {
        self.log.0.borrow_mut().drags += 1;
    }

    fn cursor(&mut self, _: &mut Context<'_, '_>, _: Point, status: CursorTracking) -> bool {
        self.log.0.borrow_mut().cursors.push(status);
        self.handles
    }

    fn scroll(&mut self, _: &mut Context<'_, '_>, _: Point, _: Point) -> bool {
        self.log.0.borrow_mut().scrolls += 1;
        self.handles
    }

    fn key(&mut self, _: &mut Context<'_, '_>, _: &KeyInfo) -> bool {
        self.log.0.borrow_mut().keys += 1;
        false
    }

    fn text(&mut self, _: &mut Context<'_, '_>, info: &TextInfo) -> bool {
        self.log.0.borrow_mut().texts.push(info.codepoint);
        self.handles
    }

    fn wants_focus(&self) -> bool {
        self.focusable
    }

    fn focus(&mut self, request: FocusRequest) {
        match request {
            FocusRequest::BeginFocus => self.log.0.borrow_mut().focused = true,
            FocusRequest::EndFocus => self.log.0.borrow_mut().focused = false,
            FocusRequest::WantsFocus => {}
        }
    }

    fn has_focus(&self) -> bool {
        self.log.0.borrow().focused
    }

    fn id(&self) -> Option<ElementId> {
        self.id
    }
}
