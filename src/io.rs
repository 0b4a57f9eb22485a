//! The view’s event loop.
//!
//! Work posted from any thread lands in a FIFO queue that only the UI thread drains, via
//! [`View::poll`](crate::View::poll). Tasks run to completion in submission order.

use crate::rect::Rect;
use crate::view::View;
use core::fmt;
use crossbeam::channel::{self, Receiver, Sender, TryRecvError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::trace;

/// A unit of work for the UI thread.
pub type Task = Box<dyn FnOnce(&mut View) + Send>;

/// A handle for posting work onto a view’s event loop. Cheap to clone and usable from any thread.
#[derive(Clone)]
pub struct Poster {
    send: Sender<Task>,
    stopped: Arc<AtomicBool>,
}

impl fmt::Debug for Poster {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Poster")
            .field("pending", &self.send.len())
            .field("stopped", &self.is_stopped())
            .finish()
    }
}

impl Poster {
    /// Enqueues a task. Tasks posted after the loop stopped are dropped without running.
    pub fn post<F: 'static + FnOnce(&mut View) + Send>(&self, task: F) {
        if self.is_stopped() {
            trace!("event loop stopped; dropping posted task");
            return;
        }
        if self.send.send(Box::new(task)).is_err() {
            trace!("event loop gone; dropping posted task");
        }
    }

    /// Requests a repaint of the whole view.
    pub fn refresh(&self) {
        self.post(|view| view.host().refresh());
    }

    /// Requests a repaint of a region of the view.
    pub fn refresh_rect(&self, area: Rect) {
        self.post(move |view| view.host().refresh_rect(area));
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }
}

/// The receiving end, owned by the view.
pub(crate) struct EventLoop {
    recv: Receiver<Task>,
    poster: Poster,
}

impl EventLoop {
    pub fn new() -> EventLoop {
        let (send, recv) = channel::unbounded();
        EventLoop {
            recv,
            poster: Poster {
                send,
                stopped: Arc::new(AtomicBool::new(false)),
            },
        }
    }

    pub fn poster(&self) -> &Poster {
        &self.poster
    }

    /// Returns the next pending task without blocking.
    pub fn next_task(&self) -> Option<Task> {
        if self.poster.is_stopped() {
            return None;
        }
        match self.recv.try_recv() {
            Ok(task) => Some(task),
            Err(TryRecvError::Empty) => None,
            // unreachable while we hold a sender ourselves
            Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Stops the loop and drops everything still queued.
    pub fn stop(&self) {
        self.poster.stopped.store(true, Ordering::Release);
        let dropped = self.recv.try_iter().count();
        if dropped > 0 {
            trace!(dropped, "event loop stopped with pending tasks");
        }
    }
}
