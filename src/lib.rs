//! A retained-mode element tree hosted in a platform view.
//!
//! A [`View`] owns a tree of [`Element`]s rooted in [`Layers`]. The platform forwards paints and
//! input to the view, which lays the tree out, draws it onto a [`tiny_skia`] surface and routes
//! events to the elements under the pointer or holding focus. Work can be posted onto the view
//! from other threads through a [`Poster`].

pub mod basic;
pub mod canvas;
mod circle;
pub mod color;
mod composite;
mod context;
pub mod element;
mod error;
pub mod events;
mod host;
mod io;
mod layers;
mod rect;
pub mod tile;
mod view;

#[cfg(test)]
mod testing;

pub use canvas::Canvas;
pub use circle::Circle;
pub use color::Color;
pub use context::{BasicContext, Context};
pub use element::{Element, ElementId, ViewLimits};
pub use error::{Error, Result};
pub use host::{BaseView, HeadlessView, Invalidation, Window};
pub use io::{Poster, Task};
pub use layers::Layers;
pub use rect::{Extent, Point, Rect};
pub use tile::Tile;
pub use view::{UndoRedoTask, View, ViewState};
