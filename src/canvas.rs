//! The drawing context.
//!
//! A [`Canvas`] is a stateful 2D context over a `tiny-skia` pixmap, modeled after the usual
//! path-then-paint APIs: build a path with `begin_path`, `rect`, `circle` and friends, then
//! consume it with `fill`, `stroke` or `clip`. Paint, line width, clip and transform live in a
//! state that can be saved and restored, either manually or through the guard returned by
//! [`Canvas::new_state`].

use crate::circle::Circle;
use crate::color::Color;
use crate::rect::{Point, Rect};
use core::fmt;
use core::ops::{Deref, DerefMut};
use tiny_skia::{
    FillRule, GradientStop, Mask, Paint, Path, PathBuilder, PixmapMut, SpreadMode, Stroke,
    Transform,
};
use tracing::{trace, warn};

/// Cubic bezier control point distance for quarter-circle arcs.
const KAPPA: f32 = 0.552_284_8;

/// A linear gradient in user coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    /// `(offset, color)` stops; offsets range from 0 to 1.
    pub stops: Vec<(f32, Color)>,
}

impl LinearGradient {
    pub fn new(start: Point, end: Point) -> LinearGradient {
        LinearGradient {
            start,
            end,
            stops: Vec::new(),
        }
    }

    /// Adds a color stop.
    pub fn stop(mut self, offset: f32, color: Color) -> LinearGradient {
        self.stops.push((offset, color));
        self
    }
}

/// A fill or stroke paint.
#[derive(Debug, Clone, PartialEq)]
pub enum Style {
    Solid(Color),
    Linear(LinearGradient),
}

impl From<Color> for Style {
    fn from(color: Color) -> Style {
        Style::Solid(color)
    }
}

impl From<LinearGradient> for Style {
    fn from(gradient: LinearGradient) -> Style {
        Style::Linear(gradient)
    }
}

impl Style {
    fn to_paint(&self) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.anti_alias = true;
        match self {
            Style::Solid(color) => paint.set_color((*color).into()),
            Style::Linear(gradient) => {
                let stops = gradient
                    .stops
                    .iter()
                    .map(|(offset, color)| GradientStop::new(*offset, (*color).into()))
                    .collect();
                match tiny_skia::LinearGradient::new(
                    tiny_skia::Point::from_xy(gradient.start.x, gradient.start.y),
                    tiny_skia::Point::from_xy(gradient.end.x, gradient.end.y),
                    stops,
                    SpreadMode::Pad,
                    Transform::identity(),
                ) {
                    Some(shader) => paint.shader = shader,
                    None => {
                        // degenerate gradient: fewer than two stops or start == end
                        let color = gradient.stops.first().map_or(Color::default(), |s| s.1);
                        trace!(?gradient, "degenerate gradient; using first stop");
                        paint.set_color(color.into());
                    }
                }
            }
        }
        paint
    }
}

#[derive(Clone)]
struct State {
    fill: Style,
    stroke: Style,
    line_width: f32,
    transform: Transform,
    clip: Option<Mask>,
}

impl Default for State {
    fn default() -> Self {
        State {
            fill: Style::Solid(Color::rgb(0., 0., 0.)),
            stroke: Style::Solid(Color::rgb(0., 0., 0.)),
            line_width: 1.,
            transform: Transform::identity(),
            clip: None,
        }
    }
}

/// A 2D drawing context.
pub struct Canvas<'s> {
    surface: PixmapMut<'s>,
    path: PathBuilder,
    state: State,
    stack: Vec<State>,
}

impl<'s> fmt::Debug for Canvas<'s> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.surface.width())
            .field("height", &self.surface.height())
            .field("depth", &self.stack.len())
            .finish()
    }
}

impl<'s> Canvas<'s> {
    /// Creates a canvas that draws into the given surface.
    pub fn new(surface: PixmapMut<'s>) -> Canvas<'s> {
        Canvas {
            surface,
            path: PathBuilder::new(),
            state: State::default(),
            stack: Vec::new(),
        }
    }

    /// Surface size in pixels.
    pub fn surface_size(&self) -> (u32, u32) {
        (self.surface.width(), self.surface.height())
    }

    // paths

    /// Discards the current path.
    pub fn begin_path(&mut self) {
        self.path = PathBuilder::new();
    }

    pub fn close_path(&mut self) {
        self.path.close();
    }

    pub fn move_to(&mut self, p: Point) {
        self.path.move_to(p.x, p.y);
    }

    pub fn line_to(&mut self, p: Point) {
        self.path.line_to(p.x, p.y);
    }

    /// Adds a rectangle to the current path.
    pub fn rect(&mut self, r: Rect) {
        match r.to_skia() {
            Some(rect) => self.path.push_rect(rect),
            None => trace!(?r, "skipping degenerate rect"),
        }
    }

    /// Adds a rectangle with rounded corners to the current path.
    pub fn round_rect(&mut self, r: Rect, radius: f32) {
        let radius = radius.min(r.width() / 2.).min(r.height() / 2.).max(0.);
        if radius == 0. {
            self.rect(r);
            return;
        }
        let k = radius * KAPPA;
        let (l, t, rt, b) = (r.left, r.top, r.right, r.bottom);
        let p = &mut self.path;
        p.move_to(l + radius, t);
        p.line_to(rt - radius, t);
        p.cubic_to(rt - radius + k, t, rt, t + radius - k, rt, t + radius);
        p.line_to(rt, b - radius);
        p.cubic_to(rt, b - radius + k, rt - radius + k, b, rt - radius, b);
        p.line_to(l + radius, b);
        p.cubic_to(l + radius - k, b, l, b - radius + k, l, b - radius);
        p.line_to(l, t + radius);
        p.cubic_to(l, t + radius - k, l + radius - k, t, l + radius, t);
        p.close();
    }

    /// Adds a circle to the current path.
    pub fn circle(&mut self, c: Circle) {
        if c.radius > 0. {
            self.path.push_circle(c.cx, c.cy, c.radius);
        }
    }

    fn take_path(&mut self) -> Option<Path> {
        std::mem::replace(&mut self.path, PathBuilder::new()).finish()
    }

    fn current_path(&self) -> Option<Path> {
        self.path.clone().finish()
    }

    // painting

    /// Fills the current path and discards it.
    pub fn fill(&mut self) {
        if let Some(path) = self.take_path() {
            self.fill_path(&path);
        }
    }

    /// Fills the current path and keeps it.
    pub fn fill_preserve(&mut self) {
        if let Some(path) = self.current_path() {
            self.fill_path(&path);
        }
    }

    /// Strokes the current path and discards it.
    pub fn stroke(&mut self) {
        if let Some(path) = self.take_path() {
            self.stroke_path(&path);
        }
    }

    /// Strokes the current path and keeps it.
    pub fn stroke_preserve(&mut self) {
        if let Some(path) = self.current_path() {
            self.stroke_path(&path);
        }
    }

    fn fill_path(&mut self, path: &Path) {
        let paint = self.state.fill.to_paint();
        self.surface.fill_path(
            path,
            &paint,
            FillRule::Winding,
            self.state.transform,
            self.state.clip.as_ref(),
        );
    }

    fn stroke_path(&mut self, path: &Path) {
        let paint = self.state.stroke.to_paint();
        let stroke = Stroke {
            width: self.state.line_width,
            ..Stroke::default()
        };
        self.surface.stroke_path(
            path,
            &paint,
            &stroke,
            self.state.transform,
            self.state.clip.as_ref(),
        );
    }

    /// Intersects the clip region with the current path and discards the path.
    pub fn clip(&mut self) {
        let path = match self.take_path() {
            Some(path) => path,
            None => {
                // clipping to nothing
                self.state.clip = Mask::new(self.surface.width(), self.surface.height());
                return;
            }
        };
        let transform = self.state.transform;
        if let Some(mask) = self.state.clip.as_mut() {
            mask.intersect_path(&path, FillRule::Winding, true, transform);
            return;
        }
        match Mask::new(self.surface.width(), self.surface.height()) {
            Some(mut mask) => {
                mask.fill_path(&path, FillRule::Winding, true, transform);
                self.state.clip = Some(mask);
            }
            None => warn!("could not allocate clip mask"),
        }
    }

    // state

    pub fn fill_style(&mut self, style: impl Into<Style>) {
        self.state.fill = style.into();
    }

    pub fn stroke_style(&mut self, style: impl Into<Style>) {
        self.state.stroke = style.into();
    }

    pub fn line_width(&mut self, width: f32) {
        self.state.line_width = width;
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.state.transform = self.state.transform.pre_translate(dx, dy);
    }

    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.state.transform = self.state.transform.pre_scale(sx, sy);
    }

    /// Rotates by `degrees` clockwise (the y-axis points down).
    pub fn rotate(&mut self, degrees: f32) {
        self.state.transform = self
            .state
            .transform
            .pre_concat(Transform::from_rotate(degrees));
    }

    /// Maps a point from user coordinates to device (pixel) coordinates.
    pub fn user_to_device(&self, p: Point) -> Point {
        let t = &self.state.transform;
        Point::new(
            t.sx * p.x + t.kx * p.y + t.tx,
            t.ky * p.x + t.sy * p.y + t.ty,
        )
    }

    /// Pushes a copy of the current drawing state.
    pub fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    /// Pops the drawing state saved by the matching [`Canvas::save`].
    pub fn restore(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => warn!("canvas restore without matching save"),
        }
    }

    /// Saves the drawing state and returns a guard that restores it when dropped.
    pub fn new_state(&mut self) -> CanvasState<'_, 's> {
        self.save();
        CanvasState { canvas: self }
    }
}

/// A saved canvas state; restores it on drop.
pub struct CanvasState<'c, 's> {
    canvas: &'c mut Canvas<'s>,
}

impl<'c, 's> Deref for CanvasState<'c, 's> {
    type Target = Canvas<'s>;
    fn deref(&self) -> &Canvas<'s> {
        self.canvas
    }
}

impl<'c, 's> DerefMut for CanvasState<'c, 's> {
    fn deref_mut(&mut self) -> &mut Canvas<'s> {
        self.canvas
    }
}

impl<'c, 's> Drop for CanvasState<'c, 's> {
    fn drop(&mut self) {
        self.canvas.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::colors;
    use tiny_skia::Pixmap;

    fn pixel(pixmap: &Pixmap, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let p = pixmap.pixel(x, y).expect("pixel out of bounds");
        (p.red(), p.green(), p.blue(), p.alpha())
    }

    #[test]
    fn fills_rect() {
        let mut pixmap = Pixmap::new(20, 20).unwrap();
        {
            let mut cnv = Canvas::new(pixmap.as_mut());
            cnv.begin_path();
            cnv.rect(Rect::new(0., 0., 10., 10.));
            cnv.fill_style(colors::WHITE);
            cnv.fill();
        }
        assert_eq!(pixel(&pixmap, 5, 5), (255, 255, 255, 255));
        assert_eq!(pixel(&pixmap, 15, 15), (0, 0, 0, 0));
    }

    #[test]
    fn fill_consumes_path() {
        let mut pixmap = Pixmap::new(20, 20).unwrap();
        {
            let mut cnv = Canvas::new(pixmap.as_mut());
            cnv.rect(Rect::new(0., 0., 10., 10.));
            cnv.fill_style(colors::WHITE);
            cnv.fill();
            cnv.fill_style(Color::rgb(1., 0., 0.));
            // nothing left to fill
            cnv.fill();
        }
        assert_eq!(pixel(&pixmap, 5, 5), (255, 255, 255, 255));
    }

    #[test]
    fn state_guard_restores_on_drop() {
        let mut pixmap = Pixmap::new(20, 20).unwrap();
        let mut cnv = Canvas::new(pixmap.as_mut());
        cnv.fill_style(colors::WHITE);
        {
            let mut state = cnv.new_state();
            state.translate(5., 5.);
            state.fill_style(colors::BLACK);
            assert_eq!(state.user_to_device(Point::new(0., 0.)), Point::new(5., 5.));
        }
        assert_eq!(cnv.user_to_device(Point::new(0., 0.)), Point::new(0., 0.));
        assert_eq!(cnv.state.fill, Style::Solid(colors::WHITE));
        assert!(cnv.stack.is_empty());
    }

    #[test]
    fn clip_limits_fill() {
        let mut pixmap = Pixmap::new(20, 20).unwrap();
        {
            let mut cnv = Canvas::new(pixmap.as_mut());
            {
                let mut state = cnv.new_state();
                state.rect(Rect::new(0., 0., 10., 20.));
                state.clip();
                state.rect(Rect::new(0., 0., 20., 20.));
                state.fill_style(colors::WHITE);
                state.fill();
            }
        }
        assert_eq!(pixel(&pixmap, 5, 5).3, 255);
        assert_eq!(pixel(&pixmap, 15, 5).3, 0);
    }

    #[test]
    fn degenerate_gradient_falls_back_to_first_stop() {
        let gradient = LinearGradient::new(Point::new(0., 0.), Point::new(0., 0.))
            .stop(0., colors::WHITE);
        let mut pixmap = Pixmap::new(4, 4).unwrap();
        {
            let mut cnv = Canvas::new(pixmap.as_mut());
            cnv.rect(Rect::new(0., 0., 4., 4.));
            cnv.fill_style(gradient);
            cnv.fill();
        }
        assert_eq!(pixel(&pixmap, 1, 1), (255, 255, 255, 255));
    }
}
