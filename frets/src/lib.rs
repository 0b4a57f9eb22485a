//! A guitar fretboard drawn with the trellis canvas.

use trellis::canvas::LinearGradient;
use trellis::color::colors;
use trellis::element::FULL_EXTENT;
use trellis::{BasicContext, Canvas, Circle, Color, Context, Element, Point, Rect, ViewLimits};

/// Share of the element’s width taken by the scale, from the nut to the 12th fret and past it.
const SCALE_LENGTH: f32 = 0.8;
const FRET_WIDTH: f32 = 3.;
const MARKER_RADIUS: f32 = 3.;
const BRIDGE_WIDTH: f32 = 8.;

/// Fret positions that get an inlay, and whether it is a double one.
fn marker(fret: i32) -> Option<bool> {
    match fret {
        0 | 12 => Some(true),
        3 | 5 | 7 | 9 => Some(false),
        _ => None,
    }
}

fn fret_paint(bounds: Rect) -> LinearGradient {
    let shine = Color::rgba8(255, 255, 255, 150);
    LinearGradient::new(
        Point::new(bounds.left, bounds.top),
        Point::new(bounds.right, bounds.top),
    )
    .stop(0., shine)
    .stop(1., shine)
}

fn draw_fret(bounds: Rect, canvas: &mut Canvas<'_>) {
    let mut canvas = canvas.new_state();
    canvas.begin_path();
    canvas.rect(bounds);
    canvas.fill_style(fret_paint(bounds));
    canvas.fill();
}

fn draw_marker(c: Circle, canvas: &mut Canvas<'_>) {
    canvas.begin_path();
    canvas.circle(c);
    canvas.fill_style(colors::ANTIQUE_WHITE.opacity(0.4));
    canvas.fill();
}

fn draw_bridge(bounds: Rect, canvas: &mut Canvas<'_>) {
    let mut canvas = canvas.new_state();
    canvas.begin_path();
    canvas.round_rect(bounds, bounds.width() / 3.);
    canvas.fill_style(fret_paint(bounds));
    canvas.fill();
}

/// Draws the frets from just behind the nut (fret -1) up to the 12th, spaced by the
/// equal-tempered rule: fret `i` sits at `width / 2^(i/12)` from the left edge.
fn draw_frets(bounds: Rect, canvas: &mut Canvas<'_>) {
    let w = bounds.width();
    let y = bounds.top + 5.;
    let mut x = 0.;
    for i in -1..13 {
        let prev = x;
        x = bounds.left + w / 2_f32.powf(i as f32 / 12.);
        draw_fret(Rect::new(x, bounds.top, x + FRET_WIDTH, bounds.bottom), canvas);

        if let Some(double) = marker(i) {
            let pos = FRET_WIDTH / 2. + x + (prev - x) / 2.;
            draw_marker(Circle::new(pos, y, MARKER_RADIUS), canvas);
            if double {
                draw_marker(Circle::new(pos, y + 15., MARKER_RADIUS), canvas);
            }
        }
    }
}

/// A fretboard with inlays and a bridge, scaled to its bounds.
#[derive(Debug, Default)]
pub struct Fretboard;

impl Fretboard {
    pub fn new() -> Fretboard {
        Fretboard
    }

    /// Where the frets are drawn within `bounds`.
    pub fn frets_bounds(bounds: Rect) -> Rect {
        let w = bounds.width() * SCALE_LENGTH;
        let h = (w * 0.15).min(bounds.height());
        Rect::new(0., 0., w, h).center_in(bounds)
    }

    /// Where the bridge is drawn within `bounds`: a thin bar just left of the frets.
    pub fn bridge_bounds(bounds: Rect) -> Rect {
        let w = bounds.width() * SCALE_LENGTH;
        let h = (w * 0.2).min(bounds.height());
        Rect::new(0., 0., w, h)
            .center_in(bounds)
            .with_width(BRIDGE_WIDTH)
            .move_by(-BRIDGE_WIDTH, 0.)
    }
}

impl Element for Fretboard {
    fn limits(&self, _: &BasicContext<'_, '_>) -> ViewLimits {
        ViewLimits::new(Point::new(300., 60.), Point::new(FULL_EXTENT, FULL_EXTENT))
    }

    fn draw(&self, cx: &mut Context<'_, '_>) {
        let bounds = cx.bounds;
        draw_frets(Fretboard::frets_bounds(bounds), cx.canvas);
        draw_bridge(Fretboard::bridge_bounds(bounds), cx.canvas);
    }
}
