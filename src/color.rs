//! Colors.

/// An RGBA color with straight (non-premultiplied) alpha; components range from 0 to 1.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Color {
        Color { r, g, b, a: 1. }
    }

    /// Creates a color from 8-bit components.
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color {
            r: f32::from(r) / 255.,
            g: f32::from(g) / 255.,
            b: f32::from(b) / 255.,
            a: f32::from(a) / 255.,
        }
    }

    /// Parses `#rrggbb` or `#rrggbbaa` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Color> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Color::rgba8(byte(0)?, byte(2)?, byte(4)?, 255)),
            8 => Some(Color::rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Returns this color with the given alpha.
    pub fn opacity(self, alpha: f32) -> Color {
        Color { a: alpha, ..self }
    }

    /// Returns this color with the RGB components scaled by `amount`.
    pub fn level(self, amount: f32) -> Color {
        Color {
            r: self.r * amount,
            g: self.g * amount,
            b: self.b * amount,
            a: self.a,
        }
    }
}

impl From<Color> for tiny_skia::Color {
    fn from(color: Color) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba(
            color.r.clamp(0., 1.),
            color.g.clamp(0., 1.),
            color.b.clamp(0., 1.),
            color.a.clamp(0., 1.),
        )
        .unwrap_or(tiny_skia::Color::BLACK)
    }
}

/// Named colors.
pub mod colors {
    use super::Color;

    pub const BLACK: Color = Color::rgb(0., 0., 0.);
    pub const WHITE: Color = Color::rgb(1., 1., 1.);
    pub const TRANSPARENT: Color = Color::rgba(0., 0., 0., 0.);
    pub const ANTIQUE_WHITE: Color = Color::rgb(250. / 255., 235. / 255., 215. / 255.);
    pub const GOLD: Color = Color::rgb(1., 215. / 255., 0.);
    pub const SADDLE_BROWN: Color = Color::rgb(139. / 255., 69. / 255., 19. / 255.);
    pub const DIM_GRAY: Color = Color::rgb(105. / 255., 105. / 255., 105. / 255.);
    pub const GRAY_10: Color = Color::rgb(0.1, 0.1, 0.1);
}
