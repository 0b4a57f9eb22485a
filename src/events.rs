//! Decoded input events.
//!
//! The platform layer is responsible for turning raw window-system events into these structs;
//! the view and its elements only ever see the decoded form.

use crate::rect::Point;
use bitflags::bitflags;

bitflags! {
    /// Modifier keys held during an input event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u16 {
        const SHIFT   = 0x0001;
        const CONTROL = 0x0002;
        const ALT     = 0x0004;
        /// Command on macOS, the Windows key elsewhere.
        const SUPER   = 0x0008;
    }
}

/// Which mouse button an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseWhich {
    #[default]
    Left,
    Middle,
    Right,
}

/// A mouse button press, release or drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseButton {
    /// True while the button is held.
    pub down: bool,
    /// Number of consecutive clicks (2 for a double click).
    pub num_clicks: u32,
    pub which: MouseWhich,
    pub modifiers: Modifiers,
    /// Pointer location in view coordinates.
    pub pos: Point,
}

impl Default for MouseButton {
    fn default() -> Self {
        MouseButton {
            down: false,
            num_clicks: 0,
            which: MouseWhich::default(),
            modifiers: Modifiers::empty(),
            pos: Point::new(0., 0.),
        }
    }
}

impl MouseButton {
    /// A single left-button press at `pos`.
    pub fn left_down(pos: Point) -> MouseButton {
        MouseButton {
            down: true,
            num_clicks: 1,
            pos,
            ..MouseButton::default()
        }
    }

    /// The matching release for this event.
    pub fn released(self) -> MouseButton {
        MouseButton {
            down: false,
            ..self
        }
    }
}

/// Cursor tracking phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorTracking {
    /// The cursor is entering the view.
    Entering,
    /// The cursor is hovering over the view.
    Hovering,
    /// The cursor is leaving the view.
    Leaving,
}

/// Focus requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusRequest {
    WantsFocus,
    BeginFocus,
    EndFocus,
}

/// Cursor icons the host can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorType {
    #[default]
    Arrow,
    IBeam,
    CrossHair,
    Hand,
    HResize,
    VResize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Unknown,
    Release,
    Press,
    Repeat,
}

/// A key press, release or repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInfo {
    pub key: KeyCode,
    pub action: KeyAction,
    pub modifiers: Modifiers,
}

/// A typed character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextInfo {
    pub codepoint: char,
    pub modifiers: Modifiers,
}

/// Keyboard layout-independent identifiers for keyboard keys.
///
/// Printable keys use their US-layout ASCII value; the numbering follows GLFW.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Unknown = -1,

    Space = 32,
    Apostrophe = 39,
    Comma = 44,
    Minus = 45,
    Period = 46,
    Slash = 47,
    N0 = 48,
    N1 = 49,
    N2 = 50,
    N3 = 51,
    N4 = 52,
    N5 = 53,
    N6 = 54,
    N7 = 55,
    N8 = 56,
    N9 = 57,
    Semicolon = 59,
    Equal = 61,
    A = 65,
    B = 66,
    C = 67,
    D = 68,
    E = 69,
    F = 70,
    G = 71,
    H = 72,
    I = 73,
    J = 74,
    K = 75,
    L = 76,
    M = 77,
    N = 78,
    O = 79,
    P = 80,
    Q = 81,
    R = 82,
    S = 83,
    T = 84,
    U = 85,
    V = 86,
    W = 87,
    X = 88,
    Y = 89,
    Z = 90,
    LeftBracket = 91,
    Backslash = 92,
    RightBracket = 93,
    GraveAccent = 96,
    World1 = 161,
    World2 = 162,

    Escape = 256,
    Enter = 257,
    Tab = 258,
    Backspace = 259,
    Insert = 260,
    Delete = 261,
    Right = 262,
    Left = 263,
    Down = 264,
    Up = 265,
    PageUp = 266,
    PageDown = 267,
    Home = 268,
    End = 269,
    CapsLock = 280,
    ScrollLock = 281,
    NumLock = 282,
    PrintScreen = 283,
    Pause = 284,
    F1 = 290,
    F2 = 291,
    F3 = 292,
    F4 = 293,
    F5 = 294,
    F6 = 295,
    F7 = 296,
    F8 = 297,
    F9 = 298,
    F10 = 299,
    F11 = 300,
    F12 = 301,
    F13 = 302,
    F14 = 303,
    F15 = 304,
    F16 = 305,
    F17 = 306,
    F18 = 307,
    F19 = 308,
    F20 = 309,
    F21 = 310,
    F22 = 311,
    F23 = 312,
    F24 = 313,
    F25 = 314,
    Kp0 = 320,
    Kp1 = 321,
    Kp2 = 322,
    Kp3 = 323,
    Kp4 = 324,
    Kp5 = 325,
    Kp6 = 326,
    Kp7 = 327,
    Kp8 = 328,
    Kp9 = 329,
    KpDecimal = 330,
    KpDivide = 331,
    KpMultiply = 332,
    KpSubtract = 333,
    KpAdd = 334,
    KpEnter = 335,
    KpEqual = 336,
    LeftShift = 340,
    LeftControl = 341,
    LeftAlt = 342,
    LeftSuper = 343,
    RightShift = 344,
    RightControl = 345,
    RightAlt = 346,
    RightSuper = 347,
    Menu = 348,
}

impl KeyCode {
    /// Returns true for the modifier keys themselves.
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            KeyCode::LeftShift
                | KeyCode::LeftControl
                | KeyCode::LeftAlt
                | KeyCode::LeftSuper
                | KeyCode::RightShift
                | KeyCode::RightControl
                | KeyCode::RightAlt
                | KeyCode::RightSuper
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_button_is_released_at_origin() {
        let btn = MouseButton::default();
        assert!(!btn.down);
        assert_eq!(btn.num_clicks, 0);
        assert_eq!(btn.pos, Point::new(0., 0.));
        assert!(btn.modifiers.is_empty());
    }

    #[test]
    fn press_and_release_share_position() {
        let press = MouseButton::left_down(Point::new(3., 4.));
        assert!(press.down);
        assert_eq!(press.num_clicks, 1);
        let release = press.released();
        assert!(!release.down);
        assert_eq!(release.pos, press.pos);
    }
}
