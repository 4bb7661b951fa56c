//! Input events fed to the game by the host

use glam::Vec2;

use crate::timers::TimerTag;

/// Pointer buttons, numbered the way desktop backends report them
pub mod buttons {
    pub const LEFT: u8 = 1;
    pub const MIDDLE: u8 = 2;
    pub const RIGHT: u8 = 3;
    pub const WHEEL_UP: u8 = 4;
    pub const WHEEL_DOWN: u8 = 5;
}

/// Keys the game reacts to; everything else is `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Backspace,
    Space,
    Other,
}

/// A discrete input event
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown { pos: Vec2, button: u8 },
    PointerUp { pos: Vec2 },
    PointerMove { pos: Vec2 },
    /// `ch` carries the printable character produced by the key, if any
    KeyDown { key: Key, ch: Option<char> },
    /// A deferred event scheduled through the timer queue came due
    Timer(TimerTag),
    Quit,
}

impl InputEvent {
    pub fn click(x: f32, y: f32) -> Self {
        InputEvent::PointerDown {
            pos: Vec2::new(x, y),
            button: buttons::LEFT,
        }
    }

    pub fn key(key: Key) -> Self {
        InputEvent::KeyDown { key, ch: None }
    }

    /// Key press that types a character
    pub fn typed(ch: char) -> Self {
        let key = match ch {
            ' ' => Key::Space,
            _ => Key::Other,
        };
        InputEvent::KeyDown { key, ch: Some(ch) }
    }
}
