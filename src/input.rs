//! Platform-neutral input events.
//!
//! The window layer translates its native events into these, so the session
//! logic can be driven (and tested) without a window.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Cycles the visualization mode.
    Space,
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Away from the user; zooms in.
    Up,
    /// Toward the user; zooms out.
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    PointerDown {
        button: PointerButton,
        x: i32,
        y: i32,
    },
    PointerUp {
        button: PointerButton,
    },
    PointerMove {
        x: i32,
        y: i32,
    },
    Scroll(ScrollDirection),
    Resize {
        width: u32,
        height: u32,
    },
}
