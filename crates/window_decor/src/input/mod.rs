//! Decoration input types
//!
//! Pointer buttons, resize edge masks and the cursor shapes derived from them.
//! Coordinates are always decoration-local logical pixels.

pub mod edges;
pub mod cursor;

pub use cursor::CursorShape;
pub use edges::{edges_at, ResizeEdges};

/// Pointer button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary (usually left) button
    Left,
    /// Secondary (usually right) button
    Right,
    /// Middle button
    Middle,
    /// Any other button, by its evdev code
    Other(u32),
}

impl PointerButton {
    /// Map a Linux evdev button code (`BTN_LEFT` = 0x110, ...)
    pub const fn from_evdev(code: u32) -> Self {
        match code {
            0x110 => Self::Left,
            0x111 => Self::Right,
            0x112 => Self::Middle,
            other => Self::Other(other),
        }
    }
}
