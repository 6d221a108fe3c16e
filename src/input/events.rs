//! Backend-neutral input event types.

/// Generic key representation.
///
/// Backend implementations map their native key codes to these values so the
/// input state machine never sees protocol-specific keysyms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Printable character key (letters keep their case, digits select modes)
    Char(char),
    /// Escape key
    Escape,
    /// F10 function key (toggle help)
    F10,
    /// F12 function key (toggle status bar)
    F12,
    /// Unmapped or unrecognized key
    Unknown,
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (draws)
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}
