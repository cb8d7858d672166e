//! Key and mouse-button identifiers.

/// Every keyboard key and mouse button the mapper can track.
///
/// The discriminant doubles as the index into the mapper's pressed-state
/// set, so variants must stay contiguous from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Key {
    LeftMouse,
    RightMouse,
    MiddleMouse,
    Backspace,
    Tab,
    Enter,
    Shift,
    Control,
    Alt,
    Pause,
    CapsLock,
    Escape,
    Space,
    PageUp,
    PageDown,
    End,
    Home,
    Left,
    Up,
    Right,
    Down,
    Insert,
    Delete,
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,
    NumpadMultiply,
    NumpadAdd,
    NumpadSubtract,
    NumpadDecimal,
    NumpadDivide,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    NumLock,
    ScrollLock,
    Semicolon,
    Equals,
    Minus,
    Comma,
    Period,
    Slash,
    Backtick,
    OpenBracket,
    Backslash,
    CloseBracket,
    Quote,
}

impl Key {
    /// Number of distinct keys; sizes the pressed-state set.
    pub const COUNT: usize = Key::Quote as usize + 1;

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}
