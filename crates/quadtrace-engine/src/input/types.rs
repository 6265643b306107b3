/// Keyboard key identifier.
///
/// Covers letters, the keys a fly camera binds, and modifiers held as keys.
/// Left and right modifiers share one variant. Anything else arrives as
/// `Key::Other` carrying the platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Shift,
    Control,
    Alt,
    Meta,

    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    Other(u32),
}

impl Key {
    /// True for keys that double as modifiers.
    pub fn is_modifier(self) -> bool {
        matches!(self, Key::Shift | Key::Control | Key::Alt | Key::Meta)
    }
}

/// What happened to a key.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyAction {
    Pressed,
    /// Auto-repeat while the key is held.
    Repeat,
    Released,
}

impl KeyAction {
    /// True for `Pressed` and `Repeat`.
    #[inline]
    pub fn is_down(self) -> bool {
        matches!(self, KeyAction::Pressed | KeyAction::Repeat)
    }
}

/// Modifier state at the time of an event.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// One key event, stored per key as its latest state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyPress {
    pub key: Key,
    /// Platform scancode, `0` when the platform has none.
    pub code: u32,
    pub action: KeyAction,
    pub modifiers: Modifiers,
}

/// Absolute pointer position in logical pixels, origin top-left.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Window-system input, already stripped of platform types.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),
    Key(KeyPress),
    PointerMoved(PointerMoveEvent),
    /// Pointer left the window surface.
    PointerLeft,
    Focused(bool),
}
