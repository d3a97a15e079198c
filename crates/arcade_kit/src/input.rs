//! Keyboard input surface
//!
//! Keys are delivered to the application as press/release events; held-key
//! behavior (thrust, rotation) is the application's state machine.

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// S key
    S,
    /// W key
    W,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

impl KeyCode {
    /// Translate an SDL keycode; keys outside the surface map to `None`
    pub(crate) fn from_sdl(key: sdl2::keyboard::Keycode) -> Option<Self> {
        use sdl2::keyboard::Keycode as Sdl;
        Some(match key {
            Sdl::A => Self::A,
            Sdl::D => Self::D,
            Sdl::S => Self::S,
            Sdl::W => Self::W,
            Sdl::Space => Self::Space,
            Sdl::Return => Self::Enter,
            Sdl::Escape => Self::Escape,
            Sdl::Up => Self::Up,
            Sdl::Down => Self::Down,
            Sdl::Left => Self::Left,
            Sdl::Right => Self::Right,
            _ => return None,
        })
    }
}
