//! Input types fed into widgets by the host event loop.

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Simplified key representation; only keys the toolkit reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

// Conversion from crossterm types for terminal-backed hosts.
impl TryFrom<crossterm::event::KeyCode> for Key {
    type Error = ();

    fn try_from(code: crossterm::event::KeyCode) -> Result<Self, ()> {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Ok(Key::Char(c)),
            KeyCode::Enter => Ok(Key::Enter),
            KeyCode::Esc => Ok(Key::Escape),
            KeyCode::Up => Ok(Key::Up),
            KeyCode::Down => Ok(Key::Down),
            KeyCode::Left => Ok(Key::Left),
            KeyCode::Right => Ok(Key::Right),
            KeyCode::Home => Ok(Key::Home),
            KeyCode::End => Ok(Key::End),
            KeyCode::PageUp => Ok(Key::PageUp),
            KeyCode::PageDown => Ok(Key::PageDown),
            _ => Err(()),
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
