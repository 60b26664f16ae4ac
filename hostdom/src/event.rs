/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press event, targeted at focused element
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Pointer pressed on an element (fires before click)
    PointerDown {
        target: Option<String>,
        button: MouseButton,
    },
    /// Pointer click on an element
    Click {
        target: Option<String>,
        button: MouseButton,
    },
    /// Element gained focus
    Focus { target: String },
    /// Element lost focus. `related` is the element receiving focus, if any.
    Blur {
        target: String,
        related: Option<String>,
    },
}

impl Event {
    /// Key press with no modifiers.
    pub fn key(target: impl Into<String>, key: Key) -> Self {
        Self::Key {
            target: Some(target.into()),
            key,
            modifiers: Modifiers::new(),
        }
    }

    /// Primary-button pointer down.
    pub fn pointer_down(target: impl Into<String>) -> Self {
        Self::PointerDown {
            target: Some(target.into()),
            button: MouseButton::Left,
        }
    }

    /// Primary-button click.
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: Some(target.into()),
            button: MouseButton::Left,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
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

/// Key modifiers
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

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}
