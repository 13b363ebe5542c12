#![forbid(unsafe_code)]

//! Keyboard input for the search field.
//!
//! The web host forwards the DOM `key`, `code`, and legacy `keyCode` of each
//! `keydown`. They are normalized here into a [`KeyCode`] so the page logic
//! only has to ask whether a key submits the search.

/// Legacy DOM `keyCode` for Enter.
pub const LEGACY_ENTER_KEY_CODE: u32 = 13;

/// Normalized key code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    Unidentified { key: Box<str>, code: Box<str> },
}

/// One `keydown` as seen by the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub code: KeyCode,
    /// True while an IME composition session is open.
    pub composing: bool,
}

impl KeyInput {
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            composing: false,
        }
    }

    /// Build from the raw DOM fields of a `KeyboardEvent`.
    #[must_use]
    pub fn from_dom(dom_key: &str, dom_code: &str, legacy_key_code: u32, composing: bool) -> Self {
        Self {
            code: normalize_dom_key(dom_key, dom_code, legacy_key_code),
            composing,
        }
    }

    /// Enter outside of an IME composition submits the search.
    #[must_use]
    pub fn submits(&self) -> bool {
        !self.composing && self.code == KeyCode::Enter
    }
}

/// Deterministic normalization of DOM key/code strings into a [`KeyCode`].
#[must_use]
pub fn normalize_dom_key(dom_key: &str, dom_code: &str, legacy_key_code: u32) -> KeyCode {
    // Prefer the logical `key` for printable characters (already includes shift).
    let mut chars = dom_key.chars();
    if let Some(first) = chars.next()
        && chars.next().is_none()
    {
        return KeyCode::Char(first);
    }

    match dom_key {
        "Enter" => KeyCode::Enter,
        "Escape" | "Esc" => KeyCode::Escape,
        "Backspace" => KeyCode::Backspace,
        "Tab" => KeyCode::Tab,
        "Spacebar" => KeyCode::Char(' '),
        _ => match dom_code {
            "Enter" | "NumpadEnter" => KeyCode::Enter,
            "Escape" => KeyCode::Escape,
            "Backspace" => KeyCode::Backspace,
            "Tab" => KeyCode::Tab,
            // Older engines leave `key`/`code` empty or unidentified but still fill `keyCode`.
            "" | "Unidentified"
                if matches!(dom_key, "" | "Unidentified")
                    && legacy_key_code == LEGACY_ENTER_KEY_CODE =>
            {
                KeyCode::Enter
            }
            _ => KeyCode::Unidentified {
                key: dom_key.into(),
                code: dom_code.into(),
            },
        },
    }
}
