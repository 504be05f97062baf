//! Turning raw key presses and text into game input.

use crate::keyboard::{BACK, ENTER};

/// One of the three things a player can do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Input {
    /// Type an uppercase letter or digit into the next cell.
    Char(char),

    /// Clear the last typed cell of the current row.
    Delete,

    /// Submit the current row as a guess.
    Submit,
}

impl Input {
    /// Maps a key name to an input.
    ///
    /// Accepts physical key names (`Enter`, `Backspace`), the on-screen
    /// keys ([`ENTER`], [`BACK`]) and any single ASCII letter or digit.
    /// Everything else is `None`.
    ///
    /// ```rust
    /// use cardle::Input;
    ///
    /// assert_eq!(Input::from_key("Enter"), Some(Input::Submit));
    /// assert_eq!(Input::from_key("BACK"), Some(Input::Delete));
    /// assert_eq!(Input::from_key("q"), Some(Input::Char('Q')));
    /// assert_eq!(Input::from_key("Shift"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.to_ascii_uppercase();
        match key.as_str() {
            k if k == ENTER => Some(Input::Submit),
            "BACKSPACE" => Some(Input::Delete),
            k if k == BACK => Some(Input::Delete),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::from_char(c),
                    _ => None,
                }
            }
        }
    }

    /// Maps composed text (for example from a mobile input field) to an
    /// input. Only the last character counts.
    ///
    /// ```rust
    /// use cardle::Input;
    ///
    /// assert_eq!(Input::from_text("hog"), Some(Input::Char('G')));
    /// assert_eq!(Input::from_text("a!"), None);
    /// assert_eq!(Input::from_text(""), None);
    /// ```
    pub fn from_text(text: &str) -> Option<Self> {
        text.chars().last().and_then(Self::from_char)
    }

    fn from_char(c: char) -> Option<Self> {
        c.is_ascii_alphanumeric()
            .then(|| Input::Char(c.to_ascii_uppercase()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn special_keys_ignore_case() {
        assert_eq!(Input::from_key("enter"), Some(Input::Submit));
        assert_eq!(Input::from_key("ENTER"), Some(Input::Submit));
        assert_eq!(Input::from_key("Backspace"), Some(Input::Delete));
        assert_eq!(Input::from_key("back"), Some(Input::Delete));
    }

    #[test]
    fn single_characters_must_be_alphanumeric() {
        assert_eq!(Input::from_key("7"), Some(Input::Char('7')));
        assert_eq!(Input::from_key("z"), Some(Input::Char('Z')));
        assert_eq!(Input::from_key("-"), None);
        assert_eq!(Input::from_key(" "), None);
        assert_eq!(Input::from_key("é"), None);
        assert_eq!(Input::from_key("F1"), None);
        assert_eq!(Input::from_key(""), None);
    }

    #[test]
    fn text_uses_the_last_character() {
        assert_eq!(Input::from_text("x-bow"), Some(Input::Char('W')));
        assert_eq!(Input::from_text("zap 2"), Some(Input::Char('2')));
        assert_eq!(Input::from_text("zap "), None);
    }
}
