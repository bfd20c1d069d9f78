//! Keyboard Input Module
//!
//! Maps physical key identifiers from the embedding input loop to the
//! characters they produce. The mapper is a pure function over the key and
//! the shift modifier; keys with no character mapping (editing, navigation,
//! function keys) return `None` and the caller takes no action.
//!
//! US-layout only, matching the fixed shifted/unshifted tables below.

/// Physical key identifiers supplied by the embedding input loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Key {
    // Letters
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

    // Digit row
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

    // Punctuation
    Space,
    Period,
    Comma,
    Minus,
    Equals,
    Slash,
    Semicolon,
    Apostrophe,
    LeftBracket,
    RightBracket,
    Backslash,
    Grave,

    // Editing (handled by the terminal, not the mapper)
    Backspace,
    Enter,
    Tab,
    Escape,

    // Navigation (no character mapping)
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Delete,
    Insert,
}

/// Unshifted digit-row characters, indexed by digit value
const DIGITS: &[u8; 10] = b"0123456789";
/// Shifted digit-row characters, indexed by digit value
const DIGITS_SHIFTED: &[u8; 10] = b")!@#$%^&*(";

/// Map a key plus shift state to the character it produces, or `None` when
/// the key has no character mapping.
pub fn map_key(key: Key, shift: bool) -> Option<char> {
    let code = key as u8;

    if (Key::A as u8..=Key::Z as u8).contains(&code) {
        let upper = (b'A' + (code - Key::A as u8)) as char;
        return Some(if shift {
            upper
        } else {
            upper.to_ascii_lowercase()
        });
    }

    if (Key::Digit0 as u8..=Key::Digit9 as u8).contains(&code) {
        let digit = (code - Key::Digit0 as u8) as usize;
        let table = if shift { DIGITS_SHIFTED } else { DIGITS };
        return Some(table[digit] as char);
    }

    let ch = match key {
        Key::Space => ' ',
        Key::Period => {
            if shift {
                '>'
            } else {
                '.'
            }
        }
        Key::Comma => {
            if shift {
                '<'
            } else {
                ','
            }
        }
        Key::Minus => {
            if shift {
                '_'
            } else {
                '-'
            }
        }
        Key::Equals => {
            if shift {
                '+'
            } else {
                '='
            }
        }
        Key::Slash => {
            if shift {
                '?'
            } else {
                '/'
            }
        }
        Key::Semicolon => {
            if shift {
                ':'
            } else {
                ';'
            }
        }
        Key::Apostrophe => {
            if shift {
                '"'
            } else {
                '\''
            }
        }
        Key::LeftBracket => {
            if shift {
                '{'
            } else {
                '['
            }
        }
        Key::RightBracket => {
            if shift {
                '}'
            } else {
                ']'
            }
        }
        Key::Backslash => {
            if shift {
                '|'
            } else {
                '\\'
            }
        }
        Key::Grave => {
            if shift {
                '~'
            } else {
                '`'
            }
        }
        _ => return None,
    };

    Some(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_case() {
        assert_eq!(map_key(Key::A, false), Some('a'));
        assert_eq!(map_key(Key::A, true), Some('A'));
        assert_eq!(map_key(Key::Z, false), Some('z'));
        assert_eq!(map_key(Key::Z, true), Some('Z'));
    }

    #[test]
    fn test_digit_row() {
        assert_eq!(map_key(Key::Digit0, false), Some('0'));
        assert_eq!(map_key(Key::Digit0, true), Some(')'));
        assert_eq!(map_key(Key::Digit1, true), Some('!'));
        assert_eq!(map_key(Key::Digit2, true), Some('@'));
        assert_eq!(map_key(Key::Digit9, false), Some('9'));
        assert_eq!(map_key(Key::Digit9, true), Some('('));
    }

    #[test]
    fn test_punctuation_pairs() {
        assert_eq!(map_key(Key::Period, false), Some('.'));
        assert_eq!(map_key(Key::Period, true), Some('>'));
        assert_eq!(map_key(Key::Equals, false), Some('='));
        assert_eq!(map_key(Key::Equals, true), Some('+'));
        assert_eq!(map_key(Key::Backslash, true), Some('|'));
        assert_eq!(map_key(Key::Grave, true), Some('~'));
        assert_eq!(map_key(Key::Space, true), Some(' '));
    }

    #[test]
    fn test_unmapped_keys() {
        for key in [
            Key::Escape,
            Key::Up,
            Key::Down,
            Key::Left,
            Key::Right,
            Key::Home,
            Key::End,
            Key::PageUp,
            Key::PageDown,
            Key::Delete,
            Key::Insert,
        ] {
            assert_eq!(map_key(key, false), None);
            assert_eq!(map_key(key, true), None);
        }
    }

    #[test]
    fn test_mapper_is_shift_sensitive_everywhere() {
        // Every mapped key produces a character for both shift states
        let mapped = [Key::Q, Key::Digit5, Key::Semicolon, Key::LeftBracket];
        for key in mapped {
            assert!(map_key(key, false).is_some());
            assert!(map_key(key, true).is_some());
        }
    }
}
