//! Decoded key presses

use hal::{ScanCodeTable, SCANCODE_BACKSPACE, SCANCODE_CAPS_LOCK, SCANCODE_ENTER};

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// A key-down event as the editor sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub enum Key {
    /// Printable key, unshifted character
    Char(u8),
    Enter,
    Backspace,
    CapsLock,
    /// Anything without a character or a function in the editor
    Other(u8),
}

impl Key {
    /// Decodes a key-down scan code
    ///
    /// Control keys are matched before the table, so a table with a
    /// different cutoff cannot shadow them.
    pub fn from_scancode(scancode: u8, table: &ScanCodeTable) -> Self {
        match scancode {
            SCANCODE_ENTER => Key::Enter,
            SCANCODE_BACKSPACE => Key::Backspace,
            SCANCODE_CAPS_LOCK => Key::CapsLock,
            code => match table.char_for(code) {
                Some(ch) => Key::Char(ch),
                None => Key::Other(code),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_scancode() {
        let table = ScanCodeTable::new();
        assert_eq!(Key::from_scancode(0x1E, &table), Key::Char(b'a'));
        assert_eq!(Key::from_scancode(0x39, &table), Key::Char(b' '));
        assert_eq!(Key::from_scancode(0x1C, &table), Key::Enter);
        assert_eq!(Key::from_scancode(0x0E, &table), Key::Backspace);
        assert_eq!(Key::from_scancode(0x3A, &table), Key::CapsLock);
        assert_eq!(Key::from_scancode(0x01, &table), Key::Other(0x01));
        assert_eq!(Key::from_scancode(0x50, &table), Key::Other(0x50));
    }
}
