//! Scan code translation
//!
//! This module turns hardware scan codes into what the line editor consumes.
//!
//! ## Philosophy
//!
//! - **Deterministic mapping**: Same scan code always produces same character
//! - **Explicit "none"**: Non-printable keys map to `None`, never to a sentinel
//! - **No locale complexity**: Unshifted US layout, ASCII only
//!
//! ## Scan Code Set
//!
//! This implementation assumes **PS/2 Scan Code Set 1**.
//! - Released keys have bit 7 set (scancode | 0x80)
//! - Only codes below [`PRINTABLE_CUTOFF`] can produce characters

use crate::keyboard::HalKeyEvent;
use core_types::ASCII_SIZE;

/// Enter key
pub const SCANCODE_ENTER: u8 = 0x1C;

/// Caps Lock key (toggles the shift state)
pub const SCANCODE_CAPS_LOCK: u8 = 0x3A;

/// Backspace key
pub const SCANCODE_BACKSPACE: u8 = 0x0E;

/// First scan code that never maps to a character
pub const PRINTABLE_CUTOFF: u8 = 0x3A;

/// Unshifted Set 1 layout for codes 0x00..0x3A, 0 meaning "no character"
const SET1_LAYOUT: [u8; PRINTABLE_CUTOFF as usize] = [
    0, 0, // 0x00, Escape
    b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'0', b'-', b'=', 0, 0, // .. Backspace, Tab
    b'q', b'w', b'e', b'r', b't', b'y', b'u', b'i', b'o', b'p', b'[', b']', 0, 0, // .. Enter, Ctrl
    b'a', b's', b'd', b'f', b'g', b'h', b'j', b'k', b'l', b';', b'\'', 0, 0, b'\\', // .. `, LShift
    b'z', b'x', b'c', b'v', b'b', b'n', b'm', b',', b'.', b'/', 0, 0, 0, b' ', // .. RShift, *, Alt
];

/// Fixed mapping from scan code to unshifted printable character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanCodeTable {
    chars: [Option<u8>; ASCII_SIZE],
}

impl ScanCodeTable {
    /// Creates the standard table with the default cutoff
    pub fn new() -> Self {
        Self::with_cutoff(PRINTABLE_CUTOFF)
    }

    /// Creates the standard table, mapping every code at or above `cutoff` to none
    pub fn with_cutoff(cutoff: u8) -> Self {
        let mut chars = [None; ASCII_SIZE];
        for (code, &ch) in SET1_LAYOUT.iter().enumerate() {
            if ch != 0 && code < cutoff as usize {
                chars[code] = Some(ch);
            }
        }
        Self { chars }
    }

    /// Returns the character for a scan code, or `None` for non-printable keys
    pub fn char_for(&self, scancode: u8) -> Option<u8> {
        self.chars.get(scancode as usize).copied().flatten()
    }

    /// Reverse lookup: the scan code that types `ch` unshifted
    pub fn scancode_for(&self, ch: u8) -> Option<u8> {
        self.chars
            .iter()
            .position(|&slot| slot == Some(ch))
            .map(|code| code as u8)
    }
}

impl Default for ScanCodeTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyboard translator
///
/// Drops key-up transitions so that only key-down scan codes reach the core.
#[derive(Debug, Default)]
pub struct KeyboardTranslator {
    dropped_releases: u64,
}

impl KeyboardTranslator {
    /// Creates a new keyboard translator
    pub fn new() -> Self {
        Self::default()
    }

    /// Translates a HAL keyboard event to a key-down scan code
    ///
    /// Returns None for releases.
    pub fn translate(&mut self, hal_event: HalKeyEvent) -> Option<u8> {
        if hal_event.is_released() {
            self.dropped_releases += 1;
            return None;
        }
        Some(hal_event.scancode)
    }

    /// Number of key-up events filtered so far
    pub fn dropped_releases(&self) -> u64 {
        self.dropped_releases
    }
}
