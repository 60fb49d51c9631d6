//! Keyboard device abstraction
//!
//! This module provides a hardware abstraction for keyboard input devices.
//! It defines the interface that a concrete key source must provide.
//!
//! ## Philosophy
//!
//! - **Hardware is just a source**: Keyboards provide raw scan codes, not characters
//! - **Not a TTY**: This is not stdin, not a terminal emulator
//! - **Testable**: Can mock hardware via fake implementations
//!
//! ## Design
//!
//! The keyboard interface is minimal:
//! - Poll-based (the interrupt handler, if any, lives outside this crate)
//! - Returns raw PS/2 Set 1 events, release bit included
//! - Filtering of key-up transitions happens in [`crate::KeyboardTranslator`]

/// Bit 7 of a Set 1 scan code marks a key release
pub const RELEASE_BIT: u8 = 0x80;

/// Hardware keyboard event
///
/// This represents a raw keyboard event from hardware before any filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalKeyEvent {
    /// Scan code without the release bit (0..128)
    pub scancode: u8,

    /// Whether the key was pressed (true) or released (false)
    pub pressed: bool,
}

impl HalKeyEvent {
    /// Creates a new keyboard event
    pub fn new(scancode: u8, pressed: bool) -> Self {
        Self {
            scancode: scancode & !RELEASE_BIT,
            pressed,
        }
    }

    /// Decodes a byte read from the controller data port
    pub fn from_raw(byte: u8) -> Self {
        Self::new(byte, byte & RELEASE_BIT == 0)
    }

    /// Returns true if this is a key press event
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Returns true if this is a key release event
    pub fn is_released(&self) -> bool {
        !self.pressed
    }
}

/// Source of raw key events
///
/// Implemented by the PS/2 port driver on hardware and by the host key queue.
/// Caps Lock state lives in the line editor, never here.
pub trait KeyboardDevice {
    /// Next pending event, or `None` without blocking
    fn poll_event(&mut self) -> Option<HalKeyEvent>;

    /// Blocks until the next event arrives
    ///
    /// Returns `None` only once the source is closed for good.
    fn wait_event(&mut self) -> Option<HalKeyEvent>;
}
