//! Boot configuration byte
//!
//! The console reads one byte exactly once at startup; it selects the search
//! algorithm for the whole session.

/// Source of the boot configuration byte
pub trait BootConfigSource {
    /// Reads the byte. Called once per session.
    fn read_byte(&self) -> u8;
}

/// Boot byte supplied by the host (tests, simulation, command line)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedBootByte(pub u8);

impl BootConfigSource for FixedBootByte {
    fn read_byte(&self) -> u8 {
        self.0
    }
}
