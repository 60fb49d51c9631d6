//! Case conversion tables
//!
//! Two lookup tables computed once at startup. Only `A..=Z` / `a..=z` are
//! remapped; every other code maps to itself.

use crate::bounded::BoundedStr;
use crate::limits::ASCII_SIZE;

/// Code-to-code mapping for the 128 ASCII codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseTable {
    map: [u8; ASCII_SIZE],
}

impl CaseTable {
    fn identity() -> Self {
        let mut map = [0u8; ASCII_SIZE];
        for (code, slot) in map.iter_mut().enumerate() {
            *slot = code as u8;
        }
        Self { map }
    }

    /// Builds the uppercase-of table
    pub fn upper() -> Self {
        let mut table = Self::identity();
        for code in b'a'..=b'z' {
            table.map[code as usize] = code - 32;
        }
        table
    }

    /// Builds the lowercase-of table
    pub fn lower() -> Self {
        let mut table = Self::identity();
        for code in b'A'..=b'Z' {
            table.map[code as usize] = code + 32;
        }
        table
    }

    /// Maps one code. Codes outside 0..128 are returned unchanged.
    pub fn apply(&self, code: u8) -> u8 {
        self.map.get(code as usize).copied().unwrap_or(code)
    }

    /// Maps every character of `text`
    pub fn apply_str<const N: usize>(&self, text: &BoundedStr<N>) -> BoundedStr<N> {
        text.map_bytes(|byte| self.apply(byte))
    }
}

/// The pair of case tables shared by the editor and the text transforms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseTables {
    pub upper: CaseTable,
    pub lower: CaseTable,
}

impl CaseTables {
    pub fn new() -> Self {
        Self {
            upper: CaseTable::upper(),
            lower: CaseTable::lower(),
        }
    }

    pub fn to_upper(&self, code: u8) -> u8 {
        self.upper.apply(code)
    }

    pub fn to_lower(&self, code: u8) -> u8 {
        self.lower.apply(code)
    }
}

impl Default for CaseTables {
    fn default() -> Self {
        Self::new()
    }
}
