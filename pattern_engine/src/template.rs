//! Search templates and shift-table compilation

use core_types::{CapacityError, Line, ASCII_SIZE, LINE_CAPACITY};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors returned by [`Template::compile`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("Template can not be empty")]
    EmptyPattern,

    #[error("Pattern too long: {len} characters, at most {capacity} allowed")]
    PatternTooLong { len: usize, capacity: usize },

    #[error(transparent)]
    Capacity(#[from] CapacityError),
}

/// Search algorithm, selected once per session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Naive,
    #[default]
    BadCharacter,
}

impl Algorithm {
    /// Boot byte 1 selects Naive, every other value BadCharacter
    pub fn from_boot_byte(byte: u8) -> Self {
        match byte {
            1 => Algorithm::Naive,
            _ => Algorithm::BadCharacter,
        }
    }

    /// Boot byte that selects this algorithm
    pub fn boot_byte(&self) -> u8 {
        match self {
            Algorithm::Naive => 1,
            Algorithm::BadCharacter => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Naive => "naive",
            Algorithm::BadCharacter => "bad-character",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown algorithm: {0} (expected naive or bad-character)")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "naive" => Ok(Algorithm::Naive),
            "bad-character" | "bad_character" => Ok(Algorithm::BadCharacter),
            other => Err(ParseAlgorithmError(other.to_string())),
        }
    }
}

/// Per-character shift distances, 0 meaning "not recorded"
#[derive(Clone, PartialEq, Eq)]
pub struct ShiftTable {
    shifts: [usize; ASCII_SIZE],
}

impl ShiftTable {
    pub const fn new() -> Self {
        Self {
            shifts: [0; ASCII_SIZE],
        }
    }

    /// Entry for `code`; codes outside the table read as 0
    pub fn get(&self, code: u8) -> usize {
        self.shifts.get(code as usize).copied().unwrap_or(0)
    }

    fn set(&mut self, code: u8, shift: usize) {
        if let Some(slot) = self.shifts.get_mut(code as usize) {
            *slot = shift;
        }
    }

    fn reset(&mut self) {
        self.shifts = [0; ASCII_SIZE];
    }

    /// True if no entry has been recorded
    pub fn is_empty(&self) -> bool {
        self.shifts.iter().all(|&s| s == 0)
    }
}

impl Default for ShiftTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ShiftTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let recorded = self
            .shifts
            .iter()
            .enumerate()
            .filter(|(_, s)| **s != 0)
            .map(|(code, s)| (code as u8 as char, s));
        f.debug_map().entries(recorded).finish()
    }
}

/// Compiled search pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pattern: Line,
    algorithm: Algorithm,
    shifts: ShiftTable,
    loaded: bool,
}

impl Template {
    /// Creates an empty, unloaded template
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            pattern: Line::new(),
            algorithm,
            shifts: ShiftTable::new(),
            loaded: false,
        }
    }

    /// Creates a template and compiles `pattern` into it
    pub fn compiled(pattern: &str, algorithm: Algorithm) -> Result<Self, CompileError> {
        let mut template = Self::new(algorithm);
        template.compile(pattern)?;
        Ok(template)
    }

    /// Rebuilds the template for `pattern`
    ///
    /// On error the previous pattern and shift table are left untouched.
    pub fn compile(&mut self, pattern: &str) -> Result<(), CompileError> {
        if pattern.is_empty() {
            return Err(CompileError::EmptyPattern);
        }
        if pattern.len() > LINE_CAPACITY {
            return Err(CompileError::PatternTooLong {
                len: pattern.len(),
                capacity: LINE_CAPACITY,
            });
        }
        let pattern = Line::from_ascii(pattern)?;
        let bytes = pattern.as_bytes();
        let len = bytes.len();

        self.shifts.reset();
        if self.algorithm == Algorithm::BadCharacter {
            // Right to left, first write wins: nearest occurrence to the end
            for index in (0..len - 1).rev() {
                let ch = bytes[index];
                if self.shifts.get(ch) == 0 {
                    self.shifts.set(ch, len - 1 - index);
                }
            }
            let last = bytes[len - 1];
            if self.shifts.get(last) == 0 {
                self.shifts.set(last, (len - 1).max(1));
            }
        }

        self.pattern = pattern;
        self.loaded = true;
        tracing::debug!(
            pattern = %self.pattern,
            algorithm = %self.algorithm,
            "template compiled"
        );
        Ok(())
    }

    /// `c:n ` for every pattern character, in pattern order
    pub fn describe_shifts(&self) -> String {
        let mut out = String::new();
        for &ch in self.pattern.as_bytes() {
            out.push(ch as char);
            out.push(':');
            out.push_str(&self.shifts.get(ch).to_string());
            out.push(' ');
        }
        out
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn shifts(&self) -> &ShiftTable {
        &self.shifts
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::new(Algorithm::default())
    }
}
