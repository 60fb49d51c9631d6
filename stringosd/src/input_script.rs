//! # Input Script Parser
//!
//! Provides a simple scripted input format for deterministic testing and demos.
//! A script compiles down to the key-down scan codes a PS/2 keyboard would send.
//!
//! ## Format
//!
//! Scripts are line-based, with each line representing one input action:
//! - Key names: `Enter`, `Backspace`, `CapsLock`, `Space`
//! - Single characters: `a`, `7`, `-`
//! - Text strings: `"upcase Hello"` (expanded to individual key presses;
//!   upper-case runs are wrapped in Caps Lock presses)
//! - Raw scan codes: `scan 0x1c`
//! - Comments: `# This is a comment`
//!
//! ## Example
//!
//! ```text
//! # Load a template and search for it
//! "template ab"
//! Enter
//! "search aaaaaabaab"
//! Enter
//! ```

use hal::{ScanCodeTable, SCANCODE_BACKSPACE, SCANCODE_CAPS_LOCK, SCANCODE_ENTER};
use std::collections::VecDeque;
use thiserror::Error;

/// Input script error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputScriptError {
    #[error("Invalid key name: {0}")]
    InvalidKeyName(String),

    #[error("Character {0:?} cannot be typed on the console keyboard")]
    UntypeableChar(char),

    #[error("Invalid scan code: {0}")]
    InvalidScanCode(String),

    #[error("Parse error at line {line}: {source}")]
    ParseError {
        line: usize,
        #[source]
        source: Box<InputScriptError>,
    },

    #[error("Empty script")]
    EmptyScript,
}

/// Scan codes that type `ch`, assuming Caps Lock is off before and after
///
/// Upper-case letters come out as Caps Lock, the letter, Caps Lock.
pub fn scancodes_for_char(ch: char, table: &ScanCodeTable) -> Option<Vec<u8>> {
    if !ch.is_ascii() {
        return None;
    }
    let byte = ch as u8;
    if byte.is_ascii_uppercase() {
        let code = table.scancode_for(byte.to_ascii_lowercase())?;
        return Some(vec![SCANCODE_CAPS_LOCK, code, SCANCODE_CAPS_LOCK]);
    }
    table.scancode_for(byte).map(|code| vec![code])
}

/// Input script
///
/// An ordered queue of key-down scan codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputScript {
    scancodes: VecDeque<u8>,
}

impl InputScript {
    /// Creates a new empty input script
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a script from text
    pub fn from_text(text: &str) -> Result<Self, InputScriptError> {
        let table = ScanCodeTable::new();
        let mut scancodes = VecDeque::new();

        for (line_num, line) in text.lines().enumerate() {
            let line = strip_comment(line).trim();
            if line.is_empty() {
                continue;
            }

            let parsed =
                Self::parse_line(line, &table).map_err(|e| InputScriptError::ParseError {
                    line: line_num + 1,
                    source: Box::new(e),
                })?;
            scancodes.extend(parsed);
        }

        if scancodes.is_empty() {
            return Err(InputScriptError::EmptyScript);
        }

        Ok(Self { scancodes })
    }

    /// Parses a single line of script
    fn parse_line(line: &str, table: &ScanCodeTable) -> Result<Vec<u8>, InputScriptError> {
        if let Some(text) = line
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
        {
            return Self::type_text(text, table);
        }

        if let Some(code) = line.strip_prefix("scan ") {
            return Self::parse_scancode(code.trim()).map(|code| vec![code]);
        }

        match line.to_lowercase().as_str() {
            "enter" | "return" => Ok(vec![SCANCODE_ENTER]),
            "backspace" | "back" => Ok(vec![SCANCODE_BACKSPACE]),
            "capslock" | "caps" => Ok(vec![SCANCODE_CAPS_LOCK]),
            "space" => Ok(vec![0x39]),
            _ => {
                let mut chars = line.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => {
                        scancodes_for_char(ch, table).ok_or(InputScriptError::UntypeableChar(ch))
                    }
                    _ => Err(InputScriptError::InvalidKeyName(line.to_string())),
                }
            }
        }
    }

    /// Expands text into key presses, toggling Caps Lock once per upper-case run
    fn type_text(text: &str, table: &ScanCodeTable) -> Result<Vec<u8>, InputScriptError> {
        let mut codes = Vec::with_capacity(text.len());
        let mut caps = false;

        for ch in text.chars() {
            let upper = ch.is_ascii_uppercase();
            if upper != caps && ch.is_ascii_alphabetic() {
                codes.push(SCANCODE_CAPS_LOCK);
                caps = upper;
            }
            let lower = ch.to_ascii_lowercase();
            let code = u8::try_from(lower)
                .ok()
                .and_then(|b| table.scancode_for(b))
                .ok_or(InputScriptError::UntypeableChar(ch))?;
            codes.push(code);
        }
        if caps {
            codes.push(SCANCODE_CAPS_LOCK);
        }
        Ok(codes)
    }

    fn parse_scancode(text: &str) -> Result<u8, InputScriptError> {
        let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            Some(hex) => u8::from_str_radix(hex, 16),
            None => text.parse::<u8>(),
        };
        parsed.map_err(|_| InputScriptError::InvalidScanCode(text.to_string()))
    }

    /// Returns the next scan code, if any
    pub fn next_scancode(&mut self) -> Option<u8> {
        self.scancodes.pop_front()
    }

    /// Returns the number of remaining scan codes
    pub fn remaining(&self) -> usize {
        self.scancodes.len()
    }
}

impl Iterator for InputScript {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.next_scancode()
    }
}

/// Drops a trailing `#` comment unless the `#` sits inside quotes
fn strip_comment(line: &str) -> &str {
    let mut quoted = false;
    for (i, ch) in line.char_indices() {
        match ch {
            '"' => quoted = !quoted,
            '#' if !quoted && (i == 0 || line[..i].ends_with(char::is_whitespace)) => {
                return &line[..i];
            }
            _ => {}
        }
    }
    line
}
