//! LineEditor state machine
//!
//! A complete, testable line editor. One event type, a key press,
//! moves it between accepting input and locked.

use core_types::{CaseTables, Line};

use crate::{buffer::LineBuffer, key::Key, mode::EditorMode, snapshot::EditorSnapshot};

/// Outcome from applying a key to the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorOutcome {
    /// Nothing changed
    Ignored,
    /// Shift state flipped; the line is unchanged and not redrawn
    CapsToggled,
    /// Line changed; redraw the current row and cursor
    Changed,
    /// Enter pressed; hand the line to the commit path
    ///
    /// The buffer is not reset here. It is reset by whatever output the
    /// committed command produces.
    Commit(Line),
}

/// Line editor state machine
#[derive(Debug, Clone, Default)]
pub struct LineEditor {
    buffer: LineBuffer,
    row: usize,
    caps: bool,
}

impl LineEditor {
    /// Create a new editor on row 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a key press and return the outcome
    pub fn apply_key(&mut self, key: Key, cases: &CaseTables) -> EditorOutcome {
        if self.mode() == EditorMode::Locked {
            return EditorOutcome::Ignored;
        }

        match key {
            Key::CapsLock => {
                self.caps = !self.caps;
                EditorOutcome::CapsToggled
            }
            Key::Enter => EditorOutcome::Commit(self.buffer.content()),
            Key::Backspace => {
                self.buffer.backspace();
                EditorOutcome::Changed
            }
            Key::Char(ch) => {
                let ch = if self.caps { cases.to_upper(ch) } else { ch };
                if self.buffer.insert(ch) {
                    EditorOutcome::Changed
                } else {
                    EditorOutcome::Ignored
                }
            }
            Key::Other(_) => EditorOutcome::Ignored,
        }
    }

    /// Move to the next row with an empty line
    pub fn new_line(&mut self) {
        self.buffer.clear();
        self.row += 1;
    }

    /// Back to row 0 with an empty line. The shift state survives.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.row = 0;
    }

    /// Get a complete snapshot of editor state (for parity testing)
    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            mode: self.mode(),
            row: self.row,
            cursor: self.cursor(),
            content: String::from(self.buffer.content().as_str()),
            caps: self.caps,
        }
    }

    // Public accessors for rendering/testing
    pub fn mode(&self) -> EditorMode {
        if self.buffer.is_full() {
            EditorMode::Locked
        } else {
            EditorMode::Accepting
        }
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn content(&self) -> Line {
        self.buffer.content()
    }

    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn caps(&self) -> bool {
        self.caps
    }
}
