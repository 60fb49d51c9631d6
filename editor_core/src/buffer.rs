//! Line buffer

use core_types::{Line, LINE_CAPACITY};

/// Fixed row of cells being edited, with a write cursor
///
/// Cells at or beyond `cursor` are always blank (zero), so the content is
/// exactly `cells[..cursor]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    cells: [u8; LINE_CAPACITY],
    cursor: usize,
}

impl LineBuffer {
    pub const fn new() -> Self {
        Self {
            cells: [0; LINE_CAPACITY],
            cursor: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True once the cursor has reached the capacity
    pub fn is_full(&self) -> bool {
        self.cursor >= LINE_CAPACITY
    }

    /// Writes `ch` at the cursor and advances it
    ///
    /// Returns false when the buffer is full.
    pub fn insert(&mut self, ch: u8) -> bool {
        if self.is_full() {
            return false;
        }
        self.cells[self.cursor] = ch;
        self.cursor += 1;
        true
    }

    /// Trailing deletion
    ///
    /// With more than one character the cell before the cursor is blanked, the
    /// cursor steps back, and the cell just past the new cursor is blanked too.
    pub fn backspace(&mut self) {
        match self.cursor {
            0 => self.cells[0] = 0,
            1 => {
                self.cells[0] = 0;
                self.cursor = 0;
            }
            _ => {
                self.cells[self.cursor - 1] = 0;
                self.cursor -= 1;
                if let Some(cell) = self.cells.get_mut(self.cursor + 1) {
                    *cell = 0;
                }
            }
        }
    }

    /// Blanks every cell and rewinds the cursor
    pub fn clear(&mut self) {
        self.cells = [0; LINE_CAPACITY];
        self.cursor = 0;
    }

    /// Raw cell, 0 meaning blank
    pub fn cell(&self, index: usize) -> Option<u8> {
        self.cells.get(index).copied()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.cells[..self.cursor]
    }

    /// Copy of the current content
    pub fn content(&self) -> Line {
        // Cells only ever hold ASCII from the case tables and never exceed the capacity
        Line::from_bytes(self.as_bytes()).unwrap_or_default()
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}
