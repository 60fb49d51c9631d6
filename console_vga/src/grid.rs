//! In-memory text grid
//!
//! Same contract as [`crate::VgaConsole`], backed by a byte vector instead of
//! video memory. Used by the host runtime and by tests.

use crate::sink::ConsoleSink;
use crate::{VGA_HEIGHT, VGA_WIDTH};
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

/// Character grid with a visual cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextGrid {
    cols: usize,
    rows: usize,
    cells: Vec<u8>,
    cursor: (usize, usize),
    writes: u64,
}

impl TextGrid {
    /// Creates an 80x25 grid of blanks
    pub fn new() -> Self {
        Self::with_size(VGA_WIDTH, VGA_HEIGHT)
    }

    /// Creates a grid with explicit dimensions
    pub fn with_size(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![b' '; cols * rows],
            cursor: (0, 0),
            writes: 0,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Visual cursor as (row, col)
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Number of row writes since creation (clears count once)
    pub fn write_count(&self) -> u64 {
        self.writes
    }

    /// Text of one row with trailing blanks removed
    ///
    /// Returns an empty string for rows outside the grid.
    pub fn row_text(&self, row: usize) -> String {
        if row >= self.rows {
            return String::new();
        }
        let start = row * self.cols;
        let line = &self.cells[start..start + self.cols];
        let end = line.iter().rposition(|&b| b != b' ').map_or(0, |i| i + 1);
        line[..end].iter().map(|&b| b as char).collect()
    }

    /// Character at (row, col), if inside the grid
    pub fn char_at(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// True if every cell is blank
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&b| b == b' ')
    }

    /// Whole screen, one line per row, trailing blank rows dropped
    pub fn render(&self) -> String {
        let lines: Vec<String> = (0..self.rows).map(|row| self.row_text(row)).collect();
        let used = lines
            .iter()
            .rposition(|line| !line.is_empty())
            .map_or(0, |i| i + 1);
        let mut out = String::new();
        for line in &lines[..used] {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl Default for TextGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink for TextGrid {
    fn write_line(&mut self, row: usize, text: &str) {
        if row >= self.rows {
            return;
        }
        let start = row * self.cols;
        let line = &mut self.cells[start..start + self.cols];
        line.fill(b' ');
        for (cell, &byte) in line.iter_mut().zip(text.as_bytes()) {
            *cell = byte;
        }
        self.writes += 1;
    }

    fn clear_screen(&mut self) {
        self.cells.fill(b' ');
        self.writes += 1;
    }

    fn set_cursor(&mut self, row: usize, col: usize) {
        self.cursor = (row, col);
    }
}
