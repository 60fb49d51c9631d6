//! # VGA Text Console
//!
//! This crate provides the console sink: the surface committed output and the
//! edited line are drawn on.
//!
//! ## Philosophy
//!
//! This is NOT a terminal emulator. No ANSI escape codes, no VT100, no TTY model.
//! It's a row-addressed text surface: `write_line` overwrites one whole row.
//!
//! ## Design Principles
//!
//! 1. **Minimal and deterministic**: Simple 80x25 text with one attribute
//! 2. **Testable**: [`TextGrid`] is an in-memory sink with the same contract
//! 3. **No unsafe except MMIO**: Isolated to memory writes in [`VgaConsole`]
//! 4. **Cursor is decoration**: The core never reads the cursor back

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

use core::ptr;

#[cfg(feature = "alloc")]
pub mod grid;
pub mod sink;

#[cfg(feature = "alloc")]
pub use grid::TextGrid;
pub use sink::ConsoleSink;

/// VGA text mode dimensions
pub const VGA_WIDTH: usize = 80;
pub const VGA_HEIGHT: usize = 25;

/// VGA color codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum VgaColor {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    Pink = 13,
    Yellow = 14,
    White = 15,
}

impl VgaColor {
    /// Make a VGA attribute byte from foreground and background colors
    pub const fn make_attr(fg: VgaColor, bg: VgaColor) -> u8 {
        (bg as u8) << 4 | (fg as u8)
    }
}

/// Light gray on black, the only attribute the console uses
pub const DEFAULT_ATTR: u8 = VgaColor::make_attr(VgaColor::LightGray, VgaColor::Black);

/// VGA text console
pub struct VgaConsole {
    buffer: *mut u8,
    attr: u8,
    cursor: (usize, usize),
}

impl VgaConsole {
    /// Create a new VGA console with the given virtual address of the VGA buffer
    ///
    /// # Safety
    ///
    /// The caller must ensure that `virt_addr` points to a valid, mapped VGA text buffer.
    pub unsafe fn new(virt_addr: usize) -> Self {
        Self {
            buffer: virt_addr as *mut u8,
            attr: DEFAULT_ATTR,
            cursor: (0, 0),
        }
    }

    /// Clear the screen with the console attribute
    pub fn clear(&mut self) {
        for row in 0..VGA_HEIGHT {
            self.clear_row(row);
        }
    }

    /// Clear a single row
    pub fn clear_row(&mut self, row: usize) {
        self.write_line_at(row, "");
    }

    /// Write a line at the given row and clear the rest of the row
    ///
    /// The line does not wrap and is clipped to the screen width.
    /// Rows past the bottom of the screen are ignored.
    pub fn write_line_at(&mut self, row: usize, text: &str) {
        if row >= VGA_HEIGHT {
            return;
        }

        let offset = row * VGA_WIDTH * 2;
        let space_cell = ((self.attr as u16) << 8) | b' ' as u16;
        let mut col = 0usize;

        // SAFETY: row < VGA_HEIGHT and col < VGA_WIDTH keep every write inside the buffer
        unsafe {
            let ptr = self.buffer.add(offset) as *mut u16;
            for &byte in text.as_bytes().iter().take(VGA_WIDTH) {
                let cell = ((self.attr as u16) << 8) | (byte as u16);
                ptr::write_volatile(ptr.add(col), cell);
                col += 1;
            }
            for i in col..VGA_WIDTH {
                ptr::write_volatile(ptr.add(i), space_cell);
            }
        }
    }

    /// Last cursor position requested, as (row, col)
    ///
    /// Programming the hardware cursor registers is left to the platform.
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }
}

impl ConsoleSink for VgaConsole {
    fn write_line(&mut self, row: usize, text: &str) {
        self.write_line_at(row, text);
    }

    fn clear_screen(&mut self) {
        self.clear();
    }

    fn set_cursor(&mut self, row: usize, col: usize) {
        self.cursor = (row, col);
    }
}

// VgaConsole is Send because it only accesses VGA memory via volatile writes
unsafe impl Send for VgaConsole {}
