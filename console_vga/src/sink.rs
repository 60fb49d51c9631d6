//! Console sink abstraction
//!
//! The console core writes through this trait only, so it can run against
//! real VGA memory or an in-memory grid without changes.

/// Row-addressed text output
pub trait ConsoleSink {
    /// Overwrite `row` with `text`, clipped to the width and padded with blanks
    fn write_line(&mut self, row: usize, text: &str);

    /// Blank every row
    fn clear_screen(&mut self);

    /// Place the visual cursor. Never read back by the core.
    fn set_cursor(&mut self, row: usize, col: usize);
}

impl<S: ConsoleSink + ?Sized> ConsoleSink for &mut S {
    fn write_line(&mut self, row: usize, text: &str) {
        (**self).write_line(row, text);
    }

    fn clear_screen(&mut self) {
        (**self).clear_screen();
    }

    fn set_cursor(&mut self, row: usize, col: usize) {
        (**self).set_cursor(row, col);
    }
}
