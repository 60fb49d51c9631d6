//! Fixed capacities of the console

/// Maximum number of characters in an edited line, a token or a pattern
pub const LINE_CAPACITY: usize = 40;

/// Maximum number of tokens a committed line may split into
pub const TOKEN_CAPACITY: usize = 25;

/// Number of 7-bit ASCII codes
pub const ASCII_SIZE: usize = 128;

/// Text screen width in columns
pub const SCREEN_COLS: usize = 80;

/// Text screen height in rows
pub const SCREEN_ROWS: usize = 25;
