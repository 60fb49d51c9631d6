//! # Pattern Engine
//!
//! Substring search over short ASCII tokens.
//!
//! ## Philosophy
//!
//! - **Compile once, search many**: A [`Template`] holds the pattern and its
//!   shift table until the next compile replaces it wholesale
//! - **Algorithm fixed per session**: Chosen from the boot byte, never switched
//! - **Explicit failure**: Missing template and oversize pattern are errors,
//!   a miss is [`SearchOutcome::NotFound`]
//!
//! ## Algorithms
//!
//! - [`Algorithm::Naive`]: Leftmost full comparison at every offset
//! - [`Algorithm::BadCharacter`]: Right-to-left comparison with a shift table.
//!   Pattern index 0 is never compared, so a match only guarantees that
//!   `text[r + 1..r + len]` equals `pattern[1..]`.

pub mod search;
pub mod template;

pub use search::{search, SearchError, SearchOutcome};
pub use template::{Algorithm, CompileError, ParseAlgorithmError, ShiftTable, Template};
