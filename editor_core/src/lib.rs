//! # Editor Core
//!
//! Line editor logic driven by the console session, on VGA memory or on the host.
//!
//! ## Philosophy
//!
//! - **Deterministic**: Same scan code trace => same editor state
//! - **Two states only**: Accepting input, or locked once the line is full
//! - **Mechanism over policy**: Core edits the line, the session decides rendering
//!
//! ## Design
//!
//! The core provides:
//! - LineEditor: State machine driven by key presses
//! - EditorOutcome: Structured results the session reacts to
//! - EditorSnapshot: Deterministic state for parity testing
//! - Key: Decoded scan code

pub mod buffer;
pub mod core;
pub mod key;
pub mod mode;
pub mod snapshot;

pub use buffer::LineBuffer;
pub use self::core::{EditorOutcome, LineEditor};
pub use key::Key;
pub use mode::EditorMode;
pub use snapshot::EditorSnapshot;
