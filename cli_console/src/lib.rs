//! # CLI Console
//!
//! The StringOS command console: committed lines become tokens, token 0 picks
//! a command, and the command prints its result through a console sink.
//! It is NOT a shell and NOT intended for POSIX compatibility.

pub mod commands;
pub mod fixtures;
pub mod interactive;
pub mod tokenizer;
pub mod transforms;

pub use commands::{Command, DispatchOutcome, TestSuite};
pub use interactive::{InteractiveConsole, BANNER};
pub use tokenizer::{TokenSet, TokenizeError};
pub use transforms::Transform;

use console_vga::ConsoleSink;
use hal::BootConfigSource;
use pattern_engine::Algorithm;

/// Bootstrap function
///
/// Reads the boot configuration byte once, builds the session around `sink`
/// and prints the banner.
///
/// ## Design
///
/// Unlike traditional OS bootstrap (which often involves magic and implicit state),
/// this is explicit and returns the session that owns all console state.
pub fn bootstrap<S: ConsoleSink>(sink: S, boot: &dyn BootConfigSource) -> InteractiveConsole<S> {
    let byte = boot.read_byte();
    let algorithm = Algorithm::from_boot_byte(byte);
    tracing::info!(boot_byte = byte, %algorithm, "bootstrapping console");

    let mut console = InteractiveConsole::new(sink, algorithm);
    console.boot();
    console
}
