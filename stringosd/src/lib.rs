//! # StringOS Host Runtime
//!
//! This crate runs the StringOS console on a normal operating system.
//!
//! ## Philosophy
//!
//! - **Host owns I/O**: The console only writes rows through its sink
//! - **Output is grid rendering**: Not terminal state
//! - **Input is scan codes**: Stdin and scripts are translated before the console sees them
//! - **Deterministic mode is first-class**: For tests
//!
//! ## Responsibilities
//!
//! The host runtime:
//! - Reads the boot byte from configuration and boots the console
//! - Runs a live event loop (key → handle → render)
//! - Supports both scripted and stdin input modes
//! - Powers off on `shutdown`
//!
//! ## Non-Responsibilities
//!
//! The host does NOT:
//! - Provide terminal emulation (ANSI/VT codes)
//! - Edit anything but the trailing character of a line
//! - Change the search algorithm after boot

pub mod config;
pub mod input_script;
pub mod runtime;

pub use config::{ConfigError, ConfigOverrides, HostMode, HostRuntimeConfig};
pub use input_script::{scancodes_for_char, InputScript, InputScriptError};
pub use runtime::{
    scancodes_for_byte, ChannelKeyboard, HostCpu, HostRuntime, HostRuntimeError, StopReason,
};
