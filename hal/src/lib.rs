//! # Hardware Abstraction Layer (HAL)
//!
//! This crate defines the hardware seams the console core talks through.
//!
//! ## Philosophy
//!
//! **Hardware is a collaborator, not part of the core.**
//!
//! Interrupt tables, PIC masking and port I/O stay outside. The core only sees:
//! - key-down scan codes ([`KeyboardDevice`], [`KeyboardTranslator`])
//! - the scan-code-to-character layout ([`ScanCodeTable`])
//! - one boot configuration byte ([`BootConfigSource`])
//! - a way to power off ([`CpuHal`])
//!
//! ## Design Principles
//!
//! 1. **Trait-based**: Every hardware touch goes through a trait
//! 2. **No unsafe**: Memory-mapped access lives in the console crate
//! 3. **Testable**: Every trait has a fake in the tests

pub mod boot_config;
pub mod cpu;
pub mod keyboard;
pub mod keyboard_translation;

pub use boot_config::{BootConfigSource, FixedBootByte};
pub use cpu::CpuHal;
pub use keyboard::{HalKeyEvent, KeyboardDevice};
pub use keyboard_translation::{
    KeyboardTranslator, ScanCodeTable, PRINTABLE_CUTOFF, SCANCODE_BACKSPACE, SCANCODE_CAPS_LOCK,
    SCANCODE_ENTER,
};
