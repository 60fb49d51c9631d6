//! # Core Types
//!
//! This crate defines the fundamental types shared by every StringOS component.
//!
//! ## Philosophy
//!
//! Core types are designed with these principles:
//! - **Bounded by construction**: Lines, tokens and patterns have fixed capacities
//!   and refuse to grow past them instead of overwriting neighbouring memory.
//! - **ASCII only**: Every byte is a 7-bit code. Anything else is rejected at the edge.
//! - **Built once**: Lookup tables are computed at startup and never mutated.
//!
//! ## Key Types
//!
//! - [`BoundedStr<N>`]: A fixed-capacity ASCII string
//! - [`CaseTables`]: Upper/lower case mappings for codes 0..128
//! - [`CapacityError`]: Returned when a bounded sequence would overflow

pub mod bounded;
pub mod case;
pub mod limits;

pub use bounded::{BoundedStr, CapacityError, Line};
pub use case::{CaseTable, CaseTables};
pub use limits::{ASCII_SIZE, LINE_CAPACITY, SCREEN_COLS, SCREEN_ROWS, TOKEN_CAPACITY};
