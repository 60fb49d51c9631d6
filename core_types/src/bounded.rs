//! Fixed-capacity ASCII strings
//!
//! Every piece of text the console handles (the edited line, each token, the
//! search pattern) has a hard capacity. `BoundedStr` keeps that capacity but
//! reports an overflow as a [`CapacityError`] instead of writing past the end.

use crate::limits::LINE_CAPACITY;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Errors returned by bounded sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CapacityError {
    /// The sequence already holds `capacity` elements
    #[error("Capacity exceeded: at most {capacity} elements fit")]
    Full { capacity: usize },

    /// The byte is outside the 7-bit ASCII range
    #[error("Non-ASCII byte: {0:#04x}")]
    NonAscii(u8),
}

/// A line, token or pattern: at most [`LINE_CAPACITY`] ASCII characters
pub type Line = BoundedStr<LINE_CAPACITY>;

/// ASCII string with a compile-time capacity
///
/// Bytes past `len` are always zero, so derived equality and hashing only
/// depend on the visible content.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundedStr<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> BoundedStr<N> {
    /// Creates an empty string
    pub const fn new() -> Self {
        Self {
            bytes: [0; N],
            len: 0,
        }
    }

    /// Copies `text` into a new bounded string
    pub fn from_ascii(text: &str) -> Result<Self, CapacityError> {
        Self::from_bytes(text.as_bytes())
    }

    /// Copies raw ASCII bytes into a new bounded string
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CapacityError> {
        let mut out = Self::new();
        for &byte in bytes {
            out.push(byte)?;
        }
        Ok(out)
    }

    /// Appends one byte
    pub fn push(&mut self, byte: u8) -> Result<(), CapacityError> {
        if !byte.is_ascii() {
            return Err(CapacityError::NonAscii(byte));
        }
        if self.len >= N {
            return Err(CapacityError::Full { capacity: N });
        }
        self.bytes[self.len] = byte;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the last byte
    pub fn pop(&mut self) -> Option<u8> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let byte = self.bytes[self.len];
        self.bytes[self.len] = 0;
        Some(byte)
    }

    /// Maps every byte in place, keeping the length
    ///
    /// A byte whose mapped value is not ASCII is left as it was.
    pub fn map_bytes(mut self, f: impl Fn(u8) -> u8) -> Self {
        for byte in &mut self.bytes[..self.len] {
            let mapped = f(*byte);
            if mapped.is_ascii() {
                *byte = mapped;
            }
        }
        self
    }

    /// Empties the string
    pub fn clear(&mut self) {
        self.bytes = [0; N];
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns the byte at `index`, if it is within the content
    pub fn get(&self, index: usize) -> Option<u8> {
        self.as_bytes().get(index).copied()
    }

    pub fn last(&self) -> Option<u8> {
        self.as_bytes().last().copied()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Returns the content as a string slice
    pub fn as_str(&self) -> &str {
        // Only ASCII is ever stored, which is always valid UTF-8
        std::str::from_utf8(self.as_bytes()).unwrap_or("")
    }
}

impl<const N: usize> Default for BoundedStr<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for BoundedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl<const N: usize> fmt::Display for BoundedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> AsRef<str> for BoundedStr<N> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize> TryFrom<&str> for BoundedStr<N> {
    type Error = CapacityError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::from_ascii(text)
    }
}

impl<const N: usize> PartialEq<str> for BoundedStr<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<&str> for BoundedStr<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> Serialize for BoundedStr<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de, const N: usize> Deserialize<'de> for BoundedStr<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_ascii(&text).map_err(serde::de::Error::custom)
    }
}
