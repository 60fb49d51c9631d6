//! Line tokenizer
//!
//! Splits a committed line on single spaces. Consecutive spaces produce
//! empty tokens that still take a slot, and the last token is always
//! counted, so an empty line yields one empty token.

use core_types::{CapacityError, Line, LINE_CAPACITY, TOKEN_CAPACITY};
use thiserror::Error;

/// Errors returned when a line cannot be tokenized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    #[error("Too many tokens: at most {capacity} per line")]
    TooManyTokens { capacity: usize },

    #[error("Token {index} too long: at most {capacity} characters")]
    TokenTooLong { index: usize, capacity: usize },

    #[error(transparent)]
    Capacity(#[from] CapacityError),
}

/// Tokens of the last committed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSet {
    tokens: [Line; TOKEN_CAPACITY],
    count: usize,
}

impl TokenSet {
    pub const fn new() -> Self {
        Self {
            tokens: [Line::new(); TOKEN_CAPACITY],
            count: 0,
        }
    }

    /// Builds a set from ready-made tokens
    pub fn from_tokens(tokens: &[&str]) -> Result<Self, TokenizeError> {
        if tokens.len() > TOKEN_CAPACITY {
            return Err(TokenizeError::TooManyTokens {
                capacity: TOKEN_CAPACITY,
            });
        }
        let mut set = Self::new();
        for (index, token) in tokens.iter().enumerate() {
            set.tokens[index] = Line::from_ascii(token).map_err(|e| match e {
                CapacityError::Full { .. } => TokenizeError::TokenTooLong {
                    index,
                    capacity: LINE_CAPACITY,
                },
                other => TokenizeError::Capacity(other),
            })?;
        }
        set.count = tokens.len();
        Ok(set)
    }

    /// Rebuilds the set from `line`
    ///
    /// On error the set is left empty.
    pub fn parse_line(&mut self, line: &str) -> Result<(), TokenizeError> {
        self.clear();
        let result = self.scan(line.as_bytes());
        if result.is_err() {
            self.clear();
        }
        result
    }

    fn scan(&mut self, line: &[u8]) -> Result<(), TokenizeError> {
        let mut current = 0;
        for &byte in line {
            if byte == b' ' {
                current += 1;
                if current >= TOKEN_CAPACITY {
                    return Err(TokenizeError::TooManyTokens {
                        capacity: TOKEN_CAPACITY,
                    });
                }
                continue;
            }
            self.tokens[current].push(byte).map_err(|e| match e {
                CapacityError::Full { .. } => TokenizeError::TokenTooLong {
                    index: current,
                    capacity: LINE_CAPACITY,
                },
                other => TokenizeError::Capacity(other),
            })?;
        }
        // The trailing token always counts
        self.count = current + 1;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.tokens = [Line::new(); TOKEN_CAPACITY];
        self.count = 0;
    }

    /// The i-th token, or "" when `index >= count`
    pub fn token(&self, index: usize) -> &str {
        if index < self.count {
            self.tokens[index].as_str()
        } else {
            ""
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Every token, command included
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens[..self.count].iter().map(|t| t.as_str())
    }

    /// Tokens after the command
    pub fn args(&self) -> impl Iterator<Item = &str> {
        self.iter().skip(1)
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::new()
    }
}
