//! Editor modes

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Editor mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub enum EditorMode {
    /// Keys are applied to the line
    Accepting,
    /// Line is full; every key is ignored until the screen is cleared
    Locked,
}
