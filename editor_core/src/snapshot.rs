//! Editor snapshot for deterministic parity testing

use crate::EditorMode;
#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Complete editor state snapshot for parity testing
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct EditorSnapshot {
    pub mode: EditorMode,
    pub row: usize,
    pub cursor: usize,
    pub content: String,
    pub caps: bool,
}

impl EditorSnapshot {
    /// Compute a deterministic hash of the snapshot state
    /// This is used for fast comparison in parity tests
    #[cfg(test)]
    pub fn hash(&self) -> u64 {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();

        hasher.update([self.mode as u8]);
        hasher.update((self.row as u64).to_le_bytes());
        hasher.update((self.cursor as u64).to_le_bytes());
        hasher.update(self.content.as_bytes());
        hasher.update(b"\n");
        hasher.update([self.caps as u8]);

        let result = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&result[..8]);
        u64::from_le_bytes(bytes)
    }
}
