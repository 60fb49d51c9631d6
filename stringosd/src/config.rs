//! Host runtime configuration
//!
//! A configuration file supplies defaults; command-line flags override them.

use pattern_engine::Algorithm;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Where key presses come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostMode {
    /// Simulation mode (deterministic, scripted input)
    #[default]
    Sim,
    /// Typed characters from standard input
    Stdin,
}

/// Host runtime configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HostRuntimeConfig {
    /// Host mode
    pub mode: HostMode,
    /// Input script text (for sim mode)
    pub script: Option<String>,
    /// Boot configuration byte handed to the console
    pub boot_byte: Option<u8>,
    /// Explicit algorithm; takes precedence over `boot_byte`
    pub algorithm: Option<Algorithm>,
    /// Maximum key events to process (0 = unlimited)
    pub max_steps: usize,
    /// Suppress per-step screen output
    pub quiet: bool,
}

impl HostRuntimeConfig {
    /// Loads a configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The byte the console reads at boot
    pub fn effective_boot_byte(&self) -> u8 {
        match (self.algorithm, self.boot_byte) {
            (Some(algorithm), _) => algorithm.boot_byte(),
            (None, Some(byte)) => byte,
            (None, None) => 0,
        }
    }

    pub fn effective_algorithm(&self) -> Algorithm {
        Algorithm::from_boot_byte(self.effective_boot_byte())
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub mode: Option<HostMode>,
    pub script: Option<String>,
    pub boot_byte: Option<u8>,
    pub algorithm: Option<Algorithm>,
    pub max_steps: Option<usize>,
    pub quiet: bool,
}

impl ConfigOverrides {
    /// Applies the command-line values on top of `config`
    ///
    /// A boot byte on the command line also beats an algorithm from the file.
    pub fn apply(self, mut config: HostRuntimeConfig) -> HostRuntimeConfig {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(script) = self.script {
            config.script = Some(script);
        }
        if let Some(byte) = self.boot_byte {
            config.boot_byte = Some(byte);
            config.algorithm = None;
        }
        if let Some(algorithm) = self.algorithm {
            config.algorithm = Some(algorithm);
        }
        if let Some(max_steps) = self.max_steps {
            config.max_steps = max_steps;
        }
        config.quiet |= self.quiet;
        config
    }
}
