// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Workbench configuration (TOML)
//!
//! Every field has a default matching the published workflow, so an empty
//! config file (or no file at all) reproduces the standard analysis:
//!
//! ```toml
//! unknown_label = "unknown"
//! sensory_mode = "celltype"
//! partner_mode = "classificationsystem"
//! motor_mode = "celltype"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use synaptome_structures::LabelMode;
use thiserror::Error;

use crate::resolve::UNKNOWN_LABEL;

/// Errors that can occur while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Configuration for the exploration workflow.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WorkbenchConfig {
    /// Sentinel label substituted for annotation lookup misses
    pub unknown_label: String,

    /// Label mode for the sensory annotation table
    pub sensory_mode: LabelMode,

    /// Label mode for the postsynaptic-partner annotation table
    pub partner_mode: LabelMode,

    /// Label mode for the motor annotation table
    pub motor_mode: LabelMode,
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        Self {
            unknown_label: UNKNOWN_LABEL.to_string(),
            sensory_mode: LabelMode::CellType,
            partner_mode: LabelMode::ClassificationSystem,
            motor_mode: LabelMode::CellType,
        }
    }
}

impl WorkbenchConfig {
    /// Parse a configuration from TOML text. Missing fields take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check value-level invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.unknown_label.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "unknown_label".to_string(),
                reason: "sentinel label must be non-empty".to_string(),
            });
        }
        Ok(())
    }
}
