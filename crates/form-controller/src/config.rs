// File: src/config.rs
// Purpose: Controller configuration parsed from TOML

use anyhow::{bail, Context, Result};
use form_validators::StrengthThresholds;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Controller configuration
///
/// ```toml
/// [strength]
/// weak_below = 30
/// fair_below = 60
/// good_below = 80
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormsConfig {
    /// Buckets for the password strength meter
    #[serde(default)]
    pub strength: StrengthThresholds,
}

impl FormsConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormsConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that cannot be applied
    pub fn validate(&self) -> Result<()> {
        if !self.strength.is_ordered() {
            bail!(
                "strength thresholds must increase: weak_below ({}) <= fair_below ({}) <= good_below ({})",
                self.strength.weak_below,
                self.strength.fair_below,
                self.strength.good_below
            );
        }
        Ok(())
    }
}
