//! Telex-specific configuration that extends the base `Config` from core.
//!
//! This configuration includes:
//! - All generic options from `libtelex_core::Config` (flattened via serde)
//! - Whether Telex rewriting is active at all
//!
//! # Example
//!
//! ```rust
//! use libtelex::TelexConfig;
//!
//! let config = TelexConfig::from_toml_str("max_word_len = 7\nenabled = true").unwrap();
//! assert_eq!(config.base().max_word_len, 7);
//! ```

use libtelex_core::{Config, ConfigError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TelexConfig {
    /// Base configuration fields (word length limit)
    #[serde(flatten)]
    pub base: Config,

    /// Rewrite keystrokes with Telex rules. When false every key is
    /// committed as typed, as when another keyboard layout is active.
    pub enabled: bool,
}

impl Default for TelexConfig {
    fn default() -> Self {
        Self {
            base: Config::default(),
            enabled: true,
        }
    }
}

impl TelexConfig {
    /// Load and validate a Telex config from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save this config to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Parse and validate a Telex config from TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: TelexConfig = toml::from_str(content)?;
        config.base.validate()?;
        Ok(config)
    }

    /// Serialize this config to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Convert this Telex config into the base config.
    pub fn into_base(self) -> Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut Config {
        &mut self.base
    }
}
