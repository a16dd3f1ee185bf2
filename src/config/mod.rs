//! Code generation settings
//!
//! Settings only change how the assembly text is laid out, never what it
//! computes. They can be read from TOML:
//!
//! ```toml
//! entry_symbol = "calc"
//! indent = 4
//! annotate = true
//! ```

use serde::Deserialize;

/// Output layout for the code generator
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenConfig {
    /// Name of the global entry label
    pub entry_symbol: String,
    /// Spaces before each instruction
    pub indent: usize,
    /// Emit a comment line before each combine step
    pub annotate: bool,
}

impl CodegenConfig {
    /// Parse settings from TOML text; missing keys keep their defaults
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: CodegenConfig = toml::from_str(text).map_err(|e| ConfigError {
            message: e.message().to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let valid = self
            .entry_symbol
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && self
                .entry_symbol
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');

        if !valid {
            return Err(ConfigError {
                message: format!("invalid entry symbol '{}'", self.entry_symbol),
            });
        }
        Ok(())
    }
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            entry_symbol: "main".to_string(),
            indent: 2,
            annotate: false,
        }
    }
}

/// Error reading code generation settings
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid configuration: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
