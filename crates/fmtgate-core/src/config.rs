// Rust guideline compliant 2026-02-06

//! Configuration management for fmtgate.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for fmtgate behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Style checker binary. Its presence is checked, it is never invoked.
    #[serde(default = "default_style_checker")]
    pub style_checker: String,

    /// Formatter binary probed via its version subcommand.
    #[serde(default = "default_formatter")]
    pub formatter: String,

    /// Arguments for the formatter version probe.
    #[serde(default = "default_formatter_probe_args")]
    pub formatter_probe_args: Vec<String>,

    /// Build program that runs the format check.
    #[serde(default = "default_make_program")]
    pub make_program: String,

    /// Build target that reports formatting violations without fixing them.
    #[serde(default = "default_check_target")]
    pub check_target: String,

    /// Whether a missing tool blocks the push instead of warning.
    #[serde(default)]
    pub block_on_missing_tools: bool,
}

/// Default style checker binary.
fn default_style_checker() -> String {
    "astyle".to_string()
}

/// Default formatter binary.
fn default_formatter() -> String {
    "cargo".to_string()
}

/// Default formatter probe arguments.
fn default_formatter_probe_args() -> Vec<String> {
    vec!["fmt".to_string(), "--version".to_string()]
}

/// Default build program.
fn default_make_program() -> String {
    "make".to_string()
}

/// Default format-check target.
fn default_check_target() -> String {
    "format-check".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style_checker: default_style_checker(),
            formatter: default_formatter(),
            formatter_probe_args: default_formatter_probe_args(),
            make_program: default_make_program(),
            check_target: default_check_target(),
            block_on_missing_tools: false,
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.fmtgate/config.toml`
    /// 3. Environment variables with `FMTGATE_` prefix
    ///
    /// # Arguments
    ///
    /// * `fmtgate_dir` - Path to the `.fmtgate` directory
    ///
    /// # Returns
    ///
    /// A Config struct with values from file and environment variables applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(fmtgate_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        // Try to load from config file
        let config_path = fmtgate_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let file_config: Config = toml::from_str(&content)
                .map_err(|e| crate::Error::Config(format!("Invalid config file: {}", e)))?;
            config = file_config;
        }

        // Apply environment variable overrides
        config.apply_env_overrides()?;

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `FMTGATE_STYLE_CHECKER` - Style checker binary name
    /// - `FMTGATE_FORMATTER` - Formatter binary name
    /// - `FMTGATE_MAKE_PROGRAM` - Build program name
    /// - `FMTGATE_CHECK_TARGET` - Format-check target name
    /// - `FMTGATE_BLOCK_ON_MISSING_TOOLS` - Block on missing tools (true/false)
    ///
    /// # Returns
    ///
    /// Ok if all environment variables are valid, Err otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("FMTGATE_STYLE_CHECKER") {
            self.style_checker = val;
        }

        if let Ok(val) = std::env::var("FMTGATE_FORMATTER") {
            self.formatter = val;
        }

        if let Ok(val) = std::env::var("FMTGATE_MAKE_PROGRAM") {
            self.make_program = val;
        }

        if let Ok(val) = std::env::var("FMTGATE_CHECK_TARGET") {
            self.check_target = val;
        }

        if let Ok(val) = std::env::var("FMTGATE_BLOCK_ON_MISSING_TOOLS") {
            self.block_on_missing_tools = val.parse().map_err(|_| {
                crate::Error::Config(
                    "FMTGATE_BLOCK_ON_MISSING_TOOLS must be true or false".to_string(),
                )
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Returns
    ///
    /// Ok if all values are valid, Err otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any configured command name is empty
    /// - The formatter probe argument list is empty
    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("style_checker", &self.style_checker),
            ("formatter", &self.formatter),
            ("make_program", &self.make_program),
            ("check_target", &self.check_target),
        ] {
            if value.trim().is_empty() {
                return Err(crate::Error::Config(format!(
                    "{} must not be empty",
                    field
                )));
            }
        }

        if self.formatter_probe_args.is_empty() {
            return Err(crate::Error::Config(
                "formatter_probe_args must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Arguments
    ///
    /// * `fmtgate_dir` - Path to the `.fmtgate` directory
    ///
    /// # Returns
    ///
    /// Ok if the file was written successfully, Err otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, fmtgate_dir: &Path) -> Result<()> {
        let config_path = fmtgate_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
