//! TOML-based configuration.
//!
//! Settings are merged from, in increasing precedence:
//! - bundled defaults (include_str! from eisenstein.toml)
//! - `~/.config/eisenstein/eisenstein.toml`
//! - `./eisenstein.toml`
//! - `EISENSTEIN_*` environment variables (e.g. `EISENSTEIN_FPS=60`)

use config::{Config, Environment, File, FileFormat};
use eisenstein_error::{ConfigError, EisensteinResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime settings for outline generation and registry materialization.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EisensteinConfig {
    /// Directory that holds section artifacts, the registry module, and
    /// the manifest
    pub project_dir: PathBuf,

    /// Frame rate stated in outline prompts
    pub fps: u32,

    /// Seconds to wait for a single generation call before giving up
    pub generation_timeout_secs: u64,

    /// Model override; `None` uses the provider default
    #[serde(default)]
    pub model: Option<String>,

    /// Sampling temperature for generation requests
    #[serde(default)]
    pub temperature: Option<f32>,

    /// Response length bound for generation requests
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

impl EisensteinConfig {
    /// Load configuration, merging bundled defaults with user overrides.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a source fails to parse or the
    /// merged result does not deserialize.
    pub fn load() -> EisensteinResult<Self> {
        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../eisenstein.toml");

        let mut builder = Config::builder()
            // Start with bundled defaults
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        // User config from the home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/eisenstein/eisenstein.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // User config from the current directory (optional)
        builder = builder.add_source(File::with_name("eisenstein").required(false));

        // Environment variables take highest precedence
        builder = builder.add_source(Environment::with_prefix("EISENSTEIN"));

        let config = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        Ok(config)
    }
}
