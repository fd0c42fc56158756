//! Configuration file support
//!
//! Loads settings from ~/.cleancards.conf (or %USERPROFILE%\.cleancards.conf on Windows)
//!
//! Format: simple key=value pairs, one per line
//! Lines starting with # are comments
//!
//! Example:
//! ```text
//! # cleancards configuration
//! line-numbers = true
//! language = typescript
//! api-key = AIza...
//! model = gemini-3-flash-preview
//! timeout = 30
//! log-file = /tmp/cleancards.log
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use crate::error::{CardsError, Result};

/// Environment variables consulted for the API key, in order
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Whether to show line numbers beside snippets
    pub show_line_numbers: bool,
    /// Highlighting profile for decks that don't name one
    pub language: String,
    /// Credential for the explanation endpoint
    pub api_key: Option<String>,
    /// Text-generation model name
    pub model: String,
    /// Base URL of the text-generation API
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Where interactive mode writes its log
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_line_numbers: true,
            language: "typescript".to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 30,
            log_file: None,
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".cleancards.conf"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".cleancards.conf"))
        }
    }

    /// Load configuration.
    ///
    /// An explicit path must exist; the default path is optional. The API
    /// key falls back to the environment when the file leaves it unset.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();

        match explicit {
            Some(path) => {
                let contents = fs::read_to_string(path)?;
                config.apply(&Self::parse(&contents))?;
                debug!(path = %path.display(), "loaded config");
            }
            None => {
                if let Some(path) = Self::config_path() {
                    if let Ok(contents) = fs::read_to_string(&path) {
                        config.apply(&Self::parse(&contents))?;
                        debug!(path = %path.display(), "loaded config");
                    }
                }
            }
        }

        if config.api_key.is_none() {
            config.api_key = API_KEY_VARS
                .iter()
                .filter_map(|var| std::env::var(var).ok())
                .find(|value| !value.trim().is_empty());
        }

        Ok(config)
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parse config file contents into key-value pairs
    fn parse(contents: &str) -> HashMap<String, String> {
        let mut settings = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse key = value
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_lowercase();
                let value = value.trim().to_string();
                settings.insert(key, value);
            }
        }

        settings
    }

    /// Apply settings from parsed config
    fn apply(&mut self, settings: &HashMap<String, String>) -> Result<()> {
        if let Some(value) = settings.get("line-numbers") {
            self.show_line_numbers = parse_bool(value);
        }

        if let Some(value) = non_empty(settings, "language") {
            self.language = value.to_lowercase();
        }

        if let Some(value) = non_empty(settings, "api-key") {
            self.api_key = Some(value.to_string());
        }

        if let Some(value) = non_empty(settings, "model") {
            self.model = value.to_string();
        }

        if let Some(value) = non_empty(settings, "endpoint") {
            self.endpoint = value.to_string();
        }

        if let Some(value) = settings.get("timeout") {
            let secs = value.parse::<u64>().map_err(|_| CardsError::InvalidConfig {
                key: "timeout".to_string(),
                value: value.clone(),
            })?;
            self.timeout_secs = secs.clamp(1, 300);
        }

        if let Some(value) = non_empty(settings, "log-file") {
            self.log_file = Some(PathBuf::from(value));
        }

        Ok(())
    }
}

fn non_empty<'a>(settings: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    settings
        .get(key)
        .map(|v| v.as_str())
        .filter(|v| !v.is_empty())
}

/// Parse a boolean value from string
fn parse_bool(s: &str) -> bool {
    let s = s.to_lowercase();
    matches!(s.as_str(), "true" | "yes" | "on" | "1")
}
