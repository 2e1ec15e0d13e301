use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, TorqueError};

/// Top-level configuration for the Torque application.
///
/// Loaded from `~/.torque/config.toml` by default. Each section corresponds
/// to one collaborator of the query pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TorqueConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub query: QueryServiceConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
}

impl Default for TorqueConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            query: QueryServiceConfig::default(),
            speech: SpeechConfig::default(),
        }
    }
}

impl TorqueConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TorqueConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| TorqueError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
    /// Print the sample commands panel when starting an interactive session.
    pub show_sample_commands: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_sample_commands: true,
        }
    }
}

/// Query-resolution service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryServiceConfig {
    /// Resolved endpoint URL the dispatcher POSTs queries to.
    pub endpoint_url: String,
    /// Request timeout in seconds for one dispatch round trip.
    pub request_timeout_secs: u64,
}

impl Default for QueryServiceConfig {
    fn default() -> Self {
        Self {
            endpoint_url: "http://localhost:7071/api/query".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Speech capture settings.
///
/// Recognition is an external collaborator; this section only carries the
/// toggles the host application needs. Credentials for a real speech backend
/// live with that backend, never here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// Whether voice input is offered at all.
    pub enabled: bool,
    /// Maximum capture duration in seconds for one utterance.
    pub max_capture_secs: u32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_capture_secs: 30,
        }
    }
}
