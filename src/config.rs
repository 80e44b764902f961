use crate::error::{ProxyError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Runtime configuration. Built once at startup and handed to the server
/// through `AppState`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Address the proxy listens on.
    #[serde(default = "default_listen")]
    pub listen: String,
    /// Base URL of the upstream OpenAI-compatible API.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_listen() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_endpoint() -> String {
    "https://api.openai.com/v1".to_string()
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            endpoint: default_endpoint(),
        }
    }
}

impl ProxyConfig {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ProxyError::config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the explicit config file if one was given, otherwise
    /// `completions-proxy.toml` in the current directory if it exists,
    /// otherwise defaults.
    pub fn find_and_load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::load(path);
        }

        let candidate = PathBuf::from("completions-proxy.toml");
        if candidate.exists() {
            tracing::info!(path = %candidate.display(), "Loading config");
            return Self::load(&candidate);
        }

        Ok(Self::default())
    }

    /// Target URL for outbound calls: the endpoint base with any trailing
    /// slash stripped, plus `/chat/completions`.
    #[must_use]
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint.trim_end_matches('/'))
    }
}
