//! Error types for the proxy.

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ProxyError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to decode request body: {message}")]
    Decode { message: String },

    #[error("Failed to encode upstream request: {message}")]
    Encode { message: String },

    #[error("Failed to build upstream request: {message}")]
    UpstreamRequest { message: String },

    #[error("Failed to reach upstream: {message}")]
    UpstreamConnect { message: String },

    #[error("Failed to read upstream response: {message}")]
    UpstreamRead { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ProxyError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode {
            message: msg.into(),
        }
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode {
            message: msg.into(),
        }
    }

    pub fn upstream_request(msg: impl Into<String>) -> Self {
        Self::UpstreamRequest {
            message: msg.into(),
        }
    }

    pub fn upstream_connect(msg: impl Into<String>) -> Self {
        Self::UpstreamConnect {
            message: msg.into(),
        }
    }

    pub fn upstream_read(msg: impl Into<String>) -> Self {
        Self::UpstreamRead {
            message: msg.into(),
        }
    }

    /// HTTP status a request-path failure maps to. Only malformed input is
    /// the caller's fault; everything else is an internal failure.
    #[must_use]
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Decode { .. } => 400,
            _ => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProxyError>;
