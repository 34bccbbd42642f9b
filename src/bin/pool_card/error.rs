//! Error types for the pool card tool.

use crate::config::ConfigError;

/// Main error type for the pool card tool.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Environment configuration error: {0}")]
    EnvConfig(#[from] envy::Error),

    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(#[from] url::ParseError),

    #[error("Node request failed: {0}")]
    Transport(#[from] alloy::transports::TransportError),
}

pub type Result<T> = std::result::Result<T, Error>;
