//! Error types for the contentcal ecosystem.

use thiserror::Error;

/// Errors that can occur in contentcal operations.
#[derive(Error, Debug)]
pub enum CalError {
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Provider '{0}' not found in PATH")]
    ProviderNotInstalled(String),

    #[error("Provider request timed out after {0}s")]
    ProviderTimeout(u64),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for contentcal operations.
pub type CalResult<T> = Result<T, CalError>;
