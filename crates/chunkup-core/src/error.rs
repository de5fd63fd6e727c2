//! Error types for the ChunkUp core library.

use thiserror::Error;

/// Core error type for the ChunkUp build tooling.
#[derive(Error, Debug)]
pub enum ChunkupError {
    #[error("Signing error: {0}")]
    Signing(String),

    #[error("Gradle error: {0}")]
    Gradle(String),

    #[error("Project error: {0}")]
    Project(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for ChunkUp operations.
pub type Result<T> = std::result::Result<T, ChunkupError>;
