//! Error types for the character core

use thiserror::Error;

/// Character core errors.
///
/// The simulation tick itself never fails; errors only arise when building
/// a controller from a bad configuration.
#[derive(Debug, Error)]
pub enum CharacterError {
    /// Invalid configuration
    #[error("invalid character configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for character operations
pub type Result<T> = std::result::Result<T, CharacterError>;
