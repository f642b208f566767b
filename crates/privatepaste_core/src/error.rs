//! Domain error types for option normalization.
use thiserror::Error;

/// Failure while turning an expiration string into seconds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpirationError {
    #[error("Unidentified expiration modifier \"{0}\"")]
    InvalidExpirationUnit(String),

    #[error("Expiration out of range: \"{0}\"")]
    ExpirationOverflow(String),
}
