//! Error types for paste uploads.
use privatepaste_core::ExpirationError;
use thiserror::Error;

/// Everything that can go wrong while creating a paste.
#[derive(Error, Debug)]
pub enum PasteError {
    #[error("Invalid expiration: {0}")]
    Expiration(#[from] ExpirationError),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid subdomain: {0}")]
    InvalidSubdomain(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}
