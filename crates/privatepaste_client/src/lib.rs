//! Upload client for the PrivatePaste service.
//!
//! Pastes are posted as a form to `/save`; the service answers with a redirect
//! whose `Location` names the new paste. Redirects are never followed so that
//! header can be read directly.

/// Reusable upload client.
pub mod client;
/// Upload error types.
pub mod error;
/// Endpoint and form construction.
pub mod request;
/// Save-response interpretation.
pub mod response;

pub use client::PasteClient;
pub use error::PasteError;
pub use request::{Endpoint, PasteForm, PreparedPaste};

use privatepaste_core::{PasteRequestOptions, PasteResult};

/// Upload a single paste with environment configuration.
///
/// The HTTP client is created for this call and released when it returns,
/// whether or not the upload succeeded.
///
/// # Errors
/// See [`PasteClient::create_paste`].
pub async fn create_paste(options: &PasteRequestOptions) -> Result<PasteResult, PasteError> {
    let client = PasteClient::from_env()?;
    client.create_paste(options).await
}
