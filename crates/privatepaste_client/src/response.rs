//! Interpretation of the service's (un-followed) redirect response.

use crate::error::PasteError;
use privatepaste_core::PasteResult;
use reqwest::header::{HeaderMap, LOCATION};
use reqwest::StatusCode;

/// Build a [`PasteResult`] from the status and headers of a save response.
///
/// The status is reported as-is; deciding whether it means success is left
/// to the caller.
///
/// # Errors
/// Returns [`PasteError::MalformedResponse`] when the `Location` header is
/// missing, empty, or not visible ASCII.
pub fn paste_result_from_parts(
    origin: &str,
    status: StatusCode,
    headers: &HeaderMap,
) -> Result<PasteResult, PasteError> {
    let location = headers.get(LOCATION).ok_or_else(|| {
        PasteError::MalformedResponse(format!("no Location header in {} response", status))
    })?;
    let location = location.to_str().map_err(|_| {
        PasteError::MalformedResponse("Location header is not valid text".to_string())
    })?;
    if location.is_empty() {
        return Err(PasteError::MalformedResponse(format!(
            "empty Location header in {} response",
            status
        )));
    }
    Ok(PasteResult::from_location(origin, location, status.as_u16()))
}
