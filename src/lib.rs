//! Root crate facade for the PrivatePaste upload client.
//!
//! ```no_run
//! use privatepaste::{create_paste, PasteRequestOptions};
//!
//! # async fn run() -> Result<(), privatepaste::PasteError> {
//! let options = PasteRequestOptions::new("fn main() {}")
//!     .formatting("C")
//!     .expires("1 days 12 hours");
//! let paste = create_paste(&options).await?;
//! println!("{} ({})", paste.paste_url, paste.status_code);
//! # Ok(())
//! # }
//! ```

pub use privatepaste_client::{
    client, create_paste, request, response, Endpoint, PasteClient, PasteError, PasteForm,
    PreparedPaste,
};
pub use privatepaste_core::{
    config, constants, duration, expiration_modifier, formatting, is_known_formatting, models,
    normalize_formatting, parse_duration, Config, ExpirationError, PasteRequestOptions,
    PasteResult, EXPIRATION_MODIFIERS, FORMATTINGS, NO_FORMATTING,
};
