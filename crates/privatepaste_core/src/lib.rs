//! Core domain library for the PrivatePaste client (tables, models, config).

/// Configuration loading and defaults.
pub mod config;
/// Shared constants used across PrivatePaste crates.
pub mod constants;
/// Expiration strings and their unit table.
pub mod duration;
/// Domain error types.
pub mod error;
/// Syntax-highlighting names accepted by the service.
pub mod formatting;
/// Request options and upload results.
pub mod models;

pub use config::Config;
pub use constants::*;
pub use duration::{expiration_modifier, parse_duration, EXPIRATION_MODIFIERS};
pub use error::ExpirationError;
pub use formatting::{is_known_formatting, normalize_formatting, FORMATTINGS, NO_FORMATTING};
pub use models::paste::{PasteRequestOptions, PasteResult};
