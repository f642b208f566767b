//! Shared constants used across PrivatePaste crates.

/// Default base URL of the PrivatePaste service.
pub const DEFAULT_BASE_URL: &str = "https://privatepaste.com";

/// Path the paste form is posted to.
pub const SAVE_PATH: &str = "/save";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default expiration applied when the caller does not pick one.
pub const DEFAULT_EXPIRES: &str = "1 months";

/// Default `User-Agent` sent with uploads.
pub const DEFAULT_USER_AGENT: &str = concat!("privatepaste/", env!("CARGO_PKG_VERSION"));

/// Environment variable overriding the service base URL.
pub const ENV_BASE_URL: &str = "PRIVATEPASTE_BASE_URL";
/// Environment variable overriding the request timeout (seconds).
pub const ENV_TIMEOUT: &str = "PRIVATEPASTE_TIMEOUT";
/// Environment variable overriding the `User-Agent`.
pub const ENV_USER_AGENT: &str = "PRIVATEPASTE_USER_AGENT";
