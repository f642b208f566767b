//! Outbound request shaping: target endpoint and form body.

use crate::error::PasteError;
use privatepaste_core::{normalize_formatting, parse_duration, PasteRequestOptions, SAVE_PATH};
use reqwest::Url;
use serde::Serialize;
use std::fmt;

const ON: &str = "on";
const OFF: &str = "off";

fn on_off(flag: bool) -> &'static str {
    if flag {
        ON
    } else {
        OFF
    }
}

/// Form fields posted to the save endpoint, named as the service expects them.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct PasteForm {
    pub paste_content: String,
    pub formatting: String,
    pub line_numbers: &'static str,
    pub expire: String,
    pub secure_paste: &'static str,
    pub secure_paste_key: String,
}

impl PasteForm {
    /// Normalize caller options into wire fields.
    ///
    /// # Errors
    /// Returns [`PasteError::Expiration`] when `options.expires` does not parse.
    pub fn from_options(options: &PasteRequestOptions) -> Result<Self, PasteError> {
        let expire = parse_duration(&options.expires)?;
        let password = options.effective_password();
        Ok(Self {
            paste_content: options.content.clone(),
            formatting: normalize_formatting(options.formatting.as_deref()).to_string(),
            line_numbers: on_off(options.line_numbers),
            expire: expire.to_string(),
            secure_paste: on_off(password.is_some()),
            secure_paste_key: password.unwrap_or_default().to_string(),
        })
    }
}

// Keeps the paste password out of logs.
impl fmt::Debug for PasteForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.secure_paste_key.is_empty() {
            ""
        } else {
            "<redacted>"
        };
        f.debug_struct("PasteForm")
            .field("paste_content_len", &self.paste_content.len())
            .field("formatting", &self.formatting)
            .field("line_numbers", &self.line_numbers)
            .field("expire", &self.expire)
            .field("secure_paste", &self.secure_paste)
            .field("secure_paste_key", &key)
            .finish()
    }
}

// Host syntax is left to `Url::set_host`; it silently drops anything after a
// `:`, so a port-like suffix is rejected here.
fn is_valid_subdomain(subdomain: &str) -> bool {
    !subdomain.contains(':') && subdomain.split('.').all(|label| !label.is_empty())
}

/// Where a paste is posted and the origin its URL is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub save_url: Url,
    /// Scheme, host (subdomain included) and non-default port, without a trailing slash.
    pub origin: String,
}

impl Endpoint {
    /// Resolve the save endpoint for `base_url`, prefixing `subdomain` onto its host.
    ///
    /// # Errors
    /// - [`PasteError::InvalidBaseUrl`] when `base_url` is not an absolute URL with a host.
    /// - [`PasteError::InvalidSubdomain`] when `subdomain` cannot form a host name.
    pub fn resolve(base_url: &str, subdomain: Option<&str>) -> Result<Self, PasteError> {
        let mut url = Url::parse(base_url)
            .map_err(|err| PasteError::InvalidBaseUrl(format!("'{}': {}", base_url, err)))?;
        let host = url
            .host_str()
            .map(str::to_string)
            .ok_or_else(|| PasteError::InvalidBaseUrl(format!("'{}' has no host", base_url)))?;

        if let Some(subdomain) = subdomain {
            if !is_valid_subdomain(subdomain) {
                return Err(PasteError::InvalidSubdomain(subdomain.to_string()));
            }
            let prefixed = format!("{}.{}", subdomain, host);
            url.set_host(Some(prefixed.as_str())).map_err(|err| {
                PasteError::InvalidSubdomain(format!("'{}': {}", subdomain, err))
            })?;
        }
        url.set_path(SAVE_PATH);
        url.set_query(None);
        url.set_fragment(None);

        let host = url.host_str().unwrap_or_default();
        let origin = match url.port() {
            Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
            None => format!("{}://{}", url.scheme(), host),
        };
        Ok(Self {
            save_url: url,
            origin,
        })
    }

    /// Host (including any subdomain) requests are sent to.
    pub fn host(&self) -> &str {
        self.save_url.host_str().unwrap_or_default()
    }
}

/// A fully resolved upload, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedPaste {
    pub endpoint: Endpoint,
    pub form: PasteForm,
}

impl PreparedPaste {
    /// Resolve `options` against `base_url` without performing any I/O.
    pub fn new(base_url: &str, options: &PasteRequestOptions) -> Result<Self, PasteError> {
        let form = PasteForm::from_options(options)?;
        let endpoint = Endpoint::resolve(base_url, options.effective_subdomain())?;
        Ok(Self { endpoint, form })
    }
}
