//! Paste request options and the result of an upload.

use crate::constants::DEFAULT_EXPIRES;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-supplied options for a single paste upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteRequestOptions {
    pub content: String,
    #[serde(default)]
    pub formatting: Option<String>,
    #[serde(default)]
    pub line_numbers: bool,
    #[serde(default = "default_expires")]
    pub expires: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub subdomain: Option<String>,
}

fn default_expires() -> String {
    DEFAULT_EXPIRES.to_string()
}

impl Default for PasteRequestOptions {
    fn default() -> Self {
        Self {
            content: String::new(),
            formatting: None,
            line_numbers: false,
            expires: default_expires(),
            password: None,
            subdomain: None,
        }
    }
}

impl PasteRequestOptions {
    /// Create options for `content` with every other field at its default.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn formatting(mut self, formatting: impl Into<String>) -> Self {
        self.formatting = Some(formatting.into());
        self
    }

    pub fn line_numbers(mut self, line_numbers: bool) -> Self {
        self.line_numbers = line_numbers;
        self
    }

    pub fn expires(mut self, expires: impl Into<String>) -> Self {
        self.expires = expires.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn subdomain(mut self, subdomain: impl Into<String>) -> Self {
        self.subdomain = Some(subdomain.into());
        self
    }

    /// Password to protect the paste with; empty strings count as absent.
    pub fn effective_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|password| !password.is_empty())
    }

    /// Subdomain to post to; empty strings count as absent.
    pub fn effective_subdomain(&self) -> Option<&str> {
        self.subdomain
            .as_deref()
            .filter(|subdomain| !subdomain.is_empty())
    }
}

/// URL, identifier and HTTP status of an uploaded paste.
///
/// Two results are equal (and hash the same) when all three fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PasteResult {
    pub paste_url: String,
    pub paste_id: String,
    pub status_code: u16,
}

impl PasteResult {
    /// Build a result from the redirect `location` returned for `origin`.
    ///
    /// # Arguments
    /// - `origin`: Scheme and host the paste was posted to, e.g. `https://privatepaste.com`.
    /// - `location`: Raw `Location` header value, e.g. `/AbC123`.
    /// - `status_code`: Status of the un-followed response.
    ///
    /// # Returns
    /// A [`PasteResult`] whose id is `location` without one leading slash.
    pub fn from_location(origin: &str, location: &str, status_code: u16) -> Self {
        let paste_id = location.strip_prefix('/').unwrap_or(location);
        Self {
            paste_url: format!("{}{}", origin, location),
            paste_id: paste_id.to_string(),
            status_code,
        }
    }
}

impl fmt::Display for PasteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.paste_url)
    }
}
