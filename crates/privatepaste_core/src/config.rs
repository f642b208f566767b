//! Configuration loading from environment variables.

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, ENV_BASE_URL, ENV_TIMEOUT,
    ENV_USER_AGENT,
};
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Runtime configuration for the upload client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Scheme and host pastes are posted to; a subdomain is prepended to this host.
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Blank or unparsable values fall back to the defaults.
    ///
    /// # Arguments
    /// - `lookup`: Returns the raw value for an environment key, if set.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            base_url: lookup(ENV_BASE_URL)
                .and_then(non_blank)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            timeout_secs: lookup(ENV_TIMEOUT)
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(defaults.timeout_secs),
            user_agent: lookup(ENV_USER_AGENT)
                .and_then(non_blank)
                .unwrap_or(defaults.user_agent),
        }
    }

    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
