//! HTTP client wrapper that posts pastes without following redirects.

use crate::error::PasteError;
use crate::request::PreparedPaste;
use crate::response::paste_result_from_parts;
use privatepaste_core::{Config, PasteRequestOptions, PasteResult};
use reqwest::redirect::Policy;

/// Uploads pastes to PrivatePaste.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PasteClient {
    http: reqwest::Client,
    config: Config,
}

impl PasteClient {
    /// Build a client for `config`.
    ///
    /// # Errors
    /// Returns [`PasteError::ClientBuild`] if the HTTP client cannot be created.
    pub fn new(config: Config) -> Result<Self, PasteError> {
        Self::from_builder(config, reqwest::Client::builder())
    }

    /// Build a client from environment configuration (see [`Config::from_env`]).
    pub fn from_env() -> Result<Self, PasteError> {
        Self::new(Config::from_env())
    }

    /// Build a client on top of a caller-prepared `reqwest` builder.
    ///
    /// The redirect policy, timeout and user agent from `config` are always
    /// applied last, so the save response is never followed.
    pub fn from_builder(
        config: Config,
        builder: reqwest::ClientBuilder,
    ) -> Result<Self, PasteError> {
        let http = builder
            .redirect(Policy::none())
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(PasteError::ClientBuild)?;
        Ok(Self { http, config })
    }

    /// Configuration this client was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve endpoint and form for `options` without sending anything.
    pub fn prepare(&self, options: &PasteRequestOptions) -> Result<PreparedPaste, PasteError> {
        PreparedPaste::new(&self.config.base_url, options)
    }

    /// Upload a paste and report where the service put it.
    ///
    /// # Errors
    /// - [`PasteError::Expiration`] / [`PasteError::InvalidSubdomain`] before any I/O.
    /// - [`PasteError::Transport`] for connection failures and timeouts.
    /// - [`PasteError::MalformedResponse`] when no `Location` header comes back.
    pub async fn create_paste(
        &self,
        options: &PasteRequestOptions,
    ) -> Result<PasteResult, PasteError> {
        let prepared = self.prepare(options)?;
        self.send(&prepared).await
    }

    /// Send an already prepared paste.
    pub async fn send(&self, prepared: &PreparedPaste) -> Result<PasteResult, PasteError> {
        tracing::debug!(form = ?prepared.form, "Creating paste");
        tracing::debug!(url = %prepared.endpoint.save_url, "Sending paste");

        let response = self
            .http
            .post(prepared.endpoint.save_url.clone())
            .form(&prepared.form)
            .send()
            .await?;

        let result = paste_result_from_parts(
            &prepared.endpoint.origin,
            response.status(),
            response.headers(),
        )?;
        tracing::debug!(
            status = result.status_code,
            paste_id = %result.paste_id,
            paste_url = %result.paste_url,
            "Received paste response"
        );
        Ok(result)
    }
}
