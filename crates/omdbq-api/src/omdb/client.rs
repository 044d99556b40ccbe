//! `OmdbClient` - OMDB API client implementation.

use reqwest::Client;
use serde_json::Value;
use tracing::instrument;
use url::Url;

use super::api::LocalOmdbApi;
use super::error::OmdbError;
use super::params::{
    LookupParams, SearchParams, WireParams, build_lookup_params, build_search_params,
};

/// Default base URL for the OMDB API.
const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "OMDB_API_KEY";

/// OMDB API client.
///
/// Performs a single GET per operation. No retries, no caching, no
/// interpretation of the response body.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct OmdbClient {
    /// HTTP client (reqwest, gzip enabled).
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// API key attached to every request.
    api_key: String,
}

/// Builder for `OmdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct OmdbClientBuilder {
    base_url: Option<Url>,
    api_key: Option<String>,
    user_agent: Option<String>,
}

impl OmdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            user_agent: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the User-Agent (default: crate name/version).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// The API key is checked here, before any request can be attempted.
    ///
    /// # Errors
    ///
    /// - [`OmdbError::MissingApiKey`] if the API key is unset or blank.
    /// - [`OmdbError::BaseUrl`] if the default base URL fails to parse.
    /// - [`OmdbError::Transport`] if the `reqwest::Client` build fails.
    pub fn build(self) -> Result<OmdbClient, OmdbError> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(OmdbError::MissingApiKey)?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let user_agent = self.user_agent.unwrap_or_else(|| {
            String::from(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
        });

        let http_client = Client::builder().user_agent(&user_agent).gzip(true).build()?;

        Ok(OmdbClient {
            http_client,
            base_url,
            api_key,
        })
    }
}

impl OmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> OmdbClientBuilder {
        OmdbClientBuilder::new()
    }

    /// Sends a GET request with the given query parameters and decodes the
    /// body as JSON. The HTTP status is not interpreted: OMDB reports API
    /// errors inside a JSON body, which is returned to the caller as-is.
    #[instrument(skip_all)]
    async fn get_json(&self, wire: &WireParams) -> Result<Value, OmdbError> {
        tracing::debug!(url = %self.base_url, "OMDB API request");

        let response = self
            .http_client
            .get(self.base_url.clone())
            .query(wire)
            .send()
            .await?;

        let body = response.text().await?;
        let value = serde_json::from_str(&body)?;
        Ok(value)
    }
}

impl LocalOmdbApi for OmdbClient {
    #[instrument(skip_all)]
    async fn lookup_movie(&self, params: &LookupParams) -> Result<Value, OmdbError> {
        let wire = build_lookup_params(params, &self.api_key)?;
        self.get_json(&wire).await
    }

    #[instrument(skip_all)]
    async fn search_movies(&self, params: &SearchParams) -> Result<Value, OmdbError> {
        let wire = build_search_params(params, &self.api_key)?;
        self.get_json(&wire).await
    }
}
