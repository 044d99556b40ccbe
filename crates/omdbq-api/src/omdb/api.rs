//! `OmdbApi` trait definition.
#![allow(clippy::future_not_send)]

use serde_json::Value;

use super::error::OmdbError;
use super::params::{LookupParams, SearchParams};

/// OMDB API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(OmdbApi: Send)]
pub trait LocalOmdbApi {
    /// Fetches a single item by IMDb id or exact title.
    ///
    /// The decoded JSON body is returned verbatim; API-level failure flags
    /// embedded in the body (e.g. `"Response": "False"`) are left to the
    /// caller to interpret.
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, the HTTP request, or JSON
    /// decoding fails.
    async fn lookup_movie(&self, params: &LookupParams) -> Result<Value, OmdbError>;

    /// Searches for items matching a free-text query.
    ///
    /// The decoded JSON body is returned verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, the HTTP request, or JSON
    /// decoding fails.
    async fn search_movies(&self, params: &SearchParams) -> Result<Value, OmdbError>;
}
