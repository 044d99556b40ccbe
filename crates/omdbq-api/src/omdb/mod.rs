//! OMDB API client module.
//!
//! Builds validated query parameters for the OMDB endpoint, issues a
//! single GET request, and returns the decoded JSON body verbatim.

mod api;
mod client;
mod error;
mod params;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalOmdbApi, OmdbApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{API_KEY_ENV, OmdbClient, OmdbClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use error::{OmdbError, ValidationError};
pub use params::{
    LookupParams, SearchParams, WireParams, build_lookup_params, build_search_params,
};
