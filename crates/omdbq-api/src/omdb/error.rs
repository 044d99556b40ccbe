//! Error types for the OMDB client.

use thiserror::Error;

/// Caller-input validation failure.
///
/// Raised by the parameter builders before any network I/O is attempted.
/// Always recoverable by correcting the input; never retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum ValidationError {
    /// Neither an id nor a title was supplied.
    #[error("either 'title' or 'id' must be provided")]
    MissingIdentifier,

    /// An id was supplied but was empty or whitespace-only.
    #[error("id must be a non-empty string")]
    EmptyIdentifier,

    /// A title was supplied but was empty or whitespace-only.
    #[error("title must be a non-empty string")]
    EmptyTitle,

    /// The search query was empty or whitespace-only.
    #[error("search query must be a non-empty string")]
    EmptySearchQuery,

    /// The media type was not one of the accepted values.
    #[error("media type must be one of: 'movie', 'series', 'episode' (got '{0}')")]
    InvalidMediaType(String),

    /// The page value did not parse as an integer.
    #[error("page must be a valid integer (got '{0}')")]
    InvalidPageFormat(String),

    /// The page value was outside the accepted range.
    #[error("page must be between 1 and 100 (got {0})")]
    PageOutOfRange(i64),
}

/// Any failure surfaced by the OMDB client.
///
/// Validation and configuration errors are raised before the request is
/// sent; transport and decode errors are propagated from the single GET
/// without retry or fallback.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum OmdbError {
    /// Caller-input validation failure.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The API key is not configured.
    #[error("OMDB_API_KEY is not set")]
    MissingApiKey,

    /// The base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    /// The HTTP request failed.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("failed to decode JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}
