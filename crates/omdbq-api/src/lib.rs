//! API client library for omdbq.
//!
//! Provides a client for the OMDB (Open Movie Database) API.

/// OMDB API client.
pub mod omdb;
