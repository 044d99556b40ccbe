//! OMDB API request parameter types and builders.

use std::collections::BTreeMap;

use super::error::ValidationError;

/// Accepted values for the `type` wire parameter.
const MEDIA_TYPES: &[&str] = &["movie", "series", "episode"];

/// Inclusive page range accepted by the OMDB search endpoint.
const PAGE_RANGE: std::ops::RangeInclusive<i64> = 1..=100;

/// Canonical query-parameter mapping sent in the HTTP request.
///
/// Key ordering is not semantically significant; keys for absent optional
/// fields are never present.
pub type WireParams = BTreeMap<String, String>;

/// Parameters for a lookup by IMDb id or exact title.
#[derive(Debug, Clone)]
pub struct LookupParams {
    /// Exact title to look up. Ignored when `id` is set.
    pub title: Option<String>,
    /// IMDb id (e.g. `tt1285016`). Takes precedence over `title`.
    pub id: Option<String>,
    /// Year of release filter.
    pub year: Option<String>,
    /// Plot length: `"short"` (default) or `"full"`.
    pub plot: String,
    /// Media type filter: `"movie"`, `"series"`, or `"episode"`.
    pub media_type: Option<String>,
}

impl Default for LookupParams {
    fn default() -> Self {
        Self {
            title: None,
            id: None,
            year: None,
            plot: String::from("short"),
            media_type: None,
        }
    }
}

impl LookupParams {
    /// Creates lookup params for an exact title.
    #[must_use]
    pub fn by_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Creates lookup params for an IMDb id.
    #[must_use]
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Sets the year filter.
    #[must_use]
    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// Sets the plot length.
    #[must_use]
    pub fn plot(mut self, plot: impl Into<String>) -> Self {
        self.plot = plot.into();
        self
    }

    /// Sets the media type filter.
    #[must_use]
    pub fn media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }
}

/// Parameters for a paginated free-text search.
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Free-text search query (required).
    pub query: String,
    /// Year of release filter.
    pub year: Option<String>,
    /// Media type filter: `"movie"`, `"series"`, or `"episode"`.
    pub media_type: Option<String>,
    /// Result page, `1..=100`. Carried as the caller-supplied string so
    /// the builder owns integer parsing. `None` means the API default of 1.
    pub page: Option<String>,
}

impl SearchParams {
    /// Creates search params with the given query.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            year: None,
            media_type: None,
            page: None,
        }
    }

    /// Sets the year filter.
    #[must_use]
    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// Sets the media type filter.
    #[must_use]
    pub fn media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// Sets the result page.
    #[must_use]
    pub fn page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }
}

/// Builds the wire parameters for a lookup request.
///
/// Exactly one of `id`/`title` must be non-blank after trimming; `id`
/// takes precedence and only the `i` key is emitted when it is set.
/// A whitespace-only `year` is dropped rather than rejected. `plot` is
/// passed through without enum validation.
///
/// # Errors
///
/// Returns a [`ValidationError`] if neither identifier is supplied, the
/// supplied identifier is blank, or the media type is not one of
/// `movie`/`series`/`episode`.
pub fn build_lookup_params(
    params: &LookupParams,
    api_key: &str,
) -> Result<WireParams, ValidationError> {
    let mut wire = base_params(api_key);
    wire.insert(String::from("plot"), params.plot.clone());

    if let Some(id) = params.id.as_deref() {
        let id = id.trim();
        if id.is_empty() {
            return Err(ValidationError::EmptyIdentifier);
        }
        wire.insert(String::from("i"), String::from(id));
    } else if let Some(title) = params.title.as_deref() {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        wire.insert(String::from("t"), String::from(title));
    } else {
        return Err(ValidationError::MissingIdentifier);
    }

    insert_year(&mut wire, params.year.as_deref());
    insert_media_type(&mut wire, params.media_type.as_deref())?;

    Ok(wire)
}

/// Builds the wire parameters for a search request.
///
/// # Errors
///
/// Returns a [`ValidationError`] if the query is blank, the media type is
/// invalid, or the page is not an integer in `1..=100`.
pub fn build_search_params(
    params: &SearchParams,
    api_key: &str,
) -> Result<WireParams, ValidationError> {
    let query = params.query.trim();
    if query.is_empty() {
        return Err(ValidationError::EmptySearchQuery);
    }

    let mut wire = base_params(api_key);
    wire.insert(String::from("s"), String::from(query));

    insert_year(&mut wire, params.year.as_deref());
    insert_media_type(&mut wire, params.media_type.as_deref())?;

    if let Some(page) = params.page.as_deref() {
        let page = page.trim();
        let value: i64 = page
            .parse()
            .map_err(|_| ValidationError::InvalidPageFormat(String::from(page)))?;
        if !PAGE_RANGE.contains(&value) {
            return Err(ValidationError::PageOutOfRange(value));
        }
        wire.insert(String::from("page"), value.to_string());
    }

    Ok(wire)
}

/// Wire parameters present on every request: response format and API key.
fn base_params(api_key: &str) -> WireParams {
    let mut wire = WireParams::new();
    wire.insert(String::from("r"), String::from("json"));
    wire.insert(String::from("apikey"), String::from(api_key));
    wire
}

/// Inserts the `y` key. A blank year is silently dropped.
fn insert_year(wire: &mut WireParams, year: Option<&str>) {
    if let Some(year) = year {
        let year = year.trim();
        if !year.is_empty() {
            wire.insert(String::from("y"), String::from(year));
        }
    }
}

/// Inserts the `type` key. A blank media type is dropped; any other value
/// outside the accepted set is rejected.
fn insert_media_type(
    wire: &mut WireParams,
    media_type: Option<&str>,
) -> Result<(), ValidationError> {
    if let Some(media_type) = media_type {
        let media_type = media_type.trim().to_lowercase();
        if media_type.is_empty() {
            return Ok(());
        }
        if !MEDIA_TYPES.contains(&media_type.as_str()) {
            return Err(ValidationError::InvalidMediaType(media_type));
        }
        wire.insert(String::from("type"), media_type);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_lookup_by_title() {
        // Arrange
        let params = LookupParams::by_title("The Matrix");

        // Act
        let wire = build_lookup_params(&params, "test_key").unwrap();

        // Assert
        assert_eq!(wire.get("t").map(String::as_str), Some("The Matrix"));
        assert_eq!(wire.get("r").map(String::as_str), Some("json"));
        assert_eq!(wire.get("plot").map(String::as_str), Some("short"));
        assert_eq!(wire.get("apikey").map(String::as_str), Some("test_key"));
        assert!(!wire.contains_key("i"));
        assert!(!wire.contains_key("y"));
        assert!(!wire.contains_key("type"));
    }

    #[test]
    fn test_lookup_title_is_trimmed() {
        // Arrange
        let params = LookupParams::by_title("  Blade Runner  ");

        // Act
        let wire = build_lookup_params(&params, "test_key").unwrap();

        // Assert
        assert_eq!(wire.get("t").map(String::as_str), Some("Blade Runner"));
    }

    #[test]
    fn test_lookup_by_id() {
        // Arrange
        let params = LookupParams::by_id(" tt1285016 ");

        // Act
        let wire = build_lookup_params(&params, "test_key").unwrap();

        // Assert
        assert_eq!(wire.get("i").map(String::as_str), Some("tt1285016"));
        assert!(!wire.contains_key("t"));
    }

    #[test]
    fn test_lookup_id_wins_over_title() {
        // Arrange
        let params = LookupParams {
            title: Some(String::from("The Matrix")),
            id: Some(String::from("tt0133093")),
            ..LookupParams::default()
        };

        // Act
        let wire = build_lookup_params(&params, "test_key").unwrap();

        // Assert
        assert_eq!(wire.get("i").map(String::as_str), Some("tt0133093"));
        assert!(!wire.contains_key("t"));
    }

    #[test]
    fn test_lookup_neither_identifier() {
        // Arrange & Act
        let result = build_lookup_params(&LookupParams::default(), "test_key");

        // Assert
        assert_eq!(result.unwrap_err(), ValidationError::MissingIdentifier);
    }

    #[test]
    fn test_lookup_blank_title() {
        // Arrange & Act
        let result = build_lookup_params(&LookupParams::by_title("   "), "test_key");

        // Assert
        assert_eq!(result.unwrap_err(), ValidationError::EmptyTitle);
    }

    #[test]
    fn test_lookup_blank_id() {
        // Arrange & Act
        let result = build_lookup_params(&LookupParams::by_id("  "), "test_key");

        // Assert
        assert_eq!(result.unwrap_err(), ValidationError::EmptyIdentifier);
    }

    #[test]
    fn test_lookup_blank_id_with_valid_title() {
        // Arrange: an explicitly blank id is an error even when a usable
        // title is also present (id takes precedence).
        let params = LookupParams {
            title: Some(String::from("The Matrix")),
            id: Some(String::from(" ")),
            ..LookupParams::default()
        };

        // Act
        let result = build_lookup_params(&params, "test_key");

        // Assert
        assert_eq!(result.unwrap_err(), ValidationError::EmptyIdentifier);
    }

    #[test]
    fn test_lookup_year_is_trimmed() {
        // Arrange
        let params = LookupParams::by_title("X").year(" 1999 ");

        // Act
        let wire = build_lookup_params(&params, "test_key").unwrap();

        // Assert
        assert_eq!(wire.get("y").map(String::as_str), Some("1999"));
    }

    #[test]
    fn test_lookup_blank_year_is_dropped() {
        // Arrange
        let params = LookupParams::by_title("X").year("   ");

        // Act
        let wire = build_lookup_params(&params, "test_key").unwrap();

        // Assert
        assert!(!wire.contains_key("y"));
    }

    #[test]
    fn test_lookup_plot_full() {
        // Arrange
        let params = LookupParams::by_title("X").plot("full");

        // Act
        let wire = build_lookup_params(&params, "test_key").unwrap();

        // Assert
        assert_eq!(wire.get("plot").map(String::as_str), Some("full"));
    }

    #[test]
    fn test_lookup_plot_is_not_validated() {
        // Arrange: `plot` is passed through as-is, unlike `type`.
        let params = LookupParams::by_title("X").plot("verbose");

        // Act
        let wire = build_lookup_params(&params, "test_key").unwrap();

        // Assert
        assert_eq!(wire.get("plot").map(String::as_str), Some("verbose"));
    }

    #[test]
    fn test_media_type_is_lowercased() {
        // Arrange
        let params = LookupParams::by_title("X").media_type("Series");

        // Act
        let wire = build_lookup_params(&params, "test_key").unwrap();

        // Assert
        assert_eq!(wire.get("type").map(String::as_str), Some("series"));
    }

    #[test]
    fn test_media_type_invalid() {
        // Arrange & Act
        let result = build_lookup_params(
            &LookupParams::by_title("X").media_type("cartoon"),
            "test_key",
        );

        // Assert
        assert_eq!(
            result.unwrap_err(),
            ValidationError::InvalidMediaType(String::from("cartoon")),
        );
    }

    #[test]
    fn test_media_type_blank_is_dropped() {
        // Arrange
        let params = LookupParams::by_title("X").media_type("  ");

        // Act
        let wire = build_lookup_params(&params, "test_key").unwrap();

        // Assert
        assert!(!wire.contains_key("type"));
    }

    #[test]
    fn test_search_basic() {
        // Arrange
        let params = SearchParams::new("Batman");

        // Act
        let wire = build_search_params(&params, "test_key").unwrap();

        // Assert
        assert_eq!(wire.get("s").map(String::as_str), Some("Batman"));
        assert_eq!(wire.get("r").map(String::as_str), Some("json"));
        assert_eq!(wire.get("apikey").map(String::as_str), Some("test_key"));
        assert!(!wire.contains_key("page"));
        assert!(!wire.contains_key("plot"));
    }

    #[test]
    fn test_search_query_is_trimmed() {
        // Arrange
        let params = SearchParams::new("  Batman  ");

        // Act
        let wire = build_search_params(&params, "test_key").unwrap();

        // Assert
        assert_eq!(wire.get("s").map(String::as_str), Some("Batman"));
    }

    #[test]
    fn test_search_blank_query() {
        // Arrange & Act
        let result = build_search_params(&SearchParams::new("   "), "test_key");

        // Assert
        assert_eq!(result.unwrap_err(), ValidationError::EmptySearchQuery);
    }

    #[test]
    fn test_search_empty_query() {
        // Arrange & Act
        let result = build_search_params(&SearchParams::new(""), "test_key");

        // Assert
        assert_eq!(result.unwrap_err(), ValidationError::EmptySearchQuery);
    }

    #[test]
    fn test_search_with_year_and_type() {
        // Arrange
        let params = SearchParams::new("Batman").year("2008").media_type("MOVIE");

        // Act
        let wire = build_search_params(&params, "test_key").unwrap();

        // Assert
        assert_eq!(wire.get("y").map(String::as_str), Some("2008"));
        assert_eq!(wire.get("type").map(String::as_str), Some("movie"));
    }

    #[test]
    fn test_search_page_bounds() {
        // Arrange & Act
        let low = build_search_params(&SearchParams::new("Batman").page("1"), "test_key").unwrap();
        let high =
            build_search_params(&SearchParams::new("Batman").page("100"), "test_key").unwrap();

        // Assert
        assert_eq!(low.get("page").map(String::as_str), Some("1"));
        assert_eq!(high.get("page").map(String::as_str), Some("100"));
    }

    #[test]
    fn test_search_page_zero() {
        // Arrange & Act
        let result = build_search_params(&SearchParams::new("Batman").page("0"), "test_key");

        // Assert
        assert_eq!(result.unwrap_err(), ValidationError::PageOutOfRange(0));
    }

    #[test]
    fn test_search_page_above_range() {
        // Arrange & Act
        let result = build_search_params(&SearchParams::new("Batman").page("101"), "test_key");

        // Assert
        assert_eq!(result.unwrap_err(), ValidationError::PageOutOfRange(101));
    }

    #[test]
    fn test_search_page_negative() {
        // Arrange & Act
        let result = build_search_params(&SearchParams::new("Batman").page("-3"), "test_key");

        // Assert
        assert_eq!(result.unwrap_err(), ValidationError::PageOutOfRange(-3));
    }

    #[test]
    fn test_search_page_not_an_integer() {
        // Arrange & Act
        let result = build_search_params(&SearchParams::new("Batman").page("abc"), "test_key");

        // Assert
        assert_eq!(
            result.unwrap_err(),
            ValidationError::InvalidPageFormat(String::from("abc")),
        );
    }

    #[test]
    fn test_search_page_is_trimmed() {
        // Arrange
        let params = SearchParams::new("Batman").page(" 42 ");

        // Act
        let wire = build_search_params(&params, "test_key").unwrap();

        // Assert
        assert_eq!(wire.get("page").map(String::as_str), Some("42"));
    }

    #[test]
    fn test_builders_are_deterministic() {
        // Arrange
        let params = SearchParams::new("Batman").year("2008").page("2");

        // Act
        let first = build_search_params(&params, "test_key").unwrap();
        let second = build_search_params(&params, "test_key").unwrap();

        // Assert
        assert_eq!(first, second);
    }
}
