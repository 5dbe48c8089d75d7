//! Search query value object.
//!
//! Matching is a plain substring test over a service's name and description.
//! There is no ranking beyond popularity ordering.

use crate::error::ValidationError;

/// Maximum number of hits a search returns.
pub const SEARCH_LIMIT: usize = 50;

/// Escape character used in the generated `LIKE` pattern.
pub const LIKE_ESCAPE: char = '\\';

/// A non-empty search string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Validate a raw `q` parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptySearchQuery`] when the parameter is
    /// absent or empty.
    pub fn parse(raw: Option<&str>) -> Result<Self, ValidationError> {
        match raw {
            Some(q) if !q.is_empty() => Ok(Self(q.to_string())),
            _ => Err(ValidationError::EmptySearchQuery),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `LIKE` pattern matching the query as a literal substring.
    ///
    /// `%`, `_` and the escape character itself are escaped with
    /// [`LIKE_ESCAPE`], so the pattern must be used with `ESCAPE '\'`.
    #[must_use]
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for c in self.0.chars() {
            if matches!(c, '%' | '_' | LIKE_ESCAPE) {
                pattern.push(LIKE_ESCAPE);
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}
