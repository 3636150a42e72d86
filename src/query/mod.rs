//! Query validation
//!
//! A [`Query`] is the only way text enters the pipeline: it is trimmed and
//! guaranteed non-empty, so blank input is turned away before any network I/O.

use std::fmt;
use thiserror::Error;

/// Reasons raw input is not accepted as a query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("query is empty")]
    Empty,
}

/// A trimmed, non-empty search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Validate raw user input
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(QueryError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Query {
    type Error = QueryError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims() {
        let query = Query::parse("  rust async runtimes \n").unwrap();
        assert_eq!(query.as_str(), "rust async runtimes");
        assert_eq!(query.to_string(), "rust async runtimes");
    }

    #[test]
    fn test_blank_input_is_rejected() {
        assert_eq!(Query::parse(""), Err(QueryError::Empty));
        assert_eq!(Query::parse("   "), Err(QueryError::Empty));
        assert_eq!(Query::parse("\t\n"), Err(QueryError::Empty));
        assert!(Query::try_from(" test ").is_ok());
    }
}
