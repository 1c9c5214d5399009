//! Error types for the catalog crate.
//!
//! Every failing operation on content, subscribers or the repositories
//! surfaces one of these variants to the caller. Lookups that find nothing
//! are not errors; they return `None`.

use thiserror::Error;

/// Errors raised by catalog entities and repositories
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// A content entry with the same title is already stored
    #[error("Content with title '{title}' already exists")]
    DuplicateTitle { title: String },

    /// A subscriber with the same email is already stored
    #[error("Subscriber with email '{email}' already exists")]
    DuplicateEmail { email: String },

    /// The repository holds as many entries as it was created for
    #[error("Repository is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// Season or episode slot lies outside the declared grid
    #[error("Invalid episode index: season {season}, slot {slot:?} (grid is {seasons} x {slots})")]
    InvalidIndex {
        season: usize,
        slot: Option<usize>,
        seasons: usize,
        slots: usize,
    },

    /// No episode at the requested position or with the requested title
    #[error("Episode not found in season {season}: {detail}")]
    EpisodeNotFound { season: usize, detail: String },

    /// A constructor or mutator argument failed validation
    #[error("Invalid value for {field}: {reason}")]
    InvalidArgument { field: String, reason: String },
}

impl CatalogError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        CatalogError::InvalidArgument {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Rejects empty or whitespace-only strings.
pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::invalid(field, "must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("title", "Inception").is_ok());
        let err = require_non_empty("title", "   ").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidArgument { ref field, .. } if field == "title"));
    }

    #[test]
    fn test_error_messages() {
        let err = CatalogError::DuplicateTitle {
            title: "Joker".to_string(),
        };
        assert_eq!(err.to_string(), "Content with title 'Joker' already exists");

        let err = CatalogError::CapacityExceeded { capacity: 2 };
        assert_eq!(err.to_string(), "Repository is full (capacity 2)");
    }
}
