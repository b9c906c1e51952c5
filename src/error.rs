use thiserror::Error;

/// Result type alias for placeholder resolution
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Errors that can occur while resolving a date placeholder
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The token is bracketed but matches none of the known placeholder grammars.
    /// The message carries the full supported list so it can be logged as-is.
    #[error("unsupported placeholder '{token}'; supported placeholders are: {supported}")]
    UnsupportedPlaceholder { token: String, supported: String },

    /// A placeholder that presupposes a check-in date was resolved without one
    #[error("placeholder '{token}' requires a reference date, but none was supplied")]
    MissingReferenceDate { token: String },

    /// Calendar arithmetic left the representable date range
    #[error("date arithmetic out of range while resolving '{token}'")]
    DateOutOfRange { token: String },
}

/// Errors that can occur while loading and resolving a fixture file
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse fixture JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A field that must feed the reference-date chain did not resolve to a date
    #[error("field '{field}' resolved to '{value}', which is not a yyyy-MM-dd date")]
    InvalidDate { field: String, value: String },

    #[error("failed to resolve field '{field}'")]
    Resolve {
        field: String,
        #[source]
        source: ResolveError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_placeholder_message() {
        let err = ResolveError::UnsupportedPlaceholder {
            token: "<BOGUS>".to_string(),
            supported: "<TODAY>, <TOMORROW>".to_string(),
        };

        let message = err.to_string();
        assert!(message.contains("<BOGUS>"));
        assert!(message.contains("<TODAY>, <TOMORROW>"));
    }

    #[test]
    fn test_missing_reference_date_message() {
        let err = ResolveError::MissingReferenceDate {
            token: "<NEXT_FROM_CHECK_IN_DATE_2_DAY>".to_string(),
        };

        assert!(err.to_string().contains("requires a reference date"));
    }

    #[test]
    fn test_fixture_resolve_error_preserves_source() {
        let err = FixtureError::Resolve {
            field: "checkOutDate".to_string(),
            source: ResolveError::MissingReferenceDate {
                token: "<NEXT_FROM_CHECK_IN_DATE_2_DAY>".to_string(),
            },
        };

        assert!(err.to_string().contains("checkOutDate"));
        let source = std::error::Error::source(&err);
        assert!(source.is_some());
    }
}
