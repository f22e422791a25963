//! Error types for survey catalog ingestion and querying.
//!
//! [`SurveyError`] covers every failure the catalog engine reports. Parse-level
//! problems (a malformed numeric cell) are *not* errors: they resolve to the
//! `0.0` sentinel in [`crate::numeric`].
//!
//! # Error Categories
//!
//! | Variant | Level | Caller reaction |
//! |---------|-------|-----------------|
//! | [`MissingColumn`](SurveyError::MissingColumn) | schema | skip the row, keep the rest |
//! | [`ExtinctionUnsupported`](SurveyError::ExtinctionUnsupported) | capability | skip correction for that catalog |
//! | [`ServiceUnavailable`](SurveyError::ServiceUnavailable) | service | catalog contributes no rows |
//! | [`MalformedResponse`](SurveyError::MalformedResponse) | service | catalog contributes no rows |
//! | [`InvalidInput`](SurveyError::InvalidInput) | caller | fix the input |
//! | [`Io`](SurveyError::Io) | local I/O | report |
//!
//! # Usage
//!
//! ```
//! use celestial_core::SurveyError;
//!
//! let err = SurveyError::missing_column("AllWISE", "w1mpro");
//! assert!(err.is_recoverable());
//! assert_eq!(err.catalog(), Some("AllWISE"));
//! ```

use thiserror::Error;

/// Unified error type for catalog ingestion, capability checks and queries.
#[derive(Error, Debug)]
pub enum SurveyError {
    /// A column the survey schema requires is absent from the result header.
    #[error("Missing column '{column}' in {catalog} result")]
    MissingColumn { catalog: String, column: String },

    /// Extinction correction requested for a catalog without extinguishable photometry.
    #[error("Extinction correction not supported by {catalog}")]
    ExtinctionUnsupported { catalog: String },

    /// The remote service could not be reached or answered with an error status.
    #[error("{catalog} service unavailable: {message}")]
    ServiceUnavailable { catalog: String, message: String },

    /// The remote service answered, but the body could not be read as a result table.
    #[error("Malformed {catalog} response: {message}")]
    MalformedResponse { catalog: String, message: String },

    /// Caller-supplied input (coordinates, settings, band keys) is invalid.
    #[error("Invalid input for {context}: {message}")]
    InvalidInput { context: String, message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for `Result<T, SurveyError>`.
pub type SurveyResult<T> = Result<T, SurveyError>;

impl SurveyError {
    /// Creates a [`MissingColumn`](Self::MissingColumn) error.
    pub fn missing_column(catalog: &str, column: &str) -> Self {
        Self::MissingColumn {
            catalog: catalog.to_string(),
            column: column.to_string(),
        }
    }

    /// Creates an [`ExtinctionUnsupported`](Self::ExtinctionUnsupported) error.
    pub fn extinction_unsupported(catalog: &str) -> Self {
        Self::ExtinctionUnsupported {
            catalog: catalog.to_string(),
        }
    }

    /// Creates a [`ServiceUnavailable`](Self::ServiceUnavailable) error.
    pub fn service_unavailable(catalog: &str, message: &str) -> Self {
        Self::ServiceUnavailable {
            catalog: catalog.to_string(),
            message: message.to_string(),
        }
    }

    /// Creates a [`MalformedResponse`](Self::MalformedResponse) error.
    pub fn malformed_response(catalog: &str, message: &str) -> Self {
        Self::MalformedResponse {
            catalog: catalog.to_string(),
            message: message.to_string(),
        }
    }

    /// Creates an [`InvalidInput`](Self::InvalidInput) error.
    pub fn invalid_input(context: &str, message: &str) -> Self {
        Self::InvalidInput {
            context: context.to_string(),
            message: message.to_string(),
        }
    }

    /// Returns `true` when the caller can skip the affected row, catalog or
    /// correction and carry on with the remaining work.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MissingColumn { .. }
                | Self::ExtinctionUnsupported { .. }
                | Self::ServiceUnavailable { .. }
                | Self::MalformedResponse { .. }
        )
    }

    /// Returns `true` for failures reported by the query collaborator.
    pub fn is_service_failure(&self) -> bool {
        matches!(
            self,
            Self::ServiceUnavailable { .. } | Self::MalformedResponse { .. }
        )
    }

    /// The catalog the error refers to, when it refers to one.
    pub fn catalog(&self) -> Option<&str> {
        match self {
            Self::MissingColumn { catalog, .. }
            | Self::ExtinctionUnsupported { catalog }
            | Self::ServiceUnavailable { catalog, .. }
            | Self::MalformedResponse { catalog, .. } => Some(catalog),
            Self::InvalidInput { .. } | Self::Io(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column() {
        let err = SurveyError::missing_column("Gaia DR3", "phot_g_mean_mag");
        assert_eq!(
            err.to_string(),
            "Missing column 'phot_g_mean_mag' in Gaia DR3 result"
        );
        assert_eq!(err.catalog(), Some("Gaia DR3"));
    }

    #[test]
    fn test_extinction_unsupported() {
        let err = SurveyError::extinction_unsupported("MOCA");
        assert!(err.to_string().contains("not supported by MOCA"));
        assert!(!err.is_service_failure());
    }

    #[test]
    fn test_service_errors() {
        let err = SurveyError::service_unavailable("SIMBAD", "HTTP 503");
        assert_eq!(err.to_string(), "SIMBAD service unavailable: HTTP 503");
        assert!(err.is_service_failure());

        let err = SurveyError::malformed_response("2MASS", "VOTable error document");
        assert!(err.to_string().starts_with("Malformed 2MASS response"));
        assert!(err.is_service_failure());
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(SurveyError::missing_column("DES", "ra").is_recoverable());
        assert!(SurveyError::extinction_unsupported("Gaia DR2").is_recoverable());
        assert!(SurveyError::service_unavailable("SDSS", "timeout").is_recoverable());
        assert!(!SurveyError::invalid_input("ra", "not a number").is_recoverable());
    }

    #[test]
    fn test_invalid_input_has_no_catalog() {
        let err = SurveyError::invalid_input("coordinates", "dec out of range");
        assert_eq!(err.catalog(), None);
        assert_eq!(
            err.to_string(),
            "Invalid input for coordinates: dec out of range"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "targets.csv");
        let err: SurveyError = io.into();
        assert!(err.to_string().starts_with("io error"));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<SurveyError>();
        _assert_sync::<SurveyError>();
    }
}
