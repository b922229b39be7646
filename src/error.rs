// Error types for crtsearch
//
// Every failure in the identity collection run is terminal. The variants below
// carry enough context for the single top-level handler to report it once.

use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type for the collection pipeline and its collaborators
pub type Result<T> = std::result::Result<T, SearchError>;

/// Kinds of failure a run can end with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ValidationError,
    ConnectivityError,
    SourceError,
    FileCreateFailure,
    ConfigError,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::ValidationError => "ValidationError",
            Self::ConnectivityError => "ConnectivityError",
            Self::SourceError => "SourceError",
            Self::FileCreateFailure => "FileCreateFailure",
            Self::ConfigError => "ConfigError",
        };
        f.write_str(name)
    }
}

/// Main error type for crtsearch operations
#[derive(Debug, Error)]
pub enum SearchError {
    /// Domain input rejected before any query was made
    #[error("{0}")]
    Validation(#[from] crate::security::ValidationError),

    /// Identity source could not be reached or authenticated
    #[error("Connection to {endpoint} failed: {details}")]
    Connectivity { endpoint: String, details: String },

    /// Connection attempt exceeded the configured bound
    #[error("Connection to {endpoint} timed out after {duration:?}")]
    ConnectTimeout { endpoint: String, duration: Duration },

    /// Lookup failed after the connection was established
    #[error("Identity query failed: {details}")]
    Source { details: String },

    /// Lookup exceeded the configured bound
    #[error("Identity query timed out after {duration:?}")]
    QueryTimeout { duration: Duration },

    /// Output directory missing or not writable
    #[error("Output directory is not writable: {}", path.display())]
    OutputDirectory { path: PathBuf },

    /// Output file could not be created, written or persisted
    #[error("Cannot create output file {}: {source}", path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Invalid or unreadable configuration
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// Console or other stream I/O
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl SearchError {
    /// Classify this error into the failure taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::ValidationError,
            Self::Connectivity { .. } | Self::ConnectTimeout { .. } => {
                ErrorKind::ConnectivityError
            }
            Self::Source { .. } | Self::QueryTimeout { .. } => ErrorKind::SourceError,
            Self::OutputDirectory { .. } | Self::FileCreate { .. } | Self::Io { .. } => {
                ErrorKind::FileCreateFailure
            }
            Self::Config { .. } => ErrorKind::ConfigError,
        }
    }

    pub(crate) fn file_create(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileCreate {
            path: path.into(),
            source,
        }
    }
}

impl From<toml::de::Error> for SearchError {
    fn from(err: toml::de::Error) -> Self {
        SearchError::Config {
            message: format!("Failed to parse config: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::security::ValidationError;

    #[test]
    fn test_validation_kind() {
        let err: SearchError = ValidationError::Empty.into();
        assert_eq!(err.kind(), ErrorKind::ValidationError);
    }

    #[test]
    fn test_connect_timeout_is_connectivity() {
        let err = SearchError::ConnectTimeout {
            endpoint: "crt.sh:5432".to_string(),
            duration: Duration::from_secs(10),
        };

        assert_eq!(err.kind(), ErrorKind::ConnectivityError);
        let msg = err.to_string();
        assert!(msg.contains("crt.sh:5432"));
        assert!(msg.contains("timed out"));
    }

    #[test]
    fn test_query_timeout_is_source() {
        let err = SearchError::QueryTimeout {
            duration: Duration::from_secs(600),
        };
        assert_eq!(err.kind(), ErrorKind::SourceError);
    }

    #[test]
    fn test_file_create_chain_preserved() {
        use std::error::Error;

        let err = SearchError::file_create(
            "example.com_identities.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );

        assert_eq!(err.kind(), ErrorKind::FileCreateFailure);
        assert!(err.to_string().contains("example.com_identities.txt"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::FileCreateFailure.to_string(), "FileCreateFailure");
    }
}
