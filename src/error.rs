use thiserror::Error;

/// Failure kinds of the reporting pipeline.
///
/// Every kind is fatal to the refresh cycle that raised it; there is no
/// retry policy. `Configuration` is raised before any connection attempt.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid connection parameters.
    #[error("configuration error: {reason}")]
    Configuration { reason: String },

    /// Store unreachable or credentials rejected.
    #[error("connection error: {source}")]
    Connection {
        #[source]
        source: postgres::Error,
    },

    /// A read query could not be executed (missing table, malformed statement)
    /// or a fetched value could not be decoded.
    #[error("query failed ({query}): {source}")]
    Query {
        query: &'static str,
        #[source]
        source: postgres::Error,
    },

    /// A fetched row did not carry exactly the expected number of columns.
    ///
    /// Raised instead of silently truncating or padding when zipping row
    /// values with the fixed column labels.
    #[error("row {row} has {actual} column(s), expected {expected}")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

impl Error {
    pub fn configuration(reason: impl Into<String>) -> Self {
        Error::Configuration {
            reason: reason.into(),
        }
    }

    /// Whether the operator can fix this without touching the store
    /// (environment variables, credentials spelled wrong, and so on).
    pub fn is_user_error(&self) -> bool {
        matches!(self, Error::Configuration { .. })
    }
}
