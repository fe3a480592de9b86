use serde::Deserialize;
use thiserror::Error as ThisError;

use super::IsRetryable;

/// Structured error body the backend returns alongside a non-2xx status
/// (PostgREST shape).
#[derive(Debug, Clone, Deserialize)]
pub struct BackendErrorBody {
    pub message: String,
    pub code: Option<String>,
    pub details: Option<String>,
    pub hint: Option<String>,
}

/// The single failure shape of the data-access layer. "No rows found" is
/// never an error; accessors represent it as empty/absent success values.
#[derive(Debug, ThisError)]
pub enum QueryError {
    /// The backend rejected or failed the read; carries its message verbatim.
    #[error("backend query error: {}", body.message)]
    Backend { body: BackendErrorBody },

    /// Transport-level failure (DNS, connect, timeouts, etc).
    #[error("HTTP request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response payload did not match the expected row type.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// A single-row accessor matched more than one row.
    #[error("multiple rows matched a single-row query on {table}")]
    MultipleRows { table: &'static str },
}

impl QueryError {
    pub(crate) fn backend(body: BackendErrorBody) -> Self {
        QueryError::Backend { body }
    }

    /// Fallback for upstream failures whose body is not the structured shape.
    pub(crate) fn backend_raw(message: impl Into<String>) -> Self {
        QueryError::Backend {
            body: BackendErrorBody {
                message: message.into(),
                code: None,
                details: None,
                hint: None,
            },
        }
    }
}

impl IsRetryable for QueryError {
    fn is_retryable(&self) -> bool {
        // Only transport faults are worth a retry; a backend-reported error
        // or a schema mismatch will fail identically on the next attempt.
        matches!(self, QueryError::Transport(_))
    }
}
