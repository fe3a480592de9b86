mod query;

pub use query::{BackendErrorBody, QueryError};

pub trait IsRetryable {
    fn is_retryable(&self) -> bool;
}
