use thiserror::Error;

/// Failure reported by a [`PageSource`](crate::source::PageSource).
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("database error: {0}")]
    Db(String),
    #[error("source error: {0}")]
    Source(String),
}

impl QueryError {
    pub fn db(msg: impl Into<String>) -> Self {
        Self::Db(msg.into())
    }

    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }
}

/// Failure of a single pagination pass. Both variants are terminal: the
/// underlying error is propagated verbatim, no partial result is produced.
#[derive(Debug, Error)]
pub enum PaginateError {
    #[error("count query failed: {0}")]
    Count(#[source] QueryError),
    #[error("fetch query failed: {0}")]
    Fetch(#[source] QueryError),
}
