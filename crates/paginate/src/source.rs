use async_trait::async_trait;

use crate::errors::QueryError;

/// Data access abstraction consumed by the page computer.
///
/// Anything that can report its total size and materialize an offset/limit
/// window can be paginated. Implementations must query a deterministically
/// ordered view; this layer performs no sorting of its own.
#[async_trait]
pub trait PageSource: Send + Sync {
    type Item;

    /// Total number of items in the full collection.
    async fn count(&self) -> Result<u64, QueryError>;

    /// Items in `[offset, offset + limit)`, in source order. May return fewer
    /// than `limit` items when the window runs past the end.
    async fn fetch(&self, offset: u64, limit: u64) -> Result<Vec<Self::Item>, QueryError>;
}

/// In-memory source over an owned, already-ordered vector.
#[derive(Debug, Clone, Default)]
pub struct VecSource<T> {
    items: Vec<T>,
}

impl<T> VecSource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl<T> PageSource for VecSource<T>
where
    T: Clone + Send + Sync,
{
    type Item = T;

    async fn count(&self) -> Result<u64, QueryError> {
        Ok(self.items.len() as u64)
    }

    async fn fetch(&self, offset: u64, limit: u64) -> Result<Vec<T>, QueryError> {
        let start = (offset as usize).min(self.items.len());
        let end = start.saturating_add(limit as usize).min(self.items.len());
        Ok(self.items[start..end].to_vec())
    }
}

/// Failing sources for error-path tests.
pub mod mock {
    use super::*;

    /// Source whose count always fails.
    pub struct FailingCount;

    #[async_trait]
    impl PageSource for FailingCount {
        type Item = u64;

        async fn count(&self) -> Result<u64, QueryError> {
            Err(QueryError::db("count unavailable"))
        }

        async fn fetch(&self, _offset: u64, _limit: u64) -> Result<Vec<u64>, QueryError> {
            Ok(Vec::new())
        }
    }

    /// Source that counts fine but fails on fetch.
    pub struct FailingFetch {
        pub total: u64,
    }

    #[async_trait]
    impl PageSource for FailingFetch {
        type Item = u64;

        async fn count(&self) -> Result<u64, QueryError> {
            Ok(self.total)
        }

        async fn fetch(&self, _offset: u64, _limit: u64) -> Result<Vec<u64>, QueryError> {
            Err(QueryError::db("fetch unavailable"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn vec_source_counts_and_slices() {
        let src = VecSource::new((1u64..=25).collect());
        assert_eq!(src.count().await.unwrap(), 25);
        assert_eq!(src.fetch(10, 10).await.unwrap(), (11u64..=20).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn vec_source_short_window_past_the_end() {
        let src = VecSource::new((1u64..=5).collect());
        assert_eq!(src.fetch(3, 10).await.unwrap(), vec![4, 5]);
        assert!(src.fetch(40, 10).await.unwrap().is_empty());
    }
}
