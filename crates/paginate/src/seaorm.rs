//! SeaORM adapter: paginate any `Select` without hand-writing a source.
//!
//! ```rust,ignore
//! let source = SelectSource::new(&db, article::Entity::find().order_by_asc(article::Column::Id));
//! let list = paginate(&source, params, &urls).await?;
//! ```
//!
//! The caller must put a deterministic `ORDER BY` on the select; offset
//! pagination over an unordered select returns unstable pages.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QuerySelect, Select};

use crate::errors::QueryError;
use crate::source::PageSource;

/// A `Select` plus the connection to run it on.
#[derive(Debug, Clone)]
pub struct SelectSource<'db, E>
where
    E: EntityTrait,
{
    db: &'db DatabaseConnection,
    select: Select<E>,
}

impl<'db, E> SelectSource<'db, E>
where
    E: EntityTrait,
{
    pub fn new(db: &'db DatabaseConnection, select: Select<E>) -> Self {
        Self { db, select }
    }
}

#[async_trait]
impl<'db, E> PageSource for SelectSource<'db, E>
where
    E: EntityTrait + Send + Sync,
    E::Model: Send + Sync,
{
    type Item = E::Model;

    async fn count(&self) -> Result<u64, QueryError> {
        self.select
            .clone()
            .count(self.db)
            .await
            .map_err(|e| QueryError::db(e.to_string()))
    }

    async fn fetch(&self, offset: u64, limit: u64) -> Result<Vec<E::Model>, QueryError> {
        self.select
            .clone()
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await
            .map_err(|e| QueryError::db(e.to_string()))
    }
}
