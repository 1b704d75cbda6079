//! Offset/limit pagination over an ordered, countable data source.
//! - Normalizes raw `page`/`per_page` request input into valid parameters.
//! - Computes the offset window, total page count and 1-based item range.
//! - Derives absolute first/last/next/prev navigation links for API clients.
//!
//! The data access side is abstracted behind [`PageSource`]; anything that
//! can count itself and materialize an offset/limit window can be paginated.
//! The caller must guarantee the underlying ordering is deterministic.

pub mod errors;
pub mod links;
pub mod list;
pub mod page;
pub mod params;
pub mod source;

#[cfg(feature = "seaorm")]
pub mod seaorm;

pub use errors::{PaginateError, QueryError};
pub use links::PageUrls;
pub use list::PaginatedList;
pub use page::{paginate, paginate_mapped};
pub use params::PageParams;
pub use source::{PageSource, VecSource};
