use serde::{Deserialize, Serialize};

/// One page of a larger ordered collection, with the metadata an API client
/// needs to navigate: total size, page boundaries, and absolute links.
///
/// Links that are not applicable (no previous page, only one page) are empty
/// strings, never missing fields, so the wire shape is stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedList<T> {
    /// Total number of items across all pages.
    pub total: u64,
    /// Page size used to produce this result.
    pub per_page: u64,
    /// The page that was requested (1-based).
    pub current_page: u64,
    /// Total number of pages, at least 1 even for an empty collection.
    pub last_page: u64,
    /// Absolute URL of page 1. Always set.
    pub first_page_url: String,
    /// Absolute URL of the last page, empty when there is only one page.
    pub last_page_url: String,
    /// Absolute URL of the next page, empty on the last page.
    pub next_page_url: String,
    /// Absolute URL of the previous page, empty on the first page.
    pub prev_page_url: String,
    /// Request base URL without any query string.
    pub path: String,
    /// 1-based index of the first item on this page, 0 when empty.
    pub from: u64,
    /// 1-based index of the last item on this page, 0 when empty.
    pub to: u64,
    /// Items on this page, in source order.
    pub data: Vec<T>,
}

impl<T> PaginatedList<T> {
    /// Project each item into another representation, keeping every metadata
    /// field untouched. The mapper also receives the item's index within the
    /// page, matching the fetch order.
    pub fn map<V>(self, mut f: impl FnMut(T, usize) -> V) -> PaginatedList<V> {
        PaginatedList {
            total: self.total,
            per_page: self.per_page,
            current_page: self.current_page,
            last_page: self.last_page,
            first_page_url: self.first_page_url,
            last_page_url: self.last_page_url,
            next_page_url: self.next_page_url,
            prev_page_url: self.prev_page_url,
            path: self.path,
            from: self.from,
            to: self.to,
            data: self
                .data
                .into_iter()
                .enumerate()
                .map(|(i, item)| f(item, i))
                .collect(),
        }
    }
}
