//! The page computer: one count, one windowed fetch, link derivation.

use tracing::debug;

use crate::errors::PaginateError;
use crate::links::PageUrls;
use crate::list::PaginatedList;
use crate::params::PageParams;
use crate::source::PageSource;

/// Compute one page of `source` and the navigation metadata around it.
///
/// The count runs first; an empty collection short-circuits to a canonical
/// page-1 result regardless of the requested page. Otherwise exactly one
/// window of `per_page` items starting at `(page - 1) * per_page` is fetched.
///
/// Pages past the end are neither rejected nor clamped: `current_page` stays
/// the requested page, `data` comes back empty or short, and `from`/`to`
/// keep reflecting the requested arithmetic window (so `to` can drop below
/// `from` past the end). Callers wanting strict bounds must clamp `page`
/// before calling.
pub async fn paginate<S>(
    source: &S,
    params: PageParams,
    urls: &PageUrls,
) -> Result<PaginatedList<S::Item>, PaginateError>
where
    S: PageSource + ?Sized,
{
    let PageParams { page, per_page } = params;
    // Saturating arithmetic: parameters are advisory and can be arbitrarily
    // large, so the window degrades to past-the-end instead of overflowing.
    // The resolver guarantees per_page >= 1; reclamp for hand-built params.
    let per_page = per_page.max(1);
    let prev = page.saturating_sub(1);
    let next = page.saturating_add(1);

    let total = source.count().await.map_err(PaginateError::Count)?;
    if total == 0 {
        debug!(page, per_page, "empty collection, returning canonical first page");
        return Ok(PaginatedList {
            total: 0,
            per_page,
            current_page: 1,
            last_page: 1,
            first_page_url: urls.page_url(1, per_page),
            last_page_url: String::new(),
            next_page_url: String::new(),
            prev_page_url: String::new(),
            path: urls.path(),
            from: 0,
            to: 0,
            data: Vec::new(),
        });
    }

    let from = prev.saturating_mul(per_page).saturating_add(1);
    let to = page.saturating_mul(per_page).min(total);
    let data = source
        .fetch(prev.saturating_mul(per_page), per_page)
        .await
        .map_err(PaginateError::Fetch)?;

    let last_page = (total.saturating_add(per_page - 1) / per_page).max(1);
    debug!(page, per_page, total, last_page, rows = data.len(), "page computed");

    let last_page_url = if last_page <= 1 {
        String::new()
    } else {
        urls.page_url(last_page, per_page)
    };
    let next_page_url = if next > last_page {
        String::new()
    } else {
        urls.page_url(next, per_page)
    };
    let prev_page_url = if prev < 1 {
        String::new()
    } else {
        urls.page_url(prev, per_page)
    };

    Ok(PaginatedList {
        total,
        per_page,
        current_page: page,
        last_page,
        first_page_url: urls.page_url(1, per_page),
        last_page_url,
        next_page_url,
        prev_page_url,
        path: urls.path(),
        from,
        to,
        data,
    })
}

/// [`paginate`], then project every item through `map_fn` (item plus its
/// index within the page). Metadata fields are identical to the unmapped
/// result. Used when the wire representation differs from the fetched type.
pub async fn paginate_mapped<S, V>(
    source: &S,
    params: PageParams,
    urls: &PageUrls,
    map_fn: impl FnMut(S::Item, usize) -> V,
) -> Result<PaginatedList<V>, PaginateError>
where
    S: PageSource + ?Sized,
{
    Ok(paginate(source, params, urls).await?.map(map_fn))
}
