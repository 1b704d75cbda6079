//! Navigation link derivation from the current request URL.

use url::Url;

const PAGE_PARAM: &str = "page";
const PER_PAGE_PARAM: &str = "per_page";

/// Builds page links off an absolute request URL.
///
/// Every produced link is the original URL with `page` and `per_page`
/// overwritten; all other query parameters survive untouched, so filters and
/// sort options carried in the query string keep working across pages.
#[derive(Debug, Clone)]
pub struct PageUrls {
    url: Url,
}

impl PageUrls {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    /// Absolute URL pointing at `page` with the given page size.
    pub fn page_url(&self, page: u64, per_page: u64) -> String {
        let kept: Vec<(String, String)> = self
            .url
            .query_pairs()
            .filter(|(k, _)| k != PAGE_PARAM && k != PER_PAGE_PARAM)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        let mut target = self.url.clone();
        {
            let mut pairs = target.query_pairs_mut();
            pairs.clear();
            for (k, v) in &kept {
                pairs.append_pair(k, v);
            }
            pairs.append_pair(PAGE_PARAM, &page.to_string());
            pairs.append_pair(PER_PAGE_PARAM, &per_page.to_string());
        }
        target.to_string()
    }

    /// The request URL with the entire query string stripped.
    pub fn path(&self) -> String {
        let mut base = self.url.clone();
        base.set_query(None);
        base.set_fragment(None);
        base.to_string()
    }
}
