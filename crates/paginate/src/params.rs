//! Request parameter resolution.
//!
//! Pagination parameters are advisory: absent, unparsable, zero or negative
//! input never fails a request, it silently falls back to the defaults.

/// Fallback page when the request carries nothing usable.
pub const DEFAULT_PAGE: u64 = 1;
/// Fallback page size when the request carries nothing usable.
pub const DEFAULT_PER_PAGE: u64 = 10;

/// Resolved pagination parameters. Both fields are always >= 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageParams {
    /// 1-based page index.
    pub page: u64,
    /// Items per page.
    pub per_page: u64,
}

impl PageParams {
    /// Build parameters directly, clamping both values to a minimum of 1.
    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Resolve raw query-string values against caller-supplied defaults.
    ///
    /// A value that is missing, does not parse as an integer, or parses to
    /// something below 1 is replaced by the corresponding default. The
    /// defaults themselves are clamped so a misconfigured default cannot
    /// produce an invalid pair.
    pub fn resolve(
        raw_page: Option<&str>,
        raw_per_page: Option<&str>,
        default_page: u64,
        default_per_page: u64,
    ) -> Self {
        Self {
            page: resolve_one(raw_page, default_page.max(1)),
            per_page: resolve_one(raw_per_page, default_per_page.max(1)),
        }
    }

    /// Resolve with the fixed defaults `(1, 10)`.
    pub fn from_query(raw_page: Option<&str>, raw_per_page: Option<&str>) -> Self {
        Self::resolve(raw_page, raw_per_page, DEFAULT_PAGE, DEFAULT_PER_PAGE)
    }

    /// Zero-based offset of the first item on this page. Saturates instead
    /// of overflowing for absurdly large parameters.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }

    /// Maximum number of items on this page.
    pub fn limit(&self) -> u64 {
        self.per_page
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

fn resolve_one(raw: Option<&str>, default: u64) -> u64 {
    match raw.and_then(|v| v.trim().parse::<i64>().ok()) {
        Some(n) if n >= 1 => n as u64,
        _ => default,
    }
}
