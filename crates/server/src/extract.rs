//! Request-side glue: lenient pagination query parsing and reconstruction of
//! the absolute request URL that link derivation needs.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::HOST;
use axum::http::request::Parts;
use axum::http::StatusCode;
use paginate::{PageParams, PageUrls};
use serde::Deserialize;
use url::Url;

/// Raw `page`/`per_page` query values.
///
/// Both fields deserialize as optional strings so a malformed value can never
/// reject the request; resolution decides what to do with garbage.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl PageQuery {
    /// Resolve with the fixed `(1, 10)` defaults.
    pub fn resolve(&self) -> PageParams {
        PageParams::from_query(self.page.as_deref(), self.per_page.as_deref())
    }

    /// Resolve against configured defaults.
    pub fn resolve_with(&self, default_page: u64, default_per_page: u64) -> PageParams {
        PageParams::resolve(
            self.page.as_deref(),
            self.per_page.as_deref(),
            default_page,
            default_per_page,
        )
    }
}

/// The absolute URL of the current request, including its query string.
///
/// Scheme comes from `x-forwarded-proto` when a proxy sets it, else `http`;
/// authority from the `Host` header.
#[derive(Debug, Clone)]
pub struct RequestUrl(pub Url);

impl RequestUrl {
    pub fn into_page_urls(self) -> PageUrls {
        PageUrls::new(self.0)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestUrl
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let scheme = parts
            .headers
            .get("x-forwarded-proto")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("http");
        let host = parts
            .headers
            .get(HOST)
            .and_then(|v| v.to_str().ok())
            .or_else(|| parts.uri.host())
            .unwrap_or("localhost");
        let path_and_query = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");

        Url::parse(&format!("{scheme}://{host}{path_and_query}"))
            .map(RequestUrl)
            .map_err(|_| (StatusCode::BAD_REQUEST, "invalid request URL"))
    }
}
