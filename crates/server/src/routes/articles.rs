use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use paginate::{paginate, paginate_mapped, PaginatedList};

use crate::errors::JsonApiError;
use crate::extract::{PageQuery, RequestUrl};
use crate::routes::ServerState;
use crate::store::{Article, ArticleInput, ArticleSummary};

/// Paginated list of full article records.
pub async fn list_articles(
    State(state): State<ServerState>,
    Query(query): Query<PageQuery>,
    request_url: RequestUrl,
) -> Result<Json<PaginatedList<Article>>, JsonApiError> {
    let params = query.resolve_with(
        state.pagination.default_page,
        state.pagination.default_per_page,
    );
    let urls = request_url.into_page_urls();
    let list = paginate(state.store.as_ref(), params, &urls).await?;
    Ok(Json(list))
}

/// Paginated list of public article projections. Same computation as
/// `list_articles`, with each record mapped down to its summary view.
pub async fn list_article_summaries(
    State(state): State<ServerState>,
    Query(query): Query<PageQuery>,
    request_url: RequestUrl,
) -> Result<Json<PaginatedList<ArticleSummary>>, JsonApiError> {
    let params = query.resolve_with(
        state.pagination.default_page,
        state.pagination.default_per_page,
    );
    let urls = request_url.into_page_urls();
    let list = paginate_mapped(state.store.as_ref(), params, &urls, |article, _idx| {
        ArticleSummary::of(article)
    })
    .await?;
    Ok(Json(list))
}

/// Append a new article. New records land at the end of the pagination order.
pub async fn create_article(
    State(state): State<ServerState>,
    Json(input): Json<ArticleInput>,
) -> Result<(StatusCode, Json<Article>), JsonApiError> {
    if input.title.trim().is_empty() {
        return Err(JsonApiError::new(
            StatusCode::BAD_REQUEST,
            "Validation Error",
            Some("title must not be empty".into()),
        ));
    }
    let article = state.store.create(input).await;
    Ok((StatusCode::CREATED, Json(article)))
}
