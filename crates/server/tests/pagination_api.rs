use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use configs::PaginationConfig;
use server::routes::{build_router, ServerState};
use server::store::ArticleStore;

struct TestApp {
    base_url: String,
}

async fn start_app(seed: u64) -> TestApp {
    let pagination = PaginationConfig {
        seed_articles: seed,
        ..PaginationConfig::default()
    };
    let state = ServerState {
        store: Arc::new(ArticleStore::seeded(seed).await),
        pagination,
    };
    let app: Router = build_router(state, CorsLayer::very_permissive());

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0))
        .await
        .expect("bind test listener");
    let addr: SocketAddr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("test server error: {}", e);
        }
    });

    TestApp { base_url: format!("http://{}:{}", addr.ip(), addr.port()) }
}

async fn get_json(url: &str) -> Value {
    reqwest::get(url)
        .await
        .expect("request")
        .json::<Value>()
        .await
        .expect("json body")
}

#[tokio::test]
async fn health_is_public() {
    let app = start_app(0).await;
    let body = get_json(&format!("{}/health", app.base_url)).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn first_page_with_defaults() {
    let app = start_app(25).await;
    let body = get_json(&format!("{}/articles", app.base_url)).await;

    assert_eq!(body["total"], 25);
    assert_eq!(body["per_page"], 10);
    assert_eq!(body["current_page"], 1);
    assert_eq!(body["last_page"], 3);
    assert_eq!(body["from"], 1);
    assert_eq!(body["to"], 10);
    assert_eq!(body["data"].as_array().unwrap().len(), 10);
    assert_eq!(body["prev_page_url"], "");
    assert_eq!(
        body["next_page_url"],
        format!("{}/articles?page=2&per_page=10", app.base_url)
    );
    assert_eq!(
        body["first_page_url"],
        format!("{}/articles?page=1&per_page=10", app.base_url)
    );
    assert_eq!(body["path"], format!("{}/articles", app.base_url));
}

#[tokio::test]
async fn middle_page_boundaries_and_links() {
    let app = start_app(25).await;
    let body = get_json(&format!("{}/articles?page=2&per_page=10", app.base_url)).await;

    assert_eq!(body["current_page"], 2);
    assert_eq!(body["from"], 11);
    assert_eq!(body["to"], 20);
    assert_eq!(body["last_page"], 3);
    assert_eq!(
        body["prev_page_url"],
        format!("{}/articles?page=1&per_page=10", app.base_url)
    );
    assert_eq!(
        body["next_page_url"],
        format!("{}/articles?page=3&per_page=10", app.base_url)
    );
    assert_eq!(
        body["last_page_url"],
        format!("{}/articles?page=3&per_page=10", app.base_url)
    );
    let first = &body["data"].as_array().unwrap()[0];
    assert_eq!(first["title"], "Article #11");
}

#[tokio::test]
async fn malformed_params_fall_back_to_defaults() {
    let app = start_app(25).await;
    let body = get_json(&format!(
        "{}/articles?page=abc&per_page=-5",
        app.base_url
    ))
    .await;

    assert_eq!(body["current_page"], 1);
    assert_eq!(body["per_page"], 10);
    assert_eq!(body["from"], 1);
    assert_eq!(body["to"], 10);
}

#[tokio::test]
async fn foreign_query_params_survive_in_links() {
    let app = start_app(25).await;
    let body = get_json(&format!("{}/articles?q=hello&page=2", app.base_url)).await;

    assert_eq!(
        body["next_page_url"],
        format!("{}/articles?q=hello&page=3&per_page=10", app.base_url)
    );
    assert_eq!(body["path"], format!("{}/articles", app.base_url));
}

#[tokio::test]
async fn empty_collection_case() {
    let app = start_app(0).await;
    let body = get_json(&format!("{}/articles?page=7&per_page=50", app.base_url)).await;

    assert_eq!(body["total"], 0);
    assert_eq!(body["current_page"], 1);
    assert_eq!(body["last_page"], 1);
    assert_eq!(body["from"], 0);
    assert_eq!(body["to"], 0);
    assert!(body["data"].as_array().unwrap().is_empty());
    assert_eq!(body["last_page_url"], "");
    assert_eq!(body["next_page_url"], "");
    assert_eq!(body["prev_page_url"], "");
    assert_eq!(
        body["first_page_url"],
        format!("{}/articles?page=1&per_page=50", app.base_url)
    );
}

#[tokio::test]
async fn summaries_drop_internal_fields_but_keep_metadata() {
    let app = start_app(12).await;
    let full = get_json(&format!("{}/articles?per_page=5", app.base_url)).await;
    let summaries =
        get_json(&format!("{}/articles/summaries?per_page=5", app.base_url)).await;

    assert_eq!(summaries["total"], full["total"]);
    assert_eq!(summaries["last_page"], full["last_page"]);
    assert_eq!(summaries["from"], full["from"]);
    assert_eq!(summaries["to"], full["to"]);

    let item = &summaries["data"].as_array().unwrap()[0];
    assert!(item.get("title").is_some());
    assert!(item.get("body").is_none());
    assert!(item.get("review_notes").is_none());
    assert_eq!(item["id"], full["data"][0]["id"]);
}

#[tokio::test]
async fn created_articles_append_to_the_last_page() {
    let app = start_app(10).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/articles", app.base_url))
        .json(&json!({"title": "Fresh", "body": "text"}))
        .send()
        .await
        .expect("create request");
    assert_eq!(res.status(), reqwest::StatusCode::CREATED);

    let body = get_json(&format!("{}/articles?page=2&per_page=10", app.base_url)).await;
    assert_eq!(body["total"], 11);
    assert_eq!(body["from"], 11);
    assert_eq!(body["to"], 11);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["title"], "Fresh");
}

#[tokio::test]
async fn create_rejects_blank_title() {
    let app = start_app(0).await;
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/articles", app.base_url))
        .json(&json!({"title": "  ", "body": "text"}))
        .send()
        .await
        .expect("create request");
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await.expect("error body");
    assert_eq!(body["error"], "Validation Error");
}
