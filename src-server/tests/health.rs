use axum::{
    body::{to_bytes, Body},
    http::Request,
};
use ratefeed_server::{api::app_router, config::Config, state::build_state};
use tower::ServiceExt;

fn test_config() -> Config {
    std::env::set_var("RF_STORE", "memory");
    std::env::set_var("RF_FEED_URL", "http://localhost:9/feed.json");
    Config::from_env()
}

#[tokio::test]
async fn healthz_works() {
    let config = test_config();
    let state = build_state(&config).unwrap();
    let app = app_router(state, &config);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn an_empty_store_yields_an_empty_snapshot() {
    let config = test_config();
    let state = build_state(&config).unwrap();
    let app = app_router(state, &config);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/currencies")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(body, "[]".as_bytes());
}

#[tokio::test]
async fn an_unknown_identifier_yields_an_empty_history() {
    let config = test_config();
    let state = build_state(&config).unwrap();
    let app = app_router(state, &config);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/currencies/JPY")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(body, "[]".as_bytes());
}
