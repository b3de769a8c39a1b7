//! HTTP mapping tests: routes assembled over the in-memory backend and
//! driven with `tower::ServiceExt::oneshot`, no TCP port involved.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use product_api::{
    common_routes_with_ready, product_routes, AppState, ProductService, SqliteProductRepository,
};
use std::sync::Arc;
use tower::ServiceExt;

async fn build_app() -> Router {
    let repo = SqliteProductRepository::in_memory().await.unwrap();
    let service = ProductService::new(Arc::new(repo));
    let state = AppState { service };
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .nest("/api", product_routes(state))
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_bytes(resp: axum::http::Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(resp: axum::http::Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(resp).await).unwrap()
}

/// Insert a product through the API and return its generated id.
async fn create_widget(app: &Router) -> i64 {
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/product",
            serde_json::json!({"name": "Widget", "price": 9.99, "stock": 5}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await["id"].as_i64().unwrap()
}

#[tokio::test]
async fn list_on_empty_store_returns_200_and_empty_array() {
    let app = build_app().await;
    let resp = app.oneshot(empty_request("GET", "/api/product")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, serde_json::json!([]));
}

#[tokio::test]
async fn get_absent_id_returns_404_with_empty_body() {
    let app = build_app().await;
    let resp = app
        .oneshot(empty_request("GET", "/api/product/99999"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn create_returns_201_with_location_and_populated_id() {
    let app = build_app().await;
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/product",
            serde_json::json!({"name": "Widget", "price": 9.99, "stock": 5}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let location = resp
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let json = body_json(resp).await;
    let id = json["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(location, format!("/api/product/{}", id));
    assert_eq!(json["name"], "Widget");
    assert_eq!(json["price"], 9.99);
    assert_eq!(json["stock"], 5);

    let resp = app.oneshot(empty_request("GET", &location)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn put_with_mismatched_path_and_body_id_returns_400() {
    let app = build_app().await;
    let resp = app
        .oneshot(json_request(
            "PUT",
            "/api/product/2",
            serde_json::json!({"id": 1, "name": "Widget", "price": 9.99, "stock": 5}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn put_on_missing_row_returns_404() {
    let app = build_app().await;
    let resp = app
        .oneshot(json_request(
            "PUT",
            "/api/product/42",
            serde_json::json!({"id": 42, "name": "Widget", "price": 9.99, "stock": 5}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn put_replaces_the_row_and_returns_204() {
    let app = build_app().await;
    let id = create_widget(&app).await;

    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/product/{}", id),
            serde_json::json!({"id": id, "name": "Widget2", "price": 19.99, "stock": 1}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    let resp = app
        .oneshot(empty_request("GET", &format!("/api/product/{}", id)))
        .await
        .unwrap();
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({"id": id, "name": "Widget2", "price": 19.99, "stock": 1})
    );
}

#[tokio::test]
async fn delete_returns_204_then_get_returns_404() {
    let app = build_app().await;
    let id = create_widget(&app).await;

    let resp = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/api/product/{}", id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .clone()
        .oneshot(empty_request("GET", &format!("/api/product/{}", id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app
        .oneshot(empty_request("DELETE", &format!("/api/product/{}", id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_reflects_inserts() {
    let app = build_app().await;
    create_widget(&app).await;
    create_widget(&app).await;

    let resp = app.oneshot(empty_request("GET", "/api/product")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn create_ignores_id_in_the_body() {
    let app = build_app().await;
    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/product",
            serde_json::json!({"id": 777, "name": "Widget", "price": 9.99, "stock": 5}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_json(resp).await["id"], 1);
}

#[tokio::test]
async fn health_and_ready_respond_ok() {
    let app = build_app().await;

    let resp = app.clone().oneshot(empty_request("GET", "/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["status"], "ok");

    let resp = app.oneshot(empty_request("GET", "/ready")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["database"], "ok");
}
