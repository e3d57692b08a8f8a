//! HTTP round-trips against the full router, with an in-memory ledger
//! and a scripted reader in place of the hardware.

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use cardtill_server::config::Config;
use cardtill_server::scanner::UidSource;
use cardtill_server::state::AppState;
use cardtill_server::{app, db};

struct ScriptedReader(Option<String>);

impl UidSource for ScriptedReader {
    fn read_uid(&mut self) -> Option<String> {
        self.0.clone()
    }
}

fn test_config() -> Config {
    Config {
        bind_address: "127.0.0.1:0".into(),
        database_url: "sqlite::memory:".into(),
        frontend_origin: "http://localhost:3000".into(),
        reset_pin: 4,
        reader_enabled: false,
    }
}

async fn test_app(reader: Option<ScriptedReader>) -> Router {
    let pool = db::connect("sqlite::memory:").await.unwrap();
    db::migrate(&pool).await.unwrap();

    let scanner = reader.map(|r| Arc::new(Mutex::new(Box::new(r) as Box<dyn UidSource>)));
    app(Arc::new(AppState {
        db: pool,
        config: test_config(),
        scanner,
    }))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn account_body(uid: &str) -> Value {
    json!({
        "uid": uid,
        "last_name": "Martin",
        "first_name": "Ada",
        "address": "12 Elm Street",
    })
}

#[tokio::test]
async fn account_lifecycle() {
    let app = test_app(None).await;

    let (status, body) = send(&app, "POST", "/accounts", Some(account_body("DEADBEEF"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["balance"], json!(0.0));

    let (status, body) = send(&app, "GET", "/accounts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, "GET", "/accounts/DEADBEEF", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["first_name"], "Ada");

    let (status, _) = send(&app, "DELETE", "/accounts/DEADBEEF", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", "/accounts/DEADBEEF", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_card_is_a_conflict() {
    let app = test_app(None).await;

    send(&app, "POST", "/accounts", Some(account_body("12345678"))).await;
    let (status, _) = send(&app, "POST", "/accounts", Some(account_body("12345678"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn delete_unknown_account() {
    let app = test_app(None).await;

    let (status, _) = send(&app, "DELETE", "/accounts/00000000", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn credit_requires_positive_amount() {
    let app = test_app(None).await;
    send(&app, "POST", "/accounts", Some(account_body("12345678"))).await;

    for amount in [0.0, -5.0] {
        let (status, _) = send(
            &app,
            "POST",
            "/accounts/12345678/credit",
            Some(json!({ "amount": amount })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    let (status, body) = send(
        &app,
        "POST",
        "/accounts/12345678/credit",
        Some(json!({ "amount": 12.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["balance"], json!(12.5));
}

#[tokio::test]
async fn credit_unknown_account() {
    let app = test_app(None).await;

    let (status, _) = send(
        &app,
        "POST",
        "/accounts/00000000/credit",
        Some(json!({ "amount": 5.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn purchase_debits_when_funds_allow() {
    let app = test_app(None).await;
    send(&app, "POST", "/accounts", Some(account_body("12345678"))).await;
    send(
        &app,
        "POST",
        "/accounts/12345678/credit",
        Some(json!({ "amount": 10.0 })),
    )
    .await;

    let (status, product) = send(
        &app,
        "POST",
        "/products",
        Some(json!({ "name": "Espresso", "price": 2.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        "POST",
        "/accounts/12345678/purchase",
        Some(json!({ "product_id": product["id"] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["balance"], json!(7.5));
}

#[tokio::test]
async fn purchase_without_funds_leaves_balance_untouched() {
    let app = test_app(None).await;
    send(&app, "POST", "/accounts", Some(account_body("12345678"))).await;
    let (_, product) = send(
        &app,
        "POST",
        "/products",
        Some(json!({ "name": "Espresso", "price": 2.5 })),
    )
    .await;

    let (status, _) = send(
        &app,
        "POST",
        "/accounts/12345678/purchase",
        Some(json!({ "product_id": product["id"] })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = send(&app, "GET", "/accounts/12345678", None).await;
    assert_eq!(body["balance"], json!(0.0));
}

#[tokio::test]
async fn purchase_unknown_product() {
    let app = test_app(None).await;
    send(&app, "POST", "/accounts", Some(account_body("12345678"))).await;

    let (status, _) = send(
        &app,
        "POST",
        "/accounts/12345678/purchase",
        Some(json!({ "product_id": 999 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn purchase_unknown_account() {
    let app = test_app(None).await;
    let (_, product) = send(
        &app,
        "POST",
        "/products",
        Some(json!({ "name": "Espresso", "price": 2.5 })),
    )
    .await;

    let (status, _) = send(
        &app,
        "POST",
        "/accounts/00000000/purchase",
        Some(json!({ "product_id": product["id"] })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn scan_reports_the_card_uid() {
    let app = test_app(Some(ScriptedReader(Some("04A1B2C3".into())))).await;

    let (status, body) = send(&app, "GET", "/scan", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["uid"], "04A1B2C3");
}

#[tokio::test]
async fn scan_with_empty_field() {
    let app = test_app(Some(ScriptedReader(None))).await;

    let (status, _) = send(&app, "GET", "/scan", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn scan_without_reader() {
    let app = test_app(None).await;

    let (status, _) = send(&app, "GET", "/scan", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}
