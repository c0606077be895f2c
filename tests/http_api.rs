//! End-to-end checks against a live listener.
//!
//! Each test binds the full application to an ephemeral port and talks to it
//! over HTTP, so middleware (CORS, fallback, envelopes) is exercised exactly
//! as a client sees it.

#![allow(clippy::panic, clippy::indexing_slicing)]

use std::net::SocketAddr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use aw3_mock_api::api::build_app;
use aw3_mock_api::app_state::AppState;
use aw3_mock_api::domain::FixtureStore;
use aw3_mock_api::service::MarketplaceService;

async fn spawn_server() -> SocketAddr {
    let service = MarketplaceService::new(Arc::new(FixtureStore::new()), Some(1));
    let app = build_app(AppState::new(service));
    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        panic!("bind ephemeral port");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("listener has an address");
    };
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            panic!("server failed: {e}");
        }
    });
    addr
}

async fn get(addr: SocketAddr, path: &str) -> (u16, Value) {
    let Ok(response) = reqwest::get(format!("http://{addr}{path}")).await else {
        panic!("GET {path}");
    };
    let status = response.status().as_u16();
    let Ok(body) = response.json::<Value>().await else {
        panic!("GET {path} returns JSON");
    };
    (status, body)
}

async fn post(addr: SocketAddr, path: &str, body: &Value) -> (u16, Value) {
    let Ok(response) = reqwest::Client::new()
        .post(format!("http://{addr}{path}"))
        .json(body)
        .send()
        .await
    else {
        panic!("POST {path}");
    };
    let status = response.status().as_u16();
    let Ok(body) = response.json::<Value>().await else {
        panic!("POST {path} returns JSON");
    };
    (status, body)
}

fn assert_recent(timestamp: &Value) {
    let Some(raw) = timestamp.as_str() else {
        panic!("timestamp is a string");
    };
    let Ok(at) = DateTime::parse_from_rfc3339(raw) else {
        panic!("timestamp {raw} is ISO-8601");
    };
    let skew = Utc::now().signed_duration_since(at.with_timezone(&Utc));
    assert!(skew.num_seconds().abs() < 10, "stale timestamp {raw}");
}

#[tokio::test]
async fn success_envelope_on_every_listing() {
    let addr = spawn_server().await;
    for path in [
        "/api/creator/campaigns",
        "/api/dashboard/trending",
        "/api/project/campaigns",
        "/api/project/applications",
        "/api/project/creators/discover",
        "/api/enums",
    ] {
        let (status, body) = get(addr, path).await;
        assert_eq!(status, 200, "{path}");
        assert_eq!(body["success"], true, "{path}");
        assert!(body.get("data").is_some(), "{path}");
        assert!(body.get("error").is_none(), "{path}");
        assert_recent(&body["timestamp"]);
    }
}

#[tokio::test]
async fn unknown_route_names_the_path() {
    let addr = spawn_server().await;
    let (status, body) = get(addr, "/api/creator/wallets").await;
    assert_eq!(status, 404);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(
        body["error"]["message"],
        "Endpoint /api/creator/wallets not found"
    );
    assert!(body.get("data").is_none());
    assert_recent(&body["timestamp"]);
}

#[tokio::test]
async fn creator_campaigns_filter_and_paginate() {
    let addr = spawn_server().await;
    let (status, body) = get(addr, "/api/creator/campaigns?category=1&size=20").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["pagination"]["totalElements"], 1);
    assert_eq!(body["data"]["pagination"]["totalPages"], 1);
    assert_eq!(body["data"]["pagination"]["currentPage"], 0);

    let (_, body) = get(addr, "/api/creator/campaigns?page=abc&size=-3").await;
    assert_eq!(body["data"]["pagination"]["currentPage"], 0);
    assert_eq!(body["data"]["pagination"]["pageSize"], 20);

    let oversized = "/api/creator/campaigns?page=99999999999999&size=1";
    let (_, body) = get(addr, oversized).await;
    let pagination = &body["data"]["pagination"];
    assert_eq!(pagination["currentPage"], u64::from(u32::MAX));
    assert_eq!(body["data"]["campaigns"], json!([]));
}

#[tokio::test]
async fn fee_estimate_without_token_discount() {
    let addr = spawn_server().await;
    let (status, body) = post(
        addr,
        "/api/project/fees/estimate",
        &json!({ "campaignBudget": 5000, "useAW3Token": false }),
    )
    .await;
    assert_eq!(status, 200);
    let quote = &body["data"];
    assert_eq!(quote["serviceFee"], 250.0);
    assert_eq!(quote["oracleFee"], 50.0);
    assert_eq!(quote["totalFee"], 300.0);
    assert_eq!(quote["discount"], 0.0);
    assert_eq!(quote["totalRequired"], 5300.0);

    let (Some(generated), Some(valid)) = (
        quote["generatedAt"].as_str(),
        quote["validUntil"].as_str(),
    ) else {
        panic!("quote carries both timestamps");
    };
    let (Ok(generated), Ok(valid)) = (
        DateTime::parse_from_rfc3339(generated),
        DateTime::parse_from_rfc3339(valid),
    ) else {
        panic!("quote timestamps are ISO-8601");
    };
    assert_eq!(valid.signed_duration_since(generated).num_minutes(), 15);
}

#[tokio::test]
async fn invalid_bodies_are_rejected() {
    let addr = spawn_server().await;
    let (status, body) = post(
        addr,
        "/api/project/fees/estimate",
        &json!({ "campaignBudget": "lots" }),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, body) = post(
        addr,
        "/api/project/fees/estimate",
        &json!({ "campaignBudget": 5000, "complexity": 9 }),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn records_resolve_by_id() {
    let addr = spawn_server().await;
    let (_, list) = get(addr, "/api/project/campaigns").await;
    let Some(id) = list["data"]["campaigns"][0]["campaignId"].as_str() else {
        panic!("fixture campaign has an id");
    };

    let (status, body) = get(addr, &format!("/api/project/campaigns/{id}")).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["campaignId"], id);

    let (status, body) = get(addr, "/api/project/campaigns/no-such-campaign").await;
    assert_eq!(status, 404);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let addr = spawn_server().await;
    let (status, body) = get(addr, "/swagger.json").await;
    assert_eq!(status, 200);
    assert_eq!(body["info"]["title"], "AW3 Platform Mock API");
    assert!(body["paths"]["/api/project/fees/estimate"].is_object());

    let Ok(response) = reqwest::get(format!("http://{addr}/swagger.yaml")).await else {
        panic!("GET /swagger.yaml");
    };
    assert_eq!(response.status().as_u16(), 200);
    let Ok(text) = response.text().await else {
        panic!("yaml body");
    };
    assert!(text.contains("openapi:"));
}
