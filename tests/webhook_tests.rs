//! Clientes de webhook contra un servidor axum local
mod common;

use std::time::Duration;

use axum::{
    extract::Query,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use reqwest::Client;
use serde_json::{json, Value};
use std::collections::HashMap;

use cargo_search::clients::{AutomationWebhookClient, QuoteWebhookClient, QuoteWebhookParams, WebhookOutcome};
use cargo_search::models::{Provenance, SearchQuery};
use cargo_search::services::quote_service::resolve;

use common::{spawn_server, UNREACHABLE_URL};

fn query() -> SearchQuery {
    SearchQuery {
        origin_port: "SHA".to_string(),
        destination_port: "SVO".to_string(),
        departure_date_from: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
        departure_date_to: NaiveDate::from_ymd_opt(2025, 8, 20).unwrap(),
        container_type: "40ft".to_string(),
        is_dangerous_cargo: false,
        containers_count: 2,
        cargo_weight_kg: None,
        cargo_volume_m3: None,
    }
}

fn params() -> QuoteWebhookParams {
    QuoteWebhookParams {
        from: "Shanghai".to_string(),
        to: "Moscow".to_string(),
        container_size: "40".to_string(),
        date_from: "2025-08-01".to_string(),
        date_to: "2025-08-20".to_string(),
    }
}

fn client(timeout: Duration) -> QuoteWebhookClient {
    QuoteWebhookClient::new(Client::new(), timeout)
}

#[tokio::test]
async fn test_webhook_receives_translated_params() {
    let router = Router::new().route(
        "/search",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            Json(json!({
                "result": [{
                    "id": format!("{}-{}", params["from"], params["to"]),
                    "carrier": "Eurasia Rail",
                    "TT": params["container_size"].parse::<i64>().unwrap(),
                    "price": params["date_from"].len() * 100,
                }]
            }))
        }),
    );
    let base = spawn_server(router).await;

    let outcome = client(Duration::from_secs(5))
        .fetch(&format!("{}/search", base), &params(), &query())
        .await;

    let quotes = match outcome {
        WebhookOutcome::Success(quotes) => quotes,
        other => panic!("unexpected outcome: {:?}", other),
    };
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].id, "Shanghai-Moscow");
    assert_eq!(quotes[0].carrier, "Eurasia Rail");
    assert_eq!(quotes[0].transit_time_days, 40);
    assert_eq!(quotes[0].price_from_usd, 1000.0);
    assert_eq!(quotes[0].provenance, Provenance::Webhook);
}

#[tokio::test]
async fn test_non_200_status_falls_back() {
    let router = Router::new().route("/search", get(|| async { StatusCode::BAD_GATEWAY }));
    let base = spawn_server(router).await;

    let outcome = client(Duration::from_secs(5))
        .fetch(&format!("{}/search", base), &params(), &query())
        .await;
    assert_eq!(outcome, WebhookOutcome::HttpStatus(502));

    let quotes = resolve(outcome, &query());
    assert_eq!(quotes.len(), 3);
    assert!(quotes.iter().all(|q| q.provenance == Provenance::Fallback));
}

#[tokio::test]
async fn test_empty_result_falls_back() {
    let router = Router::new().route("/search", get(|| async { Json(json!({"result": []})) }));
    let base = spawn_server(router).await;

    let outcome = client(Duration::from_secs(5))
        .fetch(&format!("{}/search", base), &params(), &query())
        .await;
    assert_eq!(outcome, WebhookOutcome::EmptyResult);

    let prices: Vec<f64> = resolve(outcome, &query()).iter().map(|q| q.price_from_usd).collect();
    assert_eq!(prices, [9025.0, 8930.0, 9880.0]);
}

#[tokio::test]
async fn test_unreachable_webhook_is_transport_failure() {
    let outcome = client(Duration::from_secs(2)).fetch(UNREACHABLE_URL, &params(), &query()).await;
    assert!(matches!(outcome, WebhookOutcome::Transport(_)));
}

#[tokio::test]
async fn test_slow_webhook_times_out() {
    let router = Router::new().route(
        "/search",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!({"result": [{"price": 1}]}))
        }),
    );
    let base = spawn_server(router).await;

    let outcome = client(Duration::from_millis(200))
        .fetch(&format!("{}/search", base), &params(), &query())
        .await;
    assert!(matches!(outcome, WebhookOutcome::Transport(_)));
}

#[tokio::test]
async fn test_automation_webhook_delivery() {
    let router = Router::new()
        .route("/json", post(|Json(event): Json<Value>| async move { Json(json!({"received": event["event"]})) }))
        .route("/text", post(|| async { "queued" }))
        .route("/down", post(|| async { StatusCode::SERVICE_UNAVAILABLE }));
    let base = spawn_server(router).await;
    let event = json!({"event": "calculate_click", "shipmentId": "s-1"});

    let json_hook = AutomationWebhookClient::new(Client::new(), format!("{}/json", base));
    let delivery = json_hook.notify(&event, Duration::from_secs(5)).await;
    assert!(delivery.sent);
    assert_eq!(delivery.response, Some(json!({"received": "calculate_click"})));

    let text_hook = AutomationWebhookClient::new(Client::new(), format!("{}/text", base));
    let delivery = text_hook.notify(&event, Duration::from_secs(5)).await;
    assert!(delivery.sent);
    assert_eq!(delivery.response, Some(json!("queued")));

    let down_hook = AutomationWebhookClient::new(Client::new(), format!("{}/down", base));
    assert!(!down_hook.notify(&event, Duration::from_secs(5)).await.sent);
}
