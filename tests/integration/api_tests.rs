//! API integration tests
//!
//! Requests are driven through the router in-process, with a seeded metric
//! source and an in-memory chat history.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use smart_tour_server::{
    api,
    chatbot::ResponseTable,
    config::AppConfig,
    repository::{conversations::ConversationStore, metrics::SimulatedMetricSource, Repository},
    services::Services,
    AppState,
};

fn app() -> Router {
    let config = AppConfig::default();
    let repository = Repository::new(
        Arc::new(SimulatedMetricSource::with_seed(42)),
        ConversationStore::in_memory(config.chatbot.max_history),
    );
    let services = Services::new(repository, &config, ResponseTable::builtin());

    api::create_router(AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    })
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/v1/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, Method::GET, "/api/v1/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_chat_greeting() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/chat/messages",
        Some(json!({ "message": "Hello!" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["category"], "greeting");
    assert_eq!(body["language"], "en");
    assert_eq!(body["user"], "Hello!");
    assert!(!body["bot"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_chat_help_outranks_itinerary() {
    let app = app();
    let (_, body) = send(
        &app,
        Method::POST,
        "/api/v1/chat/messages",
        Some(json!({ "message": "Can you help me plan a trip?", "language": "es" })),
    )
    .await;

    assert_eq!(body["category"], "help");
    assert_eq!(body["language"], "es");
}

#[tokio::test]
async fn test_chat_fallback_echoes_plain_text() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/chat/messages",
        Some(json!({ "message": "  <b>zzz</b>  " })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["category"], "fallback");
    assert!(body["bot"].as_str().unwrap().contains("\"<b>zzz</b>\""));
}

#[tokio::test]
async fn test_chat_unknown_language_uses_default() {
    let app = app();
    let (_, body) = send(
        &app,
        Method::POST,
        "/api/v1/chat/messages",
        Some(json!({ "message": "reserve a table", "language": "xx" })),
    )
    .await;

    assert_eq!(body["category"], "booking");
    assert_eq!(body["language"], "en");
}

#[tokio::test]
async fn test_chat_empty_message_rejected() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/chat/messages",
        Some(json!({ "message": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_chat_history_and_clear() {
    let app = app();
    for message in ["hello", "show me restaurants"] {
        send(
            &app,
            Method::POST,
            "/api/v1/chat/messages",
            Some(json!({ "message": message })),
        )
        .await;
    }

    let (_, history) = send(&app, Method::GET, "/api/v1/chat/history", None).await;
    let turns = history.as_array().unwrap();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[1]["category"], "restaurants");

    let (status, _) = send(&app, Method::DELETE, "/api/v1/chat/history", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, history) = send(&app, Method::GET, "/api/v1/chat/history", None).await;
    assert!(history.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_chat_languages() {
    let app = app();
    let (_, body) = send(&app, Method::GET, "/api/v1/chat/languages", None).await;

    let languages = body.as_array().unwrap();
    assert_eq!(languages.len(), 9);
    let santali = languages.iter().find(|l| l["code"] == "sat").unwrap();
    assert_eq!(santali["translated"], false);
}

#[tokio::test]
async fn test_trend() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/analytics/trend",
        Some(json!({ "values": [0.0, 2.0, 4.0, 6.0, 8.0], "horizon_days": 7.0 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slope"], 2.0);
    assert_eq!(body["predicted"], 18.0);
}

#[tokio::test]
async fn test_trend_clamped() {
    let app = app();
    let (_, body) = send(
        &app,
        Method::POST,
        "/api/v1/analytics/trend",
        Some(json!({ "values": [4.0, 4.5, 5.0], "horizon_days": 10.0, "min": 1.0, "max": 5.0 })),
    )
    .await;

    assert_eq!(body["predicted"], 5.0);
}

#[tokio::test]
async fn test_growth() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/analytics/growth",
        Some(json!({ "recent": [200.0], "previous": [100.0] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["growth"], 100.0);
}

#[tokio::test]
async fn test_growth_zero_baseline() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/analytics/growth",
        Some(json!({ "recent": [5.0], "previous": [0.0, 0.0] })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "ZeroBaseline");
}

#[tokio::test]
async fn test_growth_overflow_is_rejected() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/analytics/growth",
        Some(json!({ "recent": [f64::MAX, f64::MAX], "previous": [1.0] })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "NonFinite");
}

#[tokio::test]
async fn test_trend_overflow_is_rejected() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/analytics/trend",
        Some(json!({ "values": [f64::MAX, f64::MAX, -f64::MAX] })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "NonFinite");
}

#[tokio::test]
async fn test_growth_empty_window() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/analytics/growth",
        Some(json!({ "recent": [], "previous": [1.0] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "EmptyWindow");
}

#[tokio::test]
async fn test_sentiment() {
    let app = app();
    let (_, body) = send(
        &app,
        Method::POST,
        "/api/v1/analytics/sentiment",
        Some(json!({ "text": "Terrible roads, awful food" })),
    )
    .await;

    assert_eq!(body["sentiment"], "negative");
}

#[tokio::test]
async fn test_dashboard() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/v1/analytics/dashboard?range=7d", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["range"], "7d");
    assert_eq!(body["region"], "all");
    assert_eq!(body["visitors"]["points"].as_array().unwrap().len(), 8);
    assert_eq!(body["metrics"]["active_locations"], 8);

    let (_, body) = send(&app, Method::GET, "/api/v1/analytics/dashboard?range=6m", None).await;
    assert_eq!(body["range"], "30d");
}

#[tokio::test]
async fn test_predictions() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/v1/analytics/predictions", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["next_week"]["days"], 7);
    assert_eq!(body["next_month"]["days"], 30);
    let rating = body["next_month"]["satisfaction"].as_f64().unwrap();
    assert!((1.0..=5.0).contains(&rating));
}

#[tokio::test]
async fn test_export() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/analytics/export?range=90d&region=ranchi",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["time_range"], "90d");
    assert_eq!(body["region"], "ranchi");
    assert!(body["insights"].is_array());
}

#[tokio::test]
async fn test_itinerary() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/itineraries",
        Some(json!({
            "destination": "Ranchi",
            "start_date": "2024-06-01",
            "end_date": "2024-06-03",
            "travel_style": "mid-range",
            "interests": ["nature", "culture"]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["days"], 2);
    let days = body["itinerary"].as_array().unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[1]["date"], "2024-06-02");
    assert_eq!(days[0]["activities"][0]["time"], "09:00");
    assert_eq!(days[0]["activities"][0]["cost"], "$25-50");
}

#[tokio::test]
async fn test_itinerary_rejects_reversed_dates() {
    let app = app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/itineraries",
        Some(json!({
            "destination": "Ranchi",
            "start_date": "2024-06-05",
            "end_date": "2024-06-01",
            "interests": ["food"]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_places() {
    let app = app();
    let (_, body) = send(&app, Method::GET, "/api/v1/places?kind=restaurant", None).await;
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (status, _) = send(&app, Method::GET, "/api/v1/places/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, Method::GET, "/api/v1/places/1", None).await;
    assert_eq!(body["name"], "Betla National Park");
}

#[tokio::test]
async fn test_places_nearby() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/places/nearby?lat=23.3441&lng=85.3096",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let places = body.as_array().unwrap();
    assert_eq!(places.len(), 5);
    assert_eq!(places[0]["distance_km"], 0.0);
}
