//! API handlers for Smart Tour REST endpoints

pub mod analytics;
pub mod chat;
pub mod health;
pub mod itinerary;
pub mod openapi;
pub mod places;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Analytics
        .route("/analytics/dashboard", get(analytics::get_dashboard))
        .route("/analytics/insights", get(analytics::get_insights))
        .route("/analytics/predictions", get(analytics::get_predictions))
        .route("/analytics/export", get(analytics::export_analytics))
        .route("/analytics/trend", post(analytics::estimate_trend))
        .route("/analytics/growth", post(analytics::growth_rate))
        .route("/analytics/sentiment", post(analytics::analyze_sentiment))
        // Chat assistant
        .route("/chat/messages", post(chat::send_message))
        .route("/chat/history", get(chat::get_history).delete(chat::clear_history))
        .route("/chat/languages", get(chat::list_languages))
        // Itineraries
        .route("/itineraries", post(itinerary::generate_itinerary))
        // Places
        .route("/places", get(places::list_places))
        .route("/places/nearby", get(places::nearby_places))
        .route("/places/:id", get(places::get_place))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .map_response(axum::response::IntoResponse::into_response)
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
}
