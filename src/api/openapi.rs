//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{analytics, chat, health, itinerary, places};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Smart Tour API",
        version = "1.0.0",
        description = "Tourism analytics, itinerary planning and multilingual chat assistant",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Analytics
        analytics::get_dashboard,
        analytics::get_insights,
        analytics::get_predictions,
        analytics::export_analytics,
        analytics::estimate_trend,
        analytics::growth_rate,
        analytics::analyze_sentiment,
        // Chat
        chat::send_message,
        chat::get_history,
        chat::clear_history,
        chat::list_languages,
        // Itineraries
        itinerary::generate_itinerary,
        // Places
        places::list_places,
        places::nearby_places,
        places::get_place,
    ),
    components(
        schemas(
            // Analytics
            analytics::AnalyticsQuery,
            analytics::DashboardMetrics,
            analytics::DashboardSummary,
            analytics::PredictionSet,
            analytics::Predictions,
            analytics::AnalyticsExport,
            analytics::TrendRequest,
            analytics::TrendResponse,
            analytics::GrowthRequest,
            analytics::GrowthResponse,
            analytics::SentimentRequest,
            analytics::SentimentResponse,
            crate::analytics::Insight,
            crate::analytics::InsightKind,
            crate::analytics::Sentiment,
            crate::analytics::SentimentBreakdown,
            crate::models::metric::Metric,
            crate::models::metric::TimeRange,
            crate::models::metric::TimePoint,
            crate::models::metric::MetricSeries,
            crate::models::destination::DestinationStats,
            // Chat
            crate::models::chat::ChatTurn,
            crate::models::chat::SendMessage,
            crate::models::chat::LanguageInfo,
            crate::chatbot::IntentCategory,
            crate::chatbot::Language,
            // Itineraries
            crate::models::itinerary::ItineraryRequest,
            crate::models::itinerary::Itinerary,
            crate::models::itinerary::ItineraryDay,
            crate::models::itinerary::Activity,
            crate::models::itinerary::Interest,
            crate::models::itinerary::TravelStyle,
            // Places
            crate::models::place::Place,
            crate::models::place::PlaceKind,
            crate::models::place::NearbyPlace,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "analytics", description = "Tourism analytics dashboard"),
        (name = "chat", description = "Multilingual chat assistant"),
        (name = "itineraries", description = "Itinerary planning"),
        (name = "places", description = "Points of interest and nearby search")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
