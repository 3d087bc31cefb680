//! Itinerary endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::itinerary::{Itinerary, ItineraryRequest},
    AppState,
};

/// Generate a day-by-day itinerary
#[utoipa::path(
    post,
    path = "/itineraries",
    tag = "itineraries",
    request_body = ItineraryRequest,
    responses(
        (status = 200, description = "Generated itinerary", body = Itinerary),
        (status = 400, description = "Invalid dates or interests", body = crate::error::ErrorResponse)
    )
)]
pub async fn generate_itinerary(
    State(state): State<AppState>,
    Json(request): Json<ItineraryRequest>,
) -> AppResult<Json<Itinerary>> {
    let itinerary = state.services.itinerary.generate(request)?;
    Ok(Json(itinerary))
}
