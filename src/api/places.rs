//! Places endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::place::{NearbyPlace, NearbyQuery, Place, PlaceQuery},
    AppState,
};

/// List places of interest
#[utoipa::path(
    get,
    path = "/places",
    tag = "places",
    params(PlaceQuery),
    responses(
        (status = 200, description = "Places", body = Vec<Place>)
    )
)]
pub async fn list_places(
    State(state): State<AppState>,
    Query(query): Query<PlaceQuery>,
) -> Json<Vec<Place>> {
    Json(state.services.places.list(query.kind))
}

/// Get a place by ID
#[utoipa::path(
    get,
    path = "/places/{id}",
    tag = "places",
    params(
        ("id" = u32, Path, description = "Place ID")
    ),
    responses(
        (status = 200, description = "Place details", body = Place),
        (status = 404, description = "Place not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_place(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> AppResult<Json<Place>> {
    Ok(Json(state.services.places.get(id)?))
}

/// Places near a point, closest first
#[utoipa::path(
    get,
    path = "/places/nearby",
    tag = "places",
    params(NearbyQuery),
    responses(
        (status = 200, description = "Nearby places", body = Vec<NearbyPlace>),
        (status = 400, description = "Invalid coordinates or radius", body = crate::error::ErrorResponse)
    )
)]
pub async fn nearby_places(
    State(state): State<AppState>,
    Query(query): Query<NearbyQuery>,
) -> AppResult<Json<Vec<NearbyPlace>>> {
    let places = state
        .services
        .places
        .nearby(query.lat, query.lng, query.radius_km)?;
    Ok(Json(places))
}
