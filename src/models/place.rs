//! Point of interest model

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PlaceKind {
    Attraction,
    Restaurant,
    Transport,
}

/// Point of interest shown on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Place {
    pub id: u32,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub kind: PlaceKind,
    /// Sub-category (wildlife, nature, culture, food, station, airport)
    pub category: String,
    pub description: String,
    pub rating: f64,
    pub price: String,
    pub hours: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    /// 3D model shown by the AR preview
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ar_model: Option<String>,
    /// Identifier of the VR tour
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vr_tour: Option<String>,
}

/// Place with its distance from a query point
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NearbyPlace {
    #[serde(flatten)]
    pub place: Place,
    pub distance_km: f64,
}

/// Query parameters for listing places
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct PlaceQuery {
    /// Restrict to one kind (attraction, restaurant, transport)
    pub kind: Option<PlaceKind>,
}

/// Query parameters for the nearby search
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct NearbyQuery {
    pub lat: f64,
    pub lng: f64,
    /// Search radius in kilometres (default: 5)
    pub radius_km: Option<f64>,
}
