//! Places and nearby search

use crate::{
    error::{AppError, AppResult},
    models::place::{NearbyPlace, Place, PlaceKind},
    repository::Repository,
};

/// Mean Earth radius used by the distance formula
const EARTH_RADIUS_KM: f64 = 6371.0;

pub const DEFAULT_RADIUS_KM: f64 = 5.0;

/// Great-circle distance between two coordinates, in kilometres
pub fn distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

#[derive(Clone)]
pub struct PlacesService {
    repository: Repository,
}

impl PlacesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn list(&self, kind: Option<PlaceKind>) -> Vec<Place> {
        self.repository.places.list(kind)
    }

    pub fn get(&self, id: u32) -> AppResult<Place> {
        self.repository
            .places
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("Place with id {} not found", id)))
    }

    /// Places within `radius_km` of a point, closest first
    pub fn nearby(&self, lat: f64, lng: f64, radius_km: Option<f64>) -> AppResult<Vec<NearbyPlace>> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(AppError::Validation(format!(
                "Invalid coordinates ({}, {})",
                lat, lng
            )));
        }

        let radius = radius_km.unwrap_or(DEFAULT_RADIUS_KM);
        if !radius.is_finite() || radius <= 0.0 {
            return Err(AppError::Validation(
                "Radius must be a positive number of kilometres".to_string(),
            ));
        }

        let mut places: Vec<NearbyPlace> = self
            .repository
            .places
            .list(None)
            .into_iter()
            .map(|place| NearbyPlace {
                distance_km: distance_km(lat, lng, place.lat, place.lng),
                place,
            })
            .filter(|p| p.distance_km <= radius)
            .collect();

        places.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

        Ok(places)
    }
}
