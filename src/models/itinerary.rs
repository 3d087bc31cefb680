//! Itinerary models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TravelStyle {
    #[default]
    Budget,
    MidRange,
    Luxury,
}

impl TravelStyle {
    /// Price band of a single activity
    pub fn cost(self) -> &'static str {
        match self {
            TravelStyle::Budget => "$10-25",
            TravelStyle::MidRange => "$25-50",
            TravelStyle::Luxury => "$50-100",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Interest {
    Culture,
    Nature,
    Adventure,
    Food,
    History,
    Nightlife,
    Shopping,
    Relaxation,
}

impl Interest {
    pub fn activities(self) -> &'static [&'static str] {
        match self {
            Interest::Culture => &["Museum Visit", "Historical Site Tour", "Cultural Center", "Art Gallery"],
            Interest::Nature => &["Nature Walk", "Botanical Garden", "Scenic Viewpoint", "Wildlife Spotting"],
            Interest::Adventure => &["Hiking Trail", "Adventure Park", "Water Sports", "Rock Climbing"],
            Interest::Food => &["Local Restaurant", "Food Market Tour", "Cooking Class", "Wine Tasting"],
            Interest::History => &[
                "Historical Monument",
                "Heritage Site",
                "Archaeological Site",
                "Historical Museum",
            ],
            Interest::Nightlife => &["Local Bar", "Night Market", "Live Music Venue", "Cultural Show"],
            Interest::Shopping => &["Local Market", "Artisan Shop", "Shopping District", "Craft Center"],
            Interest::Relaxation => &["Spa Treatment", "Beach Time", "Park Visit", "Meditation Center"],
        }
    }
}

/// Generate itinerary request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ItineraryRequest {
    #[validate(length(min = 1, max = 200, message = "Destination is required"))]
    pub destination: String,
    /// First day (YYYY-MM-DD)
    pub start_date: NaiveDate,
    /// Last day (YYYY-MM-DD), after the start date
    pub end_date: NaiveDate,
    #[serde(default)]
    pub travel_style: TravelStyle,
    #[validate(length(min = 1, message = "Select at least one interest"))]
    pub interests: Vec<Interest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Activity {
    /// Start time (HH:MM)
    pub time: String,
    pub activity: String,
    pub duration: String,
    pub location: String,
    pub cost: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItineraryDay {
    pub day: u32,
    pub date: NaiveDate,
    pub activities: Vec<Activity>,
}

/// Generated day-by-day plan
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Itinerary {
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub travel_style: TravelStyle,
    pub interests: Vec<Interest>,
    pub days: u32,
    pub itinerary: Vec<ItineraryDay>,
}
