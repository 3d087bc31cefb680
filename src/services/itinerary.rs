//! Itinerary builder

use chrono::Duration;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::itinerary::{Activity, Interest, Itinerary, ItineraryDay, ItineraryRequest},
};

/// Longest trip the builder will plan
pub const MAX_TRIP_DAYS: i64 = 60;

const FIRST_START_HOUR: usize = 9;
const HOURS_BETWEEN_ACTIVITIES: usize = 2;
const ACTIVITY_DURATION: &str = "2 hours";

#[derive(Clone, Default)]
pub struct ItineraryService;

impl ItineraryService {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, request: ItineraryRequest) -> AppResult<Itinerary> {
        request.validate()?;
        let mut rng = StdRng::from_entropy();
        let itinerary = build_itinerary(&request, &mut rng)?;

        tracing::info!(
            "Generated {}-day itinerary for {}",
            itinerary.days,
            itinerary.destination
        );

        Ok(itinerary)
    }
}

/// Plan one day per night between the start and end dates.
///
/// Each day draws three or four distinct activities from the pooled
/// activities of the selected interests, starting at 09:00 and spaced two
/// hours apart.
pub fn build_itinerary<R: Rng + ?Sized>(
    request: &ItineraryRequest,
    rng: &mut R,
) -> AppResult<Itinerary> {
    let days = (request.end_date - request.start_date).num_days();
    if days < 1 {
        return Err(AppError::Validation(
            "End date must be after start date".to_string(),
        ));
    }
    if days > MAX_TRIP_DAYS {
        return Err(AppError::Validation(format!(
            "Trips are limited to {} days",
            MAX_TRIP_DAYS
        )));
    }

    let mut interests: Vec<Interest> = Vec::with_capacity(request.interests.len());
    for interest in &request.interests {
        if !interests.contains(interest) {
            interests.push(*interest);
        }
    }
    if interests.is_empty() {
        return Err(AppError::Validation(
            "Select at least one interest".to_string(),
        ));
    }

    let pool: Vec<&str> = interests
        .iter()
        .flat_map(|interest| interest.activities().iter().copied())
        .collect();
    let per_day = pool.len().clamp(3, 4).min(pool.len());
    let cost = request.travel_style.cost();

    let itinerary = (0..days)
        .map(|offset| {
            let mut choices = pool.clone();
            choices.shuffle(rng);

            let activities = choices
                .into_iter()
                .take(per_day)
                .enumerate()
                .map(|(slot, name)| Activity {
                    time: format!("{:02}:00", FIRST_START_HOUR + slot * HOURS_BETWEEN_ACTIVITIES),
                    activity: name.to_string(),
                    duration: ACTIVITY_DURATION.to_string(),
                    location: format!("{} {}", request.destination, slot + 1),
                    cost: cost.to_string(),
                })
                .collect();

            ItineraryDay {
                day: offset as u32 + 1,
                date: request.start_date + Duration::days(offset),
                activities,
            }
        })
        .collect();

    Ok(Itinerary {
        destination: request.destination.clone(),
        start_date: request.start_date,
        end_date: request.end_date,
        travel_style: request.travel_style,
        interests,
        days: days as u32,
        itinerary,
    })
}
