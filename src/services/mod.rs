//! Business logic services

pub mod analytics;
pub mod chatbot;
pub mod itinerary;
pub mod places;

use std::sync::Arc;

use crate::{chatbot::ResponseTable, config::AppConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub analytics: analytics::AnalyticsService,
    pub chatbot: chatbot::ChatbotService,
    pub itinerary: itinerary::ItineraryService,
    pub places: places::PlacesService,
}

impl Services {
    /// Create all services with the given repository and reply table
    pub fn new(repository: Repository, config: &AppConfig, responses: ResponseTable) -> Self {
        Self {
            analytics: analytics::AnalyticsService::new(repository.clone(), config.analytics.clone()),
            chatbot: chatbot::ChatbotService::new(
                repository.clone(),
                Arc::new(responses),
                config.chatbot.default_language.clone(),
            ),
            itinerary: itinerary::ItineraryService::new(),
            places: places::PlacesService::new(repository),
        }
    }
}
