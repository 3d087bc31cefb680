//! Data sources and stores behind the services

pub mod conversations;
pub mod metrics;
pub mod places;

use std::sync::Arc;

/// Handles to every collaborator the services read from or write to
#[derive(Clone)]
pub struct Repository {
    pub metrics: Arc<dyn metrics::MetricSource>,
    pub conversations: Arc<conversations::ConversationStore>,
    pub places: places::PlacesRepository,
}

impl Repository {
    pub fn new(
        metrics: Arc<dyn metrics::MetricSource>,
        conversations: conversations::ConversationStore,
    ) -> Self {
        Self {
            metrics,
            conversations: Arc::new(conversations),
            places: places::PlacesRepository::new(),
        }
    }
}
