//! Destination popularity model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregated figures for one destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DestinationStats {
    pub name: String,
    pub visitors: u64,
    pub revenue: u64,
    pub rating: f64,
}
