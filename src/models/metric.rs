//! Time series models for the analytics dashboard

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Quantity tracked per day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Visitors,
    Revenue,
    /// Mean rating on a 1-5 scale
    Satisfaction,
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Metric::Visitors => "visitors",
            Metric::Revenue => "revenue",
            Metric::Satisfaction => "satisfaction",
        };
        f.write_str(name)
    }
}

/// Dashboard time range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum TimeRange {
    #[serde(rename = "7d")]
    Week,
    #[default]
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "1y")]
    Year,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::Week,
        TimeRange::Month,
        TimeRange::Quarter,
        TimeRange::Year,
    ];

    /// Parse a range code; anything unrecognised means the last 30 days.
    pub fn from_code(code: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|range| range.code() == code.trim())
            .unwrap_or_default()
    }

    pub fn code(self) -> &'static str {
        match self {
            TimeRange::Week => "7d",
            TimeRange::Month => "30d",
            TimeRange::Quarter => "90d",
            TimeRange::Year => "1y",
        }
    }

    pub fn days(self) -> u32 {
        match self {
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::Quarter => 90,
            TimeRange::Year => 365,
        }
    }
}

/// One daily sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TimePoint {
    pub timestamp: NaiveDate,
    pub value: f64,
}

impl TimePoint {
    pub fn new(timestamp: NaiveDate, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Samples of one metric in ascending date order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MetricSeries {
    pub metric: Metric,
    pub points: Vec<TimePoint>,
}

impl MetricSeries {
    pub fn new(metric: Metric, mut points: Vec<TimePoint>) -> Self {
        points.sort_by_key(|p| p.timestamp);
        Self { metric, points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// The last `n` values
    pub fn recent(&self, n: usize) -> Vec<f64> {
        let start = self.points.len().saturating_sub(n);
        self.points[start..].iter().map(|p| p.value).collect()
    }

    /// The `n` values right before the last `n`
    pub fn preceding(&self, n: usize) -> Vec<f64> {
        let end = self.points.len().saturating_sub(n);
        let start = end.saturating_sub(n);
        self.points[start..end].iter().map(|p| p.value).collect()
    }

    pub fn total(&self) -> f64 {
        self.points.iter().map(|p| p.value).sum()
    }

    pub fn mean(&self) -> Option<f64> {
        if self.points.is_empty() {
            None
        } else {
            Some(self.total() / self.points.len() as f64)
        }
    }
}
