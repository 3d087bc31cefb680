//! Metric data source

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tokio::sync::Mutex;

use crate::{
    analytics::SentimentBreakdown,
    error::AppResult,
    models::{
        destination::DestinationStats,
        metric::{Metric, MetricSeries, TimePoint, TimeRange},
    },
};

/// Produces the series the dashboard aggregates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetricSource: Send + Sync {
    /// Daily samples of `metric` over `range`, ending on `end` inclusive.
    async fn series(&self, metric: Metric, range: TimeRange, end: NaiveDate)
        -> AppResult<MetricSeries>;

    /// Destinations ordered by popularity
    async fn destinations(&self) -> AppResult<Vec<DestinationStats>>;

    /// Share of positive, neutral and negative reviews
    async fn sentiment(&self) -> AppResult<SentimentBreakdown>;
}

/// Random data standing in for a real analytics backend
pub struct SimulatedMetricSource {
    rng: Mutex<StdRng>,
}

impl SimulatedMetricSource {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible source for tests and demos
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for SimulatedMetricSource {
    fn default() -> Self {
        Self::new()
    }
}

fn sample(rng: &mut StdRng, metric: Metric) -> f64 {
    match metric {
        Metric::Visitors => rng.gen_range(500..1500) as f64,
        Metric::Revenue => rng.gen_range(20_000..70_000) as f64,
        Metric::Satisfaction => rng.gen_range(3.5..5.5),
    }
}

#[async_trait]
impl MetricSource for SimulatedMetricSource {
    async fn series(
        &self,
        metric: Metric,
        range: TimeRange,
        end: NaiveDate,
    ) -> AppResult<MetricSeries> {
        let mut rng = self.rng.lock().await;
        let days = i64::from(range.days());

        let points = (0..=days)
            .rev()
            .map(|offset| TimePoint::new(end - Duration::days(offset), sample(&mut rng, metric)))
            .collect();

        Ok(MetricSeries::new(metric, points))
    }

    async fn destinations(&self) -> AppResult<Vec<DestinationStats>> {
        let table: [(&str, u64, u64, f64); 8] = [
            ("Betla National Park", 12_500, 450_000, 4.7),
            ("Ranchi Waterfalls", 9_800, 320_000, 4.2),
            ("Netarhat Hill Station", 8_700, 280_000, 4.6),
            ("Hazaribagh Wildlife Sanctuary", 6_500, 180_000, 4.4),
            ("Jagannath Temple, Ranchi", 4_200, 120_000, 4.5),
            ("Deoghar", 3_800, 95_000, 4.8),
            ("Jamshedpur", 3_600, 110_000, 4.6),
            ("Dumka Tribal Villages", 3_200, 140_000, 4.3),
        ];

        Ok(table
            .iter()
            .map(|(name, visitors, revenue, rating)| DestinationStats {
                name: name.to_string(),
                visitors: *visitors,
                revenue: *revenue,
                rating: *rating,
            })
            .collect())
    }

    async fn sentiment(&self) -> AppResult<SentimentBreakdown> {
        Ok(SentimentBreakdown {
            positive: 68,
            neutral: 22,
            negative: 10,
        })
    }
}
