//! Analytics service
//!
//! Caches one snapshot of simulated (or real) series per time range and
//! derives the dashboard figures from it with the pure functions in
//! [`crate::analytics`].

use std::{collections::HashMap, sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use tokio::{sync::RwLock, task::JoinHandle};

use crate::{
    analytics::{self, AnalyticsError, Insight, Sentiment, SentimentBreakdown},
    api::analytics::{
        AnalyticsExport, DashboardMetrics, DashboardSummary, PredictionSet, Predictions,
        TrendResponse,
    },
    config::AnalyticsConfig,
    error::AppResult,
    models::{
        destination::DestinationStats,
        metric::{Metric, MetricSeries, TimeRange},
    },
    repository::Repository,
};

/// Ratings live on a 1-5 scale
const RATING_RANGE: (f64, f64) = (1.0, 5.0);

/// Days over which a rating trend plays out fully
const RATING_HORIZON_SCALE: f64 = 30.0;

/// Series and reference data loaded together for one range
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub range: TimeRange,
    pub generated_at: DateTime<Utc>,
    pub visitors: MetricSeries,
    pub revenue: MetricSeries,
    pub satisfaction: MetricSeries,
    pub destinations: Vec<DestinationStats>,
    pub sentiment: SentimentBreakdown,
}

#[derive(Clone)]
pub struct AnalyticsService {
    repository: Repository,
    config: AnalyticsConfig,
    snapshots: Arc<RwLock<HashMap<TimeRange, Arc<Snapshot>>>>,
}

impl AnalyticsService {
    pub fn new(repository: Repository, config: AnalyticsConfig) -> Self {
        Self {
            repository,
            config,
            snapshots: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Range named by `code`, or the configured default
    pub fn range(&self, code: Option<&str>) -> TimeRange {
        TimeRange::from_code(code.unwrap_or(&self.config.default_range))
    }

    pub fn region(&self, region: Option<String>) -> String {
        region.unwrap_or_else(|| self.config.default_region.clone())
    }

    /// Cached snapshot for `range`, loading it on first use
    pub async fn snapshot(&self, range: TimeRange) -> AppResult<Arc<Snapshot>> {
        if let Some(snapshot) = self.snapshots.read().await.get(&range) {
            return Ok(snapshot.clone());
        }
        self.refresh(range).await
    }

    /// Replace the snapshot for `range` with freshly loaded series
    pub async fn refresh(&self, range: TimeRange) -> AppResult<Arc<Snapshot>> {
        let source = &self.repository.metrics;
        let end = Utc::now().date_naive();

        let snapshot = Arc::new(Snapshot {
            range,
            generated_at: Utc::now(),
            visitors: source.series(Metric::Visitors, range, end).await?,
            revenue: source.series(Metric::Revenue, range, end).await?,
            satisfaction: source.series(Metric::Satisfaction, range, end).await?,
            destinations: source.destinations().await?,
            sentiment: source.sentiment().await?,
        });

        self.snapshots.write().await.insert(range, snapshot.clone());
        tracing::debug!("Refreshed analytics snapshot for {}", range.code());

        Ok(snapshot)
    }

    /// Refresh every range that has been requested so far
    pub async fn refresh_cached(&self) -> AppResult<()> {
        let ranges: Vec<TimeRange> = self.snapshots.read().await.keys().copied().collect();
        for range in ranges {
            self.refresh(range).await?;
        }
        Ok(())
    }

    /// Periodically refresh cached snapshots; `None` when disabled by config
    pub fn spawn_refresh_task(&self) -> Option<JoinHandle<()>> {
        if self.config.refresh_interval_secs == 0 {
            return None;
        }

        let service = self.clone();
        let period = Duration::from_secs(self.config.refresh_interval_secs);

        Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                if let Err(e) = service.refresh_cached().await {
                    tracing::warn!("Analytics refresh failed: {}", e);
                }
            }
        }))
    }

    pub async fn dashboard(&self, range: TimeRange, region: String) -> AppResult<DashboardSummary> {
        let snapshot = self.snapshot(range).await?;
        let window = self.config.window_size;

        Ok(DashboardSummary {
            range: range.code().to_string(),
            region,
            generated_at: snapshot.generated_at,
            metrics: self.metrics(&snapshot),
            visitor_growth: analytics::growth_rate(
                &snapshot.visitors.recent(window),
                &snapshot.visitors.preceding(window),
            )
            .ok(),
            revenue_growth: analytics::growth_rate(
                &snapshot.revenue.recent(window),
                &snapshot.revenue.preceding(window),
            )
            .ok(),
            destinations: snapshot.destinations.clone(),
            sentiment: snapshot.sentiment,
            visitors: snapshot.visitors.clone(),
            revenue: snapshot.revenue.clone(),
            satisfaction: snapshot.satisfaction.clone(),
        })
    }

    pub async fn insights(&self, range: TimeRange) -> AppResult<Vec<Insight>> {
        let snapshot = self.snapshot(range).await?;
        Ok(self.insights_for(&snapshot))
    }

    pub async fn predictions(&self, range: TimeRange) -> AppResult<Predictions> {
        let snapshot = self.snapshot(range).await?;
        Ok(Predictions {
            next_week: self.prediction_set(&snapshot, 7.0),
            next_month: self.prediction_set(&snapshot, 30.0),
        })
    }

    pub async fn export(&self, range: TimeRange, region: String) -> AppResult<AnalyticsExport> {
        let snapshot = self.snapshot(range).await?;

        tracing::info!("Exporting analytics for range {} region {}", range.code(), region);

        Ok(AnalyticsExport {
            time_range: range.code().to_string(),
            region,
            generated_at: Utc::now(),
            metrics: self.metrics(&snapshot),
            visitors: snapshot.visitors.clone(),
            revenue: snapshot.revenue.clone(),
            satisfaction: snapshot.satisfaction.clone(),
            destinations: snapshot.destinations.clone(),
            sentiment: snapshot.sentiment,
            insights: self.insights_for(&snapshot),
        })
    }

    /// Slope and projection over caller-supplied values.
    ///
    /// Values large enough to overflow the sums are rejected rather than
    /// answered with infinity or NaN.
    pub fn trend(
        &self,
        values: &[f64],
        horizon_days: f64,
        window_size: Option<usize>,
        clamp: Option<(f64, f64)>,
    ) -> AppResult<TrendResponse> {
        let window_size = window_size.unwrap_or(self.config.window_size);
        let start = values.len().saturating_sub(window_size.max(1));

        let slope = analytics::estimate_trend(&values[start..]);
        if !slope.is_finite() {
            return Err(AnalyticsError::NonFinite("trend slope").into());
        }
        let predicted = analytics::predict(values, horizon_days, window_size, clamp);
        if !predicted.is_finite() {
            return Err(AnalyticsError::NonFinite("prediction").into());
        }

        Ok(TrendResponse { slope, predicted })
    }

    pub fn growth(&self, recent: &[f64], previous: &[f64]) -> AppResult<f64> {
        Ok(analytics::growth_rate(recent, previous)?)
    }

    pub fn sentiment(&self, text: &str) -> Sentiment {
        analytics::analyze_sentiment(text)
    }

    fn metrics(&self, snapshot: &Snapshot) -> DashboardMetrics {
        DashboardMetrics {
            total_visitors: snapshot.visitors.total().round() as u64,
            total_revenue: snapshot.revenue.total().round() as u64,
            average_satisfaction: snapshot.satisfaction.mean(),
            active_locations: snapshot.destinations.len(),
        }
    }

    fn insights_for(&self, snapshot: &Snapshot) -> Vec<Insight> {
        analytics::generate_insights(
            &snapshot.visitors,
            &snapshot.revenue,
            &snapshot.satisfaction,
            &self.config.thresholds,
            self.config.window_size,
        )
    }

    fn prediction_set(&self, snapshot: &Snapshot, days: f64) -> PredictionSet {
        let window = self.config.window_size;
        PredictionSet {
            days: days as u32,
            visitors: analytics::predict(&snapshot.visitors.values(), days, window, None).floor(),
            revenue: analytics::predict(&snapshot.revenue.values(), days, window, None).floor(),
            satisfaction: analytics::predict(
                &snapshot.satisfaction.values(),
                days / RATING_HORIZON_SCALE,
                window,
                Some(RATING_RANGE),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::metric::TimePoint,
        repository::{conversations::ConversationStore, metrics::MockMetricSource},
    };
    use chrono::NaiveDate;

    fn series(metric: Metric, values: Vec<f64>) -> MetricSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        MetricSeries::new(
            metric,
            values
                .into_iter()
                .enumerate()
                .map(|(i, v)| TimePoint::new(start + chrono::Duration::days(i as i64), v))
                .collect(),
        )
    }

    /// Visitors rise by 10 a day from 1000, revenue is flat, ratings are 4.0.
    fn mock_source() -> MockMetricSource {
        let mut mock = MockMetricSource::new();
        mock.expect_series().returning(|metric, _, _| {
            let values = match metric {
                Metric::Visitors => (0..14).map(|i| 1000.0 + 10.0 * i as f64).collect(),
                Metric::Revenue => vec![0.0; 14],
                Metric::Satisfaction => vec![4.0; 14],
            };
            Ok(series(metric, values))
        });
        mock.expect_destinations().returning(|| {
            Ok(vec![DestinationStats {
                name: "Betla National Park".to_string(),
                visitors: 12_500,
                revenue: 450_000,
                rating: 4.7,
            }])
        });
        mock.expect_sentiment().returning(|| {
            Ok(SentimentBreakdown {
                positive: 70,
                neutral: 20,
                negative: 10,
            })
        });
        mock
    }

    fn service(mock: MockMetricSource) -> AnalyticsService {
        let repository = Repository::new(Arc::new(mock), ConversationStore::in_memory(10));
        AnalyticsService::new(repository, AnalyticsConfig::default())
    }

    #[tokio::test]
    async fn test_dashboard_metrics() {
        let service = service(mock_source());
        let summary = service.dashboard(TimeRange::Week, "all".to_string()).await.unwrap();

        // 14 * 1000 + 10 * (0 + 1 + ... + 13)
        assert_eq!(summary.metrics.total_visitors, 14_910);
        assert_eq!(summary.metrics.total_revenue, 0);
        assert_eq!(summary.metrics.average_satisfaction, Some(4.0));
        assert_eq!(summary.metrics.active_locations, 1);
        // Recent week averages 1100, the week before 1030.
        let growth = summary.visitor_growth.unwrap();
        assert!((growth - 70.0 / 1030.0 * 100.0).abs() < 1e-9);
        // Zero revenue baseline is reported as unavailable.
        assert_eq!(summary.revenue_growth, None);
    }

    #[tokio::test]
    async fn test_predictions() {
        let service = service(mock_source());
        let predictions = service.predictions(TimeRange::Month).await.unwrap();

        // Last seven visitor samples: 1070..=1130, mean 1100, slope 10.
        assert_eq!(predictions.next_week.visitors, 1170.0);
        assert_eq!(predictions.next_month.visitors, 1400.0);
        assert_eq!(predictions.next_month.revenue, 0.0);
        assert_eq!(predictions.next_month.satisfaction, 4.0);
        assert_eq!(predictions.next_week.days, 7);
    }

    #[tokio::test]
    async fn test_insights_skip_zero_baseline() {
        let service = service(mock_source());
        let insights = service.insights(TimeRange::Week).await.unwrap();
        // 6.8% visitor growth is under the threshold; revenue has no baseline.
        assert!(insights.is_empty());
    }

    #[tokio::test]
    async fn test_snapshot_is_cached() {
        let mut mock = MockMetricSource::new();
        mock.expect_series()
            .times(3)
            .returning(|metric, _, _| Ok(series(metric, vec![1.0; 8])));
        mock.expect_destinations().times(1).returning(|| Ok(Vec::new()));
        mock.expect_sentiment().times(1).returning(|| {
            Ok(SentimentBreakdown {
                positive: 1,
                neutral: 1,
                negative: 1,
            })
        });

        let service = service(mock);
        let first = service.snapshot(TimeRange::Week).await.unwrap();
        let second = service.snapshot(TimeRange::Week).await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_trend_request() {
        let service = service(MockMetricSource::new());
        let response = service
            .trend(&[0.0, 2.0, 4.0, 6.0, 8.0], 7.0, None, None)
            .unwrap();
        assert_eq!(response.slope, 2.0);
        assert_eq!(response.predicted, 18.0);
    }

    #[test]
    fn test_trend_rejects_overflow() {
        let service = service(MockMetricSource::new());
        let err = service
            .trend(&[f64::MAX, f64::MAX, -f64::MAX], 7.0, None, None)
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::AppError::Analytics(AnalyticsError::NonFinite(_))
        ));
    }
}
