//! Numeric core of the analytics dashboard.
//!
//! Every function here is pure: callers own the input slices and get a fresh
//! value back, so the module needs no synchronisation.

pub mod growth;
pub mod insights;
pub mod sentiment;
pub mod trend;

use thiserror::Error;

pub use growth::{growth_rate, mean};
pub use insights::{generate_insights, Insight, InsightKind, InsightThresholds};
pub use sentiment::{analyze_sentiment, Sentiment, SentimentBreakdown};
pub use trend::{estimate_trend, predict};

/// Failures of the analytics computations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// A window that must hold at least one sample was empty
    #[error("the {0} window is empty")]
    EmptyWindow(&'static str),

    /// The previous window averages to zero, so no percentage can be derived
    #[error("no prior baseline: previous window averages to zero")]
    ZeroBaseline,

    /// Inputs overflowed or were themselves infinite or NaN
    #[error("the {0} is not a finite number")]
    NonFinite(&'static str),
}
