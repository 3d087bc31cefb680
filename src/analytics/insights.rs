//! Threshold-based dashboard insights

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::growth::{growth_rate, mean};
use crate::models::metric::MetricSeries;

/// Percent and rating thresholds that turn numbers into insights
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct InsightThresholds {
    /// Weekly visitor growth above this percentage is reported
    pub visitor_growth: f64,
    /// Weekly visitor decline below minus this percentage is reported
    pub visitor_decline: f64,
    /// Weekly revenue growth above this percentage is reported
    pub revenue_growth: f64,
    /// Mean rating above this is reported as high satisfaction
    pub high_satisfaction: f64,
    /// Mean rating below this is reported as low satisfaction
    pub low_satisfaction: f64,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            visitor_growth: 10.0,
            visitor_decline: 10.0,
            revenue_growth: 15.0,
            high_satisfaction: 4.5,
            low_satisfaction: 3.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub message: String,
}

impl Insight {
    fn new(kind: InsightKind, title: &str, message: String) -> Self {
        Self {
            kind,
            title: title.to_string(),
            message,
        }
    }
}

/// Compare the last `window` days with the `window` days before them.
///
/// A growth figure that cannot be computed (short history, zero baseline)
/// yields no insight for that metric.
pub fn generate_insights(
    visitors: &MetricSeries,
    revenue: &MetricSeries,
    satisfaction: &MetricSeries,
    thresholds: &InsightThresholds,
    window: usize,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    if let Ok(growth) = growth_rate(&visitors.recent(window), &visitors.preceding(window)) {
        if growth > thresholds.visitor_growth {
            insights.push(Insight::new(
                InsightKind::Positive,
                "Visitor Growth",
                format!("Visitor numbers increased by {:.1}% this week", growth),
            ));
        } else if growth < -thresholds.visitor_decline {
            insights.push(Insight::new(
                InsightKind::Negative,
                "Visitor Decline",
                format!("Visitor numbers decreased by {:.1}% this week", growth.abs()),
            ));
        }
    }

    if let Ok(growth) = growth_rate(&revenue.recent(window), &revenue.preceding(window)) {
        if growth > thresholds.revenue_growth {
            insights.push(Insight::new(
                InsightKind::Positive,
                "Revenue Growth",
                format!("Revenue increased by {:.1}% this week", growth),
            ));
        }
    }

    if let Some(avg) = mean(&satisfaction.values()) {
        if avg > thresholds.high_satisfaction {
            insights.push(Insight::new(
                InsightKind::Positive,
                "High Satisfaction",
                format!("Average satisfaction rating is {:.1}/5", avg),
            ));
        } else if avg < thresholds.low_satisfaction {
            insights.push(Insight::new(
                InsightKind::Negative,
                "Low Satisfaction",
                format!("Average satisfaction rating is {:.1}/5 - needs attention", avg),
            ));
        }
    }

    insights
}
