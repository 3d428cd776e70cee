//! Metric cards and chart series.

use serde::{Deserialize, Serialize};

use crate::analytics::TrendDirection;
use crate::format::{format_currency, format_number, format_percentage};
use crate::record::{Field, Record, Value};

use super::campaign::Campaign;

/// How a metric card value is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricFormat {
    Currency,
    Number,
    Percentage,
}

/// A headline KPI with its change from the previous period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub id: String,
    pub title: String,
    pub value: f64,
    /// Percent change from the previous period
    pub change: f64,
    pub icon: String,
    pub format: MetricFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MetricCard {
    pub fn formatted_value(&self, locale: &str, currency: &str) -> String {
        match self.format {
            MetricFormat::Currency => format_currency(self.value, locale, currency),
            MetricFormat::Number => format_number(self.value),
            MetricFormat::Percentage => format_percentage(self.value, 1),
        }
    }

    /// Signed change label, e.g. `+12.5%` or `-2.3%`.
    pub fn formatted_change(&self) -> String {
        let sign = match self.trend() {
            TrendDirection::Up => "+",
            TrendDirection::Down => "-",
            TrendDirection::Stable => "",
        };
        format!("{sign}{}", format_percentage(self.change.abs(), 1))
    }

    pub fn trend(&self) -> TrendDirection {
        TrendDirection::of_change(self.change)
    }
}

/// One day of the revenue time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub date: String,
    pub revenue: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visitors: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversions: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueField {
    Date,
    Revenue,
    Visitors,
    Conversions,
}

impl Field for RevenueField {
    fn name(self) -> &'static str {
        match self {
            RevenueField::Date => "date",
            RevenueField::Revenue => "revenue",
            RevenueField::Visitors => "visitors",
            RevenueField::Conversions => "conversions",
        }
    }

    fn all() -> &'static [Self] {
        &[
            RevenueField::Date,
            RevenueField::Revenue,
            RevenueField::Visitors,
            RevenueField::Conversions,
        ]
    }
}

impl std::str::FromStr for RevenueField {
    type Err = crate::error::InsightsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::record::parse_field(s, "revenue point")
    }
}

impl Record for RevenuePoint {
    type Field = RevenueField;

    fn value(&self, field: RevenueField) -> Value<'_> {
        match field {
            RevenueField::Date => Value::Text(&self.date),
            RevenueField::Revenue => Value::Number(self.revenue),
            RevenueField::Visitors => self.visitors.map_or(Value::Missing, Value::Number),
            RevenueField::Conversions => self.conversions.map_or(Value::Missing, Value::Number),
        }
    }
}

/// Numeric series of one revenue field in date order. Missing points are
/// skipped.
pub fn series(points: &[RevenuePoint], field: RevenueField) -> Vec<f64> {
    points
        .iter()
        .filter_map(|p| p.value(field).as_number())
        .collect()
}

/// Visitors per acquisition channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficSource {
    pub source: String,
    pub visitors: u64,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

/// Share of sessions per device class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceShare {
    pub device: String,
    pub percentage: f64,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
}

/// Everything a dashboard render needs, as loaded in one go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub metrics: Vec<MetricCard>,
    #[serde(alias = "lineChartData")]
    pub revenue: Vec<RevenuePoint>,
    #[serde(alias = "barChartData")]
    pub traffic: Vec<TrafficSource>,
    #[serde(alias = "donutChartData")]
    pub devices: Vec<DeviceShare>,
    pub campaigns: Vec<Campaign>,
    pub last_updated: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(format: MetricFormat, value: f64, change: f64) -> MetricCard {
        MetricCard {
            id: "m".to_string(),
            title: "Metric".to_string(),
            value,
            change,
            icon: "Users".to_string(),
            format,
            description: None,
        }
    }

    #[test]
    fn test_formatted_value_dispatch() {
        assert_eq!(
            card(MetricFormat::Currency, 45670.0, 0.0).formatted_value("en-US", "USD"),
            "$45,670"
        );
        assert_eq!(
            card(MetricFormat::Number, 12450.0, 0.0).formatted_value("en-US", "USD"),
            "12.4K"
        );
        assert_eq!(
            card(MetricFormat::Percentage, 15.8, 0.0).formatted_value("en-US", "USD"),
            "15.8%"
        );
    }

    #[test]
    fn test_formatted_change() {
        assert_eq!(card(MetricFormat::Number, 1.0, 12.5).formatted_change(), "+12.5%");
        assert_eq!(card(MetricFormat::Number, 1.0, -2.3).formatted_change(), "-2.3%");
        assert_eq!(card(MetricFormat::Number, 1.0, 0.0).formatted_change(), "0.0%");
    }

    #[test]
    fn test_series_skips_missing() {
        let points = vec![
            RevenuePoint {
                date: "2024-01-01".to_string(),
                revenue: 100.0,
                visitors: Some(80.0),
                conversions: None,
            },
            RevenuePoint {
                date: "2024-01-02".to_string(),
                revenue: 150.0,
                visitors: None,
                conversions: None,
            },
        ];
        assert_eq!(series(&points, RevenueField::Revenue), vec![100.0, 150.0]);
        assert_eq!(series(&points, RevenueField::Visitors), vec![80.0]);
        assert!(series(&points, RevenueField::Conversions).is_empty());
    }

    #[test]
    fn test_snapshot_accepts_chart_aliases() {
        let json = serde_json::json!({
            "metrics": [],
            "lineChartData": [{"date": "2024-01-01", "revenue": 1200}],
            "barChartData": [{"source": "Facebook", "visitors": 3200, "color": "#6366F1"}],
            "donutChartData": [{"device": "Mobile", "percentage": 35, "color": "#10B981"}],
            "campaigns": [],
            "lastUpdated": "2024-01-01T00:00:00Z"
        });
        let snapshot: DashboardSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(snapshot.revenue[0].revenue, 1200.0);
        assert_eq!(snapshot.traffic[0].visitors, 3200);
        assert_eq!(snapshot.devices[0].percentage, 35.0);
    }
}
