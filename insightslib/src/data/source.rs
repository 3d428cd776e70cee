//! Where dashboard data comes from.
//!
//! [`MockSource`] generates a deterministic dataset from a seed, in the
//! shapes a live backend would return. [`JsonFileSource`] reads a saved
//! [`DashboardSnapshot`].

use std::f64::consts::PI;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Days, NaiveDate, SecondsFormat, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::InsightsError;
use crate::validate::is_valid_date;
use crate::Result;

use super::campaign::{Campaign, CampaignStatus};
use super::metrics::{
    DashboardSnapshot, DeviceShare, MetricCard, MetricFormat, RevenuePoint, TrafficSource,
};

/// Days of revenue history in a generated snapshot.
pub const REVENUE_DAYS: u64 = 30;

/// Average order value used to derive campaign ROI.
const ORDER_VALUE: f64 = 100.0;

const CAMPAIGN_NAMES: [&str; 25] = [
    "Summer Sale 2024",
    "Brand Awareness Q4",
    "Holiday Special",
    "Product Launch",
    "Retargeting Campaign",
    "New Customer Acquisition",
    "Seasonal Promotion",
    "Social Media Boost",
    "Email Newsletter",
    "Influencer Partnership",
    "Black Friday Sale",
    "Cyber Monday Deals",
    "Spring Collection",
    "Back to School",
    "Valentine's Day Special",
    "Easter Promotion",
    "Mother's Day Campaign",
    "Father's Day Special",
    "Independence Day Sale",
    "Labor Day Weekend",
    "Halloween Spooky Deals",
    "Thanksgiving Special",
    "Christmas Countdown",
    "New Year Resolution",
    "Winter Clearance",
];

const TRAFFIC: [(&str, u64, &str); 6] = [
    ("Google Ads", 4500, "#3B82F6"),
    ("Facebook", 3200, "#6366F1"),
    ("Direct Traffic", 2800, "#10B981"),
    ("Organic Search", 2100, "#F59E0B"),
    ("Email Marketing", 1800, "#EF4444"),
    ("Social Media", 1200, "#8B5CF6"),
];

const DEVICES: [(&str, f64, &str, u64); 4] = [
    ("Desktop", 45.0, "#3B82F6", 5600),
    ("Mobile", 35.0, "#10B981", 4350),
    ("Tablet", 15.0, "#F59E0B", 1875),
    ("Other", 5.0, "#EF4444", 625),
];

/// A provider of dashboard data.
///
/// Only [`snapshot`](DataSource::snapshot) is required; the per-section
/// accessors take their slice of it.
pub trait DataSource {
    fn snapshot(&self) -> Result<DashboardSnapshot>;

    fn campaigns(&self) -> Result<Vec<Campaign>> {
        Ok(self.snapshot()?.campaigns)
    }

    fn metrics(&self) -> Result<Vec<MetricCard>> {
        Ok(self.snapshot()?.metrics)
    }

    fn revenue(&self) -> Result<Vec<RevenuePoint>> {
        Ok(self.snapshot()?.revenue)
    }

    fn traffic(&self) -> Result<Vec<TrafficSource>> {
        Ok(self.snapshot()?.traffic)
    }

    fn devices(&self) -> Result<Vec<DeviceShare>> {
        Ok(self.snapshot()?.devices)
    }
}

/// Seeded generator of realistic-looking dashboard data.
///
/// The same seed and reference day always produce the same snapshot.
#[derive(Debug, Clone)]
pub struct MockSource {
    seed: u64,
    today: NaiveDate,
}

impl MockSource {
    /// Generator anchored at the current UTC date.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            today: Utc::now().date_naive(),
        }
    }

    /// Anchor generated dates at `today` instead of the current date.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn generate_metrics(&self) -> Vec<MetricCard> {
        let card = |id: &str, title: &str, value, change, icon: &str, format, description: &str| {
            MetricCard {
                id: id.to_string(),
                title: title.to_string(),
                value,
                change,
                icon: icon.to_string(),
                format,
                description: Some(description.to_string()),
            }
        };
        vec![
            card(
                "revenue",
                "Total Revenue",
                45670.0,
                12.5,
                "DollarSign",
                MetricFormat::Currency,
                "Total revenue from all campaigns",
            ),
            card(
                "users",
                "Active Users",
                12450.0,
                -2.3,
                "Users",
                MetricFormat::Number,
                "Number of active users this month",
            ),
            card(
                "conversions",
                "Conversions",
                1205.0,
                8.7,
                "Target",
                MetricFormat::Number,
                "Total conversions achieved",
            ),
            card(
                "growth",
                "Growth Rate",
                15.8,
                3.2,
                "TrendingUp",
                MetricFormat::Percentage,
                "Overall growth percentage",
            ),
        ]
    }

    fn generate_revenue<R: Rng>(&self, rng: &mut R) -> Vec<RevenuePoint> {
        let span = (REVENUE_DAYS - 1) as f64;
        (0..REVENUE_DAYS)
            .rev()
            .map(|days_ago| {
                let date = self.days_before(days_ago);
                let variation = rng.random::<f64>() * 800.0 - 400.0;
                let seasonal = 1.0 + (days_ago as f64 / span * PI * 2.0).sin() * 0.2;
                let revenue = (1200.0 * seasonal + variation).round().max(500.0);
                let visitors = (revenue * (0.8 + rng.random::<f64>() * 0.4)).round();
                let conversions = (revenue * (0.05 + rng.random::<f64>() * 0.03)).round();
                RevenuePoint {
                    date: date.to_string(),
                    revenue,
                    visitors: Some(visitors),
                    conversions: Some(conversions),
                }
            })
            .collect()
    }

    fn generate_traffic(&self) -> Vec<TrafficSource> {
        let total: u64 = TRAFFIC.iter().map(|(_, visitors, _)| visitors).sum();
        TRAFFIC
            .iter()
            .map(|(source, visitors, color)| TrafficSource {
                source: source.to_string(),
                visitors: *visitors,
                color: color.to_string(),
                percentage: Some((*visitors as f64 / total as f64 * 100.0).round()),
            })
            .collect()
    }

    fn generate_devices(&self) -> Vec<DeviceShare> {
        DEVICES
            .iter()
            .map(|(device, percentage, color, value)| DeviceShare {
                device: device.to_string(),
                percentage: *percentage,
                color: color.to_string(),
                value: Some(*value),
            })
            .collect()
    }

    fn generate_campaigns<R: Rng>(&self, rng: &mut R) -> Vec<Campaign> {
        CAMPAIGN_NAMES
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let clicks: u64 = rng.random_range(100..5000);
                let conversions: u64 = rng.random_range(10..500);
                let cost = rng.random_range(50..1500u32) as f64;
                let conversion_rate = conversions as f64 / clicks as f64 * 100.0;
                let revenue = conversions as f64 * ORDER_VALUE;
                let roi = (revenue - cost) / cost * 100.0;
                let status = CampaignStatus::ALL[rng.random_range(0..CampaignStatus::ALL.len())];
                let start = self.days_before(rng.random_range(0..90));
                let end = start + Days::new(rng.random_range(7..37));

                Campaign {
                    id: format!("campaign-{}", index + 1),
                    name: name.to_string(),
                    clicks,
                    conversions,
                    cost,
                    cpc: round_to(cost / clicks as f64, 2),
                    status,
                    start_date: start.to_string(),
                    end_date: Some(end.to_string()),
                    conversion_rate: Some(round_to(conversion_rate, 1)),
                    roi: Some(round_to(roi, 1)),
                }
            })
            .collect()
    }

    fn days_before(&self, days: u64) -> NaiveDate {
        self.today - Days::new(days)
    }
}

impl DataSource for MockSource {
    fn snapshot(&self) -> Result<DashboardSnapshot> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let revenue = self.generate_revenue(&mut rng);
        let campaigns = self.generate_campaigns(&mut rng);
        tracing::debug!(
            seed = self.seed,
            today = %self.today,
            campaigns = campaigns.len(),
            "generated mock snapshot"
        );
        Ok(DashboardSnapshot {
            metrics: self.generate_metrics(),
            revenue,
            traffic: self.generate_traffic(),
            devices: self.generate_devices(),
            campaigns,
            last_updated: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        })
    }
}

/// Reads a [`DashboardSnapshot`] from a JSON file on every call.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for JsonFileSource {
    fn snapshot(&self) -> Result<DashboardSnapshot> {
        let text = fs::read_to_string(&self.path).map_err(|source| InsightsError::FileRead {
            path: self.path.clone(),
            source,
        })?;
        let snapshot: DashboardSnapshot =
            serde_json::from_str(&text).map_err(|source| InsightsError::Decode {
                path: self.path.clone(),
                source,
            })?;
        tracing::info!(
            path = %self.path.display(),
            campaigns = snapshot.campaigns.len(),
            "loaded snapshot"
        );
        let unreadable = snapshot
            .campaigns
            .iter()
            .filter(|c| {
                !is_valid_date(&c.start_date)
                    || c.end_date.as_deref().is_some_and(|d| !is_valid_date(d))
            })
            .count();
        if unreadable > 0 {
            tracing::warn!(
                path = %self.path.display(),
                campaigns = unreadable,
                "campaigns with unreadable dates"
            );
        }
        Ok(snapshot)
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn source(seed: u64) -> MockSource {
        MockSource::new(seed).with_today(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
    }

    #[test]
    fn test_mock_is_deterministic() {
        let a = source(7).campaigns().unwrap();
        let b = source(7).campaigns().unwrap();
        assert_eq!(a, b);
        assert_ne!(a, source(8).campaigns().unwrap());
    }

    #[test]
    fn test_mock_campaign_ranges() {
        let campaigns = source(42).campaigns().unwrap();
        assert_eq!(campaigns.len(), 25);
        assert_eq!(campaigns[0].id, "campaign-1");
        assert_eq!(campaigns[24].name, "Winter Clearance");
        for c in &campaigns {
            assert!((100..5000).contains(&c.clicks));
            assert!((10..500).contains(&c.conversions));
            assert!((50.0..1500.0).contains(&c.cost));
            assert_eq!(c.cpc, round_to(c.cost / c.clicks as f64, 2));

            let start = NaiveDate::parse_from_str(&c.start_date, "%Y-%m-%d").unwrap();
            let end =
                NaiveDate::parse_from_str(c.end_date.as_deref().unwrap(), "%Y-%m-%d").unwrap();
            let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
            assert!(start <= today && (today - start).num_days() < 90);
            assert!((7..37).contains(&(end - start).num_days()));
        }
    }

    #[test]
    fn test_mock_series_shapes() {
        let snapshot = source(1).snapshot().unwrap();
        assert_eq!(snapshot.revenue.len(), 30);
        assert_eq!(snapshot.revenue[0].date, "2024-05-17");
        assert_eq!(snapshot.revenue[29].date, "2024-06-15");
        assert!(snapshot.revenue.iter().all(|p| p.revenue >= 500.0));
        assert_eq!(snapshot.metrics.len(), 4);
        assert_eq!(snapshot.devices.len(), 4);

        let shares: Vec<f64> = snapshot.traffic.iter().filter_map(|t| t.percentage).collect();
        assert_eq!(shares, vec![29.0, 21.0, 18.0, 13.0, 12.0, 8.0]);
        assert_eq!(source(1).traffic().unwrap(), snapshot.traffic);
        assert_eq!(source(1).devices().unwrap()[0].device, "Desktop");
        assert_eq!(source(1).revenue().unwrap(), snapshot.revenue);
    }

    #[test]
    fn test_json_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        let snapshot = source(3).snapshot().unwrap();
        fs::write(&path, serde_json::to_string_pretty(&snapshot).unwrap()).unwrap();

        let loaded = JsonFileSource::new(&path).snapshot().unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_json_file_keeps_campaigns_with_unreadable_dates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        let mut snapshot = source(3).snapshot().unwrap();
        snapshot.campaigns[0].start_date = "soon".to_string();
        fs::write(&path, serde_json::to_string(&snapshot).unwrap()).unwrap();

        let loaded = JsonFileSource::new(&path).campaigns().unwrap();
        assert_eq!(loaded.len(), snapshot.campaigns.len());
        assert_eq!(loaded[0].start_date, "soon");
    }

    #[test]
    fn test_json_file_errors() {
        let dir = tempdir().unwrap();
        let missing = JsonFileSource::new(dir.path().join("nope.json"));
        assert!(matches!(
            missing.campaigns().unwrap_err(),
            InsightsError::FileRead { .. }
        ));

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{\"metrics\": 3}").unwrap();
        assert!(matches!(
            JsonFileSource::new(&bad).snapshot().unwrap_err(),
            InsightsError::Decode { .. }
        ));
    }
}
