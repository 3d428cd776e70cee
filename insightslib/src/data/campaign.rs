//! Campaign rows for the campaigns table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InsightsError;
use crate::record::{parse_field, Field, Record, Value};

/// Lifecycle state of a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
    Draft,
}

impl CampaignStatus {
    pub const ALL: [CampaignStatus; 4] = [
        CampaignStatus::Active,
        CampaignStatus::Paused,
        CampaignStatus::Completed,
        CampaignStatus::Draft,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CampaignStatus::Active => "active",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Completed => "completed",
            CampaignStatus::Draft => "draft",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Performance figures for one marketing campaign.
///
/// Dates are ISO `YYYY-MM-DD` strings as they arrive from the data source.
/// Serialized field names are camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub clicks: u64,
    pub conversions: u64,
    pub cost: f64,
    /// Cost per click
    pub cpc: f64,
    pub status: CampaignStatus,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Conversions per hundred clicks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_rate: Option<f64>,
    /// Return on cost, in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roi: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignField {
    Id,
    Name,
    Clicks,
    Conversions,
    Cost,
    Cpc,
    Status,
    StartDate,
    EndDate,
    ConversionRate,
    Roi,
}

impl Field for CampaignField {
    fn name(self) -> &'static str {
        match self {
            CampaignField::Id => "id",
            CampaignField::Name => "name",
            CampaignField::Clicks => "clicks",
            CampaignField::Conversions => "conversions",
            CampaignField::Cost => "cost",
            CampaignField::Cpc => "cpc",
            CampaignField::Status => "status",
            CampaignField::StartDate => "start_date",
            CampaignField::EndDate => "end_date",
            CampaignField::ConversionRate => "conversion_rate",
            CampaignField::Roi => "roi",
        }
    }

    fn all() -> &'static [Self] {
        &[
            CampaignField::Id,
            CampaignField::Name,
            CampaignField::Clicks,
            CampaignField::Conversions,
            CampaignField::Cost,
            CampaignField::Cpc,
            CampaignField::Status,
            CampaignField::StartDate,
            CampaignField::EndDate,
            CampaignField::ConversionRate,
            CampaignField::Roi,
        ]
    }
}

impl fmt::Display for CampaignField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts `start_date`, `startDate` or `StartDate`.
impl FromStr for CampaignField {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_field(s, "campaign")
    }
}

impl Record for Campaign {
    type Field = CampaignField;

    fn value(&self, field: CampaignField) -> Value<'_> {
        match field {
            CampaignField::Id => Value::Text(&self.id),
            CampaignField::Name => Value::Text(&self.name),
            CampaignField::Clicks => Value::Number(self.clicks as f64),
            CampaignField::Conversions => Value::Number(self.conversions as f64),
            CampaignField::Cost => Value::Number(self.cost),
            CampaignField::Cpc => Value::Number(self.cpc),
            CampaignField::Status => Value::Text(self.status.as_str()),
            CampaignField::StartDate => Value::Text(&self.start_date),
            CampaignField::EndDate => self.end_date.as_deref().map_or(Value::Missing, Value::Text),
            CampaignField::ConversionRate => {
                self.conversion_rate.map_or(Value::Missing, Value::Number)
            }
            CampaignField::Roi => self.roi.map_or(Value::Missing, Value::Number),
        }
    }
}
