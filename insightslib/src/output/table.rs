//! Table-ready data structures for dashboard output.
//!
//! The data flow is:
//! 1. Records from a `DataSource`
//! 2. A `Page` cut by the table pipeline (searched, filtered, sorted)
//! 3. `DataTable` (formatted strings for display)
//!
//! `DataTable` is a pure presentation layer. It formats values with the
//! `format` helpers and never reorders or drops rows.

use serde::{Deserialize, Serialize};

use crate::analytics::GroupTotals;
use crate::data::{Campaign, CampaignField, MetricCard};
use crate::format::{format_currency, format_date, format_number, format_percentage};
use crate::query::{Page, SortConfig};
use crate::record::Field;
use crate::settings::Settings;

/// A single row in the table (data row or footer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Row label (campaign name, metric title, group label, "Total")
    pub label: String,
    /// Values for each remaining column, ready for display
    pub values: Vec<String>,
}

/// Table-ready dashboard data.
///
/// Renderers iterate over headers/rows/footer and apply styling only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Column headers, label column first
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<TableRow>,
    /// Line under the table (e.g., "Showing 1-10 of 25 campaigns")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

const CAMPAIGN_COLUMNS: [(CampaignField, &str); 8] = [
    (CampaignField::Name, "Campaign"),
    (CampaignField::Status, "Status"),
    (CampaignField::Clicks, "Clicks"),
    (CampaignField::Conversions, "Conversions"),
    (CampaignField::Cost, "Cost"),
    (CampaignField::Cpc, "CPC"),
    (CampaignField::ConversionRate, "Conv. Rate"),
    (CampaignField::StartDate, "Start"),
];

impl DataTable {
    /// Format one page of campaigns.
    ///
    /// The active sort column gets a direction arrow in its header.
    pub fn from_campaign_page(
        page: &Page<&Campaign>,
        sort: Option<SortConfig<CampaignField>>,
        settings: &Settings,
    ) -> Self {
        let headers = CAMPAIGN_COLUMNS
            .iter()
            .map(|(field, header)| match sort {
                Some(config) if config.key == *field && config.is_active() => {
                    format!("{header} {}", config.direction.arrow())
                }
                _ => header.to_string(),
            })
            .collect();

        let rows = page
            .items
            .iter()
            .map(|campaign| campaign_row(campaign, settings))
            .collect();

        let summary = match page.meta.item_range() {
            Some((first, last)) => format!(
                "Showing {first}-{last} of {} campaigns · {}",
                page.meta.total_items,
                page.meta.page_label()
            ),
            None if page.meta.total_items == 0 => "No campaigns found".to_string(),
            None => format!(
                "No campaigns on this page · {} campaigns · {}",
                page.meta.total_items,
                page.meta.page_label()
            ),
        };

        DataTable {
            title: None,
            headers,
            rows,
            footer: None,
            summary: Some(summary),
        }
    }

    /// Format metric cards as value and change columns.
    pub fn from_metrics(cards: &[MetricCard], settings: &Settings) -> Self {
        let rows = cards
            .iter()
            .map(|card| TableRow {
                label: card.title.clone(),
                values: vec![
                    card.formatted_value(&settings.locale, &settings.currency),
                    format!("{} {}", card.trend().arrow(), card.formatted_change()),
                ],
            })
            .collect();

        DataTable {
            title: None,
            headers: vec!["Metric".into(), "Value".into(), "Change".into()],
            rows,
            footer: None,
            summary: None,
        }
    }

    /// Format group totals with each group's share of the whole.
    pub fn from_totals<F: Field>(totals: &GroupTotals, group_key: F, sum_field: F) -> Self {
        let rows = totals
            .iter()
            .zip(totals.shares())
            .map(|((label, sum), (_, share))| TableRow {
                label: if label.is_empty() {
                    "(none)".to_string()
                } else {
                    label.to_string()
                },
                values: vec![format_number(sum), format_percentage(share, 0)],
            })
            .collect();
        let footer = TableRow {
            label: format!("Total ({} groups)", totals.len()),
            values: vec![format_number(totals.total()), String::new()],
        };

        DataTable {
            title: Some(format!("{} by {}", sum_field.name(), group_key.name())),
            headers: vec![group_key.name().into(), sum_field.name().into(), "Share".into()],
            rows,
            footer: Some(footer),
            summary: None,
        }
    }
}

fn campaign_row(campaign: &Campaign, settings: &Settings) -> TableRow {
    let start = format_date(&campaign.start_date, settings.date_format).unwrap_or_else(|err| {
        tracing::warn!(campaign = %campaign.id, error = %err, "unreadable start date");
        campaign.start_date.clone()
    });

    TableRow {
        label: campaign.name.clone(),
        values: vec![
            campaign.status.to_string(),
            format_number(campaign.clicks as f64),
            format_number(campaign.conversions as f64),
            format_currency(campaign.cost, &settings.locale, &settings.currency),
            format_currency(campaign.cpc, &settings.locale, &settings.currency),
            campaign
                .conversion_rate
                .map(|rate| format_percentage(rate, 1))
                .unwrap_or_else(|| "-".to_string()),
            start,
        ],
    }
}
