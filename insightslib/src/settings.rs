//! User-level display settings.
//!
//! Every field has a default, so a settings file only needs the keys it
//! changes:
//!
//! ```json
//! { "locale": "de-DE", "currency": "EUR", "items_per_page": 25 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::CampaignField;
use crate::error::InsightsError;
use crate::format::DateFormat;
use crate::query::DEFAULT_ITEMS_PER_PAGE;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Locale tag for currency formatting (`en-US`, `de-DE`, ...)
    #[serde(default = "default_locale")]
    pub locale: String,
    /// ISO 4217 currency code
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
    #[serde(default)]
    pub date_format: DateFormat,
    /// Campaign columns a free-text search looks at
    #[serde(default = "default_search_fields")]
    pub search_fields: Vec<CampaignField>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            currency: default_currency(),
            items_per_page: default_items_per_page(),
            date_format: DateFormat::default(),
            search_fields: default_search_fields(),
        }
    }
}

fn default_locale() -> String {
    "en-US".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

fn default_search_fields() -> Vec<CampaignField> {
    vec![CampaignField::Name, CampaignField::Status]
}

impl Settings {
    /// Read settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| InsightsError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings =
            serde_json::from_str(&text).map_err(|source| InsightsError::Decode {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), locale = %settings.locale, "loaded settings");
        Ok(settings)
    }
}
