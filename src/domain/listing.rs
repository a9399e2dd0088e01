// src/domain/listing.rs

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Closed mapping from the `home_type` key in the listings file to its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeType {
    #[default]
    Unknown,
    Townhouse,
    Apartment,
    Manufactured,
    MultiFamily,
    SingleFamily,
    Lot,
    Condo,
}

impl HomeType {
    /// Any key outside the table (including a missing one) is `Unknown`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "TOWNHOUSE" => HomeType::Townhouse,
            "APARTMENT" => HomeType::Apartment,
            "MANUFACTURED" => HomeType::Manufactured,
            "MULTI_FAMILY" => HomeType::MultiFamily,
            "SINGLE_FAMILY" => HomeType::SingleFamily,
            "LOT" => HomeType::Lot,
            "CONDO" => HomeType::Condo,
            _ => HomeType::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HomeType::Unknown => "Unknown",
            HomeType::Townhouse => "Townhouse",
            HomeType::Apartment => "Apartment",
            HomeType::Manufactured => "Manufactured",
            HomeType::MultiFamily => "Multi-family",
            HomeType::SingleFamily => "Single-family",
            HomeType::Lot => "Lot",
            HomeType::Condo => "Condo",
        }
    }
}

/// Which legal threshold applies to a listing.
///
/// Only `"fmr"` selects the fair-market-rent rule. Every other value,
/// and a missing one, falls back to the ten percent rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GougingRule {
    Fmr,
    #[default]
    TenPercent,
}

impl GougingRule {
    pub fn from_key(key: &str) -> Self {
        match key {
            "fmr" => GougingRule::Fmr,
            _ => GougingRule::TenPercent,
        }
    }
}

/// Properties of a single listing point as delivered in the GeoJSON file.
///
/// Nothing is validated here: numbers that fail to parse become NaN and
/// surface as such in the popup, and missing values stay `None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListingProperties {
    #[serde(deserialize_with = "lenient_text")]
    pub street_address: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub listing_url: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub bedrooms: Option<f64>,
    #[serde(deserialize_with = "home_type")]
    pub home_type: HomeType,
    #[serde(deserialize_with = "gouging_rule")]
    pub gouging_rule: GougingRule,

    // Prices and dates
    #[serde(deserialize_with = "lenient_number")]
    pub price_ceiling: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub base_price: Option<f64>,
    #[serde(deserialize_with = "lenient_text")]
    pub base_price_date: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub emergency_peak_price: Option<f64>,
    #[serde(deserialize_with = "lenient_text")]
    pub emergency_peak_price_date: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub latest_price: Option<f64>,
    #[serde(deserialize_with = "lenient_text")]
    pub latest_price_date: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub fair_market_rent: Option<f64>,

    // Fractions (0.2 == 20%)
    #[serde(deserialize_with = "lenient_number")]
    pub base_vs_peak_price: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub pct_increase_of_peak_over_base: Option<f64>,

    // Location context
    #[serde(deserialize_with = "lenient_text")]
    pub council_district: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub supervisor_district: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub city: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub community: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub jurisdiction: Option<String>,

    // Flags
    #[serde(deserialize_with = "lenient_flag")]
    pub was_ever_gouged: Option<bool>,
    #[serde(deserialize_with = "lenient_flag")]
    pub is_currently_gouged: Option<bool>,
}

impl ListingProperties {
    /// Builds listing properties from a raw GeoJSON `properties` value.
    /// Anything other than an object yields the all-missing default.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::deserialize(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        Value::Number(n) => Some(n.as_f64().unwrap_or(f64::NAN)),
        Value::String(s) => Some(s.trim().parse::<f64>().unwrap_or(f64::NAN)),
        _ => Some(f64::NAN),
    })
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => Some(b),
        Value::String(s) => match s.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

fn home_type<'de, D>(deserializer: D) -> Result<HomeType, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?
        .map(|key| HomeType::from_key(&key))
        .unwrap_or_default())
}

fn gouging_rule<'de, D>(deserializer: D) -> Result<GougingRule, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?
        .map(|key| GougingRule::from_key(&key))
        .unwrap_or_default())
}
