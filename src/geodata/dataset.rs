// geodata/dataset.rs
use crate::domain::{GougingRule, ListingProperties};
use crate::geodata::{FeatureCollection, GeoDataError};
use crate::templates::describe;
use reqwest::blocking::Client;
use serde_json::Value;
use std::fs;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

pub const POPUP_PROPERTY: &str = "popup_html";

const USER_AGENT: &str = concat!("rent-gouging-map/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetSummary {
    pub total: usize,
    pub fmr: usize,
    pub ten_percent: usize,
    pub currently_gouged: usize,
}

/// The listings collection, loaded once and annotated with popup fragments.
#[derive(Debug)]
pub struct ListingDataset {
    body: Vec<u8>,
    summary: DatasetSummary,
}

impl ListingDataset {
    /// Loads from an `http(s)` URL or, failing that, a local file path.
    pub fn load(source: &str) -> Result<Self, GeoDataError> {
        let text = match remote_url(source) {
            Some(url) => fetch(&url)?,
            None => fs::read_to_string(source).map_err(|e| GeoDataError::Read {
                path: source.to_string(),
                source: e,
            })?,
        };

        let dataset = Self::from_json(&text)?;
        info!(
            source,
            total = dataset.summary.total,
            fmr = dataset.summary.fmr,
            ten_percent = dataset.summary.ten_percent,
            currently_gouged = dataset.summary.currently_gouged,
            "listings loaded"
        );
        Ok(dataset)
    }

    pub fn from_json(text: &str) -> Result<Self, GeoDataError> {
        let mut collection: FeatureCollection = serde_json::from_str(text)?;
        if collection.kind != "FeatureCollection" {
            return Err(GeoDataError::NotAFeatureCollection(collection.kind));
        }

        let mut summary = DatasetSummary::default();
        for feature in &mut collection.features {
            if !feature.properties.is_object() {
                debug!("feature without properties left unannotated");
                continue;
            }

            let listing = ListingProperties::from_value(&feature.properties);
            summary.total += 1;
            match listing.gouging_rule {
                GougingRule::Fmr => summary.fmr += 1,
                GougingRule::TenPercent => summary.ten_percent += 1,
            }
            if listing.is_currently_gouged == Some(true) {
                summary.currently_gouged += 1;
            }

            if let Value::Object(props) = &mut feature.properties {
                props.insert(
                    POPUP_PROPERTY.to_string(),
                    Value::String(describe(&listing).into_string()),
                );
            }
        }

        let body = serde_json::to_vec(&collection)?;
        Ok(Self { body, summary })
    }

    /// Serialized, annotated collection as served to the browser.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn summary(&self) -> DatasetSummary {
        self.summary
    }
}

fn remote_url(source: &str) -> Option<Url> {
    Url::parse(source)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
}

fn fetch(url: &Url) -> Result<String, GeoDataError> {
    let fetch_err = |message: String| GeoDataError::Fetch {
        url: url.to_string(),
        message,
    };

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(60))
        .build()
        .map_err(|e| fetch_err(e.to_string()))?;

    let resp = client
        .get(url.as_str())
        .send()
        .map_err(|e| fetch_err(e.to_string()))?;

    if !resp.status().is_success() {
        return Err(fetch_err(format!("HTTP {}", resp.status())));
    }

    resp.text().map_err(|e| fetch_err(e.to_string()))
}
