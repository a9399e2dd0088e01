// src/config.rs

use clap::Parser;
use std::net::SocketAddr;
use thiserror::Error;

/// Path the annotated listings collection is served from.
pub const LISTINGS_PATH: &str = "/data/listings.geojson";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing Mapbox access token (set MAPBOX_ACCESS_TOKEN)")]
    MissingAccessToken,
    #[error("missing listings source (set WEB_MAP_GEOJSON to a path or URL)")]
    MissingDataSource,
}

#[derive(Parser, Debug)]
#[command(name = "rent-gouging-map")]
#[command(about = "Serves the rent gouging listings map")]
pub struct Config {
    /// Access token for the map tile provider
    #[arg(long, env = "MAPBOX_ACCESS_TOKEN", hide_env_values = true)]
    pub mapbox_access_token: Option<String>,

    /// Path or http(s) URL of the listings GeoJSON file
    #[arg(long, env = "WEB_MAP_GEOJSON")]
    pub web_map_geojson: Option<String>,

    /// Address to listen on
    #[arg(short, long, env = "WEB_MAP_LISTEN", default_value = "127.0.0.1:3000")]
    pub listen: SocketAddr,

    /// Upper bound on server worker threads
    #[arg(long, env = "WEB_MAP_MAX_WORKERS", default_value_t = 8)]
    pub max_workers: usize,
}

/// Everything the map page needs, handed to it explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapConfig {
    pub access_token: String,
    /// Where the listings file is loaded from at startup.
    pub data_source: String,
    /// Where the browser fetches the annotated listings from.
    pub data_url: String,
}

impl Config {
    /// Resolves the map settings, falling back to the `VITE_`-prefixed
    /// variables a front-end `.env` file would carry.
    pub fn map_config(&self) -> Result<MapConfig, ConfigError> {
        self.map_config_with(|key| std::env::var(key).ok())
    }

    pub fn map_config_with<F>(&self, lookup: F) -> Result<MapConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_token = non_empty(self.mapbox_access_token.clone())
            .or_else(|| non_empty(lookup("VITE_MAPBOX_ACCESS_TOKEN")))
            .ok_or(ConfigError::MissingAccessToken)?;

        let data_source = non_empty(self.web_map_geojson.clone())
            .or_else(|| non_empty(lookup("VITE_WEB_MAP_GEOJSON")))
            .ok_or(ConfigError::MissingDataSource)?;

        Ok(MapConfig {
            access_token,
            data_source,
            data_url: LISTINGS_PATH.to_string(),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
