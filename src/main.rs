use crate::app::AppState;
use crate::config::Config;
use crate::geodata::ListingDataset;
use crate::router::handle;
use astra::Server;
use clap::Parser;
use tracing::{error, info};

mod app;
mod config;
mod domain;
mod errors;
mod geodata;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() -> anyhow::Result<()> {
    // Pick up a local .env the same way the front-end tooling would
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rent_gouging_map=info".into()),
        )
        .init();

    let config = Config::parse();
    let map = config.map_config()?;

    info!("Starting rent gouging map");
    info!("  Listen: {}", config.listen);
    info!("  Listings: {}", map.data_source);
    info!("  Workers: {}", config.max_workers);

    // Listings are loaded once and never refreshed
    let listings = match ListingDataset::load(&map.data_source) {
        Ok(listings) => listings,
        Err(e) => {
            error!("Loading listings failed: {e}");
            return Err(e.into());
        }
    };
    info!("Serving {} listings", listings.summary().total);

    let state = AppState { map, listings };
    let server = Server::bind(&config.listen).max_workers(config.max_workers);

    info!("Map available at http://{}", config.listen);
    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
        return Err(e.into());
    }

    info!("Server shut down cleanly.");
    Ok(())
}
