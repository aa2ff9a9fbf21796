// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, maps provider and lookup client, start HTTP server

mod config;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use config::Config;
use dotenv::dotenv;
use services::{GoogleMapsClient, MapsSdk, PlacesLookupClient};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Configuration error")?;

    log::info!("Starting places-lookup service...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Load the maps provider; without an API key the slot stays empty and
    // lookups answer SDK_UNAVAILABLE
    let sdk = if config.api_key().is_some() {
        let google = GoogleMapsClient::from_config(&config)
            .context("Failed to initialize Google Maps client")?;
        log::info!(
            "Google Maps provider loaded ({} req/s, timeout {:?})",
            config.provider_rate_limit_per_sec,
            config.request_timeout()
        );
        MapsSdk::loaded(Arc::new(google))
    } else {
        log::warn!("Maps provider not loaded: no API key configured");
        MapsSdk::unloaded()
    };

    // 5. One lookup client shared by every worker
    let lookup = web::Data::new(PlacesLookupClient::new(Arc::new(sdk), &config));

    // 6. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);

    HttpServer::new(move || {
        App::new()
            .app_data(lookup.clone())
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::places_config)
            .configure(handlers::directions_config)
    })
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {}", server_addr))?
    .run()
    .await?;

    Ok(())
}
