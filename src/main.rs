use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use clap::Parser;
use dopc::config::Settings;
use dopc::error::handle_query_payload_error;
use dopc::routes::{self, AppState};
use dopc::services::VenueApiClient;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, error};

/// Delivery Order Price Calculator service
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Port to listen on, overrides the configured server.port
    #[arg(long, env = "DOPC_PORT")]
    port: Option<u16>,

    /// Configuration file to load instead of config/default.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    // Initialize logging
    dopc::logging::init(&settings.logging)?;

    info!("Starting DOPC service...");
    info!("Configuration loaded successfully");

    let venue_api = VenueApiClient::new(
        settings.venue_api.base_url.clone(),
        settings.venue_api.timeout(),
        settings.venue_api.connect_timeout(),
    )
    .map_err(|e| {
        error!("Failed to create venue API client: {}", e);
        std::io::Error::other(e)
    })?;

    info!(
        "Venue API client initialized (base: {}, timeout: {}s)",
        venue_api.base_url(),
        settings.venue_api.timeout_secs
    );

    // Build application state
    let app_state = AppState {
        venue_api: Arc::new(venue_api),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = cli.port.unwrap_or(settings.server.port);
    let workers = settings.server.workers.unwrap_or(4);

    info!("Started DOPC service on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
