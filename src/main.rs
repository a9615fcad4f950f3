use actix_cors::Cors;
use actix_web::{http::Method, middleware, web, App, HttpServer};
use sol_imagery::config::{LoggingSettings, Settings};
use sol_imagery::services::SmtpMailer;
use sol_imagery::{build_state, routes};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Initialize tracing; `LOG_LEVEL` and `LOG_FORMAT` override the config file
fn init_logging(logging: &LoggingSettings) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Configuration comes first so the log level and format can live in it
    // Tracing is not up yet, so report straight to stderr
    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    init_logging(&settings.logging);

    info!("Starting Sol Imagery site...");
    info!("Configuration loaded successfully");

    let mailer = SmtpMailer::from_settings(&settings.mail).map_err(|e| {
        error!("Failed to configure mail transport: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!(
        "Mail relay {} ready, notifications go to {}",
        settings.mail.host,
        settings.mail.business_inbox()
    );

    let app_state = build_state(&settings, Arc::new(mailer));

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);
    let allowed_origin = settings.server.allowed_origin.clone();

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = match allowed_origin.as_deref() {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allowed_methods([Method::GET, Method::POST])
                .allow_any_header(),
            None => Cors::permissive(),
        };

        App::new()
            .app_data(web::Data::new(app_state.clone()))
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
