//! Website server - main entry point.
//!
//! Starts the Actix-web server with configured routes and middleware.

use actix_web::{App, HttpServer, web};
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use website_lib::config::Config;
use website_lib::middleware::RequestLogger;
use website_lib::templates::Templates;
use website_lib::views;

/// Perform health check (for Docker healthcheck).
fn health_check() -> bool {
    Config::from_env().is_ok()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // --health-check is used by Docker HEALTHCHECK
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(if health_check() { 0 } else { 1 });
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("");
            error!("Please check your environment variables:");
            error!("  - RUST_ENV must be set to 'development' or 'production'");
            error!("  - In production, SITE_SESSION_SECRET must be set");
            std::process::exit(1);
        }
    };

    info!("========================================");
    info!("  Website Server");
    info!("  Environment: {}", config.environment);
    info!("========================================");

    if config.is_development() {
        warn!("Running in DEVELOPMENT mode - do not use in production!");
    }

    let templates = match Templates::from_dir(&config.template_dir) {
        Ok(t) => web::Data::new(t),
        Err(e) => {
            error!("Failed to load templates: {}", e);
            std::process::exit(1);
        }
    };

    match &config.session.login_url {
        Some(url) => info!("Unauthenticated page requests redirect to {}", url),
        None => info!("No login page configured; unauthenticated page requests get 401"),
    }

    let session = web::Data::new(config.session.clone());
    let static_dir = config.static_dir.clone();
    if static_dir.is_dir() {
        info!("Serving static assets from {:?}", static_dir);
    } else {
        warn!("Static directory {:?} not found, /static disabled", static_dir);
    }

    let bind_address = config.bind_address();
    let worker_count = if config.is_development() {
        4
    } else {
        num_cpus::get()
    };
    info!(
        "Starting server at http://{} ({} workers)",
        bind_address, worker_count
    );

    HttpServer::new(move || {
        App::new()
            .wrap(RequestLogger)
            .app_data(session.clone())
            .app_data(templates.clone())
            .configure(views::configure_health_routes)
            .configure(views::configure_home_routes)
            .configure(views::configure_static_routes(static_dir.clone()))
    })
    .workers(worker_count)
    .bind(&bind_address)?
    .run()
    .await
}
