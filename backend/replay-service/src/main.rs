use actix_web::{web, App, HttpServer};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use replay_service::config::Config;
use replay_service::handlers;
use replay_service::services::ReplayCounter;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().expect("Failed to load configuration");

    tracing::info!("Starting replay-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    // One registry for the process lifetime, shared by every worker.
    let replay_counter = web::Data::new(ReplayCounter::new());

    HttpServer::new(move || {
        App::new()
            .app_data(replay_counter.clone())
            .route("/health", web::get().to(|| async { "OK" }))
            .configure(handlers::configure_routes)
    })
    .bind(format!("0.0.0.0:{}", config.app.port))?
    .run()
    .await
}
