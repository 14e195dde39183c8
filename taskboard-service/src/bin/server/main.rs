use std::sync::Arc;

use auth::JwtHandler;
use sqlx::postgres::PgPoolOptions;
use taskboard_service::config::Config;
use taskboard_service::inbound::http::router::create_router;
use taskboard_service::outbound::repositories::PostgresStore;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskboard_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "taskboard-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    // The database URL carries credentials and the jwt secret is a secret;
    // neither belongs in the startup log.
    let config = Config::load()?;

    tracing::info!(http_port = config.server.http_port, "Configuration loaded");

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let store = Arc::new(PostgresStore::new(pg_pool));
    let jwt_handler = Arc::new(JwtHandler::new(config.jwt.secret.as_bytes()));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(store, jwt_handler);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
