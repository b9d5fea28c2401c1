use std::sync::Arc;

use auth_service::auth::{PasswordHasher, TokenService};
use auth_service::config::AppConfig;
use auth_service::database::{self, PgUserStore};
use auth_service::routes;
use auth_service::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL and JWT_SECRET
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;
    tracing::info!("starting auth service in {:?} mode", config.environment);

    let pool = database::connect(&config.database_url).await?;
    tracing::info!("database connected");

    let state = AppState::new(
        Arc::new(PgUserStore::new(pool)),
        TokenService::new(
            config.security.jwt_secret.clone(),
            config.security.jwt_expiry_hours,
        ),
        PasswordHasher::default(),
    );

    let app = routes::app(state);

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("auth service listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shut down");
    Ok(())
}

// Orchestrators send SIGTERM, interactive use sends SIGINT; wait for either.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
