//! Entry point: load config, wire dependencies, and run the server.

use notif_gate::config::Config;
use notif_gate::db;
use notif_gate::services::{Gatekeeper, HttpTokenVerifier, PgUserDirectory};
use notif_gate::{create_app, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("config: {}", e))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db_pool = db::create_pool(&config.database_url).await?;
    let verifier = Arc::new(HttpTokenVerifier::new(config.user_auth_api.clone()));
    let directory = Arc::new(PgUserDirectory::new(db_pool));
    let state = AppState::new(Gatekeeper::new(verifier, directory));

    let app = create_app(state);

    tracing::info!(addr = %config.server_addr, auth_api = %config.user_auth_api, "listening");
    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
