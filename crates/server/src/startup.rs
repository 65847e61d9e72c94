use std::{env, net::SocketAddr};

use axum::Router;
use common::logging::init_logging_default;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tracing::info;

use crate::routes;
use crate::state::AppState;

/// Load host/port from configs or env vars, with sensible fallbacks.
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(3000);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Public entry: connect to the store, apply migrations, serve HTTP.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_default();

    let mut run_migrations = true;
    let db = match configs::load_default() {
        Ok(mut cfg) => {
            cfg.database.normalize_from_env();
            run_migrations = cfg.database.run_migrations;
            if cfg.database.url.trim().is_empty() {
                models::db::connect().await?
            } else {
                models::db::connect_with(&cfg.database).await?
            }
        }
        Err(_) => models::db::connect().await?,
    };

    // Migration management lives here, at the composition root; the store
    // schema is never dropped or auto-synced.
    if run_migrations {
        migration::Migrator::up(&db, None).await?;
        info!(event = "migrations_applied", "database schema is up to date");
    }

    let state = AppState { db };
    let app: Router = routes::build_router(state);

    let addr = load_bind_addr()?;
    info!(%addr, "starting music collection server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
