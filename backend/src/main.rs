//! Backend entry-point: wires the JSON endpoints over PostgreSQL.

mod server;

use actix_web::cookie::{Key, SameSite};
use actix_web::web;
use std::env;
use std::net::SocketAddr;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{run_migrations, DbPool, PoolConfig};
use server::ServerConfig;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let key = session_key()?;
    let cookie_secure = env::var("SESSION_COOKIE_SECURE")
        .map(|v| v != "0")
        .unwrap_or(true);
    let bind_addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".into())
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR: {e}")))?;
    let database_url = env::var("DATABASE_URL")
        .map_err(|_| std::io::Error::other("DATABASE_URL must be set"))?;

    // Diesel's migration harness is synchronous; run it off the runtime
    // before serving traffic.
    let migration_url = database_url.clone();
    tokio::task::spawn_blocking(move || run_migrations(&migration_url))
        .await
        .map_err(std::io::Error::other)?
        .map_err(std::io::Error::other)?;

    let db_pool = DbPool::new(PoolConfig::new(&database_url))
        .await
        .map_err(std::io::Error::other)?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(key, cookie_secure, SameSite::Lax, bind_addr, db_pool);
    let server = server::create_server(health_state, config)?;
    server.await
}

/// Resolve the session key from `APP_SECRET_KEY`.
///
/// Debug builds (or `APP_ALLOW_EPHEMERAL_KEY=1`) fall back to a generated
/// key so local runs work without configuration; release builds refuse to
/// start without real key material.
fn session_key() -> std::io::Result<Key> {
    match env::var("APP_SECRET_KEY") {
        Ok(secret) if secret.len() >= 32 => Ok(Key::derive_from(secret.as_bytes())),
        Ok(_) => Err(std::io::Error::other(
            "APP_SECRET_KEY must provide at least 32 bytes of key material",
        )),
        Err(e) => {
            let allow_dev = env::var("APP_ALLOW_EPHEMERAL_KEY").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(error = %e, "APP_SECRET_KEY unset; using a temporary session key (dev only)");
                Ok(Key::generate())
            } else {
                Err(std::io::Error::other("APP_SECRET_KEY must be set"))
            }
        }
    }
}
