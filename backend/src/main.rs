//! Service entry-point: loads settings, prepares storage, and serves HTTP.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use webinars::inbound::http::health::HealthState;
use webinars::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations_blocking};
use webinars::settings::AppSettings;

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

async fn connect_database(settings: &AppSettings) -> std::io::Result<Option<DbPool>> {
    let Some(url) = settings.database_url.clone() else {
        return Ok(None);
    };

    if settings.run_migrations {
        let applied = run_pending_migrations_blocking(url.clone())
            .await
            .map_err(std::io::Error::other)?;
        info!(applied, "database migrations complete");
    }

    let pool = DbPool::new(PoolConfig::new(url).with_max_size(settings.pool_max_size()))
        .await
        .map_err(std::io::Error::other)?;
    Ok(Some(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let fallback_user = settings.fallback_user().map_err(std::io::Error::other)?;
    let db_pool = connect_database(&settings).await?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr)
        .with_db_pool(db_pool)
        .with_fallback_user(fallback_user);
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, "webinars service listening");

    let result = server.await;
    health_state.mark_draining();
    result
}
