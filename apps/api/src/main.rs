use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use profile_api::config::Config;
use profile_api::db::create_pool;
use profile_api::logging::init_tracing;
use profile_api::profile::store::PgProfileStore;
use profile_api::routes::build_router;
use profile_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    init_tracing(&config);

    info!("Starting Profile API v{}", env!("CARGO_PKG_VERSION"));

    let db = create_pool(&config.database_url).await?;
    let store = Arc::new(PgProfileStore::new(db));

    let state = AppState {
        store,
        config: config.clone(),
    };

    let app = build_router(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Server is running on port {}", config.port);
    info!("Environment: {}", config.app_env);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
