//! Loads the bundled profile into the database, replacing any existing one.
//!
//! Usage: `seed [path]`. Without an argument the path comes from `SEED_FILE`.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use tracing::{error, info};

use profile_api::config::Config;
use profile_api::db::create_pool;
use profile_api::logging::init_tracing;
use profile_api::profile::seed::seed_from_file;
use profile_api::profile::store::PgProfileStore;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error seeding database: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config);

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error seeding database: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Config) -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&config.seed_file));

    let pool = create_pool(&config.database_url).await?;
    let store = PgProfileStore::new(pool);

    let profile = seed_from_file(&store, &path).await?;
    info!("Seeded profile {} <{}>", profile.id, profile.document.email);
    Ok(())
}
