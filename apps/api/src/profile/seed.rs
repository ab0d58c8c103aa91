use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::profile::{Profile, ProfileDocument};
use crate::profile::service::replace_profile;
use crate::profile::store::ProfileStore;

/// Reads a profile document from a JSON file.
pub fn load_seed_file(path: &Path) -> Result<ProfileDocument> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    parse_seed(&raw).with_context(|| format!("invalid seed file {}", path.display()))
}

pub fn parse_seed(raw: &str) -> Result<ProfileDocument> {
    Ok(serde_json::from_str(raw)?)
}

/// Replaces whatever is stored with the profile from `path`.
pub async fn seed_from_file(store: &dyn ProfileStore, path: &Path) -> Result<Profile> {
    let doc = load_seed_file(path)?;
    info!("Loaded seed profile from {}", path.display());

    let profile = replace_profile(store, doc)
        .await
        .context("failed to store seed profile")?;

    info!("Profile seeded successfully: {}", profile.document.name);
    Ok(profile)
}
