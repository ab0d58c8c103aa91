use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::profile::{Profile, ProfileDocument, ProfilePatch};
use crate::profile::store::ProfileStore;
use crate::profile::validation::prepare;

pub const PROFILE_EXISTS_MESSAGE: &str = "Profile already exists. Use PUT to update.";

#[derive(Debug, Serialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

/// Creates the singleton profile. Fails with `Conflict` if one exists.
pub async fn create_profile(
    store: &dyn ProfileStore,
    mut doc: ProfileDocument,
) -> Result<Profile, AppError> {
    if store.find().await?.is_some() {
        return Err(AppError::Conflict(PROFILE_EXISTS_MESSAGE.to_string()));
    }

    prepare(&mut doc)?;

    // A concurrent create can still win between the check and the insert.
    let profile = store
        .insert(&doc)
        .await?
        .ok_or_else(|| AppError::Conflict(PROFILE_EXISTS_MESSAGE.to_string()))?;

    info!("Created profile {} ({})", profile.id, profile.document.name);
    Ok(profile)
}

pub async fn get_profile(store: &dyn ProfileStore) -> Result<Profile, AppError> {
    store.find().await?.ok_or_else(AppError::profile_not_found)
}

/// Merges `patch` onto the current profile, re-validates and persists it.
pub async fn update_profile(
    store: &dyn ProfileStore,
    patch: ProfilePatch,
) -> Result<Profile, AppError> {
    let current = get_profile(store).await?;

    let mut doc = current.document;
    patch.apply_to(&mut doc);
    prepare(&mut doc)?;

    let profile = store
        .update(current.id, &doc)
        .await?
        .ok_or_else(AppError::profile_not_found)?;

    info!("Updated profile {}", profile.id);
    Ok(profile)
}

pub async fn delete_profile(store: &dyn ProfileStore) -> Result<DeleteConfirmation, AppError> {
    let current = get_profile(store).await?;

    if !store.delete(current.id).await? {
        return Err(AppError::profile_not_found());
    }

    info!("Deleted profile {}", current.id);
    Ok(DeleteConfirmation {
        message: "Profile deleted successfully".to_string(),
    })
}

/// Swaps whatever is stored for `doc` in one store operation. Used by seeding.
pub async fn replace_profile(
    store: &dyn ProfileStore,
    mut doc: ProfileDocument,
) -> Result<Profile, AppError> {
    prepare(&mut doc)?;

    let profile = store.replace(&doc).await?;
    info!("Replaced stored profile with {}", profile.id);
    Ok(profile)
}
