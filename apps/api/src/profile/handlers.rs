use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::profile::{Profile, ProfileDocument, ProfilePatch, Project};
use crate::profile::query::{list_projects, search, top_skills, SearchResults, SkillCount};
use crate::profile::service::{
    create_profile, delete_profile, get_profile, update_profile, DeleteConfirmation,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProjectsQuery {
    pub skill: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// POST /api/profile
pub async fn handle_create_profile(
    State(state): State<AppState>,
    payload: Result<Json<ProfileDocument>, JsonRejection>,
) -> Result<(StatusCode, Json<Profile>), AppError> {
    let Json(doc) = payload?;
    let profile = create_profile(state.store.as_ref(), doc).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// GET /api/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Result<Json<Profile>, AppError> {
    Ok(Json(get_profile(state.store.as_ref()).await?))
}

/// PUT /api/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    payload: Result<Json<ProfilePatch>, JsonRejection>,
) -> Result<Json<Profile>, AppError> {
    let Json(patch) = payload?;
    Ok(Json(update_profile(state.store.as_ref(), patch).await?))
}

/// DELETE /api/profile
pub async fn handle_delete_profile(
    State(state): State<AppState>,
) -> Result<Json<DeleteConfirmation>, AppError> {
    Ok(Json(delete_profile(state.store.as_ref()).await?))
}

/// GET /api/projects?skill=
pub async fn handle_list_projects(
    State(state): State<AppState>,
    query: Result<Query<ProjectsQuery>, QueryRejection>,
) -> Result<Json<Vec<Project>>, AppError> {
    let Query(params) = query?;
    let profile = get_profile(state.store.as_ref()).await?;
    Ok(Json(list_projects(&profile, params.skill.as_deref())))
}

/// GET /api/skills/top
pub async fn handle_top_skills(
    State(state): State<AppState>,
) -> Result<Json<Vec<SkillCount>>, AppError> {
    let profile = get_profile(state.store.as_ref()).await?;
    Ok(Json(top_skills(&profile)))
}

/// GET /api/search?q=
///
/// Rejects a missing or empty `q` before touching the store.
pub async fn handle_search(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<SearchResults>, AppError> {
    let Query(params) = query?;
    let q = params
        .q
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::BadRequest("Search query is required".to_string()))?;

    let profile = get_profile(state.store.as_ref()).await?;
    Ok(Json(search(&profile, &q)))
}
