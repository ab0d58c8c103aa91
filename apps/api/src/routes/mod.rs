pub mod health;

use axum::{routing::get, Router};

use crate::middleware::{apply_middleware, route_not_found};
use crate::profile::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(health::health_handler))
        // Profile CRUD
        .route(
            "/api/profile",
            get(handlers::handle_get_profile)
                .post(handlers::handle_create_profile)
                .put(handlers::handle_update_profile)
                .delete(handlers::handle_delete_profile),
        )
        // Queries
        .route("/api/projects", get(handlers::handle_list_projects))
        .route("/api/skills/top", get(handlers::handle_top_skills))
        .route("/api/search", get(handlers::handle_search))
        .fallback(route_not_found)
        .with_state(state);

    apply_middleware(router)
}
