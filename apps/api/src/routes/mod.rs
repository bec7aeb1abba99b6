pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::contact::handlers as contact;
use crate::errors::AppError;
use crate::profile::handlers as profile;
use crate::resume::handlers as resume;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Portfolio content
        .route("/api/profile", get(profile::handle_get_profile))
        .route("/api/resume/download", get(resume::handle_resume_download))
        .route("/api/contact", post(contact::handle_contact))
        // Technical concepts catalog
        .route("/api/concepts", get(catalog::handle_list_categories))
        .route("/api/concepts/:category", get(catalog::handle_category_page))
        .route(
            "/api/concepts/:category/:concept",
            get(catalog::handle_concept_detail),
        )
        .fallback(not_found)
        .with_state(state)
}
