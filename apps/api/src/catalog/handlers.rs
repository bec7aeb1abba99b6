//! Axum route handlers for the concepts catalog.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::catalog::browser::ConceptBrowser;
use crate::catalog::navigator::CatalogNavigator;
use crate::catalog::CategorySummary;
use crate::errors::AppError;
use crate::models::catalog::CategoryKey;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CatalogOverview<'a> {
    pub default_category: CategoryKey,
    pub categories: Vec<CategorySummary<'a>>,
}

fn parse_category(raw: &str) -> Result<CategoryKey, AppError> {
    raw.parse::<CategoryKey>()
        .map_err(|e| AppError::NotFound(e.to_string()))
}

/// GET /api/concepts
pub async fn handle_list_categories(State(state): State<AppState>) -> Response {
    let catalog = &state.catalog;
    Json(CatalogOverview {
        default_category: catalog.default_key(),
        categories: catalog.summaries(),
    })
    .into_response()
}

/// GET /api/concepts/:category
pub async fn handle_category_page(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Response, AppError> {
    let key = parse_category(&category)?;
    let mut navigator = CatalogNavigator::new(&state.catalog);
    navigator.select_category(key);
    Ok(Json(navigator.page()).into_response())
}

/// GET /api/concepts/:category/:concept
///
/// 404 when the concept is unknown or has no details to show.
pub async fn handle_concept_detail(
    State(state): State<AppState>,
    Path((category, slug)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let key = parse_category(&category)?;
    if state.catalog.concept(key, &slug).is_none() {
        return Err(AppError::NotFound(format!("Concept '{slug}' not found in '{key}'")));
    }

    let mut browser = ConceptBrowser::new(&state.catalog);
    browser.select_category(key);
    browser.open_concept(&slug);

    let Some(detail) = browser.detail() else {
        return Err(AppError::NotFound(format!("Concept '{slug}' has no details")));
    };
    Ok(Json(detail).into_response())
}
