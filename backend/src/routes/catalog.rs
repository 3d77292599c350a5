//! Public catalog browsing routes

use crate::error::ApiResult;
use crate::services::CatalogService;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use fitness_platform_shared::{CatalogQueryParams, Exercise, Food};

pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/exercises", get(list_exercises))
        .route("/foods", get(list_foods))
}

/// GET /api/v1/catalog/exercises
async fn list_exercises(
    State(state): State<AppState>,
    Query(params): Query<CatalogQueryParams>,
) -> ApiResult<Json<Vec<Exercise>>> {
    let exercises = CatalogService::list_exercises(state.catalog(), params).await?;
    Ok(Json(exercises))
}

/// GET /api/v1/catalog/foods
async fn list_foods(
    State(state): State<AppState>,
    Query(params): Query<CatalogQueryParams>,
) -> ApiResult<Json<Vec<Food>>> {
    let foods = CatalogService::list_foods(state.catalog(), params).await?;
    Ok(Json(foods))
}
