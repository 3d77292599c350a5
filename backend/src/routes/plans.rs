//! Plan generation and retrieval routes

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::extract::ApiJson;
use crate::services::{MealGeneration, WorkoutGeneration};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use fitness_platform_shared::{
    GenerateMealPlanRequest, GenerateWorkoutPlanRequest, MealPlan, PlanKind, PlanRecord,
    PlanSummary, WorkoutPlan,
};
use serde::Deserialize;
use uuid::Uuid;

pub fn plan_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_plans))
        .route("/workout/generate", post(generate_workout_plan))
        .route("/meal/generate", post(generate_meal_plan))
        .route("/workout/:id", get(get_workout_plan))
        .route("/meal/:id", get(get_meal_plan))
}

#[derive(Debug, Deserialize)]
struct ListPlansQuery {
    kind: Option<PlanKind>,
}

fn parse_plan_id(id: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| ApiError::validation("Invalid plan ID"))
}

/// POST /api/v1/plans/workout/generate
async fn generate_workout_plan(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(req): ApiJson<GenerateWorkoutPlanRequest>,
) -> ApiResult<(StatusCode, Json<WorkoutGeneration>)> {
    let generated = state
        .planner()
        .generate_workout_plan(auth.user_id, &req)
        .await?;
    Ok((StatusCode::CREATED, Json(generated)))
}

/// POST /api/v1/plans/meal/generate
async fn generate_meal_plan(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(req): ApiJson<GenerateMealPlanRequest>,
) -> ApiResult<(StatusCode, Json<MealGeneration>)> {
    let generated = state
        .planner()
        .generate_meal_plan(auth.user_id, &req)
        .await?;
    Ok((StatusCode::CREATED, Json(generated)))
}

/// GET /api/v1/plans?kind=workout|meal
async fn list_plans(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListPlansQuery>,
) -> ApiResult<Json<Vec<PlanSummary>>> {
    let plans = state.planner().list_plans(auth.user_id, query.kind).await?;
    Ok(Json(plans))
}

/// GET /api/v1/plans/workout/:id
async fn get_workout_plan(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<PlanRecord<WorkoutPlan>>> {
    let plan_id = parse_plan_id(&id)?;
    let plan = state.planner().get_workout_plan(auth.user_id, plan_id).await?;
    Ok(Json(plan))
}

/// GET /api/v1/plans/meal/:id
async fn get_meal_plan(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<PlanRecord<MealPlan>>> {
    let plan_id = parse_plan_id(&id)?;
    let plan = state.planner().get_meal_plan(auth.user_id, plan_id).await?;
    Ok(Json(plan))
}
