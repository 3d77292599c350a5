//! Standalone metabolic calculator route

use crate::error::ApiResult;
use crate::extract::ApiJson;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use fitness_platform_shared::metabolic::MetabolicSummary;
use fitness_platform_shared::MetabolicRequest;

pub fn metabolic_routes() -> Router<AppState> {
    Router::new().route("/calculate", post(calculate))
}

/// POST /api/v1/metabolic/calculate
async fn calculate(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<MetabolicRequest>,
) -> ApiResult<Json<MetabolicSummary>> {
    Ok(Json(state.planner().calculate_metabolic(&req)?))
}
