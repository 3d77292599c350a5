//! Health check endpoints
//!
//! - /health - Basic health check
//! - /health/ready - Readiness probe (catalog store reachable)
//! - /health/live - Liveness probe

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<HealthChecks>,
}

#[derive(Serialize)]
pub struct HealthChecks {
    pub catalog: CheckStatus,
}

#[derive(Serialize)]
pub struct CheckStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn respond(status: &str, checks: Option<HealthChecks>) -> HealthResponse {
    HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks,
    }
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(respond("healthy", None))
}

/// Returns 503 when the catalog store cannot be reached
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    match state.catalog().ping().await {
        Ok(()) => {
            let checks = HealthChecks {
                catalog: CheckStatus {
                    status: "healthy".to_string(),
                    message: None,
                },
            };
            Ok(Json(respond("ready", Some(checks))))
        }
        Err(e) => {
            let checks = HealthChecks {
                catalog: CheckStatus {
                    status: "unhealthy".to_string(),
                    message: Some(e.to_string()),
                },
            };
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(respond("not_ready", Some(checks))),
            ))
        }
    }
}

pub async fn liveness_check() -> Json<HealthResponse> {
    Json(respond("alive", None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check_returns_healthy() {
        let response = health_check().await;
        assert_eq!(response.status, "healthy");
        assert!(!response.version.is_empty());
    }

    #[tokio::test]
    async fn test_liveness_check_returns_alive() {
        let response = liveness_check().await;
        assert_eq!(response.status, "alive");
    }
}
