//! Application state management
//!
//! Shared state handed to every handler via Axum's state extraction.
//! All fields are `Arc`-backed, so cloning per request is O(1).

use crate::auth::JwtService;
use crate::config::AppConfig;
use crate::repositories::{CatalogStore, PgCatalogStore, PgPlanStore, PlanStore};
use crate::services::PlanService;
use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// Pre-initialized JWT service with cached keys
    pub jwt: JwtService,
    pub catalog: Arc<dyn CatalogStore>,
    pub planner: PlanService,
    /// Present when the Prometheus recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// State backed by Postgres stores
    pub fn new(db: PgPool, config: AppConfig) -> Self {
        Self::with_stores(
            config,
            Arc::new(PgCatalogStore::new(db.clone())),
            Arc::new(PgPlanStore::new(db)),
        )
    }

    /// State over arbitrary stores
    pub fn with_stores(
        config: AppConfig,
        catalog: Arc<dyn CatalogStore>,
        plans: Arc<dyn PlanStore>,
    ) -> Self {
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry_secs);
        let planner = PlanService::new(catalog.clone(), plans, config.planner.clone());

        Self {
            config: Arc::new(config),
            jwt,
            catalog,
            planner,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[inline]
    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }

    #[inline]
    pub fn catalog(&self) -> &dyn CatalogStore {
        self.catalog.as_ref()
    }

    #[inline]
    pub fn planner(&self) -> &PlanService {
        &self.planner
    }
}
