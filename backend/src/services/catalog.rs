//! Catalog browsing service

use crate::error::{ApiError, ApiResult};
use crate::repositories::CatalogStore;
use fitness_platform_shared::{CatalogQueryParams, Exercise, Food};

pub struct CatalogService;

impl CatalogService {
    pub async fn list_exercises(
        catalog: &dyn CatalogStore,
        params: CatalogQueryParams,
    ) -> ApiResult<Vec<Exercise>> {
        let (filter, limit) = params.into_filter();
        catalog
            .find_exercises(&filter, limit)
            .await
            .map_err(ApiError::Internal)
    }

    /// Muscle group and difficulty are ignored for foods
    pub async fn list_foods(
        catalog: &dyn CatalogStore,
        params: CatalogQueryParams,
    ) -> ApiResult<Vec<Food>> {
        let (filter, limit) = params.into_filter();
        catalog
            .find_foods(&filter, limit)
            .await
            .map_err(ApiError::Internal)
    }
}
