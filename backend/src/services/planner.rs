//! Plan generation service
//!
//! Runs a generation request end to end: validation, the selection
//! policy against the catalog store, assembly, and persistence.
//! Catalog shortages are logged and counted but never fail a request.

use crate::error::{ApiError, ApiResult};
use crate::repositories::{CatalogStore, PlanStore};
use chrono::Utc;
use fitness_platform_shared::assembler::{self, ExerciseSelection, FoodCandidates};
use fitness_platform_shared::metabolic::{self, MetabolicSummary};
use fitness_platform_shared::selection::{self, FoodGroup};
use fitness_platform_shared::validation;
use fitness_platform_shared::{
    DietType, Food, GenerateMealPlanRequest, GenerateWorkoutPlanRequest, GenerationResponse,
    MealInsights, MealPlan, MetabolicRequest, PlanDefaults, PlanKind, PlanRecord, PlanSummary,
    WorkoutInsights, WorkoutPlan,
};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub type WorkoutGeneration = GenerationResponse<WorkoutPlan, WorkoutInsights>;
pub type MealGeneration = GenerationResponse<MealPlan, MealInsights>;

fn record_shortage(role: &'static str, requested: usize, returned: usize) {
    if returned < requested {
        warn!(role, requested, returned, "Catalog shortage, continuing with fewer items");
        metrics::counter!("catalog_shortage_total", "role" => role).increment(1);
    }
}

/// Plan generation over pluggable catalog and plan stores
#[derive(Clone)]
pub struct PlanService {
    catalog: Arc<dyn CatalogStore>,
    plans: Arc<dyn PlanStore>,
    defaults: PlanDefaults,
}

impl PlanService {
    pub fn new(
        catalog: Arc<dyn CatalogStore>,
        plans: Arc<dyn PlanStore>,
        defaults: PlanDefaults,
    ) -> Self {
        Self {
            catalog,
            plans,
            defaults,
        }
    }

    pub fn catalog(&self) -> &dyn CatalogStore {
        self.catalog.as_ref()
    }

    pub fn defaults(&self) -> &PlanDefaults {
        &self.defaults
    }

    /// Generate and persist a workout plan for `user_id`
    pub async fn generate_workout_plan(
        &self,
        user_id: Uuid,
        request: &GenerateWorkoutPlanRequest,
    ) -> ApiResult<WorkoutGeneration> {
        let params = validation::workout_params(request)?;

        // Each selection keeps its role so assembly never depends on call order
        let mut selections = Vec::new();
        for query in selection::workout_queries(params.goal, params.fitness_level) {
            let exercises = self
                .catalog
                .find_exercises(&query.filter, query.limit)
                .await
                .map_err(ApiError::Internal)?;
            record_shortage(query.role.as_str(), query.limit, exercises.len());
            selections.push(ExerciseSelection {
                role: query.role,
                exercises,
            });
        }

        let generated =
            assembler::assemble_workout(&params, &selections, &self.defaults, Utc::now())?;
        let plan = self
            .plans
            .create_workout_plan(user_id, &generated.plan)
            .await
            .map_err(ApiError::Internal)?;

        metrics::counter!("plans_generated_total", "kind" => PlanKind::Workout.as_str())
            .increment(1);
        info!(
            user_id = %user_id,
            plan_id = %plan.id,
            goal = %params.goal,
            entries = plan.plan.exercises.len(),
            "Generated workout plan"
        );

        Ok(GenerationResponse {
            plan,
            insights: generated.insights,
        })
    }

    async fn fetch_food_group(
        &self,
        group: FoodGroup,
        diet: DietType,
    ) -> ApiResult<(FoodGroup, Vec<Food>)> {
        let query = selection::food_query(group, diet);
        let foods = self
            .catalog
            .find_foods(&query.filter, query.limit)
            .await
            .map_err(ApiError::Internal)?;
        record_shortage(group.as_str(), query.limit, foods.len());
        Ok((group, foods))
    }

    /// Generate and persist a meal plan for `user_id`
    pub async fn generate_meal_plan(
        &self,
        user_id: Uuid,
        request: &GenerateMealPlanRequest,
    ) -> ApiResult<MealGeneration> {
        let params = validation::meal_params(request)?;
        let diet = params.diet_type;

        // Candidate groups are independent lookups
        let (protein, carbohydrate, vegetable, fruit, fat) = tokio::try_join!(
            self.fetch_food_group(FoodGroup::Protein, diet),
            self.fetch_food_group(FoodGroup::Carbohydrate, diet),
            self.fetch_food_group(FoodGroup::Vegetable, diet),
            self.fetch_food_group(FoodGroup::Fruit, diet),
            self.fetch_food_group(FoodGroup::Fat, diet),
        )?;

        let mut candidates = FoodCandidates::new();
        for (group, foods) in [protein, carbohydrate, vegetable, fruit, fat] {
            candidates.insert(group, foods);
        }
        debug!(?diet, "Fetched meal candidates");

        let generated = assembler::assemble_meal(&params, &candidates, &self.defaults, Utc::now())?;
        let plan = self
            .plans
            .create_meal_plan(user_id, &generated.plan)
            .await
            .map_err(ApiError::Internal)?;

        metrics::counter!("plans_generated_total", "kind" => PlanKind::Meal.as_str()).increment(1);
        info!(
            user_id = %user_id,
            plan_id = %plan.id,
            goal = %params.goal,
            target_calories = plan.plan.target_calories,
            entries = plan.plan.meals.iter().map(|m| m.items.len()).sum::<usize>(),
            "Generated meal plan"
        );

        Ok(GenerationResponse {
            plan,
            insights: generated.insights,
        })
    }

    /// Metabolic numbers for a profile, without generating a plan
    pub fn calculate_metabolic(&self, request: &MetabolicRequest) -> ApiResult<MetabolicSummary> {
        let (profile, activity_level, goal) = validation::metabolic_inputs(request)?;
        Ok(metabolic::summarize(&profile, activity_level, goal, &self.defaults)?)
    }

    pub async fn list_plans(
        &self,
        user_id: Uuid,
        kind: Option<PlanKind>,
    ) -> ApiResult<Vec<PlanSummary>> {
        self.plans
            .list_plans(user_id, kind)
            .await
            .map_err(ApiError::Internal)
    }

    pub async fn get_workout_plan(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> ApiResult<PlanRecord<WorkoutPlan>> {
        self.plans
            .get_workout_plan(user_id, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Workout plan not found".to_string()))
    }

    pub async fn get_meal_plan(&self, user_id: Uuid, id: Uuid) -> ApiResult<PlanRecord<MealPlan>> {
        self.plans
            .get_meal_plan(user_id, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Meal plan not found".to_string()))
    }
}
