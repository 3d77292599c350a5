//! Data access layer
//!
//! The planner talks to storage only through [`CatalogStore`] and
//! [`PlanStore`]. Postgres implementations back the running service;
//! the in-memory ones back tests and local runs without a database.

pub mod catalog;
pub mod memory;
pub mod plans;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fitness_platform_shared::{
    CatalogFilter, Exercise, Food, MealPlan, PlanKind, PlanRecord, PlanSchedule, PlanSummary,
    WorkoutPlan,
};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

pub use catalog::PgCatalogStore;
pub use memory::{InMemoryCatalogStore, InMemoryPlanStore};
pub use plans::PgPlanStore;

/// Read-only access to the exercise and food catalog
///
/// Results contain only active items and come back in catalog order,
/// truncated to `limit`.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn find_exercises(&self, filter: &CatalogFilter, limit: usize) -> Result<Vec<Exercise>>;

    async fn find_foods(&self, filter: &CatalogFilter, limit: usize) -> Result<Vec<Food>>;

    /// Readiness probe
    async fn ping(&self) -> Result<()>;
}

/// A plan about to be persisted. `body` is the serialized plan.
#[derive(Debug, Clone)]
pub struct NewPlan {
    pub user_id: Uuid,
    pub kind: PlanKind,
    pub name: String,
    pub goal: String,
    pub schedule: PlanSchedule,
    pub body: serde_json::Value,
}

/// A persisted plan row
#[derive(Debug, Clone, PartialEq)]
pub struct StoredPlan {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: PlanKind,
    pub name: String,
    pub goal: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub body: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl NewPlan {
    fn from_plan<T: Serialize>(
        user_id: Uuid,
        kind: PlanKind,
        name: &str,
        goal: String,
        schedule: PlanSchedule,
        plan: &T,
    ) -> Result<Self> {
        Ok(NewPlan {
            user_id,
            kind,
            name: name.to_string(),
            goal,
            schedule,
            body: serde_json::to_value(plan)?,
        })
    }
}

impl StoredPlan {
    /// Decode the stored body back into a typed plan record
    pub fn into_record<T: DeserializeOwned>(self) -> Result<PlanRecord<T>> {
        let plan = serde_json::from_value(self.body)
            .map_err(|e| anyhow::anyhow!("plan {} has a malformed body: {}", self.id, e))?;
        Ok(PlanRecord {
            id: self.id,
            user_id: self.user_id,
            created_at: self.created_at,
            plan,
        })
    }

    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            id: self.id,
            kind: self.kind,
            name: self.name.clone(),
            goal: self.goal.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            created_at: self.created_at,
        }
    }
}

/// Persistence for generated plans. Plans are immutable once stored.
///
/// Implementors provide the row-level operations; the typed methods are
/// built on top of them.
#[async_trait]
pub trait PlanStore: Send + Sync {
    async fn insert(&self, plan: NewPlan) -> Result<StoredPlan>;

    /// Plans are only visible to their owner
    async fn find(&self, user_id: Uuid, kind: PlanKind, id: Uuid) -> Result<Option<StoredPlan>>;

    /// Newest first
    async fn list(&self, user_id: Uuid, kind: Option<PlanKind>) -> Result<Vec<StoredPlan>>;

    async fn create_workout_plan(
        &self,
        user_id: Uuid,
        plan: &WorkoutPlan,
    ) -> Result<PlanRecord<WorkoutPlan>> {
        let new_plan = NewPlan::from_plan(
            user_id,
            PlanKind::Workout,
            &plan.name,
            plan.goal.to_string(),
            plan.schedule,
            plan,
        )?;
        self.insert(new_plan).await?.into_record()
    }

    async fn create_meal_plan(&self, user_id: Uuid, plan: &MealPlan) -> Result<PlanRecord<MealPlan>> {
        let new_plan = NewPlan::from_plan(
            user_id,
            PlanKind::Meal,
            &plan.name,
            plan.goal.to_string(),
            plan.schedule,
            plan,
        )?;
        self.insert(new_plan).await?.into_record()
    }

    async fn get_workout_plan(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<PlanRecord<WorkoutPlan>>> {
        self.find(user_id, PlanKind::Workout, id)
            .await?
            .map(StoredPlan::into_record)
            .transpose()
    }

    async fn get_meal_plan(&self, user_id: Uuid, id: Uuid) -> Result<Option<PlanRecord<MealPlan>>> {
        self.find(user_id, PlanKind::Meal, id)
            .await?
            .map(StoredPlan::into_record)
            .transpose()
    }

    async fn list_plans(&self, user_id: Uuid, kind: Option<PlanKind>) -> Result<Vec<PlanSummary>> {
        Ok(self
            .list(user_id, kind)
            .await?
            .iter()
            .map(StoredPlan::summary)
            .collect())
    }
}
