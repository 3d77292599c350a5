//! In-memory stores
//!
//! Same filtering and ordering rules as the Postgres stores, over a
//! fixed list of catalog items. Used by tests and for running the API
//! without a database.

use super::{CatalogStore, NewPlan, PlanStore, StoredPlan};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use fitness_platform_shared::{CatalogFilter, Exercise, Food, PlanKind};
use std::sync::RwLock;
use uuid::Uuid;

/// Catalog held in insertion order
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    exercises: Vec<Exercise>,
    foods: Vec<Food>,
}

impl InMemoryCatalogStore {
    pub fn new(exercises: Vec<Exercise>, foods: Vec<Food>) -> Self {
        Self { exercises, foods }
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn find_exercises(&self, filter: &CatalogFilter, limit: usize) -> Result<Vec<Exercise>> {
        Ok(self
            .exercises
            .iter()
            .filter(|e| filter.matches_exercise(e))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_foods(&self, filter: &CatalogFilter, limit: usize) -> Result<Vec<Food>> {
        Ok(self
            .foods
            .iter()
            .filter(|f| filter.matches_food(f))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryPlanStore {
    plans: RwLock<Vec<StoredPlan>>,
}

impl InMemoryPlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.plans.read().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> anyhow::Error {
    anyhow::anyhow!("plan store lock poisoned")
}

#[async_trait]
impl PlanStore for InMemoryPlanStore {
    async fn insert(&self, plan: NewPlan) -> Result<StoredPlan> {
        let stored = StoredPlan {
            id: Uuid::new_v4(),
            user_id: plan.user_id,
            kind: plan.kind,
            name: plan.name,
            goal: plan.goal,
            start_date: plan.schedule.start_date,
            end_date: plan.schedule.end_date,
            body: plan.body,
            created_at: Utc::now(),
        };
        self.plans.write().map_err(poisoned)?.push(stored.clone());
        Ok(stored)
    }

    async fn find(&self, user_id: Uuid, kind: PlanKind, id: Uuid) -> Result<Option<StoredPlan>> {
        Ok(self
            .plans
            .read()
            .map_err(poisoned)?
            .iter()
            .find(|p| p.id == id && p.user_id == user_id && p.kind == kind)
            .cloned())
    }

    async fn list(&self, user_id: Uuid, kind: Option<PlanKind>) -> Result<Vec<StoredPlan>> {
        let plans = self.plans.read().map_err(poisoned)?;
        Ok(plans
            .iter()
            .rev()
            .filter(|p| p.user_id == user_id && kind.map_or(true, |k| p.kind == k))
            .cloned()
            .collect())
    }
}
