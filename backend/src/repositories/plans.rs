//! Postgres-backed plan store
//!
//! Plans are stored whole as JSONB in `generated_plans`, with the columns
//! needed for listing pulled out alongside.

use super::{NewPlan, PlanStore, StoredPlan};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fitness_platform_shared::PlanKind;
use sqlx::PgPool;
use uuid::Uuid;

/// Plan record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlanRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: String,
    pub name: String,
    pub goal: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub body: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

pub(crate) fn parse_kind(kind: &str) -> Result<PlanKind> {
    match kind {
        "workout" => Ok(PlanKind::Workout),
        "meal" => Ok(PlanKind::Meal),
        other => Err(anyhow::anyhow!("Unknown plan kind: {}", other)),
    }
}

impl TryFrom<PlanRow> for StoredPlan {
    type Error = anyhow::Error;

    fn try_from(row: PlanRow) -> Result<Self> {
        Ok(StoredPlan {
            id: row.id,
            user_id: row.user_id,
            kind: parse_kind(&row.kind)?,
            name: row.name,
            goal: row.goal,
            start_date: row.start_date,
            end_date: row.end_date,
            body: row.body,
            created_at: row.created_at,
        })
    }
}

#[derive(Clone)]
pub struct PgPlanStore {
    pool: PgPool,
}

impl PgPlanStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanStore for PgPlanStore {
    async fn insert(&self, plan: NewPlan) -> Result<StoredPlan> {
        let row = sqlx::query_as::<_, PlanRow>(
            r#"
            INSERT INTO generated_plans (id, user_id, kind, name, goal, start_date, end_date, body)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, user_id, kind, name, goal, start_date, end_date, body, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(plan.user_id)
        .bind(plan.kind.as_str())
        .bind(&plan.name)
        .bind(&plan.goal)
        .bind(plan.schedule.start_date)
        .bind(plan.schedule.end_date)
        .bind(&plan.body)
        .fetch_one(&self.pool)
        .await
        .context("inserting generated plan")?;

        StoredPlan::try_from(row)
    }

    async fn find(&self, user_id: Uuid, kind: PlanKind, id: Uuid) -> Result<Option<StoredPlan>> {
        let row = sqlx::query_as::<_, PlanRow>(
            r#"
            SELECT id, user_id, kind, name, goal, start_date, end_date, body, created_at
            FROM generated_plans
            WHERE id = $1 AND user_id = $2 AND kind = $3
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(kind.as_str())
        .fetch_optional(&self.pool)
        .await
        .context("fetching generated plan")?;

        row.map(StoredPlan::try_from).transpose()
    }

    async fn list(&self, user_id: Uuid, kind: Option<PlanKind>) -> Result<Vec<StoredPlan>> {
        let rows = sqlx::query_as::<_, PlanRow>(
            r#"
            SELECT id, user_id, kind, name, goal, start_date, end_date, body, created_at
            FROM generated_plans
            WHERE user_id = $1 AND ($2::text IS NULL OR kind = $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(kind.map(|k| k.as_str()))
        .fetch_all(&self.pool)
        .await
        .context("listing generated plans")?;

        rows.into_iter().map(StoredPlan::try_from).collect()
    }
}
