//! Postgres-backed exercise and food catalog

use super::CatalogStore;
use crate::db;
use anyhow::{Context, Result};
use async_trait::async_trait;
use fitness_platform_shared::{CatalogFilter, Difficulty, Exercise, Food, Nutrition};
use rust_decimal::{prelude::ToPrimitive, Decimal};
use sqlx::PgPool;
use uuid::Uuid;

/// Exercise record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ExerciseRecord {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub muscle_group: String,
    pub met_value: Decimal,
    pub difficulty: String,
    pub equipment: Option<String>,
    pub is_active: bool,
}

impl TryFrom<ExerciseRecord> for Exercise {
    type Error = anyhow::Error;

    fn try_from(record: ExerciseRecord) -> Result<Self> {
        let difficulty: Difficulty = record
            .difficulty
            .parse()
            .map_err(|e: String| anyhow::anyhow!("exercise {}: {}", record.id, e))?;

        Ok(Exercise {
            id: record.id,
            name: record.name,
            category: record.category,
            muscle_group: record.muscle_group,
            met_value: decimal_to_f64(record.met_value),
            difficulty,
            equipment: record.equipment,
            is_active: record.is_active,
        })
    }
}

/// Food record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FoodRecord {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub calories: Decimal,
    pub protein: Decimal,
    pub carbs: Decimal,
    pub fats: Decimal,
    pub is_active: bool,
}

impl From<FoodRecord> for Food {
    fn from(record: FoodRecord) -> Self {
        Food {
            id: record.id,
            name: record.name,
            category: record.category,
            nutrition: Nutrition {
                calories: decimal_to_f64(record.calories),
                protein: decimal_to_f64(record.protein),
                carbs: decimal_to_f64(record.carbs),
                fats: decimal_to_f64(record.fats),
            },
            is_active: record.is_active,
        }
    }
}

fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

fn difficulty_labels(filter: &CatalogFilter) -> Vec<String> {
    filter
        .difficulties
        .iter()
        .map(|d| d.as_str().to_string())
        .collect()
}

/// Catalog store over the `exercises` and `foods` tables
#[derive(Clone)]
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn find_exercises(&self, filter: &CatalogFilter, limit: usize) -> Result<Vec<Exercise>> {
        // Empty arrays mean "no constraint"
        let records = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            SELECT id, name, category, muscle_group, met_value, difficulty, equipment, is_active
            FROM exercises
            WHERE is_active
              AND (cardinality($1::text[]) = 0 OR category = ANY($1))
              AND NOT (category = ANY($2::text[]))
              AND ($3::text IS NULL OR muscle_group = $3)
              AND (cardinality($4::text[]) = 0 OR difficulty = ANY($4))
            ORDER BY seq
            LIMIT $5
            "#,
        )
        .bind(&filter.categories)
        .bind(&filter.excluded_categories)
        .bind(&filter.muscle_group)
        .bind(difficulty_labels(filter))
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .context("querying exercises")?;

        records.into_iter().map(Exercise::try_from).collect()
    }

    async fn find_foods(&self, filter: &CatalogFilter, limit: usize) -> Result<Vec<Food>> {
        let records = sqlx::query_as::<_, FoodRecord>(
            r#"
            SELECT id, name, category, calories, protein, carbs, fats, is_active
            FROM foods
            WHERE is_active
              AND (cardinality($1::text[]) = 0 OR category = ANY($1))
              AND NOT (category = ANY($2::text[]))
            ORDER BY seq
            LIMIT $3
            "#,
        )
        .bind(&filter.categories)
        .bind(&filter.excluded_categories)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .context("querying foods")?;

        Ok(records.into_iter().map(Food::from).collect())
    }

    async fn ping(&self) -> Result<()> {
        db::health_check(&self.pool).await
    }
}
