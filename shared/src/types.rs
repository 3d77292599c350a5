//! API request and response types

use crate::catalog::{CatalogFilter, Difficulty};
use chrono::{DateTime, Utc};
use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::Validate;

// ============================================================================
// Generation Requests
// ============================================================================

/// Workout plan generation request
///
/// Every profile field is optional on the wire so that a missing field
/// produces the aggregate "all fields required" error instead of a
/// deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateWorkoutPlanRequest {
    #[validate(range(min = 1, max = 150))]
    pub age: Option<u32>,
    #[validate(range(min = 20.0, max = 500.0))]
    pub weight_kg: Option<f64>,
    #[validate(range(min = 50.0, max = 300.0))]
    pub height_cm: Option<f64>,
    pub gender: Option<String>,
    pub fitness_level: Option<String>,
    pub goal: Option<String>,
    /// Any value that is not a whole non-negative count reads as absent
    #[serde(default, deserialize_with = "lenient_count")]
    pub days_per_week: Option<u32>,
    #[validate(range(min = 1, max = 52))]
    pub duration_weeks: Option<u32>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientCount {
    Count(u32),
    Other(IgnoredAny),
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<LenientCount>::deserialize(deserializer)? {
        Some(LenientCount::Count(count)) => Some(count),
        Some(LenientCount::Other(_)) | None => None,
    })
}

/// Meal plan generation request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMealPlanRequest {
    #[validate(range(min = 1, max = 150))]
    pub age: Option<u32>,
    #[validate(range(min = 20.0, max = 500.0))]
    pub weight_kg: Option<f64>,
    #[validate(range(min = 50.0, max = 300.0))]
    pub height_cm: Option<f64>,
    pub gender: Option<String>,
    pub activity_level: Option<String>,
    pub goal: Option<String>,
    pub diet_type: Option<String>,
    #[validate(range(min = 1, max = 52))]
    pub duration_weeks: Option<u32>,
}

/// Standalone metabolic calculation request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MetabolicRequest {
    #[validate(range(min = 1, max = 150))]
    pub age: Option<u32>,
    #[validate(range(min = 20.0, max = 500.0))]
    pub weight_kg: Option<f64>,
    #[validate(range(min = 50.0, max = 300.0))]
    pub height_cm: Option<f64>,
    pub gender: Option<String>,
    pub activity_level: Option<String>,
    pub goal: Option<String>,
}

// ============================================================================
// Stored Plans
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanKind {
    Workout,
    Meal,
}

impl PlanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanKind::Workout => "workout",
            PlanKind::Meal => "meal",
        }
    }
}

/// A plan as persisted by the plan store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRecord<T> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub plan: T,
}

/// Generation response: the persisted plan plus computed insights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse<P, I> {
    pub plan: PlanRecord<P>,
    pub insights: I,
}

/// Listing entry for a user's plans
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub id: Uuid,
    pub kind: PlanKind,
    pub name: String,
    pub goal: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Catalog
// ============================================================================

/// Catalog browsing query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQueryParams {
    pub category: Option<String>,
    pub muscle_group: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub limit: Option<usize>,
}

impl CatalogQueryParams {
    pub const DEFAULT_LIMIT: usize = 20;
    pub const MAX_LIMIT: usize = 100;

    /// Convert into a store filter plus a bounded limit
    pub fn into_filter(self) -> (CatalogFilter, usize) {
        let limit = self
            .limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT);

        let filter = CatalogFilter {
            categories: self.category.into_iter().collect(),
            excluded_categories: Vec::new(),
            muscle_group: self.muscle_group,
            difficulties: self.difficulty.into_iter().collect(),
        };

        (filter, limit)
    }
}
