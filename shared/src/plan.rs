//! Generated plan types
//!
//! A plan is created once per generation call and handed to the plan
//! store. Nothing in this crate mutates a plan after it is returned.

use crate::catalog::{Difficulty, Exercise, Food};
use crate::metabolic::{BmiCategory, Macros};
use crate::profile::{DietType, FitnessLevel, MealGoal, WorkoutGoal};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Schedule
// ============================================================================

/// Plan window; `end_date` is always exactly `duration_weeks * 7` days
/// after `start_date`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSchedule {
    pub duration_weeks: u32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl PlanSchedule {
    pub fn starting_at(start_date: DateTime<Utc>, duration_weeks: u32) -> Self {
        Self {
            duration_weeks,
            start_date,
            end_date: start_date + Duration::days(duration_weeks as i64 * 7),
        }
    }
}

// ============================================================================
// Workout Plans
// ============================================================================

/// Denormalized view of the catalog exercise an entry points at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRef {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub muscle_group: String,
}

impl From<&Exercise> for ExerciseRef {
    fn from(exercise: &Exercise) -> Self {
        Self {
            id: exercise.id,
            name: exercise.name.clone(),
            category: exercise.category.clone(),
            muscle_group: exercise.muscle_group.clone(),
        }
    }
}

/// One exercise in a workout plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanExerciseEntry {
    pub exercise: ExerciseRef,
    pub sets: u32,
    pub reps: u32,
    pub duration_minutes: u32,
    pub rest_seconds: u32,
    /// 1-based position in the plan
    pub order: u32,
    pub estimated_calories: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub name: String,
    pub goal: WorkoutGoal,
    pub fitness_level: FitnessLevel,
    pub difficulty: Difficulty,
    pub frequency: String,
    pub exercises: Vec<PlanExerciseEntry>,
    #[serde(flatten)]
    pub schedule: PlanSchedule,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutInsights {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub recommended_duration: String,
    pub total_exercises: usize,
    pub estimated_calories_per_session: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedWorkoutPlan {
    pub plan: WorkoutPlan,
    pub insights: WorkoutInsights,
}

// ============================================================================
// Meal Plans
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    #[serde(rename = "Mid-Morning Snack")]
    MidMorningSnack,
    Lunch,
    #[serde(rename = "Afternoon Snack")]
    AfternoonSnack,
    Dinner,
    #[serde(rename = "Evening Snack")]
    EveningSnack,
}

/// Denormalized view of the catalog food an item points at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRef {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub calories: f64,
}

impl From<&Food> for FoodRef {
    fn from(food: &Food) -> Self {
        Self {
            id: food.id,
            name: food.name.clone(),
            category: food.category.clone(),
            calories: food.nutrition.calories,
        }
    }
}

/// One food in a meal; `food` is `None` when the catalog had no
/// candidate for the slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealItem {
    pub food: Option<FoodRef>,
    pub quantity: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub meal_type: MealType,
    /// "HH:MM"
    pub time: String,
    pub items: Vec<MealItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub name: String,
    pub goal: MealGoal,
    pub diet_type: DietType,
    pub target_calories: i32,
    pub macros: Macros,
    pub meals: Vec<Meal>,
    #[serde(flatten)]
    pub schedule: PlanSchedule,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealInsights {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub bmr: f64,
    pub tdee: f64,
    pub target_calories: i32,
    pub macros: Macros,
    pub calorie_adjustment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedMealPlan {
    pub plan: MealPlan,
    pub insights: MealInsights,
}
