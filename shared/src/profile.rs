//! Biometric profile and goal types
//!
//! Labels arriving over the wire are free-form strings. Each type here
//! parses its label totally: unrecognized values fall into the branch the
//! formulas treat as "everything else", so parsing itself never fails.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Gender
// ============================================================================

/// Gender used by the BMR formula
///
/// Only the exact label `"male"` selects the male branch. Any other value,
/// including unrecognized strings, takes the female branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn from_label(label: &str) -> Self {
        if label == "male" {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl From<String> for Gender {
    fn from(label: String) -> Self {
        Gender::from_label(&label)
    }
}

impl From<Gender> for String {
    fn from(gender: Gender) -> Self {
        gender.as_str().to_string()
    }
}

// ============================================================================
// Activity Level
// ============================================================================

/// Daily activity level for TDEE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or physical job
    VeryActive,
}

impl ActivityLevel {
    /// Parse a wire label; `None` for anything not in the table
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" => Some(ActivityLevel::Light),
            "moderate" => Some(ActivityLevel::Moderate),
            "active" => Some(ActivityLevel::Active),
            "very_active" => Some(ActivityLevel::VeryActive),
            _ => None,
        }
    }

    /// Activity multiplier applied to BMR
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }
}

// ============================================================================
// Fitness Level
// ============================================================================

/// Training experience
///
/// `"beginner"` and `"intermediate"` are recognized; every other label is
/// treated as advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    pub fn from_label(label: &str) -> Self {
        match label {
            "beginner" => FitnessLevel::Beginner,
            "intermediate" => FitnessLevel::Intermediate,
            _ => FitnessLevel::Advanced,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "beginner",
            FitnessLevel::Intermediate => "intermediate",
            FitnessLevel::Advanced => "advanced",
        }
    }
}

impl From<String> for FitnessLevel {
    fn from(label: String) -> Self {
        FitnessLevel::from_label(&label)
    }
}

impl From<FitnessLevel> for String {
    fn from(level: FitnessLevel) -> Self {
        level.as_str().to_string()
    }
}

// ============================================================================
// Goals
// ============================================================================

/// Goal of a workout plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorkoutGoal {
    WeightLoss,
    MuscleGain,
    Endurance,
    /// Also the fallback for unrecognized labels
    GeneralFitness,
}

impl WorkoutGoal {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Weight Loss" => WorkoutGoal::WeightLoss,
            "Muscle Gain" => WorkoutGoal::MuscleGain,
            "Endurance" => WorkoutGoal::Endurance,
            _ => WorkoutGoal::GeneralFitness,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutGoal::WeightLoss => "Weight Loss",
            WorkoutGoal::MuscleGain => "Muscle Gain",
            WorkoutGoal::Endurance => "Endurance",
            WorkoutGoal::GeneralFitness => "General Fitness",
        }
    }
}

impl From<String> for WorkoutGoal {
    fn from(label: String) -> Self {
        WorkoutGoal::from_label(&label)
    }
}

impl From<WorkoutGoal> for String {
    fn from(goal: WorkoutGoal) -> Self {
        goal.as_str().to_string()
    }
}

impl fmt::Display for WorkoutGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Goal of a meal plan; drives the caloric adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MealGoal {
    WeightLoss,
    MuscleGain,
    /// Also the fallback for unrecognized labels
    Maintenance,
}

impl MealGoal {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Weight Loss" => MealGoal::WeightLoss,
            "Muscle Gain" => MealGoal::MuscleGain,
            _ => MealGoal::Maintenance,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MealGoal::WeightLoss => "Weight Loss",
            MealGoal::MuscleGain => "Muscle Gain",
            MealGoal::Maintenance => "Maintenance",
        }
    }
}

impl From<String> for MealGoal {
    fn from(label: String) -> Self {
        MealGoal::from_label(&label)
    }
}

impl From<MealGoal> for String {
    fn from(goal: MealGoal) -> Self {
        goal.as_str().to_string()
    }
}

impl fmt::Display for MealGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Diet Type
// ============================================================================

/// Dietary restriction applied to food selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DietType {
    #[default]
    Standard,
    Vegetarian,
    Vegan,
}

impl DietType {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Vegetarian" => DietType::Vegetarian,
            "Vegan" => DietType::Vegan,
            _ => DietType::Standard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DietType::Standard => "Standard",
            DietType::Vegetarian => "Vegetarian",
            DietType::Vegan => "Vegan",
        }
    }
}

impl From<String> for DietType {
    fn from(label: String) -> Self {
        DietType::from_label(&label)
    }
}

impl From<DietType> for String {
    fn from(diet: DietType) -> Self {
        diet.as_str().to_string()
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Biometric profile, immutable for the duration of one generation call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: Gender,
}

/// Validated input to workout plan generation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutParams {
    pub profile: Profile,
    pub goal: WorkoutGoal,
    pub fitness_level: FitnessLevel,
    pub days_per_week: Option<u32>,
    pub duration_weeks: Option<u32>,
}

/// Validated input to meal plan generation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MealParams {
    pub profile: Profile,
    pub goal: MealGoal,
    /// `None` when the supplied label is not in the multiplier table
    pub activity_level: Option<ActivityLevel>,
    pub diet_type: DietType,
    pub duration_weeks: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_exact_match_only() {
        assert_eq!(Gender::from_label("male"), Gender::Male);
        assert_eq!(Gender::from_label("female"), Gender::Female);
        assert_eq!(Gender::from_label("Male"), Gender::Female);
        assert_eq!(Gender::from_label("other"), Gender::Female);
        assert_eq!(Gender::from_label(""), Gender::Female);
    }

    #[test]
    fn test_gender_deserializes_from_any_string() {
        let gender: Gender = serde_json::from_str("\"nonbinary\"").unwrap();
        assert_eq!(gender, Gender::Female);
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"male\"");
    }

    #[test]
    fn test_activity_level_labels() {
        assert_eq!(ActivityLevel::from_label("very_active"), Some(ActivityLevel::VeryActive));
        assert_eq!(ActivityLevel::from_label("lightly_active"), None);
        assert_eq!(ActivityLevel::Sedentary.multiplier(), 1.2);
        assert_eq!(ActivityLevel::Active.multiplier(), 1.725);
    }

    #[test]
    fn test_fitness_level_fallback_is_advanced() {
        assert_eq!(FitnessLevel::from_label("beginner"), FitnessLevel::Beginner);
        assert_eq!(FitnessLevel::from_label("intermediate"), FitnessLevel::Intermediate);
        assert_eq!(FitnessLevel::from_label("expert"), FitnessLevel::Advanced);
    }

    #[test]
    fn test_goal_labels_round_trip_through_json() {
        let goal: WorkoutGoal = serde_json::from_str("\"Muscle Gain\"").unwrap();
        assert_eq!(goal, WorkoutGoal::MuscleGain);
        assert_eq!(serde_json::to_string(&goal).unwrap(), "\"Muscle Gain\"");

        let unknown: WorkoutGoal = serde_json::from_str("\"Flexibility\"").unwrap();
        assert_eq!(unknown, WorkoutGoal::GeneralFitness);

        let meal: MealGoal = serde_json::from_str("\"Endurance\"").unwrap();
        assert_eq!(meal, MealGoal::Maintenance);
    }

    #[test]
    fn test_diet_type_fallback() {
        assert_eq!(DietType::from_label("Vegan"), DietType::Vegan);
        assert_eq!(DietType::from_label("Keto"), DietType::Standard);
    }
}
