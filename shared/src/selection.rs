//! Selection policy
//!
//! Maps a goal, fitness level and diet type to a fixed, ordered list of
//! catalog queries. Each query carries a named role so results can be
//! bound by role instead of by the order the lookups happen to run in.

use crate::catalog::{exercise_category, food_category, muscle_group, CatalogFilter, Difficulty};
use crate::profile::{DietType, FitnessLevel, WorkoutGoal};
use serde::{Deserialize, Serialize};

// ============================================================================
// Workout
// ============================================================================

/// Role a group of exercises plays in a workout plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutRole {
    /// Cardio or HIIT work for weight loss
    Conditioning,
    Strength,
    Chest,
    Back,
    Legs,
    Arms,
    Cardio,
    Core,
    Flexibility,
}

impl WorkoutRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutRole::Conditioning => "conditioning",
            WorkoutRole::Strength => "strength",
            WorkoutRole::Chest => "chest",
            WorkoutRole::Back => "back",
            WorkoutRole::Legs => "legs",
            WorkoutRole::Arms => "arms",
            WorkoutRole::Cardio => "cardio",
            WorkoutRole::Core => "core",
            WorkoutRole::Flexibility => "flexibility",
        }
    }
}

/// One exercise lookup: which items, how many at most, and for what role
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseQuery {
    pub role: WorkoutRole,
    pub filter: CatalogFilter,
    pub limit: usize,
}

/// beginner → Beginner, intermediate → Intermediate, anything else → Advanced
pub fn difficulty_for(level: FitnessLevel) -> Difficulty {
    match level {
        FitnessLevel::Beginner => Difficulty::Beginner,
        FitnessLevel::Intermediate => Difficulty::Intermediate,
        FitnessLevel::Advanced => Difficulty::Advanced,
    }
}

/// Beginner exercises are always eligible alongside the mapped level
pub fn allowed_difficulties(level: FitnessLevel) -> Vec<Difficulty> {
    let mapped = difficulty_for(level);
    if mapped == Difficulty::Beginner {
        vec![Difficulty::Beginner]
    } else {
        vec![Difficulty::Beginner, mapped]
    }
}

/// Ordered exercise queries for a goal. Plan entries are concatenated in
/// this order.
pub fn workout_queries(goal: WorkoutGoal, level: FitnessLevel) -> Vec<ExerciseQuery> {
    let difficulties = allowed_difficulties(level);
    let query = |role: WorkoutRole, filter: CatalogFilter, limit: usize| ExerciseQuery {
        role,
        filter: filter.with_difficulties(difficulties.clone()),
        limit,
    };

    match goal {
        WorkoutGoal::WeightLoss => vec![
            query(
                WorkoutRole::Conditioning,
                CatalogFilter::categories(&[exercise_category::CARDIO, exercise_category::HIIT]),
                4,
            ),
            query(WorkoutRole::Strength, CatalogFilter::category(exercise_category::STRENGTH), 3),
        ],
        WorkoutGoal::MuscleGain => vec![
            query(WorkoutRole::Chest, CatalogFilter::muscle_group(muscle_group::CHEST), 2),
            query(WorkoutRole::Back, CatalogFilter::muscle_group(muscle_group::BACK), 2),
            query(WorkoutRole::Legs, CatalogFilter::muscle_group(muscle_group::LEGS), 2),
            query(WorkoutRole::Arms, CatalogFilter::muscle_group(muscle_group::ARMS), 1),
        ],
        WorkoutGoal::Endurance => vec![
            query(WorkoutRole::Cardio, CatalogFilter::category(exercise_category::CARDIO), 5),
            query(WorkoutRole::Core, CatalogFilter::muscle_group(muscle_group::CORE), 2),
        ],
        WorkoutGoal::GeneralFitness => vec![
            query(WorkoutRole::Cardio, CatalogFilter::category(exercise_category::CARDIO), 2),
            query(WorkoutRole::Strength, CatalogFilter::category(exercise_category::STRENGTH), 4),
            // flexibility work is not filtered by difficulty
            ExerciseQuery {
                role: WorkoutRole::Flexibility,
                filter: CatalogFilter::category(exercise_category::FLEXIBILITY),
                limit: 1,
            },
        ],
    }
}

// ============================================================================
// Meal
// ============================================================================

/// Candidate group drawn from the food catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodGroup {
    Protein,
    Carbohydrate,
    Vegetable,
    Fruit,
    Fat,
}

impl FoodGroup {
    pub const ALL: [FoodGroup; 5] = [
        FoodGroup::Protein,
        FoodGroup::Carbohydrate,
        FoodGroup::Vegetable,
        FoodGroup::Fruit,
        FoodGroup::Fat,
    ];

    pub fn category(&self) -> &'static str {
        match self {
            FoodGroup::Protein => food_category::PROTEIN,
            FoodGroup::Carbohydrate => food_category::CARBOHYDRATE,
            FoodGroup::Vegetable => food_category::VEGETABLE,
            FoodGroup::Fruit => food_category::FRUIT,
            FoodGroup::Fat => food_category::FAT,
        }
    }

    /// Maximum number of candidates fetched for the group
    pub fn candidate_cap(&self) -> usize {
        match self {
            FoodGroup::Protein | FoodGroup::Carbohydrate | FoodGroup::Vegetable => 5,
            FoodGroup::Fruit | FoodGroup::Fat => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodGroup::Protein => "protein",
            FoodGroup::Carbohydrate => "carbohydrate",
            FoodGroup::Vegetable => "vegetable",
            FoodGroup::Fruit => "fruit",
            FoodGroup::Fat => "fat",
        }
    }
}

/// One food candidate lookup
#[derive(Debug, Clone, PartialEq)]
pub struct FoodQuery {
    pub group: FoodGroup,
    pub filter: CatalogFilter,
    pub limit: usize,
}

/// Categories a diet removes from the general food query
pub fn diet_exclusions(diet: DietType) -> &'static [&'static str] {
    match diet {
        DietType::Standard => &[],
        DietType::Vegetarian => &[food_category::PROTEIN],
        DietType::Vegan => &[food_category::PROTEIN, food_category::DAIRY],
    }
}

/// Candidate lookup for one food group. The protein group is drawn
/// separately and ignores the diet exclusions; every other group carries
/// them.
pub fn food_query(group: FoodGroup, diet: DietType) -> FoodQuery {
    let filter = CatalogFilter::category(group.category());
    let filter = match group {
        FoodGroup::Protein => filter,
        _ => filter.excluding(diet_exclusions(diet)),
    };
    FoodQuery {
        group,
        filter,
        limit: group.candidate_cap(),
    }
}

/// One query per food group, in [`FoodGroup::ALL`] order
pub fn meal_queries(diet: DietType) -> Vec<FoodQuery> {
    FoodGroup::ALL
        .iter()
        .map(|&group| food_query(group, diet))
        .collect()
}
