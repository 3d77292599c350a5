//! Plan assembler
//!
//! Turns catalog selections into a structured plan. No I/O happens here:
//! the caller runs the catalog queries from [`crate::selection`] and passes
//! the results in.

use crate::catalog::{exercise_category, Exercise, Food};
use crate::defaults::PlanDefaults;
use crate::errors::PlanError;
use crate::metabolic::{self, calculate_bmi, classify_bmi, ensure_finite, round_to};
use crate::plan::{
    ExerciseRef, FoodRef, GeneratedMealPlan, GeneratedWorkoutPlan, Meal, MealInsights, MealItem,
    MealPlan, MealType, PlanExerciseEntry, PlanSchedule, WorkoutInsights, WorkoutPlan,
};
use crate::profile::{FitnessLevel, MealParams, WorkoutGoal, WorkoutParams};
use crate::selection::{difficulty_for, FoodGroup, WorkoutRole};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Seconds of work assumed per rep when estimating set duration
const SECONDS_PER_REP: u32 = 3;

// ============================================================================
// Workout
// ============================================================================

/// Exercises returned for one role of the selection policy
#[derive(Debug, Clone)]
pub struct ExerciseSelection {
    pub role: WorkoutRole,
    pub exercises: Vec<Exercise>,
}

/// Sets, reps and timing for a single exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prescription {
    pub sets: u32,
    pub reps: u32,
    pub duration_minutes: u32,
    pub rest_seconds: u32,
}

/// Prescription for an exercise of `category`. Anything that is not
/// cardio, HIIT or flexibility is programmed as strength work.
pub fn prescribe(category: &str, goal: WorkoutGoal, level: FitnessLevel) -> Prescription {
    let beginner = level == FitnessLevel::Beginner;
    let rest_seconds = if beginner { 90 } else { 60 };

    let (sets, reps, duration_minutes) = match category {
        exercise_category::CARDIO | exercise_category::HIIT => {
            let minutes = match level {
                FitnessLevel::Beginner => 15,
                FitnessLevel::Intermediate => 20,
                FitnessLevel::Advanced => 30,
            };
            (1, 1, minutes)
        }
        exercise_category::FLEXIBILITY => (1, 1, 10),
        _ => match goal {
            WorkoutGoal::MuscleGain if beginner => (3, 8, 0),
            WorkoutGoal::MuscleGain => (4, 10, 0),
            WorkoutGoal::Endurance => (3, 15, 0),
            _ => (3, 12, 0),
        },
    };

    Prescription {
        sets,
        reps,
        duration_minutes,
        rest_seconds,
    }
}

/// Calories burned by one entry: MET × kg × hours.
/// Set-based entries are timed from their reps and rest.
pub fn estimate_calories(met_value: f64, weight_kg: f64, prescription: &Prescription) -> f64 {
    let minutes = if prescription.duration_minutes > 0 {
        prescription.duration_minutes as f64
    } else {
        let seconds =
            prescription.sets * (prescription.reps * SECONDS_PER_REP + prescription.rest_seconds);
        seconds as f64 / 60.0
    };
    round_to(met_value * weight_kg * minutes / 60.0, 1)
}

/// Build a workout plan from selections given in policy order.
///
/// Entries are numbered 1..N in concatenation order. Roles that came back
/// short simply contribute fewer entries.
pub fn assemble_workout(
    params: &WorkoutParams,
    selections: &[ExerciseSelection],
    defaults: &PlanDefaults,
    now: DateTime<Utc>,
) -> Result<GeneratedWorkoutPlan, PlanError> {
    let profile = &params.profile;
    let bmi = ensure_finite("bmi", calculate_bmi(profile.weight_kg, profile.height_cm))?;
    let bmi_category = classify_bmi(bmi);

    let exercises: Vec<PlanExerciseEntry> = selections
        .iter()
        .flat_map(|selection| selection.exercises.iter())
        .enumerate()
        .map(|(index, exercise)| {
            let prescription = prescribe(&exercise.category, params.goal, params.fitness_level);
            PlanExerciseEntry {
                exercise: ExerciseRef::from(exercise),
                sets: prescription.sets,
                reps: prescription.reps,
                duration_minutes: prescription.duration_minutes,
                rest_seconds: prescription.rest_seconds,
                order: index as u32 + 1,
                estimated_calories: estimate_calories(
                    exercise.met_value,
                    profile.weight_kg,
                    &prescription,
                ),
            }
        })
        .collect();

    let schedule = PlanSchedule::starting_at(now, defaults.duration_weeks(params.duration_weeks));
    let frequency = defaults.frequency_label(params.days_per_week);
    let session_calories = round_to(exercises.iter().map(|e| e.estimated_calories).sum(), 0);

    let description = format!(
        "Personalized {} workout plan for {} level, {}. BMI {:.1} ({}).",
        params.goal,
        params.fitness_level.as_str(),
        frequency,
        bmi,
        bmi_category.label()
    );

    let insights = WorkoutInsights {
        bmi: round_to(bmi, 2),
        bmi_category,
        recommended_duration: format!("{} weeks", schedule.duration_weeks),
        total_exercises: exercises.len(),
        estimated_calories_per_session: session_calories,
    };

    let plan = WorkoutPlan {
        name: format!("{} Workout Plan", params.goal),
        goal: params.goal,
        fitness_level: params.fitness_level,
        difficulty: difficulty_for(params.fitness_level),
        frequency,
        exercises,
        schedule,
        description,
    };

    Ok(GeneratedWorkoutPlan { plan, insights })
}

// ============================================================================
// Meal
// ============================================================================

/// Ranked food candidates, bound by group
#[derive(Debug, Clone, Default)]
pub struct FoodCandidates {
    groups: HashMap<FoodGroup, Vec<Food>>,
}

impl FoodCandidates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, group: FoodGroup, foods: Vec<Food>) {
        self.groups.insert(group, foods);
    }

    pub fn with(mut self, group: FoodGroup, foods: Vec<Food>) -> Self {
        self.insert(group, foods);
        self
    }

    /// The `rank`-th candidate of a group, if the catalog returned one
    pub fn pick(&self, group: FoodGroup, rank: usize) -> Option<&Food> {
        self.groups.get(&group).and_then(|foods| foods.get(rank))
    }

    pub fn count(&self, group: FoodGroup) -> usize {
        self.groups.get(&group).map_or(0, Vec::len)
    }
}

/// A named role in the daily template: which candidate fills it and how
/// much of it to eat
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MealRole {
    pub group: FoodGroup,
    pub rank: usize,
    pub quantity: f64,
    pub unit: &'static str,
}

/// One slot of the daily template
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MealSlot {
    pub meal_type: MealType,
    pub time: &'static str,
    pub roles: &'static [MealRole],
}

const fn role(group: FoodGroup, rank: usize, quantity: f64, unit: &'static str) -> MealRole {
    MealRole {
        group,
        rank,
        quantity,
        unit,
    }
}

/// Fixed five-meal day
pub const DAILY_TEMPLATE: [MealSlot; 5] = [
    MealSlot {
        meal_type: MealType::Breakfast,
        time: "07:00",
        roles: &[
            role(FoodGroup::Carbohydrate, 0, 50.0, "g"),
            role(FoodGroup::Protein, 0, 2.0, "pieces"),
            role(FoodGroup::Fruit, 0, 1.0, "piece"),
        ],
    },
    MealSlot {
        meal_type: MealType::MidMorningSnack,
        time: "10:00",
        roles: &[
            role(FoodGroup::Fruit, 1, 1.0, "piece"),
            role(FoodGroup::Fat, 0, 20.0, "g"),
        ],
    },
    MealSlot {
        meal_type: MealType::Lunch,
        time: "13:00",
        roles: &[
            role(FoodGroup::Protein, 1, 150.0, "g"),
            role(FoodGroup::Carbohydrate, 1, 100.0, "g"),
            role(FoodGroup::Vegetable, 0, 100.0, "g"),
            role(FoodGroup::Vegetable, 1, 50.0, "g"),
        ],
    },
    MealSlot {
        meal_type: MealType::AfternoonSnack,
        time: "16:00",
        roles: &[
            role(FoodGroup::Protein, 2, 100.0, "g"),
            role(FoodGroup::Fruit, 2, 1.0, "piece"),
        ],
    },
    MealSlot {
        meal_type: MealType::Dinner,
        time: "19:00",
        roles: &[
            role(FoodGroup::Protein, 3, 150.0, "g"),
            role(FoodGroup::Carbohydrate, 2, 80.0, "g"),
            role(FoodGroup::Vegetable, 2, 100.0, "g"),
            role(FoodGroup::Fat, 1, 10.0, "g"),
        ],
    },
];

/// Fill the daily template from the candidates. A role with no candidate
/// keeps its quantity but has no food reference.
pub fn fill_template(candidates: &FoodCandidates) -> Vec<Meal> {
    DAILY_TEMPLATE
        .iter()
        .map(|slot| Meal {
            meal_type: slot.meal_type,
            time: slot.time.to_string(),
            items: slot
                .roles
                .iter()
                .map(|role| MealItem {
                    food: candidates.pick(role.group, role.rank).map(FoodRef::from),
                    quantity: role.quantity,
                    unit: role.unit.to_string(),
                })
                .collect(),
        })
        .collect()
}

/// Build a meal plan for the profile from the fetched candidates
pub fn assemble_meal(
    params: &MealParams,
    candidates: &FoodCandidates,
    defaults: &PlanDefaults,
    now: DateTime<Utc>,
) -> Result<GeneratedMealPlan, PlanError> {
    let summary = metabolic::summarize(&params.profile, params.activity_level, params.goal, defaults)?;
    let schedule = PlanSchedule::starting_at(now, defaults.duration_weeks(params.duration_weeks));
    let macros = summary.macros;

    let description = format!(
        "Personalized {} meal plan ({}) targeting {} calories per day: {}g protein, {}g carbs, {}g fats. BMI {:.1} ({}).",
        params.goal,
        params.diet_type.as_str(),
        summary.target_calories,
        macros.protein_g,
        macros.carbs_g,
        macros.fats_g,
        summary.bmi,
        summary.bmi_category.label()
    );

    let plan = MealPlan {
        name: format!("{} Meal Plan", params.goal),
        goal: params.goal,
        diet_type: params.diet_type,
        target_calories: summary.target_calories,
        macros,
        meals: fill_template(candidates),
        schedule,
        description,
    };

    let insights = MealInsights {
        bmi: round_to(summary.bmi, 2),
        bmi_category: summary.bmi_category,
        bmr: summary.bmr.round(),
        tdee: summary.tdee.round(),
        target_calories: summary.target_calories,
        macros,
        calorie_adjustment: summary.calorie_adjustment,
    };

    Ok(GeneratedMealPlan { plan, insights })
}
