//! Input validation for generation requests
//!
//! Presence is checked first: any missing profile field aborts with the
//! single aggregate [`PlanError::MissingFields`]. Range checks from the
//! `validator` derive run only once every field is present.

use crate::errors::PlanError;
use crate::profile::{
    ActivityLevel, DietType, FitnessLevel, Gender, MealGoal, MealParams, Profile, WorkoutGoal,
    WorkoutParams,
};
use crate::types::{GenerateMealPlanRequest, GenerateWorkoutPlanRequest, MetabolicRequest};
use validator::{Validate, ValidationErrors};

/// Collects the names of absent fields
#[derive(Debug, Default)]
struct Presence {
    missing: Vec<String>,
}

impl Presence {
    fn number<T: Copy>(&mut self, name: &str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.missing.push(name.to_string());
        }
        value
    }

    /// Blank strings count as missing
    fn text<'a>(&mut self, name: &str, value: &'a Option<String>) -> Option<&'a str> {
        match value.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => Some(v),
            _ => {
                self.missing.push(name.to_string());
                None
            }
        }
    }

    fn finish(self) -> Result<(), PlanError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(PlanError::MissingFields(self.missing))
        }
    }
}

/// Render validator errors as one message, fields in a stable order
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| format!("{} is out of range", display_label(field)))
        .collect();
    fields.sort();
    fields.join("; ")
}

fn check_ranges<T: Validate>(request: &T) -> Result<(), PlanError> {
    request
        .validate()
        .map_err(|e| PlanError::Validation(describe_validation_errors(&e)))
}

/// Map wire field names to user-facing labels
pub fn display_label(field: &str) -> &str {
    match field {
        "age" => "Age",
        "weight_kg" | "weightKg" => "Weight",
        "height_cm" | "heightCm" => "Height",
        "gender" => "Gender",
        "fitness_level" | "fitnessLevel" => "Fitness Level",
        "activity_level" | "activityLevel" => "Activity Level",
        "goal" => "Goal",
        "duration_weeks" | "durationWeeks" => "Duration",
        _ => field,
    }
}

pub fn workout_params(request: &GenerateWorkoutPlanRequest) -> Result<WorkoutParams, PlanError> {
    let mut presence = Presence::default();
    let age = presence.number("age", request.age);
    let weight_kg = presence.number("weightKg", request.weight_kg);
    let height_cm = presence.number("heightCm", request.height_cm);
    let gender = presence.text("gender", &request.gender);
    let fitness_level = presence.text("fitnessLevel", &request.fitness_level);
    let goal = presence.text("goal", &request.goal);
    presence.finish()?;
    check_ranges(request)?;

    match (age, weight_kg, height_cm, gender, fitness_level, goal) {
        (Some(age), Some(weight_kg), Some(height_cm), Some(gender), Some(level), Some(goal)) => {
            Ok(WorkoutParams {
                profile: Profile {
                    age,
                    weight_kg,
                    height_cm,
                    gender: Gender::from_label(gender),
                },
                goal: WorkoutGoal::from_label(goal),
                fitness_level: FitnessLevel::from_label(level),
                days_per_week: request.days_per_week,
                duration_weeks: request.duration_weeks,
            })
        }
        _ => Err(PlanError::MissingFields(Vec::new())),
    }
}

pub fn meal_params(request: &GenerateMealPlanRequest) -> Result<MealParams, PlanError> {
    let mut presence = Presence::default();
    let age = presence.number("age", request.age);
    let weight_kg = presence.number("weightKg", request.weight_kg);
    let height_cm = presence.number("heightCm", request.height_cm);
    let gender = presence.text("gender", &request.gender);
    let activity_level = presence.text("activityLevel", &request.activity_level);
    let goal = presence.text("goal", &request.goal);
    presence.finish()?;
    check_ranges(request)?;

    match (age, weight_kg, height_cm, gender, activity_level, goal) {
        (Some(age), Some(weight_kg), Some(height_cm), Some(gender), Some(activity), Some(goal)) => {
            Ok(MealParams {
                profile: Profile {
                    age,
                    weight_kg,
                    height_cm,
                    gender: Gender::from_label(gender),
                },
                goal: MealGoal::from_label(goal),
                activity_level: ActivityLevel::from_label(activity),
                diet_type: request
                    .diet_type
                    .as_deref()
                    .map(DietType::from_label)
                    .unwrap_or_default(),
                duration_weeks: request.duration_weeks,
            })
        }
        _ => Err(PlanError::MissingFields(Vec::new())),
    }
}

/// Profile, activity level and goal for a standalone calculation.
/// Activity level and goal are optional here.
pub fn metabolic_inputs(
    request: &MetabolicRequest,
) -> Result<(Profile, Option<ActivityLevel>, MealGoal), PlanError> {
    let mut presence = Presence::default();
    let age = presence.number("age", request.age);
    let weight_kg = presence.number("weightKg", request.weight_kg);
    let height_cm = presence.number("heightCm", request.height_cm);
    let gender = presence.text("gender", &request.gender);
    presence.finish()?;
    check_ranges(request)?;

    match (age, weight_kg, height_cm, gender) {
        (Some(age), Some(weight_kg), Some(height_cm), Some(gender)) => Ok((
            Profile {
                age,
                weight_kg,
                height_cm,
                gender: Gender::from_label(gender),
            },
            request.activity_level.as_deref().and_then(ActivityLevel::from_label),
            request
                .goal
                .as_deref()
                .map(MealGoal::from_label)
                .unwrap_or(MealGoal::Maintenance),
        )),
        _ => Err(PlanError::MissingFields(Vec::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workout_request() -> GenerateWorkoutPlanRequest {
        GenerateWorkoutPlanRequest {
            age: Some(30),
            weight_kg: Some(70.0),
            height_cm: Some(175.0),
            gender: Some("male".to_string()),
            fitness_level: Some("beginner".to_string()),
            goal: Some("General Fitness".to_string()),
            days_per_week: None,
            duration_weeks: None,
        }
    }

    #[test]
    fn test_complete_workout_request() {
        let params = workout_params(&workout_request()).unwrap();
        assert_eq!(params.profile.gender, Gender::Male);
        assert_eq!(params.goal, WorkoutGoal::GeneralFitness);
        assert_eq!(params.fitness_level, FitnessLevel::Beginner);
    }

    #[test]
    fn test_missing_fields_are_aggregated() {
        let request = GenerateWorkoutPlanRequest {
            age: None,
            goal: None,
            ..workout_request()
        };
        let err = workout_params(&request).unwrap_err();
        assert_eq!(err.to_string(), "All fields are required");
        assert_eq!(err.missing_fields(), &["age".to_string(), "goal".to_string()]);
    }

    #[test]
    fn test_blank_string_counts_as_missing() {
        let request = GenerateWorkoutPlanRequest {
            gender: Some("  ".to_string()),
            ..workout_request()
        };
        assert!(matches!(
            workout_params(&request),
            Err(PlanError::MissingFields(fields)) if fields == vec!["gender".to_string()]
        ));
    }

    #[test]
    fn test_presence_checked_before_ranges() {
        let request = GenerateWorkoutPlanRequest {
            weight_kg: Some(1.0),
            goal: None,
            ..workout_request()
        };
        assert!(matches!(workout_params(&request), Err(PlanError::MissingFields(_))));
    }

    #[test]
    fn test_out_of_range_height() {
        let request = GenerateWorkoutPlanRequest {
            height_cm: Some(20.0),
            ..workout_request()
        };
        match workout_params(&request) {
            Err(PlanError::Validation(msg)) => assert!(msg.contains("Height")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_meal_request_unknown_activity_is_none() {
        let request = GenerateMealPlanRequest {
            age: Some(40),
            weight_kg: Some(80.0),
            height_cm: Some(180.0),
            gender: Some("female".to_string()),
            activity_level: Some("couch".to_string()),
            goal: Some("Weight Loss".to_string()),
            diet_type: Some("Vegan".to_string()),
            duration_weeks: Some(8),
        };
        let params = meal_params(&request).unwrap();
        assert_eq!(params.activity_level, None);
        assert_eq!(params.diet_type, DietType::Vegan);
        assert_eq!(params.goal, MealGoal::WeightLoss);
    }

    #[test]
    fn test_meal_request_requires_activity_level() {
        let request = GenerateMealPlanRequest {
            age: Some(40),
            weight_kg: Some(80.0),
            height_cm: Some(180.0),
            gender: Some("female".to_string()),
            goal: Some("Maintenance".to_string()),
            ..Default::default()
        };
        assert_eq!(
            meal_params(&request).unwrap_err().missing_fields(),
            &["activityLevel".to_string()]
        );
    }

    #[test]
    fn test_metabolic_inputs_defaults() {
        let request = MetabolicRequest {
            age: Some(30),
            weight_kg: Some(70.0),
            height_cm: Some(175.0),
            gender: Some("male".to_string()),
            activity_level: None,
            goal: None,
        };
        let (_, activity, goal) = metabolic_inputs(&request).unwrap();
        assert_eq!(activity, None);
        assert_eq!(goal, MealGoal::Maintenance);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(display_label("weight_kg"), "Weight");
        assert_eq!(display_label("unknown"), "unknown");
    }
}
