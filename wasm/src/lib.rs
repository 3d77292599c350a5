//! Fitness Platform WASM Module
//!
//! Browser bindings for the metabolic calculator so that clients can
//! preview targets before requesting a plan. Every function delegates to
//! the shared crate; label arguments follow the same parsing rules as the
//! HTTP API.

use fitness_platform_shared::metabolic;
use fitness_platform_shared::{ActivityLevel, Gender, MealGoal, PlanDefaults};
use wasm_bindgen::prelude::*;

/// Calculate BMI from weight (kg) and height (cm)
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    metabolic::calculate_bmi(weight_kg, height_cm)
}

/// BMI category label ("Underweight", "Normal", "Overweight", "Obese")
#[wasm_bindgen]
pub fn bmi_category(bmi: f64) -> String {
    metabolic::classify_bmi(bmi).label().to_string()
}

/// Mifflin-St Jeor BMR. Any gender other than "male" uses the female offset.
#[wasm_bindgen]
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: u32, gender: &str) -> f64 {
    metabolic::calculate_bmr(weight_kg, height_cm, age_years, Gender::from_label(gender))
}

/// TDEE for an activity label; unknown labels use the default multiplier
#[wasm_bindgen]
pub fn calculate_tdee(bmr: f64, activity_level: &str) -> f64 {
    metabolic::calculate_tdee(
        bmr,
        ActivityLevel::from_label(activity_level),
        &PlanDefaults::default(),
    )
}

#[wasm_bindgen]
pub fn calculate_target_calories(tdee: f64, goal: &str) -> i32 {
    metabolic::calculate_target_calories(tdee, MealGoal::from_label(goal))
}

/// Daily macro split in grams
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct MacroSplit {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
}

#[wasm_bindgen]
pub fn calculate_macros(target_calories: i32, weight_kg: f64, goal: &str) -> MacroSplit {
    let macros = metabolic::calculate_macros(target_calories, weight_kg, MealGoal::from_label(goal));
    MacroSplit {
        protein_g: macros.protein_g,
        carbs_g: macros.carbs_g,
        fats_g: macros.fats_g,
    }
}
