//! Metabolic calculator
//!
//! BMI, BMR (Mifflin-St Jeor), TDEE, caloric target and macro split.
//! Everything here is a pure function of its numeric inputs. Inputs are
//! expected to be range-checked by the caller; nothing is clamped.

use crate::defaults::PlanDefaults;
use crate::errors::PlanError;
use crate::profile::{ActivityLevel, Gender, MealGoal, Profile};
use serde::{Deserialize, Serialize};

/// kcal per gram of protein or carbohydrate
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
/// kcal per gram of fat
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Caloric deficit applied for weight loss
pub const WEIGHT_LOSS_DEFICIT: i32 = 500;
/// Caloric surplus applied for muscle gain
pub const MUSCLE_GAIN_SURPLUS: i32 = 300;

// ============================================================================
// BMI
// ============================================================================

/// BMI bucket used in plan descriptions and insights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Lower bounds are inclusive: 18.5 is Normal, 25 Overweight, 30 Obese
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

// ============================================================================
// BMR / TDEE
// ============================================================================

/// Basal Metabolic Rate using Mifflin-St Jeor
///
/// Male: 10w + 6.25h - 5a + 5
/// Otherwise: 10w + 6.25h - 5a - 161
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// TDEE = BMR × activity multiplier; unknown levels use the default table
pub fn calculate_tdee(bmr: f64, activity_level: Option<ActivityLevel>, defaults: &PlanDefaults) -> f64 {
    bmr * defaults.activity_multiplier(activity_level)
}

/// Daily calorie target, TDEE rounded to the nearest kcal then adjusted
pub fn calculate_target_calories(tdee: f64, goal: MealGoal) -> i32 {
    let maintenance = tdee.round() as i32;
    match goal {
        MealGoal::WeightLoss => maintenance - WEIGHT_LOSS_DEFICIT,
        MealGoal::MuscleGain => maintenance + MUSCLE_GAIN_SURPLUS,
        MealGoal::Maintenance => maintenance,
    }
}

/// Human-readable description of the adjustment applied by
/// [`calculate_target_calories`]
pub fn calorie_adjustment_label(goal: MealGoal) -> &'static str {
    match goal {
        MealGoal::WeightLoss => "-500 calories (deficit for weight loss)",
        MealGoal::MuscleGain => "+300 calories (surplus for muscle gain)",
        MealGoal::Maintenance => "Maintenance calories",
    }
}

// ============================================================================
// Macros
// ============================================================================

/// Daily macro targets in grams, rounded to whole grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Macros {
    pub protein_g: f64,
    /// May be negative when protein and fat already exceed the target
    pub carbs_g: f64,
    pub fats_g: f64,
}

impl Macros {
    /// Calories implied by the split
    pub fn calories(&self) -> f64 {
        self.protein_g * KCAL_PER_GRAM_PROTEIN
            + self.carbs_g * KCAL_PER_GRAM_CARBS
            + self.fats_g * KCAL_PER_GRAM_FAT
    }
}

/// Protein grams per kg of body weight
fn protein_per_kg(goal: MealGoal) -> f64 {
    match goal {
        MealGoal::MuscleGain => 2.0,
        MealGoal::WeightLoss => 1.8,
        MealGoal::Maintenance => 1.5,
    }
}

/// Share of calories from fat
fn fat_ratio(goal: MealGoal) -> f64 {
    match goal {
        MealGoal::WeightLoss => 0.30,
        _ => 0.25,
    }
}

/// Split a calorie target into protein, fat and carbohydrate grams.
/// Carbohydrates take whatever protein and fat leave over.
pub fn calculate_macros(target_calories: i32, weight_kg: f64, goal: MealGoal) -> Macros {
    let target = target_calories as f64;
    let protein_g = weight_kg * protein_per_kg(goal);
    let fats_g = target * fat_ratio(goal) / KCAL_PER_GRAM_FAT;
    let remaining = target - protein_g * KCAL_PER_GRAM_PROTEIN - fats_g * KCAL_PER_GRAM_FAT;
    let carbs_g = remaining / KCAL_PER_GRAM_CARBS;

    Macros {
        protein_g: protein_g.round(),
        carbs_g: carbs_g.round(),
        fats_g: fats_g.round(),
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Every metabolic number derived from one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetabolicSummary {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub bmr: f64,
    pub tdee: f64,
    pub target_calories: i32,
    pub macros: Macros,
    pub calorie_adjustment: String,
}

/// Run the whole calculator for a profile.
///
/// Fails with [`PlanError::Computation`] when the input produces a
/// non-finite number (zero height, for instance).
pub fn summarize(
    profile: &Profile,
    activity_level: Option<ActivityLevel>,
    goal: MealGoal,
    defaults: &PlanDefaults,
) -> Result<MetabolicSummary, PlanError> {
    let bmi = ensure_finite("bmi", calculate_bmi(profile.weight_kg, profile.height_cm))?;
    let bmr = calculate_bmr(profile.weight_kg, profile.height_cm, profile.age, profile.gender);
    let tdee = ensure_finite("tdee", calculate_tdee(bmr, activity_level, defaults))?;
    let target_calories = calculate_target_calories(tdee, goal);

    Ok(MetabolicSummary {
        bmi,
        bmi_category: classify_bmi(bmi),
        bmr,
        tdee,
        target_calories,
        macros: calculate_macros(target_calories, profile.weight_kg, goal),
        calorie_adjustment: calorie_adjustment_label(goal).to_string(),
    })
}

pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<f64, PlanError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PlanError::Computation(format!("{} is not a finite number", name)))
    }
}

/// Round to `places` decimal places for presentation
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn profile(gender: Gender) -> Profile {
        Profile {
            age: 30,
            weight_kg: 70.0,
            height_cm: 175.0,
            gender,
        }
    }

    // =========================================================================
    // BMI
    // =========================================================================

    #[test]
    fn test_bmi_calculation() {
        let bmi = calculate_bmi(70.0, 175.0);
        assert!((bmi - 70.0 / (1.75 * 1.75)).abs() < 1e-9);
        assert!((bmi - 22.86).abs() < 0.01);
    }

    #[rstest]
    #[case(18.49, BmiCategory::Underweight)]
    #[case(18.5, BmiCategory::Normal)]
    #[case(24.99, BmiCategory::Normal)]
    #[case(25.0, BmiCategory::Overweight)]
    #[case(29.99, BmiCategory::Overweight)]
    #[case(30.0, BmiCategory::Obese)]
    fn test_bmi_category_boundaries(#[case] bmi: f64, #[case] expected: BmiCategory) {
        assert_eq!(classify_bmi(bmi), expected);
    }

    #[test]
    fn test_zero_height_is_not_finite() {
        assert!(!calculate_bmi(70.0, 0.0).is_finite());
        let mut p = profile(Gender::Male);
        p.height_cm = 0.0;
        let result = summarize(&p, None, MealGoal::Maintenance, &PlanDefaults::default());
        assert!(matches!(result, Err(PlanError::Computation(_))));
    }

    // =========================================================================
    // BMR / TDEE
    // =========================================================================

    #[test]
    fn test_bmr_male_and_female_branches() {
        // 10*70 + 6.25*175 - 5*30 = 1643.75
        let male = calculate_bmr(70.0, 175.0, 30, Gender::Male);
        let female = calculate_bmr(70.0, 175.0, 30, Gender::Female);
        assert_eq!(male, 1648.75);
        assert_eq!(female, 1482.75);
        // +5 for male versus -161 otherwise
        assert_eq!(male - female, 166.0);
    }

    #[test]
    fn test_bmr_unrecognized_gender_takes_female_branch() {
        let other = calculate_bmr(70.0, 175.0, 30, Gender::from_label("other"));
        assert_eq!(other, calculate_bmr(70.0, 175.0, 30, Gender::Female));
    }

    #[test]
    fn test_tdee_multipliers() {
        let defaults = PlanDefaults::default();
        let bmr = 1648.75;
        assert_eq!(calculate_tdee(bmr, Some(ActivityLevel::Sedentary), &defaults), bmr * 1.2);
        assert_eq!(calculate_tdee(bmr, Some(ActivityLevel::VeryActive), &defaults), bmr * 1.9);
        assert_eq!(calculate_tdee(bmr, ActivityLevel::from_label("unknown"), &defaults), bmr * 1.55);
    }

    #[test]
    fn test_target_calories_adjustments() {
        let tdee = 1978.5; // rounds to 1979
        assert_eq!(calculate_target_calories(tdee, MealGoal::WeightLoss), 1479);
        assert_eq!(calculate_target_calories(tdee, MealGoal::MuscleGain), 2279);
        assert_eq!(calculate_target_calories(tdee, MealGoal::Maintenance), 1979);
    }

    // =========================================================================
    // Macros
    // =========================================================================

    #[test]
    fn test_macro_split_for_weight_loss() {
        let macros = calculate_macros(2000, 70.0, MealGoal::WeightLoss);
        // 70 * 1.8 = 126 g protein, 2000 * 0.30 / 9 = 66.7 g fat
        assert_eq!(macros.protein_g, 126.0);
        assert_eq!(macros.fats_g, 67.0);
        // (2000 - 504 - 600) / 4 = 224
        assert_eq!(macros.carbs_g, 224.0);
    }

    #[test]
    fn test_macro_split_for_muscle_gain() {
        let macros = calculate_macros(2800, 80.0, MealGoal::MuscleGain);
        assert_eq!(macros.protein_g, 160.0);
        assert_eq!(macros.fats_g, 78.0);
    }

    #[test]
    fn test_carbs_may_go_negative() {
        let macros = calculate_macros(800, 150.0, MealGoal::MuscleGain);
        assert!(macros.carbs_g < 0.0);
    }

    #[test]
    fn test_summary_for_weight_loss() {
        let summary = summarize(
            &profile(Gender::Male),
            Some(ActivityLevel::Sedentary),
            MealGoal::WeightLoss,
            &PlanDefaults::default(),
        )
        .unwrap();

        assert_eq!(summary.bmi_category, BmiCategory::Normal);
        assert_eq!(summary.bmr, 1648.75);
        assert_eq!(summary.target_calories, (1648.75f64 * 1.2).round() as i32 - 500);
        assert!(summary.calorie_adjustment.starts_with("-500"));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(22.857, 2), 22.86);
        assert_eq!(round_to(22.857, 1), 22.9);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: macro calories reproduce the target within rounding
        #[test]
        fn prop_macros_sum_to_target(
            target in 1200i32..4500,
            weight in 40.0f64..150.0,
            goal_index in 0usize..3
        ) {
            let goal = [MealGoal::WeightLoss, MealGoal::MuscleGain, MealGoal::Maintenance][goal_index];
            let macros = calculate_macros(target, weight, goal);
            // each gram count is rounded by at most 0.5 g
            let tolerance = 0.5 * (KCAL_PER_GRAM_PROTEIN + KCAL_PER_GRAM_CARBS + KCAL_PER_GRAM_FAT);
            prop_assert!((macros.calories() - target as f64).abs() <= tolerance,
                "macros {:?} give {} kcal for target {}", macros, macros.calories(), target);
        }

        /// Property: male BMR is exactly 166 kcal above the other branch
        #[test]
        fn prop_gender_offset(
            weight in 40.0f64..150.0,
            height in 140.0f64..210.0,
            age in 18u32..80
        ) {
            let male = calculate_bmr(weight, height, age, Gender::Male);
            let female = calculate_bmr(weight, height, age, Gender::Female);
            prop_assert!((male - female - 166.0).abs() < 1e-9);
        }

        /// Property: TDEE never falls below BMR for a positive BMR
        #[test]
        fn prop_tdee_at_least_bmr(bmr in 800.0f64..3000.0, level in 0usize..5) {
            let levels = [
                ActivityLevel::Sedentary,
                ActivityLevel::Light,
                ActivityLevel::Moderate,
                ActivityLevel::Active,
                ActivityLevel::VeryActive,
            ];
            let tdee = calculate_tdee(bmr, Some(levels[level]), &PlanDefaults::default());
            prop_assert!(tdee > bmr);
        }
    }
}
