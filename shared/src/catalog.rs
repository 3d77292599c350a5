//! Exercise and food catalog model
//!
//! Catalog items are read-only reference data owned by the catalog store.
//! The planner only filters and reads them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Exercise categories known to the selection policy
pub mod exercise_category {
    pub const CARDIO: &str = "Cardio";
    pub const HIIT: &str = "HIIT";
    pub const STRENGTH: &str = "Strength";
    pub const FLEXIBILITY: &str = "Flexibility";
}

/// Muscle groups known to the selection policy
pub mod muscle_group {
    pub const CHEST: &str = "Chest";
    pub const BACK: &str = "Back";
    pub const LEGS: &str = "Legs";
    pub const ARMS: &str = "Arms";
    pub const CORE: &str = "Core";
}

/// Food categories known to the selection policy
pub mod food_category {
    pub const PROTEIN: &str = "Protein";
    pub const CARBOHYDRATE: &str = "Carbohydrate";
    pub const VEGETABLE: &str = "Vegetable";
    pub const FRUIT: &str = "Fruit";
    pub const FAT: &str = "Fat";
    pub const DAIRY: &str = "Dairy";
}

/// Exercise difficulty as stored in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beginner" => Ok(Difficulty::Beginner),
            "Intermediate" => Ok(Difficulty::Intermediate),
            "Advanced" => Ok(Difficulty::Advanced),
            other => Err(format!("Unknown difficulty: {}", other)),
        }
    }
}

/// Exercise catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub muscle_group: String,
    /// Metabolic Equivalent of Task
    pub met_value: f64,
    pub difficulty: Difficulty,
    pub equipment: Option<String>,
    pub is_active: bool,
}

/// Nutrition facts per serving
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// Food catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub nutrition: Nutrition,
    pub is_active: bool,
}

/// Catalog query filter
///
/// Empty sets mean "any". Only active items ever match.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFilter {
    pub categories: Vec<String>,
    pub excluded_categories: Vec<String>,
    pub muscle_group: Option<String>,
    pub difficulties: Vec<Difficulty>,
}

impl CatalogFilter {
    pub fn category(category: &str) -> Self {
        Self {
            categories: vec![category.to_string()],
            ..Default::default()
        }
    }

    pub fn categories(categories: &[&str]) -> Self {
        Self {
            categories: categories.iter().map(|c| c.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn muscle_group(group: &str) -> Self {
        Self {
            muscle_group: Some(group.to_string()),
            ..Default::default()
        }
    }

    pub fn with_difficulties(mut self, difficulties: Vec<Difficulty>) -> Self {
        self.difficulties = difficulties;
        self
    }

    pub fn excluding(mut self, categories: &[&str]) -> Self {
        self.excluded_categories = categories.iter().map(|c| c.to_string()).collect();
        self
    }

    fn matches_category(&self, category: &str) -> bool {
        (self.categories.is_empty() || self.categories.iter().any(|c| c == category))
            && !self.excluded_categories.iter().any(|c| c == category)
    }

    pub fn matches_exercise(&self, exercise: &Exercise) -> bool {
        exercise.is_active
            && self.matches_category(&exercise.category)
            && self
                .muscle_group
                .as_deref()
                .map_or(true, |g| g == exercise.muscle_group)
            && (self.difficulties.is_empty() || self.difficulties.contains(&exercise.difficulty))
    }

    /// Muscle group and difficulty do not apply to foods
    pub fn matches_food(&self, food: &Food) -> bool {
        food.is_active && self.matches_category(&food.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(category: &str, group: &str, difficulty: Difficulty, active: bool) -> Exercise {
        Exercise {
            id: Uuid::new_v4(),
            name: "Test".to_string(),
            category: category.to_string(),
            muscle_group: group.to_string(),
            met_value: 5.0,
            difficulty,
            equipment: None,
            is_active: active,
        }
    }

    #[test]
    fn test_filter_by_category_set_and_difficulty() {
        let filter = CatalogFilter::categories(&[exercise_category::CARDIO, exercise_category::HIIT])
            .with_difficulties(vec![Difficulty::Beginner]);

        assert!(filter.matches_exercise(&exercise("HIIT", "Legs", Difficulty::Beginner, true)));
        assert!(!filter.matches_exercise(&exercise("HIIT", "Legs", Difficulty::Advanced, true)));
        assert!(!filter.matches_exercise(&exercise("Strength", "Legs", Difficulty::Beginner, true)));
    }

    #[test]
    fn test_inactive_items_never_match() {
        let filter = CatalogFilter::default();
        assert!(!filter.matches_exercise(&exercise("Cardio", "Legs", Difficulty::Beginner, false)));
    }

    #[test]
    fn test_muscle_group_filter() {
        let filter = CatalogFilter::muscle_group(muscle_group::CHEST);
        assert!(filter.matches_exercise(&exercise("Strength", "Chest", Difficulty::Advanced, true)));
        assert!(!filter.matches_exercise(&exercise("Strength", "Back", Difficulty::Advanced, true)));
    }

    #[test]
    fn test_excluded_categories() {
        let food = Food {
            id: Uuid::new_v4(),
            name: "Greek Yogurt".to_string(),
            category: food_category::DAIRY.to_string(),
            nutrition: Nutrition::default(),
            is_active: true,
        };
        assert!(CatalogFilter::default().matches_food(&food));
        assert!(!CatalogFilter::default()
            .excluding(&[food_category::DAIRY])
            .matches_food(&food));
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("Intermediate".parse::<Difficulty>(), Ok(Difficulty::Intermediate));
        assert!("Expert".parse::<Difficulty>().is_err());
    }
}
