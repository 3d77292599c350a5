//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the shared planning core.

pub mod catalog;
pub mod planner;

pub use catalog::CatalogService;
pub use planner::{MealGeneration, PlanService, WorkoutGeneration};
