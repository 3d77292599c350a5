//! Fitness Platform Shared Library
//!
//! Plan generation core shared by the backend and the WASM bindings:
//! metabolic calculations, catalog selection rules, and plan assembly.
//! Nothing in this crate performs I/O.

pub mod assembler;
pub mod catalog;
pub mod defaults;
pub mod errors;
pub mod metabolic;
pub mod plan;
pub mod profile;
pub mod selection;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use catalog::{CatalogFilter, Difficulty, Exercise, Food, Nutrition};
pub use defaults::PlanDefaults;
pub use errors::*;
pub use metabolic::{BmiCategory, Macros, MetabolicSummary};
pub use plan::*;
pub use profile::*;
pub use types::*;
