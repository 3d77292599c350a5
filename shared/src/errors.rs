//! Error types for plan generation

use thiserror::Error;

/// Message used for the aggregate missing-field signal.
pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";

/// Errors raised before or during plan generation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// One or more required profile fields were absent.
    /// Carries the missing field names for logging; the user-facing
    /// message is always the single aggregate one.
    #[error("All fields are required")]
    MissingFields(Vec<String>),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Computation error: {0}")]
    Computation(String),
}

impl PlanError {
    /// Names of the missing fields, if this is a missing-field error
    pub fn missing_fields(&self) -> &[String] {
        match self {
            PlanError::MissingFields(fields) => fields,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_is_aggregate() {
        let err = PlanError::MissingFields(vec!["age".to_string(), "goal".to_string()]);
        assert_eq!(err.to_string(), ALL_FIELDS_REQUIRED);
        assert_eq!(err.missing_fields().len(), 2);
    }

    #[test]
    fn test_other_errors_have_no_missing_fields() {
        let err = PlanError::Validation("bad".to_string());
        assert!(err.missing_fields().is_empty());
    }
}
