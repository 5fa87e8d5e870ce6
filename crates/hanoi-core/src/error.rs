//! Error types for the planner library.

use thiserror::Error;

/// Comprehensive error type for all planner operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Two stack-adjacent disks share a color
    #[error(
        "Color constraint violated: disks at positions {lower} and {upper} share a color"
    )]
    ConstraintViolation { lower: usize, upper: usize },
    /// Two peg roles were given the same identifier
    #[error("Peg roles '{first}' and '{second}' must use distinct pegs")]
    DuplicatePeg {
        first: &'static str,
        second: &'static str,
    },
    /// The number of moves for this stack does not fit in memory
    #[error("Cannot plan a transfer of {count} disks: move count overflows")]
    TooManyDisks { count: usize },
    /// A replayed move broke the transfer rules
    #[error("Illegal move #{index}: {reason}")]
    IllegalMove { index: usize, reason: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlannerError {
        PlannerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlannerError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an illegal move error for the move at `index`.
    pub fn illegal_move(index: usize, reason: impl Into<String>) -> Self {
        Self::IllegalMove {
            index,
            reason: reason.into(),
        }
    }

    /// Returns true when this error is a color-constraint rejection.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation { .. })
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_violation_message() {
        let err = PlannerError::ConstraintViolation { lower: 0, upper: 1 };
        assert_eq!(
            err.to_string(),
            "Color constraint violated: disks at positions 0 and 1 share a color"
        );
        assert!(err.is_constraint_violation());
    }

    #[test]
    fn test_invalid_input_builder() {
        let err = PlannerError::invalid_input("disk").with_reason("missing color");
        match err {
            PlannerError::InvalidInput { field, reason } => {
                assert_eq!(field, "disk");
                assert_eq!(reason, "missing color");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_peg_message() {
        let err = PlannerError::DuplicatePeg {
            first: "source",
            second: "target",
        };
        assert!(err.to_string().contains("'source' and 'target'"));
        assert!(!err.is_constraint_violation());
    }
}
