//! Builder for creating and configuring TransferPlanner instances.

use super::{TransferPlanner, ValidationMode};
use crate::{error::Result, models::Pegs};

/// Builder for creating and configuring TransferPlanner instances.
#[derive(Debug, Clone)]
pub struct PlannerBuilder<P> {
    source: P,
    target: P,
    auxiliary: P,
    validation: ValidationMode,
}

impl<P: PartialEq> PlannerBuilder<P> {
    /// Creates a new builder for the given peg roles.
    pub fn new(source: P, target: P, auxiliary: P) -> Self {
        Self {
            source,
            target,
            auxiliary,
            validation: ValidationMode::default(),
        }
    }

    /// Sets when the color-adjacency rule is checked.
    ///
    /// Defaults to [`ValidationMode::Upfront`].
    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::DuplicatePeg` if two peg roles share an
    /// identifier.
    pub fn build(self) -> Result<TransferPlanner<P>> {
        let pegs = Pegs::new(self.source, self.target, self.auxiliary)?;
        Ok(TransferPlanner::new(pegs, self.validation))
    }
}

impl Default for PlannerBuilder<&'static str> {
    /// Source `A`, target `C`, auxiliary `B`.
    fn default() -> Self {
        Self::new("A", "C", "B")
    }
}
