//! Transfer planning for color-constrained disk stacks.
//!
//! The planner turns a bottom-to-top stack of disks into the ordered list of
//! single-disk moves that carries the whole stack from the source peg to the
//! target peg through the auxiliary peg. A stack where two adjacent disks
//! share a color is rejected as a whole; no partial plan is ever returned.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`TransferPlanner`] instances
//! - [`plan_ops`]: Color validation and the recursive move generation
//!
//! # Usage Examples
//!
//! ```rust
//! use hanoi_core::{models::Disk, plan, Move};
//!
//! let stack = [Disk::new(2, "blue"), Disk::new(1, "red")];
//! let moves = plan(&stack, "A", "C", "B")?;
//!
//! assert_eq!(
//!     moves,
//!     vec![
//!         Move::new(1, "A", "B"),
//!         Move::new(2, "A", "C"),
//!         Move::new(1, "B", "C"),
//!     ]
//! );
//! # Ok::<(), hanoi_core::PlannerError>(())
//! ```
//!
//! Choosing the validation strategy through the builder:
//!
//! ```rust
//! use hanoi_core::{models::Disk, PlannerBuilder, ValidationMode};
//!
//! let planner = PlannerBuilder::new("left", "right", "middle")
//!     .with_validation(ValidationMode::PerSubproblem)
//!     .build()?;
//!
//! let moves = planner.plan(&[Disk::new(5, "green")])?;
//! assert_eq!(moves.len(), 1);
//! # Ok::<(), hanoi_core::PlannerError>(())
//! ```

pub mod builder;
pub mod plan_ops;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;
pub use plan_ops::{move_count, validate_colors};

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    models::{Disk, Move, Pegs},
};

/// When the color-adjacency rule is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Scan the full stack once before recursing
    #[default]
    Upfront,

    /// Rescan the active sub-stack at every recursive call
    PerSubproblem,
}

/// Main planner interface, bound to one set of pegs.
#[derive(Debug, Clone)]
pub struct TransferPlanner<P> {
    pub(crate) pegs: Pegs<P>,
    pub(crate) validation: ValidationMode,
}

impl<P> TransferPlanner<P> {
    /// Creates a new planner over validated pegs.
    pub(crate) fn new(pegs: Pegs<P>, validation: ValidationMode) -> Self {
        Self { pegs, validation }
    }

    /// Pegs this planner moves disks between.
    pub fn pegs(&self) -> &Pegs<P> {
        &self.pegs
    }

    /// Configured color validation strategy.
    pub fn validation(&self) -> ValidationMode {
        self.validation
    }
}

/// Plans the transfer of `stack` from `source` to `target` using `auxiliary`.
///
/// # Errors
///
/// - `PlannerError::DuplicatePeg` if two of the pegs are equal
/// - `PlannerError::ConstraintViolation` if two adjacent disks share a color
/// - `PlannerError::TooManyDisks` if the plan cannot be allocated
pub fn plan<C, P>(stack: &[Disk<C>], source: P, target: P, auxiliary: P) -> Result<Vec<Move<P>>>
where
    C: PartialEq,
    P: Clone + PartialEq,
{
    PlannerBuilder::new(source, target, auxiliary)
        .build()?
        .plan(stack)
}
