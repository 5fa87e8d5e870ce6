//! Core library for the Hanoi transfer planner.
//!
//! This crate computes the sequence of single-disk moves that carries a stack
//! of colored disks from a source peg to a target peg through one auxiliary
//! peg, never placing a disk on a smaller one. Stacks where two adjacent disks
//! share a color are rejected outright.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): [`Disk`], [`Move`] and the validated [`Pegs`]
//!   triple
//! - **Planner** ([`planner`]): color validation and recursive move generation
//! - **Simulation** ([`simulate`]): replay of a plan against a three-peg board
//! - **Display** ([`display`]): markdown and JSON renderings of results
//! - **Operations** ([`operations`]): parameter-driven entry points shared by
//!   front ends
//!
//! The library never performs I/O and never logs; every outcome is returned
//! as a value.
//!
//! # Quick Start
//!
//! ```rust
//! use hanoi_core::{plan, Disk, Move, PlannerError};
//!
//! let stack = [Disk::new(5, "green")];
//! assert_eq!(plan(&stack, "A", "C", "B")?, vec![Move::new(5, "A", "C")]);
//!
//! let clashing = [Disk::new(2, "red"), Disk::new(1, "red")];
//! assert!(matches!(
//!     plan(&clashing, "A", "C", "B"),
//!     Err(PlannerError::ConstraintViolation { lower: 0, upper: 1 })
//! ));
//! # Ok::<(), PlannerError>(())
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod operations;
pub mod params;
pub mod planner;
pub mod simulate;

// Re-export commonly used types
pub use display::{MovePlan, OperationStatus, StackReport};
pub use error::{PlannerError, Result};
pub use models::{is_size_ordered, Disk, Move, Pegs};
pub use params::{CheckStack, PlanTransfer};
pub use planner::{
    move_count, plan, validate_colors, PlannerBuilder, TransferPlanner, ValidationMode,
};
pub use simulate::Towers;
