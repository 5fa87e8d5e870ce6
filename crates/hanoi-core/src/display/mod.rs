//! Display wrappers for planner results.
//!
//! Models carry a compact one-line `Display`; the wrappers here format whole
//! results as markdown for the terminal, and serialize to JSON for machine
//! consumers.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Planner Output │    │ Display Wrappers│    │   Formatted     │
//! │  (Vec<Move>)    │───▶│ (MovePlan, ...) │───▶│    Output       │
//! │                 │    │                 │    │ (Markdown/JSON) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`plan`]: Move list wrapper ([`MovePlan`])
//! - [`report`]: Stack inspection results ([`StackReport`])
//! - [`status`]: Status and confirmation messages ([`OperationStatus`])
//!
//! ## Usage Examples
//!
//! ```rust
//! use hanoi_core::{display::{MovePlan, OperationStatus}, Move};
//!
//! let moves = vec![Move::new(1, "A", "C")];
//! let output = MovePlan::new(&moves, 1).to_string();
//! assert!(output.contains("1. disk 1: A -> C"));
//!
//! let failure = OperationStatus::failure("Color constraint violated".to_string());
//! assert!(failure.to_string().starts_with("Error:"));
//! ```

pub mod plan;
pub mod report;
pub mod status;

pub use plan::MovePlan;
pub use report::StackReport;
pub use status::OperationStatus;
