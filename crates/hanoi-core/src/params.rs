//! Parameter structures for planner operations
//!
//! These structures can be shared across interfaces without pulling in any
//! framework-specific derives. The CLI defines its own clap argument structs
//! and converts them into these via `From`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │   Operations    │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│ (plan, check)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::{models::Disk, planner::ValidationMode};

/// Parameters for planning a transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanTransfer {
    /// Disks from bottom to top
    pub disks: Vec<Disk<String>>,

    /// Peg holding the stack at the start
    pub source: String,

    /// Peg that must hold the stack at the end
    pub target: String,

    /// Spare peg
    pub auxiliary: String,

    /// When the color rule is checked
    #[serde(default)]
    pub validation: ValidationMode,

    /// Replay the plan against a simulated board before returning it
    #[serde(default)]
    pub verify: bool,
}

impl Default for PlanTransfer {
    /// Empty stack over pegs `A` (source), `C` (target) and `B` (auxiliary).
    fn default() -> Self {
        Self {
            disks: Vec::new(),
            source: "A".to_string(),
            target: "C".to_string(),
            auxiliary: "B".to_string(),
            validation: ValidationMode::default(),
            verify: false,
        }
    }
}

/// Parameters for inspecting a stack without planning it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckStack {
    /// Disks from bottom to top
    pub disks: Vec<Disk<String>>,
}
