//! Stack inspection results.

use std::fmt;

use serde::Serialize;

use super::OperationStatus;
use crate::{
    error::{PlannerError, Result},
    models::{is_size_ordered, Disk},
    planner::{move_count, validate_colors},
};

/// Outcome of inspecting a stack without planning it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackReport {
    /// Number of disks in the stack
    pub disks: usize,

    /// Lowest adjacent pair sharing a color, if any
    pub color_violation: Option<(usize, usize)>,

    /// Whether each disk is no smaller than the one above it
    pub size_ordered: bool,

    /// Moves a plan would need, when it fits in memory
    pub move_count: Option<usize>,
}

impl StackReport {
    /// Inspect `stack` for the color rule and size ordering.
    pub fn inspect<C: PartialEq>(stack: &[Disk<C>]) -> Self {
        let color_violation = match validate_colors(stack) {
            Err(PlannerError::ConstraintViolation { lower, upper }) => Some((lower, upper)),
            _ => None,
        };

        Self {
            disks: stack.len(),
            color_violation,
            size_ordered: is_size_ordered(stack),
            move_count: move_count(stack.len()),
        }
    }

    /// True when the stack can be planned and the plan will replay cleanly.
    pub fn is_plannable(&self) -> bool {
        self.color_violation.is_none() && self.size_ordered
    }

    /// Outcome line for the color rule: success with the move count, or the
    /// constraint violation.
    pub fn status(&self) -> OperationStatus {
        match (self.color_violation, self.move_count) {
            (Some((lower, upper)), _) => {
                OperationStatus::from_error(&PlannerError::ConstraintViolation { lower, upper })
            }
            (None, Some(count)) => {
                OperationStatus::success(format!("Stack can be planned in {count} moves"))
            }
            (None, None) => OperationStatus::from_error(&PlannerError::TooManyDisks {
                count: self.disks,
            }),
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for StackReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Stack check")?;
        writeln!(f)?;
        writeln!(f, "- **Disks**: {}", self.disks)?;

        match self.color_violation {
            Some((lower, upper)) => writeln!(
                f,
                "- **Colors**: ✗ disks {lower} and {upper} share a color"
            )?,
            None => writeln!(f, "- **Colors**: ✓ no adjacent repeats")?,
        }

        if self.size_ordered {
            writeln!(f, "- **Sizes**: ✓ ordered bottom to top")?;
        } else {
            writeln!(f, "- **Sizes**: ✗ a disk sits on a smaller one")?;
        }

        if self.color_violation.is_none() {
            match self.move_count {
                Some(count) => writeln!(f, "- **Moves**: {count}")?,
                None => writeln!(f, "- **Moves**: too many to plan")?,
            }
        }
        Ok(())
    }
}
