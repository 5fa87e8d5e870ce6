//! Move list wrapper.

use std::fmt;

use serde::Serialize;

use crate::{error::Result, models::Move};

/// Wrapper for displaying a computed transfer plan.
///
/// Holds a borrowed move list together with the number of disks it moves.
#[derive(Debug, Serialize)]
pub struct MovePlan<'a, P> {
    pub disks: usize,
    pub moves: &'a [Move<P>],
}

impl<'a, P> MovePlan<'a, P> {
    /// Create a new MovePlan wrapper.
    pub fn new(moves: &'a [Move<P>], disks: usize) -> Self {
        Self { disks, moves }
    }

    /// Check if the plan has no moves.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Get the number of moves in the plan.
    pub fn len(&self) -> usize {
        self.moves.len()
    }
}

impl<P: Serialize> MovePlan<'_, P> {
    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<P: fmt::Display> fmt::Display for MovePlan<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Transfer plan")?;
        writeln!(f)?;
        writeln!(f, "- **Disks**: {}", self.disks)?;
        writeln!(f, "- **Moves**: {}", self.moves.len())?;
        writeln!(f)?;

        if self.moves.is_empty() {
            return writeln!(f, "No moves required.");
        }

        for (position, step) in self.moves.iter().enumerate() {
            writeln!(f, "{}. {step}", position + 1)?;
        }
        Ok(())
    }
}
