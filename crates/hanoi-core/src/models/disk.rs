//! Disk model and stack helpers.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// A single disk: a size used for move reporting and an opaque color label.
///
/// A stack is a plain slice of disks, index 0 at the bottom and the last
/// element on top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disk<C> {
    /// Size of the disk, reported in each move
    pub size: u64,

    /// Color label, compared only for equality
    pub color: C,
}

impl<C> Disk<C> {
    /// Creates a new disk.
    pub fn new(size: u64, color: C) -> Self {
        Self { size, color }
    }
}

impl<C: fmt::Display> fmt::Display for Disk<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.size, self.color)
    }
}

impl FromStr for Disk<String> {
    type Err = PlannerError;

    /// Parses the `SIZE:COLOR` text form.
    fn from_str(s: &str) -> Result<Self> {
        let (size, color) = s.split_once(':').ok_or_else(|| {
            PlannerError::invalid_input("disk")
                .with_reason(format!("expected SIZE:COLOR, got '{s}'"))
        })?;

        let size = size.trim().parse::<u64>().map_err(|e| {
            PlannerError::invalid_input("disk").with_reason(format!("bad size in '{s}': {e}"))
        })?;

        let color = color.trim();
        if color.is_empty() {
            return Err(PlannerError::invalid_input("disk")
                .with_reason(format!("missing color in '{s}'")));
        }

        Ok(Self::new(size, color.to_string()))
    }
}

/// Reports whether each disk is no smaller than the one above it.
///
/// The planner assumes this ordering but never checks it.
pub fn is_size_ordered<C>(stack: &[Disk<C>]) -> bool {
    stack.windows(2).all(|pair| pair[0].size >= pair[1].size)
}
