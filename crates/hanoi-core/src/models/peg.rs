//! The three peg roles of a transfer.

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Source, target and auxiliary pegs for one transfer.
///
/// Construction through [`Pegs::new`] guarantees the three identifiers are
/// pairwise distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pegs<P> {
    source: P,
    target: P,
    auxiliary: P,
}

impl<P: PartialEq> Pegs<P> {
    /// Creates a validated peg triple.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::DuplicatePeg` naming the first pair of roles
    /// that share an identifier.
    pub fn new(source: P, target: P, auxiliary: P) -> Result<Self> {
        if source == target {
            return Err(PlannerError::DuplicatePeg {
                first: "source",
                second: "target",
            });
        }
        if source == auxiliary {
            return Err(PlannerError::DuplicatePeg {
                first: "source",
                second: "auxiliary",
            });
        }
        if target == auxiliary {
            return Err(PlannerError::DuplicatePeg {
                first: "target",
                second: "auxiliary",
            });
        }

        Ok(Self {
            source,
            target,
            auxiliary,
        })
    }
}

impl<P> Pegs<P> {
    /// Peg holding the stack before the transfer
    pub fn source(&self) -> &P {
        &self.source
    }

    /// Peg holding the stack after the transfer
    pub fn target(&self) -> &P {
        &self.target
    }

    /// Spare peg
    pub fn auxiliary(&self) -> &P {
        &self.auxiliary
    }
}

impl Pegs<&'static str> {
    /// Conventional labels: source `A`, target `C`, auxiliary `B`.
    pub fn lettered() -> Self {
        Self {
            source: "A",
            target: "C",
            auxiliary: "B",
        }
    }
}
