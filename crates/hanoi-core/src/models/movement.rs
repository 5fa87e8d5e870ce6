//! Move model definition.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One atomic relocation of the top disk of `from` onto `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move<P> {
    /// Size of the disk being moved
    pub size: u64,

    /// Peg the disk leaves
    pub from: P,

    /// Peg the disk lands on
    pub to: P,
}

impl<P> Move<P> {
    /// Creates a new move.
    pub fn new(size: u64, from: P, to: P) -> Self {
        Self { size, from, to }
    }
}

impl<P: fmt::Display> fmt::Display for Move<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "disk {}: {} -> {}", self.size, self.from, self.to)
    }
}
