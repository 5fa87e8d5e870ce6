//! Replay of move lists against a simulated three-peg state.
//!
//! [`Towers`] starts with the whole stack on the source peg and applies moves
//! one at a time, rejecting any move that takes a disk the peg does not have
//! on top or that puts a disk on a smaller one. Each slot remembers which
//! disk of the original stack it holds, so a plan that swaps two disks of
//! equal size never counts as complete. It is how plans are verified.
//!
//! ```rust
//! use hanoi_core::{models::Disk, plan, simulate::Towers, Pegs};
//!
//! let stack = [Disk::new(3, "red"), Disk::new(2, "blue"), Disk::new(1, "red")];
//! let moves = plan(&stack, "A", "C", "B")?;
//!
//! let mut towers = Towers::new(&stack, Pegs::lettered());
//! towers.replay(&moves)?;
//! assert!(towers.is_complete());
//! # Ok::<(), hanoi_core::PlannerError>(())
//! ```

use crate::{
    error::{PlannerError, Result},
    models::{Disk, Move, Pegs},
};

/// Three pegs holding disks, each ordered bottom to top.
///
/// Disks are tracked by their position in the original stack.
#[derive(Debug, Clone)]
pub struct Towers<P> {
    pegs: Pegs<P>,
    sizes: Vec<u64>,
    stacks: [Vec<usize>; 3],
    applied: usize,
}

impl<P: PartialEq> Towers<P> {
    /// Places the whole stack on the source peg.
    pub fn new<C>(stack: &[Disk<C>], pegs: Pegs<P>) -> Self {
        Self {
            pegs,
            sizes: stack.iter().map(|disk| disk.size).collect(),
            stacks: [(0..stack.len()).collect(), Vec::new(), Vec::new()],
            applied: 0,
        }
    }

    /// Applies a single move.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::IllegalMove` when either peg is unknown, the
    /// pegs are the same, the source top does not match the move, or the
    /// disk would land on a smaller one. The state is unchanged on error.
    pub fn apply(&mut self, step: &Move<P>) -> Result<()> {
        let index = self.applied;
        let from = self
            .slot(&step.from)
            .ok_or_else(|| PlannerError::illegal_move(index, "unknown source peg"))?;
        let to = self
            .slot(&step.to)
            .ok_or_else(|| PlannerError::illegal_move(index, "unknown destination peg"))?;

        if from == to {
            return Err(PlannerError::illegal_move(
                index,
                "source and destination are the same peg",
            ));
        }

        match self.top_size(from) {
            None => {
                return Err(PlannerError::illegal_move(index, "source peg is empty"));
            }
            Some(top) if top != step.size => {
                return Err(PlannerError::illegal_move(
                    index,
                    format!("top disk has size {top}, move names size {}", step.size),
                ));
            }
            Some(_) => {}
        }

        if let Some(below) = self.top_size(to) {
            if below < step.size {
                return Err(PlannerError::illegal_move(
                    index,
                    format!("disk of size {} placed on smaller disk of size {below}", step.size),
                ));
            }
        }

        if let Some(disk) = self.stacks[from].pop() {
            self.stacks[to].push(disk);
        }
        self.applied += 1;
        Ok(())
    }

    /// Applies every move in order, stopping at the first illegal one.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::IllegalMove` carrying the failing move's index.
    pub fn replay(&mut self, moves: &[Move<P>]) -> Result<()> {
        moves.iter().try_for_each(|step| self.apply(step))
    }

    /// Sizes on `peg`, bottom to top, or `None` for an unknown peg.
    pub fn peg(&self, peg: &P) -> Option<Vec<u64>> {
        self.positions(peg)
            .map(|disks| disks.iter().map(|&disk| self.sizes[disk]).collect())
    }

    /// Original stack positions of the disks on `peg`, bottom to top.
    pub fn positions(&self, peg: &P) -> Option<&[usize]> {
        self.slot(peg).map(|slot| self.stacks[slot].as_slice())
    }

    /// True once the target holds every disk in its original order and the
    /// other pegs are empty.
    pub fn is_complete(&self) -> bool {
        self.stacks[0].is_empty()
            && self.stacks[2].is_empty()
            && self.stacks[1].len() == self.sizes.len()
            && self.stacks[1]
                .iter()
                .enumerate()
                .all(|(position, &disk)| position == disk)
    }

    /// Number of moves applied so far.
    pub fn applied(&self) -> usize {
        self.applied
    }

    fn top_size(&self, slot: usize) -> Option<u64> {
        self.stacks[slot].last().map(|&disk| self.sizes[disk])
    }

    fn slot(&self, peg: &P) -> Option<usize> {
        if peg == self.pegs.source() {
            Some(0)
        } else if peg == self.pegs.target() {
            Some(1)
        } else if peg == self.pegs.auxiliary() {
            Some(2)
        } else {
            None
        }
    }
}
