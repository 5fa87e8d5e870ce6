//! Color validation and recursive move generation.

use super::{TransferPlanner, ValidationMode};
use crate::{
    error::{PlannerError, Result},
    models::{Disk, Move},
};

/// Checks that no two adjacent disks share a color.
///
/// # Errors
///
/// Returns `PlannerError::ConstraintViolation` for the lowest offending pair.
pub fn validate_colors<C: PartialEq>(stack: &[Disk<C>]) -> Result<()> {
    match stack
        .windows(2)
        .position(|pair| pair[0].color == pair[1].color)
    {
        Some(lower) => Err(PlannerError::ConstraintViolation {
            lower,
            upper: lower + 1,
        }),
        None => Ok(()),
    }
}

/// Number of moves needed to transfer `disks` disks, `2^disks - 1`.
///
/// Returns `None` when the count does not fit in `usize`.
pub fn move_count(disks: usize) -> Option<usize> {
    let shift = u32::try_from(disks).ok()?;
    1usize.checked_shl(shift).map(|total| total - 1)
}

impl<P: Clone + PartialEq> TransferPlanner<P> {
    /// Plans the transfer of the whole stack from source to target.
    ///
    /// The stack is ordered bottom to top. Each disk is assumed to be no
    /// smaller than the one above it; this is not checked.
    ///
    /// The middle move of each sub-problem reports the size of that
    /// sub-stack's bottom disk (index 0), not its last element.
    ///
    /// # Errors
    ///
    /// - `PlannerError::ConstraintViolation` if two adjacent disks share a color
    /// - `PlannerError::TooManyDisks` if `2^n - 1` overflows `usize` or the
    ///   allocator refuses the reservation. This guards against overflow only;
    ///   it is not a memory budget, and on hosts that overcommit memory a stack
    ///   of around 30 disks reserves and fills tens of gigabytes.
    pub fn plan<C: PartialEq>(&self, stack: &[Disk<C>]) -> Result<Vec<Move<P>>> {
        if self.validation == ValidationMode::Upfront {
            validate_colors(stack)?;
        }

        let too_many = || PlannerError::TooManyDisks { count: stack.len() };
        let Some(count) = move_count(stack.len()) else {
            // Color rejection wins over size rejection in every mode.
            validate_colors(stack)?;
            return Err(too_many());
        };

        let mut moves = Vec::new();
        if moves.try_reserve_exact(count).is_err() {
            validate_colors(stack)?;
            return Err(too_many());
        }

        self.transfer(
            stack,
            self.pegs.source(),
            self.pegs.target(),
            self.pegs.auxiliary(),
            &mut moves,
        )?;

        Ok(moves)
    }

    /// Appends the moves carrying `stack` from `source` to `target`.
    ///
    /// `stack[0]` is the largest disk of this sub-problem; the disks above it
    /// are parked on `auxiliary` while it moves.
    fn transfer<C: PartialEq>(
        &self,
        stack: &[Disk<C>],
        source: &P,
        target: &P,
        auxiliary: &P,
        moves: &mut Vec<Move<P>>,
    ) -> Result<()> {
        if self.validation == ValidationMode::PerSubproblem {
            validate_colors(stack)?;
        }

        let Some((bottom, above)) = stack.split_first() else {
            return Ok(());
        };

        self.transfer(above, source, auxiliary, target, moves)?;
        moves.push(Move::new(bottom.size, source.clone(), target.clone()));
        self.transfer(above, auxiliary, target, source, moves)
    }
}
