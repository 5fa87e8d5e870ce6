//! Common operations shared by the library's front ends.
//!
//! Each operation takes a parameter struct from [`crate::params`] so that the
//! CLI (or any other interface) only has to convert its own argument types.

use crate::{
    display::StackReport,
    error::{PlannerError, Result},
    models::{Disk, Move, Pegs},
    params::{CheckStack, PlanTransfer},
    planner::PlannerBuilder,
    simulate::Towers,
};

/// Plan a transfer described by `params`.
///
/// When `params.verify` is set the plan is replayed with [`verify_plan`]
/// before being returned.
///
/// # Examples
///
/// ```rust
/// # use hanoi_core::{operations::plan_transfer, params::PlanTransfer};
/// let params = PlanTransfer {
///     disks: vec!["2:blue".parse()?, "1:red".parse()?],
///     verify: true,
///     ..Default::default()
/// };
/// let moves = plan_transfer(&params)?;
/// assert_eq!(moves.len(), 3);
/// # Ok::<(), hanoi_core::PlannerError>(())
/// ```
pub fn plan_transfer(params: &PlanTransfer) -> Result<Vec<Move<String>>> {
    let planner = PlannerBuilder::new(
        params.source.clone(),
        params.target.clone(),
        params.auxiliary.clone(),
    )
    .with_validation(params.validation)
    .build()?;

    let moves = planner.plan(&params.disks)?;

    if params.verify {
        verify_plan(&params.disks, planner.pegs().clone(), &moves)?;
    }

    Ok(moves)
}

/// Replay `moves` from the initial arrangement and require that the target
/// ends up holding the whole stack.
///
/// # Errors
///
/// Returns `PlannerError::IllegalMove` for the first move that breaks the
/// rules, or with index `moves.len()` if the replay ends incomplete.
pub fn verify_plan<C, P: PartialEq>(
    stack: &[Disk<C>],
    pegs: Pegs<P>,
    moves: &[Move<P>],
) -> Result<()> {
    let mut towers = Towers::new(stack, pegs);
    towers.replay(moves)?;

    if towers.is_complete() {
        Ok(())
    } else {
        Err(PlannerError::illegal_move(
            moves.len(),
            "target peg does not hold the full stack",
        ))
    }
}

/// Inspect a stack for the color rule and size ordering.
pub fn check_stack(params: &CheckStack) -> StackReport {
    StackReport::inspect(&params.disks)
}
