use clap::{Parser, Subcommand};

use crate::cli::{CheckArgs, PlanArgs};

/// Plan color-constrained disk transfers between three pegs
///
/// Disks are given bottom to top as SIZE:COLOR pairs. A stack is accepted
/// only when no two adjacent disks share a color; the planner then prints the
/// moves that carry the whole stack from the source peg to the target peg
/// without ever placing a disk on a smaller one.
#[derive(Parser)]
#[command(version, about, name = "hanoi")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Hanoi CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Plan the moves for a stack of disks
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// Check a stack against the color and size rules without planning
    #[command(alias = "c")]
    Check(CheckArgs),
}
