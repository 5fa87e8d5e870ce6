//! Command handlers and clap argument wrappers.
//!
//! Argument structs here carry the clap derives and convert into the
//! framework-free parameter types of [`hanoi_core::params`]:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Operations
//! ```

use anyhow::{bail, Context, Result};
use clap::Args;
use hanoi_core::{
    operations::{check_stack, plan_transfer},
    CheckStack, Disk, MovePlan, OperationStatus, PlanTransfer, ValidationMode,
};
use log::{debug, info};

use crate::renderer::TerminalRenderer;

/// Plan the moves for a stack of disks
#[derive(Args)]
pub struct PlanArgs {
    /// Disks from bottom to top, each written SIZE:COLOR
    #[arg(value_name = "SIZE:COLOR")]
    pub disks: Vec<Disk<String>>,

    /// Peg holding the stack at the start
    #[arg(long, default_value = "A")]
    pub source: String,

    /// Peg that must hold the stack at the end
    #[arg(long, default_value = "C")]
    pub target: String,

    /// Spare peg
    #[arg(long, default_value = "B")]
    pub auxiliary: String,

    /// Re-check the color rule on every sub-stack instead of once up front
    #[arg(long)]
    pub per_subproblem: bool,

    /// Replay the plan on a simulated board before printing it
    #[arg(long)]
    pub verify: bool,
}

impl From<PlanArgs> for PlanTransfer {
    fn from(val: PlanArgs) -> Self {
        PlanTransfer {
            disks: val.disks,
            source: val.source,
            target: val.target,
            auxiliary: val.auxiliary,
            validation: if val.per_subproblem {
                ValidationMode::PerSubproblem
            } else {
                ValidationMode::Upfront
            },
            verify: val.verify,
        }
    }
}

/// Check a stack against the color and size rules
#[derive(Args)]
pub struct CheckArgs {
    /// Disks from bottom to top, each written SIZE:COLOR
    #[arg(value_name = "SIZE:COLOR")]
    pub disks: Vec<Disk<String>>,
}

impl From<CheckArgs> for CheckStack {
    fn from(val: CheckArgs) -> Self {
        CheckStack { disks: val.disks }
    }
}

/// Runs commands and renders their results.
pub struct Cli {
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer, json: bool) -> Self {
        Self { renderer, json }
    }

    /// Plan a transfer and print the moves.
    pub fn plan(&self, args: PlanArgs) -> Result<()> {
        let params = PlanTransfer::from(args);
        debug!(
            "Planning {} disks from {} to {} via {} ({:?})",
            params.disks.len(),
            params.source,
            params.target,
            params.auxiliary,
            params.validation
        );

        let moves = plan_transfer(&params).context("Failed to plan transfer")?;
        info!("Planned {} moves", moves.len());

        let plan = MovePlan::new(&moves, params.disks.len());
        if self.json {
            println!("{}", plan.to_json()?);
            return Ok(());
        }

        let mut output = plan.to_string();
        if params.verify {
            output.push('\n');
            output.push_str(
                &OperationStatus::success("Plan verified by replay".to_string()).to_string(),
            );
        }
        self.renderer.render(&output)
    }

    /// Inspect a stack and print the report.
    pub fn check(&self, args: CheckArgs) -> Result<()> {
        let report = check_stack(&args.into());

        if self.json {
            println!("{}", report.to_json()?);
        } else {
            let output = format!("{report}\n{}", report.status());
            self.renderer.render(&output)?;
        }

        if let Some((lower, upper)) = report.color_violation {
            bail!("Disks {lower} and {upper} share a color");
        }
        Ok(())
    }
}
