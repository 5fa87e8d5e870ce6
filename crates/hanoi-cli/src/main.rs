//! Hanoi CLI Application
//!
//! Command-line interface for the color-constrained transfer planner.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        no_color,
        json,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(renderer, json);

    info!("Hanoi started");

    match command {
        Plan(args) => cli.plan(args),
        Check(args) => cli.check(args),
    }
}
