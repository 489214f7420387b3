//! Cadence CLI
//!
//! Command-line front end for headless 90-day cycle planning.

mod args;
mod cli;
mod commands;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use cadence_core::WorkspaceBuilder;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        seed_file,
        write,
        no_color,
        command,
    } = Args::parse();

    let workspace = WorkspaceBuilder::new()
        .with_seed_path(seed_file.as_ref())
        .build()
        .await
        .context("Failed to load workspace")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(workspace, renderer).with_write_back(seed_file, write);

    info!("Cadence started");

    match command {
        Some(Backlog { command }) => cli.handle_backlog_command(command),
        Some(Outcome { command }) => cli.handle_outcome_command(command),
        Some(Teams(args)) => cli.list_teams(&args.into()),
        Some(Agreement { command }) => cli.handle_agreement_command(command),
        Some(Plan { command }) => cli.handle_plan_command(command).await,
        Some(Logo(args)) => cli.generate_logos(args).await,
        Some(Seed { command }) => cli.handle_seed_command(command),
        None => cli.show_board(),
    }
}
