use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{
    AgreementCommands, BacklogCommands, ListTeamsArgs, LogoArgs, OutcomeCommands, PlanCommands,
    SeedCommands,
};

/// Headless 90-day cycle planner
///
/// Loads outcomes, backlog, related teams and the working agreement from a
/// JSON seed file, lets you classify backlog items onto the planning board,
/// check outcome statements, and replay scripted planning sessions through
/// the five-step wizard.
#[derive(Parser)]
#[command(version, about, name = "cad")]
pub struct Args {
    /// Path to the JSON seed file. Defaults to
    /// $XDG_CONFIG_HOME/cadence/seed.json, then to built-in sample data
    #[arg(long, global = true)]
    pub seed_file: Option<PathBuf>,

    /// Write changes back to the seed file given with --seed-file
    #[arg(long, global = true)]
    pub write: bool,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show and classify backlog items
    #[command(alias = "b")]
    Backlog {
        #[command(subcommand)]
        command: BacklogCommands,
    },
    /// Manage long, mid and short-term outcomes
    #[command(alias = "o")]
    Outcome {
        #[command(subcommand)]
        command: OutcomeCommands,
    },
    /// List related teams
    #[command(alias = "t")]
    Teams(ListTeamsArgs),
    /// Show and sign the team working agreement
    #[command(alias = "a")]
    Agreement {
        #[command(subcommand)]
        command: AgreementCommands,
    },
    /// Run the 90-day cycle planning wizard
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Generate team logo suggestions
    Logo(LogoArgs),
    /// Manage seed data files
    Seed {
        #[command(subcommand)]
        command: SeedCommands,
    },
}
