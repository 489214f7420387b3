//! Subcommand definitions and the clap side of the parameter wrappers.
//!
//! Each `*Args` struct carries the clap attributes for one command and
//! converts into the matching `cadence_core::params` type with `From`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Workspace operation
//! ```
//!
//! Core params stay free of clap derives; help text and aliases live here.

use std::path::PathBuf;

use cadence_core::params::*;
use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum BacklogCommands {
    /// List backlog items
    #[command(alias = "ls")]
    List(ListBacklogArgs),
    /// Show the planning board with its three panels
    Board,
    /// Drop an item onto a board container
    #[command(alias = "mv")]
    Drop(DropArgs),
    /// Edit backlog item fields
    Update(UpdateItemArgs),
    /// Link an item to an epic, or unlink it
    Epic(SetEpicArgs),
}

#[derive(Subcommand)]
pub enum OutcomeCommands {
    /// List outcomes
    #[command(alias = "ls")]
    List(ListOutcomesArgs),
    /// Create an outcome, or edit one when --id is given
    Save(SaveOutcomeArgs),
    /// Delete an outcome; long-term outcomes take their aligned mid-terms
    #[command(alias = "rm")]
    Delete(IdArgs),
    /// Check a statement for who, what and why
    #[command(alias = "check")]
    Validate(ValidateArgs),
}

#[derive(Subcommand)]
pub enum AgreementCommands {
    /// Show the working agreement
    Show,
    /// Record a member's approval
    Approve(ApproveArgs),
    /// Publish the agreement as a new version
    Publish,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Show the wizard steps
    Steps,
    /// Summarize the plan as it would look on the review step
    Summary(SummaryArgs),
    /// Replay a JSON session script through the wizard
    Run(RunArgs),
}

#[derive(Subcommand)]
pub enum SeedCommands {
    /// Write the built-in sample seed to the default config location
    Init(InitArgs),
    /// Export the current workspace as a seed file
    Export(ExportArgs),
}

#[derive(Args)]
pub struct ListBacklogArgs {
    /// Only show one panel: previous, upcoming or product
    #[arg(short, long)]
    pub panel: Option<String>,
}

impl From<ListBacklogArgs> for ListBacklog {
    fn from(args: ListBacklogArgs) -> Self {
        ListBacklog { panel: args.panel }
    }
}

#[derive(Args)]
pub struct DropArgs {
    /// Backlog item id
    pub id: String,
    /// Target container: q3-backlog, q4-backlog or product-backlog
    pub container: String,
}

impl From<DropArgs> for DropItem {
    fn from(args: DropArgs) -> Self {
        DropItem {
            id: args.id,
            container: args.container,
        }
    }
}

#[derive(Args)]
pub struct UpdateItemArgs {
    /// Backlog item id
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(short, long)]
    pub description: Option<String>,
    /// low, medium or high
    #[arg(long)]
    pub priority: Option<String>,
    /// low, medium or high
    #[arg(long)]
    pub impact: Option<String>,
    /// low, medium or high
    #[arg(long)]
    pub effort: Option<String>,
    /// todo, in-progress, review, completed or blocked
    #[arg(short, long)]
    pub status: Option<String>,
}

impl From<UpdateItemArgs> for UpdateItem {
    fn from(args: UpdateItemArgs) -> Self {
        UpdateItem {
            id: args.id,
            title: args.title,
            description: args.description,
            priority: args.priority,
            impact: args.impact,
            effort: args.effort,
            status: args.status,
        }
    }
}

#[derive(Args)]
pub struct SetEpicArgs {
    /// Backlog item id
    pub id: String,
    /// Epic id; omit to remove the link
    pub epic: Option<String>,
}

impl From<SetEpicArgs> for SetEpic {
    fn from(args: SetEpicArgs) -> Self {
        SetEpic {
            id: args.id,
            epic: args.epic,
        }
    }
}

#[derive(Args)]
pub struct ListOutcomesArgs {
    /// long-term, mid-term or short-term
    #[arg(short, long)]
    pub timeframe: Option<String>,
}

impl From<ListOutcomesArgs> for ListOutcomes {
    fn from(args: ListOutcomesArgs) -> Self {
        ListOutcomes {
            timeframe: args.timeframe,
        }
    }
}

#[derive(Args)]
pub struct ListTeamsArgs {
    /// Match name, description or capabilities (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,
    /// outcome, backlog, capability or multiple
    #[arg(short, long)]
    pub relationship: Option<String>,
}

impl From<ListTeamsArgs> for ListTeams {
    fn from(args: ListTeamsArgs) -> Self {
        ListTeams {
            search: args.search,
            relationship: args.relationship,
        }
    }
}

#[derive(Args)]
pub struct SaveOutcomeArgs {
    /// Outcome to edit; a new one is created when omitted
    #[arg(long)]
    pub id: Option<String>,
    /// Timeframe of a new outcome: long-term, mid-term or short-term
    #[arg(short, long)]
    pub timeframe: Option<String>,
    /// Outcome statement
    pub title: Option<String>,
    #[arg(short, long)]
    pub description: Option<String>,
    /// Long-term outcome a mid-term outcome aligns to
    #[arg(short, long)]
    pub parent: Option<String>,
}

impl From<SaveOutcomeArgs> for SaveOutcome {
    fn from(args: SaveOutcomeArgs) -> Self {
        SaveOutcome {
            id: args.id,
            timeframe: args.timeframe,
            title: args.title,
            description: args.description,
            parent: args.parent,
        }
    }
}

#[derive(Args)]
pub struct IdArgs {
    pub id: String,
}

impl From<IdArgs> for Id {
    fn from(args: IdArgs) -> Self {
        Id { id: args.id }
    }
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Statement to check
    pub text: String,
}

impl From<ValidateArgs> for ValidateStatement {
    fn from(args: ValidateArgs) -> Self {
        ValidateStatement { text: args.text }
    }
}

#[derive(Args)]
pub struct ApproveArgs {
    /// Member id on the approval list
    pub member: String,
}

#[derive(Args)]
pub struct SummaryArgs {
    /// Date the cycle is planned from, as YYYY-MM-DD. Defaults to today
    #[arg(long)]
    pub today: Option<String>,
}

#[derive(Args)]
pub struct RunArgs {
    /// JSON file holding an array of session events
    pub script: PathBuf,
    /// Date the cycle is planned from, as YYYY-MM-DD. Defaults to today
    #[arg(long)]
    pub today: Option<String>,
}

#[derive(Args)]
pub struct LogoArgs {
    /// Team name to derive the logos from
    pub team_name: String,
    /// Number of suggestions
    #[arg(short = 'n', long, default_value_t = 4)]
    pub count: usize,
    /// Generation delay in milliseconds
    #[arg(long, default_value_t = 1500)]
    pub delay_ms: u64,
    /// Give up after this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing seed file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Destination path
    pub path: PathBuf,
}
