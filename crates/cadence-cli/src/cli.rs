//! Command handlers.
//!
//! [`Cli`] owns the loaded workspace and the renderer. Every handler converts
//! its clap arguments into core params, calls the workspace and renders the
//! markdown the result displays as.

use std::{fs, path::PathBuf, time::Duration};

use anyhow::{bail, Context, Result};
use cadence_core::{
    display::{OperationStatus, Progress, SaveResult},
    params::{
        DropItem, Id, ListBacklog, ListOutcomes, ListTeams, SaveOutcome, SetEpic, UpdateItem,
    },
    LogoGenerator, LogoOutcome, LogoRequest, SeedData, SessionEvent, Workspace,
    WorkspaceBuilder,
};
use jiff::{civil::Date, Zoned};
use log::{debug, info};

use crate::{
    commands::{
        AgreementCommands, BacklogCommands, InitArgs, LogoArgs, OutcomeCommands, PlanCommands,
        RunArgs, SeedCommands,
    },
    renderer::TerminalRenderer,
};

pub struct Cli {
    workspace: Workspace,
    renderer: TerminalRenderer,
    seed_path: Option<PathBuf>,
    write: bool,
}

impl Cli {
    pub fn new(workspace: Workspace, renderer: TerminalRenderer) -> Self {
        Self {
            workspace,
            renderer,
            seed_path: None,
            write: false,
        }
    }

    /// Write changes back to `seed_path` after mutating commands.
    pub fn with_write_back(mut self, seed_path: Option<PathBuf>, write: bool) -> Self {
        self.seed_path = seed_path;
        self.write = write;
        self
    }

    pub fn handle_backlog_command(mut self, command: BacklogCommands) -> Result<()> {
        match command {
            BacklogCommands::List(args) => self.list_backlog(&args.into()),
            BacklogCommands::Board => self.show_board(),
            BacklogCommands::Drop(args) => self.drop_item(&args.into()),
            BacklogCommands::Update(args) => self.update_item(&args.into()),
            BacklogCommands::Epic(args) => self.set_epic(&args.into()),
        }
    }

    pub fn handle_outcome_command(mut self, command: OutcomeCommands) -> Result<()> {
        match command {
            OutcomeCommands::List(args) => self.list_outcomes(&args.into()),
            OutcomeCommands::Save(args) => self.save_outcome(&args.into()),
            OutcomeCommands::Delete(args) => self.delete_outcome(&args.into()),
            OutcomeCommands::Validate(args) => {
                let validation = self.workspace.validate_statement(&args.into());
                self.renderer.render(&validation.to_string())
            }
        }
    }

    pub fn handle_agreement_command(mut self, command: AgreementCommands) -> Result<()> {
        let Some(agreement) = self.workspace.agreement_mut() else {
            bail!("No working agreement in the seed data");
        };
        let status = match command {
            AgreementCommands::Show => {
                let output = agreement.to_string();
                return self.renderer.render(&output);
            }
            AgreementCommands::Approve(args) => {
                agreement.approve(&args.member)?;
                OperationStatus::success(format!(
                    "Approved by {} ({}% signed off)",
                    args.member,
                    agreement.approval_percentage()
                ))
            }
            AgreementCommands::Publish => {
                agreement.publish();
                OperationStatus::success(format!("Published version {:.1}", agreement.version))
            }
        };
        self.persist()?;
        self.renderer.render(&status.to_string())
    }

    pub async fn handle_plan_command(self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Steps => {
                let wizard = self.workspace.start_wizard();
                self.renderer.render(&format!("{}\n", Progress(wizard.progress())))
            }
            PlanCommands::Summary(args) => {
                let today = parse_today(args.today.as_deref())?;
                let summary = self.workspace.start_wizard().summary(today)?;
                self.renderer.render(&summary.to_string())
            }
            PlanCommands::Run(args) => self.run_session(args).await,
        }
    }

    pub fn handle_seed_command(self, command: SeedCommands) -> Result<()> {
        match command {
            SeedCommands::Init(args) => self.init_seed(&args),
            SeedCommands::Export(args) => {
                self.workspace
                    .to_seed()
                    .save(&args.path)
                    .context("Failed to export seed data")?;
                let status = OperationStatus::success(format!(
                    "Exported workspace to {}",
                    args.path.display()
                ));
                self.renderer.render(&status.to_string())
            }
        }
    }

    pub fn list_teams(&self, params: &ListTeams) -> Result<()> {
        let teams = self.workspace.list_teams(params)?;
        self.renderer.render(&teams.to_string())
    }

    pub async fn generate_logos(&self, args: LogoArgs) -> Result<()> {
        let mut request = LogoRequest::new(args.team_name);
        request.count = args.count;
        let pending = LogoGenerator::new(Duration::from_millis(args.delay_ms)).start(request);

        let outcome = match args.timeout_ms {
            Some(timeout) => pending.wait_timeout(Duration::from_millis(timeout)).await,
            None => pending.wait().await,
        };

        match outcome {
            LogoOutcome::Resolved(logos) => {
                let output: String = logos.iter().map(ToString::to_string).collect();
                self.renderer.render(&output)
            }
            LogoOutcome::Abandoned => self
                .renderer
                .render(&OperationStatus::failure("Logo generation abandoned").to_string()),
        }
    }

    pub fn show_board(&self) -> Result<()> {
        let panels = self.workspace.backlog().panels();
        self.renderer.render(&panels.to_string())
    }

    fn list_backlog(&self, params: &ListBacklog) -> Result<()> {
        let items = self.workspace.list_backlog(params)?;
        self.renderer.render(&items.to_string())
    }

    fn drop_item(&mut self, params: &DropItem) -> Result<()> {
        let result = self.workspace.drop_item_result(params)?;
        self.persist()?;
        self.renderer.render(&result.to_string())
    }

    fn update_item(&mut self, params: &UpdateItem) -> Result<()> {
        let result = self.workspace.update_item_result(params)?;
        self.persist()?;
        self.renderer.render(&result.to_string())
    }

    fn set_epic(&mut self, params: &SetEpic) -> Result<()> {
        let result = self.workspace.set_epic_result(params)?;
        self.persist()?;
        self.renderer.render(&result.to_string())
    }

    fn list_outcomes(&self, params: &ListOutcomes) -> Result<()> {
        let outcomes = self.workspace.list_outcomes(params)?;
        self.renderer.render(&outcomes.to_string())
    }

    fn save_outcome(&mut self, params: &SaveOutcome) -> Result<()> {
        let saved = self.workspace.save_outcome(params)?;
        self.persist()?;
        self.renderer.render(&SaveResult::new(&saved, self.workspace.outcomes()).to_string())
    }

    fn delete_outcome(&mut self, params: &Id) -> Result<()> {
        let result = self.workspace.delete_outcome_result(params)?;
        self.persist()?;
        self.renderer.render(&result.to_string())
    }

    async fn run_session(self, args: RunArgs) -> Result<()> {
        let today = parse_today(args.today.as_deref())?;
        let script = tokio::task::spawn_blocking(move || fs::read_to_string(&args.script))
            .await
            .context("Script reading task failed")?
            .context("Failed to read session script")?;
        let events: Vec<SessionEvent> =
            serde_json::from_str(&script).context("Failed to parse session script")?;
        debug!("Replaying {} session events", events.len());

        let mut wizard = self.workspace.start_wizard();
        let navigation = wizard.run(events);

        let summary = wizard.summary(today)?;
        let status = match navigation {
            Some(_) => OperationStatus::success("Plan finalized; continue with the sprint plan"),
            None if wizard.is_confirmation_pending() => {
                OperationStatus::failure("Finalize requested but not confirmed")
            }
            None => OperationStatus::failure("Plan not finalized"),
        };

        let mut output = format!("{}\n\n{summary}\n", Progress(wizard.progress()));
        output.push_str(&status.to_string());
        self.renderer.render(&output)
    }

    fn init_seed(&self, args: &InitArgs) -> Result<()> {
        let path = WorkspaceBuilder::place_default_seed()?;
        if path.exists() && !args.force {
            bail!(
                "Seed file {} already exists; pass --force to overwrite",
                path.display()
            );
        }
        SeedData::sample()?.save(&path)?;
        info!("Wrote sample seed to {}", path.display());
        let status = OperationStatus::success(format!("Wrote sample seed to {}", path.display()));
        self.renderer.render(&status.to_string())
    }

    fn persist(&self) -> Result<()> {
        if !self.write {
            return Ok(());
        }
        let Some(path) = &self.seed_path else {
            bail!("--write needs --seed-file to know where to save");
        };
        self.workspace
            .to_seed()
            .save(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("Saved workspace to {}", path.display());
        Ok(())
    }
}

fn parse_today(today: Option<&str>) -> Result<Date> {
    match today {
        Some(text) => text
            .parse()
            .with_context(|| format!("Invalid date '{text}', expected YYYY-MM-DD")),
        None => Ok(Zoned::now().date()),
    }
}
