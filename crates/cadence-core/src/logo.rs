//! Team logo suggestions produced after a fixed delay.
//!
//! Generation runs as a tokio task. The caller either waits for the result
//! or abandons it when the dialog is closed; there is no third outcome.

use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};
use tokio::{task::JoinHandle, time};

const PALETTE: &[(&str, &str)] = &[
    ("#2563eb", "#ffffff"),
    ("#16a34a", "#ffffff"),
    ("#f59e0b", "#1f2937"),
    ("#db2777", "#ffffff"),
    ("#7c3aed", "#ffffff"),
];

const SHAPES: &[&str] = &["circle", "rounded-square", "hexagon"];

/// What to generate logos for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogoRequest {
    pub team_name: String,
    pub count: usize,
}

impl LogoRequest {
    pub fn new(team_name: impl Into<String>) -> Self {
        Self {
            team_name: team_name.into(),
            count: 4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogoCandidate {
    pub id: String,
    pub initials: String,
    pub shape: String,
    pub background: String,
    pub foreground: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoOutcome {
    Resolved(Vec<LogoCandidate>),
    Abandoned,
}

/// Starts logo generation with a fixed delay.
#[derive(Debug, Clone, Copy)]
pub struct LogoGenerator {
    delay: Duration,
}

impl Default for LogoGenerator {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

impl LogoGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Spawn generation on the current runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn start(&self, request: LogoRequest) -> PendingLogos {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            time::sleep(delay).await;
            candidates(&request)
        });
        PendingLogos { handle }
    }
}

/// Logo generation in flight.
#[derive(Debug)]
pub struct PendingLogos {
    handle: JoinHandle<Vec<LogoCandidate>>,
}

impl PendingLogos {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the candidates.
    pub async fn wait(self) -> LogoOutcome {
        match self.handle.await {
            Ok(logos) => LogoOutcome::Resolved(logos),
            Err(e) => {
                debug!("Logo generation did not complete: {e}");
                LogoOutcome::Abandoned
            }
        }
    }

    /// Wait at most `limit` for the candidates.
    ///
    /// Resolves as soon as the task does. When `limit` runs out first the
    /// task is aborted and the outcome is `Abandoned`.
    pub async fn wait_timeout(mut self, limit: Duration) -> LogoOutcome {
        match time::timeout(limit, &mut self.handle).await {
            Ok(Ok(logos)) => LogoOutcome::Resolved(logos),
            Ok(Err(e)) => {
                debug!("Logo generation did not complete: {e}");
                LogoOutcome::Abandoned
            }
            Err(_) => {
                debug!("Logo generation timed out after {limit:?}");
                self.abandon()
            }
        }
    }

    /// Stop waiting and discard whatever the task produces.
    pub fn abandon(self) -> LogoOutcome {
        self.handle.abort();
        LogoOutcome::Abandoned
    }
}

/// Up to three initials from the words of a team name.
pub fn initials(team_name: &str) -> String {
    let letters: String = team_name
        .split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .take(3)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

fn candidates(request: &LogoRequest) -> Vec<LogoCandidate> {
    let initials = initials(&request.team_name);
    (0..request.count)
        .map(|n| {
            let (background, foreground) = PALETTE[n % PALETTE.len()];
            LogoCandidate {
                id: format!("logo-{}", n + 1),
                initials: initials.clone(),
                shape: SHAPES[n % SHAPES.len()].to_string(),
                background: background.to_string(),
                foreground: foreground.to_string(),
            }
        })
        .collect()
}
