//! Team reconciliation
//!
//! - [`fetcher`] reads live state
//! - [`reconciler`] diffs it against the document
//! - [`executor`] applies (or, under dry-run, reports) the resulting mutations
//! - [`export`] runs the other way, live state to document
//! - [`invite`] brings missing people into the organization

pub mod executor;
pub mod export;
pub mod fetcher;
pub mod intent;
pub mod invite;
pub mod reconciler;

use log::debug;

pub use executor::Executor;
pub use fetcher::{Fetcher, TeamState};
pub use intent::MutationIntent;

use crate::client::TeamApi;
use crate::document::Document;
use crate::error::Result;
use crate::output::Reporter;

/// Bring the organization's teams in line with `document`.
///
/// Missing teams are created first; the team list is then re-fetched so the
/// slugs GitHub assigned are known before any per-team call. Each team is
/// then fetched, diffed and updated in document order. Returns every intent
/// that was applied (or reported, under dry-run).
pub async fn reconcile<C: TeamApi + ?Sized>(
    client: &C,
    org: &str,
    document: &Document,
    dry_run: bool,
    reporter: &Reporter,
) -> Result<Vec<MutationIntent>> {
    let fetcher = Fetcher::new(client, org, reporter);
    let executor = Executor::new(client, org, dry_run, reporter);
    let mut applied = Vec::new();

    let mut teams = fetcher.teams().await?;
    let creates = reconciler::plan_creates(&document.teams, &teams);
    executor.apply_all(&creates).await?;
    if !creates.is_empty() && !dry_run {
        teams = fetcher.teams().await?;
    }
    applied.extend(creates);

    for spec in &document.teams {
        let state = match teams.iter().find(|t| t.name == spec.name) {
            Some(team) => {
                let repos: Vec<&str> = spec.permissions.iter().map(|p| p.repo.as_str()).collect();
                fetcher.team_state(team, &repos).await?
            }
            None => {
                debug!("Team {} does not exist yet; planning against empty state", spec.name);
                TeamState::unborn()
            }
        };

        let intents = reconciler::plan_team(spec, &state);
        debug!("{} change(s) for team {}", intents.len(), spec.name);
        executor.apply_all(&intents).await?;
        applied.extend(intents);
    }

    Ok(applied)
}
