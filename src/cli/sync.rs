//! Team reconciliation and export commands

use std::path::Path;

use crate::cli::{CommandContext, GlobalOptions};
use crate::document::Document;
use crate::error::Result;
use crate::sync::{self, Fetcher, export};

/// Reconcile the organization against the document at `teams`.
pub async fn reconcile(opts: &GlobalOptions, teams: &Path) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let document = Document::load_from(teams)?;

    let applied = sync::reconcile(
        &ctx.client,
        ctx.org(),
        &document,
        ctx.dry_run(),
        &ctx.reporter,
    )
    .await?;

    let summary = match (applied.len(), ctx.dry_run()) {
        (0, _) => "Teams are up to date".to_string(),
        (n, true) => format!("{} change(s) would be made", n),
        (n, false) => format!("{} change(s) made", n),
    };
    ctx.reporter.info(summary);
    Ok(())
}

/// Print the organization's live teams as a document on stdout.
pub async fn download(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let fetcher = Fetcher::new(&ctx.client, ctx.org(), &ctx.reporter);

    let document = export::export(&fetcher).await?;
    print!("{}", document.to_yaml()?);
    Ok(())
}
