//! Organization invite command

use std::path::Path;

use crate::cli::{CommandContext, GlobalOptions};
use crate::document::MemberList;
use crate::error::Result;
use crate::sync::invite;

/// Invite everyone on the member list who is not yet in the organization.
pub async fn run(opts: &GlobalOptions, members: &Path) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let list = MemberList::load_from(members)?;

    let invited = invite::invite_missing(
        &ctx.client,
        ctx.org(),
        &list,
        ctx.dry_run(),
        &ctx.reporter,
    )
    .await?;

    ctx.reporter.info(match (invited.len(), ctx.dry_run()) {
        (0, _) => "Everyone is already a member or invited".to_string(),
        (n, true) => format!("{} invitation(s) would be sent", n),
        (n, false) => format!("{} invitation(s) sent", n),
    });
    Ok(())
}
