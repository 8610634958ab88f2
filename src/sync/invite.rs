//! Organization invitations
//!
//! Invites everyone on a member list who is neither an organization member
//! nor already holding a pending invitation.

use std::collections::HashSet;

use log::debug;

use crate::client::OrgApi;
use crate::client::models::InvitationRequest;
use crate::document::MemberList;
use crate::error::Result;
use crate::output::Reporter;

/// Invite missing members, in list order. Returns the usernames that were
/// invited (or would have been, under dry-run).
pub async fn invite_missing<C: OrgApi + ?Sized>(
    client: &C,
    org: &str,
    list: &MemberList,
    dry_run: bool,
    reporter: &Reporter,
) -> Result<Vec<String>> {
    reporter.progress(format!("GET /orgs/{}/members", org));
    let members = client.list_org_members(org).await?;

    reporter.progress(format!("GET /orgs/{}/invitations", org));
    let invitations = client.list_org_invitations(org).await?;

    let mut known: HashSet<String> = members.iter().map(|m| m.login.to_lowercase()).collect();
    known.extend(
        invitations
            .iter()
            .filter_map(|i| i.login.as_deref())
            .map(str::to_lowercase),
    );
    debug!(
        "Organization {} has {} member(s) and {} pending invitation(s)",
        org,
        members.len(),
        invitations.len()
    );

    let mut invited = Vec::new();
    for username in &list.usernames {
        if known.contains(&username.to_lowercase()) {
            continue;
        }

        reporter.progress(format!("GET /users/{}", username));
        let user = client.get_user(username).await?;

        reporter.action(format!("Inviting `{}` to `{}`", username, org));
        if dry_run {
            reporter.dry_run("POST", format!("/orgs/{}/invitations", org));
        } else {
            client
                .create_invitation(org, &InvitationRequest::direct_member(user.id))
                .await?;
        }
        invited.push(username.clone());
    }

    Ok(invited)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockGitHubClient;
    use crate::error::{ApiError, Error};

    async fn org() -> MockGitHubClient {
        MockGitHubClient::new("acme")
            .with_org_members(&["Alice"])
            .await
            .with_invitations(&["bob"])
            .await
            .with_users(&[("carol", 303), ("dave", 404)])
            .await
    }

    #[tokio::test]
    async fn test_invites_only_missing_users_in_order() {
        let mock = org().await;
        let reporter = Reporter::capturing();
        let list = MemberList::parse("- dave\n- alice\n- BOB\n- carol\n").unwrap();

        let invited = invite_missing(&mock, "acme", &list, false, &reporter)
            .await
            .unwrap();

        assert_eq!(invited, vec!["dave", "carol"]);
        let requests = mock.captured_requests().await;
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, "create_invitation");
        assert_eq!(requests[0].args, vec!["404"]);
        assert_eq!(requests[1].args, vec!["303"]);

        let counts = mock.call_counts().await;
        assert_eq!(counts.list_org_members, 1);
        assert_eq!(counts.list_org_invitations, 1);
        assert_eq!(counts.get_user, 2);
    }

    #[tokio::test]
    async fn test_dry_run_invites_nobody() {
        let mock = org().await;
        let reporter = Reporter::capturing();
        let list = MemberList::parse("- carol\n").unwrap();

        let invited = invite_missing(&mock, "acme", &list, true, &reporter)
            .await
            .unwrap();

        assert_eq!(invited, vec!["carol"]);
        assert_eq!(mock.call_counts().await.mutations, 0);
        assert_eq!(
            reporter.lines(),
            vec![
                "GET /orgs/acme/members",
                "GET /orgs/acme/invitations",
                "GET /users/carol",
                "Inviting `carol` to `acme`",
                "Dry run: POST [/orgs/acme/invitations]",
            ]
        );
    }

    #[tokio::test]
    async fn test_unknown_user_is_an_error() {
        let mock = org().await;
        let reporter = Reporter::capturing();
        let list = MemberList::parse("- nobody\n").unwrap();

        let err = invite_missing(&mock, "acme", &list, false, &reporter)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Remote { .. })));
        assert_eq!(mock.call_counts().await.mutations, 0);
    }

    #[tokio::test]
    async fn test_everyone_present_is_a_no_op() {
        let mock = org().await;
        let reporter = Reporter::capturing();
        let list = MemberList::parse("- alice\n- bob\n").unwrap();

        let invited = invite_missing(&mock, "acme", &list, false, &reporter)
            .await
            .unwrap();
        assert!(invited.is_empty());
        assert_eq!(mock.call_counts().await.get_user, 0);
    }
}
