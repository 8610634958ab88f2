//! GitHub REST API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, LINK};
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::models::{
    CreateTeamRequest, Invitation, InvitationRequest, Member, MembershipRequest,
    RepoPermissionRequest, Team, TeamRepo, UpdateTeamRequest,
};
use super::pagination;
use super::{OrgApi, TeamApi};
use crate::error::{ApiError, Result};

/// GitHub API base URL
pub const API_BASE_URL: &str = "https://api.github.com";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const API_VERSION: &str = "2022-11-28";
const JSON_MEDIA_TYPE: &str = "application/vnd.github+json";
/// Makes the team repository check return a body instead of a bare 204
const REPOSITORY_MEDIA_TYPE: &str = "application/vnd.github.v3.repository+json";

/// GitHub REST API client
pub struct GitHubClient {
    http: HttpClient,
    base_url: String,
    token: String,
}

impl GitHubClient {
    /// Create a new client authenticated with a bearer token
    pub fn new(token: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("ghteams/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::from)?;

        Ok(Self {
            http,
            base_url: API_BASE_URL.to_string(),
            token: token.into(),
        })
    }

    /// Point the client at a different API host (GitHub Enterprise, tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, url: &str, accept: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .header(ACCEPT, accept)
            .header("X-GitHub-Api-Version", API_VERSION)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
    }

    /// GET every page of a list endpoint and concatenate the results in order.
    async fn get_all<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let mut url = pagination::first_page_url(&self.url(path));
        let mut items = Vec::new();
        let mut page = 1;

        loop {
            debug!("GET {} (page {})", url, page);
            let response = self
                .request(Method::GET, &url, JSON_MEDIA_TYPE)
                .send()
                .await
                .map_err(ApiError::from)?;

            let next = response
                .headers()
                .get(LINK)
                .and_then(|v| v.to_str().ok())
                .and_then(pagination::next_page_url);

            let (status, body) = read_json(&url, response).await?;
            check_payload(&url, status, &body)?;

            let Value::Array(entries) = body else {
                return Err(ApiError::UnexpectedShape { url }.into());
            };
            for entry in entries {
                items.push(decode(&url, entry)?);
            }

            match next {
                Some(next_url) => {
                    url = next_url;
                    page += 1;
                }
                None => break,
            }
        }

        debug!("Fetched {} item(s) from {} page(s) of {}", items.len(), page, path);
        Ok(items)
    }

    /// GET a single resource.
    async fn get_one<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self
            .request(Method::GET, &url, JSON_MEDIA_TYPE)
            .send()
            .await
            .map_err(ApiError::from)?;

        let (status, body) = read_json(&url, response).await?;
        check_payload(&url, status, &body)?;
        decode(&url, body)
    }

    /// GET that hands back the status and payload instead of failing on an
    /// error payload. Undecodable responses are still errors.
    async fn get_tolerant(&self, path: &str, accept: &str) -> Result<(StatusCode, Value)> {
        let url = self.url(path);
        debug!("GET {} (tolerant)", url);
        let response = self
            .request(Method::GET, &url, accept)
            .send()
            .await
            .map_err(ApiError::from)?;

        read_json(&url, response).await
    }

    /// Send a mutating request. An empty or non-JSON body on a success status
    /// is fine; an error payload or failure status is not.
    async fn send<B: Serialize + Sync + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<()> {
        let url = self.url(path);
        debug!("{} {}", method, url);

        let mut request = self.request(method, &url, JSON_MEDIA_TYPE);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        let text = response.text().await.map_err(ApiError::from)?;
        if text.trim().is_empty() {
            return check_status(&url, status);
        }

        match serde_json::from_str::<Value>(&text) {
            Ok(payload) => check_payload(&url, status, &payload),
            Err(_) => check_status(&url, status),
        }
    }
}

async fn read_json(url: &str, response: Response) -> Result<(StatusCode, Value)> {
    let status = response.status();
    let text = response.text().await.map_err(ApiError::from)?;
    let body = serde_json::from_str(&text).map_err(|e| ApiError::InvalidResponse {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    Ok((status, body))
}

fn decode<T: DeserializeOwned>(url: &str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| {
        ApiError::InvalidResponse {
            url: url.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// An object carrying a `message` field is GitHub's error payload.
fn check_payload(url: &str, status: StatusCode, payload: &Value) -> Result<()> {
    if let Some(message) = payload.get("message").and_then(Value::as_str) {
        return Err(ApiError::Remote {
            url: url.to_string(),
            message: message.to_string(),
        }
        .into());
    }
    check_status(url, status)
}

fn check_status(url: &str, status: StatusCode) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Remote {
            url: url.to_string(),
            message: format!("HTTP {}", status),
        }
        .into())
    }
}

#[async_trait]
impl TeamApi for GitHubClient {
    async fn list_teams(&self, org: &str) -> Result<Vec<Team>> {
        self.get_all(&format!("/orgs/{}/teams", org)).await
    }

    async fn list_team_members(&self, org: &str, team_slug: &str) -> Result<Vec<Member>> {
        self.get_all(&format!("/orgs/{}/teams/{}/members", org, team_slug))
            .await
    }

    async fn list_team_repos(&self, org: &str, team_slug: &str) -> Result<Vec<TeamRepo>> {
        self.get_all(&format!("/orgs/{}/teams/{}/repos", org, team_slug))
            .await
    }

    async fn get_team_repo(
        &self,
        org: &str,
        team_slug: &str,
        owner: &str,
        repo: &str,
    ) -> Result<Option<TeamRepo>> {
        let path = format!("/orgs/{}/teams/{}/repos/{}/{}", org, team_slug, owner, repo);
        let (status, payload) = self.get_tolerant(&path, REPOSITORY_MEDIA_TYPE).await?;

        match status {
            StatusCode::OK => decode(&self.url(&path), payload).map(Some),
            StatusCode::NOT_FOUND => Ok(None),
            other => Err(ApiError::UnexpectedStatus {
                url: self.url(&path),
                status: other.as_u16(),
            }
            .into()),
        }
    }

    async fn create_team(&self, org: &str, request: &CreateTeamRequest) -> Result<()> {
        self.send(Method::POST, &format!("/orgs/{}/teams", org), Some(request))
            .await
    }

    async fn update_team(
        &self,
        org: &str,
        team_slug: &str,
        request: &UpdateTeamRequest,
    ) -> Result<()> {
        self.send(
            Method::PATCH,
            &format!("/orgs/{}/teams/{}", org, team_slug),
            Some(request),
        )
        .await
    }

    async fn add_team_member(&self, org: &str, team_slug: &str, username: &str) -> Result<()> {
        self.send(
            Method::PUT,
            &format!("/orgs/{}/teams/{}/memberships/{}", org, team_slug, username),
            Some(&MembershipRequest::default()),
        )
        .await
    }

    async fn remove_team_member(
        &self,
        org: &str,
        team_slug: &str,
        username: &str,
    ) -> Result<()> {
        self.send::<()>(
            Method::DELETE,
            &format!("/orgs/{}/teams/{}/memberships/{}", org, team_slug, username),
            None,
        )
        .await
    }

    async fn set_team_repo_permission(
        &self,
        org: &str,
        team_slug: &str,
        owner: &str,
        repo: &str,
        permission: &str,
    ) -> Result<()> {
        let request = RepoPermissionRequest {
            permission: permission.to_string(),
        };
        self.send(
            Method::PUT,
            &format!("/orgs/{}/teams/{}/repos/{}/{}", org, team_slug, owner, repo),
            Some(&request),
        )
        .await
    }

    async fn remove_team_repo(
        &self,
        org: &str,
        team_slug: &str,
        owner: &str,
        repo: &str,
    ) -> Result<()> {
        self.send::<()>(
            Method::DELETE,
            &format!("/orgs/{}/teams/{}/repos/{}/{}", org, team_slug, owner, repo),
            None,
        )
        .await
    }
}

#[async_trait]
impl OrgApi for GitHubClient {
    async fn list_org_members(&self, org: &str) -> Result<Vec<Member>> {
        self.get_all(&format!("/orgs/{}/members", org)).await
    }

    async fn list_org_invitations(&self, org: &str) -> Result<Vec<Invitation>> {
        self.get_all(&format!("/orgs/{}/invitations", org)).await
    }

    async fn get_user(&self, login: &str) -> Result<Member> {
        self.get_one(&format!("/users/{}", login)).await
    }

    async fn create_invitation(&self, org: &str, request: &InvitationRequest) -> Result<()> {
        self.send(
            Method::POST,
            &format!("/orgs/{}/invitations", org),
            Some(request),
        )
        .await
    }
}
