//! GitHub adapter
//!
//! Implements `OrgDirectory` against the GitHub REST API with a blocking
//! client. Pagination is handled here; callers always see complete lists.

use anyhow::Context as _;
use reqwest::blocking::{Client, Response};
use reqwest::header;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::core::models::{Repository, Team};
use crate::core::ports::OrgDirectory;

/// API root of the public GitHub instance
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Environment variable overriding the API root (GitHub Enterprise)
pub const BASE_URL_VAR: &str = "GITHUB_API_URL";

/// Page size requested from list endpoints
const PER_PAGE: usize = 100;

/// GitHub-backed organization directory
#[derive(Debug, Clone)]
pub struct GithubDirectory {
    client: Client,
    token: String,
    base_url: String,
}

impl GithubDirectory {
    /// Create a client against the public GitHub API
    pub fn new(token: &str) -> anyhow::Result<Self> {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Create a client honoring the `GITHUB_API_URL` override
    pub fn from_env(token: &str) -> anyhow::Result<Self> {
        let base_url =
            std::env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(token, &base_url)
    }

    /// Create a client against a custom API root
    ///
    /// Used by tests to point at a local fixture server.
    pub fn with_base_url(token: &str, base_url: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("gemsync/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("building HTTP client")?;
        Ok(Self {
            client,
            token: token.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET one resource as JSON
    fn get<T: DeserializeOwned>(&self, url: &str) -> anyhow::Result<T> {
        let response = self
            .client
            .get(url)
            .header(header::AUTHORIZATION, format!("token {}", self.token))
            .header(header::ACCEPT, "application/vnd.github+json")
            .send()
            .and_then(Response::error_for_status)
            .with_context(|| format!("GET {url}"))?;
        response.json().with_context(|| format!("decoding {url}"))
    }

    /// GET a list endpoint, following pages until a short page arrives
    fn get_paged<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<Vec<T>> {
        let mut items = Vec::new();
        for page in 1_u32.. {
            let url = format!("{}{path}?per_page={PER_PAGE}&page={page}", self.base_url);
            let batch: Vec<T> = self.get(&url)?;
            let done = batch.len() < PER_PAGE;
            items.extend(batch);
            if done {
                break;
            }
        }
        Ok(items)
    }
}

impl OrgDirectory for GithubDirectory {
    fn teams(&self, org: &str) -> anyhow::Result<Vec<Team>> {
        self.get_paged(&format!("/orgs/{org}/teams"))
    }

    fn team_members(&self, team_id: u64) -> anyhow::Result<Vec<String>> {
        let members: Vec<MemberResponse> = self.get_paged(&format!("/teams/{team_id}/members"))?;
        Ok(members.into_iter().map(|member| member.login).collect())
    }

    fn user_email(&self, login: &str) -> anyhow::Result<Option<String>> {
        let user: UserResponse = self.get(&format!("{}/users/{login}", self.base_url))?;
        Ok(user.email.filter(|email| !email.trim().is_empty()))
    }

    fn repositories(&self, org: &str) -> anyhow::Result<Vec<Repository>> {
        self.get_paged(&format!("/orgs/{org}/repos"))
    }
}

/// Member entry of a team member listing
#[derive(Debug, Deserialize)]
struct MemberResponse {
    login: String,
}

/// User profile; only the email field is consulted
#[derive(Debug, Deserialize)]
struct UserResponse {
    email: Option<String>,
}
