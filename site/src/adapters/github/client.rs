//! GitHub REST API client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::ports::{GitHubClient, GitHubOwner, GitHubRepo};
use crate::error::UpstreamError;

const ACCEPT: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = "Portfolio-Website";

/// Implementation of the GitHub API client
pub struct GitHubClientImpl {
    http: Client,
    base_url: String,
}

impl GitHubClientImpl {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, UpstreamError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| UpstreamError::Deserialization(e.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(UpstreamError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Response types from GitHub API
#[derive(Deserialize)]
struct GitHubOwnerResponse {
    avatar_url: Option<String>,
}

#[derive(Deserialize)]
struct GitHubRepoResponse {
    name: String,
    description: Option<String>,
    owner: Option<GitHubOwnerResponse>,
    languages_url: String,
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    forks_count: u64,
    language: Option<String>,
}

impl From<GitHubRepoResponse> for GitHubRepo {
    fn from(r: GitHubRepoResponse) -> Self {
        GitHubRepo {
            name: r.name,
            description: r.description,
            owner: r.owner.map(|o| GitHubOwner {
                avatar_url: o.avatar_url,
            }),
            languages_url: r.languages_url,
            stargazers_count: r.stargazers_count,
            forks_count: r.forks_count,
            language: r.language,
        }
    }
}

#[async_trait]
impl GitHubClient for GitHubClientImpl {
    async fn get_repo(&self, owner: &str, repo: &str) -> Result<GitHubRepo, UpstreamError> {
        let resp = self
            .http
            .get(self.api_url(&format!("/repos/{}/{}", owner, repo)))
            .header("Accept", ACCEPT)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let repo: GitHubRepoResponse = self.handle_response(resp).await?;
        Ok(repo.into())
    }

    async fn get_languages(&self, languages_url: &str) -> Result<Vec<String>, UpstreamError> {
        let resp = self
            .http
            .get(languages_url)
            .header("Accept", ACCEPT)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        // serde_json is built with preserve_order, so keys keep the API's order
        let languages: serde_json::Map<String, serde_json::Value> =
            self.handle_response(resp).await?;
        Ok(languages.into_iter().map(|(name, _)| name).collect())
    }
}
