use anyhow::{Context, Result};
use octocrab::{service::middleware::retry::RetryConfig, Octocrab};
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;

mod models;

pub(crate) use models::{Comment, PullRequest};

/// Build a client for `api_url` that sends `Authorization: token <TOKEN>` and never retries.
pub(crate) fn client(api_url: &str, token: &SecretString) -> Result<Octocrab> {
    let mut builder = Octocrab::builder()
        .base_uri(api_url)
        .with_context(|| format!("invalid API URL {api_url}"))?
        .add_header(
            http::header::AUTHORIZATION,
            format!("token {}", token.expose_secret()),
        );
    builder.add_retry_config(RetryConfig::None);
    Ok(builder.build()?)
}

/// The three endpoints of one repository this tool talks to.
///
/// Only the first page of each listing is read.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Repository<'a> {
    github_api: &'a Octocrab,
    owner: &'a str,
    name: &'a str,
}

impl<'a> Repository<'a> {
    pub(crate) fn new(github_api: &'a Octocrab, owner: &'a str, name: &'a str) -> Self {
        Self {
            github_api,
            owner,
            name,
        }
    }

    pub(crate) async fn list_pull_requests(&self) -> Result<Vec<PullRequest>> {
        let route = format!("/repos/{}/{}/pulls", self.owner, self.name);
        self.github_api
            .get(&route, None::<&()>)
            .await
            .with_context(|| format!("failed to list pull requests of {self}"))
    }

    pub(crate) async fn list_comments(&self, number: u64) -> Result<Vec<Comment>> {
        self.github_api
            .get(self.comments_route(number), None::<&()>)
            .await
            .with_context(|| format!("failed to list comments of {self}#{number}"))
    }

    pub(crate) async fn create_comment(&self, number: u64, body: &str) -> Result<Comment> {
        self.github_api
            .post(self.comments_route(number), Some(&json!({ "body": body })))
            .await
            .with_context(|| format!("failed to comment on {self}#{number}"))
    }

    fn comments_route(&self, number: u64) -> String {
        format!(
            "/repos/{}/{}/issues/{number}/comments",
            self.owner, self.name
        )
    }
}

impl std::fmt::Display for Repository<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
