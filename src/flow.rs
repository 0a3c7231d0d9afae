use anyhow::Result;
use tracing::Instrument;

use crate::constants::is_dashboard_comment;
use crate::dashboard::Dashboard;
use crate::github::{Comment, PullRequest, Repository};

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// No open pull request has the CI branch as its head.
    NoPullRequest,
    /// The pull request already links to the dashboard.
    AlreadyPosted(PullRequest),
    Posted { pr: PullRequest, comment: Comment },
    /// `--dry-run`: the comment that would have been posted.
    DryRun { pr: PullRequest, body: String },
}

/// Look up the pull request for `branch` and link the dashboard there unless that already happened.
pub(crate) async fn run(
    repo: Repository<'_>,
    dashboard: &Dashboard,
    branch: &str,
    dry_run: bool,
) -> Result<Outcome> {
    let Some(pr) = find_pull_request(repo, branch)
        .instrument(tracing::info_span!("find_pull_request"))
        .await?
    else {
        tracing::info!("No pull request for branch {branch}, nothing to do");
        return Ok(Outcome::NoPullRequest);
    };
    tracing::info!("Found pull request #{} for {}", pr.number, pr.branch);

    if has_dashboard_comment(repo, &pr)
        .instrument(tracing::info_span!("check_comments"))
        .await?
    {
        tracing::info!("Comment already exists, skipping");
        return Ok(Outcome::AlreadyPosted(pr));
    }

    let body = dashboard.comment_for(&pr.branch)?;
    if dry_run {
        tracing::info!("Dry run, not posting:\n{body}");
        return Ok(Outcome::DryRun { pr, body });
    }
    tracing::info!("Posting dashboard link");
    let comment = repo
        .create_comment(pr.number, &body)
        .instrument(tracing::info_span!("post_comment"))
        .await?;
    match &comment.html_url {
        Some(url) => tracing::info!("Created comment at {url}"),
        None => tracing::info!("Created comment {}", comment.id),
    }
    Ok(Outcome::Posted { pr, comment })
}

async fn find_pull_request(repo: Repository<'_>, branch: &str) -> Result<Option<PullRequest>> {
    Ok(repo
        .list_pull_requests()
        .await?
        .into_iter()
        .find(|pr| pr.branch == branch))
}

async fn has_dashboard_comment(repo: Repository<'_>, pr: &PullRequest) -> Result<bool> {
    Ok(repo
        .list_comments(pr.number)
        .await?
        .iter()
        .any(|comment| is_dashboard_comment(&comment.body)))
}
