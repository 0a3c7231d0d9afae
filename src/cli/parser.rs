use clap::Parser;
use secrecy::SecretString;

use crate::constants::{DASHBOARD_URL, GITHUB_API_URL, OWNER, REPO};

/// Post a metrics dashboard link on the pull request of the current CI branch.
///
/// Every option can be given through the environment, so CI can invoke it without arguments.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Token used for `Authorization: token <TOKEN>`
    #[arg(long, env = "GITHUB_COMMENTS_TOKEN", hide_env_values = true)]
    pub(crate) github_comments_token: SecretString,
    /// Branch the CI build runs on
    #[arg(long, env = "CIRCLE_BRANCH")]
    pub(crate) circle_branch: String,
    /// Owner of the repository to comment on
    #[arg(long, env = "DASHBOARD_LINK_OWNER", default_value = OWNER)]
    pub(crate) owner: String,
    /// Repository to comment on
    #[arg(long, env = "DASHBOARD_LINK_REPO", default_value = REPO)]
    pub(crate) repo: String,
    /// GitHub REST API base URI
    #[arg(long, env = "GITHUB_API_URL", default_value = GITHUB_API_URL)]
    pub(crate) api_url: String,
    /// Dashboard query URL the branch parameters get appended to
    #[arg(long, env = "DASHBOARD_URL", default_value = DASHBOARD_URL)]
    pub(crate) dashboard_url: String,
    /// Look everything up, but don’t post the comment
    #[arg(long, env = "DASHBOARD_LINK_DRY_RUN")]
    pub(crate) dry_run: bool,
}
