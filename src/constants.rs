use std::sync::LazyLock;

use regex::Regex;

pub(crate) const OWNER: &str = "orbs-network";
pub(crate) const REPO: &str = "orbs-network-go";
pub(crate) const GITHUB_API_URL: &str = "https://api.github.com";
pub(crate) const DASHBOARD_URL: &str = "https://app.redash.io/orbs/dashboard/ci";

/// Any comment mentioning the dashboard host counts as an already posted link.
static DASHBOARD_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"app\.redash\.io").expect("valid regex"));

pub(crate) fn is_dashboard_comment(body: &str) -> bool {
    DASHBOARD_MARKER.is_match(body)
}
