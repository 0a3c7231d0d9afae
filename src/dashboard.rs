use anyhow::Result;
use askama::Template;

/// Dashboard parameters don’t accept slashes.
pub(crate) fn format_branch(branch: &str) -> String {
    branch.replace('/', "-")
}

#[derive(Debug, Clone)]
pub(crate) struct Dashboard {
    base_url: String,
}

impl Dashboard {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub(crate) fn url_for(&self, branch: &str) -> String {
        format!(
            "{}?p_test=acceptance&p_branch={}",
            self.base_url,
            format_branch(branch)
        )
    }

    /// Render the comment body linking to the dashboard for `branch`.
    pub(crate) fn comment_for(&self, branch: &str) -> Result<String> {
        Ok(Comment {
            url: &self.url_for(branch),
        }
        .render()?)
    }
}

#[derive(Template)]
#[template(path = "comment.md.j2", escape = "none")]
struct Comment<'a> {
    url: &'a str,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::constants::{is_dashboard_comment, DASHBOARD_URL};

    use super::*;

    #[rstest]
    #[case("main", "main")]
    #[case("feature/foo", "feature-foo")]
    #[case("feature/foo/bar", "feature-foo-bar")]
    #[case("/leading/and/trailing/", "-leading-and-trailing-")]
    #[case("already-dashed", "already-dashed")]
    #[case("", "")]
    fn test_format_branch(#[case] branch: &str, #[case] expected: &str) {
        assert_eq!(format_branch(branch), expected);
    }

    #[test]
    fn test_url_for() {
        let dashboard = Dashboard::new(DASHBOARD_URL);
        assert_eq!(
            dashboard.url_for("feature/foo/bar"),
            "https://app.redash.io/orbs/dashboard/ci?p_test=acceptance&p_branch=feature-foo-bar"
        );
    }

    #[test]
    fn test_comment_for() {
        let dashboard = Dashboard::new(DASHBOARD_URL);
        let body = dashboard.comment_for("fix/thing").unwrap();
        assert!(body.starts_with(
            "Metrics dashboard: https://app.redash.io/orbs/dashboard/ci?p_test=acceptance&p_branch=fix-thing"
        ));
        assert!(body.contains("\n\nThis is an automated message."));
        // the posted comment must be recognized on the next run
        assert!(is_dashboard_comment(&body));
    }
}
