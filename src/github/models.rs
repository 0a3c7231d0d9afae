use serde::{Deserialize, Serialize};

/// The parts of a GitHub pull request resource needed to find it by branch.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "PullRequestResource")]
pub(crate) struct PullRequest {
    pub(crate) number: u64,
    /// Source branch (`head.ref`)
    pub(crate) branch: String,
}

#[derive(Deserialize)]
struct PullRequestResource {
    number: u64,
    head: Head,
}

#[derive(Deserialize)]
struct Head {
    #[serde(rename = "ref")]
    ref_field: String,
}

impl From<PullRequestResource> for PullRequest {
    fn from(resource: PullRequestResource) -> Self {
        PullRequest {
            number: resource.number,
            branch: resource.head.ref_field,
        }
    }
}

/// A GitHub issue comment. Pull request conversations are issue comments.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Comment {
    pub(crate) id: u64,
    pub(crate) body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) html_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserialize_pull_requests() {
        let prs: Vec<PullRequest> = serde_json::from_value(json!([
            {"number": 1, "title": "Ignored", "head": {"ref": "main", "sha": "abc"}},
            {"number": 2, "head": {"ref": "feature/x"}},
        ]))
        .unwrap();
        assert_eq!(
            prs,
            [
                PullRequest {
                    number: 1,
                    branch: "main".to_owned()
                },
                PullRequest {
                    number: 2,
                    branch: "feature/x".to_owned()
                },
            ]
        );
    }

    #[test]
    fn test_missing_head_ref() {
        let err = serde_json::from_value::<PullRequest>(json!({"number": 1, "head": {}}))
            .unwrap_err();
        assert_eq!(err.to_string(), "missing field `ref`");
    }

    #[test]
    fn test_deserialize_comment() {
        let comment: Comment = serde_json::from_value(json!({
            "id": 42,
            "body": "Metrics dashboard: https://app.redash.io/orbs/dashboard/ci",
            "user": {"login": "ci-bot"},
        }))
        .unwrap();
        assert_eq!(comment.id, 42);
        assert!(comment.body.starts_with("Metrics dashboard:"));
        assert_eq!(comment.html_url, None);
    }

    #[test]
    fn test_comment_missing_body() {
        let err = serde_json::from_value::<Comment>(json!({"id": 42})).unwrap_err();
        assert_eq!(err.to_string(), "missing field `body`");
    }
}
