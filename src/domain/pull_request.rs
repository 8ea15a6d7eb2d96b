use serde::Deserialize;

/// Prefix of labels that name the subsystem a PR touches
pub const AREA_LABEL_PREFIX: &str = "area/";

/// A merged pull request as returned by the lister
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub labels: Vec<String>,
    pub merge_commit_sha: String,
    pub merged_at: String,
}

impl PullRequest {
    /// Create a pull request with no merge metadata
    pub fn new(number: u64, title: impl Into<String>) -> Self {
        PullRequest {
            number,
            title: title.into(),
            labels: Vec::new(),
            merge_commit_sha: String::new(),
            merged_at: String::new(),
        }
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Labels of the form `area/<name>`, in label order
    pub fn area_labels(&self) -> impl Iterator<Item = &str> {
        self.labels
            .iter()
            .map(String::as_str)
            .filter(|l| l.starts_with(AREA_LABEL_PREFIX) && l.len() > AREA_LABEL_PREFIX.len())
    }
}

/// Shape of one entry of `gh pr list --json number,title,labels,mergeCommit,mergedAt`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GhPullRequest {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub labels: Vec<GhLabel>,
    pub merge_commit: Option<GhCommitRef>,
    #[serde(default)]
    pub merged_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GhLabel {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct GhCommitRef {
    pub oid: String,
}

impl From<GhPullRequest> for PullRequest {
    fn from(pr: GhPullRequest) -> Self {
        PullRequest {
            number: pr.number,
            title: pr.title,
            labels: pr.labels.into_iter().map(|l| l.name).collect(),
            merge_commit_sha: pr.merge_commit.map(|c| c.oid).unwrap_or_default(),
            merged_at: pr.merged_at.unwrap_or_default(),
        }
    }
}
