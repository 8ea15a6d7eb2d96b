use crate::domain::PullRequest;
use crate::error::{ReleaseNotesError, Result};
use crate::github::PrLister;

/// Mock lister for testing without GitHub access
pub struct MockPrLister {
    prs: Vec<PullRequest>,
    failure: Option<String>,
}

impl MockPrLister {
    /// Create a lister that returns the given PRs in order
    pub fn new(prs: Vec<PullRequest>) -> Self {
        MockPrLister {
            prs,
            failure: None,
        }
    }

    /// Create a lister whose every call fails with the given message
    pub fn failing(msg: impl Into<String>) -> Self {
        MockPrLister {
            prs: Vec::new(),
            failure: Some(msg.into()),
        }
    }

    /// Add a pull request at the end of the list
    pub fn add_pr(&mut self, pr: PullRequest) {
        self.prs.push(pr);
    }
}

impl Default for MockPrLister {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl PrLister for MockPrLister {
    fn list_prs(&self) -> Result<Vec<PullRequest>> {
        match &self.failure {
            Some(msg) => Err(ReleaseNotesError::collaborator(msg.clone())),
            None => Ok(self.prs.clone()),
        }
    }
}
