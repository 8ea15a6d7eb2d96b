use crate::domain::pull_request::GhPullRequest;
use crate::domain::branch::MAIN_BRANCH;
use crate::domain::{PullRequest, Reference};
use crate::error::{ReleaseNotesError, Result};
use crate::github::{CommandRunner, PrLister};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;

const COMPARE_PAGE_SIZE: usize = 100;
const PR_LIST_LIMIT: usize = 1000;
const PR_JSON_FIELDS: &str = "number,title,labels,mergeCommit,mergedAt";

#[derive(Debug, Deserialize)]
struct CompareResponse {
    #[serde(default)]
    total_commits: usize,
    #[serde(default)]
    commits: Vec<CompareCommit>,
}

#[derive(Debug, Deserialize)]
struct CompareCommit {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct GitObject {
    sha: String,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
struct GitRefResponse {
    object: GitObject,
}

#[derive(Debug, Deserialize)]
struct CommitResponse {
    commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    committer: Signature,
}

#[derive(Debug, Deserialize)]
struct Signature {
    date: String,
}

/// Lists the PRs merged between two refs.
///
/// The merge window comes from the commit dates of both refs. PRs merged in
/// that window into the release branch, or into `main` when the branch is a
/// release branch, are candidates. Candidates whose merge commit is not part
/// of the `from...to` diff are dropped, so `main` PRs only show up when the
/// release branch actually contains them.
pub struct GithubFromToPrLister<C: CommandRunner> {
    client: C,
    repo: String,
    from: Reference,
    to: Reference,
    branch: String,
}

impl<C: CommandRunner> GithubFromToPrLister<C> {
    pub fn new(
        client: C,
        repo: impl Into<String>,
        from: Reference,
        to: Reference,
        branch: impl Into<String>,
    ) -> Self {
        GithubFromToPrLister {
            client,
            repo: repo.into(),
            from,
            to,
            branch: branch.into(),
        }
    }

    fn api<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let out = self.client.run(&["api", endpoint])?;
        Ok(serde_json::from_str(&out)?)
    }

    /// SHAs of every commit in `from...to`
    fn diff_commits(&self) -> Result<HashSet<String>> {
        let mut shas = HashSet::new();
        let mut page = 1;

        loop {
            let endpoint = format!(
                "repos/{}/compare/{}...{}?per_page={}&page={}",
                self.repo,
                self.from.value(),
                self.to.value(),
                COMPARE_PAGE_SIZE,
                page
            );
            let response: CompareResponse = self.api(&endpoint)?;
            let fetched = response.commits.len();
            shas.extend(response.commits.into_iter().map(|c| c.sha));
            debug!(
                "Compare page {}: {} commits ({} of {})",
                page,
                fetched,
                shas.len(),
                response.total_commits
            );

            if fetched < COMPARE_PAGE_SIZE || shas.len() >= response.total_commits {
                break;
            }
            page += 1;
        }

        Ok(shas)
    }

    /// Committer date of the commit a ref points to; annotated tags are dereferenced
    fn commit_date(&self, reference: &Reference) -> Result<String> {
        let git_ref: GitRefResponse =
            self.api(&format!("repos/{}/git/ref/{}", self.repo, reference))?;
        let mut object = git_ref.object;

        while object.kind == "tag" {
            let tag: GitRefResponse =
                self.api(&format!("repos/{}/git/tags/{}", self.repo, object.sha))?;
            object = tag.object;
        }

        if object.kind != "commit" {
            return Err(ReleaseNotesError::collaborator(format!(
                "ref {} points to a {}, expected a commit",
                reference, object.kind
            )));
        }

        let commit: CommitResponse =
            self.api(&format!("repos/{}/commits/{}", self.repo, object.sha))?;
        Ok(commit.commit.committer.date)
    }

    /// Base branches whose merged PRs are candidates
    fn bases(&self) -> Vec<&str> {
        if self.branch == MAIN_BRANCH {
            vec![MAIN_BRANCH]
        } else {
            vec![self.branch.as_str(), MAIN_BRANCH]
        }
    }

    fn merged_prs(&self, base: &str, from_date: &str, to_date: &str) -> Result<Vec<PullRequest>> {
        let search = format!("merged:{}..{}", from_date, to_date);
        let limit = PR_LIST_LIMIT.to_string();
        let out = self.client.run(&[
            "pr",
            "list",
            "--repo",
            self.repo.as_str(),
            "--base",
            base,
            "--state",
            "merged",
            "--search",
            search.as_str(),
            "--limit",
            limit.as_str(),
            "--json",
            PR_JSON_FIELDS,
        ])?;
        let prs: Vec<GhPullRequest> = serde_json::from_str(&out)?;
        if hit_list_limit(prs.len()) {
            warn!(
                "gh pr list returned {} PRs for base {}, the list limit; older PRs may be missing",
                prs.len(),
                base
            );
        }
        Ok(prs.into_iter().map(PullRequest::from).collect())
    }
}

fn hit_list_limit(count: usize) -> bool {
    count >= PR_LIST_LIMIT
}

impl<C: CommandRunner> PrLister for GithubFromToPrLister<C> {
    fn list_prs(&self) -> Result<Vec<PullRequest>> {
        info!("Computing diff between {} and {}", self.from.value(), self.to.value());
        let diff = self.diff_commits()?;

        info!("Reading ref {} for upper limit", self.to);
        let to_date = self.commit_date(&self.to)?;

        info!("Reading ref {} for lower limit", self.from);
        let from_date = self.commit_date(&self.from)?;

        let mut prs = Vec::new();
        for base in self.bases() {
            info!("Listing PRs from branch {} from {} to {}", base, from_date, to_date);
            prs.extend(self.merged_prs(base, &from_date, &to_date)?);
        }
        let candidates = prs.len();

        let mut seen = HashSet::new();
        let mut selected: Vec<PullRequest> = prs
            .into_iter()
            .filter(|pr| diff.contains(&pr.merge_commit_sha))
            .filter(|pr| seen.insert(pr.number))
            .collect();
        selected.sort_by(|a, b| {
            a.merged_at
                .cmp(&b.merged_at)
                .then_with(|| a.number.cmp(&b.number))
        });

        info!(
            "Selected {} of {} merged PRs in range",
            selected.len(),
            candidates
        );
        Ok(selected)
    }
}
