use release_notes::domain::Reference;
use release_notes::error::{ReleaseNotesError, Result};
use release_notes::github::{CommandRunner, GithubFromToPrLister, PrLister};
use std::cell::RefCell;
use std::collections::HashMap;

/// Answers `gh` calls from a table keyed by the joined arguments
#[derive(Default)]
struct CannedGh {
    responses: HashMap<String, String>,
    calls: RefCell<Vec<String>>,
}

impl CannedGh {
    fn on(mut self, args: &str, body: &str) -> Self {
        self.responses.insert(args.to_string(), body.to_string());
        self
    }
}

impl CommandRunner for CannedGh {
    fn run(&self, args: &[&str]) -> Result<String> {
        let key = args.join(" ");
        self.calls.borrow_mut().push(key.clone());
        self.responses
            .get(&key)
            .cloned()
            .ok_or_else(|| ReleaseNotesError::collaborator(format!("unexpected call: gh {}", key)))
    }
}

const REPO: &str = "acme/widgets";
const PR_LIST: &str = "pr list --repo acme/widgets --base release-1.6 --state merged \
--search merged:2023-01-01T00:00:00Z..2023-02-01T00:00:00Z --limit 1000 \
--json number,title,labels,mergeCommit,mergedAt";
const PR_LIST_MAIN: &str = "pr list --repo acme/widgets --base main --state merged \
--search merged:2023-01-01T00:00:00Z..2023-02-01T00:00:00Z --limit 1000 \
--json number,title,labels,mergeCommit,mergedAt";

fn pr_json(number: u64, title: &str, oid: &str, merged_at: &str) -> String {
    format!(
        "{{\"number\": {}, \"title\": \"{}\", \"labels\": [], \
         \"mergeCommit\": {{\"oid\": \"{}\"}}, \"mergedAt\": \"{}\"}}",
        number, title, oid, merged_at
    )
}

fn base_runner() -> CannedGh {
    CannedGh::default()
        .on(
            "api repos/acme/widgets/compare/v1.5.0...release-1.6?per_page=100&page=1",
            r#"{"total_commits": 3, "commits": [{"sha": "c1"}, {"sha": "c2"}, {"sha": "c3"}]}"#,
        )
        .on(
            "api repos/acme/widgets/git/ref/heads/release-1.6",
            r#"{"ref": "refs/heads/release-1.6", "object": {"sha": "c3", "type": "commit"}}"#,
        )
        .on(
            "api repos/acme/widgets/commits/c3",
            r#"{"sha": "c3", "commit": {"committer": {"date": "2023-02-01T00:00:00Z"}}}"#,
        )
        .on(
            "api repos/acme/widgets/git/ref/tags/v1.5.0",
            r#"{"object": {"sha": "t1", "type": "tag"}}"#,
        )
        .on(
            "api repos/acme/widgets/git/tags/t1",
            r#"{"tag": "v1.5.0", "object": {"sha": "c0", "type": "commit"}}"#,
        )
        .on(
            "api repos/acme/widgets/commits/c0",
            r#"{"commit": {"committer": {"date": "2023-01-01T00:00:00Z"}}}"#,
        )
        .on(PR_LIST_MAIN, "[]")
}

fn lister(runner: &CannedGh) -> GithubFromToPrLister<&CannedGh> {
    GithubFromToPrLister::new(
        runner,
        REPO,
        Reference::Tag("v1.5.0".to_string()),
        Reference::Branch("release-1.6".to_string()),
        "release-1.6",
    )
}

#[test]
fn test_lists_prs_in_diff_ordered_by_merge_time() {
    let runner = base_runner().on(
        PR_LIST,
        r#"[
            {"number": 30, "title": "🐛 Late fix", "labels": [],
             "mergeCommit": {"oid": "c3"}, "mergedAt": "2023-01-20T00:00:00Z"},
            {"number": 10, "title": "✨ Early feature", "labels": [{"name": "area/api"}],
             "mergeCommit": {"oid": "c1"}, "mergedAt": "2023-01-05T00:00:00Z"},
            {"number": 20, "title": "Merged elsewhere", "labels": [],
             "mergeCommit": {"oid": "zz"}, "mergedAt": "2023-01-10T00:00:00Z"}
        ]"#,
    );

    let prs = lister(&runner).list_prs().unwrap();
    let numbers: Vec<u64> = prs.iter().map(|p| p.number).collect();
    assert_eq!(numbers, vec![10, 30]);
    assert_eq!(prs[0].labels, vec!["area/api".to_string()]);
}

#[test]
fn test_annotated_tag_is_dereferenced() {
    let runner = base_runner().on(PR_LIST, "[]");

    lister(&runner).list_prs().unwrap();
    let calls = runner.calls.borrow();
    assert!(calls.contains(&"api repos/acme/widgets/git/tags/t1".to_string()));
    assert!(calls.contains(&"api repos/acme/widgets/commits/c0".to_string()));
}

#[test]
fn test_compare_is_paginated() {
    let page_one: Vec<String> = (0..100).map(|i| format!(r#"{{"sha": "p{}"}}"#, i)).collect();
    let page_one = format!(
        r#"{{"total_commits": 101, "commits": [{}]}}"#,
        page_one.join(",")
    );

    let runner = base_runner()
        .on(
            "api repos/acme/widgets/compare/v1.5.0...release-1.6?per_page=100&page=1",
            &page_one,
        )
        .on(
            "api repos/acme/widgets/compare/v1.5.0...release-1.6?per_page=100&page=2",
            r#"{"total_commits": 101, "commits": [{"sha": "last"}]}"#,
        )
        .on(
            PR_LIST,
            &format!("[{}]", pr_json(5, "t", "last", "2023-01-02T00:00:00Z")),
        );

    let prs = lister(&runner).list_prs().unwrap();
    assert_eq!(prs.len(), 1);
    assert_eq!(prs[0].number, 5);
}

#[test]
fn test_gh_failure_is_propagated() {
    let runner = CannedGh::default();
    let err = lister(&runner).list_prs().unwrap_err();
    assert!(matches!(err, ReleaseNotesError::Collaborator(_)));
    assert!(err.to_string().contains("compare/v1.5.0...release-1.6"));
}

#[test]
fn test_malformed_json_is_an_error() {
    let runner = base_runner().on(PR_LIST, "not json");
    let err = lister(&runner).list_prs().unwrap_err();
    assert!(matches!(err, ReleaseNotesError::Json(_)));
}

#[test]
fn test_ref_to_non_commit_is_rejected() {
    let runner = base_runner().on(
        "api repos/acme/widgets/git/ref/heads/release-1.6",
        r#"{"object": {"sha": "b1", "type": "blob"}}"#,
    );
    let err = lister(&runner).list_prs().unwrap_err();
    assert!(err.to_string().contains("expected a commit"));
}

#[test]
fn test_main_prs_in_diff_are_included() {
    let release = format!(
        "[{}, {}]",
        pr_json(41, "🐛 Backport fix", "c3", "2023-01-20T00:00:00Z"),
        pr_json(42, "Shared", "c2", "2023-01-15T00:00:00Z")
    );
    let main = format!(
        "[{}, {}, {}]",
        pr_json(40, "✨ Landed on main", "c1", "2023-01-03T00:00:00Z"),
        pr_json(42, "Shared", "c2", "2023-01-15T00:00:00Z"),
        pr_json(43, "Not in this release", "m9", "2023-01-25T00:00:00Z")
    );
    let runner = base_runner().on(PR_LIST, &release).on(PR_LIST_MAIN, &main);

    let prs = lister(&runner).list_prs().unwrap();
    let numbers: Vec<u64> = prs.iter().map(|p| p.number).collect();
    assert_eq!(numbers, vec![40, 42, 41]);
}

#[test]
fn test_main_branch_is_queried_once() {
    let runner = base_runner()
        .on(
            "api repos/acme/widgets/compare/v1.5.0...main?per_page=100&page=1",
            r#"{"total_commits": 1, "commits": [{"sha": "c3"}]}"#,
        )
        .on(
            "api repos/acme/widgets/git/ref/heads/main",
            r#"{"object": {"sha": "c3", "type": "commit"}}"#,
        );
    let lister = GithubFromToPrLister::new(
        &runner,
        REPO,
        Reference::Tag("v1.5.0".to_string()),
        Reference::Branch("main".to_string()),
        "main",
    );

    lister.list_prs().unwrap();
    let calls = runner.calls.borrow();
    let lists = calls.iter().filter(|c| c.starts_with("pr list")).count();
    assert_eq!(lists, 1);
    assert!(calls.contains(&PR_LIST_MAIN.to_string()));
}

#[test]
fn test_full_page_at_list_limit_still_returns_prs() {
    let entries: Vec<String> = (1..=1000)
        .map(|n| pr_json(n, "t", if n == 1 { "c1" } else { "old" }, "2023-01-02T00:00:00Z"))
        .collect();
    let runner = base_runner().on(PR_LIST, &format!("[{}]", entries.join(",")));

    let prs = lister(&runner).list_prs().unwrap();
    assert_eq!(prs.len(), 1);
    assert_eq!(prs[0].number, 1);
}
