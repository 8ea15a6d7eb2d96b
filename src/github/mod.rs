//! GitHub access abstraction layer
//!
//! This module provides a trait-based abstraction over listing merged pull
//! requests, allowing the notes pipeline to run against GitHub through the
//! `gh` CLI or against canned data in tests.
//!
//! # Overview
//!
//! - [PrLister]: lists the merged pull requests in a ref range
//! - [CommandRunner]: runs one `gh` invocation and returns its stdout
//!
//! The concrete implementations include:
//!
//! - [lister::GithubFromToPrLister]: computes the range through `gh api` and `gh pr list`
//! - [cli::GhCli]: spawns the real `gh` executable
//! - [mock::MockPrLister]: returns a fixed list for testing

pub mod cli;
pub mod lister;
pub mod mock;

pub use cli::GhCli;
pub use lister::GithubFromToPrLister;
pub use mock::MockPrLister;

use crate::domain::PullRequest;
use crate::error::Result;

/// Source of the merged pull requests that make up a release
///
/// ## Error Handling
///
/// Any failure (network, authentication, rate limits, malformed output) is
/// returned as a [crate::error::ReleaseNotesError] and ends the run.
pub trait PrLister {
    /// Merged pull requests in the configured range, oldest merge first
    fn list_prs(&self) -> Result<Vec<PullRequest>>;
}

/// Runs the GitHub CLI with the given arguments
///
/// Implementations return stdout on a zero exit status and an error otherwise.
pub trait CommandRunner {
    fn run(&self, args: &[&str]) -> Result<String>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, args: &[&str]) -> Result<String> {
        (**self).run(args)
    }
}
