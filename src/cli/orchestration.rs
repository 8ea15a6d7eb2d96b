//! Main workflow orchestration logic
//!
//! Keeps the notes workflow apart from CLI argument parsing so it can be
//! called programmatically, and with stub collaborators in tests.

use crate::config::NotesConfig;
use crate::dependencies::{ensure_installed_dependencies, ExecutableResolver, SearchPathResolver};
use crate::domain::Reference;
use crate::error::Result;
use crate::github::{GhCli, GithubFromToPrLister, PrLister};
use crate::notes::{NotesGenerator, PrEntryProcessor, ReleaseNotesPrinter};
use log::info;

/// One release-notes run
pub struct NotesCmd<R: ExecutableResolver> {
    config: NotesConfig,
    resolver: R,
}

impl NotesCmd<SearchPathResolver> {
    /// Create a run that looks executables up on `PATH`
    pub fn new(config: NotesConfig) -> Self {
        NotesCmd::with_resolver(config, SearchPathResolver)
    }
}

impl<R: ExecutableResolver> NotesCmd<R> {
    pub fn with_resolver(config: NotesConfig, resolver: R) -> Self {
        NotesCmd { config, resolver }
    }

    /// Run against GitHub through the `gh` CLI
    pub fn run(self) -> Result<String> {
        self.run_with(|repo, from, to, branch| {
            GithubFromToPrLister::new(GhCli, repo, from, to, branch)
        })
    }

    /// Main notes workflow
    ///
    /// 1. Validate the configuration
    /// 2. Compute missing from/branch/to values from the release
    /// 3. Check the GitHub CLI is installed
    /// 4. Build the lister with `make_lister` and generate the document
    ///
    /// # Arguments
    ///
    /// * `make_lister` - Builds the lister from (repository, from, to, branch)
    ///
    /// # Returns
    ///
    /// The rendered document, or the first error hit along the way
    pub fn run_with<L, F>(mut self, make_lister: F) -> Result<String>
    where
        L: PrLister,
        F: FnOnce(&str, Reference, Reference, &str) -> L,
    {
        self.config.validate()?;
        self.config.compute_defaults()?;
        ensure_installed_dependencies(&self.resolver)?;

        let config = self.config;
        let from = Reference::parse(config.from_ref())?;
        let to = Reference::parse(config.to_ref())?;
        info!(
            "Generating notes for {} from {} to {} on branch {}",
            config.repo,
            from,
            to,
            config.branch()
        );

        let mut printer = ReleaseNotesPrinter::new(config.repo.as_str(), from.value());
        printer.is_pre_release = config.pre_release_version;
        printer.print_deprecation = config.deprecation;
        printer.print_kubernetes_support = config.add_kubernetes_version_support;

        let lister = make_lister(config.repo.as_str(), from, to, config.branch());
        let processor = PrEntryProcessor::new(config.prefix_area_label, config.area_labels.clone());

        NotesGenerator::new(lister, processor, printer).run()
    }
}
