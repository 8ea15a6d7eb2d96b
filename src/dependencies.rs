//! Host executable checks
//!
//! The tool shells out to the GitHub CLI for every forge call, so it must be
//! on the search path before any work starts.

use crate::error::{ReleaseNotesError, Result};
use log::debug;

/// Executable every run needs
pub const GH_EXECUTABLE: &str = "gh";

/// Answers whether an executable can be found on the host
pub trait ExecutableResolver {
    fn resolve(&self, name: &str) -> bool;
}

/// Looks executables up on `PATH` with the `which` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchPathResolver;

impl ExecutableResolver for SearchPathResolver {
    fn resolve(&self, name: &str) -> bool {
        match which::which(name) {
            Ok(path) => {
                debug!("Found {} at {}", name, path.display());
                true
            }
            Err(e) => {
                debug!("{} not found on PATH: {}", name, e);
                false
            }
        }
    }
}

/// Fail early when the GitHub CLI is missing
pub fn ensure_installed_dependencies(resolver: &dyn ExecutableResolver) -> Result<()> {
    if !resolver.resolve(GH_EXECUTABLE) {
        return Err(ReleaseNotesError::dependency_missing(
            "gh GitHub CLI",
            "GitHub CLI is required to be present in the PATH. \
             Refer to https://cli.github.com/ for installation",
        ));
    }

    Ok(())
}
