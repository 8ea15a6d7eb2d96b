use crate::dependencies::GH_EXECUTABLE;
use crate::error::{ReleaseNotesError, Result};
use crate::github::CommandRunner;
use log::debug;
use std::process::Command;

/// Runs the `gh` executable found on the search path
#[derive(Debug, Default, Clone, Copy)]
pub struct GhCli;

impl CommandRunner for GhCli {
    fn run(&self, args: &[&str]) -> Result<String> {
        debug!("Running {} {}", GH_EXECUTABLE, args.join(" "));

        let output = Command::new(GH_EXECUTABLE).args(args).output().map_err(|e| {
            ReleaseNotesError::collaborator(format!("Failed to run {}: {}", GH_EXECUTABLE, e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ReleaseNotesError::collaborator(format!(
                "{} {} failed with exit code {}: {}",
                GH_EXECUTABLE,
                args.join(" "),
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
