pub mod cli;
pub mod config;
pub mod dependencies;
pub mod domain;
pub mod error;
pub mod github;
pub mod notes;

pub use error::{ReleaseNotesError, Result};
