//! Domain logic - pure release rules independent of GitHub access

pub mod branch;
pub mod note;
pub mod pull_request;
pub mod reference;
pub mod version;

pub use branch::{default_branch_for_version, release_branch_for_version, MAIN_BRANCH};
pub use note::{NoteKind, ReleaseNote};
pub use pull_request::PullRequest;
pub use reference::{validate_ref, Reference};
pub use version::{parse_tolerant, pre_release_identifiers, PreReleaseIdentifier};
