use super::version::{pre_release_identifiers, PreReleaseIdentifier};
use semver::Version;

/// Branch that new minor work lands on before a release branch is cut
pub const MAIN_BRANCH: &str = "main";

/// Release branch name for a version, e.g. `release-1.6`
pub fn release_branch_for_version(version: &Version) -> String {
    format!("release-{}.{}", version.major, version.minor)
}

/// Pick the branch a release is cut from.
///
/// Patch releases and stable minor releases come from the release branch.
/// The release branch is cut together with the first RC, so `rc.N` with
/// `N >= 1` also uses it. Every other pre-release (betas, `rc.0`, a bare `rc`)
/// is cut from main.
pub fn default_branch_for_version(version: &Version) -> String {
    if version.patch != 0 {
        return release_branch_for_version(version);
    }

    let pre = pre_release_identifiers(version);
    match pre.as_slice() {
        [] => release_branch_for_version(version),
        [PreReleaseIdentifier::Alpha(label), PreReleaseIdentifier::Numeric(n)]
            if label == "rc" && *n >= 1 =>
        {
            release_branch_for_version(version)
        }
        _ => MAIN_BRANCH.to_string(),
    }
}
