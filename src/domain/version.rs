//! Semantic version handling for release tags
//!
//! Release tags arrive in loose forms such as `v1.6.0-rc.1`, ` 1.6 ` or
//! `v1.06.0`, so parsing trims whitespace, drops a leading `v`, strips leading
//! zeros and pads missing components before handing the text to the `semver`
//! crate. A short version such as `1.6` cannot carry a pre-release or build
//! suffix.

use crate::error::{ReleaseNotesError, Result};
use semver::Version;
use std::fmt;

/// One dot-separated piece of a pre-release, e.g. `rc` or `1` in `rc.1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreReleaseIdentifier {
    Alpha(String),
    Numeric(u64),
}

impl PreReleaseIdentifier {
    fn parse(part: &str) -> Self {
        if !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = part.parse::<u64>() {
                return PreReleaseIdentifier::Numeric(n);
            }
        }
        PreReleaseIdentifier::Alpha(part.to_string())
    }
}

impl fmt::Display for PreReleaseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreReleaseIdentifier::Alpha(s) => write!(f, "{}", s),
            PreReleaseIdentifier::Numeric(n) => write!(f, "{}", n),
        }
    }
}

/// Parse a release tag, tolerating a leading `v` and missing minor/patch
pub fn parse_tolerant(input: &str) -> Result<Version> {
    let trimmed = input.trim();
    let clean = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);

    // Split off the pre-release/build suffix so only the numeric core is padded
    let suffix_start = clean.find(|c: char| c == '-' || c == '+').unwrap_or(clean.len());
    let (core, suffix) = clean.split_at(suffix_start);

    let mut parts: Vec<&str> = core.split('.').map(strip_leading_zeros).collect();
    if !core.is_empty() && parts.len() < 3 {
        if !suffix.is_empty() {
            // Report the unpadded text as semver sees it
            if let Err(e) = Version::parse(clean) {
                return Err(ReleaseNotesError::version(input, e));
            }
        }
        parts.resize(3, "0");
    }
    let normalized = format!("{}{}", parts.join("."), suffix);

    Version::parse(&normalized).map_err(|e| ReleaseNotesError::version(input, e))
}

fn strip_leading_zeros(part: &str) -> &str {
    if part.len() > 1 && part.bytes().all(|b| b.is_ascii_digit()) {
        let stripped = part.trim_start_matches('0');
        if stripped.is_empty() {
            "0"
        } else {
            stripped
        }
    } else {
        part
    }
}

/// Pre-release identifiers of a version in order; empty for stable releases
pub fn pre_release_identifiers(version: &Version) -> Vec<PreReleaseIdentifier> {
    if version.pre.is_empty() {
        return Vec::new();
    }
    version
        .pre
        .as_str()
        .split('.')
        .map(PreReleaseIdentifier::parse)
        .collect()
}
