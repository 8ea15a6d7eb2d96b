use crate::error::{ReleaseNotesError, Result};
use std::fmt;
use std::str::FromStr;

const BRANCH_PREFIX: &str = "heads";
const TAG_PREFIX: &str = "tags";

/// A git reference as accepted on the command line: `heads/<branch>` or `tags/<tag>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    Branch(String),
    Tag(String),
}

impl Reference {
    /// Parse `heads/<name>` or `tags/<name>`.
    ///
    /// Only the first `/` separates the prefix, so branch names such as
    /// `heads/feature/foo` keep their inner slashes.
    pub fn parse(text: &str) -> Result<Self> {
        let (prefix, name) = text.split_once('/').ok_or_else(|| {
            ReleaseNotesError::reference(format!(
                "ref {:?} must be formatted as heads/<branch name> or tags/<tag name>",
                text
            ))
        })?;

        if name.is_empty() {
            return Err(ReleaseNotesError::reference(format!(
                "ref {:?} is missing a name after the prefix",
                text
            )));
        }

        if name.split('/').any(str::is_empty) || name.contains(char::is_whitespace) {
            return Err(ReleaseNotesError::reference(format!(
                "ref {:?} has an invalid name {:?}",
                text, name
            )));
        }

        match prefix {
            BRANCH_PREFIX => Ok(Reference::Branch(name.to_string())),
            TAG_PREFIX => Ok(Reference::Tag(name.to_string())),
            other => Err(ReleaseNotesError::reference(format!(
                "ref {:?} has unknown prefix {:?}, expected heads or tags",
                text, other
            ))),
        }
    }

    /// The bare branch or tag name, without the prefix
    pub fn value(&self) -> &str {
        match self {
            Reference::Branch(name) | Reference::Tag(name) => name,
        }
    }

    pub fn is_tag(&self) -> bool {
        matches!(self, Reference::Tag(_))
    }
}

impl FromStr for Reference {
    type Err = ReleaseNotesError;

    fn from_str(s: &str) -> Result<Self> {
        Reference::parse(s)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Branch(name) => write!(f, "{}/{}", BRANCH_PREFIX, name),
            Reference::Tag(name) => write!(f, "{}/{}", TAG_PREFIX, name),
        }
    }
}

/// Check that a user supplied ref string is well formed
pub fn validate_ref(text: &str) -> Result<()> {
    Reference::parse(text).map(|_| ())
}
