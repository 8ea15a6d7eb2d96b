use thiserror::Error;

/// Unified error type for release-notes operations
#[derive(Error, Debug)]
pub enum ReleaseNotesError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid reference: {0}")]
    Reference(String),

    #[error("invalid --release, is not a semver: '{input}': {source}")]
    Version {
        input: String,
        #[source]
        source: semver::Error,
    },

    #[error("{name} not available. {hint}")]
    DependencyMissing { name: String, hint: String },

    #[error("GitHub operation failed: {0}")]
    Collaborator(String),

    #[error("Malformed JSON from gh: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings file error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-notes
pub type Result<T> = std::result::Result<T, ReleaseNotesError>;

impl ReleaseNotesError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseNotesError::Config(msg.into())
    }

    /// Create a reference format error with context
    pub fn reference(msg: impl Into<String>) -> Self {
        ReleaseNotesError::Reference(msg.into())
    }

    /// Create a version parse error carrying the rejected input
    pub fn version(input: impl Into<String>, source: semver::Error) -> Self {
        ReleaseNotesError::Version {
            input: input.into(),
            source,
        }
    }

    /// Create an error for an executable missing from the search path
    pub fn dependency_missing(name: impl Into<String>, hint: impl Into<String>) -> Self {
        ReleaseNotesError::DependencyMissing {
            name: name.into(),
            hint: hint.into(),
        }
    }

    /// Create an error for a failed call to an external collaborator
    pub fn collaborator(msg: impl Into<String>) -> Self {
        ReleaseNotesError::Collaborator(msg.into())
    }
}
