use crate::domain::{default_branch_for_version, parse_tolerant, validate_ref};
use crate::error::{ReleaseNotesError, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Repository used when neither the command line nor the settings file names one
pub const DEFAULT_REPOSITORY: &str = "kubernetes-sigs/cluster-api";

/// File name looked up in the working directory and the user config directory
pub const SETTINGS_FILE_NAME: &str = "release-notes.toml";

/// Optional settings read from `release-notes.toml`.
///
/// Holds values that rarely change between runs, such as the repository and
/// how area labels are displayed.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub repository: Option<String>,

    /// Maps a label such as `area/machinepool` to its display name
    #[serde(default)]
    pub area_labels: HashMap<String, String>,
}

/// Loads settings from file or returns defaults.
///
/// Attempts to load settings in the following order:
/// 1. Custom path provided as parameter
/// 2. `release-notes.toml` in current directory
/// 3. `release-notes.toml` in user config directory
/// 4. Default settings if no file found
///
/// # Arguments
/// * `settings_path` - Optional path to custom settings file
///
/// # Returns
/// * `Ok(Settings)` - Loaded or default settings
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_settings(settings_path: Option<&str>) -> Result<Settings> {
    let settings_str = if let Some(path) = settings_path {
        fs::read_to_string(path)?
    } else if Path::new(SETTINGS_FILE_NAME).exists() {
        fs::read_to_string(SETTINGS_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let settings_path = config_dir.join(SETTINGS_FILE_NAME);
        if settings_path.exists() {
            fs::read_to_string(settings_path)?
        } else {
            return Ok(Settings::default());
        }
    } else {
        return Ok(Settings::default());
    };

    let settings: Settings = toml::from_str(&settings_str)?;
    Ok(settings)
}

/// Everything a notes run needs, built once from the command line.
///
/// Empty strings are treated the same as unset values. After
/// [`NotesConfig::compute_defaults`] succeeds, `from_ref`, `to_ref` and
/// `branch` are all set.
#[derive(Debug, Clone, PartialEq)]
pub struct NotesConfig {
    pub repo: String,
    pub from_ref: Option<String>,
    pub to_ref: Option<String>,
    pub new_tag: Option<String>,
    pub branch: Option<String>,
    pub prefix_area_label: bool,
    pub pre_release_version: bool,
    pub deprecation: bool,
    pub add_kubernetes_version_support: bool,
    pub area_labels: HashMap<String, String>,
}

impl Default for NotesConfig {
    fn default() -> Self {
        NotesConfig {
            repo: DEFAULT_REPOSITORY.to_string(),
            from_ref: None,
            to_ref: None,
            new_tag: None,
            branch: None,
            prefix_area_label: true,
            pre_release_version: false,
            deprecation: true,
            add_kubernetes_version_support: true,
            area_labels: HashMap::new(),
        }
    }
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

impl NotesConfig {
    /// Apply file settings for anything the command line left out
    pub fn with_settings(mut self, repository_flag: Option<String>, settings: Settings) -> Self {
        self.repo = repository_flag
            .filter(|r| !r.is_empty())
            .or(settings.repository.filter(|r| !r.is_empty()))
            .unwrap_or_else(|| DEFAULT_REPOSITORY.to_string());
        self.area_labels = settings.area_labels;
        self
    }

    pub fn from_ref(&self) -> &str {
        self.from_ref.as_deref().unwrap_or_default()
    }

    pub fn to_ref(&self) -> &str {
        self.to_ref.as_deref().unwrap_or_default()
    }

    pub fn branch(&self) -> &str {
        self.branch.as_deref().unwrap_or_default()
    }

    /// Reject configurations that cannot be completed.
    ///
    /// Without `--release`, both `--from` and `--branch` must be given. Any
    /// given ref must be well formed.
    pub fn validate(&self) -> Result<()> {
        if !is_set(&self.from_ref) && !is_set(&self.new_tag) {
            return Err(ReleaseNotesError::config(
                "at least one of --from or --release need to be set",
            ));
        }

        if !is_set(&self.branch) && !is_set(&self.new_tag) {
            return Err(ReleaseNotesError::config(
                "at least one of --branch or --release need to be set",
            ));
        }

        if is_set(&self.from_ref) {
            validate_ref(self.from_ref())?;
        }

        if is_set(&self.to_ref) {
            validate_ref(self.to_ref())?;
        }

        Ok(())
    }

    /// Fill in `from_ref`, `branch` and `to_ref` from the release tag.
    ///
    /// Does nothing when all three are already set.
    pub fn compute_defaults(&mut self) -> Result<()> {
        if is_set(&self.from_ref) && is_set(&self.branch) && is_set(&self.to_ref) {
            return Ok(());
        }

        let raw_tag = self.new_tag.as_deref().unwrap_or_default();
        let new_tag = parse_tolerant(raw_tag)?;
        debug!("Release {} parsed as {}", raw_tag, new_tag);

        if !is_set(&self.from_ref) {
            let from = if new_tag.patch == 0 {
                // New minor: start from the previous minor's first release
                let previous_minor = new_tag.minor.checked_sub(1).ok_or_else(|| {
                    ReleaseNotesError::config(format!(
                        "cannot compute --from for {}: there is no previous minor, \
                         set --from explicitly",
                        raw_tag
                    ))
                })?;
                format!("tags/v{}.{}.0", new_tag.major, previous_minor)
            } else {
                format!("tags/v{}.{}.{}", new_tag.major, new_tag.minor, new_tag.patch - 1)
            };
            info!("Using computed --from {}", from);
            self.from_ref = Some(from);
        }

        if !is_set(&self.branch) {
            let branch = default_branch_for_version(&new_tag);
            info!("Using computed --branch {}", branch);
            self.branch = Some(branch);
        }

        if !is_set(&self.to_ref) {
            let to = format!("heads/{}", self.branch());
            info!("Using computed --to {}", to);
            self.to_ref = Some(to);
        }

        Ok(())
    }
}
