//! Configuration loading from `.codecompass.toml`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Settings under the `[codecompass]` table of `.codecompass.toml`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Folders to exclude from analysis, merged with the built-in defaults.
    pub exclude_folders: Vec<String>,
    /// Default ordering for function listings ("score", "lines", "alpha").
    pub order: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    codecompass: Config,
}

impl Config {
    /// Loads configuration from `.codecompass.toml` in the current
    /// directory, falling back to defaults when absent.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from_path(Path::new("."))
    }

    /// Loads configuration from `.codecompass.toml` in `root`.
    ///
    /// A missing file yields the defaults. A malformed file also falls
    /// back to defaults after warning on stderr, so a broken config never
    /// blocks an analysis run.
    #[must_use]
    pub fn load_from_path(root: &Path) -> Self {
        let candidate = root.join(".codecompass.toml");
        let Ok(raw) = fs::read_to_string(&candidate) else {
            return Self::default();
        };
        match toml::from_str::<ConfigFile>(&raw) {
            Ok(file) => file.codecompass,
            Err(err) => {
                eprintln!("Warning: ignoring malformed {}: {err}", candidate.display());
                Self::default()
            }
        }
    }
}
