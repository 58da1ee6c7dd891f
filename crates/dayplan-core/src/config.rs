//! Preference loading for schedule defaults.
//!
//! Preferences are a JSON object with the fields of
//! [`GenerateSchedule`]; any field left out keeps its default.
//!
//! ```json
//! { "start": "08:30", "end": "16:30", "slot_length": 50, "lunch_enabled": false }
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    error::{Result, ResultExt, ScheduleError},
    params::GenerateSchedule,
};

/// File name looked up in the XDG config directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Loaded schedule defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    /// Values used for any generate field the caller leaves unset
    pub defaults: GenerateSchedule,
    /// File the preferences were read from, `None` for built-in defaults
    pub source: Option<PathBuf>,
}

impl Preferences {
    /// Reads preferences from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::FileSystem` if the file cannot be read and
    /// `ScheduleError::Configuration` if it is not valid preferences JSON.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| ScheduleError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;

        let defaults = serde_json::from_str::<GenerateSchedule>(&contents)
            .with_context_lazy(|| format!("Invalid preferences file {}", path.display()))?
            .or_default_slots();

        // Catch bad clock times at load time rather than on first use
        defaults
            .validate()
            .with_context_lazy(|| format!("Invalid preferences file {}", path.display()))?;

        debug!("loaded preferences from {}", path.display());
        Ok(Self {
            defaults,
            source: Some(path.to_path_buf()),
        })
    }
}

/// Builder for locating and loading [`Preferences`].
#[derive(Debug, Clone)]
pub struct PreferencesBuilder {
    config_path: Option<PathBuf>,
}

impl PreferencesBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Sets a custom preferences file path, which must exist.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_CONFIG_HOME/dayplan/preferences.json` or
    /// `~/.config/dayplan/preferences.json`, falling back to built-in
    /// defaults when no such file exists.
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Loads the preferences.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::FileSystem` if an explicit path cannot be read
    /// Returns `ScheduleError::Configuration` if the file is malformed
    pub fn load(self) -> Result<Preferences> {
        let path = match self.config_path {
            Some(path) => path,
            None => match Self::default_config_path() {
                Some(path) => path,
                None => {
                    debug!("no preferences file found, using built-in defaults");
                    return Ok(Preferences::default());
                }
            },
        };

        Preferences::from_file(&path)
    }

    /// Returns the existing preferences file under the XDG config directories.
    fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("dayplan").find_config_file(PREFERENCES_FILE)
    }
}

impl Default for PreferencesBuilder {
    fn default() -> Self {
        Self::new()
    }
}
