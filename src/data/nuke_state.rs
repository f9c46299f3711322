use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Whether the nuke functionality is enabled on the server.
///
/// This crate only persists the flag; the destructive functionality that reads
/// it lives elsewhere.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NukeState {
    pub nuking_enabled: bool,
}

/// File-backed storage for the nuking feature flag.
pub struct NukeStateRepository {
    path: PathBuf,
}

impl NukeStateRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Loads the flag, initializing the file with the disabled state if it
    /// does not exist yet.
    pub fn load(&self) -> Result<NukeState, AppError> {
        if !self.path.exists() {
            let state = NukeState::default();
            self.save(&state)?;
            return Ok(state);
        }

        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self, state: &NukeState) -> Result<(), AppError> {
        fs::write(&self.path, serde_json::to_string_pretty(state)?)?;
        Ok(())
    }
}
