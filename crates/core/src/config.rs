//! Optional JSON room profile.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RoomError;
use crate::room::{DEFAULT_COLS, DEFAULT_ROWS, KeyAddressing};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RoomConfig {
    pub rows: usize,
    pub cols: usize,
    pub addressing: KeyAddressing,
    /// Fixed seed; `None` draws a fresh runtime seed per generator.
    pub seed: Option<u64>,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self { rows: DEFAULT_ROWS, cols: DEFAULT_COLS, addressing: KeyAddressing::Cell, seed: None }
    }
}

impl RoomConfig {
    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, RoomError> {
        let config_error =
            |message: String| RoomError::Config { path: path.to_path_buf(), message };
        let content = fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| config_error(e.to_string()))
    }
}
