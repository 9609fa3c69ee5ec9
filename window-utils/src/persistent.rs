//! Remembers where the user left the window between sessions. Positions are
//! stored as small json files under the system temp dir, keyed by window
//! title; losing them (temp dir cleaned, unwritable disk) only costs the
//! window placement, so every failure here is a log line, not an error.

use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

fn file_path(title: &str) -> PathBuf {
    // Titles are hex-encoded so arbitrary text can be used as a file name
    // without worrying about slashes or other special characters.
    std::env::temp_dir()
        .join("wavescope")
        .join(format!("window-position-{}.json", hex::encode(title)))
}

impl WindowPosition {
    fn save(self, title: &str) -> anyhow::Result<()> {
        let path = file_path(title);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_json::to_string(&self)?)?;
        Ok(())
    }

    /// Like `save` but logs a warning on failure rather than returning an
    /// error value.
    pub fn save_(self, title: &str) {
        if let Err(e) = self.save(title) {
            log::warn!("Failed to save window position for {}: {}", title, e);
        }
    }

    fn load(title: &str) -> anyhow::Result<Self> {
        let json_string = fs::read_to_string(file_path(title))?;
        Ok(serde_json::from_str(json_string.as_str())?)
    }

    /// Returns `None` when no position has been saved yet (or it can't be
    /// read back).
    pub fn load_(title: &str) -> Option<Self> {
        match Self::load(title) {
            Ok(position) => Some(position),
            Err(e) => {
                log::debug!(
                    "No saved window position for {}: {}",
                    title,
                    e
                );
                None
            }
        }
    }
}
