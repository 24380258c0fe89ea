//! Destination folder layout

use crate::model::TrackRecord;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Folder that receives the copies of one playlist's tracks
#[derive(Debug, Clone)]
pub struct DestinationFolder {
    root: PathBuf,
}

impl DestinationFolder {
    /// Folder named `playlist_name` under `output_root`
    pub fn new(output_root: &Path, playlist_name: &str) -> Self {
        Self {
            root: output_root.join(playlist_name),
        }
    }

    /// Create the folder if it does not exist yet
    ///
    /// An existing folder is reused; files already in it are overwritten by
    /// copies with the same name.
    pub fn init(&self) -> Result<()> {
        if self.root.is_dir() {
            log::info!("Reusing destination folder {:?}", self.root);
            return Ok(());
        }

        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create destination folder {:?}", self.root))?;
        log::info!("Created destination folder {:?}", self.root);
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Path the copy of `track` is written to
    pub fn track_path(&self, track: &TrackRecord) -> PathBuf {
        self.root.join(track.destination_file_name())
    }
}
