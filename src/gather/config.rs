//! Gather configuration

use crate::playlist::UrlDecoding;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Directory that relative track locations are resolved against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceBase {
    /// Directory holding the running executable
    ProgramDir,

    /// Directory holding the playlist file
    PlaylistDir,

    /// An explicit directory
    Explicit(PathBuf),
}

impl SourceBase {
    /// Root for relative locations of the playlist at `playlist_path`
    pub fn root_for(&self, playlist_path: &Path) -> Result<PathBuf> {
        match self {
            SourceBase::ProgramDir => {
                let exe = std::env::current_exe()
                    .context("Failed to locate the running executable")?;
                exe.parent()
                    .map(Path::to_path_buf)
                    .with_context(|| format!("Executable {:?} has no parent directory", exe))
            }
            SourceBase::PlaylistDir => Ok(playlist_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default()),
            SourceBase::Explicit(dir) => Ok(dir.clone()),
        }
    }
}

/// Configuration for gathering a playlist into a folder
#[derive(Debug, Clone)]
pub struct GatherConfig {
    /// Directory searched for the playlist file
    pub playlist_dir: PathBuf,

    /// Parent of the destination folder
    pub output_root: PathBuf,

    /// Anchor for relative track locations
    pub source_base: SourceBase,

    /// Percent-decoding applied to XSPF locations
    pub url_decoding: UrlDecoding,

    /// Check every copy against its source after the run
    pub verify: bool,
}

impl GatherConfig {
    /// Create a configuration that searches and writes in `playlist_dir`
    pub fn new(playlist_dir: PathBuf) -> Self {
        Self {
            output_root: playlist_dir.clone(),
            playlist_dir,
            source_base: SourceBase::ProgramDir,
            url_decoding: UrlDecoding::SpacesOnly,
            verify: false,
        }
    }

    /// Set where the destination folder is created
    pub fn with_output_root(mut self, output_root: PathBuf) -> Self {
        self.output_root = output_root;
        self
    }

    /// Set the anchor for relative track locations
    pub fn with_source_base(mut self, source_base: SourceBase) -> Self {
        self.source_base = source_base;
        self
    }

    /// Set XSPF location decoding
    pub fn with_url_decoding(mut self, url_decoding: UrlDecoding) -> Self {
        self.url_decoding = url_decoding;
        self
    }

    /// Enable post-copy verification
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}
