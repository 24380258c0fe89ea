//! Main gather pipeline orchestration

use super::config::GatherConfig;
use super::copier::FileCopier;
use super::dispatcher::{CopyDispatcher, CopyReport};
use super::organizer::DestinationFolder;
use crate::error::RecordError;
use crate::model::PlaylistFormat;
use crate::playlist::{load_playlist, playlist_base_name, resolve_playlist};
use crate::validation::{verify_copies, VerifySummary};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Everything one run produced
#[derive(Debug)]
pub struct GatherReport {
    /// Playlist file that was read
    pub playlist: PathBuf,

    pub format: PlaylistFormat,

    /// Folder the tracks were copied into
    pub destination: PathBuf,

    /// Playlist entries that could not be parsed
    pub skipped: Vec<RecordError>,

    pub copies: CopyReport,

    /// Present when verification was requested
    pub verification: Option<VerifySummary>,
}

/// Main gather pipeline
pub struct GatherPipeline<C: FileCopier> {
    config: GatherConfig,
    dispatcher: CopyDispatcher<C>,
}

impl<C: FileCopier> GatherPipeline<C> {
    /// Create a new gather pipeline
    pub fn new(config: GatherConfig, copier: C) -> Self {
        Self {
            config,
            dispatcher: CopyDispatcher::new(copier),
        }
    }

    /// Find the playlist called `name` and gather it
    pub fn run(&self, name: &str) -> Result<GatherReport> {
        let path = resolve_playlist(name, &self.config.playlist_dir)?;
        log::info!("Using playlist {:?}", path);
        self.gather(&path)
    }

    /// Gather the playlist at `path` into its destination folder
    pub fn gather(&self, path: &Path) -> Result<GatherReport> {
        let playlist = load_playlist(path, self.config.url_decoding)?;

        let destination =
            DestinationFolder::new(&self.config.output_root, &playlist_base_name(path));
        destination.init()?;

        let source_root = self
            .config
            .source_base
            .root_for(path)
            .context("Failed to determine where track locations are relative to")?;
        log::debug!(
            "Resolving relative track locations against {:?} ({:?})",
            source_root,
            self.config.source_base
        );

        let copies = self
            .dispatcher
            .dispatch(&playlist.extraction.tracks, &source_root, &destination);

        let verification = if self.config.verify {
            let summary = verify_copies(&copies)?;
            if !summary.is_clean() {
                anyhow::bail!(
                    "{} of {} copies in {:?} do not match their source",
                    summary.mismatches.len(),
                    summary.checked,
                    destination.path()
                );
            }
            Some(summary)
        } else {
            None
        };

        log::info!("Playlist processing completed: {:?}", destination.path());

        Ok(GatherReport {
            playlist: playlist.path,
            format: playlist.format,
            destination: destination.path().to_path_buf(),
            skipped: playlist.extraction.skipped,
            copies,
            verification,
        })
    }
}
