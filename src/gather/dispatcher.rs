//! Parallel copy dispatch
//!
//! Every track is copied by its own task on the rayon pool. Tasks report
//! back over a channel, and the batch counts as finished once one outcome
//! per track has been received, regardless of the order they arrive in.

use super::copier::FileCopier;
use super::organizer::DestinationFolder;
use crate::error::CopyFailure;
use crate::model::TrackRecord;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

/// Result of copying one track
#[derive(Debug)]
pub struct CopyOutcome {
    /// Position of the track in the playlist
    pub index: usize,

    pub title: String,
    pub source: PathBuf,
    pub destination: PathBuf,

    /// Bytes written, or why the copy failed
    pub result: Result<u64, CopyFailure>,
}

impl CopyOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of one dispatch, in playlist order
#[derive(Debug, Default)]
pub struct CopyReport {
    pub outcomes: Vec<CopyOutcome>,
}

impl CopyReport {
    /// Number of copies attempted
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    /// Successful copies
    pub fn copied(&self) -> impl Iterator<Item = &CopyOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    /// Failed copies
    pub fn failed(&self) -> impl Iterator<Item = &CopyOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn copied_count(&self) -> usize {
        self.copied().count()
    }

    pub fn failed_count(&self) -> usize {
        self.failed().count()
    }
}

/// Copies playlist tracks into a destination folder
pub struct CopyDispatcher<C: FileCopier> {
    copier: C,
}

impl<C: FileCopier> CopyDispatcher<C> {
    pub fn new(copier: C) -> Self {
        Self { copier }
    }

    /// Copy every track, resolving relative locations against `source_root`
    ///
    /// Individual failures are logged and recorded; they never stop the
    /// remaining copies.
    pub fn dispatch(
        &self,
        tracks: &[TrackRecord],
        source_root: &Path,
        destination: &DestinationFolder,
    ) -> CopyReport {
        let expected = tracks.len();
        warn_on_name_collisions(tracks);
        let (tx, rx) = mpsc::channel();

        rayon::scope(|scope| {
            for (index, track) in tracks.iter().enumerate() {
                let tx = tx.clone();
                scope.spawn(move |_| {
                    let outcome = self.copy_track(index, track, source_root, destination);
                    // The receiver lives until every task has finished
                    let _ = tx.send(outcome);
                });
            }
        });
        drop(tx);

        let mut outcomes = Vec::with_capacity(expected);
        for outcome in rx.iter() {
            outcomes.push(outcome);
            log::debug!("{}/{} copies reported", outcomes.len(), expected);
        }

        if outcomes.len() != expected {
            log::error!(
                "Expected {} copy outcomes, received {}",
                expected,
                outcomes.len()
            );
        }

        outcomes.sort_by_key(|o| o.index);
        let report = CopyReport { outcomes };

        log::info!(
            "Done: {} copied, {} failed",
            report.copied_count(),
            report.failed_count()
        );
        report
    }

    fn copy_track(
        &self,
        index: usize,
        track: &TrackRecord,
        source_root: &Path,
        destination: &DestinationFolder,
    ) -> CopyOutcome {
        let source = source_root.join(&track.location);
        let dest_path = destination.track_path(track);
        let file_name = track.destination_file_name();

        let result = match self.copier.copy(&source, &dest_path) {
            Ok(bytes) => {
                log::info!("Copied '{}' ({} bytes)", file_name, bytes);
                Ok(bytes)
            }
            Err(e) => {
                log::error!("Failed to copy '{}' from {:?}: {}", file_name, source, e);
                Err(CopyFailure {
                    title: track.title.clone(),
                    source_path: source.clone(),
                    destination: dest_path.clone(),
                    source: e,
                })
            }
        };

        CopyOutcome {
            index,
            title: track.title.clone(),
            source,
            destination: dest_path,
            result,
        }
    }
}

/// Log tracks that will overwrite each other in the destination folder
///
/// Returns the colliding file names with how many tracks share each.
fn warn_on_name_collisions(tracks: &[TrackRecord]) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for track in tracks {
        *counts.entry(track.destination_file_name()).or_insert(0) += 1;
    }

    let mut collisions: Vec<(String, usize)> =
        counts.into_iter().filter(|(_, count)| *count > 1).collect();
    collisions.sort();

    for (name, count) in &collisions {
        log::warn!(
            "{} tracks share the destination name '{}'; only one copy will remain",
            count,
            name
        );
    }
    collisions
}
