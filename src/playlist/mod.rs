//! Playlist parsing
//!
//! Resolves a playlist file, detects which flavour it is and extracts its
//! tracks. Supported inputs are XSPF, VirtualDJ M3U and AIMP M3U/M3U8.

mod aimp;
mod decode;
mod detect;
mod lines;
mod resolve;
mod vdj;
mod xspf;

pub use aimp::{parse_aimp, ExtInfParser};
pub use decode::{decode_text, TextEncoding};
pub use detect::{classify_m3u, detect_format, PlaylistExtension, EXTINF_MARKER, VDJ_MARKER};
pub use lines::{extract_records, MetadataParser};
pub use resolve::{playlist_base_name, resolve_playlist};
pub use vdj::{parse_virtualdj, VdjTags, VirtualDjParser};
pub use xspf::{normalize_location, parse_xspf, UrlDecoding};

use crate::error::{PlaylistError, RecordError};
use crate::model::{PlaylistFormat, TrackRecord};
use std::path::{Path, PathBuf};

/// Tracks extracted from a playlist, plus the entries that were skipped
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Tracks in playlist order
    pub tracks: Vec<TrackRecord>,

    /// Entries that could not be turned into tracks
    pub skipped: Vec<RecordError>,
}

impl Extraction {
    /// Number of extracted tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if no tracks were extracted
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

/// A parsed playlist file
#[derive(Debug, Clone)]
pub struct LoadedPlaylist {
    pub path: PathBuf,
    pub format: PlaylistFormat,
    pub extraction: Extraction,
}

/// Read, detect and parse the playlist at `path`
pub fn load_playlist(path: &Path, decoding: UrlDecoding) -> Result<LoadedPlaylist, PlaylistError> {
    let extension = PlaylistExtension::from_path(path)
        .ok_or_else(|| PlaylistError::UnsupportedExtension(path.to_path_buf()))?;

    let bytes = std::fs::read(path).map_err(|source| PlaylistError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let utf8 = decode_text(&bytes, TextEncoding::Utf8);
    let format = detect_format(extension, &utf8);
    log::info!("Detected {} playlist: {:?}", format, path);

    let extraction = match format {
        PlaylistFormat::Xspf => {
            parse_xspf(&utf8, decoding).map_err(|reason| PlaylistError::ParseFailure {
                path: path.to_path_buf(),
                reason,
            })?
        }
        PlaylistFormat::M3uVdj => parse_virtualdj(&utf8),
        PlaylistFormat::M3uAimp => parse_aimp(&decode_text(&bytes, TextEncoding::Latin1)),
        PlaylistFormat::M3u8Aimp => parse_aimp(&utf8),
        PlaylistFormat::Unknown => {
            return Err(PlaylistError::UnrecognizedM3uVariant(path.to_path_buf()));
        }
    };

    if extraction.is_empty() {
        log::warn!("Playlist {:?} is empty: no tracks extracted", path);
    } else {
        log::info!("Extracted {} tracks from {:?}", extraction.len(), path);
    }
    if !extraction.skipped.is_empty() {
        log::warn!("{} playlist entries skipped", extraction.skipped.len());
    }

    Ok(LoadedPlaylist {
        path: path.to_path_buf(),
        format,
        extraction,
    })
}
