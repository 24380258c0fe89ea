//! Error types for playlist resolution, parsing and copying

use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop a playlist from being processed at all
#[derive(Debug, Error)]
pub enum PlaylistError {
    #[error("no playlist named '{name}' found in {dir:?} (tried .m3u, .m3u8, .xspf)")]
    FileNotFound { name: String, dir: PathBuf },

    #[error("unsupported playlist extension {0:?}: only XSPF, M3U and M3U8 are accepted")]
    UnsupportedExtension(PathBuf),

    #[error("unrecognized M3U variant in {0:?}: no #EXTVDJ: or #EXTINF: lines")]
    UnrecognizedM3uVariant(PathBuf),

    #[error("failed to parse {path:?}: {reason}")]
    ParseFailure { path: PathBuf, reason: String },

    #[error("failed to read playlist {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A single playlist entry that could not be turned into a track
///
/// These are reported and skipped; the rest of the playlist is processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("track #{track}: missing <{field}> element")]
    MissingField { track: usize, field: &'static str },

    #[error("line {line}: malformed metadata, missing <{tag}> tag")]
    MalformedMetadata { line: usize, tag: &'static str },
}

/// A copy that did not complete
#[derive(Debug, Error)]
#[error("failed to copy '{title}' from {source_path:?} to {destination:?}")]
pub struct CopyFailure {
    pub title: String,
    pub source_path: PathBuf,
    pub destination: PathBuf,
    #[source]
    pub source: std::io::Error,
}
