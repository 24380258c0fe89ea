//! Playlist format detection

use crate::model::PlaylistFormat;
use std::path::Path;

/// Marker opening every VirtualDJ metadata line
pub const VDJ_MARKER: &str = "#EXTVDJ:";

/// Marker opening every extended-M3U metadata line
pub const EXTINF_MARKER: &str = "#EXTINF:";

/// Playlist file extensions, lowercase and without the dot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistExtension {
    M3u,
    M3u8,
    Xspf,
}

impl PlaylistExtension {
    /// Probe order used when resolving a playlist by name
    pub const PROBE_ORDER: [PlaylistExtension; 3] = [
        PlaylistExtension::M3u,
        PlaylistExtension::M3u8,
        PlaylistExtension::Xspf,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlaylistExtension::M3u => "m3u",
            PlaylistExtension::M3u8 => "m3u8",
            PlaylistExtension::Xspf => "xspf",
        }
    }

    /// Classify a path by its extension, ignoring case
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "m3u" => Some(PlaylistExtension::M3u),
            "m3u8" => Some(PlaylistExtension::M3u8),
            "xspf" => Some(PlaylistExtension::Xspf),
            _ => None,
        }
    }
}

/// Decide the flavour of an M3U/M3U8 playlist from its lines
///
/// VirtualDJ wins over AIMP when both markers are present.
pub fn classify_m3u<'a, I>(lines: I, extension: PlaylistExtension) -> PlaylistFormat
where
    I: IntoIterator<Item = &'a str>,
{
    let mut has_extinf = false;

    for line in lines {
        if line.starts_with(VDJ_MARKER) {
            return PlaylistFormat::M3uVdj;
        }
        if line.starts_with(EXTINF_MARKER) {
            has_extinf = true;
        }
    }

    match (has_extinf, extension) {
        (true, PlaylistExtension::M3u8) => PlaylistFormat::M3u8Aimp,
        (true, _) => PlaylistFormat::M3uAimp,
        (false, _) => PlaylistFormat::Unknown,
    }
}

/// Detect the format of a playlist given its extension and text
///
/// XSPF is decided by extension alone; `text` is only consulted for M3U.
pub fn detect_format(extension: PlaylistExtension, text: &str) -> PlaylistFormat {
    match extension {
        PlaylistExtension::Xspf => PlaylistFormat::Xspf,
        PlaylistExtension::M3u | PlaylistExtension::M3u8 => classify_m3u(text.lines(), extension),
    }
}
