use std::fmt;

/// Playlist flavours the gatherer understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistFormat {
    /// XML Shareable Playlist Format
    Xspf,

    /// M3U written by VirtualDJ (`#EXTVDJ:` records)
    M3uVdj,

    /// M3U written by AIMP (`#EXTINF:` records, legacy encoding)
    M3uAimp,

    /// M3U8 written by AIMP (`#EXTINF:` records, UTF-8)
    M3u8Aimp,

    /// An M3U/M3U8 file carrying neither marker
    Unknown,
}

impl PlaylistFormat {
    /// Human-readable name used in log output
    pub fn name(&self) -> &'static str {
        match self {
            PlaylistFormat::Xspf => "XSPF",
            PlaylistFormat::M3uVdj => "M3U (VirtualDJ)",
            PlaylistFormat::M3uAimp => "M3U (AIMP)",
            PlaylistFormat::M3u8Aimp => "M3U8 (AIMP)",
            PlaylistFormat::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PlaylistFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
