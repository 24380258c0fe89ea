/// Format-specific fields that are parsed alongside a track but not
/// needed to copy it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackMeta {
    /// XSPF tracks carry nothing beyond location and title
    Xspf,

    /// AIMP `#EXTINF:<duration>,<freetext>` record
    ExtInf {
        /// Duration in seconds (AIMP writes -1 for unknown lengths)
        duration: Option<i64>,
    },

    /// VirtualDJ `#EXTVDJ:` record, sub-tags kept as written
    VirtualDj {
        filesize: String,
        artist: String,
        title: String,
        songlength: String,
    },
}

/// A single track extracted from a playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    /// Location as written in the playlist (after normalization)
    pub location: String,

    /// Display title, used as the destination file stem
    pub title: String,

    /// Extension of the location's file name, including the dot
    pub extension: String,

    /// Parsed metadata that is not used for copying
    pub meta: TrackMeta,
}

impl TrackRecord {
    /// Create a record, deriving the extension from the location
    pub fn new(location: String, title: String, meta: TrackMeta) -> Self {
        let extension = split_file_name(&location).1.to_string();
        Self {
            location,
            title,
            extension,
            meta,
        }
    }

    /// Create a record titled after the location's file stem
    pub fn titled_from_location(location: String, meta: TrackMeta) -> Self {
        let title = split_file_name(&location).0.to_string();
        Self::new(location, title, meta)
    }

    /// File name the copy receives in the destination folder
    ///
    /// The title is cleaned with [`sanitize_file_stem`] so the copy always
    /// lands directly inside the destination folder.
    pub fn destination_file_name(&self) -> String {
        format!("{}{}", sanitize_file_stem(&self.title), self.extension)
    }
}

/// Characters replaced in titles used as file names
fn is_forbidden(c: char) -> bool {
    match c {
        '/' | '\\' | '\0' => true,
        ':' | '*' | '?' | '"' | '<' | '>' | '|' => cfg!(windows),
        _ => c.is_control() && cfg!(windows),
    }
}

/// Turn a display title into a single path component
///
/// Separators and NUL (plus the reserved characters on Windows) become
/// `_`. Empty, `.` and `..` titles become `_`.
pub fn sanitize_file_stem(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();

    match cleaned.trim() {
        "" | "." | ".." => "_".to_string(),
        _ => cleaned,
    }
}

/// Split the file-name portion of a location into stem and extension
///
/// Both `/` and `\` count as separators, so Windows playlists behave the
/// same on every host. A leading dot does not start an extension.
pub fn split_file_name(location: &str) -> (&str, &str) {
    let name = location
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(location);

    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_windows_location() {
        assert_eq!(
            split_file_name(r"C:\Tracks\track01.mp3"),
            ("track01", ".mp3")
        );
    }

    #[test]
    fn test_split_unix_location() {
        assert_eq!(
            split_file_name("music/Artist - Song.v2.flac"),
            ("Artist - Song.v2", ".flac")
        );
    }

    #[test]
    fn test_split_without_extension() {
        assert_eq!(split_file_name("/tmp/README"), ("README", ""));
        assert_eq!(split_file_name("/tmp/.hidden"), (".hidden", ""));
    }

    #[test]
    fn test_destination_file_name() {
        let track = TrackRecord::new(
            "C:/Music/Song Name.mp3".to_string(),
            "My Song".to_string(),
            TrackMeta::Xspf,
        );
        assert_eq!(track.extension, ".mp3");
        assert_eq!(track.destination_file_name(), "My Song.mp3");
    }

    #[test]
    fn test_title_cannot_leave_folder() {
        let cases = [
            ("/tmp/escaped", "_tmp_escaped.mp3"),
            ("AC/DC - Thunder", "AC_DC - Thunder.mp3"),
            ("..", "_.mp3"),
            ("../../etc/x", ".._.._etc_x.mp3"),
            (r"C:\Windows\x", "C:_Windows_x.mp3"),
            ("", "_.mp3"),
            ("nul\0byte", "nul_byte.mp3"),
        ];

        for (title, expected) in cases {
            let track = TrackRecord::new("a.mp3".to_string(), title.to_string(), TrackMeta::Xspf);
            let name = track.destination_file_name();
            if cfg!(windows) {
                assert!(!name.contains(['/', '\\', ':']), "{title:?} -> {name:?}");
            } else {
                assert_eq!(name, expected, "title {:?}", title);
            }
        }
    }
}
