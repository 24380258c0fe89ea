//! AIMP-style extended M3U/M3U8 (`#EXTINF:<duration>,<freetext>`)
//!
//! The free text after the comma is ignored; tracks are titled after the
//! file name of their location.

use super::detect::EXTINF_MARKER;
use super::lines::{extract_records, MetadataParser};
use super::Extraction;
use crate::error::RecordError;
use crate::model::{TrackMeta, TrackRecord};

/// Parser for `#EXTINF:` metadata lines
pub struct ExtInfParser;

impl MetadataParser for ExtInfParser {
    type Meta = Option<i64>;

    fn marker(&self) -> &'static str {
        EXTINF_MARKER
    }

    fn parse(&self, line: &str, line_number: usize) -> Result<Option<i64>, RecordError> {
        let rest = &line[EXTINF_MARKER.len()..];
        let duration = rest
            .split_once(',')
            .and_then(|(duration, _)| duration.trim().parse::<i64>().ok());

        if duration.is_none() {
            log::debug!("Line {}: no duration in {:?}", line_number, line);
        }
        Ok(duration)
    }

    fn finish(&self, duration: Option<i64>, location: String) -> TrackRecord {
        TrackRecord::titled_from_location(location, TrackMeta::ExtInf { duration })
    }
}

/// Extract tracks from AIMP playlist text (already decoded)
pub fn parse_aimp(text: &str) -> Extraction {
    extract_records(text, &ExtInfParser)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_record() {
        let extraction = parse_aimp("#EXTINF:215,\nC:\\Tracks\\track01.mp3");

        assert_eq!(extraction.tracks.len(), 1);
        let track = &extraction.tracks[0];
        assert_eq!(track.location, "C:\\Tracks\\track01.mp3");
        assert_eq!(track.title, "track01");
        assert_eq!(track.extension, ".mp3");
        assert_eq!(track.meta, TrackMeta::ExtInf { duration: Some(215) });
    }

    #[test]
    fn test_freetext_is_not_the_title() {
        let text = "#EXTM3U\n#EXTINF:180,Some Artist - Some Title\nmusic/file name.flac\n";
        let extraction = parse_aimp(text);

        assert_eq!(extraction.tracks[0].title, "file name");
        assert_eq!(extraction.tracks[0].destination_file_name(), "file name.flac");
    }

    #[test]
    fn test_second_metadata_replaces_first() {
        let text = "#EXTINF:100,first\n#EXTINF:200,second\nsong.mp3\n";
        let extraction = parse_aimp(text);

        assert_eq!(extraction.tracks.len(), 1);
        assert_eq!(
            extraction.tracks[0].meta,
            TrackMeta::ExtInf { duration: Some(200) }
        );
    }

    #[test]
    fn test_unknown_or_missing_duration() {
        let text = "#EXTINF:-1,stream\na.mp3\n#EXTINF:abc\nb.mp3\n";
        let extraction = parse_aimp(text);

        assert_eq!(extraction.tracks.len(), 2);
        assert_eq!(
            extraction.tracks[0].meta,
            TrackMeta::ExtInf { duration: Some(-1) }
        );
        assert_eq!(extraction.tracks[1].meta, TrackMeta::ExtInf { duration: None });
    }

    #[test]
    fn test_empty_playlist() {
        let extraction = parse_aimp("#EXTM3U\n#EXTINF:10,\n\n");
        assert!(extraction.tracks.is_empty());
        assert!(extraction.skipped.is_empty());
    }
}
