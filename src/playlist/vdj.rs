//! VirtualDJ extended M3U (`#EXTVDJ:` lines with pseudo-XML sub-tags)
//!
//! A VirtualDJ metadata line looks like:
//!
//! ```text
//! #EXTVDJ:<filesize>5120000</filesize><artist>Artist</artist><title>Song</title><songlength>215.4</songlength>
//! ```

use super::detect::VDJ_MARKER;
use super::lines::{extract_records, MetadataParser};
use super::Extraction;
use crate::error::RecordError;
use crate::model::{TrackMeta, TrackRecord};
use once_cell::sync::Lazy;
use regex::Regex;

const FILESIZE: &str = "filesize";
const ARTIST: &str = "artist";
const TITLE: &str = "title";
const SONGLENGTH: &str = "songlength";

/// Non-greedy `<tag>...</tag>` matchers for the required sub-tags
static TAG_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    [FILESIZE, ARTIST, TITLE, SONGLENGTH]
        .into_iter()
        .map(|tag| {
            let pattern = format!("<{tag}>(.*?)</{tag}>");
            (tag, Regex::new(&pattern).expect("tag pattern is a valid regex"))
        })
        .collect()
});

/// Extract the text between `<tag>` and `</tag>`
fn between_tags<'a>(line: &'a str, tag: &'static str, line_number: usize) -> Result<&'a str, RecordError> {
    TAG_PATTERNS
        .iter()
        .find(|(name, _)| *name == tag)
        .and_then(|(_, re)| re.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(RecordError::MalformedMetadata {
            line: line_number,
            tag,
        })
}

/// The four sub-tags every VirtualDJ record must carry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VdjTags {
    pub filesize: String,
    pub artist: String,
    pub title: String,
    pub songlength: String,
}

/// Parser for `#EXTVDJ:` metadata lines
pub struct VirtualDjParser;

impl MetadataParser for VirtualDjParser {
    type Meta = VdjTags;

    fn marker(&self) -> &'static str {
        VDJ_MARKER
    }

    fn parse(&self, line: &str, line_number: usize) -> Result<VdjTags, RecordError> {
        Ok(VdjTags {
            filesize: between_tags(line, FILESIZE, line_number)?.to_string(),
            artist: between_tags(line, ARTIST, line_number)?.to_string(),
            title: between_tags(line, TITLE, line_number)?.to_string(),
            songlength: between_tags(line, SONGLENGTH, line_number)?.to_string(),
        })
    }

    fn finish(&self, tags: VdjTags, location: String) -> TrackRecord {
        let title = format!("{} - {}", tags.artist, tags.title);
        let meta = TrackMeta::VirtualDj {
            filesize: tags.filesize,
            artist: tags.artist,
            title: tags.title,
            songlength: tags.songlength,
        };
        TrackRecord::new(location, title, meta)
    }
}

/// Extract tracks from VirtualDJ playlist text
pub fn parse_virtualdj(text: &str) -> Extraction {
    extract_records(text, &VirtualDjParser)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vdj_line(artist: &str, title: &str) -> String {
        format!(
            "#EXTVDJ:<filesize>4096</filesize><artist>{}</artist><title>{}</title><songlength>201.5</songlength>",
            artist, title
        )
    }

    #[test]
    fn test_title_is_artist_dash_title() {
        let text = format!("#EXTM3U\n{}\nD:\\DJ\\set\\01 intro.mp3\n", vdj_line("Daft Punk", "One More Time"));
        let extraction = parse_virtualdj(&text);

        assert_eq!(extraction.tracks.len(), 1);
        let track = &extraction.tracks[0];
        assert_eq!(track.title, "Daft Punk - One More Time");
        assert_eq!(track.location, "D:\\DJ\\set\\01 intro.mp3");
        assert_eq!(track.destination_file_name(), "Daft Punk - One More Time.mp3");
        assert_eq!(
            track.meta,
            TrackMeta::VirtualDj {
                filesize: "4096".to_string(),
                artist: "Daft Punk".to_string(),
                title: "One More Time".to_string(),
                songlength: "201.5".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_tag_skips_only_that_record() {
        let broken = "#EXTVDJ:<filesize>1</filesize><artist>Nobody</artist><songlength>3</songlength>";
        let text = format!(
            "{}\n{}\nfirst.mp3\n{}\nbroken.mp3\n{}\nthird.wav\n",
            "#EXTM3U",
            vdj_line("A", "One"),
            broken,
            vdj_line("C", "Three")
        );
        let extraction = parse_virtualdj(&text);

        let titles: Vec<&str> = extraction.tracks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["A - One", "C - Three"]);
        assert_eq!(
            extraction.skipped,
            vec![RecordError::MalformedMetadata { line: 4, tag: "title" }]
        );
    }

    #[test]
    fn test_each_required_tag_is_enforced() {
        let full = [
            ("filesize", "<filesize>1</filesize>"),
            ("artist", "<artist>Nobody</artist>"),
            ("title", "<title>Nothing</title>"),
            ("songlength", "<songlength>3</songlength>"),
        ];

        for (missing, _) in full {
            let broken: String = full
                .iter()
                .filter(|(tag, _)| *tag != missing)
                .map(|(_, part)| *part)
                .collect();
            let text = format!(
                "#EXTVDJ:{}\nbroken.mp3\n{}\nnext.mp3\n",
                broken,
                vdj_line("Next", "Track")
            );
            let extraction = parse_virtualdj(&text);

            assert_eq!(
                extraction.skipped,
                vec![RecordError::MalformedMetadata { line: 1, tag: missing }],
                "missing <{}>",
                missing
            );
            assert_eq!(extraction.tracks.len(), 1, "missing <{}>", missing);
            assert_eq!(extraction.tracks[0].title, "Next - Track");
            assert_eq!(extraction.tracks[0].location, "next.mp3");
        }
    }

    #[test]
    fn test_tags_match_non_greedily() {
        let line = "#EXTVDJ:<filesize>1</filesize><artist>A</artist><title>T</title><songlength>2</songlength><title>Other</title>";
        let tags = VirtualDjParser.parse(line, 1).unwrap();
        assert_eq!(tags.title, "T");
        assert_eq!(tags.songlength, "2");
    }

    #[test]
    fn test_extinf_lines_are_not_records() {
        let extraction = parse_virtualdj("#EXTINF:10,x\na.mp3\n");
        assert!(extraction.tracks.is_empty());
    }
}
