//! XSPF (XML Shareable Playlist Format) parser
//!
//! Only `playlist/trackList/track/{location,title}` is read. Tracks missing
//! either element are reported and skipped.

use super::Extraction;
use crate::error::RecordError;
use crate::model::{TrackMeta, TrackRecord};
use quick_xml::events::Event;
use quick_xml::Reader;

/// How much of a `file://` location gets percent-decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UrlDecoding {
    /// Only `%20` becomes a space
    #[default]
    SpacesOnly,

    /// Full percent-decoding (UTF-8)
    Full,
}

/// Path of the element whose children describe one track
const TRACK_PATH: [&[u8]; 3] = [b"playlist", b"trackList", b"track"];

/// First `location` / `title` seen inside the current `<track>`
#[derive(Debug, Default)]
struct TrackFields {
    location: Option<String>,
    title: Option<String>,
}

/// Which track child is collecting text right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Location,
    Title,
}

/// Parse XSPF text into tracks
///
/// Returns the reason as a string when the document itself is malformed;
/// the caller attaches the playlist path.
pub fn parse_xspf(text: &str, decoding: UrlDecoding) -> Result<Extraction, String> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut tracks = Vec::new();
    let mut skipped = Vec::new();

    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut current: Option<TrackFields> = None;
    let mut field: Option<Field> = None;
    let mut text_buf = String::new();
    let mut track_count = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = e.local_name().as_ref().to_vec();
                stack.push(name);

                if is_track_path(&stack) {
                    current = Some(TrackFields::default());
                } else if current.is_some() && stack.len() == TRACK_PATH.len() + 1 {
                    field = field_for(e.local_name().as_ref());
                    text_buf.clear();
                }
            }

            Ok(Event::Empty(e)) => {
                // <location/> inside a track counts as an empty value
                if let Some(ref mut fields) = current {
                    if stack.len() == TRACK_PATH.len() {
                        match field_for(e.local_name().as_ref()) {
                            Some(Field::Location) => {
                                fields.location.get_or_insert_with(String::new);
                            }
                            Some(Field::Title) => {
                                fields.title.get_or_insert_with(String::new);
                            }
                            None => {}
                        }
                    }
                }
            }

            Ok(Event::Text(e)) => {
                if field.is_some() {
                    let text = e.unescape().map_err(|e| e.to_string())?;
                    text_buf.push_str(&text);
                }
            }

            Ok(Event::CData(e)) => {
                if field.is_some() {
                    text_buf.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }

            Ok(Event::End(_)) => {
                if let (Some(f), Some(fields)) = (field, current.as_mut()) {
                    if stack.len() == TRACK_PATH.len() + 1 {
                        let value = std::mem::take(&mut text_buf);
                        match f {
                            Field::Location => fields.location.get_or_insert(value),
                            Field::Title => fields.title.get_or_insert(value),
                        };
                        field = None;
                    }
                }

                if is_track_path(&stack) {
                    track_count += 1;
                    if let Some(fields) = current.take() {
                        match build_track(fields, track_count, decoding) {
                            Ok(track) => {
                                log::debug!("Track #{}: {:?}", track_count, track);
                                tracks.push(track);
                            }
                            Err(e) => {
                                log::warn!("Skipping playlist entry: {}", e);
                                skipped.push(e);
                            }
                        }
                    }
                }

                stack.pop();
            }

            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(format!(
                    "XML error at position {}: {}",
                    reader.buffer_position(),
                    e
                ));
            }
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err("unexpected end of document".to_string());
    }

    Ok(Extraction { tracks, skipped })
}

fn is_track_path(stack: &[Vec<u8>]) -> bool {
    stack.len() == TRACK_PATH.len()
        && stack
            .iter()
            .zip(TRACK_PATH.iter())
            .all(|(name, expected)| name.as_slice() == *expected)
}

fn field_for(name: &[u8]) -> Option<Field> {
    match name {
        b"location" => Some(Field::Location),
        b"title" => Some(Field::Title),
        _ => None,
    }
}

fn build_track(
    fields: TrackFields,
    track: usize,
    decoding: UrlDecoding,
) -> Result<TrackRecord, RecordError> {
    let location = fields.location.ok_or(RecordError::MissingField {
        track,
        field: "location",
    })?;
    let title = fields.title.ok_or(RecordError::MissingField {
        track,
        field: "title",
    })?;

    Ok(TrackRecord::new(
        normalize_location(&location, decoding),
        title,
        TrackMeta::Xspf,
    ))
}

/// Turn an XSPF `<location>` into a filesystem path string
///
/// `file:///C:/x` becomes `C:/x`; `file:///home/x` keeps its root and
/// becomes `/home/x`. Locations without the scheme are left alone apart
/// from decoding.
///
/// Unlike stripping a literal `file:///` prefix, only `file://` is removed
/// for non-drive paths, so Unix roots survive and `file://host/x` gives
/// `host/x`.
pub fn normalize_location(location: &str, decoding: UrlDecoding) -> String {
    let path = match location.strip_prefix("file://") {
        Some(rest) if has_drive_prefix(rest.trim_start_matches('/')) => {
            rest.trim_start_matches('/')
        }
        Some(rest) => rest,
        None => location,
    };

    match decoding {
        UrlDecoding::SpacesOnly => path.replace("%20", " "),
        UrlDecoding::Full => match urlencoding::decode(path) {
            Ok(decoded) => decoded.into_owned(),
            Err(e) => {
                log::debug!("Location {:?} is not valid UTF-8 once decoded: {}", path, e);
                path.replace("%20", " ")
            }
        },
    }
}

/// `C:` / `c:` at the start of a path
fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
