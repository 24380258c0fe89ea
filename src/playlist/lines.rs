//! Line-oriented record extraction shared by the M3U flavours
//!
//! Extended M3U files pair a metadata line with the location on the next
//! non-empty line. The flavours only differ in the marker and in what the
//! metadata line carries, which is what [`MetadataParser`] abstracts.

use super::Extraction;
use crate::error::RecordError;
use crate::model::TrackRecord;

/// Format-specific half of the M3U state machine
pub trait MetadataParser {
    /// Fields captured from a metadata line
    type Meta;

    /// Prefix identifying a metadata line (after trimming)
    fn marker(&self) -> &'static str;

    /// Parse a metadata line; `line_number` is 1-based
    fn parse(&self, line: &str, line_number: usize) -> Result<Self::Meta, RecordError>;

    /// Build the track once its location is known
    fn finish(&self, meta: Self::Meta, location: String) -> TrackRecord;
}

enum State<M> {
    AwaitingMetadata,
    AwaitingLocation(M),
}

/// Run the metadata/location state machine over `text`
///
/// A metadata line that fails to parse is recorded in
/// [`Extraction::skipped`] and the machine waits for the next one, so the
/// location that followed it is ignored.
pub fn extract_records<P: MetadataParser>(text: &str, parser: &P) -> Extraction {
    let mut tracks = Vec::new();
    let mut skipped = Vec::new();
    let mut state = State::AwaitingMetadata;

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        let line_number = idx + 1;

        if line.starts_with(parser.marker()) {
            if let State::AwaitingLocation(_) = state {
                log::debug!(
                    "Line {}: previous metadata had no location, discarding it",
                    line_number
                );
            }

            state = match parser.parse(line, line_number) {
                Ok(meta) => State::AwaitingLocation(meta),
                Err(e) => {
                    log::warn!("Skipping playlist entry: {}", e);
                    skipped.push(e);
                    State::AwaitingMetadata
                }
            };
            continue;
        }

        state = match state {
            State::AwaitingLocation(meta) if !line.is_empty() => {
                let track = parser.finish(meta, line.to_string());
                log::debug!("Line {}: {:?}", line_number, track);
                tracks.push(track);
                State::AwaitingMetadata
            }
            other => other,
        };
    }

    if let State::AwaitingLocation(_) = state {
        log::debug!("Playlist ends with metadata but no location");
    }

    Extraction { tracks, skipped }
}
