//! Unified data model for playlist gathering
//!
//! These types are independent of the playlist format they were read
//! from and of the way tracks are copied afterwards.

mod format;
mod track;

pub use format::PlaylistFormat;
pub use track::{sanitize_file_stem, split_file_name, TrackMeta, TrackRecord};
