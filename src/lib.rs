//! Playlist Gather - copy the tracks of a playlist into one folder
//!
//! Reads XSPF, VirtualDJ M3U and AIMP M3U/M3U8 playlists and copies every
//! referenced audio file into a folder named after the playlist, renaming
//! each copy after its title.

pub mod error;
pub mod gather;
pub mod model;
pub mod playlist;
pub mod validation;

pub use gather::config::GatherConfig;
pub use gather::pipeline::GatherPipeline;
