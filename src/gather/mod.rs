//! Copying playlist tracks into a destination folder

pub mod config;
pub mod copier;
pub mod dispatcher;
pub mod organizer;
pub mod pipeline;

pub use config::{GatherConfig, SourceBase};
pub use copier::{FileCopier, FsCopier};
pub use dispatcher::{CopyDispatcher, CopyOutcome, CopyReport};
pub use organizer::DestinationFolder;
pub use pipeline::{GatherPipeline, GatherReport};
