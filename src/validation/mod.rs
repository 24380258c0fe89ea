//! Validation utilities
//!
//! Checks a finished gather run against the files on disk

mod verify;

pub use verify::{verify_copies, VerifySummary};
