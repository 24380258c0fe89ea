//! File copy backends

use std::fs;
use std::io;
use std::path::Path;

/// Copies one file to another location
///
/// Implementations are shared between copy tasks running in parallel.
pub trait FileCopier: Send + Sync {
    /// Copy `source` to `destination`, replacing it if present, and return
    /// the number of bytes written
    fn copy(&self, source: &Path, destination: &Path) -> io::Result<u64>;
}

/// Copier backed by [`std::fs::copy`]
#[derive(Debug, Clone, Copy, Default)]
pub struct FsCopier;

impl FsCopier {
    pub fn new() -> Self {
        Self
    }
}

impl FileCopier for FsCopier {
    fn copy(&self, source: &Path, destination: &Path) -> io::Result<u64> {
        fs::copy(source, destination)
    }
}
