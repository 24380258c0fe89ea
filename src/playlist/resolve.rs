//! Locating a playlist file from an operator-supplied name

use super::detect::PlaylistExtension;
use crate::error::PlaylistError;
use std::path::{Path, PathBuf};

/// Find the playlist called `name` inside `dir`
///
/// `<name>.m3u`, `<name>.m3u8` and `<name>.xspf` are probed in that order
/// and the first existing file wins. A name that already points at an
/// existing file with an extension is used as-is, leaving the extension
/// check to the loader.
pub fn resolve_playlist(name: &str, dir: &Path) -> Result<PathBuf, PlaylistError> {
    let name = name.trim();
    let not_found = || PlaylistError::FileNotFound {
        name: name.to_string(),
        dir: dir.to_path_buf(),
    };

    if name.is_empty() {
        return Err(not_found());
    }

    let direct = dir.join(name);
    if direct.extension().is_some() && direct.is_file() {
        log::debug!("Using playlist file {:?} as named", direct);
        return Ok(direct);
    }

    for ext in PlaylistExtension::PROBE_ORDER {
        let candidate = dir.join(format!("{}.{}", name, ext.as_str()));
        log::debug!("Probing {:?}", candidate);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    Err(not_found())
}

/// Playlist file name without its extension, used for the destination folder
pub fn playlist_base_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "playlist".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_probe_order_prefers_m3u() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("set.xspf"), "").unwrap();
        fs::write(dir.path().join("set.m3u8"), "").unwrap();
        fs::write(dir.path().join("set.m3u"), "").unwrap();

        let found = resolve_playlist("set", dir.path()).unwrap();
        assert_eq!(found, dir.path().join("set.m3u"));
    }

    #[test]
    fn test_probe_falls_through_to_xspf() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("set.xspf"), "").unwrap();

        let found = resolve_playlist(" set ", dir.path()).unwrap();
        assert_eq!(found, dir.path().join("set.xspf"));
    }

    #[test]
    fn test_direct_file_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("set.pls"), "").unwrap();

        let found = resolve_playlist("set.pls", dir.path()).unwrap();
        assert_eq!(found, dir.path().join("set.pls"));
    }

    #[test]
    fn test_missing_playlist() {
        let dir = TempDir::new().unwrap();
        let err = resolve_playlist("nothing", dir.path()).unwrap_err();
        assert!(matches!(err, PlaylistError::FileNotFound { .. }));

        let err = resolve_playlist("", dir.path()).unwrap_err();
        assert!(matches!(err, PlaylistError::FileNotFound { .. }));
    }

    #[test]
    fn test_base_name() {
        assert_eq!(playlist_base_name(Path::new("dir/Summer Mix.m3u8")), "Summer Mix");
    }
}
