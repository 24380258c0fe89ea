//! Post-copy verification
//!
//! Compares each successful copy with its source by size.

use crate::gather::CopyReport;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Outcome of verifying a copy report
#[derive(Debug, Clone, Default)]
pub struct VerifySummary {
    /// Number of copies checked
    pub checked: usize,

    /// Destinations that are missing or differ in size from their source
    pub mismatches: Vec<PathBuf>,
}

impl VerifySummary {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Verify every successful copy in `report`
///
/// Failed copies are skipped; they were already reported.
pub fn verify_copies(report: &CopyReport) -> Result<VerifySummary> {
    let mut summary = VerifySummary::default();

    for outcome in report.copied() {
        summary.checked += 1;

        let source_len = fs::metadata(&outcome.source)
            .with_context(|| format!("Failed to read source {:?}", outcome.source))?
            .len();

        match fs::metadata(&outcome.destination) {
            Ok(meta) if meta.len() == source_len => {
                log::debug!("Verified {:?} ({} bytes)", outcome.destination, source_len);
            }
            Ok(meta) => {
                log::error!(
                    "❌ Size mismatch for {:?}: {} bytes, source has {}",
                    outcome.destination,
                    meta.len(),
                    source_len
                );
                summary.mismatches.push(outcome.destination.clone());
            }
            Err(e) => {
                log::error!("❌ Copy {:?} is missing: {}", outcome.destination, e);
                summary.mismatches.push(outcome.destination.clone());
            }
        }
    }

    log::info!(
        "Verified {} copies, {} mismatches",
        summary.checked,
        summary.mismatches.len()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gather::CopyOutcome;
    use tempfile::TempDir;

    fn outcome(index: usize, source: PathBuf, destination: PathBuf) -> CopyOutcome {
        CopyOutcome {
            index,
            title: format!("Track {index}"),
            source,
            destination,
            result: Ok(0),
        }
    }

    #[test]
    fn test_matching_copy() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src.mp3");
        let dst = temp.path().join("dst.mp3");
        fs::write(&src, b"audio").unwrap();
        fs::write(&dst, b"audio").unwrap();

        let report = CopyReport {
            outcomes: vec![outcome(0, src, dst)],
        };
        let summary = verify_copies(&report).unwrap();
        assert_eq!(summary.checked, 1);
        assert!(summary.is_clean());
    }

    #[test]
    fn test_missing_and_truncated_copies() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src.mp3");
        let short = temp.path().join("short.mp3");
        fs::write(&src, b"full audio").unwrap();
        fs::write(&short, b"full").unwrap();

        let report = CopyReport {
            outcomes: vec![
                outcome(0, src.clone(), short.clone()),
                outcome(1, src, temp.path().join("gone.mp3")),
            ],
        };
        let summary = verify_copies(&report).unwrap();
        assert_eq!(summary.checked, 2);
        assert_eq!(summary.mismatches.len(), 2);
        assert_eq!(summary.mismatches[0], short);
    }
}
