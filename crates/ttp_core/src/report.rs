//! Machine-readable run summary.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Summary of one generation run, saved as JSON for tooling that wants
/// more than the plain-text count checkpoint. The schedule file format
/// itself is fixed plain text and never goes through serde.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of teams.
    pub n: usize,
    /// Whether the first round was normalized.
    pub normalized: bool,
    /// Repetition count of the randomized mode, if it was used.
    pub randomized: Option<u64>,
    /// Completed schedules produced by the run.
    pub schedules: u64,
    /// Wall-clock duration of the run in seconds.
    pub elapsed_secs: f64,
}

impl RunSummary {
    /// Save the summary as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize summary: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write summary: {}", e))
    }

    /// Load a previously saved summary.
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read summary: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse summary: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_summary_roundtrip() {
        let summary = RunSummary {
            n: 6,
            normalized: true,
            randomized: None,
            schedules: 1024,
            elapsed_secs: 3.5,
        };

        let mut path = std::env::temp_dir();
        path.push(format!("ttp_summary_test_{}.json", std::process::id()));

        summary.save(&path).unwrap();
        let loaded = RunSummary::load(&path).unwrap();
        assert_eq!(loaded.n, 6);
        assert!(loaded.normalized);
        assert_eq!(loaded.randomized, None);
        assert_eq!(loaded.schedules, 1024);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = RunSummary::load(Path::new("/nonexistent/ttp_summary.json"));
        assert!(err.is_err());
    }
}
