//! Completed-schedule accounting and persistence.
//!
//! The sink is the single place a finished schedule goes: it counts it,
//! optionally keeps it in memory, optionally appends it to the schedule
//! file, and periodically checkpoints the running count. The search
//! engine polls `limit_reached` to stop promptly once the configured
//! maximum has been produced.
//!
//! One sink is built per top-level run and passed in explicitly, so
//! independent runs (and tests) never share counter state.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::types::{schedule_line, Fixture, Schedule};

/// Folder and file path for the schedule output of one n.
///
/// Layout matches the downstream tooling's expectations:
/// `Schedules/Schedules_<name>/<name>-<n>.csv`.
pub fn schedule_paths(n: usize, name: &str) -> (PathBuf, PathBuf) {
    let folder = PathBuf::from("Schedules").join(format!("Schedules_{}", name));
    let file = folder.join(format!("{}-{}.csv", name, n));
    (folder, file)
}

/// Path of the count checkpoint for one n: `Count/Count_<n>.txt`.
pub fn count_path(n: usize) -> PathBuf {
    PathBuf::from("Count").join(format!("Count_{}.txt", n))
}

/// Create the schedule folder and truncate the schedule file.
///
/// Called once before a run unless appending; the randomized mode calls
/// it once up front so repetitions don't wipe each other's output.
pub fn init_save(n: usize, name: &str) -> Result<(), String> {
    let (folder, file) = schedule_paths(n, name);
    fs::create_dir_all(&folder)
        .map_err(|e| format!("Failed to create {}: {}", folder.display(), e))?;
    File::create(&file).map_err(|e| format!("Failed to create {}: {}", file.display(), e))?;
    Ok(())
}

/// Overwrite the count checkpoint with the current count.
fn write_count(path: &Path, count: u64) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
    }
    fs::write(path, count.to_string())
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}

/// Receives completed schedules and enforces the global schedule limit.
pub struct ScheduleSink {
    count: u64,
    max: Option<u64>,
    retain: Option<usize>,
    retained: Vec<Schedule>,
    writer: Option<BufWriter<File>>,
    progress_every: Option<u64>,
    count_file: Option<PathBuf>,
}

impl ScheduleSink {
    /// Sink that only counts, with an optional schedule limit.
    pub fn counting(max: Option<u64>) -> Self {
        Self {
            count: 0,
            max,
            retain: None,
            retained: Vec::new(),
            writer: None,
            progress_every: None,
            count_file: None,
        }
    }

    /// Keep up to `cap` completed schedules in memory.
    pub fn with_retention(mut self, cap: usize) -> Self {
        self.retain = Some(cap);
        self
    }

    /// Append each completed schedule to the schedule file of (n, name).
    pub fn with_save(self, n: usize, name: &str) -> Result<Self, String> {
        let (_, file) = schedule_paths(n, name);
        self.with_save_path(&file)
    }

    /// Append each completed schedule to an explicit file path.
    pub fn with_save_path(mut self, path: &Path) -> Result<Self, String> {
        let handle = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| format!("Failed to open {}: {}", path.display(), e))?;
        self.writer = Some(BufWriter::new(handle));
        Ok(self)
    }

    /// Print the running count and checkpoint it to `Count/Count_<n>.txt`
    /// every `every` completions. `every` = 0 disables the periodic
    /// report; the final count is still written via `checkpoint_count`.
    pub fn with_progress(self, n: usize, every: u64) -> Self {
        let path = count_path(n);
        self.with_progress_file(path, every)
    }

    /// Progress reporting with an explicit checkpoint path.
    pub fn with_progress_file(mut self, path: PathBuf, every: u64) -> Self {
        self.progress_every = Some(every);
        self.count_file = Some(path);
        self
    }

    /// Completed schedules reported since the last reset.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Schedules retained under the verbose cap.
    pub fn retained(&self) -> &[Schedule] {
        &self.retained
    }

    /// True once the configured maximum has been reached. The engine
    /// polls this before expanding any node and after every sibling.
    pub fn limit_reached(&self) -> bool {
        match self.max {
            Some(max) => self.count >= max,
            None => false,
        }
    }

    /// Zero the counter for the next independent run. Retained
    /// schedules and the open writer carry over.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Record one completed schedule. Filesystem failures are fatal to
    /// the run; a schedule is never silently dropped.
    pub fn report(&mut self, schedule: &[Fixture]) -> Result<(), String> {
        self.count += 1;

        if let Some(cap) = self.retain {
            if self.retained.len() < cap {
                self.retained.push(schedule.to_vec());
            }
        }

        if let Some(writer) = self.writer.as_mut() {
            writeln!(writer, "{}", schedule_line(schedule))
                .map_err(|e| format!("Failed to append schedule: {}", e))?;
        }

        if let Some(every) = self.progress_every {
            if every != 0 && self.count % every == 0 {
                println!("Current schedule count: {}", self.count);
                if let Some(path) = &self.count_file {
                    write_count(path, self.count)?;
                }
            }
        }

        Ok(())
    }

    /// Overwrite the count checkpoint with the final count for this
    /// run. No-op when no checkpoint path is configured.
    pub fn checkpoint_count(&self) -> Result<(), String> {
        match &self.count_file {
            Some(path) => write_count(path, self.count),
            None => Ok(()),
        }
    }

    /// Flush buffered schedule lines. Call at the end of a run.
    pub fn finish(&mut self) -> Result<(), String> {
        if let Some(writer) = self.writer.as_mut() {
            writer
                .flush()
                .map_err(|e| format!("Failed to flush schedule file: {}", e))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod sink_tests;
