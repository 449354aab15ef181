//! The bounded, newest-first log file.

use crate::entry::LogEntry;
use crate::error::{StoreError, StoreResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Capacity used when the configured interval is not positive.
const DEFAULT_CAPACITY: usize = 360;

/// Bounded temperature history persisted at a fixed path.
#[derive(Debug, Clone)]
pub struct TempLogStore {
    path: PathBuf,
    log_interval: i64,
}

impl TempLogStore {
    pub fn new(path: impl Into<PathBuf>, log_interval: i64) -> Self {
        Self {
            path: path.into(),
            log_interval,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Maximum number of entries the file may hold: one hour's worth at
    /// the configured interval, never less than one.
    pub fn capacity(&self) -> usize {
        if self.log_interval > 0 {
            ((3600 / self.log_interval) as usize).max(1)
        } else {
            DEFAULT_CAPACITY
        }
    }

    /// Truncate the history. Called once at startup so a restart begins
    /// with a clean chart.
    pub fn reset(&self) -> StoreResult<()> {
        self.ensure_parent_dir();
        fs::write(&self.path, "").map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Prepend one entry, evicting from the tail to stay within capacity.
    ///
    /// The file is read in full and rewritten in full on every call; it is
    /// the sole representation of the history. The rewrite is deliberately
    /// not transactional, so an external reader can observe a file
    /// mid-rewrite and must tolerate a malformed trailing line. Existing
    /// lines are carried verbatim, without reparsing.
    pub fn append(&self, entry: &LogEntry) -> StoreResult<()> {
        let existing = fs::read_to_string(&self.path).unwrap_or_default();
        let keep = self.capacity() - 1;

        let mut content = entry.to_line();
        content.push('\n');
        for line in existing.lines().take(keep) {
            content.push_str(line);
            content.push('\n');
        }

        self.ensure_parent_dir();
        fs::write(&self.path, content).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Read the current history lines, newest first. Absent file reads as
    /// empty.
    pub fn lines(&self) -> Vec<String> {
        fs::read_to_string(&self.path)
            .unwrap_or_default()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    fn ensure_parent_dir(&self) {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
            && let Err(err) = fs::create_dir_all(parent)
        {
            warn!(path = %parent.display(), %err, "cannot create log directory");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("fc_store_test");
        let _ = fs::create_dir_all(&dir);
        let path = dir.join(name);
        let _ = fs::remove_file(&path);
        path
    }

    fn entry_at(offset_s: i64, temperature: f64) -> LogEntry {
        LogEntry::new(Local::now() + Duration::seconds(offset_s), temperature)
    }

    #[test]
    fn capacity_follows_interval() {
        assert_eq!(TempLogStore::new("/tmp/x", 10).capacity(), 360);
        assert_eq!(TempLogStore::new("/tmp/x", 60).capacity(), 60);
        assert_eq!(TempLogStore::new("/tmp/x", 3600).capacity(), 1);
        // Intervals longer than an hour still keep one entry
        assert_eq!(TempLogStore::new("/tmp/x", 7200).capacity(), 1);
        // Non-positive interval falls back to the default cap
        assert_eq!(TempLogStore::new("/tmp/x", 0).capacity(), 360);
        assert_eq!(TempLogStore::new("/tmp/x", -5).capacity(), 360);
    }

    #[test]
    fn append_prepends_newest_first() {
        let store = TempLogStore::new(scratch("prepend"), 10);
        store.append(&entry_at(0, 40.0)).unwrap();
        store.append(&entry_at(10, 41.0)).unwrap();
        store.append(&entry_at(20, 42.0)).unwrap();

        let lines = store.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("42.0"));
        assert!(lines[2].ends_with("40.0"));
    }

    #[test]
    fn append_evicts_beyond_capacity() {
        // log_interval 1200 -> capacity 3
        let store = TempLogStore::new(scratch("evict"), 1200);
        for i in 0..5 {
            store.append(&entry_at(i, 40.0 + i as f64)).unwrap();
        }
        let lines = store.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("44.0"));
        assert!(lines[2].ends_with("42.0"));
    }

    #[test]
    fn four_hundred_appends_keep_latest_360() {
        let store = TempLogStore::new(scratch("hour"), 10);
        for i in 0..400 {
            store.append(&entry_at(i * 10, i as f64)).unwrap();
        }
        let lines = store.lines();
        assert_eq!(lines.len(), 360);
        assert!(lines[0].ends_with("399.0"));
        assert!(lines[359].ends_with("40.0"));
    }

    #[test]
    fn capacity_one_keeps_only_newest() {
        let store = TempLogStore::new(scratch("single"), 3600);
        store.append(&entry_at(0, 40.0)).unwrap();
        store.append(&entry_at(3600, 50.0)).unwrap();
        let lines = store.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("50.0"));
    }

    #[test]
    fn reset_truncates() {
        let store = TempLogStore::new(scratch("reset"), 10);
        store.append(&entry_at(0, 40.0)).unwrap();
        store.reset().unwrap();
        assert!(store.lines().is_empty());
    }

    #[test]
    fn malformed_lines_are_carried_verbatim() {
        let path = scratch("malformed");
        fs::write(&path, "half-written garbag\n").unwrap();
        let store = TempLogStore::new(path, 10);
        store.append(&entry_at(0, 40.0)).unwrap();
        let lines = store.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "half-written garbag");
    }

    #[test]
    fn creates_parent_directory() {
        let dir = std::env::temp_dir().join("fc_store_test_subdir");
        let _ = fs::remove_dir_all(&dir);
        let store = TempLogStore::new(dir.join("log"), 10);
        store.append(&entry_at(0, 40.0)).unwrap();
        assert_eq!(store.lines().len(), 1);
    }
}
