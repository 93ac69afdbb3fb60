// CleanSlate - core/sweep.rs
//
// Best-effort batch deletion. Iterates a target's entry set bottom-up,
// attempts every deletion independently, and accumulates failures into a
// bounded list -- never aborting the batch on the first failure. Lock
// contention from a running browser is an expected outcome here, not a bug.

use crate::core::model::SweepStats;
use crate::core::targets::{SweepScope, TargetSpec};
use crate::util::constants::{MAX_REPORTED_FAILED_PATHS, MAX_SWEEP_DEPTH};
use crate::util::error::{CleanupError, FailedPath};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Raw result of one sweep: counters plus the paths that remain.
#[derive(Debug, Default)]
pub struct SweepOutcome {
    pub stats: SweepStats,

    /// Undeletable paths, capped at MAX_REPORTED_FAILED_PATHS.
    pub failed: Vec<FailedPath>,

    /// Exact count of undeletable paths (never capped).
    pub total_failed: usize,
}

impl SweepOutcome {
    /// True when every targeted entry was removed (or nothing existed).
    pub fn is_clean(&self) -> bool {
        self.total_failed == 0
    }
}

/// Sweep a resolved target.
///
/// A missing root is a successful no-op: the data is already absent, and
/// repeating the call changes nothing (idempotence). Only a root that exists
/// but cannot be enumerated aborts the operation as a whole.
pub fn sweep_target(spec: &TargetSpec, dry_run: bool) -> Result<SweepOutcome, CleanupError> {
    let mut sweep = Sweep::new(dry_run);

    if !spec.root.exists() {
        tracing::debug!(root = %spec.root.display(), "Target root absent, nothing to sweep");
        return Ok(sweep.into_outcome());
    }

    match spec.scope {
        SweepScope::Entries(entries) => {
            for entry in entries {
                let path = spec.root.join(entry);
                if path.exists() {
                    sweep.remove_entry(&path);
                }
            }
        }
        SweepScope::AllContents => {
            let children = fs::read_dir(&spec.root).map_err(|e| CleanupError::Io {
                path: spec.root.clone(),
                operation: "read_dir",
                source: e,
            })?;
            for child in children {
                match child {
                    Ok(child) => sweep.remove_entry(&child.path()),
                    Err(e) => sweep.record_failure(&spec.root, &e),
                }
            }
        }
    }

    Ok(sweep.into_outcome())
}

/// State for one sweep pass.
struct Sweep {
    dry_run: bool,
    stats: SweepStats,
    failed: Vec<FailedPath>,
    total_failed: usize,

    /// Directories with a failed descendant. Their removal is skipped
    /// silently: they cannot be emptied, and the real blocker is already
    /// named in `failed`.
    blocked_dirs: HashSet<PathBuf>,
}

impl Sweep {
    fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            stats: SweepStats::default(),
            failed: Vec::new(),
            total_failed: 0,
            blocked_dirs: HashSet::new(),
        }
    }

    fn into_outcome(self) -> SweepOutcome {
        SweepOutcome {
            stats: self.stats,
            failed: self.failed,
            total_failed: self.total_failed,
        }
    }

    /// Remove one entry (file or directory tree), best-effort per item.
    ///
    /// Directories are walked contents-first so children are attempted
    /// before their parent; the entry itself is the last item yielded.
    fn remove_entry(&mut self, path: &Path) {
        let meta = match fs::symlink_metadata(path) {
            Ok(m) => m,
            Err(e) => {
                self.record_failure(path, &e);
                return;
            }
        };

        if !meta.is_dir() {
            self.remove_file(path, meta.len());
            return;
        }

        let walker = WalkDir::new(path)
            .contents_first(true)
            .max_depth(MAX_SWEEP_DEPTH);

        for item in walker {
            let item = match item {
                Ok(i) => i,
                Err(e) => {
                    let at = e
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| path.to_path_buf());
                    let reason = e.to_string();
                    self.record_failure_msg(&at, &reason);
                    continue;
                }
            };

            if item.file_type().is_dir() {
                if self.blocked_dirs.contains(item.path()) {
                    continue;
                }
                self.remove_dir(item.path());
            } else {
                let size = item.metadata().map(|m| m.len()).unwrap_or(0);
                self.remove_file(item.path(), size);
            }
        }
    }

    fn remove_file(&mut self, path: &Path, size: u64) {
        if self.dry_run {
            self.stats.removed += 1;
            self.stats.bytes_reclaimed += size;
            return;
        }
        match fs::remove_file(path) {
            Ok(()) => {
                self.stats.removed += 1;
                self.stats.bytes_reclaimed += size;
            }
            Err(e) => self.record_failure(path, &e),
        }
    }

    fn remove_dir(&mut self, path: &Path) {
        if self.dry_run {
            self.stats.removed += 1;
            return;
        }
        match fs::remove_dir(path) {
            Ok(()) => self.stats.removed += 1,
            Err(e) => self.record_failure(path, &e),
        }
    }

    fn record_failure(&mut self, path: &Path, err: &io::Error) {
        self.record_failure_msg(path, &err.to_string());
    }

    fn record_failure_msg(&mut self, path: &Path, reason: &str) {
        tracing::debug!(path = %path.display(), reason, "Could not remove");
        self.total_failed += 1;
        if self.failed.len() < MAX_REPORTED_FAILED_PATHS {
            self.failed.push(FailedPath {
                path: path.to_path_buf(),
                reason: reason.to_string(),
            });
        }
        // Every ancestor directory now has an undeletable descendant.
        let mut ancestor = path.parent();
        while let Some(dir) = ancestor {
            if !self.blocked_dirs.insert(dir.to_path_buf()) {
                break;
            }
            ancestor = dir.parent();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_file(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_missing_root_is_noop_success() {
        let dir = tempfile::tempdir().unwrap();
        let spec = TargetSpec {
            root: dir.path().join("does-not-exist"),
            scope: SweepScope::AllContents,
        };
        let outcome = sweep_target(&spec, false).unwrap();
        assert!(outcome.is_clean());
        assert_eq!(outcome.stats.removed, 0);
    }

    #[test]
    fn test_all_contents_empties_root_but_keeps_it() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("Profiles");
        write_file(&root.join("abc.default").join("cookies.sqlite"), "data");
        write_file(&root.join("xyz.dev").join("places.sqlite"), "data");

        let spec = TargetSpec {
            root: root.clone(),
            scope: SweepScope::AllContents,
        };
        let outcome = sweep_target(&spec, false).unwrap();

        assert!(outcome.is_clean());
        assert!(root.exists(), "root itself must be kept");
        assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
        // 2 files + 2 profile directories
        assert_eq!(outcome.stats.removed, 4);
        assert_eq!(outcome.stats.bytes_reclaimed, 8);
    }

    #[test]
    fn test_named_entries_leave_unlisted_siblings() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_path_buf();
        write_file(&root.join("History"), "h");
        write_file(&root.join("Cache").join("f_0001"), "c");
        write_file(&root.join("Preferences"), "keep me");

        let spec = TargetSpec {
            root: root.clone(),
            scope: SweepScope::Entries(&["History", "Cookies", "Cache"]),
        };
        let outcome = sweep_target(&spec, false).unwrap();

        assert!(outcome.is_clean());
        assert!(!root.join("History").exists());
        assert!(!root.join("Cache").exists());
        assert!(root.join("Preferences").exists());
    }

    #[test]
    fn test_dry_run_counts_without_deleting() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_path_buf();
        write_file(&root.join("History"), "12345");

        let spec = TargetSpec {
            root: root.clone(),
            scope: SweepScope::Entries(&["History"]),
        };
        let outcome = sweep_target(&spec, true).unwrap();

        assert!(outcome.is_clean());
        assert_eq!(outcome.stats.removed, 1);
        assert_eq!(outcome.stats.bytes_reclaimed, 5);
        assert!(root.join("History").exists(), "dry run must not delete");
    }

    /// Check that a read-only directory actually blocks unlinking on this
    /// host. Root bypasses permission checks entirely, so tests simulating
    /// locked paths this way must skip when run as root.
    #[cfg(unix)]
    fn read_only_dirs_enforced(base: &Path) -> bool {
        use std::os::unix::fs::PermissionsExt;

        let probe_dir = base.join("probe-dir");
        write_file(&probe_dir.join("probe"), "x");
        fs::set_permissions(&probe_dir, fs::Permissions::from_mode(0o555)).unwrap();
        let enforced = fs::remove_file(probe_dir.join("probe")).is_err();
        fs::set_permissions(&probe_dir, fs::Permissions::from_mode(0o755)).unwrap();
        fs::remove_dir_all(&probe_dir).unwrap();
        enforced
    }

    #[cfg(unix)]
    #[test]
    fn test_partial_failure_names_exactly_the_locked_paths() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        if !read_only_dirs_enforced(dir.path()) {
            eprintln!("skipping: running as root, cannot simulate locked paths");
            return;
        }

        let root = dir.path().join("Profiles");
        write_file(&root.join("free-1.txt"), "a");
        write_file(&root.join("free-2.txt"), "b");
        let locked_dir = root.join("locked");
        write_file(&locked_dir.join("pinned-1.db"), "c");
        write_file(&locked_dir.join("pinned-2.db"), "d");
        // A read-only directory forbids unlinking its children.
        fs::set_permissions(&locked_dir, fs::Permissions::from_mode(0o555)).unwrap();

        let spec = TargetSpec {
            root: root.clone(),
            scope: SweepScope::AllContents,
        };
        let outcome = sweep_target(&spec, false).unwrap();

        // Restore permissions so the tempdir can be cleaned up.
        fs::set_permissions(&locked_dir, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(!root.join("free-1.txt").exists());
        assert!(!root.join("free-2.txt").exists());
        assert_eq!(outcome.stats.removed, 2);

        // Exactly the two pinned files are named; the blocked parent
        // directory is not reported as extra noise.
        assert_eq!(outcome.total_failed, 2);
        let mut failed: Vec<_> = outcome
            .failed
            .iter()
            .map(|f| f.path.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        failed.sort();
        assert_eq!(failed, vec!["pinned-1.db", "pinned-2.db"]);
    }
}
