// CleanSlate - core/model.rs
//
// Core data model types: the host platform, the closed sets of cleanup
// targets, the immutable operation environment, and the report/progress
// types that flow to the presentation layer.

use crate::platform::process::CommandRunner;
use crate::util::error::CleanupError;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

// =============================================================================
// Platform
// =============================================================================

/// The host operating system, detected once at startup and carried through
/// `CleanupEnv` -- never re-detected per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    /// Detect the compile-target platform. Returns `None` on operating
    /// systems this tool has no path conventions or flush command for;
    /// the binary refuses to start in that case rather than producing
    /// operations that can only ever fail.
    pub fn detect() -> Option<Platform> {
        if cfg!(target_os = "windows") {
            Some(Platform::Windows)
        } else if cfg!(target_os = "macos") {
            Some(Platform::MacOs)
        } else if cfg!(target_os = "linux") {
            Some(Platform::Linux)
        } else {
            None
        }
    }

    /// Human-readable label for display and logging.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::MacOs => "macOS",
            Platform::Linux => "Linux",
        }
    }

    /// Whether the DNS flush command on this platform requires elevated
    /// rights. The GUI surfaces this next to the flush button before the
    /// user triggers it.
    pub fn flush_needs_elevation(&self) -> bool {
        matches!(self, Platform::Windows)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Cleanup targets (closed sets)
// =============================================================================

/// The browsers whose profile data this tool knows how to clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Browser {
    Chrome,
    Edge,
    Firefox,
}

impl Browser {
    /// All supported browsers, in display order.
    pub fn all() -> &'static [Browser] {
        &[Browser::Chrome, Browser::Edge, Browser::Firefox]
    }

    /// Stable machine identifier used at the API boundary and in config.
    pub fn id(&self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Edge => "edge",
            Browser::Firefox => "firefox",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Browser::Chrome => "Google Chrome",
            Browser::Edge => "Microsoft Edge",
            Browser::Firefox => "Mozilla Firefox",
        }
    }

    /// Look up a browser by its stable identifier (case-insensitive).
    pub fn from_id(id: &str) -> Option<Browser> {
        Browser::all()
            .iter()
            .copied()
            .find(|b| b.id().eq_ignore_ascii_case(id.trim()))
    }
}

/// The desktop applications this tool can sign out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DesktopApp {
    GithubDesktop,
}

impl DesktopApp {
    /// All supported applications, in display order.
    pub fn all() -> &'static [DesktopApp] {
        &[DesktopApp::GithubDesktop]
    }

    /// Stable machine identifier used at the API boundary.
    pub fn id(&self) -> &'static str {
        match self {
            DesktopApp::GithubDesktop => "github-desktop",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            DesktopApp::GithubDesktop => "GitHub Desktop",
        }
    }

    /// Look up an application by its stable identifier (case-insensitive).
    pub fn from_id(id: &str) -> Option<DesktopApp> {
        DesktopApp::all()
            .iter()
            .copied()
            .find(|a| a.id().eq_ignore_ascii_case(id.trim()))
    }
}

// =============================================================================
// Operation environment
// =============================================================================

/// Immutable environment shared by every cleanup operation.
///
/// Built once in `main` and cloned into the background worker; operations
/// receive it by reference and mutate nothing.
#[derive(Clone)]
pub struct CleanupEnv {
    /// Host platform, detected once at startup.
    pub platform: Platform,

    /// The current user's home directory. Injected rather than resolved
    /// inside the operations so tests can point it at a fixture tree.
    pub home: PathBuf,

    /// When true, operations report what they would remove without
    /// touching the file system or spawning commands.
    pub dry_run: bool,

    /// Process-invocation seam for the DNS flush and credential-manager
    /// commands. Tests substitute a fake.
    pub runner: Arc<dyn CommandRunner>,
}

impl std::fmt::Debug for CleanupEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CleanupEnv")
            .field("platform", &self.platform)
            .field("home", &self.home)
            .field("dry_run", &self.dry_run)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Operation results
// =============================================================================

/// Counters for a completed (or previewed) sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Number of file-system entries removed (files and directories).
    pub removed: usize,

    /// Total size in bytes of the removed files.
    pub bytes_reclaimed: u64,
}

/// Which operation a task or report refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    FlushDns,
    ClearBrowser { id: String },
    SignOut { id: String },
}

impl TaskKind {
    /// Human-readable label for the status bar and results panel.
    pub fn label(&self) -> String {
        match self {
            TaskKind::FlushDns => "Flush DNS cache".to_string(),
            TaskKind::ClearBrowser { id } => match Browser::from_id(id) {
                Some(b) => format!("Clear {} data", b.label()),
                None => format!("Clear browser data ({id})"),
            },
            TaskKind::SignOut { id } => match DesktopApp::from_id(id) {
                Some(a) => format!("Sign out of {}", a.label()),
                None => format!("Sign out ({id})"),
            },
        }
    }
}

/// The outcome of one operation invocation, consumed by the results panel.
/// Created fresh per invocation; kept only in a bounded in-memory history.
#[derive(Debug)]
pub struct CleanupReport {
    /// The operation that produced this report.
    pub kind: TaskKind,

    /// Success with sweep counters, or the typed failure.
    pub outcome: Result<SweepStats, CleanupError>,

    /// When the operation finished.
    pub finished_at: DateTime<Utc>,

    /// Wall-clock duration of the operation.
    pub duration: Duration,

    /// Whether this was a dry run (stats are a preview, nothing was removed).
    pub dry_run: bool,
}

// =============================================================================
// Task progress (background worker → UI)
// =============================================================================

/// Progress messages sent from the worker thread to the UI thread.
#[derive(Debug)]
pub enum TaskProgress {
    /// An operation in the batch has started.
    Started { kind: TaskKind },

    /// An operation has finished, successfully or not.
    Completed { report: CleanupReport },

    /// The whole batch is done; the worker thread is exiting.
    /// Receipt of this message is what clears the busy flag.
    Finished,
}

// =============================================================================
// Byte formatting
// =============================================================================

/// Format a byte count for display (e.g. "10.50 MB", "512 bytes").
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    match bytes {
        b if b >= GB => format!("{:.2} GB", b as f64 / GB as f64),
        b if b >= MB => format!("{:.2} MB", b as f64 / MB as f64),
        b if b >= KB => format!("{:.2} KB", b as f64 / KB as f64),
        b => format!("{b} bytes"),
    }
}
