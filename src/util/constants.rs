// CleanSlate - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "CleanSlate";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "CleanSlate";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Sweep limits
// =============================================================================

/// Maximum number of undeletable paths named in a single PathsLocked failure.
///
/// A sweep over a profile directory can fail for thousands of files at once
/// (e.g. the browser is running and holds its whole cache open). The detail
/// list is capped so the failure value stays a bounded collection; the total
/// failure count is always tracked exactly alongside it.
pub const MAX_REPORTED_FAILED_PATHS: usize = 200;

/// Maximum directory recursion depth during a sweep.
/// Profile trees are shallow; this bound only guards against symlink cycles
/// and pathological nesting.
pub const MAX_SWEEP_DEPTH: usize = 32;

// =============================================================================
// UI limits and defaults
// =============================================================================

/// Maximum number of cleanup reports kept in the results history.
/// Older reports are discarded from the front when the cap is reached.
pub const MAX_REPORTS_KEPT: usize = 50;

/// Maximum number of failed paths rendered per report in the results panel.
/// The report itself may carry more (up to MAX_REPORTED_FAILED_PATHS); the
/// panel shows a "+N more" line for the remainder.
pub const MAX_FAILED_PATHS_SHOWN: usize = 20;

/// Maximum number of progress messages processed by the UI update loop per
/// frame. Remaining messages are left in the channel for subsequent frames.
pub const MAX_TASK_MESSAGES_PER_FRAME: usize = 50;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
