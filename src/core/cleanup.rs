// CleanSlate - core/cleanup.rs
//
// The two sweep operations: clear a browser's profile data and sign out of
// a desktop application. Both are stateless and idempotent; both treat a
// missing target as success and lock contention as a collected, non-fatal
// partial failure.

use crate::core::model::{Browser, CleanupEnv, DesktopApp, Platform, SweepStats};
use crate::core::sweep::{self, SweepOutcome};
use crate::core::targets;
use crate::util::error::{CleanupError, Result};

/// Delete the stored profile data (cache, cookies, history, saved logins)
/// for one browser.
///
/// `browser_id` must be one of the known identifiers; anything else is a
/// caller error reported as `UnsupportedTarget` with no file-system
/// mutation. The target browser should be closed first -- a running browser
/// holds locks that turn into a `PathsLocked` failure.
pub fn clear_browser_data(browser_id: &str, env: &CleanupEnv) -> Result<SweepStats> {
    let browser =
        Browser::from_id(browser_id).ok_or_else(|| CleanupError::UnsupportedTarget {
            id: browser_id.to_string(),
        })?;

    tracing::info!(browser = browser.id(), dry_run = env.dry_run, "Clearing browser data");

    let spec = targets::browser_target(browser, env.platform, &env.home);
    finish(sweep::sweep_target(&spec, env.dry_run)?)
}

/// Sign the user out of a desktop application by deleting its stored
/// session/credential files. The user must re-authenticate on next launch.
pub fn sign_out(app_id: &str, env: &CleanupEnv) -> Result<SweepStats> {
    let app = DesktopApp::from_id(app_id).ok_or_else(|| CleanupError::UnsupportedTarget {
        id: app_id.to_string(),
    })?;

    tracing::info!(app = app.id(), dry_run = env.dry_run, "Signing out");

    let spec = targets::app_session_target(app, env.platform, &env.home);
    let outcome = sweep::sweep_target(&spec, env.dry_run)?;

    // On Windows the matching Credential Manager entries are removed too.
    // Strictly best-effort: most of the targets will not exist on a given
    // machine and cmdkey reports that as a failure, so nothing here can
    // change the operation outcome.
    if env.platform == Platform::Windows && !env.dry_run {
        for target in targets::WINDOWS_CREDENTIAL_TARGETS {
            let arg = format!("/delete:{target}");
            match env.runner.run("cmdkey", &[&arg]) {
                Ok(output) if output.success => {
                    tracing::debug!(target, "Removed credential manager entry");
                }
                Ok(output) => {
                    tracing::debug!(target, detail = %output.detail(), "No credential entry removed");
                }
                Err(e) => {
                    tracing::debug!(target, error = %e, "cmdkey unavailable");
                }
            }
        }
    }

    finish(outcome)
}

/// Convert a raw sweep outcome into the operation result: success only if
/// every targeted item was removed, otherwise a failure naming the subset
/// that remains.
fn finish(outcome: SweepOutcome) -> Result<SweepStats> {
    if outcome.is_clean() {
        tracing::info!(
            removed = outcome.stats.removed,
            bytes = outcome.stats.bytes_reclaimed,
            "Sweep complete"
        );
        Ok(outcome.stats)
    } else {
        tracing::warn!(
            removed = outcome.stats.removed,
            failed = outcome.total_failed,
            "Sweep left paths behind"
        );
        Err(CleanupError::PathsLocked {
            removed: outcome.stats.removed,
            failed: outcome.failed,
            total_failed: outcome.total_failed,
        })
    }
}
