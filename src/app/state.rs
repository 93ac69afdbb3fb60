// CleanSlate - app/state.rs
//
// Application state: the immutable cleanup environment, validated config,
// bounded report history, and UI flags. Owned by the eframe::App
// implementation.

use crate::core::model::{Browser, CleanupEnv, CleanupReport, DesktopApp, TaskKind};
use crate::platform::config::AppConfig;
use crate::util::constants::MAX_REPORTS_KEPT;

/// Top-level application state.
pub struct AppState {
    /// Immutable environment for every operation (platform, home, runner).
    pub env: CleanupEnv,

    /// Validated configuration.
    pub config: AppConfig,

    /// Non-fatal warnings from config loading, shown once in the results
    /// panel until dismissed.
    pub config_warnings: Vec<String>,

    /// Browsers offered in the GUI, resolved from the config's id list.
    pub browsers: Vec<Browser>,

    /// Whether a cleanup batch is in flight (mirrors TaskRunner::is_busy;
    /// panels read this to disable their controls).
    pub busy: bool,

    /// Status bar message.
    pub status_message: String,

    /// History of completed operations, newest last, bounded.
    pub reports: Vec<CleanupReport>,

    /// A batch requested by a panel this frame, consumed by the App loop.
    pub pending_batch: Option<Vec<TaskKind>>,

    /// Whether the About dialog is open.
    pub show_about: bool,
}

impl AppState {
    /// Create initial state from the resolved environment and config.
    pub fn new(env: CleanupEnv, config: AppConfig, config_warnings: Vec<String>) -> Self {
        let browsers = config
            .browsers
            .iter()
            .filter_map(|id| Browser::from_id(id))
            .collect();

        let status_message = if env.dry_run {
            "Ready (dry run: nothing will be deleted).".to_string()
        } else {
            "Ready.".to_string()
        };

        Self {
            env,
            config,
            config_warnings,
            browsers,
            busy: false,
            status_message,
            reports: Vec::new(),
            pending_batch: None,
            show_about: false,
        }
    }

    /// Append a report, discarding the oldest when the history is full.
    pub fn push_report(&mut self, report: CleanupReport) {
        if self.reports.len() >= MAX_REPORTS_KEPT {
            self.reports.remove(0);
        }
        self.reports.push(report);
    }

    /// The batch for the "Run All" action: flush DNS, clear every enabled
    /// browser, sign out of every supported application -- in that order.
    pub fn run_all_batch(&self) -> Vec<TaskKind> {
        let mut batch = vec![TaskKind::FlushDns];
        for browser in &self.browsers {
            batch.push(TaskKind::ClearBrowser {
                id: browser.id().to_string(),
            });
        }
        for app in DesktopApp::all() {
            batch.push(TaskKind::SignOut {
                id: app.id().to_string(),
            });
        }
        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Platform, SweepStats};
    use crate::platform::process::SystemCommandRunner;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn test_state() -> AppState {
        let env = CleanupEnv {
            platform: Platform::Linux,
            home: PathBuf::from("/nonexistent"),
            dry_run: false,
            runner: Arc::new(SystemCommandRunner),
        };
        let config = AppConfig {
            browsers: vec!["chrome".to_string(), "firefox".to_string()],
            dark_mode: true,
            log_level: None,
        };
        AppState::new(env, config, Vec::new())
    }

    #[test]
    fn test_browsers_resolved_from_config_ids() {
        let state = test_state();
        assert_eq!(state.browsers, vec![Browser::Chrome, Browser::Firefox]);
    }

    #[test]
    fn test_run_all_batch_order() {
        let state = test_state();
        let batch = state.run_all_batch();
        assert_eq!(batch[0], TaskKind::FlushDns);
        assert_eq!(
            batch[1],
            TaskKind::ClearBrowser {
                id: "chrome".to_string()
            }
        );
        assert_eq!(
            batch[2],
            TaskKind::ClearBrowser {
                id: "firefox".to_string()
            }
        );
        assert_eq!(
            batch[3],
            TaskKind::SignOut {
                id: "github-desktop".to_string()
            }
        );
    }

    #[test]
    fn test_report_history_is_bounded() {
        let mut state = test_state();
        for i in 0..(MAX_REPORTS_KEPT + 5) {
            state.push_report(CleanupReport {
                kind: TaskKind::ClearBrowser {
                    id: format!("chrome-{i}"),
                },
                outcome: Ok(SweepStats::default()),
                finished_at: chrono::Utc::now(),
                duration: std::time::Duration::from_millis(1),
                dry_run: false,
            });
        }
        assert_eq!(state.reports.len(), MAX_REPORTS_KEPT);
        // The oldest reports were discarded from the front.
        match &state.reports[0].kind {
            TaskKind::ClearBrowser { id } => assert_eq!(id, "chrome-5"),
            other => panic!("unexpected kind {other:?}"),
        }
    }
}
