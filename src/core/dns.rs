// CleanSlate - core/dns.rs
//
// DNS resolver cache flush. One platform-specific command sequence, run
// through the CommandRunner seam; exit status and captured output are the
// only data consumed. The flush affects the whole OS, not just this process.

use crate::core::model::{CleanupEnv, Platform};
use crate::util::error::{CleanupError, Result};
use std::io;

/// Output fragments that identify an elevation refusal across the supported
/// platforms' flush commands. Matched case-insensitively against the
/// command's combined output.
const PRIVILEGE_MARKERS: &[&str] = &[
    "access is denied",
    "permission denied",
    "operation not permitted",
    "requires elevation",
    "must be run as root",
    "not authorized",
];

/// Flush the operating system's DNS resolver cache.
///
/// Success means every command in the platform sequence exited zero. There
/// is no retry: a privilege failure can only be fixed by re-running the
/// application elevated, and the caller surfaces that to the user.
pub fn flush_dns(env: &CleanupEnv) -> Result<()> {
    match env.platform {
        Platform::Windows => run_flush(env, "ipconfig", &["/flushdns"]),
        Platform::MacOs => {
            // Two-step sequence: drop the directory-services cache, then
            // signal mDNSResponder to reload.
            run_flush(env, "dscacheutil", &["-flushcache"])?;
            run_flush(env, "killall", &["-HUP", "mDNSResponder"])
        }
        Platform::Linux => {
            // resolvectl is the current systemd tool; older installations
            // only ship the systemd-resolve compatibility name.
            match run_flush(env, "resolvectl", &["flush-caches"]) {
                Err(CleanupError::CommandNotFound { .. }) => {
                    tracing::debug!("resolvectl not found, trying systemd-resolve");
                    run_flush(env, "systemd-resolve", &["--flush-caches"])
                }
                other => other,
            }
        }
    }
}

/// Run a single flush command and classify its outcome.
fn run_flush(env: &CleanupEnv, program: &str, args: &[&str]) -> Result<()> {
    if env.dry_run {
        tracing::info!(program, ?args, "Dry run: would flush DNS cache");
        return Ok(());
    }

    let output = match env.runner.run(program, args) {
        Ok(output) => output,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(CleanupError::CommandNotFound {
                command: program.to_string(),
            });
        }
        Err(e) => {
            return Err(CleanupError::CommandFailed {
                command: program.to_string(),
                code: None,
                detail: e.to_string(),
            });
        }
    };

    if output.success {
        tracing::info!(program, "DNS flush command succeeded");
        return Ok(());
    }

    let detail = output.detail();
    let lowered = detail.to_lowercase();
    if PRIVILEGE_MARKERS.iter().any(|m| lowered.contains(m)) {
        return Err(CleanupError::PrivilegeDenied {
            command: program.to_string(),
            detail,
        });
    }

    Err(CleanupError::CommandFailed {
        command: program.to_string(),
        code: output.code,
        detail,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::process::{CommandOutput, CommandRunner};
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    /// Scripted fake runner: records every invocation and replays a fixed
    /// response per program name.
    struct FakeRunner {
        calls: Mutex<Vec<String>>,
        responses: Vec<(&'static str, io::Result<CommandOutput>)>,
    }

    impl FakeRunner {
        fn new(responses: Vec<(&'static str, io::Result<CommandOutput>)>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                responses,
            }
        }

        fn ok() -> io::Result<CommandOutput> {
            Ok(CommandOutput {
                code: Some(0),
                success: true,
                stdout: String::new(),
                stderr: String::new(),
            })
        }

        fn denied() -> io::Result<CommandOutput> {
            Ok(CommandOutput {
                code: Some(1),
                success: false,
                stdout: String::new(),
                stderr: "The requested operation requires elevation.\n".to_string(),
            })
        }

        fn not_found() -> io::Result<CommandOutput> {
            Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("{program} {}", args.join(" ")));
            for (name, response) in &self.responses {
                if *name == program {
                    return match response {
                        Ok(out) => Ok(out.clone()),
                        Err(e) => Err(io::Error::new(e.kind(), e.to_string())),
                    };
                }
            }
            panic!("unexpected command: {program}");
        }
    }

    fn env_with(platform: Platform, runner: FakeRunner) -> (CleanupEnv, Arc<FakeRunner>) {
        let runner = Arc::new(runner);
        let env = CleanupEnv {
            platform,
            home: PathBuf::from("/nonexistent"),
            dry_run: false,
            runner: runner.clone(),
        };
        (env, runner)
    }

    #[test]
    fn test_windows_flush_runs_ipconfig() {
        let (env, runner) = env_with(
            Platform::Windows,
            FakeRunner::new(vec![("ipconfig", FakeRunner::ok())]),
        );
        flush_dns(&env).unwrap();
        assert_eq!(
            runner.calls.lock().unwrap().as_slice(),
            ["ipconfig /flushdns"]
        );
    }

    #[test]
    fn test_macos_flush_runs_both_commands_in_order() {
        let (env, runner) = env_with(
            Platform::MacOs,
            FakeRunner::new(vec![
                ("dscacheutil", FakeRunner::ok()),
                ("killall", FakeRunner::ok()),
            ]),
        );
        flush_dns(&env).unwrap();
        assert_eq!(
            runner.calls.lock().unwrap().as_slice(),
            ["dscacheutil -flushcache", "killall -HUP mDNSResponder"]
        );
    }

    #[test]
    fn test_linux_falls_back_to_systemd_resolve() {
        let (env, runner) = env_with(
            Platform::Linux,
            FakeRunner::new(vec![
                ("resolvectl", FakeRunner::not_found()),
                ("systemd-resolve", FakeRunner::ok()),
            ]),
        );
        flush_dns(&env).unwrap();
        assert_eq!(
            runner.calls.lock().unwrap().as_slice(),
            ["resolvectl flush-caches", "systemd-resolve --flush-caches"]
        );
    }

    #[test]
    fn test_elevation_refusal_is_privilege_denied() {
        let (env, _) = env_with(
            Platform::Windows,
            FakeRunner::new(vec![("ipconfig", FakeRunner::denied())]),
        );
        match flush_dns(&env) {
            Err(CleanupError::PrivilegeDenied { command, .. }) => {
                assert_eq!(command, "ipconfig");
            }
            other => panic!("expected PrivilegeDenied, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_command_everywhere_is_command_not_found() {
        let (env, _) = env_with(
            Platform::Linux,
            FakeRunner::new(vec![
                ("resolvectl", FakeRunner::not_found()),
                ("systemd-resolve", FakeRunner::not_found()),
            ]),
        );
        assert!(matches!(
            flush_dns(&env),
            Err(CleanupError::CommandNotFound { .. })
        ));
    }

    #[test]
    fn test_other_nonzero_exit_is_command_failed_with_code() {
        let (env, _) = env_with(
            Platform::Linux,
            FakeRunner::new(vec![(
                "resolvectl",
                Ok(CommandOutput {
                    code: Some(4),
                    success: false,
                    stdout: String::new(),
                    stderr: "Failed to flush caches: unit not active\n".to_string(),
                }),
            )]),
        );
        match flush_dns(&env) {
            Err(CleanupError::CommandFailed { code, detail, .. }) => {
                assert_eq!(code, Some(4));
                assert!(detail.contains("unit not active"));
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_dry_run_spawns_nothing() {
        let runner = Arc::new(FakeRunner::new(vec![]));
        let env = CleanupEnv {
            platform: Platform::Windows,
            home: PathBuf::from("/nonexistent"),
            dry_run: true,
            runner: runner.clone(),
        };
        flush_dns(&env).unwrap();
        assert!(runner.calls.lock().unwrap().is_empty());
    }
}
