// CleanSlate - platform/process.rs
//
// Narrow process-invocation seam: run an external command and capture its
// structured outcome (exit status + output). The cleanup operations only
// ever see this interface, so tests substitute a fake runner instead of
// requiring administrator rights or real system commands.

use std::io;
use std::process::Command;

/// Captured outcome of one command invocation.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code if the process terminated normally.
    pub code: Option<i32>,

    /// Whether the process exited with a success status.
    pub success: bool,

    /// Captured standard output, lossily decoded.
    pub stdout: String,

    /// Captured standard error, lossily decoded.
    pub stderr: String,
}

impl CommandOutput {
    /// The most useful human-readable fragment of the command's output:
    /// stderr if non-empty, otherwise stdout, trimmed either way.
    pub fn detail(&self) -> String {
        let text = if self.stderr.trim().is_empty() {
            self.stdout.trim()
        } else {
            self.stderr.trim()
        };
        text.to_string()
    }
}

/// Anything that can run a command to completion and capture its outcome.
///
/// `Send + Sync` so a single runner can be shared with the background
/// worker thread via `Arc`.
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, blocking until it exits.
    ///
    /// Returns `Err` only when the process could not be spawned (e.g. the
    /// binary does not exist); a command that runs and fails is an `Ok`
    /// with `success == false`.
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput>;
}

/// The real implementation: spawns the command via `std::process` with
/// captured stdio and waits for it to exit.
#[derive(Debug, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput> {
        tracing::debug!(program, ?args, "Running command");
        let output = Command::new(program).args(args).output()?;
        let result = CommandOutput {
            code: output.status.code(),
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        tracing::debug!(
            program,
            code = ?result.code,
            success = result.success,
            "Command finished"
        );
        Ok(result)
    }
}
