// CleanSlate - app/runner.rs
//
// Background execution of cleanup batches. One worker thread at a time runs
// the requested operations strictly in order, sending progress messages to
// the UI thread via an mpsc channel.
//
// Serialisation is the one concurrency requirement in this tool: two sweeps
// must never interleave over overlapping paths. `start` therefore refuses
// while a batch is in flight, and the busy flag clears only when the
// `Finished` message has been polled. Operations are not cancellable and
// have no timeout; each blocks the worker for its full duration.

use crate::core::cleanup;
use crate::core::dns;
use crate::core::model::{CleanupEnv, CleanupReport, SweepStats, TaskKind, TaskProgress};
use crate::util::constants::MAX_TASK_MESSAGES_PER_FRAME;
use std::sync::mpsc;
use std::time::Instant;

/// Manages one cleanup batch on a background thread.
pub struct TaskRunner {
    /// Channel receiver for the UI to poll progress messages.
    progress_rx: Option<mpsc::Receiver<TaskProgress>>,

    /// True from a successful `start` until `Finished` has been polled.
    busy: bool,
}

impl TaskRunner {
    pub fn new() -> Self {
        Self {
            progress_rx: None,
            busy: false,
        }
    }

    /// Whether a batch is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Start a batch of operations.
    ///
    /// Returns false without doing anything if a batch is already running
    /// (the caller keeps its controls disabled in that case) or if the
    /// batch is empty. Otherwise spawns the worker thread immediately.
    pub fn start(&mut self, batch: Vec<TaskKind>, env: CleanupEnv) -> bool {
        if self.busy {
            tracing::warn!("Refusing to start a batch while another is in flight");
            return false;
        }
        if batch.is_empty() {
            return false;
        }

        let (tx, rx) = mpsc::channel();
        self.progress_rx = Some(rx);
        self.busy = true;

        tracing::info!(operations = batch.len(), "Cleanup batch started");
        std::thread::spawn(move || run_batch(batch, env, tx));
        true
    }

    /// Poll for progress messages without blocking.
    ///
    /// Returns up to MAX_TASK_MESSAGES_PER_FRAME pending messages; any
    /// remainder is picked up on subsequent frames. Seeing `Finished`
    /// clears the busy flag.
    pub fn poll_progress(&mut self) -> Vec<TaskProgress> {
        let mut messages = Vec::new();
        if let Some(ref rx) = self.progress_rx {
            while messages.len() < MAX_TASK_MESSAGES_PER_FRAME {
                match rx.try_recv() {
                    Ok(msg) => {
                        if matches!(msg, TaskProgress::Finished) {
                            self.busy = false;
                        }
                        messages.push(msg);
                    }
                    Err(_) => break,
                }
            }
        }
        messages
    }
}

impl Default for TaskRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Execute the batch sequentially on the worker thread.
fn run_batch(batch: Vec<TaskKind>, env: CleanupEnv, tx: mpsc::Sender<TaskProgress>) {
    macro_rules! send {
        ($msg:expr) => {
            if tx.send($msg).is_err() {
                return; // Receiver dropped (UI closed); exit quietly.
            }
        };
    }

    for kind in batch {
        send!(TaskProgress::Started { kind: kind.clone() });

        let started = Instant::now();
        let outcome = match &kind {
            TaskKind::FlushDns => dns::flush_dns(&env).map(|()| SweepStats::default()),
            TaskKind::ClearBrowser { id } => cleanup::clear_browser_data(id, &env),
            TaskKind::SignOut { id } => cleanup::sign_out(id, &env),
        };

        let report = CleanupReport {
            kind,
            outcome,
            finished_at: chrono::Utc::now(),
            duration: started.elapsed(),
            dry_run: env.dry_run,
        };
        send!(TaskProgress::Completed { report });
    }

    send!(TaskProgress::Finished);
    tracing::info!("Cleanup batch finished");
}
