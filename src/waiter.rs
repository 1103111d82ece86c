//! Waiting for the next event on a tailed log file.

use crate::config::TailConfig;
use crate::error::{Error, Result};
use crate::watcher::{ChangeOp, WatchSubscription, event_names_file};
use notify::Event;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// What ended a successful [`TailWaiter::wait`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The tailed file was written to. Read on from the current offset.
    Written,
    /// A file with the tailed name was renamed or created. Reopen it by name
    /// and read from offset zero.
    Rotated,
    /// Nothing arrived within the force-check period. Try a read anyway.
    IdleTimeout,
}

impl WaitOutcome {
    pub fn is_rotated(&self) -> bool {
        matches!(self, WaitOutcome::Rotated)
    }
}

/// Blocks until the tailed file changes, is rotated, the force-check period
/// passes, or the caller cancels.
#[derive(Debug, Clone, Default)]
pub struct TailWaiter {
    config: TailConfig,
}

impl TailWaiter {
    pub fn new(config: TailConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TailConfig {
        &self.config
    }

    /// Waits for the next event relevant to `target_file_name`.
    ///
    /// `target_file_name` is a base name, compared against the file names of
    /// event paths. Events for other files, removals and metadata changes are
    /// skipped. Up to `retry_budget - 1` watcher errors are skipped as well;
    /// the error that exhausts the budget is returned. The budget starts over
    /// on every call.
    ///
    /// Returns [`Error::Cancelled`] as soon as `cancel` fires. The caller should
    /// stop tailing after any `Err`.
    pub async fn wait(
        &self,
        cancel: &CancellationToken,
        target_file_name: &str,
        subscription: &mut WatchSubscription,
    ) -> Result<WaitOutcome> {
        let mut retries_left = self.config.retry_budget;
        let idle = tokio::time::sleep(self.config.force_check_period());
        tokio::pin!(idle);

        let (events, errors) = subscription.streams();

        loop {
            // A closed stream fails its pattern and drops out of this round.
            tokio::select! {
                biased;

                _ = cancel.cancelled() => {
                    return Err(Error::Cancelled);
                }

                Some(event) = events.recv() => {
                    match outcome_for(&event, target_file_name) {
                        Some(outcome) => {
                            trace!(?outcome, paths = ?event.paths, "tail wait finished");
                            return Ok(outcome);
                        }
                        None => {
                            debug!(kind = ?event.kind, paths = ?event.paths, "ignoring unrelated watch event");
                        }
                    }
                }

                Some(error) = errors.recv() => {
                    retries_left -= 1;
                    if retries_left == 0 {
                        return Err(Error::RetriesExhausted {
                            retries: self.config.retry_budget,
                            source: error,
                        });
                    }
                    debug!(retries_left, error = %error, "file watcher error, retrying");
                }

                _ = &mut idle => {
                    trace!(file = target_file_name, "force check period elapsed");
                    return Ok(WaitOutcome::IdleTimeout);
                }
            }
        }
    }
}

/// Rename and create are treated alike: either side of a rotation naming the
/// target counts.
fn outcome_for(event: &Event, target_file_name: &str) -> Option<WaitOutcome> {
    if !event_names_file(event, target_file_name) {
        return None;
    }
    match ChangeOp::from(&event.kind) {
        ChangeOp::Write => Some(WaitOutcome::Written),
        ChangeOp::Rename | ChangeOp::Create => Some(WaitOutcome::Rotated),
        ChangeOp::Remove | ChangeOp::Other => None,
    }
}
