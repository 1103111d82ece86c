//! A rotation-aware wait primitive for tailing a single log file.
//!
//! The caller owns the open file and a [`WatchSubscription`] on the file's
//! directory, and calls [`TailWaiter::wait`] between reads to learn whether the
//! file grew, was rotated, or simply should be checked again.
//!
//! # Example
//!
//! ```rust,no_run
//! use log_tail::{WaitOutcome, WatchSubscription, wait_for_log_event};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (mut subscription, name) = WatchSubscription::watch_file_dir("app.log")?;
//!     let cancel = CancellationToken::new();
//!
//!     loop {
//!         match wait_for_log_event(&cancel, &name, &mut subscription).await? {
//!             WaitOutcome::Rotated => println!("reopen app.log from offset 0"),
//!             WaitOutcome::Written | WaitOutcome::IdleTimeout => println!("read more"),
//!         }
//!     }
//! }
//! ```

mod config;
mod error;
mod waiter;
mod watcher;

#[cfg(test)]
mod test_helpers;

// Public API exports
pub use config::TailConfig;
pub use error::{Error, Result};
pub use waiter::{TailWaiter, WaitOutcome};
pub use watcher::{ChangeOp, SubscriptionFeed, WatchSubscription, event_names_file};

use tokio_util::sync::CancellationToken;

/// Waits for the next event on `target_file_name` with the default
/// [`TailConfig`].
///
/// # Example
///
/// ```rust,no_run
/// use log_tail::{WatchSubscription, wait_for_log_event};
/// use tokio_util::sync::CancellationToken;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let (mut subscription, name) = WatchSubscription::watch_file_dir("/var/log/app.log")?;
///     let outcome = wait_for_log_event(&CancellationToken::new(), &name, &mut subscription).await?;
///     println!("{:?}", outcome);
///     Ok(())
/// }
/// ```
pub async fn wait_for_log_event(
    cancel: &CancellationToken,
    target_file_name: &str,
    subscription: &mut WatchSubscription,
) -> Result<WaitOutcome> {
    TailWaiter::default()
        .wait(cancel, target_file_name, subscription)
        .await
}
