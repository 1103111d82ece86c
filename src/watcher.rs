//! Directory change subscriptions using the notify crate.

use crate::error::{Error, Result};
use notify::event::ModifyKind;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::Path;
use tokio::sync::mpsc;

/// An open subscription to change notifications for one directory.
///
/// Events and backend errors arrive on separate single-consumer streams. The
/// subscription is owned by the caller and only borrowed by
/// [`TailWaiter::wait`](crate::TailWaiter::wait).
pub struct WatchSubscription {
    _watcher: Option<RecommendedWatcher>,
    events: mpsc::UnboundedReceiver<Event>,
    errors: mpsc::UnboundedReceiver<notify::Error>,
}

/// Sending half of a manually driven [`WatchSubscription`].
#[derive(Clone)]
pub struct SubscriptionFeed {
    events: mpsc::UnboundedSender<Event>,
    errors: mpsc::UnboundedSender<notify::Error>,
}

impl WatchSubscription {
    /// Subscribes to changes of the entries directly inside `dir`.
    pub fn watch_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (error_tx, error_rx) = mpsc::unbounded_channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    let _ = event_tx.send(event);
                }
                Err(e) => {
                    let _ = error_tx.send(e);
                }
            },
            Config::default(),
        )?;
        watcher.watch(dir.as_ref(), RecursiveMode::NonRecursive)?;

        Ok(Self {
            _watcher: Some(watcher),
            events: event_rx,
            errors: error_rx,
        })
    }

    /// Subscribes to the parent directory of `path` and returns the base name
    /// to wait on.
    pub fn watch_file_dir<P: AsRef<Path>>(path: P) -> Result<(Self, String)> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| Error::InvalidPath {
                message: format!("no file name in '{}'", path.display()),
            })?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        Ok((Self::watch_dir(dir)?, file_name))
    }

    /// Creates a subscription with no backing watcher. Whatever is pushed
    /// through the returned feed is what the subscription delivers.
    pub fn manual() -> (Self, SubscriptionFeed) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (error_tx, error_rx) = mpsc::unbounded_channel();

        let subscription = Self {
            _watcher: None,
            events: event_rx,
            errors: error_rx,
        };
        let feed = SubscriptionFeed {
            events: event_tx,
            errors: error_tx,
        };
        (subscription, feed)
    }

    /// Both receivers, borrowed together so a single `select!` can poll them.
    pub(crate) fn streams(
        &mut self,
    ) -> (
        &mut mpsc::UnboundedReceiver<Event>,
        &mut mpsc::UnboundedReceiver<notify::Error>,
    ) {
        (&mut self.events, &mut self.errors)
    }
}

impl SubscriptionFeed {
    pub fn send_event(&self, event: Event) -> Result<()> {
        self.events.send(event).map_err(|_| Error::SubscriptionClosed)
    }

    pub fn send_error(&self, error: notify::Error) -> Result<()> {
        self.errors.send(error).map_err(|_| Error::SubscriptionClosed)
    }
}

/// Operation kinds the waiter distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOp {
    Write,
    Rename,
    Create,
    Remove,
    Other,
}

impl From<&EventKind> for ChangeOp {
    fn from(kind: &EventKind) -> Self {
        match kind {
            EventKind::Modify(ModifyKind::Data(_)) | EventKind::Modify(ModifyKind::Any) => {
                ChangeOp::Write
            }
            EventKind::Modify(ModifyKind::Name(_)) => ChangeOp::Rename,
            EventKind::Create(_) => ChangeOp::Create,
            EventKind::Remove(_) => ChangeOp::Remove,
            _ => ChangeOp::Other,
        }
    }
}

/// Check if any path of a notify event has `target_file_name` as its base name
pub fn event_names_file(event: &Event, target_file_name: &str) -> bool {
    event.paths.iter().any(|path| {
        path.file_name()
            .map(|name| name.to_string_lossy() == target_file_name)
            .unwrap_or(false)
    })
}
