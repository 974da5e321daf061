//! Observer hooks for file I/O outcomes.
//!
//! The transform layer never logs; pipelines that want visibility into their load/save
//! boundary attach an [`IoObserver`] through [`super::unified::IoOptions`]. Every outcome —
//! a completed load, a completed save, or a failure of either — is delivered as a single
//! [`IoEvent`], so implementors provide one method.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ReshapeError;

/// Severity of a failed I/O operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IoSeverity {
    /// The file was reachable but its content could not be used.
    Error,
    /// Infrastructure failure (missing file, permissions, disk).
    Critical,
}

/// Which operation an event concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOperation {
    /// Reading records in.
    Load,
    /// Writing records out.
    Save,
}

/// Context for one observed I/O call.
#[derive(Debug, Clone)]
pub struct IoContext {
    /// The file path the operation ran against.
    pub path: PathBuf,
    /// Whether this was a load or a save.
    pub operation: IoOperation,
}

/// One observable outcome.
#[derive(Debug)]
pub enum IoEvent<'a> {
    /// A load completed with this many records.
    Loaded { records: usize },
    /// A save wrote the file.
    Saved,
    /// The operation failed. `alert` is set when the severity met the configured
    /// alert threshold.
    Failed {
        severity: IoSeverity,
        error: &'a ReshapeError,
        alert: bool,
    },
}

/// Observer interface for I/O outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait IoObserver: Send + Sync {
    /// Called once per load or save attempt, success or failure.
    fn observe(&self, ctx: &IoContext, event: &IoEvent<'_>);
}

/// Renders an event as a single log line (without timestamp).
fn render(ctx: &IoContext, event: &IoEvent<'_>) -> String {
    let op = match ctx.operation {
        IoOperation::Load => "load",
        IoOperation::Save => "save",
    };
    match event {
        IoEvent::Loaded { records } => {
            format!("[{op}][ok] path={} records={records}", ctx.path.display())
        }
        IoEvent::Saved => format!("[{op}][ok] path={}", ctx.path.display()),
        IoEvent::Failed {
            severity,
            error,
            alert,
        } => {
            let tag = if *alert { "ALERT" } else { "fail" };
            format!(
                "[{op}][{tag}][{severity:?}] path={} err={error}",
                ctx.path.display()
            )
        }
    }
}

/// An observer that fans out events to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn IoObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn IoObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl IoObserver for CompositeObserver {
    fn observe(&self, ctx: &IoContext, event: &IoEvent<'_>) {
        for o in &self.observers {
            o.observe(ctx, event);
        }
    }
}

/// Logs events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl IoObserver for StdErrObserver {
    fn observe(&self, ctx: &IoContext, event: &IoEvent<'_>) {
        eprintln!("{}", render(ctx, event));
    }
}

/// Appends events to a local log file, one timestamped line each.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }
}

impl IoObserver for FileObserver {
    fn observe(&self, ctx: &IoContext, event: &IoEvent<'_>) {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let line = format!("{ts} {}", render(ctx, event));

        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}
