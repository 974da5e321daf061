//! Unified record loading and saving.
//!
//! Most callers should use [`load_records`] and [`save_records`], which move a
//! [`crate::types::MappingList`] between memory and disk.
//!
//! - If [`IoOptions::format`] is `None`, the load format is inferred from the file extension.
//! - CSV input goes through [`super::csv::load_matrix`] and then
//!   [`crate::transform::matrix`], so the first CSV row becomes the field names.
//! - Saving always writes a JSON array.
//! - If an [`IoObserver`] is configured, every load and save outcome is reported to it.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{ReshapeError, ReshapeResult};
use crate::transform;
use crate::types::MappingList;

use super::observability::{IoContext, IoEvent, IoObserver, IoOperation, IoSeverity};
use super::{csv, json};

/// Supported load formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFormat {
    /// JSON object, array-of-objects, or NDJSON.
    Json,
    /// Comma-separated values with a header row.
    Csv,
}

impl LoadFormat {
    /// Parse a load format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" | "ndjson" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Options controlling unified I/O behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct IoOptions {
    /// If `None`, auto-detect the load format from the file extension. Ignored by
    /// [`save_records`], which always writes JSON.
    pub format: Option<LoadFormat>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IoObserver>>,
    /// Severity at or above which a failure event carries the alert flag.
    pub alert_at_or_above: IoSeverity,
}

impl fmt::Debug for IoOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IoOptions")
            .field("format", &self.format)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IoOptions {
    fn default() -> Self {
        Self {
            format: None,
            observer: None,
            alert_at_or_above: IoSeverity::Critical,
        }
    }
}

/// Loads a file of records into a [`MappingList`].
///
/// - `.json`/`.ndjson` files load via [`json::load_mapping_list`].
/// - `.csv` files load via [`csv::load_matrix`] and [`transform::matrix`], taking the first
///   row as field names.
///
/// When an observer is configured, the outcome is reported as an [`IoEvent::Loaded`] with
/// record-count stats, or an [`IoEvent::Failed`] whose alert flag is set when the computed
/// severity is >= [`IoOptions::alert_at_or_above`].
///
/// # Examples
///
/// ```no_run
/// use json_reshape::io::{load_records, IoOptions};
///
/// # fn main() -> Result<(), json_reshape::ReshapeError> {
/// // Auto-detects by extension (.json/.ndjson/.csv).
/// let records = load_records("people.csv", &IoOptions::default())?;
/// println!("records={}", records.len());
/// # Ok(())
/// # }
/// ```
pub fn load_records(path: impl AsRef<Path>, options: &IoOptions) -> ReshapeResult<MappingList> {
    let path = path.as_ref();
    let format = match options.format {
        Some(format) => format,
        None => detect_format(path)?,
    };

    let ctx = IoContext {
        path: path.to_path_buf(),
        operation: IoOperation::Load,
    };

    let result = match format {
        LoadFormat::Json => json::load_mapping_list(path),
        LoadFormat::Csv => csv::load_matrix(path).and_then(|rows| transform::matrix(rows, None)),
    };

    match &result {
        Ok(records) => notify(
            options,
            &ctx,
            &IoEvent::Loaded {
                records: records.len(),
            },
        ),
        Err(error) => notify_failure(options, &ctx, error),
    }
    result
}

/// Saves records to `path` as a JSON array, overwriting any existing content.
///
/// The counterpart of [`load_records`]: the outcome is reported to the configured observer
/// as [`IoEvent::Saved`] or [`IoEvent::Failed`], with the same alert-threshold rule.
pub fn save_records(
    path: impl AsRef<Path>,
    records: &MappingList,
    options: &IoOptions,
) -> ReshapeResult<()> {
    let path = path.as_ref();
    let ctx = IoContext {
        path: path.to_path_buf(),
        operation: IoOperation::Save,
    };

    let result = json::save(path, records);

    match &result {
        Ok(()) => notify(options, &ctx, &IoEvent::Saved),
        Err(error) => notify_failure(options, &ctx, error),
    }
    result
}

fn detect_format(path: &Path) -> ReshapeResult<LoadFormat> {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(LoadFormat::from_extension)
        .ok_or_else(|| ReshapeError::Malformed {
            message: format!(
                "could not detect a load format from path '{}'",
                path.display()
            ),
        })
}

fn classify_severity(error: &ReshapeError) -> IoSeverity {
    match error {
        ReshapeError::Io(_) => IoSeverity::Critical,
        _ => IoSeverity::Error,
    }
}

fn notify(options: &IoOptions, ctx: &IoContext, event: &IoEvent<'_>) {
    if let Some(observer) = &options.observer {
        observer.observe(ctx, event);
    }
}

fn notify_failure(options: &IoOptions, ctx: &IoContext, error: &ReshapeError) {
    let severity = classify_severity(error);
    notify(
        options,
        ctx,
        &IoEvent::Failed {
            severity,
            error,
            alert: severity >= options.alert_at_or_above,
        },
    );
}
