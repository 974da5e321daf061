use thiserror::Error;

/// Convenience result type for reshape operations.
pub type ReshapeResult<T> = Result<T, ReshapeError>;

/// Error type returned across the crate.
///
/// This is a single error enum shared by the transform layer and the file I/O helpers.
/// Precondition failures (`LengthMismatch`) are always raised before any mutation begins, so a
/// mapping is never left half-transformed by them.
#[derive(Debug, Error)]
pub enum ReshapeError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV read error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Two parallel sequences that must line up positionally have different lengths.
    #[error("length mismatch in {what}: {left} vs {right}")]
    LengthMismatch {
        what: &'static str,
        left: usize,
        right: usize,
    },

    /// A loaded document does not have the expected shape (e.g. not a JSON object).
    #[error("malformed input: {message}")]
    Malformed { message: String },
}

impl ReshapeError {
    /// Build a `LengthMismatch` unless the two slices have equal length.
    pub(crate) fn check_equal_length<A, B>(
        what: &'static str,
        a: &[A],
        b: &[B],
    ) -> ReshapeResult<()> {
        if crate::util::equal_length(a, b) {
            Ok(())
        } else {
            Err(ReshapeError::LengthMismatch {
                what,
                left: a.len(),
                right: b.len(),
            })
        }
    }
}
