//! Error types for wallscan

/// Result type alias
pub type Result<T> = std::result::Result<T, WallScanError>;

/// Errors raised at the edges of the detector. Detection itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum WallScanError {
    #[error("r2_min must be within [0, 1]. Actually {0}.")]
    InvalidThreshold(f64),

    #[error("A scan must hold 360 samples. Actually {0} samples.")]
    InvalidScanLength(usize),

    #[error("Malformed snapshot line {line}: {reason}")]
    SnapshotParse { line: usize, reason: String },

    #[error("Detection worker has stopped")]
    WorkerStopped,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
