//! Error types.

/// Errors produced by [`CircularHistogram`][crate::CircularHistogram].
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum HistogramError {
    #[error("Phase observation is not a finite number: {0}")]
    NonFiniteObservation(f64),

    #[error("Bin count {0} is out of range")]
    InvalidBinCount(usize),

    #[error("Reference angle is not a finite number: {0}")]
    NonFiniteReference(f64),
}

/// Errors produced while parsing or applying [`VisualizerSettings`][crate::VisualizerSettings].
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Invalid phase reference {0:?}, expected a number of degrees")]
    InvalidReference(String),

    #[error("Event channel {0} does not exist")]
    InvalidEventChannel(u8),

    #[error("Bin count {0} is out of range")]
    InvalidBinCount(i64),

    #[error("Could not (de)serialize the visualizer settings")]
    Json(#[from] serde_json::Error),
}
