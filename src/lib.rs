//! A circular phase histogram for rose plots.
//!
//! [`CircularHistogram`] accumulates phase observations, groups them into equal width sectors
//! relative to a movable reference direction, and keeps a running resultant vector from which the
//! circular mean and circular standard deviation are derived. The rest of the crate is the
//! plumbing around it: a non-blocking [`feed`] for handing phases over from a processing thread, a
//! [`RoseCanvas`] that drains that feed on every refresh tick, and a [`RoseSnapshot`] that gets
//! published to whatever draws the plot.
//!
//! ```
//! use phase_rose::CircularHistogram;
//!
//! let mut histogram = CircularHistogram::default();
//! histogram.insert(0.5).unwrap();
//! histogram.insert(0.7).unwrap();
//!
//! assert_eq!(histogram.len(), 2);
//! assert!((histogram.circular_mean(false) - 0.6_f64.to_degrees()).abs() < 1e-9);
//! ```

pub mod canvas;
pub mod circ;
pub mod error;
pub mod feed;
pub mod geometry;
pub mod histogram;
pub mod settings;
pub mod snapshot;
pub mod summary;
pub mod util;

pub use canvas::{RefreshReport, RoseCanvas};
pub use error::{HistogramError, SettingsError};
pub use feed::{phase_feed, PhaseReceiver, PhaseSender};
pub use geometry::{BinGeometry, BinSegment};
pub use histogram::CircularHistogram;
pub use settings::VisualizerSettings;
pub use snapshot::RoseSnapshot;
pub use summary::StatSummary;

/// The largest number of bins a histogram can be split into.
pub const MAX_BINS: usize = 120;

/// The number of bins a new histogram starts out with.
pub const DEFAULT_NUM_BINS: usize = 24;

/// The reference angle a new histogram starts out with, in radians.
pub const DEFAULT_REFERENCE: f64 = 0.0;

/// The number of selectable event channels. Channels are numbered `1..=MAX_EVENT_CHANNELS`.
pub const MAX_EVENT_CHANNELS: u8 = 8;

/// Number of pending phases the feed can hold before the producer starts dropping them.
pub const DEFAULT_FEED_CAPACITY: usize = 4096;
