//! The refresh-tick side of the rose plot.
//!
//! [`RoseCanvas`] owns the histogram and is only ever touched from a single thread. On every
//! refresh it drains the phases that were queued by the processing thread since the last tick,
//! inserts them one by one, and publishes a [`RoseSnapshot`] through a triple buffer so a drawing
//! thread can pick up the latest state without blocking the tick.

use std::sync::{Arc, Mutex};

use crate::circ;
use crate::error::SettingsError;
use crate::feed::PhaseReceiver;
use crate::histogram::CircularHistogram;
use crate::settings::{self, VisualizerSettings};
use crate::snapshot::RoseSnapshot;
use crate::summary::StatSummary;

/// What happened during a single [`RoseCanvas::refresh()`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RefreshReport {
    /// Phases that were added to the histogram.
    pub inserted: usize,
    /// Phases that were drained but rejected because they weren't finite.
    pub rejected: usize,
}

pub struct RoseCanvas {
    histogram: CircularHistogram,
    /// Phases queued by the processing thread.
    phases: PhaseReceiver,

    /// The event channel phases are plotted for. Nothing gets plotted while this is `None`.
    event_channel: Option<u8>,
    /// The phase reference as shown to the user, in degrees.
    reference_text: String,

    /// Thread-safe communication to the drawing thread (the canvas writes here)
    snapshot_input: triple_buffer::Input<RoseSnapshot>,
    /// Thread-safe communication to the drawing thread (the drawing thread reads here)
    snapshot_output: Arc<Mutex<triple_buffer::Output<RoseSnapshot>>>,
}

impl RoseCanvas {
    /// Create a canvas with a default histogram that reads phases from `phases`. No event channel
    /// is selected yet.
    pub fn new(phases: PhaseReceiver) -> Self {
        Self::with_histogram(phases, CircularHistogram::default())
    }

    /// Create a canvas around an existing histogram. Its reference is normalized into `[0, 2π)` the
    /// same way a typed reference would be, so the reference text restores the same value.
    pub fn with_histogram(phases: PhaseReceiver, mut histogram: CircularHistogram) -> Self {
        let degrees = circ::wrap_degrees(histogram.reference().to_degrees());
        histogram.set_reference(degrees.to_radians());

        let (snapshot_input, snapshot_output) =
            triple_buffer::TripleBuffer::new(&RoseSnapshot::from_histogram(&histogram)).split();

        Self {
            reference_text: format_degrees(degrees),
            histogram,
            phases,
            event_channel: None,
            snapshot_input,
            snapshot_output: Arc::new(Mutex::new(snapshot_output)),
        }
    }

    pub fn histogram(&self) -> &CircularHistogram {
        &self.histogram
    }

    /// The reading end of the snapshot triple buffer, for the drawing thread.
    pub fn snapshot_output(&self) -> Arc<Mutex<triple_buffer::Output<RoseSnapshot>>> {
        self.snapshot_output.clone()
    }

    pub fn summary(&self) -> StatSummary {
        self.histogram.summary()
    }

    pub fn event_channel(&self) -> Option<u8> {
        self.event_channel
    }

    /// Select the event channel to plot, or `None` to stop plotting. Channels outside of
    /// `1..=MAX_EVENT_CHANNELS` are rejected.
    pub fn set_event_channel(&mut self, channel: Option<u8>) -> Result<(), SettingsError> {
        self.event_channel = settings::validate_event_channel(channel)?;
        Ok(())
    }

    /// Drain the pending phases into the histogram and publish a new snapshot. Does nothing at all
    /// while no event channel is selected.
    pub fn refresh(&mut self) -> RefreshReport {
        if self.event_channel.is_none() {
            return RefreshReport::default();
        }

        let mut report = RefreshReport::default();
        let histogram = &mut self.histogram;
        self.phases.drain(|angle| match histogram.insert(angle) {
            Ok(()) => report.inserted += 1,
            Err(err) => {
                log::warn!("{err}");
                report.rejected += 1;
            }
        });

        if report.inserted > 0 || report.rejected > 0 {
            log::trace!(
                "Added {} phases ({} rejected), {} total",
                report.inserted,
                report.rejected,
                self.histogram.len()
            );
        }

        self.publish();
        report
    }

    /// Remove all phases from the plot.
    pub fn clear(&mut self) {
        self.histogram.clear();
        self.publish();
    }

    /// Change the number of bins. See [`CircularHistogram::set_num_bins()`].
    pub fn set_num_bins(&mut self, num_bins: usize) -> bool {
        let changed = self.histogram.set_num_bins(num_bins);
        if changed {
            self.publish();
        }

        changed
    }

    /// Change the phase reference to a value in degrees. The value is normalized into `[0, 360)`
    /// before it is applied. Returns whether the histogram was rebinned.
    pub fn set_reference_degrees(&mut self, degrees: f64) -> bool {
        if !degrees.is_finite() {
            log::debug!("Ignoring reference angle {degrees}");
            return false;
        }

        let degrees = circ::wrap_degrees(degrees);
        self.reference_text = format_degrees(degrees);

        let changed = self.histogram.set_reference(degrees.to_radians());
        if changed {
            self.publish();
        }

        changed
    }

    /// Parse and apply a phase reference typed by the user. Invalid text leaves the current
    /// reference in place.
    pub fn set_reference_text(&mut self, text: &str) -> Result<bool, SettingsError> {
        let degrees = settings::parse_reference_degrees(text)?;
        Ok(self.set_reference_degrees(degrees))
    }

    /// The current phase reference in degrees, formatted for display.
    pub fn reference_text(&self) -> &str {
        &self.reference_text
    }

    pub fn save_settings(&self) -> VisualizerSettings {
        VisualizerSettings {
            event_channel: self.event_channel,
            num_bins: self.histogram.num_bins() as i64,
            phase_ref: self.reference_text.clone(),
        }
    }

    /// Apply saved settings through the regular setters. Every value is applied on its own, an
    /// invalid value is logged and the current one is kept.
    pub fn load_settings(&mut self, settings: &VisualizerSettings) {
        match settings.event_channel() {
            Ok(channel) => self.event_channel = channel,
            Err(err) => log::warn!("Not restoring the event channel: {err}"),
        }

        match settings.num_bins() {
            Ok(num_bins) => {
                self.set_num_bins(num_bins);
            }
            Err(err) => log::warn!("Not restoring the bin count: {err}"),
        }

        match settings.reference_degrees() {
            Ok(degrees) => {
                self.set_reference_degrees(degrees);
            }
            Err(err) => log::warn!("Not restoring the phase reference: {err}"),
        }
    }

    fn publish(&mut self) {
        self.snapshot_input
            .write(RoseSnapshot::from_histogram(&self.histogram));
    }
}

/// Format degrees without trailing zeros, `90` rather than `90.0`.
fn format_degrees(degrees: f64) -> String {
    format!("{}", degrees + 0.0)
}
