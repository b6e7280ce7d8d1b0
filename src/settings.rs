//! The visualizer settings that get saved and restored with a session.

use serde::{Deserialize, Serialize};

use crate::circ;
use crate::error::SettingsError;
use crate::{DEFAULT_NUM_BINS, MAX_BINS, MAX_EVENT_CHANNELS};

/// The event channel, bin count, and phase reference of a rose plot.
///
/// The bin count is stored as a signed integer and the reference as the text the user typed since
/// that is how they arrive from a saved session. Both are validated when they are applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisualizerSettings {
    /// The event channel whose phases get plotted, `None` to stop plotting.
    pub event_channel: Option<u8>,
    pub num_bins: i64,
    /// The phase reference in degrees, as text.
    pub phase_ref: String,
}

impl Default for VisualizerSettings {
    fn default() -> Self {
        Self {
            event_channel: None,
            num_bins: DEFAULT_NUM_BINS as i64,
            phase_ref: String::from("0"),
        }
    }
}

impl VisualizerSettings {
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse settings from JSON. Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The stored bin count, if it's within `[1, MAX_BINS]`.
    pub fn num_bins(&self) -> Result<usize, SettingsError> {
        usize::try_from(self.num_bins)
            .ok()
            .filter(|num_bins| (1..=MAX_BINS).contains(num_bins))
            .ok_or(SettingsError::InvalidBinCount(self.num_bins))
    }

    /// The stored phase reference in degrees, normalized into `[0, 360)`.
    pub fn reference_degrees(&self) -> Result<f64, SettingsError> {
        parse_reference_degrees(&self.phase_ref)
    }

    /// The stored event channel, if it's one of the selectable channels.
    pub fn event_channel(&self) -> Result<Option<u8>, SettingsError> {
        validate_event_channel(self.event_channel)
    }
}

/// Parse a phase reference in degrees and normalize it into `[0, 360)`. Only an optional sign,
/// digits, and a decimal point are accepted, so exponents and `inf` are rejected.
pub fn parse_reference_degrees(text: &str) -> Result<f64, SettingsError> {
    let trimmed = text.trim();
    let plain_number = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.'));
    if !plain_number {
        return Err(SettingsError::InvalidReference(trimmed.to_owned()));
    }

    match trimmed.parse::<f64>() {
        Ok(degrees) if degrees.is_finite() => Ok(circ::wrap_degrees(degrees)),
        _ => Err(SettingsError::InvalidReference(trimmed.to_owned())),
    }
}

/// Check that an event channel is either `None` or in `1..=MAX_EVENT_CHANNELS`.
pub fn validate_event_channel(channel: Option<u8>) -> Result<Option<u8>, SettingsError> {
    match channel {
        Some(channel) if channel == 0 || channel > MAX_EVENT_CHANNELS => {
            Err(SettingsError::InvalidEventChannel(channel))
        }
        channel => Ok(channel),
    }
}
