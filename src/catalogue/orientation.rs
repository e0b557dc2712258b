//! Orientation detection for raw entry lines.
//!
//! Callers only see [`OrientationSource`]; the probe heuristic can be swapped
//! for an explicit setting without touching the parsers.

use crate::constants::markers;
use crate::types::Orientation;

/// Decides whether the raw lines of one run are title-first or artist-first.
pub trait OrientationSource {
    /// Inspect all document lines and return the orientation to apply.
    fn detect(&self, lines: &[&str]) -> Orientation;
}

/// Finds the first line mentioning a known artist and checks which side of
/// the delimiter the name sits on.
///
/// Documents without the probe artist fall back to [`Orientation::Normal`],
/// even if they are consistently artist-first.
#[derive(Debug, Clone)]
pub struct ProbeOrientation {
    probe: String,
}

impl ProbeOrientation {
    /// Create a detector looking for `probe`.
    pub fn new(probe: impl Into<String>) -> Self {
        Self { probe: probe.into() }
    }
}

impl OrientationSource for ProbeOrientation {
    fn detect(&self, lines: &[&str]) -> Orientation {
        let Some((index, line)) = lines
            .iter()
            .enumerate()
            .find(|(_, line)| line.contains(self.probe.as_str()))
        else {
            tracing::debug!("Probe {:?} not found, assuming title-first", self.probe);
            return Orientation::Normal;
        };

        let first = line.split(markers::DELIMITER).next().unwrap_or_default();
        let orientation = if first.contains(self.probe.as_str()) {
            Orientation::Reversed
        } else {
            Orientation::Normal
        };
        tracing::debug!("Probe found on line {}: {orientation}", index + 1);
        orientation
    }
}

/// Explicitly configured orientation.
#[derive(Debug, Clone, Copy)]
pub struct FixedOrientation(pub Orientation);

impl OrientationSource for FixedOrientation {
    fn detect(&self, _lines: &[&str]) -> Orientation {
        self.0
    }
}
