//! Pedal position domain type and raw sensor input handling.
//!
//! [`PedalPosition`] is the validated, normalized input to the force
//! computation. [`PedalSample`] and [`PedalCalibration`] cover the non-RT
//! side: turning a raw 16-bit sensor reading into a normalized position.

use serde::{Deserialize, Serialize};

use crate::error::BrakeError;
use crate::{BrakeResult, MAX_RAW_VALUE};

/// Minimum of the normalized pedal domain (pedal fully released).
pub const PEDAL_MIN: f32 = 0.0;

/// Maximum of the normalized pedal domain (pedal fully pressed).
pub const PEDAL_MAX: f32 = 1.0;

/// Side-channel report of whether an input had to be clamped to the domain.
///
/// # RT Safety
///
/// `Copy`, fixed `#[repr(u8)]` representation, no allocation. Clamping is
/// reported through this status instead of an error so the hot path never
/// diverts control flow.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ClampStatus {
    /// Input was within the domain; no clamping occurred.
    #[default]
    InRange,
    /// Input was below the domain minimum (or NaN) and was clamped up.
    ClampedLow,
    /// Input was above the domain maximum and was clamped down.
    ClampedHigh,
}

impl ClampStatus {
    /// Whether the input had to be clamped.
    ///
    /// # Example
    ///
    /// ```
    /// use openbrake_force::ClampStatus;
    ///
    /// assert!(!ClampStatus::InRange.was_clamped());
    /// assert!(ClampStatus::ClampedHigh.was_clamped());
    /// ```
    #[must_use]
    pub fn was_clamped(self) -> bool {
        !matches!(self, ClampStatus::InRange)
    }
}

/// Normalized brake-pedal travel in `[PEDAL_MIN, PEDAL_MAX]`.
///
/// A value constructed through [`PedalPosition::new`] or
/// [`PedalPosition::saturating`] is always finite and within the domain.
/// [`PedalPosition::from_raw`] bypasses validation for callers that need to
/// represent an untrusted reading; the force computer clamps defensively, so
/// even a raw value cannot produce an out-of-range force.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
pub struct PedalPosition(f32);

impl PedalPosition {
    /// Strictly validate a normalized pedal reading.
    ///
    /// # Errors
    ///
    /// Returns [`BrakeError::PositionNotFinite`] for NaN or infinite values
    /// and [`BrakeError::PositionOutOfDomain`] for finite values outside
    /// `[PEDAL_MIN, PEDAL_MAX]`. Use [`PedalPosition::saturating`] when an
    /// out-of-range reading should be clamped instead of rejected.
    pub fn new(value: f32) -> BrakeResult<Self> {
        if !value.is_finite() {
            return Err(BrakeError::PositionNotFinite);
        }
        if !(PEDAL_MIN..=PEDAL_MAX).contains(&value) {
            return Err(BrakeError::PositionOutOfDomain {
                value,
                min: PEDAL_MIN,
                max: PEDAL_MAX,
            });
        }
        Ok(Self(value))
    }

    /// Clamp a reading to the pedal domain, reporting which bound was hit.
    ///
    /// NaN maps to the domain minimum with [`ClampStatus::ClampedLow`]:
    /// there is no nearest bound for NaN, and zero commanded brake is the
    /// conservative reading for an unreadable sensor. The flag still tells
    /// the caller to escalate.
    ///
    /// # RT Safety
    ///
    /// No allocation, no branches beyond the two bound checks, bounded time.
    ///
    /// # Example
    ///
    /// ```
    /// use openbrake_force::{ClampStatus, PedalPosition};
    ///
    /// let (p, status) = PedalPosition::saturating(1.7);
    /// assert!((p.value() - 1.0).abs() < f32::EPSILON);
    /// assert_eq!(status, ClampStatus::ClampedHigh);
    /// ```
    #[must_use]
    pub fn saturating(value: f32) -> (Self, ClampStatus) {
        if value > PEDAL_MAX {
            (Self(PEDAL_MAX), ClampStatus::ClampedHigh)
        } else if value >= PEDAL_MIN {
            (Self(value), ClampStatus::InRange)
        } else {
            // Below minimum, or NaN (every comparison with NaN is false).
            (Self(PEDAL_MIN), ClampStatus::ClampedLow)
        }
    }

    /// Wrap an untrusted reading without validation.
    ///
    /// The force computer performs its own defensive clamp, so a raw value
    /// cannot escape the output range; prefer [`PedalPosition::new`] or
    /// [`PedalPosition::saturating`] at the input boundary.
    #[must_use]
    pub fn from_raw(value: f32) -> Self {
        Self(value)
    }

    /// Pedal fully released.
    #[must_use]
    pub fn released() -> Self {
        Self(PEDAL_MIN)
    }

    /// Pedal fully pressed.
    #[must_use]
    pub fn full() -> Self {
        Self(PEDAL_MAX)
    }

    /// The normalized travel value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

/// A raw 16-bit pedal sensor reading with its calibration window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PedalSample {
    /// Raw sensor value as reported by the device.
    pub raw_value: u16,
    /// Calibrated sensor value for a fully released pedal.
    pub calibration_min: u16,
    /// Calibrated sensor value for a fully pressed pedal.
    pub calibration_max: u16,
}

impl PedalSample {
    /// Parse a pedal sample from a 4-byte input report.
    ///
    /// The raw value is little-endian in bytes 2..4, matching the analog
    /// axis layout of the supported pedal sets.
    ///
    /// # Errors
    ///
    /// Returns [`BrakeError::TruncatedReport`] if `data` is shorter than an
    /// input report.
    pub fn parse_report(data: &[u8]) -> BrakeResult<Self> {
        let (lo, hi) = match (data.get(2), data.get(3)) {
            (Some(&lo), Some(&hi)) => (lo, hi),
            _ => return Err(BrakeError::TruncatedReport(data.len())),
        };

        Ok(Self {
            raw_value: u16::from(lo) | (u16::from(hi) << 8),
            calibration_min: 0,
            calibration_max: MAX_RAW_VALUE,
        })
    }

    /// Map the raw value into `[0, 1]` through the calibration window.
    ///
    /// Values outside the window saturate; a degenerate window (max <= min)
    /// reads as a released pedal.
    #[must_use]
    pub fn normalized(&self) -> f32 {
        let span = self.calibration_max.saturating_sub(self.calibration_min);
        if span == 0 {
            return PEDAL_MIN;
        }
        let travel = self.raw_value.saturating_sub(self.calibration_min);
        (f32::from(travel) / f32::from(span)).clamp(PEDAL_MIN, PEDAL_MAX)
    }

    /// Normalize and convert to a domain-checked [`PedalPosition`].
    #[must_use]
    pub fn position(&self) -> (PedalPosition, ClampStatus) {
        PedalPosition::saturating(self.normalized())
    }

    /// Replace the calibration window.
    pub fn calibrate(&mut self, min: u16, max: u16) {
        self.calibration_min = min;
        self.calibration_max = max;
    }

    /// Builder-style calibration for freshly parsed samples.
    #[must_use]
    pub fn with_calibration(mut self, min: u16, max: u16) -> Self {
        self.calibrate(min, max);
        self
    }
}

impl Default for PedalSample {
    fn default() -> Self {
        Self {
            raw_value: 0,
            calibration_min: 0,
            calibration_max: MAX_RAW_VALUE,
        }
    }
}

/// Tracks observed sensor extremes during a calibration pass.
///
/// Feed every reading through [`PedalCalibration::sample`] while the user
/// sweeps the pedal, then [`PedalCalibration::apply`] the window to incoming
/// samples. Not for use in the RT path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PedalCalibration {
    /// Lowest raw value observed so far.
    pub min: u16,
    /// Highest raw value observed so far.
    pub max: u16,
}

impl PedalCalibration {
    /// Start a calibration pass with an empty window.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min: MAX_RAW_VALUE,
            max: 0,
        }
    }

    /// Record one raw sensor reading.
    pub fn sample(&mut self, value: u16) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Width of the observed window; zero until two distinct readings exist.
    #[must_use]
    pub fn span(&self) -> u16 {
        self.max.saturating_sub(self.min)
    }

    /// Apply the observed window to a sample.
    ///
    /// A window with no usable span is ignored so an uncalibrated pass does
    /// not wipe out the sample's defaults.
    pub fn apply(&self, sample: &mut PedalSample) {
        if self.span() > 0 {
            sample.calibrate(self.min, self.max);
        }
    }
}

impl Default for PedalCalibration {
    fn default() -> Self {
        Self::new()
    }
}
