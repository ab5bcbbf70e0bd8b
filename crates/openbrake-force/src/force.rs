//! Brake force computation.
//!
//! The hot-path half of the crate: a gain-configured, pure mapping from
//! [`PedalPosition`] to [`BrakeForce`], invoked once per control-loop tick.

use serde::{Deserialize, Serialize};

use crate::error::BrakeError;
use crate::pedal::{ClampStatus, PEDAL_MAX, PEDAL_MIN, PedalPosition};
use crate::BrakeResult;

/// Placeholder pedal-to-force gain: commanded-force fraction of the actuator
/// maximum per unit of pedal travel.
///
/// The real constant comes from the actuator specification of the host
/// vehicle; this value is a stand-in and carries no physical rationale.
/// Inject the real gain through [`BrakeForceComputer::new`].
pub const PEDAL_TO_FORCE_GAIN: f32 = 1.5;

/// Commanded brake force, as a fraction of the actuator maximum scaled by
/// the configured gain.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
pub struct BrakeForce(f32);

impl BrakeForce {
    /// The commanded force value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

/// Per-tick output of the force computation.
///
/// The clamp status is the side channel required for out-of-domain inputs:
/// the force is always usable, and the caller decides whether a set flag is
/// logged, counted, or escalated — outside the tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct BrakeCommand {
    /// The commanded brake force.
    pub force: BrakeForce,
    /// Whether the input position had to be clamped to the pedal domain.
    pub clamp: ClampStatus,
}

/// Maps pedal position to commanded brake force.
///
/// Stateless across ticks: the computer carries configuration only, so
/// identical inputs always yield identical outputs.
///
/// # RT Safety
///
/// - `Copy`, no heap allocation
/// - `compute()` is O(1) with no loops, I/O, or suspension points
/// - A single unconditional return on every path
///
/// # Example
///
/// ```
/// use openbrake_force::{BrakeForceComputer, PedalPosition};
///
/// let computer = BrakeForceComputer::default();
/// let (position, _) = PedalPosition::saturating(0.4);
/// let command = computer.compute(position);
/// assert!((command.force.value() - 0.6).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrakeForceComputer {
    gain: f32,
}

impl BrakeForceComputer {
    /// Create a computer with the actuator's pedal-to-force gain.
    ///
    /// # Errors
    ///
    /// Returns [`BrakeError::InvalidGain`] if `gain` is NaN, infinite, or
    /// negative. Zero is allowed (a disabled brake channel).
    pub fn new(gain: f32) -> BrakeResult<Self> {
        if !gain.is_finite() || gain < 0.0 {
            return Err(BrakeError::InvalidGain(gain));
        }
        Ok(Self { gain })
    }

    /// The configured pedal-to-force gain.
    #[must_use]
    pub fn gain(&self) -> f32 {
        self.gain
    }

    /// Compute the commanded brake force for one control-loop tick.
    ///
    /// Validated constructors already guarantee the domain, but a
    /// control-path fault here has safety consequences, so the position is
    /// range-checked and clamped again rather than trusted. An out-of-domain
    /// value produces the force at the nearest bound and a set clamp flag;
    /// it never fails.
    ///
    /// # RT Safety
    ///
    /// No heap allocations, no syscalls or I/O, no loops, bounded execution
    /// time.
    #[must_use]
    #[inline]
    pub fn compute(&self, position: PedalPosition) -> BrakeCommand {
        let (clamped, clamp) = PedalPosition::saturating(position.value());
        BrakeCommand {
            force: BrakeForce(clamped.value() * self.gain),
            clamp,
        }
    }

    /// Largest force this computer can command (`gain`, at full pedal).
    #[must_use]
    pub fn max_force(&self) -> BrakeForce {
        BrakeForce(PEDAL_MAX * self.gain)
    }

    /// Smallest force this computer can command (at a released pedal).
    #[must_use]
    pub fn min_force(&self) -> BrakeForce {
        BrakeForce(PEDAL_MIN * self.gain)
    }
}

impl Default for BrakeForceComputer {
    fn default() -> Self {
        Self {
            gain: PEDAL_TO_FORCE_GAIN,
        }
    }
}

/// Compute the commanded brake force with the default gain.
///
/// Free-function form of [`BrakeForceComputer::compute`] for hosts that use
/// the placeholder gain; see [`PEDAL_TO_FORCE_GAIN`].
///
/// # Example
///
/// ```
/// use openbrake_force::{PedalPosition, compute_brake_force};
///
/// let command = compute_brake_force(PedalPosition::from_raw(1.7));
/// assert!((command.force.value() - 1.5).abs() < 1e-6);
/// assert!(command.clamp.was_clamped());
/// ```
#[must_use]
#[inline]
pub fn compute_brake_force(position: PedalPosition) -> BrakeCommand {
    BrakeForceComputer::default().compute(position)
}
