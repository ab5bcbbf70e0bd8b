//! Convenience re-exports of the public surface.
//!
//! ```
//! use openbrake_force::prelude::*;
//!
//! let (position, _) = PedalPosition::saturating(0.25);
//! let command = compute_brake_force(position);
//! assert!(command.force.value() > 0.0);
//! ```

pub use crate::error::BrakeError;
pub use crate::force::{
    BrakeCommand, BrakeForce, BrakeForceComputer, PEDAL_TO_FORCE_GAIN, compute_brake_force,
};
pub use crate::pedal::{
    ClampStatus, PEDAL_MAX, PEDAL_MIN, PedalCalibration, PedalPosition, PedalSample,
};
pub use crate::{BrakeResult, MAX_RAW_VALUE};
