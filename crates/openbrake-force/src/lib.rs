//! Bounded pedal-to-brake-force computation for OpenBrake
//!
//! This crate maps a normalized brake-pedal position to a commanded brake
//! force. It is the hot-path primitive of the brake control loop: the host
//! scheduler calls [`compute_brake_force`] (or
//! [`BrakeForceComputer::compute`]) exactly once per control-loop tick.
//!
//! # Overview
//!
//! - [`PedalPosition`]: validated, normalized pedal travel in `[0, 1]`
//! - [`PedalSample`]: raw 16-bit sensor reading with calibration
//! - [`BrakeForceComputer`]: gain-configured position-to-force mapping
//! - [`ClampStatus`]: side-channel report of out-of-domain inputs
//!
//! # RT Safety Guarantees
//!
//! ## RT-Safe: `BrakeForceComputer::compute()`, `compute_brake_force()`
//! The force computation provides O(1) evaluation with:
//! - No heap allocations
//! - No syscalls or I/O
//! - No loops, bounded execution time
//! - A single unconditional return on every path
//!
//! Out-of-domain positions never fail the hot path: the value is clamped to
//! the nearest domain bound and the clamp is reported through
//! [`ClampStatus`] so the caller can log or escalate outside the tick.
//!
//! ## NOT RT-Safe: constructors and calibration
//! `BrakeForceComputer::new()`, `PedalPosition::new()` and
//! [`PedalCalibration`] are for initialization and profile-load time.
//!
//! # Example
//!
//! ```
//! use openbrake_force::prelude::*;
//!
//! // In the control loop (once per tick):
//! let (position, status) = PedalPosition::saturating(0.4);
//! let command = compute_brake_force(position);
//!
//! assert!((command.force.value() - 0.6).abs() < 1e-6);
//! assert!(!status.was_clamped());
//! assert!(!command.clamp.was_clamped());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod force;
pub mod pedal;
pub mod prelude;

pub use error::BrakeError;
pub use force::{BrakeCommand, BrakeForce, BrakeForceComputer, PEDAL_TO_FORCE_GAIN, compute_brake_force};
pub use pedal::{ClampStatus, PEDAL_MAX, PEDAL_MIN, PedalCalibration, PedalPosition, PedalSample};

/// A specialized `Result` type for brake input validation and setup.
pub type BrakeResult<T> = Result<T, BrakeError>;

/// Full-scale value of the raw 16-bit pedal sensor reading.
pub const MAX_RAW_VALUE: u16 = 0xFFFF;
