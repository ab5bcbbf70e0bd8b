//! Error types for brake input validation and setup.
//!
//! Nothing in this module is returned from the hot path. An out-of-domain
//! pedal position at compute time is clamped and reported through
//! [`ClampStatus`](crate::ClampStatus); these errors cover strict validation
//! and initialization-time configuration only.

use thiserror::Error;

/// Error type for brake input validation and computer configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BrakeError {
    /// Pedal position is outside the valid domain.
    #[error("pedal position {value} is out of range [{min}, {max}]")]
    PositionOutOfDomain {
        /// The invalid value.
        value: f32,
        /// Domain minimum.
        min: f32,
        /// Domain maximum.
        max: f32,
    },

    /// Pedal position is NaN or infinite.
    #[error("pedal position is not finite")]
    PositionNotFinite,

    /// Pedal-to-force gain must be finite and non-negative.
    #[error("invalid pedal-to-force gain: {0}")]
    InvalidGain(f32),

    /// Raw input report was too short to contain a pedal sample.
    #[error("truncated pedal report: {0} bytes")]
    TruncatedReport(usize),
}
