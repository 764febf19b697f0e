//! Platform error types
//!
//! All driver implementations map their vendor-specific failures to these
//! variants. Only [`PlatformError::Construction`] is expected to cross the
//! application boundary: a device set with a missing peripheral is not a
//! supported state, so callers treat it as fatal rather than retrying.

use core::fmt;

/// Result type for peripheral operations.
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Identifies one of the four clock peripherals in errors and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Peripheral {
    /// Rotary encoder (analog in)
    Rotary,
    /// Push button (digital in)
    Button,
    /// Piezo buzzer (digital out)
    Buzzer,
    /// RGB-backlit character display (I2C)
    Display,
}

impl fmt::Display for Peripheral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rotary => write!(f, "rotary encoder"),
            Self::Button => write!(f, "button"),
            Self::Buzzer => write!(f, "buzzer"),
            Self::Display => write!(f, "display"),
        }
    }
}

/// Errors surfaced by the peripheral driver layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    /// The driver could not open a handle on the given pin or bus.
    #[error("failed to open {peripheral} on pin {pin}")]
    Construction {
        /// Which peripheral failed to open.
        peripheral: Peripheral,
        /// The pin or bus number the open was attempted on.
        pin: u32,
    },
    /// A sensor read failed after the handle was established.
    #[error("read from {0} failed")]
    Read(Peripheral),
    /// A command to an actuator or the display failed.
    #[error("command to {0} failed")]
    Command(Peripheral),
}
