//! Input device abstraction

use crate::error::Result;

/// Nominal full-scale reading of the rotary encoder.
///
/// Raw readings are not bounds-checked by the driver and may fall outside
/// `0.0..=ROTARY_FULL_SCALE`; consumers clamp.
pub const ROTARY_FULL_SCALE: f32 = 1020.0;

/// Absolute-position rotary encoder (potentiometer style).
pub trait RotaryEncoder {
    /// Current absolute position in raw sensor units.
    ///
    /// Nominally `0.0..=`[`ROTARY_FULL_SCALE`], but the value is reported as
    /// the driver delivers it.
    fn position(&mut self) -> Result<f32>;
}

/// Momentary push button.
pub trait PushButton {
    /// Whether the button is currently held down.
    fn is_pressed(&mut self) -> Result<bool>;
}
