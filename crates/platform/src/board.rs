//! Board factory trait
//!
//! Aggregates the four peripheral interfaces of the clock board behind
//! associated types, enabling compile-time dispatch with no trait objects.
//! Implementations wrap a vendor driver layer; `mocks::MockBoard` records
//! every open for tests.

use crate::buzzer::Buzzer;
use crate::display::CharDisplay;
use crate::error::Result;
use crate::input::{PushButton, RotaryEncoder};

/// Factory for the four peripheral handles of the clock board.
///
/// Each `open_*` call consumes one value of the resolved
/// [`PinSet`](crate::pins::PinSet). Opening a peripheral that is already
/// held, or on a pin the platform does not route, is a driver-level
/// [`Construction`](crate::PlatformError::Construction) error.
pub trait Board {
    /// Rotary encoder handle type.
    type Rotary: RotaryEncoder;
    /// Push button handle type.
    type Button: PushButton;
    /// Buzzer handle type.
    type Buzzer: Buzzer;
    /// Character display handle type.
    type Display: CharDisplay;

    /// Open the rotary encoder on an analog pin.
    fn open_rotary(&mut self, pin: u32) -> Result<Self::Rotary>;

    /// Open the push button on a digital pin.
    fn open_button(&mut self, pin: u32) -> Result<Self::Button>;

    /// Open the buzzer on a digital pin.
    fn open_buzzer(&mut self, pin: u32) -> Result<Self::Buzzer>;

    /// Open the character display on an I2C bus.
    fn open_display(&mut self, bus: u32) -> Result<Self::Display>;
}
