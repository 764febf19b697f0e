//! Hardware Abstraction Layer (HAL) for the Grove alarm-clock kit
//!
//! This crate provides trait-based abstractions for the four peripherals of
//! the clock board, enabling development and testing without physical
//! hardware.
//!
//! # Architecture Layers
//!
//! ```text
//! Application Layer (alarm crate)
//!         ↓
//! Platform HAL (this crate - trait abstractions)
//!         ↓
//! Vendor driver layer (external - sensor/display/buzzer drivers)
//! ```
//!
//! # Abstraction Levels
//!
//! ## Peripheral traits
//! - [`RotaryEncoder`] - absolute-position rotary sensor
//! - [`PushButton`] - momentary button
//! - [`Buzzer`] - piezo buzzer (volume + tone)
//! - [`CharDisplay`] - RGB-backlit character display
//!
//! ## Board services
//! - [`Board`] - factory that opens the four peripheral handles from pins
//! - [`pins`] - platform detection and pin-number resolution
//! - [`WallClock`] - time-of-day source
//!
//! # Features
//!
//! - `mocks`: Mock peripheral implementations for consumer-crate tests
//!
//! # Example
//!
//! ```no_run
//! use platform::{pins, Board};
//!
//! fn open<B: Board>(board: &mut B, services: &mut impl pins::PlatformServices)
//!     -> platform::Result<B::Display>
//! {
//!     let assignment = pins::resolve(services);
//!     board.open_display(assignment.screen_bus)
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod board;
pub mod buzzer;
pub mod clock;
pub mod color;
pub mod display;
pub mod error;
pub mod input;
pub mod mocks;
pub mod pins;

// Re-export main traits and types
pub use board::Board;
pub use buzzer::{Buzzer, Volume, SUSTAIN};
pub use clock::{SystemClock, WallClock};
pub use color::{BacklightLevel, Rgb};
pub use display::{CharDisplay, LCD_COLUMNS};
pub use error::{Peripheral, PlatformError, Result};
pub use input::{PushButton, RotaryEncoder, ROTARY_FULL_SCALE};
pub use pins::{BridgeError, PinSet, PlatformKind, PlatformServices};
