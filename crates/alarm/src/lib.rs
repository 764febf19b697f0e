//! Alarm-clock application layer
//!
//! Owns the four peripherals of the Grove clock kit through the `platform`
//! traits and exposes the control operations the outer poll loop calls:
//! show the time, tint the backlight from the rotary position, start and
//! stop the alarm tone.
//!
//! ```text
//! Demo binary (poll loop)          src/main.rs
//!         ↓
//! Devices (owning container + ops) src/devices.rs
//!         ↓
//! Platform HAL traits              platform crate
//!         ↓
//! Vendor drivers / console sim     external, src/sim.rs
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod devices;
pub mod sim;

pub use devices::Devices;
