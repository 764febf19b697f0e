//! Application configuration and constants
//!
//! Central values used across the application; operations reference these
//! rather than hardcoding numbers at the call site.

use platform::Rgb;

/// The application name.
pub const APP_NAME: &str = "Grove Alarm Clock";

/// Application version (synchronized with Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed alarm tone frequency.
pub const ALARM_TONE_HZ: u32 = 2600;

/// Backlight for plain messages (blue).
pub const DEFAULT_TEXT_COLOR: Rgb = Rgb::from_packed(0x0000ff);

/// Backlight while showing the time (green).
pub const TIME_COLOR: Rgb = Rgb::from_packed(0x00ff00);

/// Environment variable holding the demo alarm trigger time (`HH:MM:SS`).
pub const ALARM_ENV: &str = "ALARM";
