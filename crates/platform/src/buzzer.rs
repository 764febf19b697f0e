//! Piezo buzzer abstraction

use crate::error::Result;

/// `duration_us` value that sustains a tone until [`Buzzer::stop_tone`].
pub const SUSTAIN: u64 = 0;

/// Piezo buzzer driver interface.
pub trait Buzzer {
    /// Set the output volume. Takes effect on the running tone immediately.
    fn set_volume(&mut self, volume: Volume) -> Result<()>;

    /// Play `frequency_hz` for `duration_us` microseconds.
    ///
    /// A duration of [`SUSTAIN`] keeps the tone sounding until
    /// [`stop_tone`](Buzzer::stop_tone).
    fn play_tone(&mut self, frequency_hz: u32, duration_us: u64) -> Result<()>;

    /// Stop the current tone, if any. Safe to call when already silent.
    fn stop_tone(&mut self) -> Result<()>;
}

/// Buzzer output volume, clamped to `0.0..=1.0`.
///
/// Wraps an `f32` with the invariant `0.0 <= value <= 1.0`. The vendor
/// buzzer drivers take a float volume in this range; the newtype keeps an
/// out-of-range literal from ever reaching one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Volume(f32);

impl Volume {
    /// Silent.
    pub const MUTE: Volume = Volume(0.0);

    /// Half volume, the alarm level.
    pub const HALF: Volume = Volume(0.5);

    /// Full volume.
    pub const FULL: Volume = Volume(1.0);

    /// Create a `Volume`, clamping into `0.0..=1.0`.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Return the inner volume value.
    #[must_use]
    pub fn get(self) -> f32 {
        self.0
    }
}
