//! Owning container for the clock peripherals and the operations on them
//!
//! [`Devices`] holds the four handles exclusively for the life of the
//! process. Dropping it releases all four together — there is no way to
//! release a subset or to release twice.

use std::borrow::Cow;

use platform::{
    Board, BacklightLevel, Buzzer, CharDisplay, PinSet, PushButton, Result, Rgb, RotaryEncoder,
    SystemClock, Volume, WallClock, LCD_COLUMNS, SUSTAIN,
};

use crate::config::{ALARM_TONE_HZ, DEFAULT_TEXT_COLOR, TIME_COLOR};

/// The four peripherals of the clock board plus the wall-clock source.
///
/// Construct with [`Devices::init`]; every operation is a blocking call into
/// the driver layer that returns before the next statement runs.
pub struct Devices<B: Board, C = SystemClock> {
    rotary: B::Rotary,
    button: B::Button,
    buzzer: B::Buzzer,
    screen: B::Display,
    clock: C,
}

impl<B: Board> Devices<B, SystemClock> {
    /// Open all four peripherals from the resolved pin assignment.
    ///
    /// Opens in a fixed order — rotary, button, buzzer, display — then
    /// silences the buzzer, so the alarm is never left in an unknown state
    /// after init. Any single failure aborts the whole set: a clock with a
    /// missing peripheral is not worth running, so callers treat the error
    /// as fatal.
    pub fn init(board: &mut B, pins: &PinSet) -> Result<Self> {
        Self::init_with_clock(board, pins, SystemClock)
    }
}

impl<B: Board, C: WallClock> Devices<B, C> {
    /// [`Devices::init`] with an explicit wall-clock source.
    pub fn init_with_clock(board: &mut B, pins: &PinSet, clock: C) -> Result<Self> {
        let rotary = board.open_rotary(pins.rotary)?;
        let button = board.open_button(pins.button)?;
        let buzzer = board.open_buzzer(pins.buzzer)?;
        let screen = board.open_display(pins.screen_bus)?;

        let mut devices = Self {
            rotary,
            button,
            buzzer,
            screen,
            clock,
        };
        // The driver may come up with a tone still queued from a previous
        // run.
        devices.stop_buzzing()?;
        tracing::debug!("peripherals ready");
        Ok(devices)
    }

    /// Render `text` on the first line with the default blue backlight.
    pub fn message(&mut self, text: &str) -> Result<()> {
        self.message_with_color(text, DEFAULT_TEXT_COLOR)
    }

    /// Render `text` on the first line and set the backlight to `color`.
    ///
    /// The cursor is reset to the origin first, and short text is padded to
    /// the full line, so each call fully overwrites the previous one.
    /// Longer text is handed to the panel as-is; the hardware discards the
    /// overflow.
    pub fn message_with_color(&mut self, text: &str, color: Rgb) -> Result<()> {
        self.screen.set_cursor(0, 0)?;
        self.screen.write(&pad_line(text))?;
        self.screen.set_backlight(color)
    }

    /// Show the current time of day, `HH:MM:SS` (12-hour, zero-padded),
    /// with the green time backlight.
    pub fn display_time(&mut self) -> Result<()> {
        let now = self.clock.now();
        self.message_with_color(&now.format("%I:%M:%S").to_string(), TIME_COLOR)
    }

    /// Wash the backlight gray from the rotary position.
    ///
    /// The raw reading is mapped onto one 0–255 level and applied equally to
    /// all three channels; the displayed text is untouched.
    pub fn adjust_brightness(&mut self) -> Result<()> {
        let raw = self.rotary.position()?;
        let level = BacklightLevel::from_rotary(raw);
        self.screen.set_backlight(Rgb::grayscale(level))
    }

    /// Whether the button is currently held down, for the caller's poll
    /// loop.
    pub fn button_pressed(&mut self) -> Result<bool> {
        self.button.is_pressed()
    }

    /// Sound the alarm: half volume, 2600 Hz, sustained until
    /// [`stop_buzzing`](Devices::stop_buzzing). Idempotent.
    pub fn start_buzzing(&mut self) -> Result<()> {
        self.buzzer.set_volume(Volume::HALF)?;
        self.buzzer.play_tone(ALARM_TONE_HZ, SUSTAIN)
    }

    /// Silence the alarm. Idempotent.
    ///
    /// The stop command is issued twice: a buzzer driver may leave a tone
    /// queued after a single stop.
    pub fn stop_buzzing(&mut self) -> Result<()> {
        self.buzzer.set_volume(Volume::MUTE)?;
        self.buzzer.stop_tone()?;
        self.buzzer.stop_tone()
    }
}

/// Pad `text` with trailing spaces to a full display line.
///
/// Input already at or past [`LCD_COLUMNS`] characters passes through
/// untouched; truncation is the panel's job, not this layer's.
fn pad_line(text: &str) -> Cow<'_, str> {
    let len = text.chars().count();
    if len >= LCD_COLUMNS {
        Cow::Borrowed(text)
    } else {
        let mut line = String::with_capacity(LCD_COLUMNS);
        line.push_str(text);
        for _ in len..LCD_COLUMNS {
            line.push(' ');
        }
        Cow::Owned(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_line_fills_short_text_to_a_full_line() {
        assert_eq!(pad_line("HELLO"), "HELLO           ");
        assert_eq!(pad_line("HELLO").len(), LCD_COLUMNS);
    }

    #[test]
    fn pad_line_passes_empty_text_as_blank_line() {
        assert_eq!(pad_line(""), " ".repeat(LCD_COLUMNS));
    }

    #[test]
    fn pad_line_leaves_exact_width_untouched() {
        let exact = "0123456789abcdef";
        assert!(matches!(pad_line(exact), Cow::Borrowed(_)));
        assert_eq!(pad_line(exact), exact);
    }

    #[test]
    fn pad_line_leaves_long_text_untouched() {
        let long = "A_STRING_LONGER_THAN_16_CHARS";
        assert_eq!(pad_line(long), long);
    }
}
