//! Console simulation of the clock board
//!
//! Stands in for the vendor drivers when no kit is attached: display writes
//! and buzzer transitions are logged through `tracing`, and the rotary
//! position sweeps on its own so the brightness mapping is visible. Useful
//! for running the demo binary on a bare dev host; tests use the recording
//! mocks in `platform::mocks` instead.

use platform::{
    pins::{BridgeError, PlatformKind, PlatformServices},
    Board, Buzzer, CharDisplay, PushButton, Result, Rgb, RotaryEncoder, Volume,
    ROTARY_FULL_SCALE,
};

/// How far the simulated rotary moves between reads.
const ROTARY_STEP: f32 = 34.0;

/// Platform services of the simulated host.
///
/// Reports an unknown platform, so resolution exercises the bridge path;
/// registration always "succeeds".
#[derive(Debug, Default)]
pub struct SimPlatform;

impl PlatformServices for SimPlatform {
    fn detect(&self) -> PlatformKind {
        PlatformKind::Unknown(999)
    }

    fn add_serial_bridge(&mut self, port: &str) -> core::result::Result<(), BridgeError> {
        tracing::info!(port, "sim: serial bridge registered");
        Ok(())
    }
}

/// Board whose peripherals log to the console instead of touching hardware.
#[derive(Debug, Default)]
pub struct SimBoard;

impl SimBoard {
    /// A fresh simulated board.
    pub fn new() -> Self {
        Self
    }

    fn log_open(name: &str, pin: u32) {
        tracing::debug!(pin, "sim: opened {name}");
    }
}

impl Board for SimBoard {
    type Rotary = SimRotary;
    type Button = SimButton;
    type Buzzer = SimBuzzer;
    type Display = SimDisplay;

    fn open_rotary(&mut self, pin: u32) -> Result<SimRotary> {
        Self::log_open("rotary", pin);
        Ok(SimRotary { raw: 0.0 })
    }

    fn open_button(&mut self, pin: u32) -> Result<SimButton> {
        Self::log_open("button", pin);
        Ok(SimButton)
    }

    fn open_buzzer(&mut self, pin: u32) -> Result<SimBuzzer> {
        Self::log_open("buzzer", pin);
        Ok(SimBuzzer { sounding: false })
    }

    fn open_display(&mut self, bus: u32) -> Result<SimDisplay> {
        Self::log_open("display", bus);
        Ok(SimDisplay)
    }
}

/// Rotary encoder that sweeps the full scale by itself.
#[derive(Debug)]
pub struct SimRotary {
    raw: f32,
}

impl RotaryEncoder for SimRotary {
    fn position(&mut self) -> Result<f32> {
        let raw = self.raw;
        self.raw = (self.raw + ROTARY_STEP) % ROTARY_FULL_SCALE;
        Ok(raw)
    }
}

/// Button that is never pressed; stop the demo with ^C.
#[derive(Debug)]
pub struct SimButton;

impl PushButton for SimButton {
    fn is_pressed(&mut self) -> Result<bool> {
        Ok(false)
    }
}

/// Buzzer that logs sounding transitions.
#[derive(Debug)]
pub struct SimBuzzer {
    sounding: bool,
}

impl Buzzer for SimBuzzer {
    fn set_volume(&mut self, volume: Volume) -> Result<()> {
        tracing::debug!(volume = volume.get(), "sim: buzzer volume");
        Ok(())
    }

    fn play_tone(&mut self, frequency_hz: u32, duration_us: u64) -> Result<()> {
        // Self-loop transitions stay quiet so an armed alarm does not spam
        // the log every poll tick.
        if !self.sounding {
            tracing::info!(frequency_hz, duration_us, "sim: buzzer on");
        }
        self.sounding = true;
        Ok(())
    }

    fn stop_tone(&mut self) -> Result<()> {
        if self.sounding {
            tracing::info!("sim: buzzer off");
        }
        self.sounding = false;
        Ok(())
    }
}

/// Display that renders the line and backlight into the log.
#[derive(Debug)]
pub struct SimDisplay;

impl CharDisplay for SimDisplay {
    fn set_cursor(&mut self, row: u8, col: u8) -> Result<()> {
        tracing::trace!(row, col, "sim: cursor");
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        tracing::info!("sim: lcd |{text}|");
        Ok(())
    }

    fn set_backlight(&mut self, color: Rgb) -> Result<()> {
        tracing::debug!(
            red = color.red,
            green = color.green,
            blue = color.blue,
            "sim: backlight"
        );
        Ok(())
    }
}
