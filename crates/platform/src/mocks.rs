//! Mock implementations for testing
//!
//! Every mock peripheral records into one shared [`MockState`], so a test
//! can drive the sensors and inspect the actuator command stream through a
//! single handle while the device container owns the peripherals
//! exclusively.

#![cfg(any(test, feature = "mocks"))]
#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveTime;

use crate::board::Board;
use crate::buzzer::{Buzzer, Volume};
use crate::clock::WallClock;
use crate::color::Rgb;
use crate::display::CharDisplay;
use crate::error::{Peripheral, PlatformError, Result};
use crate::input::{PushButton, RotaryEncoder};
use crate::pins::{BridgeError, PlatformKind, PlatformServices};

// ── Platform services ───────────────────────────────────────────────────────

/// Scripted platform identity and bridge outcome for resolver tests.
pub struct MockPlatformServices {
    kind: PlatformKind,
    bridge_result: core::result::Result<(), BridgeError>,
    /// Ports passed to `add_serial_bridge`, in call order.
    pub registered: Vec<String>,
}

impl MockPlatformServices {
    /// Services reporting `kind`, with bridge registration succeeding.
    pub fn new(kind: PlatformKind) -> Self {
        Self {
            kind,
            bridge_result: Ok(()),
            registered: Vec::new(),
        }
    }

    /// Services reporting `kind`, with bridge registration failing with `err`.
    pub fn failing_bridge(kind: PlatformKind, err: BridgeError) -> Self {
        Self {
            kind,
            bridge_result: Err(err),
            registered: Vec::new(),
        }
    }
}

impl PlatformServices for MockPlatformServices {
    fn detect(&self) -> PlatformKind {
        self.kind
    }

    fn add_serial_bridge(&mut self, port: &str) -> core::result::Result<(), BridgeError> {
        self.registered.push(port.to_owned());
        self.bridge_result
    }
}

// ── Shared peripheral state ─────────────────────────────────────────────────

/// Recording state shared by the four mock peripherals of one [`MockBoard`].
#[derive(Debug, Default)]
pub struct MockState {
    /// Raw position the rotary encoder reports.
    pub rotary_position: f32,
    /// Whether the button reports pressed.
    pub button_pressed: bool,
    /// Last volume set on the buzzer, `None` until the first command.
    pub volume: Option<f32>,
    /// Currently sounding tone as `(frequency_hz, duration_us)`.
    pub playing: Option<(u32, u64)>,
    /// Number of stop commands the buzzer has received.
    pub stop_commands: u32,
    /// Last cursor position set on the display.
    pub cursor: Option<(u8, u8)>,
    /// Every string written to the display, in order.
    pub written: Vec<String>,
    /// Last backlight color set on the display.
    pub backlight: Option<Rgb>,
}

// ── Board and peripherals ───────────────────────────────────────────────────

/// Mock board: opens recording peripherals, optionally failing one open.
pub struct MockBoard {
    state: Rc<RefCell<MockState>>,
    fail_on: Option<Peripheral>,
    /// `(peripheral, pin)` for every successful open, in call order.
    pub opened: Vec<(Peripheral, u32)>,
}

impl MockBoard {
    /// A board whose opens all succeed.
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(MockState::default())),
            fail_on: None,
            opened: Vec::new(),
        }
    }

    /// A board whose open of `peripheral` fails with a construction error.
    pub fn failing_on(peripheral: Peripheral) -> Self {
        Self {
            fail_on: Some(peripheral),
            ..Self::new()
        }
    }

    /// Handle to the shared recording state.
    pub fn state(&self) -> Rc<RefCell<MockState>> {
        Rc::clone(&self.state)
    }

    fn open(&mut self, peripheral: Peripheral, pin: u32) -> Result<Rc<RefCell<MockState>>> {
        if self.fail_on == Some(peripheral) {
            return Err(PlatformError::Construction { peripheral, pin });
        }
        self.opened.push((peripheral, pin));
        Ok(Rc::clone(&self.state))
    }
}

impl Default for MockBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for MockBoard {
    type Rotary = MockRotary;
    type Button = MockButton;
    type Buzzer = MockBuzzer;
    type Display = MockDisplay;

    fn open_rotary(&mut self, pin: u32) -> Result<MockRotary> {
        Ok(MockRotary {
            state: self.open(Peripheral::Rotary, pin)?,
        })
    }

    fn open_button(&mut self, pin: u32) -> Result<MockButton> {
        Ok(MockButton {
            state: self.open(Peripheral::Button, pin)?,
        })
    }

    fn open_buzzer(&mut self, pin: u32) -> Result<MockBuzzer> {
        Ok(MockBuzzer {
            state: self.open(Peripheral::Buzzer, pin)?,
        })
    }

    fn open_display(&mut self, bus: u32) -> Result<MockDisplay> {
        Ok(MockDisplay {
            state: self.open(Peripheral::Display, bus)?,
        })
    }
}

/// Mock rotary encoder reading from the shared state.
#[derive(Debug)]
pub struct MockRotary {
    state: Rc<RefCell<MockState>>,
}

impl RotaryEncoder for MockRotary {
    fn position(&mut self) -> Result<f32> {
        Ok(self.state.borrow().rotary_position)
    }
}

/// Mock push button reading from the shared state.
#[derive(Debug)]
pub struct MockButton {
    state: Rc<RefCell<MockState>>,
}

impl PushButton for MockButton {
    fn is_pressed(&mut self) -> Result<bool> {
        Ok(self.state.borrow().button_pressed)
    }
}

/// Mock buzzer recording commands into the shared state.
#[derive(Debug)]
pub struct MockBuzzer {
    state: Rc<RefCell<MockState>>,
}

impl Buzzer for MockBuzzer {
    fn set_volume(&mut self, volume: Volume) -> Result<()> {
        self.state.borrow_mut().volume = Some(volume.get());
        Ok(())
    }

    fn play_tone(&mut self, frequency_hz: u32, duration_us: u64) -> Result<()> {
        self.state.borrow_mut().playing = Some((frequency_hz, duration_us));
        Ok(())
    }

    fn stop_tone(&mut self) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.playing = None;
        state.stop_commands += 1;
        Ok(())
    }
}

/// Mock character display recording writes into the shared state.
#[derive(Debug)]
pub struct MockDisplay {
    state: Rc<RefCell<MockState>>,
}

impl CharDisplay for MockDisplay {
    fn set_cursor(&mut self, row: u8, col: u8) -> Result<()> {
        self.state.borrow_mut().cursor = Some((row, col));
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.state.borrow_mut().written.push(text.to_owned());
        Ok(())
    }

    fn set_backlight(&mut self, color: Rgb) -> Result<()> {
        self.state.borrow_mut().backlight = Some(color);
        Ok(())
    }
}

// ── Clock ───────────────────────────────────────────────────────────────────

/// Wall clock pinned to a fixed time of day.
#[derive(Debug, Clone, Copy)]
pub struct MockClock {
    /// The time `now()` always returns.
    pub time: NaiveTime,
}

impl MockClock {
    /// Clock pinned to `hour:min:sec`, panicking on an invalid time (tests).
    pub fn at(hour: u32, min: u32, sec: u32) -> Self {
        Self {
            time: NaiveTime::from_hms_opt(hour, min, sec).unwrap(),
        }
    }
}

impl WallClock for MockClock {
    fn now(&self) -> NaiveTime {
        self.time
    }
}
