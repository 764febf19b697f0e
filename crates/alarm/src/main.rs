//! Demo entry point — runs the clock poll loop against the console
//! simulation.
//!
//! The loop itself stays thin: show the time, map the rotary onto the
//! backlight, sound the alarm at the `ALARM` time if one is set, silence it
//! on a button press. Every decision delegates to the `Devices` operations.

use std::thread;
use std::time::Duration;

use anyhow::Context;
use chrono::NaiveTime;
use tracing_subscriber::EnvFilter;

use alarm::config::{ALARM_ENV, APP_NAME, APP_VERSION};
use alarm::sim::{SimBoard, SimPlatform};
use alarm::Devices;
use platform::{pins, SystemClock, WallClock};

/// Cadence of the button/rotary poll.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    tracing::info!("{APP_NAME} v{APP_VERSION}");

    let mut armed = alarm_time()?;
    match armed {
        Some(at) => tracing::info!(%at, "alarm armed"),
        None => tracing::info!("no {ALARM_ENV} set; showing time only"),
    }

    let mut services = SimPlatform::default();
    let pins = pins::resolve(&mut services);
    tracing::info!(?pins, "resolved pin assignment");

    let mut board = SimBoard::new();
    let mut devices = Devices::init(&mut board, &pins).context("peripheral init failed")?;

    let clock = SystemClock;
    loop {
        devices.display_time()?;
        devices.adjust_brightness()?;

        if let Some(at) = armed {
            if clock.now() >= at {
                devices.start_buzzing()?;
            }
        }
        if devices.button_pressed()? {
            devices.stop_buzzing()?;
            armed = None;
        }

        thread::sleep(POLL_INTERVAL);
    }
}

/// Alarm trigger time from the environment, if one is set.
fn alarm_time() -> anyhow::Result<Option<NaiveTime>> {
    match std::env::var(ALARM_ENV) {
        Ok(raw) => {
            let at = NaiveTime::parse_from_str(&raw, "%H:%M:%S")
                .with_context(|| format!("invalid {ALARM_ENV} value {raw:?}, expected HH:MM:SS"))?;
            Ok(Some(at))
        }
        Err(_) => Ok(None),
    }
}
