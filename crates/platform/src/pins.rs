//! Platform detection and pin-number resolution
//!
//! The clock board wires the same four peripherals everywhere; what changes
//! per platform is how their pins are addressed.
//!
//! | Signal          | On-chip | Bridged |
//! |-----------------|---------|---------|
//! | Display (I2C)   | bus 0   | bus 512 |
//! | Rotary (A0)     | 0       | 512     |
//! | Button (D4)     | 4       | 516     |
//! | Buzzer (D5)     | 5       | 517     |
//!
//! Bridged addressing adds [`SUBPLATFORM_OFFSET`] to every logical number,
//! so downstream code works with plain integers and never branches on the
//! platform again.
//!
//! Detection and sub-platform registration are reached through the
//! [`PlatformServices`] trait, injected by the caller. Tests drive every
//! branch with `mocks::MockPlatformServices`; production wires the vendor
//! I/O library behind the same trait.

use std::env;

use crate::error::Peripheral;

/// Environment variable that overrides the bridge serial port.
pub const PORT_ENV: &str = "PORT";

/// Serial port used for bridge registration when [`PORT_ENV`] is unset.
pub const DEFAULT_BRIDGE_PORT: &str = "/dev/ttyACM0";

/// Offset added to every pin number addressed through a serial bridge.
pub const SUBPLATFORM_OFFSET: u32 = 512;

/// Identity of the detected board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKind {
    /// Intel Galileo, first generation.
    GalileoGen1,
    /// Intel Galileo, second generation.
    GalileoGen2,
    /// Intel Edison on the Arduino-breakout (Fab C) board.
    EdisonFabC,
    /// A Firmata-speaking bridge adapter that is already registered.
    Firmata,
    /// Anything else; carries the raw platform id for logging.
    Unknown(u32),
}

/// How a platform's pins are reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Addressing {
    /// Direct on-chip pins, no offset.
    OnChip,
    /// Already addressed through a registered bridge.
    Bridged,
    /// Bridge addressing, but the sub-platform must be registered first.
    NeedsBridge,
}

impl PlatformKind {
    /// Pin addressing scheme for this platform.
    ///
    /// Adding a platform is a data addition here, not a new control path in
    /// [`resolve`].
    pub fn addressing(self) -> Addressing {
        match self {
            Self::GalileoGen1 | Self::GalileoGen2 | Self::EdisonFabC => Addressing::OnChip,
            Self::Firmata => Addressing::Bridged,
            Self::Unknown(_) => Addressing::NeedsBridge,
        }
    }
}

/// Pin and bus assignment for the four peripherals.
///
/// The four values are always produced together, either [`PinSet::ONBOARD`]
/// or its [`bridged`](PinSet::bridged) form; a partially-assigned set cannot
/// be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinSet {
    /// I2C bus of the character display.
    pub screen_bus: u32,
    /// Analog pin of the rotary encoder.
    pub rotary: u32,
    /// Digital pin of the push button.
    pub button: u32,
    /// Digital pin of the piezo buzzer.
    pub buzzer: u32,
}

impl PinSet {
    /// Direct on-chip assignment used by the known Intel boards.
    pub const ONBOARD: PinSet = PinSet {
        screen_bus: 0,
        rotary: 0,
        button: 4,
        buzzer: 5,
    };

    /// The same logical assignment addressed through a serial bridge.
    pub const fn bridged(self) -> PinSet {
        PinSet {
            screen_bus: self.screen_bus + SUBPLATFORM_OFFSET,
            rotary: self.rotary + SUBPLATFORM_OFFSET,
            button: self.button + SUBPLATFORM_OFFSET,
            buzzer: self.buzzer + SUBPLATFORM_OFFSET,
        }
    }

    /// Pin or bus number assigned to `peripheral`.
    pub fn pin(&self, peripheral: Peripheral) -> u32 {
        match peripheral {
            Peripheral::Rotary => self.rotary,
            Peripheral::Button => self.button,
            Peripheral::Buzzer => self.buzzer,
            Peripheral::Display => self.screen_bus,
        }
    }
}

/// Reasons a serial-bridge registration can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    /// The serial port could not be opened.
    #[error("serial port could not be opened")]
    PortUnavailable,
    /// The device on the port did not answer the bridge handshake.
    #[error("no bridge handshake on the port")]
    HandshakeFailed,
    /// The host I/O layer cannot register sub-platforms at all.
    #[error("sub-platform registration unsupported")]
    Unsupported,
}

/// Ambient platform services supplied by the vendor I/O layer.
///
/// Injected into [`resolve`] so platform branches are testable without
/// hardware.
pub trait PlatformServices {
    /// Identity of the board this process is running on.
    fn detect(&self) -> PlatformKind;

    /// Register a Firmata-style sub-platform reachable over `port`.
    fn add_serial_bridge(&mut self, port: &str) -> core::result::Result<(), BridgeError>;
}

/// Resolve the pin assignment for the detected platform.
///
/// Never fails: an unknown platform falls back to bridged addressing after a
/// best-effort bridge registration over the port named by the `PORT`
/// environment variable (default [`DEFAULT_BRIDGE_PORT`]). A failed
/// registration is logged and otherwise ignored — the numeric addressing
/// scheme is the same whether or not the bridge came up.
pub fn resolve(services: &mut impl PlatformServices) -> PinSet {
    let port = env::var(PORT_ENV).unwrap_or_else(|_| DEFAULT_BRIDGE_PORT.to_owned());
    resolve_with_port(services, &port)
}

/// [`resolve`] with an explicit bridge port instead of the environment.
pub fn resolve_with_port(services: &mut impl PlatformServices, port: &str) -> PinSet {
    let kind = services.detect();
    match kind.addressing() {
        Addressing::OnChip => PinSet::ONBOARD,
        Addressing::Bridged => PinSet::ONBOARD.bridged(),
        Addressing::NeedsBridge => {
            if let Err(err) = services.add_serial_bridge(port) {
                tracing::warn!(
                    platform = ?kind,
                    port,
                    %err,
                    "serial bridge registration failed; continuing with bridged pin numbers"
                );
            }
            PinSet::ONBOARD.bridged()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockPlatformServices;

    #[test]
    fn known_platforms_use_onboard_pins() {
        for kind in [
            PlatformKind::GalileoGen1,
            PlatformKind::GalileoGen2,
            PlatformKind::EdisonFabC,
        ] {
            let mut services = MockPlatformServices::new(kind);
            let pins = resolve_with_port(&mut services, DEFAULT_BRIDGE_PORT);
            assert_eq!(pins, PinSet::ONBOARD, "{kind:?}");
            assert!(
                services.registered.is_empty(),
                "no bridge registration for {kind:?}"
            );
        }
    }

    #[test]
    fn onboard_pin_values() {
        assert_eq!(PinSet::ONBOARD.screen_bus, 0);
        assert_eq!(PinSet::ONBOARD.rotary, 0);
        assert_eq!(PinSet::ONBOARD.button, 4);
        assert_eq!(PinSet::ONBOARD.buzzer, 5);
    }

    #[test]
    fn firmata_platform_is_bridged_without_registration() {
        let mut services = MockPlatformServices::new(PlatformKind::Firmata);
        let pins = resolve_with_port(&mut services, DEFAULT_BRIDGE_PORT);
        assert_eq!(pins, PinSet::ONBOARD.bridged());
        assert!(services.registered.is_empty());
    }

    #[test]
    fn bridged_adds_offset_to_all_four() {
        let pins = PinSet::ONBOARD.bridged();
        assert_eq!(pins.screen_bus, 512);
        assert_eq!(pins.rotary, 512);
        assert_eq!(pins.button, 516);
        assert_eq!(pins.buzzer, 517);
    }

    #[test]
    fn unknown_platform_registers_bridge_on_given_port() {
        let mut services = MockPlatformServices::new(PlatformKind::Unknown(99));
        let pins = resolve_with_port(&mut services, "/dev/ttyUSB3");
        assert_eq!(pins, PinSet::ONBOARD.bridged());
        assert_eq!(services.registered, ["/dev/ttyUSB3"]);
    }

    #[test]
    fn failed_bridge_registration_still_yields_bridged_pins() {
        let mut services = MockPlatformServices::failing_bridge(
            PlatformKind::Unknown(7),
            BridgeError::PortUnavailable,
        );
        let pins = resolve_with_port(&mut services, DEFAULT_BRIDGE_PORT);
        assert_eq!(pins, PinSet::ONBOARD.bridged());
        assert_eq!(services.registered, [DEFAULT_BRIDGE_PORT]);
    }

    #[test]
    fn resolve_reads_port_from_env() {
        // The only test touching the process environment; `resolve_with_port`
        // keeps every other test env-independent, so there is no race to
        // serialize against.
        let mut services = MockPlatformServices::new(PlatformKind::Unknown(0));
        env::remove_var(PORT_ENV);
        let pins = resolve(&mut services);
        assert_eq!(pins, PinSet::ONBOARD.bridged());
        assert_eq!(services.registered, [DEFAULT_BRIDGE_PORT]);

        env::set_var(PORT_ENV, "/dev/ttyS9");
        let pins = resolve(&mut services);
        env::remove_var(PORT_ENV);
        assert_eq!(pins, PinSet::ONBOARD.bridged());
        assert_eq!(
            services.registered,
            [DEFAULT_BRIDGE_PORT, "/dev/ttyS9"]
        );
    }

    #[test]
    fn pin_lookup_matches_fields() {
        let pins = PinSet::ONBOARD;
        assert_eq!(pins.pin(Peripheral::Rotary), pins.rotary);
        assert_eq!(pins.pin(Peripheral::Button), pins.button);
        assert_eq!(pins.pin(Peripheral::Buzzer), pins.buzzer);
        assert_eq!(pins.pin(Peripheral::Display), pins.screen_bus);
    }
}
