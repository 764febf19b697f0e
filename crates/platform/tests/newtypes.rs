//! Type system enforcement tests for the display domain newtypes.
//! These newtypes keep malformed colors and levels from reaching the panel.

// ── Rgb ──────────────────────────────────────────────────────────────────────

#[test]
fn rgb_from_packed_decomposes_channels() {
    use platform::Rgb;
    let c = Rgb::from_packed(0x123456);
    assert_eq!((c.red, c.green, c.blue), (0x12, 0x34, 0x56));
}

#[test]
fn rgb_from_packed_blue_default() {
    use platform::Rgb;
    let c = Rgb::from_packed(0x0000ff);
    assert_eq!((c.red, c.green, c.blue), (0, 0, 255));
}

#[test]
fn rgb_from_packed_ignores_bits_above_24() {
    use platform::Rgb;
    // Only the low 24 bits address channels
    assert_eq!(Rgb::from_packed(0xff123456), Rgb::from_packed(0x123456));
}

#[test]
fn rgb_grayscale_sets_all_channels_equal() {
    use platform::{BacklightLevel, Rgb};
    let level = BacklightLevel::from_rotary(1020.0);
    let c = Rgb::grayscale(level);
    assert_eq!((c.red, c.green, c.blue), (255, 255, 255));
}

#[test]
fn rgb_is_three_bytes() {
    use platform::Rgb;
    assert_eq!(core::mem::size_of::<Rgb>(), 3);
}

// ── BacklightLevel ───────────────────────────────────────────────────────────

#[test]
fn backlight_level_zero_at_rest() {
    use platform::BacklightLevel;
    assert_eq!(BacklightLevel::from_rotary(0.0).get(), 0);
}

#[test]
fn backlight_level_full_scale_is_255() {
    use platform::BacklightLevel;
    assert_eq!(BacklightLevel::from_rotary(1020.0).get(), 255);
}

#[test]
fn backlight_level_midpoint_rounds_to_nearest() {
    use platform::BacklightLevel;
    // 510 / 1020 * 255 = 127.5, rounds half away from zero
    assert_eq!(BacklightLevel::from_rotary(510.0).get(), 128);
}

#[test]
fn backlight_level_clamps_above_full_scale() {
    use platform::BacklightLevel;
    assert_eq!(BacklightLevel::from_rotary(5000.0).get(), 255);
}

#[test]
fn backlight_level_clamps_negative_readings() {
    use platform::BacklightLevel;
    // The raw reading is not bounds-checked upstream
    assert_eq!(BacklightLevel::from_rotary(-40.0).get(), 0);
}

#[test]
fn backlight_level_is_one_byte() {
    use platform::BacklightLevel;
    assert_eq!(core::mem::size_of::<BacklightLevel>(), 1);
}

// ── Volume ───────────────────────────────────────────────────────────────────

#[test]
fn volume_new_clamps_above_one() {
    use platform::Volume;
    assert_eq!(Volume::new(3.5).get(), 1.0);
}

#[test]
fn volume_new_clamps_below_zero() {
    use platform::Volume;
    assert_eq!(Volume::new(-0.5).get(), 0.0);
}

#[test]
fn volume_constants() {
    use platform::Volume;
    assert_eq!(Volume::MUTE.get(), 0.0);
    assert_eq!(Volume::HALF.get(), 0.5);
    assert_eq!(Volume::FULL.get(), 1.0);
}
