//! Configuration writer: reset the full seat range, then emit per-seat
//! assignments for each resolved wheel.

use tracing::{debug, info};

use retrowheel_config_store::{ConfigStore, keys};
use retrowheel_device_types::{GAMEPAD_CONTROLS, is_gamepad_control};

use crate::driver::InputDriver;
use crate::options::WheelOptions;
use crate::resolve::ResolvedWheel;
use crate::Result;

/// Highest addressable player seat.
pub const MAX_SEATS: u8 = 16;

/// Device-type selector value for the standard retro-pad profile.
const STANDARD_PAD_PROFILE: &str = "1";
/// Device-type selector value for the core's wheel-specific profile.
const WHEEL_PROFILE: &str = "2049";

/// Clear every binding for every addressable seat.
///
/// The full 1..=16 range is reset unconditionally so that no stale
/// binding from a previous session survives when fewer wheels are
/// configured this time than last time.
///
/// # Errors
///
/// Propagates configuration store write failures.
pub fn reset_bindings(store: &mut dyn ConfigStore) -> Result<()> {
    for seat in 1..=MAX_SEATS {
        for control in GAMEPAD_CONTROLS {
            store.set(&keys::axis(seat, control), keys::UNMAPPED)?;
            store.set(&keys::button(seat, control), keys::UNMAPPED)?;
        }
    }
    debug!(seats = MAX_SEATS, "seat bindings reset");
    Ok(())
}

/// Emit joypad index, device type, and button/axis bindings for each
/// wheel, seats numbered from 1 in priority order.
///
/// The backend driver is re-read per seat so the adjuster's rewrite is
/// observed. A wheel whose index under the active backend is negative,
/// or an unknown backend name, gets no joypad-index key at all.
///
/// # Errors
///
/// Propagates configuration store write failures; writes already
/// performed remain applied.
pub fn write_wheels(
    store: &mut dyn ConfigStore,
    wheels: &[ResolvedWheel],
    options: &WheelOptions,
) -> Result<()> {
    let seats = wheels.len().min(usize::from(MAX_SEATS));
    if seats < wheels.len() {
        info!(
            dropped = wheels.len() - seats,
            "more wheels attached than addressable seats"
        );
    }

    for (slot, wheel) in wheels.iter().take(seats).enumerate() {
        let seat = slot as u8 + 1;

        let backend = store
            .get(keys::JOYPAD_DRIVER)
            .and_then(|name| InputDriver::from_name(&name));
        if let Some(backend) = backend {
            let index = backend.device_index(wheel);
            if index >= 0 {
                store.set(&keys::joypad_index(seat), &index.to_string())?;
            }
        }

        let profile = if options.standard_gamepad_profile {
            STANDARD_PAD_PROFILE
        } else {
            WHEEL_PROFILE
        };
        store.set(&keys::device_type(seat), profile)?;

        for (control, token) in &wheel.mapping {
            if !is_gamepad_control(control) || token.as_str() == keys::UNMAPPED {
                continue;
            }
            if token.starts_with(['+', '-']) {
                store.set(&keys::axis(seat, control), token)?;
            } else {
                store.set(&keys::button(seat, control), token)?;
            }
        }

        info!(
            seat,
            wheel = %wheel.name,
            variant = ?wheel.variant,
            "wheel assigned to seat"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use retrowheel_catalogue::WheelMapping;
    use retrowheel_config_store::MemoryConfigStore;
    use retrowheel_device_types::WheelVariant;

    type TestResult = Result<()>;

    fn wheel(mapping: &[(&str, &str)]) -> ResolvedWheel {
        ResolvedWheel {
            variant: WheelVariant::LogitechG29,
            name: "Logitech G29".to_string(),
            dinput_index: 0,
            sdl_index: 1,
            event_index: 3,
            rank: 0,
            mapping: mapping
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<WheelMapping>(),
        }
    }

    #[test]
    fn reset_touches_every_seat_and_control() -> TestResult {
        let mut store = MemoryConfigStore::new();
        reset_bindings(&mut store)?;
        assert_eq!(
            store.len(),
            usize::from(MAX_SEATS) * GAMEPAD_CONTROLS.len() * 2
        );
        assert_eq!(store.get("input_player1_a_btn").as_deref(), Some("nul"));
        assert_eq!(
            store.get("input_player16_r_y_minus_axis").as_deref(),
            Some("nul")
        );
        Ok(())
    }

    #[test]
    fn reset_is_idempotent() -> TestResult {
        let mut once = MemoryConfigStore::new();
        reset_bindings(&mut once)?;
        let mut twice = once.clone();
        reset_bindings(&mut twice)?;
        assert_eq!(once, twice);
        Ok(())
    }

    #[test]
    fn reset_clears_stale_bindings() -> TestResult {
        let mut store = MemoryConfigStore::from_pairs([("input_player7_b_btn", "5")]);
        reset_bindings(&mut store)?;
        assert_eq!(store.get("input_player7_b_btn").as_deref(), Some("nul"));
        Ok(())
    }

    #[test]
    fn sign_prefixed_tokens_go_to_axis_keys() -> TestResult {
        let mut store = MemoryConfigStore::from_pairs([(keys::JOYPAD_DRIVER, "udev")]);
        let wheels = vec![wheel(&[("a", "2"), ("left", "-0"), ("right", "+0")])];
        write_wheels(&mut store, &wheels, &WheelOptions::default())?;
        assert_eq!(store.get("input_player1_a_btn").as_deref(), Some("2"));
        assert_eq!(store.get("input_player1_a_axis"), None);
        assert_eq!(store.get("input_player1_left_axis").as_deref(), Some("-0"));
        assert_eq!(store.get("input_player1_left_btn"), None);
        assert_eq!(store.get("input_player1_right_axis").as_deref(), Some("+0"));
        Ok(())
    }

    #[test]
    fn driver_pseudo_key_is_never_written_as_a_binding() -> TestResult {
        let mut store = MemoryConfigStore::from_pairs([(keys::JOYPAD_DRIVER, "udev")]);
        let wheels = vec![wheel(&[("driver", "udev,sdl2"), ("a", "2")])];
        write_wheels(&mut store, &wheels, &WheelOptions::default())?;
        assert_eq!(store.get("input_player1_driver_btn"), None);
        assert_eq!(store.get("input_player1_driver_axis"), None);
        Ok(())
    }

    #[test]
    fn index_follows_the_active_backend() -> TestResult {
        for (backend, expected) in [("udev", "3"), ("sdl2", "1"), ("dinput", "0")] {
            let mut store = MemoryConfigStore::from_pairs([(keys::JOYPAD_DRIVER, backend)]);
            write_wheels(&mut store, &[wheel(&[("a", "2")])], &WheelOptions::default())?;
            assert_eq!(
                store.get("input_player1_joypad_index").as_deref(),
                Some(expected),
                "backend: {backend}"
            );
        }
        Ok(())
    }

    #[test]
    fn unknown_or_unset_backend_writes_no_index() -> TestResult {
        for seed in [Some("xinput"), None] {
            let mut store = match seed {
                Some(name) => MemoryConfigStore::from_pairs([(keys::JOYPAD_DRIVER, name)]),
                None => MemoryConfigStore::new(),
            };
            write_wheels(&mut store, &[wheel(&[("a", "2")])], &WheelOptions::default())?;
            assert_eq!(store.get("input_player1_joypad_index"), None);
            assert_eq!(store.get("input_libretro_device_p1").as_deref(), Some("2049"));
        }
        Ok(())
    }

    #[test]
    fn negative_index_under_active_backend_writes_no_index() -> TestResult {
        let mut store = MemoryConfigStore::from_pairs([(keys::JOYPAD_DRIVER, "udev")]);
        let mut unaddressed = wheel(&[("a", "2")]);
        unaddressed.event_index = -1;
        write_wheels(&mut store, &[unaddressed], &WheelOptions::default())?;
        assert_eq!(store.get("input_player1_joypad_index"), None);
        Ok(())
    }

    #[test]
    fn device_type_follows_the_profile_flag() -> TestResult {
        let mut store = MemoryConfigStore::from_pairs([(keys::JOYPAD_DRIVER, "udev")]);
        let standard = WheelOptions {
            standard_gamepad_profile: true,
            ..WheelOptions::default()
        };
        write_wheels(&mut store, &[wheel(&[("a", "2")])], &standard)?;
        assert_eq!(store.get("input_libretro_device_p1").as_deref(), Some("1"));
        Ok(())
    }

    #[test]
    fn seats_increment_in_wheel_order() -> TestResult {
        let mut store = MemoryConfigStore::from_pairs([(keys::JOYPAD_DRIVER, "udev")]);
        let mut second = wheel(&[("a", "5")]);
        second.event_index = 7;
        write_wheels(
            &mut store,
            &[wheel(&[("a", "2")]), second],
            &WheelOptions::default(),
        )?;
        assert_eq!(store.get("input_player1_joypad_index").as_deref(), Some("3"));
        assert_eq!(store.get("input_player1_a_btn").as_deref(), Some("2"));
        assert_eq!(store.get("input_player2_joypad_index").as_deref(), Some("7"));
        assert_eq!(store.get("input_player2_a_btn").as_deref(), Some("5"));
        Ok(())
    }
}
