//! Input backend driver selection and compatibility adjustment.

use tracing::{debug, info};

use retrowheel_catalogue::DRIVER_KEY;
use retrowheel_config_store::{ConfigStore, keys};

use crate::resolve::ResolvedWheel;
use crate::Result;

/// The emulator's input backend drivers. Each one numbers devices under
/// its own index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDriver {
    /// Cross-platform SDL2 backend.
    Sdl2,
    /// Platform-native udev/evdev backend.
    Udev,
    /// Legacy direct-input backend.
    Dinput,
}

impl InputDriver {
    /// Parse a configured backend driver name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sdl2" => Some(Self::Sdl2),
            "udev" => Some(Self::Udev),
            "dinput" => Some(Self::Dinput),
            _ => None,
        }
    }

    /// Configured name of this backend driver.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sdl2 => "sdl2",
            Self::Udev => "udev",
            Self::Dinput => "dinput",
        }
    }

    /// The wheel's device index under this backend's index space.
    pub fn device_index(self, wheel: &ResolvedWheel) -> i32 {
        match self {
            Self::Sdl2 => wheel.sdl_index,
            Self::Udev => wheel.event_index,
            Self::Dinput => wheel.dinput_index,
        }
    }
}

/// Switch the configured backend driver if the top-priority wheel does
/// not support it.
///
/// Only the highest-priority wheel's `driver` constraint is consulted: a
/// single global backend choice must satisfy the most important wheel,
/// and lower-priority wheels take what they get. An unset driver key is
/// left untouched.
///
/// # Errors
///
/// Propagates configuration store write failures.
pub fn adjust_driver(store: &mut dyn ConfigStore, top: &ResolvedWheel) -> Result<()> {
    let Some(current) = store.get(keys::JOYPAD_DRIVER) else {
        debug!("no backend driver configured, nothing to adjust");
        return Ok(());
    };
    let Some(supported) = top.mapping.get(DRIVER_KEY) else {
        return Ok(());
    };

    let mut names = supported.split(',').map(str::trim).filter(|n| !n.is_empty());
    if supported
        .split(',')
        .map(str::trim)
        .any(|name| name == current)
    {
        debug!(driver = %current, "backend driver already supported by top wheel");
        return Ok(());
    }
    if let Some(first) = names.next() {
        info!(
            from = %current,
            to = %first,
            wheel = %top.name,
            "switching backend driver for top-priority wheel"
        );
        store.set(keys::JOYPAD_DRIVER, first)?;
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
    fn switches_to_first_supported_driver() -> TestResult {
        let mut store = MemoryConfigStore::from_pairs([(keys::JOYPAD_DRIVER, "dinput")]);
        adjust_driver(&mut store, &wheel(&[("driver", "udev,sdl2"), ("a", "0")]))?;
        assert_eq!(store.get(keys::JOYPAD_DRIVER).as_deref(), Some("udev"));
        Ok(())
    }

    #[test]
    fn keeps_driver_already_in_the_list() -> TestResult {
        let mut store = MemoryConfigStore::from_pairs([(keys::JOYPAD_DRIVER, "sdl2")]);
        adjust_driver(&mut store, &wheel(&[("driver", "udev,sdl2")]))?;
        assert_eq!(store.get(keys::JOYPAD_DRIVER).as_deref(), Some("sdl2"));
        Ok(())
    }

    #[test]
    fn no_driver_constraint_means_no_write() -> TestResult {
        let mut store = MemoryConfigStore::from_pairs([(keys::JOYPAD_DRIVER, "dinput")]);
        adjust_driver(&mut store, &wheel(&[("a", "0")]))?;
        assert_eq!(store.get(keys::JOYPAD_DRIVER).as_deref(), Some("dinput"));
        Ok(())
    }

    #[test]
    fn unset_driver_key_is_left_untouched() -> TestResult {
        let mut store = MemoryConfigStore::new();
        adjust_driver(&mut store, &wheel(&[("driver", "udev,sdl2")]))?;
        assert_eq!(store.get(keys::JOYPAD_DRIVER), None);
        Ok(())
    }

    #[test]
    fn constraint_list_tolerates_spaces() -> TestResult {
        let mut store = MemoryConfigStore::from_pairs([(keys::JOYPAD_DRIVER, "dinput")]);
        adjust_driver(&mut store, &wheel(&[("driver", " udev , sdl2 ")]))?;
        assert_eq!(store.get(keys::JOYPAD_DRIVER).as_deref(), Some("udev"));
        Ok(())
    }

    #[test]
    fn index_space_follows_the_backend() {
        let wheel = wheel(&[]);
        assert_eq!(InputDriver::Sdl2.device_index(&wheel), 1);
        assert_eq!(InputDriver::Udev.device_index(&wheel), 3);
        assert_eq!(InputDriver::Dinput.device_index(&wheel), 0);
    }

    #[test]
    fn driver_names_round_trip() {
        for driver in [InputDriver::Sdl2, InputDriver::Udev, InputDriver::Dinput] {
            assert_eq!(InputDriver::from_name(driver.name()), Some(driver));
        }
        assert_eq!(InputDriver::from_name("xinput"), None);
    }
}
