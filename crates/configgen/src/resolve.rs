//! Wheel resolution: classify devices, load mappings, rank into seats.

use std::path::Path;

use tracing::{debug, info};

use retrowheel_catalogue::{WheelMapping, load_mapping};
use retrowheel_device_types::{InputDevice, WheelVariant};

/// One classified, catalogue-mapped wheel, ready for seat assignment.
///
/// Lives for a single configuration pass; never persisted.
#[derive(Debug, Clone)]
pub struct ResolvedWheel {
    /// Classified wheel family.
    pub variant: WheelVariant,
    /// Display name copied from the device descriptor.
    pub name: String,
    /// Index under the legacy direct-input backend.
    pub dinput_index: i32,
    /// Index under the cross-platform (SDL2) backend.
    pub sdl_index: i32,
    /// Index under the platform-native (udev/evdev) backend.
    pub event_index: i32,
    /// Seat priority rank from the variant table; lower is preferred.
    pub rank: u8,
    /// Mapping from logical control name to physical control token,
    /// non-empty by construction.
    pub mapping: WheelMapping,
}

impl ResolvedWheel {
    fn from_device(device: &InputDevice, variant: WheelVariant, rank: u8, mapping: WheelMapping) -> Self {
        Self {
            variant,
            name: device.name.clone(),
            dinput_index: device.dinput_index,
            sdl_index: device.sdl_index,
            event_index: device.event_index,
            rank,
            mapping,
        }
    }
}

/// Classify the attached devices and keep every recognized wheel with a
/// non-empty catalogue mapping for `core`, sorted ascending by variant
/// rank. The sort is stable, so same-variant wheels keep their device
/// enumeration order.
pub fn resolve_wheels(
    resource_root: &Path,
    core: &str,
    devices: &[InputDevice],
) -> Vec<ResolvedWheel> {
    let mut wheels = Vec::new();
    for device in devices {
        if device.is_keyboard {
            continue;
        }
        let variant = WheelVariant::classify(device);
        let Some(rank) = variant.rank() else {
            debug!(device = %device.name, "not a recognized wheel");
            continue;
        };
        let mapping = load_mapping(resource_root, core, variant);
        if mapping.is_empty() {
            info!(
                core = %core,
                device = %device.name,
                variant = ?variant,
                "wheel has no mapping for this core, dropped"
            );
            continue;
        }
        wheels.push(ResolvedWheel::from_device(device, variant, rank, mapping));
    }
    wheels.sort_by_key(|wheel| wheel.rank);
    wheels
}
