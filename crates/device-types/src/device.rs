//! Input device descriptor consumed from the front-end's device feed.

use serde::{Deserialize, Serialize};

/// One attached input device, as enumerated by the front-end.
///
/// The three backend index fields address the same physical device under
/// the emulator's three input backends, which each number devices
/// differently. An index of `-1` means the device is not addressable
/// under that backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDevice {
    /// Human-readable device name.
    pub name: String,
    /// USB vendor ID.
    pub vendor_id: u16,
    /// USB product ID.
    pub product_id: u16,
    /// Stable device path (e.g. `/dev/input/event3` or a udev by-id path).
    pub path: String,
    /// Index under the legacy direct-input backend.
    #[serde(default = "unaddressed")]
    pub dinput_index: i32,
    /// Index under the cross-platform (SDL2) backend.
    #[serde(default = "unaddressed")]
    pub sdl_index: i32,
    /// Index under the platform-native (udev/evdev) backend.
    #[serde(default = "unaddressed")]
    pub event_index: i32,
    /// Generic sequential enumeration index.
    #[serde(default = "unaddressed")]
    pub index: i32,
    /// Whether the device is a keyboard (excluded from wheel handling).
    #[serde(default)]
    pub is_keyboard: bool,
}

fn unaddressed() -> i32 {
    -1
}

impl InputDevice {
    /// Create a descriptor with identity fields set and all indexes unaddressed.
    pub fn new(name: impl Into<String>, vendor_id: u16, product_id: u16, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vendor_id,
            product_id,
            path: path.into(),
            dinput_index: -1,
            sdl_index: -1,
            event_index: -1,
            index: -1,
            is_keyboard: false,
        }
    }

    /// Set all three backend indexes at once.
    pub fn with_indexes(mut self, dinput: i32, sdl: i32, event: i32) -> Self {
        self.dinput_index = dinput;
        self.sdl_index = sdl;
        self.event_index = event;
        self
    }

    /// Set the generic sequential index.
    pub fn with_index(mut self, index: i32) -> Self {
        self.index = index;
        self
    }

    /// Mark the device as a keyboard.
    pub fn keyboard(mut self) -> Self {
        self.is_keyboard = true;
        self
    }

    /// Check the device identity against a vendor/product pair.
    pub fn matches(&self, vendor_id: u16, product_id: u16) -> bool {
        self.vendor_id == vendor_id && self.product_id == product_id
    }
}
