//! Steering wheel configuration pass for the RetroWheel front-end.
//!
//! The pass runs once, synchronously, before an emulation session starts:
//!
//! 1. [`resolve::resolve_wheels`] classifies the attached devices, loads
//!    each wheel's catalogue mapping, drops wheels without a usable
//!    mapping, and sorts the survivors into seat priority order.
//! 2. [`driver::adjust_driver`] switches the emulator's input backend
//!    driver when the top-priority wheel does not support the current one.
//! 3. [`writer`] clears every possible seat binding, then emits fresh
//!    joypad-index, device-type, and button/axis assignments per seat.
//!
//! Absence at any stage (no wheels, no catalogue, empty mappings) ends
//! the pass cleanly with a log line; only a configuration store write
//! failure surfaces as an error, and it aborts the pass immediately with
//! no rollback.
//!
//! # Example
//!
//! ```
//! use retrowheel_config_store::{ConfigStore, MemoryConfigStore};
//! use retrowheel_configgen::{WheelOptions, configure_wheels};
//! use retrowheel_device_types::InputDevice;
//!
//! # fn main() -> retrowheel_configgen::Result<()> {
//! let devices = vec![
//!     InputDevice::new("G29", 0x046D, 0xC24F, "/dev/input/event3").with_indexes(0, 0, 3),
//! ];
//! let mut store = MemoryConfigStore::new();
//! store.set("input_joypad_driver", "udev")?;
//!
//! let seats = configure_wheels(
//!     "swanstation",
//!     &devices,
//!     &WheelOptions::default(),
//!     std::path::Path::new("/usr/share/retrowheel"),
//!     &mut store,
//! )?;
//! // No catalogue under /usr/share/retrowheel in this example, so the
//! // pass is a clean no-op.
//! assert_eq!(seats, 0);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod driver;
pub mod error;
pub mod options;
pub mod resolve;
pub mod writer;

pub use driver::InputDriver;
pub use error::ConfigGenError;
pub use options::WheelOptions;
pub use resolve::{ResolvedWheel, resolve_wheels};
pub use writer::MAX_SEATS;

use std::path::Path;

use tracing::{debug, info};

use retrowheel_config_store::ConfigStore;
use retrowheel_device_types::InputDevice;

/// Result type for configuration pass operations.
pub type Result<T> = std::result::Result<T, ConfigGenError>;

/// Run the full wheel configuration pass for one emulator core.
///
/// `devices` is a snapshot of the attached input devices; the store is
/// exclusively owned by this pass for its duration. Returns the number
/// of seats configured, `0` for every absence case.
///
/// # Errors
///
/// Only configuration store write failures are returned; every other
/// condition is handled locally and logged.
pub fn configure_wheels(
    core: &str,
    devices: &[InputDevice],
    options: &WheelOptions,
    resource_root: &Path,
    store: &mut dyn ConfigStore,
) -> Result<usize> {
    if !options.enabled {
        debug!(core = %core, "wheel support disabled, skipping configuration");
        return Ok(0);
    }

    let wheels = resolve_wheels(resource_root, core, devices);
    if wheels.is_empty() {
        info!(core = %core, "no configurable wheels attached");
        return Ok(0);
    }

    if let Some(top) = wheels.first() {
        driver::adjust_driver(store, top)?;
    }

    writer::reset_bindings(store)?;
    writer::write_wheels(store, &wheels, options)?;

    let seats = wheels.len().min(usize::from(MAX_SEATS));
    info!(core = %core, seats, "wheel configuration pass complete");
    Ok(seats)
}
