//! Per-core wheel mapping catalogue loader.
//!
//! One YAML catalogue per emulator core, located by path convention,
//! holding one entry per supported wheel variant:
//!
//! ```yaml
//! G29:
//!   driver: "udev,sdl2"
//!   a: 0
//!   b: 1
//!   l_x_minus: "-0"
//!   l_x_plus: "+0"
//!   select: nul
//! ```
//!
//! Every failure mode short of a store write is non-fatal here: a missing
//! file, a missing entry, a malformed document, or a malformed leaf all
//! degrade to an empty mapping, logged and skipped. Null values and the
//! `nul` token mean "unmapped" and are filtered out at load time, so an
//! empty loaded mapping is equivalent to "no entry found" downstream.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::{debug, warn};

use retrowheel_config_store::keys::UNMAPPED;
use retrowheel_device_types::WheelVariant;

/// Loaded mapping from logical control name to physical control token.
///
/// The `driver` pseudo-key (backend driver constraint) is carried
/// verbatim; the configuration writer's vocabulary filter keeps it out
/// of the emitted bindings.
pub type WheelMapping = BTreeMap<String, String>;

/// Catalogue key carrying the comma-separated backend driver constraint.
pub const DRIVER_KEY: &str = "driver";

/// Namespace prefix of the catalogue file names.
const CATALOGUE_NAMESPACE: &str = "libretro";

/// Resolve the catalogue file path for an emulator core.
pub fn catalogue_path(resource_root: &Path, core: &str) -> PathBuf {
    resource_root
        .join("inputmapping")
        .join("wheels")
        .join(format!("{CATALOGUE_NAMESPACE}_{core}_wheels.yml"))
}

/// Load the button mapping for one (core, variant) pairing.
///
/// Returns an empty mapping when the catalogue file, the variant entry,
/// or every usable leaf is absent. Never fails.
pub fn load_mapping(resource_root: &Path, core: &str, variant: WheelVariant) -> WheelMapping {
    let Some(entry_name) = variant.catalogue_name() else {
        return WheelMapping::new();
    };

    let path = catalogue_path(resource_root, core);
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(core = %core, path = ?path, "no wheel catalogue for core");
            return WheelMapping::new();
        }
        Err(err) => {
            warn!(core = %core, path = ?path, error = %err, "wheel catalogue unreadable");
            return WheelMapping::new();
        }
    };

    let document: Value = match serde_yaml::from_str(&text) {
        Ok(document) => document,
        Err(err) => {
            warn!(core = %core, path = ?path, error = %err, "wheel catalogue malformed");
            return WheelMapping::new();
        }
    };

    let Some(entry) = document.get(entry_name) else {
        debug!(core = %core, wheel = entry_name, "no catalogue entry for wheel");
        return WheelMapping::new();
    };
    let Some(entry) = entry.as_mapping() else {
        warn!(core = %core, wheel = entry_name, "catalogue entry is not a mapping");
        return WheelMapping::new();
    };

    let mut mapping = WheelMapping::new();
    for (key, value) in entry {
        let Some(name) = key.as_str() else {
            warn!(core = %core, wheel = entry_name, "non-string catalogue key skipped");
            continue;
        };
        match token_from_value(value) {
            Some(token) if token != UNMAPPED => {
                mapping.insert(name.to_string(), token);
            }
            Some(_) | None => {}
        }
    }
    mapping
}

/// Coerce a catalogue leaf into a control token. Button ids are commonly
/// written as bare YAML integers, so numbers are accepted alongside
/// strings; nulls mean "unmapped" and anything else is dropped.
fn token_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(token) => Some(token.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Null => None,
        _ => {
            warn!("non-scalar catalogue value skipped");
            None
        }
    }
}
