//! The closed retro-pad control vocabulary.
//!
//! Only names in this list may ever be written as per-seat bindings.
//! Catalogue entries outside the list (notably the `driver` pseudo-key)
//! are metadata, not buttons, and the writer filters them against this
//! allow-list rather than inferring intent from catalogue content.

/// Logical control names of the emulated gamepad.
pub const GAMEPAD_CONTROLS: [&str; 24] = [
    "a",
    "b",
    "x",
    "y",
    "start",
    "select",
    "up",
    "down",
    "left",
    "right",
    "l",
    "r",
    "l2",
    "r2",
    "l3",
    "r3",
    "l_x_plus",
    "l_x_minus",
    "l_y_plus",
    "l_y_minus",
    "r_x_plus",
    "r_x_minus",
    "r_y_plus",
    "r_y_minus",
];

/// Return `true` if `name` is a member of the retro-pad vocabulary.
pub fn is_gamepad_control(name: &str) -> bool {
    GAMEPAD_CONTROLS.contains(&name)
}
