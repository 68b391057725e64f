//! Device types and steering wheel classification for RetroWheel.
//!
//! This crate is I/O-free: it defines the input-device descriptor handed
//! over by the front-end's device feed and the pure classification of
//! those descriptors into known steering wheel families. Classification
//! and seat priority are static per-variant tables so that adding a wheel
//! family is a data change, not new branching logic.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod controls;
pub mod device;
pub mod ids;
pub mod variant;

pub use controls::{GAMEPAD_CONTROLS, is_gamepad_control};
pub use device::InputDevice;
pub use variant::WheelVariant;
