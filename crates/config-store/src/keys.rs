//! Builders for the structured configuration key names.
//!
//! Per-seat binding keys follow the emulator's
//! `input_player<seat>_<control>_<axis|btn>` convention; a small set of
//! global keys selects the input backend driver and per-seat device type.

/// Global key holding the active input backend driver name.
pub const JOYPAD_DRIVER: &str = "input_joypad_driver";

/// Value marking a binding as unmapped.
pub const UNMAPPED: &str = "nul";

/// Key holding the joypad device index for a seat.
pub fn joypad_index(seat: u8) -> String {
    format!("input_player{seat}_joypad_index")
}

/// Key selecting the libretro device type for a seat.
pub fn device_type(seat: u8) -> String {
    format!("input_libretro_device_p{seat}")
}

/// Button binding key for a seat and logical control.
pub fn button(seat: u8, control: &str) -> String {
    format!("input_player{seat}_{control}_btn")
}

/// Axis binding key for a seat and logical control.
pub fn axis(seat: u8, control: &str) -> String {
    format!("input_player{seat}_{control}_axis")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_seat_keys_follow_the_emulator_convention() {
        assert_eq!(joypad_index(1), "input_player1_joypad_index");
        assert_eq!(device_type(16), "input_libretro_device_p16");
        assert_eq!(button(2, "a"), "input_player2_a_btn");
        assert_eq!(axis(3, "l_x_plus"), "input_player3_l_x_plus_axis");
    }

    #[test]
    fn axis_and_button_keys_differ_only_in_suffix() {
        let b = button(4, "left");
        let a = axis(4, "left");
        assert_eq!(b.strip_suffix("_btn"), a.strip_suffix("_axis"));
    }
}
