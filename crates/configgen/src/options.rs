//! Feature flags consumed by the configuration pass.

/// Options from the front-end's feature flag bag that affect wheel
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelOptions {
    /// Whether wheel support is enabled at all. When `false` the pass is
    /// a no-op.
    pub enabled: bool,
    /// Select the standard gamepad device profile for every seat instead
    /// of the wheel-specific one.
    pub standard_gamepad_profile: bool,
}

impl Default for WheelOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            standard_gamepad_profile: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_wheel_profiles() {
        let options = WheelOptions::default();
        assert!(options.enabled);
        assert!(!options.standard_gamepad_profile);
    }
}
