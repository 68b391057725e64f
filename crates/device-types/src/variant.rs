//! Steering wheel family classification.

use serde::{Deserialize, Serialize};

use crate::device::InputDevice;
use crate::ids::{
    FANATEC_VENDOR_ID, LOGITECH_VENDOR_ID, THRUSTMASTER_VENDOR_ID, fanatec_product_ids,
    logitech_product_ids, thrustmaster_product_ids,
};

/// Known steering wheel families, plus the `None` sentinel for anything
/// that is not a recognized wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WheelVariant {
    /// Logitech G29.
    LogitechG29,
    /// Logitech G920.
    LogitechG920,
    /// Logitech G923.
    LogitechG923,
    /// Thrustmaster T300 RS (all editions).
    ThrustmasterT300,
    /// Thrustmaster T248.
    ThrustmasterT248,
    /// Fanatec CSL Elite wheel base.
    FanatecCslElite,
    /// Not a recognized wheel.
    None,
}

/// One classification signature: identity pair plus a lowercase path
/// fragment matched case-insensitively against the device path.
struct Signature {
    vendor_id: u16,
    product_id: u16,
    path_fragment: &'static str,
    variant: WheelVariant,
}

const SIGNATURES: &[Signature] = &[
    Signature {
        vendor_id: LOGITECH_VENDOR_ID,
        product_id: logitech_product_ids::G29_PS,
        path_fragment: "logitech_g29",
        variant: WheelVariant::LogitechG29,
    },
    Signature {
        vendor_id: LOGITECH_VENDOR_ID,
        product_id: logitech_product_ids::G29_XBOX,
        path_fragment: "046d:c260",
        variant: WheelVariant::LogitechG29,
    },
    Signature {
        vendor_id: LOGITECH_VENDOR_ID,
        product_id: logitech_product_ids::G920_V1,
        path_fragment: "046d:c261",
        variant: WheelVariant::LogitechG920,
    },
    Signature {
        vendor_id: LOGITECH_VENDOR_ID,
        product_id: logitech_product_ids::G920,
        path_fragment: "logitech_g920",
        variant: WheelVariant::LogitechG920,
    },
    Signature {
        vendor_id: LOGITECH_VENDOR_ID,
        product_id: logitech_product_ids::G923_XBOX,
        path_fragment: "046d:c26d",
        variant: WheelVariant::LogitechG923,
    },
    Signature {
        vendor_id: LOGITECH_VENDOR_ID,
        product_id: logitech_product_ids::G923_PS,
        path_fragment: "logitech_g923",
        variant: WheelVariant::LogitechG923,
    },
    Signature {
        vendor_id: THRUSTMASTER_VENDOR_ID,
        product_id: thrustmaster_product_ids::T300_RS,
        path_fragment: "thrustmaster_t300rs",
        variant: WheelVariant::ThrustmasterT300,
    },
    Signature {
        vendor_id: THRUSTMASTER_VENDOR_ID,
        product_id: thrustmaster_product_ids::T300_RS_PS4,
        path_fragment: "044f:b66d",
        variant: WheelVariant::ThrustmasterT300,
    },
    Signature {
        vendor_id: THRUSTMASTER_VENDOR_ID,
        product_id: thrustmaster_product_ids::T300_RS_GT,
        path_fragment: "044f:b66f",
        variant: WheelVariant::ThrustmasterT300,
    },
    Signature {
        vendor_id: THRUSTMASTER_VENDOR_ID,
        product_id: thrustmaster_product_ids::T248,
        path_fragment: "thrustmaster_t248",
        variant: WheelVariant::ThrustmasterT248,
    },
    Signature {
        vendor_id: FANATEC_VENDOR_ID,
        product_id: fanatec_product_ids::CSL_ELITE,
        path_fragment: "fanatec_csl_elite",
        variant: WheelVariant::FanatecCslElite,
    },
    Signature {
        vendor_id: FANATEC_VENDOR_ID,
        product_id: fanatec_product_ids::CSL_ELITE_PS4,
        path_fragment: "0eb7:0e03",
        variant: WheelVariant::FanatecCslElite,
    },
];

impl WheelVariant {
    /// Classify a device by identity, falling back to a case-insensitive
    /// path-fragment match. Pure and total: anything unrecognized is
    /// [`WheelVariant::None`].
    pub fn classify(device: &InputDevice) -> Self {
        for sig in SIGNATURES {
            if device.matches(sig.vendor_id, sig.product_id) {
                return sig.variant;
            }
        }
        let path = device.path.to_lowercase();
        for sig in SIGNATURES {
            if path.contains(sig.path_fragment) {
                return sig.variant;
            }
        }
        Self::None
    }

    /// Seat priority rank for this variant; lower is preferred. The order
    /// is fixed once here, independent of device enumeration order.
    ///
    /// Returns `None` for the sentinel, which has no seat priority.
    pub fn rank(self) -> Option<u8> {
        match self {
            Self::LogitechG29 => Some(0),
            Self::LogitechG920 => Some(1),
            Self::LogitechG923 => Some(2),
            Self::ThrustmasterT300 => Some(3),
            Self::ThrustmasterT248 => Some(4),
            Self::FanatecCslElite => Some(5),
            Self::None => None,
        }
    }

    /// Entry name used for this variant in the wheel mapping catalogues.
    pub fn catalogue_name(self) -> Option<&'static str> {
        match self {
            Self::LogitechG29 => Some("G29"),
            Self::LogitechG920 => Some("G920"),
            Self::LogitechG923 => Some("G923"),
            Self::ThrustmasterT300 => Some("T300RS"),
            Self::ThrustmasterT248 => Some("T248"),
            Self::FanatecCslElite => Some("CSLElite"),
            Self::None => None,
        }
    }

    /// Whether this is a recognized wheel (not the sentinel).
    pub fn is_wheel(self) -> bool {
        self != Self::None
    }
}
