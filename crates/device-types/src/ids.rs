//! USB vendor and product ID constants for known wheel families.

/// Logitech USB vendor ID.
pub const LOGITECH_VENDOR_ID: u16 = 0x046D;

/// Thrustmaster USB vendor ID.
pub const THRUSTMASTER_VENDOR_ID: u16 = 0x044F;

/// Fanatec (Endor AG) USB vendor ID.
pub const FANATEC_VENDOR_ID: u16 = 0x0EB7;

/// Known Logitech wheel product IDs.
pub mod logitech_product_ids {
    /// G29 racing wheel (PlayStation/PC).
    pub const G29_PS: u16 = 0xC24F;
    /// G29 racing wheel (Xbox mode variant).
    pub const G29_XBOX: u16 = 0xC260;
    /// G920 racing wheel — revision 1.
    pub const G920_V1: u16 = 0xC261;
    /// G920 racing wheel (Xbox/PC).
    pub const G920: u16 = 0xC262;
    /// G923 racing wheel (Xbox).
    pub const G923_XBOX: u16 = 0xC26D;
    /// G923 racing wheel (PlayStation).
    pub const G923_PS: u16 = 0xC26E;
}

/// Known Thrustmaster wheel product IDs.
pub mod thrustmaster_product_ids {
    /// T300 RS (PS4 mode).
    pub const T300_RS_PS4: u16 = 0xB66D;
    /// T300 RS (PS3 mode).
    pub const T300_RS: u16 = 0xB66E;
    /// T300 RS GT Edition.
    pub const T300_RS_GT: u16 = 0xB66F;
    /// T248 racing wheel.
    pub const T248: u16 = 0xB696;
}

/// Known Fanatec wheel product IDs.
pub mod fanatec_product_ids {
    /// CSL Elite wheel base.
    pub const CSL_ELITE: u16 = 0x0005;
    /// CSL Elite wheel base (PlayStation edition).
    pub const CSL_ELITE_PS4: u16 = 0x0E03;
}
