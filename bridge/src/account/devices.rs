//! Device enumeration models

use serde::Deserialize;

/// A device registered to the account.
///
/// The bootstrap sequence only cares that devices exist; the fields beyond
/// the id are carried for the subsystems and for diagnostics.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceRecord {
    /// Cloud-assigned device id
    pub id: String,

    /// User-facing nickname
    pub nickname: Option<String>,

    /// Product model identifier
    pub product_model: Option<String>,
}

/// Wire envelope for the device list endpoint.
///
/// An absent or empty `devices` array is a legitimate answer, not an
/// error: new accounts own no devices yet.
#[derive(Debug, Deserialize)]
pub struct DeviceListResponse {
    #[serde(default)]
    pub devices: Vec<DeviceRecord>,
}
