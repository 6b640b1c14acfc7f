//! Account configuration validation
//!
//! The host hands over one raw JSON blob per account. Everything in it is
//! checked here, once, before any network activity; the rest of the bridge
//! only ever sees the validated form.

use std::collections::BTreeMap;

use secrecy::SecretString;
use serde_json::{Map, Value};

use crate::errors::ConfigError;

/// Per-camera stream credentials
#[derive(Debug, Clone)]
pub struct CameraCredentials {
    /// Stream username
    pub username: String,

    /// Stream password
    pub password: SecretString,
}

/// Validated account configuration.
///
/// Immutable after validation. Unknown top-level fields in the blob are
/// tolerated so newer hosts can carry extra keys past older bridges.
#[derive(Debug, Clone)]
pub struct AccountConfig {
    /// Account username (e-mail address)
    pub username: String,

    /// Account password
    pub password: SecretString,

    /// Activate the binary-sensor platform
    pub sensors_enabled: bool,

    /// Activate the light platform
    pub light_enabled: bool,

    /// Activate the switch platform
    pub switch_enabled: bool,

    /// Activate the lock platform
    pub lock_enabled: bool,

    /// Per-camera stream credentials, keyed by camera name. The camera
    /// platform is activated only when this mapping is non-empty.
    pub cameras: BTreeMap<String, CameraCredentials>,
}

impl AccountConfig {
    /// Validate a raw configuration blob.
    ///
    /// Pure shape checking: account credentials must be present and
    /// non-empty, capability flags default to true when absent, the camera
    /// mapping defaults to empty. Fails on the first offending field.
    pub fn validate(raw: &Value) -> Result<Self, ConfigError> {
        let fields = raw.as_object().ok_or(ConfigError::WrongType {
            field: "configuration",
            expected: "mapping",
        })?;

        Ok(Self {
            username: require_string(fields, "username")?,
            password: require_string(fields, "password")?.into(),
            sensors_enabled: optional_flag(fields, "sensors_enabled")?,
            light_enabled: optional_flag(fields, "light_enabled")?,
            switch_enabled: optional_flag(fields, "switch_enabled")?,
            lock_enabled: optional_flag(fields, "lock_enabled")?,
            cameras: optional_cameras(fields)?,
        })
    }
}

fn require_string(fields: &Map<String, Value>, field: &'static str) -> Result<String, ConfigError> {
    match fields.get(field) {
        None => Err(ConfigError::MissingField(field)),
        Some(Value::String(value)) if value.is_empty() => Err(ConfigError::MissingField(field)),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(ConfigError::WrongType {
            field,
            expected: "string",
        }),
    }
}

fn optional_flag(fields: &Map<String, Value>, field: &'static str) -> Result<bool, ConfigError> {
    match fields.get(field) {
        None => Ok(true),
        Some(Value::Bool(value)) => Ok(*value),
        Some(_) => Err(ConfigError::WrongType {
            field,
            expected: "boolean",
        }),
    }
}

fn optional_cameras(
    fields: &Map<String, Value>,
) -> Result<BTreeMap<String, CameraCredentials>, ConfigError> {
    let Some(value) = fields.get("cameras") else {
        return Ok(BTreeMap::new());
    };
    let entries = value.as_object().ok_or(ConfigError::WrongType {
        field: "cameras",
        expected: "mapping",
    })?;

    let mut cameras = BTreeMap::new();
    for (name, entry) in entries {
        let credentials = camera_entry(entry).map_err(|reason| ConfigError::InvalidCameraEntry {
            name: name.clone(),
            reason,
        })?;
        cameras.insert(name.clone(), credentials);
    }
    Ok(cameras)
}

fn camera_entry(entry: &Value) -> Result<CameraCredentials, String> {
    let fields = entry
        .as_object()
        .ok_or_else(|| "entry must be a mapping".to_string())?;
    let username = require_string(fields, "username").map_err(|e| e.to_string())?;
    let password = require_string(fields, "password").map_err(|e| e.to_string())?;
    Ok(CameraCredentials {
        username,
        password: password.into(),
    })
}
