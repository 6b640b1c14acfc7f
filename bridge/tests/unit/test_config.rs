//! Configuration validation unit tests

use secrecy::ExposeSecret;
use serde_json::json;

use nimbus_bridge::config::AccountConfig;
use nimbus_bridge::errors::ConfigError;

#[test]
fn test_minimal_config_gets_defaults() {
    let config = AccountConfig::validate(&json!({
        "username": "user@example.com",
        "password": "hunter2",
    }))
    .unwrap();

    assert_eq!(config.username, "user@example.com");
    assert_eq!(config.password.expose_secret(), "hunter2");
    assert!(config.sensors_enabled);
    assert!(config.light_enabled);
    assert!(config.switch_enabled);
    assert!(config.lock_enabled);
    assert!(config.cameras.is_empty());
}

#[test]
fn test_explicit_flags_respected() {
    let config = AccountConfig::validate(&json!({
        "username": "user@example.com",
        "password": "hunter2",
        "sensors_enabled": false,
        "light_enabled": true,
        "switch_enabled": false,
        "lock_enabled": false,
    }))
    .unwrap();

    assert!(!config.sensors_enabled);
    assert!(config.light_enabled);
    assert!(!config.switch_enabled);
    assert!(!config.lock_enabled);
}

#[test]
fn test_missing_username_rejected() {
    let err = AccountConfig::validate(&json!({
        "password": "hunter2",
    }))
    .unwrap_err();

    assert!(matches!(err, ConfigError::MissingField("username")));
}

#[test]
fn test_missing_password_rejected() {
    let err = AccountConfig::validate(&json!({
        "username": "user@example.com",
    }))
    .unwrap_err();

    assert!(matches!(err, ConfigError::MissingField("password")));
}

#[test]
fn test_blank_credentials_rejected() {
    let err = AccountConfig::validate(&json!({
        "username": "",
        "password": "hunter2",
    }))
    .unwrap_err();

    assert!(matches!(err, ConfigError::MissingField("username")));
}

#[test]
fn test_wrong_type_username_rejected() {
    let err = AccountConfig::validate(&json!({
        "username": 42,
        "password": "hunter2",
    }))
    .unwrap_err();

    assert!(matches!(
        err,
        ConfigError::WrongType {
            field: "username",
            ..
        }
    ));
}

#[test]
fn test_wrong_type_flag_rejected() {
    let err = AccountConfig::validate(&json!({
        "username": "user@example.com",
        "password": "hunter2",
        "light_enabled": "yes",
    }))
    .unwrap_err();

    assert!(matches!(
        err,
        ConfigError::WrongType {
            field: "light_enabled",
            ..
        }
    ));
}

#[test]
fn test_unknown_fields_tolerated() {
    let config = AccountConfig::validate(&json!({
        "username": "user@example.com",
        "password": "hunter2",
        "scan_interval": 60,
        "region": "eu-west",
    }))
    .unwrap();

    assert_eq!(config.username, "user@example.com");
}

#[test]
fn test_non_mapping_blob_rejected() {
    let err = AccountConfig::validate(&json!(["username", "password"])).unwrap_err();

    assert!(matches!(
        err,
        ConfigError::WrongType {
            field: "configuration",
            ..
        }
    ));
}

#[test]
fn test_camera_entries_parsed() {
    let config = AccountConfig::validate(&json!({
        "username": "user@example.com",
        "password": "hunter2",
        "cameras": {
            "porch": { "username": "cam", "password": "stream-pw" },
            "garage": { "username": "cam2", "password": "stream-pw2" },
        },
    }))
    .unwrap();

    assert_eq!(config.cameras.len(), 2);
    let porch = &config.cameras["porch"];
    assert_eq!(porch.username, "cam");
    assert_eq!(porch.password.expose_secret(), "stream-pw");
}

#[test]
fn test_camera_entry_missing_password_rejected() {
    let err = AccountConfig::validate(&json!({
        "username": "user@example.com",
        "password": "hunter2",
        "cameras": {
            "porch": { "username": "cam" },
        },
    }))
    .unwrap_err();

    match err {
        ConfigError::InvalidCameraEntry { name, reason } => {
            assert_eq!(name, "porch");
            assert!(reason.contains("password"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_camera_entry_not_a_mapping_rejected() {
    let err = AccountConfig::validate(&json!({
        "username": "user@example.com",
        "password": "hunter2",
        "cameras": {
            "porch": "cam:stream-pw",
        },
    }))
    .unwrap_err();

    assert!(matches!(err, ConfigError::InvalidCameraEntry { .. }));
}

#[test]
fn test_cameras_wrong_type_rejected() {
    let err = AccountConfig::validate(&json!({
        "username": "user@example.com",
        "password": "hunter2",
        "cameras": ["porch"],
    }))
    .unwrap_err();

    assert!(matches!(
        err,
        ConfigError::WrongType {
            field: "cameras",
            ..
        }
    ));
}
