//! Setup lifecycle FSM unit tests

use nimbus_bridge::setup::lifecycle::{SetupEvent, SetupLifecycle, SetupPhase};

#[test]
fn test_lifecycle_initial_phase() {
    let lifecycle = SetupLifecycle::new();
    assert_eq!(lifecycle.phase(), SetupPhase::Idle);
    assert!(lifecycle.error().is_none());
    assert!(!lifecycle.is_terminal());
    assert!(!lifecycle.succeeded());
}

#[test]
fn test_lifecycle_success_flow() {
    let mut lifecycle = SetupLifecycle::new();

    // Idle -> Validating
    lifecycle.process(SetupEvent::Validate).unwrap();
    assert_eq!(lifecycle.phase(), SetupPhase::Validating);

    // Validating -> Authenticating
    lifecycle.process(SetupEvent::ConfigAccepted).unwrap();
    assert_eq!(lifecycle.phase(), SetupPhase::Authenticating);

    // Authenticating -> Enumerating
    lifecycle.process(SetupEvent::Authenticated).unwrap();
    assert_eq!(lifecycle.phase(), SetupPhase::Enumerating);

    // Enumerating -> Dispatching
    lifecycle.process(SetupEvent::DevicesFound).unwrap();
    assert_eq!(lifecycle.phase(), SetupPhase::Dispatching);

    // Dispatching -> Done
    lifecycle.process(SetupEvent::ActivationsIssued).unwrap();
    assert_eq!(lifecycle.phase(), SetupPhase::Done);
    assert!(lifecycle.is_terminal());
    assert!(lifecycle.succeeded());
}

#[test]
fn test_lifecycle_config_rejection_flow() {
    let mut lifecycle = SetupLifecycle::new();

    lifecycle.process(SetupEvent::Validate).unwrap();
    lifecycle
        .process(SetupEvent::ConfigRejected("missing password".to_string()))
        .unwrap();

    assert_eq!(lifecycle.phase(), SetupPhase::Failed);
    assert_eq!(lifecycle.error(), Some("missing password"));
    assert!(lifecycle.is_terminal());
    assert!(!lifecycle.succeeded());
}

#[test]
fn test_lifecycle_empty_account_flow() {
    let mut lifecycle = SetupLifecycle::new();

    lifecycle.process(SetupEvent::Validate).unwrap();
    lifecycle.process(SetupEvent::ConfigAccepted).unwrap();
    lifecycle.process(SetupEvent::Authenticated).unwrap();
    lifecycle.process(SetupEvent::AccountEmpty).unwrap();

    // Terminal but non-fatal: the attempt still counts as a success
    assert_eq!(lifecycle.phase(), SetupPhase::EmptyDevices);
    assert!(lifecycle.is_terminal());
    assert!(lifecycle.succeeded());
}

#[test]
fn test_lifecycle_invalid_transitions() {
    let mut lifecycle = SetupLifecycle::new();

    // Cannot dispatch from Idle
    assert!(lifecycle.process(SetupEvent::DevicesFound).is_err());

    // No way forward out of Failed
    lifecycle.process(SetupEvent::Validate).unwrap();
    lifecycle
        .process(SetupEvent::ConfigRejected("bad".to_string()))
        .unwrap();
    assert!(lifecycle.process(SetupEvent::ConfigAccepted).is_err());
    assert!(lifecycle.process(SetupEvent::ActivationsIssued).is_err());
    assert_eq!(lifecycle.phase(), SetupPhase::Failed);
}
