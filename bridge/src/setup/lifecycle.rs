//! Finite state machine for the setup sequence

/// Setup phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupPhase {
    /// Initial phase, nothing attempted yet
    Idle,

    /// Configuration shape being checked
    Validating,

    /// Login round-trip and validity check in flight
    Authenticating,

    /// Device enumeration in flight
    Enumerating,

    /// Activation requests being issued
    Dispatching,

    /// Authenticated, but the account holds no devices (terminal, non-fatal)
    EmptyDevices,

    /// Configuration or authentication rejected (terminal, non-fatal)
    Failed,

    /// Every planned activation request was issued (terminal)
    Done,
}

/// Setup event
#[derive(Debug, Clone)]
pub enum SetupEvent {
    /// Begin configuration validation
    Validate,

    /// Configuration accepted
    ConfigAccepted,

    /// Configuration rejected
    ConfigRejected(String),

    /// Login completed and the session is usable
    Authenticated,

    /// Login failed or the session is unusable
    AuthFailed(String),

    /// Enumeration returned at least one device
    DevicesFound,

    /// Enumeration returned no devices
    AccountEmpty,

    /// Every planned activation request was issued
    ActivationsIssued,
}

/// Setup sequence FSM.
///
/// `Failed` and `EmptyDevices` are terminal but non-fatal: the sequence
/// reports its outcome without bringing the host down. `Done` is the only
/// phase reached through subsystem activation.
#[derive(Debug, Clone)]
pub struct SetupLifecycle {
    phase: SetupPhase,
    error: Option<String>,
}

impl SetupLifecycle {
    /// Create a new FSM in the idle phase
    pub fn new() -> Self {
        Self {
            phase: SetupPhase::Idle,
            error: None,
        }
    }

    /// Get current phase
    pub fn phase(&self) -> SetupPhase {
        self.phase
    }

    /// Get error message if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the sequence has reached a terminal phase
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.phase,
            SetupPhase::EmptyDevices | SetupPhase::Failed | SetupPhase::Done
        )
    }

    /// Overall setup result: authentication succeeded, devices or not
    pub fn succeeded(&self) -> bool {
        matches!(self.phase, SetupPhase::EmptyDevices | SetupPhase::Done)
    }

    /// Process an event and transition phase
    pub fn process(&mut self, event: SetupEvent) -> Result<(), String> {
        let new_phase = match (&self.phase, &event) {
            // From Idle
            (SetupPhase::Idle, SetupEvent::Validate) => SetupPhase::Validating,

            // From Validating
            (SetupPhase::Validating, SetupEvent::ConfigAccepted) => SetupPhase::Authenticating,
            (SetupPhase::Validating, SetupEvent::ConfigRejected(err)) => {
                self.error = Some(err.clone());
                SetupPhase::Failed
            }

            // From Authenticating
            (SetupPhase::Authenticating, SetupEvent::Authenticated) => SetupPhase::Enumerating,
            (SetupPhase::Authenticating, SetupEvent::AuthFailed(err)) => {
                self.error = Some(err.clone());
                SetupPhase::Failed
            }

            // From Enumerating
            (SetupPhase::Enumerating, SetupEvent::DevicesFound) => SetupPhase::Dispatching,
            (SetupPhase::Enumerating, SetupEvent::AccountEmpty) => SetupPhase::EmptyDevices,

            // From Dispatching
            (SetupPhase::Dispatching, SetupEvent::ActivationsIssued) => SetupPhase::Done,

            // Invalid transitions
            (phase, event) => {
                return Err(format!("Invalid transition: {:?} -> {:?}", phase, event));
            }
        };

        self.phase = new_phase;
        Ok(())
    }
}

impl Default for SetupLifecycle {
    fn default() -> Self {
        Self::new()
    }
}
