//! Main setup sequence
//!
//! One call per account: validate the raw configuration, establish the
//! session, store it for subsystem reuse, then dispatch the enabled
//! categories. Failures abort the sequence early; no subsystem is ever
//! activated after a failure.

use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info, warn};

use crate::account::client::AccountClient;
use crate::config::AccountConfig;
use crate::context::ContextStore;
use crate::errors::{AuthError, ConfigError};
use crate::host::{ActivationHost, Category};
use crate::setup::bootstrap::bootstrap;
use crate::setup::dispatch::{self, DispatchPlan};
use crate::setup::lifecycle::{SetupEvent, SetupLifecycle, SetupPhase};
use crate::setup::INTEGRATION;
use crate::utils::version_info;

/// Terminal outcome of one setup attempt.
///
/// Exactly one of three narratives happens: hard failure (bad
/// configuration or bad credentials), soft no-op (valid account, zero
/// devices), or normal operation (categories activated).
#[derive(Debug)]
pub enum SetupOutcome {
    /// Configuration shape rejected before any network activity
    ConfigRejected(ConfigError),

    /// Login failed or the session was unusable
    AuthFailed(AuthError),

    /// Authenticated, but the account holds no devices
    NoDevices,

    /// Activation was requested for these categories
    Activated(Vec<Category>),
}

/// Report produced by one run of the setup sequence
pub struct SetupReport {
    /// Terminal outcome of the attempt
    pub outcome: SetupOutcome,

    /// Terminal phase the sequence reached
    pub phase: SetupPhase,

    /// Context store handed to every activation request. Empty when the
    /// sequence failed before a session existed.
    pub context: Arc<ContextStore>,
}

impl SetupReport {
    /// Overall setup result: true iff authentication succeeded, regardless
    /// of whether any devices were found.
    pub fn succeeded(&self) -> bool {
        matches!(
            self.outcome,
            SetupOutcome::NoDevices | SetupOutcome::Activated(_)
        )
    }
}

/// Run the full bootstrap-and-dispatch sequence for one account.
///
/// `build_client` constructs the account client from validated
/// credentials without touching the network; `host` receives one
/// activation request per enabled category once a session is stored.
pub async fn run_setup<F>(
    raw: &Value,
    build_client: F,
    host: &dyn ActivationHost,
) -> SetupReport
where
    F: FnOnce(&AccountConfig) -> Result<Arc<dyn AccountClient>, AuthError>,
{
    let mut lifecycle = SetupLifecycle::new();
    let context = Arc::new(ContextStore::new());
    info!(
        "Starting {} account setup (bridge v{})",
        INTEGRATION,
        version_info().version
    );

    advance(&mut lifecycle, SetupEvent::Validate);
    let config = match AccountConfig::validate(raw) {
        Ok(config) => config,
        Err(err) => {
            error!("Rejecting {} configuration: {}", INTEGRATION, err);
            advance(&mut lifecycle, SetupEvent::ConfigRejected(err.to_string()));
            return SetupReport {
                outcome: SetupOutcome::ConfigRejected(err),
                phase: lifecycle.phase(),
                context,
            };
        }
    };

    advance(&mut lifecycle, SetupEvent::ConfigAccepted);
    let (session, devices) = match bootstrap(&config, build_client).await {
        Ok(pair) => pair,
        Err(err) => {
            error!("{} account setup failed: {}", INTEGRATION, err);
            advance(&mut lifecycle, SetupEvent::AuthFailed(err.to_string()));
            return SetupReport {
                outcome: SetupOutcome::AuthFailed(err),
                phase: lifecycle.phase(),
                context,
            };
        }
    };
    advance(&mut lifecycle, SetupEvent::Authenticated);

    // The session goes into the store before any activation request is
    // issued, so a subsystem can never observe an empty store.
    if let Err(err) = context.put(Arc::new(session)).await {
        error!("Context store defect during setup: {}", err);
    }

    let plan = dispatch::plan(&config, &devices);
    match &plan {
        DispatchPlan::NoDevices => {
            advance(&mut lifecycle, SetupEvent::AccountEmpty);
            warn!(
                "{} account authenticated but no devices were found",
                INTEGRATION
            );
            SetupReport {
                outcome: SetupOutcome::NoDevices,
                phase: lifecycle.phase(),
                context,
            }
        }
        DispatchPlan::Activate(_) => {
            advance(&mut lifecycle, SetupEvent::DevicesFound);
            let requested = dispatch::issue(&plan, host, &context).await;
            advance(&mut lifecycle, SetupEvent::ActivationsIssued);
            info!(
                "Activation requested for {} platform(s)",
                requested.len()
            );
            SetupReport {
                outcome: SetupOutcome::Activated(requested),
                phase: lifecycle.phase(),
                context,
            }
        }
    }
}

/// Drive the lifecycle FSM. The sequence above only produces valid
/// transitions; a rejected one is a defect worth a log line, not a reason
/// to abort setup.
fn advance(lifecycle: &mut SetupLifecycle, event: SetupEvent) {
    if let Err(err) = lifecycle.process(event) {
        error!("Setup lifecycle defect: {}", err);
    }
}
