//! Authenticated account session

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::account::client::AccountClient;
use crate::config::AccountConfig;

/// One authenticated relationship with the device cloud.
///
/// Created by the bootstrap sequence after a successful login, then owned
/// by the `ContextStore` for the rest of the process. Subsystems reach the
/// account through this handle instead of re-authenticating; the camera
/// subsystem additionally reads its stream credentials from the retained
/// configuration.
pub struct AccountSession {
    client: Arc<dyn AccountClient>,
    config: AccountConfig,
    connected_at: DateTime<Utc>,
}

impl AccountSession {
    /// Wrap a freshly authenticated client
    pub fn new(client: Arc<dyn AccountClient>, config: AccountConfig) -> Self {
        Self {
            client,
            config,
            connected_at: Utc::now(),
        }
    }

    /// Authenticated client handle
    pub fn client(&self) -> &Arc<dyn AccountClient> {
        &self.client
    }

    /// Configuration the session was established with
    pub fn config(&self) -> &AccountConfig {
        &self.config
    }

    /// When the session was established
    pub fn connected_at(&self) -> DateTime<Utc> {
        self.connected_at
    }
}
