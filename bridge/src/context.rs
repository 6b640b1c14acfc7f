//! Shared session context for late-activating subsystems

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::account::session::AccountSession;
use crate::errors::ContextError;

/// Single-writer, many-reader holder of the authenticated session.
///
/// The bootstrap sequence stores the session exactly once, before any
/// activation request is issued; each subsystem reads it at its own
/// activation time instead of re-authenticating.
pub struct ContextStore {
    session: RwLock<Option<Arc<AccountSession>>>,
}

impl ContextStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            session: RwLock::new(None),
        }
    }

    /// Store the session. Called exactly once per successful bootstrap.
    pub async fn put(&self, session: Arc<AccountSession>) -> Result<(), ContextError> {
        let mut slot = self.session.write().await;
        if slot.is_some() {
            return Err(ContextError::AlreadyInitialized);
        }
        *slot = Some(session);
        debug!("Account session stored for subsystem use");
        Ok(())
    }

    /// Retrieve the session stored by the bootstrap sequence.
    ///
    /// Fails with `ContextError::NotInitialized` when read before a
    /// successful bootstrap, so a subsystem can never silently operate
    /// unauthenticated.
    pub async fn get(&self) -> Result<Arc<AccountSession>, ContextError> {
        let slot = self.session.read().await;
        slot.clone().ok_or(ContextError::NotInitialized)
    }
}

impl Default for ContextStore {
    fn default() -> Self {
        Self::new()
    }
}
