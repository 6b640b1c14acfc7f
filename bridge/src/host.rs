//! Host activation interface
//!
//! The bridge never starts device subsystems itself; it asks the embedding
//! host to. `ActivationHost` is the seam the host implements, and an
//! `ActivationRequest` carries everything a subsystem start needs.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::context::ContextStore;

/// Device categories the bridge can activate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Light,
    Switch,
    BinarySensor,
    Lock,
    Camera,
}

impl Category {
    /// Platform name understood by the host's discovery surface
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Light => "light",
            Category::Switch => "switch",
            Category::BinarySensor => "binary_sensor",
            Category::Lock => "lock",
            Category::Camera => "camera",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single activation request handed to the host
#[derive(Clone)]
pub struct ActivationRequest {
    /// Category whose subsystem should start
    pub category: Category,

    /// Shared context the subsystem reads at its own activation time
    pub context: Arc<ContextStore>,
}

/// Host-side activation capability.
///
/// Activation is fire-and-forget from the bridge's perspective: the host
/// owns what "starting a platform" means, and the bridge does not observe
/// the outcome.
#[async_trait]
pub trait ActivationHost: Send + Sync {
    /// Ask the host to start the subsystem for one category
    async fn activate(&self, request: ActivationRequest);
}
