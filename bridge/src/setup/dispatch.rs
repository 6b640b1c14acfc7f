//! Capability-gated dispatch of device-category subsystems

use std::sync::Arc;

use futures::future::join_all;
use tracing::debug;

use crate::account::devices::DeviceRecord;
use crate::config::AccountConfig;
use crate::context::ContextStore;
use crate::host::{ActivationHost, ActivationRequest, Category};

/// Outcome of the planning step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchPlan {
    /// Authenticated, but nothing to activate (distinct from auth failure)
    NoDevices,

    /// Categories to activate, in capability-table order
    Activate(Vec<Category>),
}

/// Decide which subsystems to activate.
///
/// Pure function of the capability flags and device existence. The camera
/// category is gated by a non-empty camera mapping instead of a boolean
/// flag; disabled categories are skipped without a trace.
pub fn plan(config: &AccountConfig, devices: &[DeviceRecord]) -> DispatchPlan {
    if devices.is_empty() {
        return DispatchPlan::NoDevices;
    }

    let gates = [
        (config.light_enabled, Category::Light),
        (config.switch_enabled, Category::Switch),
        (config.sensors_enabled, Category::BinarySensor),
        (config.lock_enabled, Category::Lock),
        (!config.cameras.is_empty(), Category::Camera),
    ];

    let categories = gates
        .into_iter()
        .filter_map(|(enabled, category)| enabled.then_some(category))
        .collect();

    DispatchPlan::Activate(categories)
}

/// Issue one activation request per planned category.
///
/// Requests are independent and awaited as a burst; no category's
/// activation is ordered relative to another's. Outcomes are not
/// inspected: the host's activation contract is fire-and-forget.
pub async fn issue(
    plan: &DispatchPlan,
    host: &dyn ActivationHost,
    context: &Arc<ContextStore>,
) -> Vec<Category> {
    let categories = match plan {
        DispatchPlan::NoDevices => return Vec::new(),
        DispatchPlan::Activate(categories) => categories,
    };

    let requests = categories.iter().map(|&category| {
        debug!("Requesting activation of the {} platform", category);
        host.activate(ActivationRequest {
            category,
            context: Arc::clone(context),
        })
    });
    join_all(requests).await;

    categories.clone()
}
