//! Session bootstrap: construct, login, verify, enumerate

use std::sync::Arc;

use tracing::{error, info};

use crate::account::client::AccountClient;
use crate::account::devices::DeviceRecord;
use crate::account::session::AccountSession;
use crate::config::AccountConfig;
use crate::errors::AuthError;

/// Establish the authenticated session and take the device snapshot.
///
/// Strictly ordered: construct the client, log in, check validity,
/// enumerate. No step runs if the previous one failed, and nothing is
/// retried here. Client construction must not perform network I/O; the
/// login round-trip is this sequence's to make.
pub async fn bootstrap<F>(
    config: &AccountConfig,
    build_client: F,
) -> Result<(AccountSession, Vec<DeviceRecord>), AuthError>
where
    F: FnOnce(&AccountConfig) -> Result<Arc<dyn AccountClient>, AuthError>,
{
    let client = build_client(config)?;

    client.login().await?;

    if !client.is_valid() {
        error!("Not connected to the Nimbus account. Unable to add devices. Check your credentials.");
        return Err(AuthError::InvalidCredentials);
    }
    info!("Connected to Nimbus account");

    let devices = client.list_devices().await?;
    info!("Enumerated {} device(s) from the account", devices.len());

    Ok((AccountSession::new(client, config.clone()), devices))
}
