//! Account client interface and the Nimbus HTTP implementation

use async_trait::async_trait;
use chrono::Utc;
use once_cell::sync::OnceCell;
use reqwest::{header, Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, error, warn};
use url::Url;
use uuid::Uuid;

use crate::account::devices::{DeviceListResponse, DeviceRecord};
use crate::config::AccountConfig;
use crate::errors::AuthError;
use crate::utils::sha256_hash;

/// Narrow interface the bootstrap sequence consumes.
///
/// Covers exactly what setup needs: one login round-trip, a validity
/// check, and device enumeration. Everything richer (commands, state
/// polling, token refresh) belongs to the subsystems' own use of the
/// concrete client.
#[async_trait]
pub trait AccountClient: Send + Sync {
    /// Perform the login round-trip.
    ///
    /// Completes without error when the service answered, even if it
    /// rejected the credentials; whether a usable session came out of it
    /// is `is_valid`'s question. Transport problems surface as
    /// `AuthError::Transport`.
    async fn login(&self) -> Result<(), AuthError>;

    /// Whether the last login produced a usable session
    fn is_valid(&self) -> bool;

    /// Enumerate devices registered to the account.
    ///
    /// An empty list is a valid outcome, not an error.
    async fn list_devices(&self) -> Result<Vec<DeviceRecord>, AuthError>;
}

/// HTTP client for the Nimbus device cloud
pub struct NimbusClient {
    client: Client,
    base_url: Url,
    username: String,
    password: SecretString,
    client_id: Uuid,
    access_token: OnceCell<String>,
    device_snapshot: OnceCell<Vec<DeviceRecord>>,
}

impl NimbusClient {
    /// Create a new client holding credentials.
    ///
    /// No network I/O happens here; the first round-trip is `login`.
    pub fn new(base_url: &str, config: &AccountConfig) -> Result<Self, AuthError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        let base_url = Url::parse(base_url)
            .map_err(|e| AuthError::Transport(format!("invalid base url: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            username: config.username.clone(),
            password: config.password.clone(),
            client_id: Uuid::new_v4(),
            access_token: OnceCell::new(),
            device_snapshot: OnceCell::new(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, AuthError> {
        self.base_url
            .join(path)
            .map_err(|e| AuthError::Transport(format!("invalid endpoint url: {}", e)))
    }
}

#[async_trait]
impl AccountClient for NimbusClient {
    async fn login(&self) -> Result<(), AuthError> {
        let url = self.endpoint("v1/account/login")?;
        debug!("POST {}", url);

        // Passwords cross the wire as a SHA256 digest, never as plaintext
        let body = serde_json::json!({
            "username": self.username,
            "password_digest": sha256_hash(self.password.expose_secret().as_bytes()),
            "client_id": self.client_id,
            "ts": Utc::now().timestamp_millis(),
        });

        let response = self.client.post(url).json(&body).send().await?;

        let status = response.status();
        if status.is_client_error() {
            // In-band rejection: the service answered, the credentials
            // did not pass. Not a transport failure.
            let text = response.text().await.unwrap_or_default();
            warn!("Login rejected: {} - {}", status, text);
            return Ok(());
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!("Login request failed: {} - {}", status, text);
            return Err(AuthError::Transport(format!("{}: {}", status, text)));
        }

        #[derive(serde::Deserialize)]
        struct LoginResponse {
            access_token: Option<String>,
            account_id: Option<String>,
        }

        let body: LoginResponse = response.json().await?;
        match body.access_token {
            Some(token) if !token.is_empty() => {
                debug!(
                    "Logged in to account {}",
                    body.account_id.as_deref().unwrap_or("unknown")
                );
                let _ = self.access_token.set(token);
            }
            _ => {
                warn!("Login response carried no access token");
            }
        }

        Ok(())
    }

    fn is_valid(&self) -> bool {
        self.access_token.get().is_some()
    }

    async fn list_devices(&self) -> Result<Vec<DeviceRecord>, AuthError> {
        // The snapshot is taken once per session; later callers get the
        // same list the dispatcher saw.
        if let Some(devices) = self.device_snapshot.get() {
            return Ok(devices.clone());
        }

        let token = self
            .access_token
            .get()
            .ok_or(AuthError::InvalidCredentials)?;
        let url = self.endpoint("v1/account/devices")?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!("Device enumeration failed: {} - {}", status, text);
            return Err(AuthError::Transport(format!("{}: {}", status, text)));
        }

        let body: DeviceListResponse = response.json().await?;
        let _ = self.device_snapshot.set(body.devices.clone());
        Ok(body.devices)
    }
}
