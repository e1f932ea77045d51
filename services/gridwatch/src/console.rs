//! View controller
//!
//! Drives the API client on behalf of the CLI: session restore, login and
//! logout, and the dashboard/alarm/device loads that fall back to placeholder
//! data when the live call fails.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::api::Registration;
use crate::client::ApiClient;
use crate::error::GridwatchError;
use crate::placeholder;
use crate::records::{Alarm, DashboardSummary, Device, User};

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

/// Where a loaded dataset came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Live,
    Placeholder,
}

/// A dataset together with its source
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub data: T,
    pub source: DataSource,
}

impl<T> Loaded<T> {
    pub fn is_placeholder(&self) -> bool {
        self.source == DataSource::Placeholder
    }
}

/// Outcome of restoring a session from the stored token
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    SignedOut,
    /// `user` is `None` when the profile payload could not be decoded
    SignedIn { user: Option<User> },
}

/// The main view shown after login
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub summary: Loaded<DashboardSummary>,
    pub alarms: Loaded<Vec<Alarm>>,
    pub devices: Loaded<Vec<Device>>,
}

#[derive(Debug, Clone)]
pub struct Console {
    client: ApiClient,
}

impl Console {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Check the stored token against the server.
    ///
    /// Any failure while fetching the current user means the token is no
    /// longer valid: it is cleared and the session reads as signed out.
    pub async fn restore_session(&self) -> crate::Result<SessionState> {
        if self.client.get_token().await?.is_none() {
            tracing::debug!("No stored token");
            return Ok(SessionState::SignedOut);
        }

        match self.client.current_user().await {
            Ok(payload) => {
                let user = decode::<User>(payload)
                    .inspect_err(|e| tracing::debug!("Undecodable user profile: {}", e))
                    .ok();
                Ok(SessionState::SignedIn { user })
            }
            Err(e) => {
                tracing::info!("Stored token rejected, signing out: {}", e);
                self.client.clear_token().await?;
                Ok(SessionState::SignedOut)
            }
        }
    }

    /// Log in and store the issued token. Resolves with the login payload.
    pub async fn login(&self, username: &str, password: &str) -> crate::Result<Value> {
        if username.is_empty() || password.is_empty() {
            return Err(GridwatchError::Validation(
                "username and password are required".to_string(),
            ));
        }

        let payload = self.client.login(username, password).await?;
        let token = payload
            .as_ref()
            .and_then(|p| p.get("token"))
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty());

        match (token, payload.as_ref()) {
            (Some(token), Some(payload)) => {
                self.client.set_token(token).await?;
                tracing::info!("Logged in as {}", username);
                Ok(payload.clone())
            }
            _ => Err(GridwatchError::Application {
                message: LOGIN_FAILED_MESSAGE.to_string(),
            }),
        }
    }

    pub async fn register(&self, registration: &Registration) -> crate::Result<Option<Value>> {
        if registration.username.is_empty()
            || registration.email.is_empty()
            || registration.password.is_empty()
        {
            return Err(GridwatchError::Validation(
                "username, email and password are required".to_string(),
            ));
        }

        let result = self.client.register(registration).await?;
        tracing::info!("Registered {}", registration.username);
        Ok(result)
    }

    pub async fn logout(&self) -> crate::Result<()> {
        self.client.clear_token().await?;
        tracing::info!("Logged out");
        Ok(())
    }

    pub async fn load_dashboard(&self) -> Loaded<DashboardSummary> {
        let result = self.client.dashboard_summary().await;
        live_or_placeholder("dashboard summary", result, placeholder::dashboard_summary)
    }

    pub async fn load_alarms(&self) -> Loaded<Vec<Alarm>> {
        let result = self.client.all_alarms().await;
        live_or_placeholder("alarms", result, placeholder::alarms)
    }

    pub async fn load_pending_alarms(&self) -> Loaded<Vec<Alarm>> {
        let result = self.client.pending_alarms().await;
        live_or_placeholder("pending alarms", result, placeholder::pending_alarms)
    }

    pub async fn load_devices(&self) -> Loaded<Vec<Device>> {
        let result = self.client.all_devices().await;
        live_or_placeholder("devices", result, placeholder::devices)
    }

    /// Dashboard, alarms and devices, loaded one after another
    pub async fn overview(&self) -> Overview {
        let summary = self.load_dashboard().await;
        let alarms = self.load_alarms().await;
        let devices = self.load_devices().await;
        Overview {
            summary,
            alarms,
            devices,
        }
    }

    pub async fn handle_alarm(&self, alarm_id: u64) -> crate::Result<Option<Value>> {
        let result = self.client.handle_alarm(alarm_id).await?;
        tracing::info!("Alarm {} handled", alarm_id);
        Ok(result)
    }

    pub async fn energy_data(&self) -> crate::Result<Option<Value>> {
        self.client.energy_data().await
    }

    pub async fn energy_trend(&self, start: &str, end: &str) -> crate::Result<Option<Value>> {
        self.client.energy_trend(start, end).await
    }

    pub async fn realtime_data(&self) -> crate::Result<Option<Value>> {
        self.client.realtime_data().await
    }
}

fn decode<T: DeserializeOwned>(payload: Option<Value>) -> crate::Result<T> {
    Ok(serde_json::from_value(payload.unwrap_or(Value::Null))?)
}

fn live_or_placeholder<T: DeserializeOwned>(
    what: &str,
    result: crate::Result<Option<Value>>,
    fallback: impl FnOnce() -> T,
) -> Loaded<T> {
    match result.and_then(decode::<T>) {
        Ok(data) => Loaded {
            data,
            source: DataSource::Live,
        },
        Err(e) => {
            tracing::warn!("Failed to load {}, showing placeholder data: {}", what, e);
            Loaded {
                data: fallback(),
                source: DataSource::Placeholder,
            }
        }
    }
}
