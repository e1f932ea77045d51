//! Named API operations
//!
//! Thin wrappers over [`ApiClient::request`]: each one fixes the endpoint and
//! verb and passes the payload through untouched.

use serde::Serialize;
use serde_json::Value;

use crate::client::ApiClient;
use crate::io::HttpMethod;

pub const LOGIN: &str = "/api/auth/login";
pub const REGISTER: &str = "/api/auth/register";
pub const CURRENT_USER: &str = "/api/auth/me";
pub const ALARMS: &str = "/api/alarm";
pub const PENDING_ALARMS: &str = "/api/alarm/pending";
pub const DEVICES: &str = "/api/energy/devices";
pub const ENERGY_DATA: &str = "/api/energy/data";
pub const DASHBOARD_SUMMARY: &str = "/api/dashboard/summary";
pub const REALTIME_DATA: &str = "/api/dashboard/realtime";

pub fn handle_alarm_endpoint(alarm_id: u64) -> String {
    format!("{}/{}/handle", ALARMS, alarm_id)
}

pub fn energy_trend_endpoint(start: &str, end: &str) -> String {
    format!("/api/energy/trend?start={}&end={}", start, end)
}

/// Body of the login call
#[derive(Debug, Clone, Serialize)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Body of the registration call
#[derive(Debug, Clone, Default, Serialize)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
    pub phone: String,
}

impl ApiClient {
    pub async fn login(&self, username: &str, password: &str) -> crate::Result<Option<Value>> {
        let body = serde_json::to_value(Credentials { username, password })?;
        self.request(LOGIN, HttpMethod::Post, Some(&body)).await
    }

    pub async fn register(&self, registration: &Registration) -> crate::Result<Option<Value>> {
        let body = serde_json::to_value(registration)?;
        self.request(REGISTER, HttpMethod::Post, Some(&body)).await
    }

    pub async fn current_user(&self) -> crate::Result<Option<Value>> {
        self.get(CURRENT_USER).await
    }

    pub async fn all_alarms(&self) -> crate::Result<Option<Value>> {
        self.get(ALARMS).await
    }

    pub async fn pending_alarms(&self) -> crate::Result<Option<Value>> {
        self.get(PENDING_ALARMS).await
    }

    pub async fn handle_alarm(&self, alarm_id: u64) -> crate::Result<Option<Value>> {
        self.request(&handle_alarm_endpoint(alarm_id), HttpMethod::Put, None)
            .await
    }

    pub async fn all_devices(&self) -> crate::Result<Option<Value>> {
        self.get(DEVICES).await
    }

    pub async fn energy_data(&self) -> crate::Result<Option<Value>> {
        self.get(ENERGY_DATA).await
    }

    pub async fn energy_trend(&self, start: &str, end: &str) -> crate::Result<Option<Value>> {
        self.get(&energy_trend_endpoint(start, end)).await
    }

    pub async fn dashboard_summary(&self) -> crate::Result<Option<Value>> {
        self.get(DASHBOARD_SUMMARY).await
    }

    pub async fn realtime_data(&self) -> crate::Result<Option<Value>> {
        self.get(REALTIME_DATA).await
    }
}
