//! Display records decoded from API payloads
//!
//! The client itself never inspects payloads. The console decodes them into
//! these types only to render them.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// Status values exactly as the server stores them
pub const ALARM_PENDING: &str = "未处理";
pub const ALARM_HANDLED: &str = "已处理";
pub const DEVICE_NORMAL: &str = "正常";
pub const DEVICE_ABNORMAL: &str = "异常";

/// One alarm row. Every field is optional on the wire; the server's detailed
/// listing sends `occur_time` and the device name instead of the device id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alarm {
    #[serde(deserialize_with = "lenient_id")]
    pub alarm_id: u64,
    #[serde(deserialize_with = "lenient_text")]
    pub device_id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub device_name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub area_name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub alarm_type: String,
    #[serde(alias = "occur_time", deserialize_with = "lenient_text")]
    pub alarm_time: String,
    #[serde(deserialize_with = "lenient_text")]
    pub alarm_level: String,
    #[serde(deserialize_with = "lenient_text")]
    pub alarm_content: String,
    #[serde(deserialize_with = "lenient_text")]
    pub status: String,
}

impl Alarm {
    /// Only pending alarms can be handled
    pub fn is_pending(&self) -> bool {
        self.status == ALARM_PENDING
    }

    /// Alarm id to hand to the handle operation, if this row can be handled
    pub fn handle_target(&self) -> Option<u64> {
        (self.is_pending() && self.alarm_id != 0).then_some(self.alarm_id)
    }

    pub fn device_label(&self) -> &str {
        if self.device_name.is_empty() {
            &self.device_id
        } else {
            &self.device_name
        }
    }

    pub fn status_label(&self) -> &str {
        match self.status.as_str() {
            ALARM_PENDING => "Pending",
            ALARM_HANDLED => "Handled",
            other => other,
        }
    }
}

/// One device row. Accepts both the dashboard names and the `equipment_*`
/// names used by the energy endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Device {
    #[serde(alias = "equipment_id", deserialize_with = "lenient_text")]
    pub device_id: String,
    #[serde(alias = "equipment_name", deserialize_with = "lenient_text")]
    pub device_name: String,
    #[serde(alias = "equipment_type", deserialize_with = "lenient_text")]
    pub device_type: String,
    #[serde(alias = "installed_location", deserialize_with = "lenient_text")]
    pub installation_location: String,
    #[serde(deserialize_with = "lenient_text")]
    pub status: String,
}

impl Device {
    pub fn is_normal(&self) -> bool {
        self.status == DEVICE_NORMAL
    }

    pub fn status_label(&self) -> &str {
        match self.status.as_str() {
            DEVICE_NORMAL => "Normal",
            DEVICE_ABNORMAL => "Abnormal",
            other => other,
        }
    }
}

/// Dashboard counters. Missing or null fields read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default, deserialize_with = "zero_if_null")]
    pub total_alarms: u64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub pending_alarms: u64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub total_energy: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub peak_load: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

fn zero_if_null<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ids and codes come back as strings from some endpoints and numbers from others
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

fn lenient_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(n)) => n
            .as_u64()
            .ok_or_else(|| D::Error::custom(format!("invalid id {}", n))),
        Some(Value::String(s)) => s.trim().parse().map_err(D::Error::custom),
        Some(other) => Err(D::Error::custom(format!("invalid id {}", other))),
    }
}
