//! Fixed datasets shown when a live load fails

use crate::records::{
    Alarm, DashboardSummary, Device, ALARM_HANDLED, ALARM_PENDING, DEVICE_ABNORMAL, DEVICE_NORMAL,
};

pub fn dashboard_summary() -> DashboardSummary {
    DashboardSummary {
        total_alarms: 15,
        pending_alarms: 5,
        total_energy: 2450.80,
        peak_load: 125.50,
    }
}

#[rustfmt::skip]
pub fn alarms() -> Vec<Alarm> {
    [
        (1, "1001", "Temperature", "2025-12-20 10:30:00", "High", "Device temperature above threshold", ALARM_PENDING),
        (2, "1002", "Voltage", "2025-12-20 09:45:00", "Medium", "Voltage fluctuation too large", ALARM_HANDLED),
        (3, "1003", "Current", "2025-12-20 08:15:00", "High", "Current above rated value", ALARM_PENDING),
        (4, "1004", "Communication", "2025-12-19 16:30:00", "Low", "Device communication interrupted", ALARM_HANDLED),
        (5, "1005", "Power", "2025-12-19 14:20:00", "Medium", "Power factor too low", ALARM_PENDING),
    ]
    .into_iter()
    .map(|(id, device, kind, time, level, content, status)| Alarm {
        alarm_id: id,
        device_id: device.to_string(),
        alarm_type: kind.to_string(),
        alarm_time: time.to_string(),
        alarm_level: level.to_string(),
        alarm_content: content.to_string(),
        status: status.to_string(),
        ..Default::default()
    })
    .collect()
}

pub fn pending_alarms() -> Vec<Alarm> {
    alarms().into_iter().filter(Alarm::is_pending).collect()
}

pub fn devices() -> Vec<Device> {
    [
        ("1001", "Transformer A", "Transformer", "Substation 1", DEVICE_NORMAL),
        ("1002", "Transformer B", "Transformer", "Substation 2", DEVICE_NORMAL),
        ("1003", "HV Switchgear 1", "Switchgear", "Substation 1", DEVICE_NORMAL),
        ("1004", "HV Switchgear 2", "Switchgear", "Substation 2", DEVICE_ABNORMAL),
        ("1005", "LV Switchgear 1", "Switchgear", "Substation 1", DEVICE_NORMAL),
        ("1006", "LV Switchgear 2", "Switchgear", "Substation 2", DEVICE_NORMAL),
    ]
    .into_iter()
    .map(|(id, name, kind, location, status)| Device {
        device_id: id.to_string(),
        device_name: name.to_string(),
        device_type: kind.to_string(),
        installation_location: location.to_string(),
        status: status.to_string(),
    })
    .collect()
}
