//! The `deviceManagement` singleton and the small entities hanging off it.

use serde::{Deserialize, Serialize};

use super::AdditionalData;

/// Singleton that acts as the container for all device management
/// functionality of a tenant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceManagement {
    /// Always `"deviceManagement"` or the tenant id, depending on the API version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Intune account id of the tenant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intune_account_id: Option<String>,

    /// Tenant mobile device management subscription state, e.g. `"active"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_state: Option<String>,

    /// Account-level settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<DeviceManagementSettings>,

    /// Company portal branding, kept as raw JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intune_brand: Option<serde_json::Value>,

    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// Account-level device management settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceManagementSettings {
    /// Days before a device that has not checked in is reported non-compliant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_compliance_checkin_threshold_days: Option<i32>,

    /// Whether scheduled actions for compliance rules are enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_scheduled_action_enabled: Option<bool>,

    /// Whether devices with no compliance policy are marked non-compliant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure_by_default: Option<bool>,

    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// Summary counts of managed devices (`deviceManagement/managedDeviceOverview`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedDeviceOverview {
    /// Entity id.
    #[serde(default)]
    pub id: Option<String>,
    /// Total enrolled devices, excluding Configuration Manager-only devices.
    #[serde(default)]
    pub enrolled_device_count: Option<i32>,
    /// Devices enrolled in MDM.
    #[serde(default)]
    pub mdm_enrolled_count: Option<i32>,
    /// Devices enrolled in both MDM and Configuration Manager.
    #[serde(default)]
    pub dual_enrolled_device_count: Option<i32>,
    /// Per-platform device counts.
    #[serde(default)]
    pub device_operating_system_summary: Option<DeviceOperatingSystemSummary>,
    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// Per-platform device counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceOperatingSystemSummary {
    /// Android devices.
    #[serde(default)]
    pub android_count: i32,
    /// iOS devices.
    #[serde(default)]
    pub ios_count: i32,
    /// macOS devices.
    #[serde(rename = "macOSCount", default)]
    pub mac_os_count: i32,
    /// Windows Mobile devices.
    #[serde(default)]
    pub windows_mobile_count: i32,
    /// Windows devices.
    #[serde(default)]
    pub windows_count: i32,
    /// Devices with an unknown platform.
    #[serde(default)]
    pub unknown_count: i32,
    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// A device category an administrator can assign to devices.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCategory {
    /// Category id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// An application discovered on managed devices.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedApp {
    /// App id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// App name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// App version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_in_byte: Option<i64>,
    /// Number of devices that have the app installed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_count: Option<i32>,
    /// Platform the app was detected on, e.g. `"windows"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// An Intune audit log entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEvent {
    /// Event id.
    #[serde(default)]
    pub id: Option<String>,
    /// Event display name.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Component that raised the event.
    #[serde(default)]
    pub component_name: Option<String>,
    /// Friendly activity name.
    #[serde(default)]
    pub activity: Option<String>,
    /// When the activity happened (ISO 8601).
    #[serde(default)]
    pub activity_date_time: Option<String>,
    /// Activity type.
    #[serde(default)]
    pub activity_type: Option<String>,
    /// HTTP operation type of the activity.
    #[serde(default)]
    pub activity_operation_type: Option<String>,
    /// Result of the activity.
    #[serde(default)]
    pub activity_result: Option<String>,
    /// Correlation id.
    #[serde(default)]
    pub correlation_id: Option<String>,
    /// Audit category.
    #[serde(default)]
    pub category: Option<String>,
    /// Who performed the activity, kept as raw JSON.
    #[serde(default)]
    pub actor: Option<serde_json::Value>,
    /// Resources touched by the activity, kept as raw JSON.
    #[serde(default)]
    pub resources: Vec<serde_json::Value>,
    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

additional_data_holder!(
    DeviceManagement,
    DeviceManagementSettings,
    DeviceOperatingSystemSummary,
    ManagedDeviceOverview,
    DeviceCategory,
    DetectedApp,
    AuditEvent,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_management_reads_settings() {
        let json = r#"{
            "id": "deviceManagement",
            "intuneAccountId": "acc-1",
            "subscriptionState": "active",
            "settings": {
                "deviceComplianceCheckinThresholdDays": 30,
                "isScheduledActionEnabled": true,
                "secureByDefault": false
            }
        }"#;
        let dm: DeviceManagement = serde_json::from_str(json).unwrap();
        assert_eq!(dm.subscription_state.as_deref(), Some("active"));
        let settings = dm.settings.unwrap();
        assert_eq!(settings.device_compliance_checkin_threshold_days, Some(30));
        assert_eq!(settings.secure_by_default, Some(false));
    }

    #[test]
    fn overview_reads_platform_summary() {
        let json = r#"{
            "id": "overview",
            "enrolledDeviceCount": 14,
            "mdmEnrolledCount": 12,
            "dualEnrolledDeviceCount": 2,
            "deviceOperatingSystemSummary": {
                "androidCount": 3, "iosCount": 4, "macOSCount": 1,
                "windowsMobileCount": 0, "windowsCount": 6, "unknownCount": 0
            }
        }"#;
        let overview: ManagedDeviceOverview = serde_json::from_str(json).unwrap();
        assert_eq!(overview.enrolled_device_count, Some(14));
        let summary = overview.device_operating_system_summary.unwrap();
        assert_eq!(summary.mac_os_count, 1);
        assert_eq!(summary.windows_count, 6);
    }

    #[test]
    fn device_category_create_body_omits_id() {
        let category = DeviceCategory {
            display_name: Some("Shared iPads".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json, serde_json::json!({"displayName": "Shared iPads"}));
    }
}
