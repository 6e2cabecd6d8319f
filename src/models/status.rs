//! Per-device and per-user deployment status of profiles and policies.

use serde::{Deserialize, Serialize};

use super::AdditionalData;

/// Deployment state of a profile or policy on one device or for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComplianceStatus {
    /// Not applicable to the target.
    NotApplicable,
    /// Compliant.
    Compliant,
    /// Remediated.
    Remediated,
    /// Non-compliant.
    NonCompliant,
    /// Error.
    Error,
    /// Conflict with another policy.
    Conflict,
    /// Not assigned.
    NotAssigned,
    /// Unknown, including any value this crate does not recognize.
    #[serde(other)]
    Unknown,
}

/// Status of a profile or policy on one device.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStatus {
    /// Entity id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Device name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_display_name: Option<String>,
    /// Name of the user who reported the status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Device model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_model: Option<String>,
    /// Device platform code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<i32>,
    /// When the grace period ends (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance_grace_period_expiration_date_time: Option<String>,
    /// Deployment state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ComplianceStatus>,
    /// Last report time (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reported_date_time: Option<String>,
    /// Reporting user's UPN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_principal_name: Option<String>,
    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// `deviceConfigurationDeviceStatus`.
pub type DeviceConfigurationDeviceStatus = DeviceStatus;

/// `deviceComplianceDeviceStatus`.
pub type DeviceComplianceDeviceStatus = DeviceStatus;

/// Status of a profile or policy for one user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatus {
    /// Entity id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// User name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_display_name: Option<String>,
    /// Number of devices the user has.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devices_count: Option<i32>,
    /// Deployment state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ComplianceStatus>,
    /// Last report time (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reported_date_time: Option<String>,
    /// User principal name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_principal_name: Option<String>,
    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// `deviceConfigurationUserStatus`.
pub type DeviceConfigurationUserStatus = UserStatus;

/// `deviceComplianceUserStatus`.
pub type DeviceComplianceUserStatus = UserStatus;

/// Aggregated deployment counts of a profile or policy.
///
/// Used for both the device and the user overview of configurations and
/// compliance policies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusOverview {
    /// Entity id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Pending count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_count: Option<i32>,
    /// Not applicable count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_applicable_count: Option<i32>,
    /// Not applicable due to platform mismatch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_applicable_platform_count: Option<i32>,
    /// Succeeded count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_count: Option<i32>,
    /// Error count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_count: Option<i32>,
    /// Failed count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_count: Option<i32>,
    /// Conflict count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict_count: Option<i32>,
    /// When the counts were last refreshed (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_date_time: Option<String>,
    /// Version of the policy the counts refer to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration_version: Option<i32>,
    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// Per-setting deployment counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingStateDeviceSummary {
    /// Entity id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Setting name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setting_name: Option<String>,
    /// Setting instance path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_path: Option<String>,
    /// Devices in unknown state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unknown_device_count: Option<i32>,
    /// Devices where the setting does not apply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_applicable_device_count: Option<i32>,
    /// Compliant devices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliant_device_count: Option<i32>,
    /// Remediated devices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remediated_device_count: Option<i32>,
    /// Non-compliant devices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_compliant_device_count: Option<i32>,
    /// Devices in error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_device_count: Option<i32>,
    /// Devices in conflict.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict_device_count: Option<i32>,
    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// State of one policy or profile as seen from a managed device.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyState {
    /// Policy id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Policy name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Policy version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,
    /// Platform the policy targets, e.g. `"windows10AndLater"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_type: Option<String>,
    /// Evaluated state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ComplianceStatus>,
    /// Number of settings evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setting_count: Option<i32>,
    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// `deviceCompliancePolicyState`.
pub type DeviceCompliancePolicyState = PolicyState;

/// `deviceConfigurationState`.
pub type DeviceConfigurationState = PolicyState;

additional_data_holder!(
    DeviceStatus,
    UserStatus,
    StatusOverview,
    SettingStateDeviceSummary,
    PolicyState,
);
