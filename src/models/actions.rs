//! Request bodies for bound actions.
//!
//! Each body keeps a flattened property bag so callers can send parameters
//! newer than this crate without waiting for a release.

use serde::{Deserialize, Serialize};

use super::{AdditionalData, Assignment, DeviceComplianceScheduledActionForRule};

/// Body of `managedDevices/{id}/wipe`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WipeRequestBody {
    /// Keep enrollment data (Windows only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_enrollment_data: Option<bool>,
    /// Keep user data (Windows only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_user_data: Option<bool>,
    /// Unlock code for macOS devices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_os_unlock_code: Option<String>,
    /// Keep the eSIM data plan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persist_esim_data_plan: Option<bool>,
    /// Extra parameters.
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// Body of `managedDevices/{id}/windowsDefenderScan`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowsDefenderScanRequestBody {
    /// Quick scan when `true`, full scan otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_scan: Option<bool>,
    /// Extra parameters.
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// Body of `managedDevices/{id}/cleanWindowsDevice`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanWindowsDeviceRequestBody {
    /// Keep user data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_user_data: Option<bool>,
    /// Extra parameters.
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// Body of `managedDevices/{id}/deleteUserFromSharedAppleDevice`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserFromSharedAppleDeviceRequestBody {
    /// UPN of the user to delete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_principal_name: Option<String>,
    /// Extra parameters.
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// Body of the `assign` action on configurations and compliance policies.
/// The supplied list replaces every existing assignment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRequestBody {
    /// The complete set of assignments.
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    /// Extra parameters.
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// Body of `deviceCompliancePolicies/{id}/scheduleActionsForRules`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleActionsForRulesRequestBody {
    /// The scheduled actions to set.
    #[serde(default)]
    pub device_compliance_scheduled_action_for_rules: Vec<DeviceComplianceScheduledActionForRule>,
    /// Extra parameters.
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

additional_data_holder!(
    WipeRequestBody,
    WindowsDefenderScanRequestBody,
    CleanWindowsDeviceRequestBody,
    DeleteUserFromSharedAppleDeviceRequestBody,
    AssignRequestBody,
    ScheduleActionsForRulesRequestBody,
);
