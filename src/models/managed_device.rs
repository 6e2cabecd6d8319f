//! Devices enrolled in Intune (`deviceManagement/managedDevices`).

use serde::{Deserialize, Serialize};

use super::{AdditionalData, DeviceCategory};

/// A device managed or pre-enrolled through Intune.
///
/// Only the writable properties (`managedDeviceOwnerType`, `notes`, …) are
/// honoured on `PATCH`; every `None` field is left out of the request body.
///
/// Reference: <https://learn.microsoft.com/graph/api/resources/intune-devices-manageddevice>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedDevice {
    /// Unique Intune identifier of the device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Name of the device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,

    /// Automatically generated name to identify a device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_device_name: Option<String>,

    /// Ownership of the device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_device_owner_type: Option<ManagedDeviceOwnerType>,

    /// Compliance state of the device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance_state: Option<ComplianceState>,

    /// Management channel of the device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub management_agent: Option<ManagementAgentType>,

    /// Operating system, e.g. `"Windows"`, `"iOS"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<String>,

    /// Operating system version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,

    /// Enrollment timestamp (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrolled_date_time: Option<String>,

    /// Last successful check-in with Intune (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sync_date_time: Option<String>,

    /// Device serial number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,

    /// Hardware model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Hardware manufacturer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,

    /// IMEI of the device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imei: Option<String>,

    /// Wi-Fi MAC address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wi_fi_mac_address: Option<String>,

    /// Primary user id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Primary user principal name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_principal_name: Option<String>,

    /// Primary user display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_display_name: Option<String>,

    /// Primary user email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    /// Microsoft Entra device id.
    #[serde(
        rename = "azureADDeviceId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub azure_ad_device_id: Option<String>,

    /// Whether the device is Microsoft Entra registered.
    #[serde(
        rename = "azureADRegistered",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub azure_ad_registered: Option<bool>,

    /// Whether storage is encrypted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_encrypted: Option<bool>,

    /// Whether the device is supervised (Apple).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_supervised: Option<bool>,

    /// Jailbreak / root detection result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jail_broken: Option<String>,

    /// Total storage in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_storage_space_in_bytes: Option<i64>,

    /// Free storage in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_storage_space_in_bytes: Option<i64>,

    /// Display name of the assigned device category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_category_display_name: Option<String>,

    /// Expanded device category (`$expand=deviceCategory`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_category: Option<DeviceCategory>,

    /// Administrator notes. Writable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

additional_data_holder!(ManagedDevice);

/// Compliance state reported for a managed device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComplianceState {
    /// Device is compliant.
    Compliant,
    /// Device is non-compliant and blocked from corporate resources.
    Noncompliant,
    /// Conflict with other rules.
    Conflict,
    /// Evaluation error.
    Error,
    /// Non-compliant but still has access to corporate resources.
    InGracePeriod,
    /// Managed by Configuration Manager.
    ConfigManager,
    /// Unknown, including any value this crate does not recognize.
    #[serde(other)]
    Unknown,
}

/// Management channel of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ManagementAgentType {
    /// Exchange ActiveSync.
    Eas,
    /// Intune MDM.
    Mdm,
    /// Both EAS and MDM.
    EasMdm,
    /// Intune PC client.
    IntuneClient,
    /// EAS and Intune PC client.
    EasIntuneClient,
    /// Configuration Manager client.
    ConfigurationManagerClient,
    /// Configuration Manager and MDM.
    ConfigurationManagerClientMdm,
    /// Configuration Manager, MDM and EAS.
    ConfigurationManagerClientMdmEas,
    /// Jamf third-party management.
    Jamf,
    /// Google Cloud Device Policy Controller.
    GoogleCloudDevicePolicyController,
    /// Unknown, including any value this crate does not recognize.
    #[serde(other)]
    Unknown,
}

/// Ownership of a managed device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ManagedDeviceOwnerType {
    /// Corporate-owned.
    Company,
    /// Personally owned.
    Personal,
    /// Unknown, including any value this crate does not recognize.
    #[serde(other)]
    Unknown,
}
