//! Device compliance policies (`deviceManagement/deviceCompliancePolicies`).

use serde::{Deserialize, Serialize};

use super::device_configuration::GRAPH_TYPE_PREFIX;
use super::AdditionalData;

/// A device compliance policy. Like [`DeviceConfiguration`](super::DeviceConfiguration),
/// the concrete platform type is carried by `@odata.type`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCompliancePolicy {
    /// Discriminator value, e.g. `"#microsoft.graph.windows10CompliancePolicy"`.
    #[serde(
        rename = "@odata.type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub odata_type: Option<String>,

    /// Policy id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Admin-provided name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Admin-provided description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Version, incremented on each change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,

    /// Creation timestamp (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<String>,

    /// Last modification timestamp (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<String>,

    /// Scheduled actions; required when creating a policy.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scheduled_actions_for_rule: Vec<DeviceComplianceScheduledActionForRule>,

    /// Platform-specific rules and any other unmodelled property.
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl DeviceCompliancePolicy {
    /// Resolves the concrete platform type from the discriminator value.
    pub fn kind(&self) -> Option<CompliancePolicyKind> {
        self.odata_type
            .as_deref()
            .map(CompliancePolicyKind::from_discriminator)
    }
}

/// Concrete platform types of [`DeviceCompliancePolicy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompliancePolicyKind {
    /// `androidCompliancePolicy`
    Android,
    /// `androidWorkProfileCompliancePolicy`
    AndroidWorkProfile,
    /// `iosCompliancePolicy`
    Ios,
    /// `macOSCompliancePolicy`
    MacOs,
    /// `windows10CompliancePolicy`
    Windows10,
    /// `windows10MobileCompliancePolicy`
    Windows10Mobile,
    /// `windows81CompliancePolicy`
    Windows81,
    /// `windowsPhone81CompliancePolicy`
    WindowsPhone81,
    /// Any other discriminator value, kept verbatim.
    Other(String),
}

impl CompliancePolicyKind {
    /// Maps a discriminator value (with or without the
    /// `#microsoft.graph.` prefix) to a kind.
    pub fn from_discriminator(value: &str) -> Self {
        match value.strip_prefix(GRAPH_TYPE_PREFIX).unwrap_or(value) {
            "androidCompliancePolicy" => CompliancePolicyKind::Android,
            "androidWorkProfileCompliancePolicy" => CompliancePolicyKind::AndroidWorkProfile,
            "iosCompliancePolicy" => CompliancePolicyKind::Ios,
            "macOSCompliancePolicy" => CompliancePolicyKind::MacOs,
            "windows10CompliancePolicy" => CompliancePolicyKind::Windows10,
            "windows10MobileCompliancePolicy" => CompliancePolicyKind::Windows10Mobile,
            "windows81CompliancePolicy" => CompliancePolicyKind::Windows81,
            "windowsPhone81CompliancePolicy" => CompliancePolicyKind::WindowsPhone81,
            _ => CompliancePolicyKind::Other(value.to_string()),
        }
    }
}

/// Scheduled actions attached to a compliance rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceComplianceScheduledActionForRule {
    /// Entity id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Name of the rule this applies to; Graph uses `"PasswordRequired"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_name: Option<String>,

    /// The actions to run.
    #[serde(default)]
    pub scheduled_action_configurations: Vec<DeviceComplianceActionItem>,

    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// One scheduled action, e.g. block after a grace period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceComplianceActionItem {
    /// Entity id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Hours to wait before running the action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grace_period_hours: Option<i32>,

    /// `noAction`, `notification`, `block`, `retire`, `wipe`,
    /// `removeResourceAccessProfiles` or `pushNotification`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_type: Option<String>,

    /// Notification message template id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_template_id: Option<String>,

    /// Extra recipients of the notification.
    #[serde(
        rename = "notificationMessageCCList",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub notification_message_cc_list: Vec<String>,

    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

additional_data_holder!(
    DeviceCompliancePolicy,
    DeviceComplianceScheduledActionForRule,
    DeviceComplianceActionItem,
);
