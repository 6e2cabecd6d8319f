//! Device configuration profiles (`deviceManagement/deviceConfigurations`).
//!
//! `deviceConfiguration` is abstract in the Graph schema: every profile on
//! the wire is one of its platform subtypes, identified by the `@odata.type`
//! discriminator. The common properties are modelled here; platform settings
//! stay in the property bag and are read through
//! [`AdditionalDataHolder::property`](super::AdditionalDataHolder::property).

use serde::{Deserialize, Serialize};

use super::AdditionalData;

/// Prefix shared by every Graph discriminator value.
pub(crate) const GRAPH_TYPE_PREFIX: &str = "#microsoft.graph.";

/// A device configuration profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceConfiguration {
    /// Discriminator value, e.g. `"#microsoft.graph.windows10GeneralConfiguration"`.
    /// Required when creating a profile.
    #[serde(
        rename = "@odata.type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub odata_type: Option<String>,

    /// Profile id.
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

    /// Platform-specific settings and any other unmodelled property.
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

additional_data_holder!(DeviceConfiguration);

impl DeviceConfiguration {
    /// Creates an empty profile of the given platform type, ready to be
    /// filled in and POSTed.
    pub fn of_kind(kind: DeviceConfigurationKind) -> Self {
        DeviceConfiguration {
            odata_type: Some(kind.discriminator()),
            ..Default::default()
        }
    }

    /// Resolves the concrete platform type from the discriminator value.
    /// Returns `None` when the payload carried no `@odata.type`.
    pub fn kind(&self) -> Option<DeviceConfigurationKind> {
        self.odata_type
            .as_deref()
            .map(DeviceConfigurationKind::from_discriminator)
    }
}

/// Concrete platform types of [`DeviceConfiguration`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceConfigurationKind {
    /// `androidGeneralDeviceConfiguration`
    AndroidGeneral,
    /// `androidCustomConfiguration`
    AndroidCustom,
    /// `androidWorkProfileGeneralDeviceConfiguration`
    AndroidWorkProfileGeneral,
    /// `androidWorkProfileCustomConfiguration`
    AndroidWorkProfileCustom,
    /// `iosGeneralDeviceConfiguration`
    IosGeneral,
    /// `iosCustomConfiguration`
    IosCustom,
    /// `iosDeviceFeaturesConfiguration`
    IosDeviceFeatures,
    /// `iosUpdateConfiguration`
    IosUpdate,
    /// `macOSGeneralDeviceConfiguration`
    MacOsGeneral,
    /// `macOSCustomConfiguration`
    MacOsCustom,
    /// `macOSDeviceFeaturesConfiguration`
    MacOsDeviceFeatures,
    /// `windows10GeneralConfiguration`
    Windows10General,
    /// `windows10CustomConfiguration`
    Windows10Custom,
    /// `windows10EndpointProtectionConfiguration`
    Windows10EndpointProtection,
    /// `windows10EnterpriseModernAppManagementConfiguration`
    Windows10EnterpriseModernAppManagement,
    /// `windows10SecureAssessmentConfiguration`
    Windows10SecureAssessment,
    /// `windows10TeamGeneralConfiguration`
    Windows10TeamGeneral,
    /// `windows81GeneralConfiguration`
    Windows81General,
    /// `windowsPhone81GeneralConfiguration`
    WindowsPhone81General,
    /// `windowsPhone81CustomConfiguration`
    WindowsPhone81Custom,
    /// `windowsUpdateForBusinessConfiguration`
    WindowsUpdateForBusiness,
    /// `windowsDefenderAdvancedThreatProtectionConfiguration`
    WindowsDefenderAdvancedThreatProtection,
    /// `editionUpgradeConfiguration`
    EditionUpgrade,
    /// `sharedPCConfiguration`
    SharedPc,
    /// Any other discriminator value, kept verbatim.
    Other(String),
}

impl DeviceConfigurationKind {
    /// Maps a discriminator value (with or without the
    /// `#microsoft.graph.` prefix) to a kind.
    pub fn from_discriminator(value: &str) -> Self {
        match value.strip_prefix(GRAPH_TYPE_PREFIX).unwrap_or(value) {
            "androidGeneralDeviceConfiguration" => DeviceConfigurationKind::AndroidGeneral,
            "androidCustomConfiguration" => DeviceConfigurationKind::AndroidCustom,
            "androidWorkProfileGeneralDeviceConfiguration" => DeviceConfigurationKind::AndroidWorkProfileGeneral,
            "androidWorkProfileCustomConfiguration" => DeviceConfigurationKind::AndroidWorkProfileCustom,
            "iosGeneralDeviceConfiguration" => DeviceConfigurationKind::IosGeneral,
            "iosCustomConfiguration" => DeviceConfigurationKind::IosCustom,
            "iosDeviceFeaturesConfiguration" => DeviceConfigurationKind::IosDeviceFeatures,
            "iosUpdateConfiguration" => DeviceConfigurationKind::IosUpdate,
            "macOSGeneralDeviceConfiguration" => DeviceConfigurationKind::MacOsGeneral,
            "macOSCustomConfiguration" => DeviceConfigurationKind::MacOsCustom,
            "macOSDeviceFeaturesConfiguration" => DeviceConfigurationKind::MacOsDeviceFeatures,
            "windows10GeneralConfiguration" => DeviceConfigurationKind::Windows10General,
            "windows10CustomConfiguration" => DeviceConfigurationKind::Windows10Custom,
            "windows10EndpointProtectionConfiguration" => DeviceConfigurationKind::Windows10EndpointProtection,
            "windows10EnterpriseModernAppManagementConfiguration" => DeviceConfigurationKind::Windows10EnterpriseModernAppManagement,
            "windows10SecureAssessmentConfiguration" => DeviceConfigurationKind::Windows10SecureAssessment,
            "windows10TeamGeneralConfiguration" => DeviceConfigurationKind::Windows10TeamGeneral,
            "windows81GeneralConfiguration" => DeviceConfigurationKind::Windows81General,
            "windowsPhone81GeneralConfiguration" => DeviceConfigurationKind::WindowsPhone81General,
            "windowsPhone81CustomConfiguration" => DeviceConfigurationKind::WindowsPhone81Custom,
            "windowsUpdateForBusinessConfiguration" => DeviceConfigurationKind::WindowsUpdateForBusiness,
            "windowsDefenderAdvancedThreatProtectionConfiguration" => DeviceConfigurationKind::WindowsDefenderAdvancedThreatProtection,
            "editionUpgradeConfiguration" => DeviceConfigurationKind::EditionUpgrade,
            "sharedPCConfiguration" => DeviceConfigurationKind::SharedPc,
            _ => DeviceConfigurationKind::Other(value.to_string()),
        }
    }

    /// The full discriminator value for this kind.
    pub fn discriminator(&self) -> String {
        let name = match self {
            DeviceConfigurationKind::AndroidGeneral => "androidGeneralDeviceConfiguration",
            DeviceConfigurationKind::AndroidCustom => "androidCustomConfiguration",
            DeviceConfigurationKind::AndroidWorkProfileGeneral => "androidWorkProfileGeneralDeviceConfiguration",
            DeviceConfigurationKind::AndroidWorkProfileCustom => "androidWorkProfileCustomConfiguration",
            DeviceConfigurationKind::IosGeneral => "iosGeneralDeviceConfiguration",
            DeviceConfigurationKind::IosCustom => "iosCustomConfiguration",
            DeviceConfigurationKind::IosDeviceFeatures => "iosDeviceFeaturesConfiguration",
            DeviceConfigurationKind::IosUpdate => "iosUpdateConfiguration",
            DeviceConfigurationKind::MacOsGeneral => "macOSGeneralDeviceConfiguration",
            DeviceConfigurationKind::MacOsCustom => "macOSCustomConfiguration",
            DeviceConfigurationKind::MacOsDeviceFeatures => "macOSDeviceFeaturesConfiguration",
            DeviceConfigurationKind::Windows10General => "windows10GeneralConfiguration",
            DeviceConfigurationKind::Windows10Custom => "windows10CustomConfiguration",
            DeviceConfigurationKind::Windows10EndpointProtection => "windows10EndpointProtectionConfiguration",
            DeviceConfigurationKind::Windows10EnterpriseModernAppManagement => "windows10EnterpriseModernAppManagementConfiguration",
            DeviceConfigurationKind::Windows10SecureAssessment => "windows10SecureAssessmentConfiguration",
            DeviceConfigurationKind::Windows10TeamGeneral => "windows10TeamGeneralConfiguration",
            DeviceConfigurationKind::Windows81General => "windows81GeneralConfiguration",
            DeviceConfigurationKind::WindowsPhone81General => "windowsPhone81GeneralConfiguration",
            DeviceConfigurationKind::WindowsPhone81Custom => "windowsPhone81CustomConfiguration",
            DeviceConfigurationKind::WindowsUpdateForBusiness => "windowsUpdateForBusinessConfiguration",
            DeviceConfigurationKind::WindowsDefenderAdvancedThreatProtection => "windowsDefenderAdvancedThreatProtectionConfiguration",
            DeviceConfigurationKind::EditionUpgrade => "editionUpgradeConfiguration",
            DeviceConfigurationKind::SharedPc => "sharedPCConfiguration",
            DeviceConfigurationKind::Other(value) => return value.clone(),
        };
        format!("{GRAPH_TYPE_PREFIX}{name}")
    }
}
