//! Policy and profile assignments.

use serde::{Deserialize, Serialize};

use super::device_configuration::GRAPH_TYPE_PREFIX;
use super::AdditionalData;

/// Assignment of a configuration profile or compliance policy to a target.
///
/// `deviceConfigurationAssignment` and `deviceCompliancePolicyAssignment`
/// share this shape on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Assignment id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Who the policy is assigned to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<AssignmentTarget>,

    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// `deviceConfigurationAssignment`.
pub type DeviceConfigurationAssignment = Assignment;

/// `deviceCompliancePolicyAssignment`.
pub type DeviceCompliancePolicyAssignment = Assignment;

impl Assignment {
    /// An assignment to the given target with no id (for create/assign bodies).
    pub fn to(target: AssignmentTarget) -> Self {
        Assignment {
            target: Some(target),
            ..Default::default()
        }
    }
}

/// Target of an assignment. The concrete target type is carried by
/// `@odata.type`; see [`AssignmentTarget::kind`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentTarget {
    /// Discriminator value, e.g. `"#microsoft.graph.groupAssignmentTarget"`.
    #[serde(
        rename = "@odata.type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub odata_type: Option<String>,

    /// Group object id, for group and exclusion-group targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    /// Id of the assignment filter applied on top of the target.
    #[serde(
        rename = "deviceAndAppManagementAssignmentFilterId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub filter_id: Option<String>,

    /// `none`, `include` or `exclude`.
    #[serde(
        rename = "deviceAndAppManagementAssignmentFilterType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub filter_type: Option<String>,

    /// Properties of target types not modelled above, e.g. `collectionId`.
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl AssignmentTarget {
    /// A target of the given kind with nothing else set.
    pub fn of_kind(kind: AssignmentTargetKind) -> Self {
        AssignmentTarget {
            odata_type: Some(kind.discriminator()),
            ..Default::default()
        }
    }

    /// All devices in the tenant.
    pub fn all_devices() -> Self {
        AssignmentTarget::of_kind(AssignmentTargetKind::AllDevices)
    }

    /// All licensed users in the tenant.
    pub fn all_licensed_users() -> Self {
        AssignmentTarget::of_kind(AssignmentTargetKind::AllLicensedUsers)
    }

    /// Members of a Microsoft Entra group.
    pub fn group(group_id: &str) -> Self {
        AssignmentTarget {
            group_id: Some(group_id.to_string()),
            ..AssignmentTarget::of_kind(AssignmentTargetKind::Group)
        }
    }

    /// Members of a group excluded from the assignment.
    pub fn exclusion_group(group_id: &str) -> Self {
        AssignmentTarget {
            group_id: Some(group_id.to_string()),
            ..AssignmentTarget::of_kind(AssignmentTargetKind::ExclusionGroup)
        }
    }

    /// Narrows the target with an assignment filter.
    pub fn with_filter(mut self, filter_id: &str, filter_type: &str) -> Self {
        self.filter_id = Some(filter_id.to_string());
        self.filter_type = Some(filter_type.to_string());
        self
    }

    /// Resolves the concrete target type from the discriminator value.
    pub fn kind(&self) -> Option<AssignmentTargetKind> {
        self.odata_type
            .as_deref()
            .map(AssignmentTargetKind::from_discriminator)
    }
}

/// Concrete types of [`AssignmentTarget`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentTargetKind {
    /// `allDevicesAssignmentTarget`
    AllDevices,
    /// `allLicensedUsersAssignmentTarget`
    AllLicensedUsers,
    /// `groupAssignmentTarget`
    Group,
    /// `exclusionGroupAssignmentTarget`
    ExclusionGroup,
    /// `configurationManagerCollectionAssignmentTarget`
    ConfigurationManagerCollection,
    /// Any other discriminator value, kept verbatim.
    Other(String),
}

impl AssignmentTargetKind {
    /// Maps a discriminator value (with or without the
    /// `#microsoft.graph.` prefix) to a kind.
    pub fn from_discriminator(value: &str) -> Self {
        match value.strip_prefix(GRAPH_TYPE_PREFIX).unwrap_or(value) {
            "allDevicesAssignmentTarget" => AssignmentTargetKind::AllDevices,
            "allLicensedUsersAssignmentTarget" => AssignmentTargetKind::AllLicensedUsers,
            "groupAssignmentTarget" => AssignmentTargetKind::Group,
            "exclusionGroupAssignmentTarget" => AssignmentTargetKind::ExclusionGroup,
            "configurationManagerCollectionAssignmentTarget" => {
                AssignmentTargetKind::ConfigurationManagerCollection
            }
            _ => AssignmentTargetKind::Other(value.to_string()),
        }
    }

    /// The full `@odata.type` value for this kind.
    pub fn discriminator(&self) -> String {
        let name = match self {
            AssignmentTargetKind::AllDevices => "allDevicesAssignmentTarget",
            AssignmentTargetKind::AllLicensedUsers => "allLicensedUsersAssignmentTarget",
            AssignmentTargetKind::Group => "groupAssignmentTarget",
            AssignmentTargetKind::ExclusionGroup => "exclusionGroupAssignmentTarget",
            AssignmentTargetKind::ConfigurationManagerCollection => {
                "configurationManagerCollectionAssignmentTarget"
            }
            AssignmentTargetKind::Other(value) => return value.clone(),
        };
        format!("{GRAPH_TYPE_PREFIX}{name}")
    }
}

additional_data_holder!(Assignment, AssignmentTarget);
