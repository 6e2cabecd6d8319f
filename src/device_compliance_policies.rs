//! `deviceManagement/deviceCompliancePolicies`: compliance policies.

use crate::action::{ActionWithBodyRequestBuilder, ActionWithResponseRequestBuilder};
use crate::builder::BaseRequestBuilder;
use crate::collection::{
    CountRequestBuilder, EntityCollectionRequestBuilder, EntityItemRequestBuilder,
    EntitySetTemplates,
};
use crate::error::Result;
use crate::models::{
    AssignRequestBody, CollectionResponse, DeviceComplianceDeviceStatus, DeviceCompliancePolicy,
    DeviceCompliancePolicyAssignment, DeviceComplianceScheduledActionForRule,
    DeviceComplianceUserStatus, ScheduleActionsForRulesRequestBody, SettingStateDeviceSummary,
    StatusOverview,
};
use crate::query::{CollectionQueryParameters, ItemQueryParameters};
use crate::request::{RequestConfiguration, RequestInformation};

pub(crate) static DEVICE_COMPLIANCE_POLICIES: EntitySetTemplates = EntitySetTemplates {
    collection: "{+baseurl}/deviceManagement/deviceCompliancePolicies{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}",
    item: "{+baseurl}/deviceManagement/deviceCompliancePolicies/{deviceCompliancePolicy%2Did}{?%24expand,%24select}",
    count: "{+baseurl}/deviceManagement/deviceCompliancePolicies/$count{?%24filter,%24search}",
    id_parameter: "deviceCompliancePolicy%2Did",
};

pub(crate) static ASSIGNMENTS: EntitySetTemplates = EntitySetTemplates {
    collection: "{+baseurl}/deviceManagement/deviceCompliancePolicies/{deviceCompliancePolicy%2Did}/assignments{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}",
    item: "{+baseurl}/deviceManagement/deviceCompliancePolicies/{deviceCompliancePolicy%2Did}/assignments/{deviceCompliancePolicyAssignment%2Did}{?%24expand,%24select}",
    count: "{+baseurl}/deviceManagement/deviceCompliancePolicies/{deviceCompliancePolicy%2Did}/assignments/$count{?%24filter,%24search}",
    id_parameter: "deviceCompliancePolicyAssignment%2Did",
};

pub(crate) static DEVICE_STATUSES: EntitySetTemplates = EntitySetTemplates {
    collection: "{+baseurl}/deviceManagement/deviceCompliancePolicies/{deviceCompliancePolicy%2Did}/deviceStatuses{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}",
    item: "{+baseurl}/deviceManagement/deviceCompliancePolicies/{deviceCompliancePolicy%2Did}/deviceStatuses/{deviceComplianceDeviceStatus%2Did}{?%24expand,%24select}",
    count: "{+baseurl}/deviceManagement/deviceCompliancePolicies/{deviceCompliancePolicy%2Did}/deviceStatuses/$count{?%24filter,%24search}",
    id_parameter: "deviceComplianceDeviceStatus%2Did",
};

pub(crate) static USER_STATUSES: EntitySetTemplates = EntitySetTemplates {
    collection: "{+baseurl}/deviceManagement/deviceCompliancePolicies/{deviceCompliancePolicy%2Did}/userStatuses{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}",
    item: "{+baseurl}/deviceManagement/deviceCompliancePolicies/{deviceCompliancePolicy%2Did}/userStatuses/{deviceComplianceUserStatus%2Did}{?%24expand,%24select}",
    count: "{+baseurl}/deviceManagement/deviceCompliancePolicies/{deviceCompliancePolicy%2Did}/userStatuses/$count{?%24filter,%24search}",
    id_parameter: "deviceComplianceUserStatus%2Did",
};

pub(crate) static DEVICE_SETTING_STATE_SUMMARIES: EntitySetTemplates = EntitySetTemplates {
    collection: "{+baseurl}/deviceManagement/deviceCompliancePolicies/{deviceCompliancePolicy%2Did}/deviceSettingStateSummaries{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}",
    item: "{+baseurl}/deviceManagement/deviceCompliancePolicies/{deviceCompliancePolicy%2Did}/deviceSettingStateSummaries/{settingStateDeviceSummary%2Did}{?%24expand,%24select}",
    count: "{+baseurl}/deviceManagement/deviceCompliancePolicies/{deviceCompliancePolicy%2Did}/deviceSettingStateSummaries/$count{?%24filter,%24search}",
    id_parameter: "settingStateDeviceSummary%2Did",
};

pub(crate) static SCHEDULED_ACTIONS_FOR_RULE: EntitySetTemplates = EntitySetTemplates {
    collection: "{+baseurl}/deviceManagement/deviceCompliancePolicies/{deviceCompliancePolicy%2Did}/scheduledActionsForRule{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}",
    item: "{+baseurl}/deviceManagement/deviceCompliancePolicies/{deviceCompliancePolicy%2Did}/scheduledActionsForRule/{deviceComplianceScheduledActionForRule%2Did}{?%24expand,%24select}",
    count: "{+baseurl}/deviceManagement/deviceCompliancePolicies/{deviceCompliancePolicy%2Did}/scheduledActionsForRule/$count{?%24filter,%24search}",
    id_parameter: "deviceComplianceScheduledActionForRule%2Did",
};

pub(crate) const DEVICE_STATUS_OVERVIEW: &str =
    "{+baseurl}/deviceManagement/deviceCompliancePolicies/{deviceCompliancePolicy%2Did}/deviceStatusOverview{?%24expand,%24select}";
pub(crate) const USER_STATUS_OVERVIEW: &str =
    "{+baseurl}/deviceManagement/deviceCompliancePolicies/{deviceCompliancePolicy%2Did}/userStatusOverview{?%24expand,%24select}";
pub(crate) const ASSIGN: &str =
    "{+baseurl}/deviceManagement/deviceCompliancePolicies/{deviceCompliancePolicy%2Did}/assign";
pub(crate) const SCHEDULE_ACTIONS_FOR_RULES: &str =
    "{+baseurl}/deviceManagement/deviceCompliancePolicies/{deviceCompliancePolicy%2Did}/scheduleActionsForRules";

/// Builder for `deviceManagement/deviceCompliancePolicies`.
#[derive(Debug, Clone)]
pub struct DeviceCompliancePoliciesRequestBuilder {
    inner: EntityCollectionRequestBuilder<DeviceCompliancePolicy>,
}

impl DeviceCompliancePoliciesRequestBuilder {
    pub(crate) fn new(parent: &BaseRequestBuilder) -> Self {
        DeviceCompliancePoliciesRequestBuilder {
            inner: EntityCollectionRequestBuilder::new(parent, &DEVICE_COMPLIANCE_POLICIES),
        }
    }

    /// Lists one page of policies.
    pub async fn get(
        &self,
        config: Option<RequestConfiguration<CollectionQueryParameters>>,
    ) -> Result<Option<CollectionResponse<DeviceCompliancePolicy>>> {
        self.inner.get(config).await
    }

    /// Creates a policy. Graph requires at least one scheduled action
    /// (`block`) in `scheduled_actions_for_rule`.
    pub async fn post(
        &self,
        body: &DeviceCompliancePolicy,
        config: Option<RequestConfiguration>,
    ) -> Result<Option<DeviceCompliancePolicy>> {
        self.inner.post(body, config).await
    }

    /// `deviceCompliancePolicies/$count`.
    pub fn count(&self) -> CountRequestBuilder {
        self.inner.count()
    }

    /// Addresses one policy.
    pub fn by_device_compliance_policy_id(
        &self,
        device_compliance_policy_id: &str,
    ) -> DeviceCompliancePolicyItemRequestBuilder {
        DeviceCompliancePolicyItemRequestBuilder {
            inner: self.inner.by_id(device_compliance_policy_id),
        }
    }

    /// The collection addressed by an absolute URL such as `@odata.nextLink`.
    pub fn with_url(&self, raw_url: &str) -> Self {
        DeviceCompliancePoliciesRequestBuilder {
            inner: self.inner.with_url(raw_url),
        }
    }

    /// The request `get` would send.
    pub fn to_get_request_information(
        &self,
        config: Option<RequestConfiguration<CollectionQueryParameters>>,
    ) -> Result<RequestInformation> {
        self.inner.to_get_request_information(config)
    }

    /// The request `post` would send.
    pub fn to_post_request_information(
        &self,
        body: &DeviceCompliancePolicy,
        config: Option<RequestConfiguration>,
    ) -> Result<RequestInformation> {
        self.inner.to_post_request_information(body, config)
    }
}

/// Builder for `deviceManagement/deviceCompliancePolicies/{id}`.
#[derive(Debug, Clone)]
pub struct DeviceCompliancePolicyItemRequestBuilder {
    inner: EntityItemRequestBuilder<DeviceCompliancePolicy>,
}

impl DeviceCompliancePolicyItemRequestBuilder {
    fn base(&self) -> &BaseRequestBuilder {
        self.inner.base()
    }

    /// Reads the policy.
    pub async fn get(
        &self,
        config: Option<RequestConfiguration<ItemQueryParameters>>,
    ) -> Result<Option<DeviceCompliancePolicy>> {
        self.inner.get(config).await
    }

    /// Updates the policy.
    pub async fn patch(
        &self,
        body: &DeviceCompliancePolicy,
        config: Option<RequestConfiguration>,
    ) -> Result<Option<DeviceCompliancePolicy>> {
        self.inner.patch(body, config).await
    }

    /// Deletes the policy.
    pub async fn delete(&self, config: Option<RequestConfiguration>) -> Result<()> {
        self.inner.delete(config).await
    }

    /// The request `get` would send.
    pub fn to_get_request_information(
        &self,
        config: Option<RequestConfiguration<ItemQueryParameters>>,
    ) -> Result<RequestInformation> {
        self.inner.to_get_request_information(config)
    }

    /// The request `patch` would send.
    pub fn to_patch_request_information(
        &self,
        body: &DeviceCompliancePolicy,
        config: Option<RequestConfiguration>,
    ) -> Result<RequestInformation> {
        self.inner.to_patch_request_information(body, config)
    }

    /// The request `delete` would send.
    pub fn to_delete_request_information(
        &self,
        config: Option<RequestConfiguration>,
    ) -> Result<RequestInformation> {
        self.inner.to_delete_request_information(config)
    }

    /// Groups the policy is assigned to.
    pub fn assignments(&self) -> EntityCollectionRequestBuilder<DeviceCompliancePolicyAssignment> {
        EntityCollectionRequestBuilder::new(self.base(), &ASSIGNMENTS)
    }

    /// Per-device compliance status.
    pub fn device_statuses(&self) -> EntityCollectionRequestBuilder<DeviceComplianceDeviceStatus> {
        EntityCollectionRequestBuilder::new(self.base(), &DEVICE_STATUSES)
    }

    /// Per-user compliance status.
    pub fn user_statuses(&self) -> EntityCollectionRequestBuilder<DeviceComplianceUserStatus> {
        EntityCollectionRequestBuilder::new(self.base(), &USER_STATUSES)
    }

    /// Per-setting compliance counts.
    pub fn device_setting_state_summaries(&self) -> EntityCollectionRequestBuilder<SettingStateDeviceSummary> {
        EntityCollectionRequestBuilder::new(self.base(), &DEVICE_SETTING_STATE_SUMMARIES)
    }

    /// Actions taken on non-compliant devices.
    pub fn scheduled_actions_for_rule(
        &self,
    ) -> EntityCollectionRequestBuilder<DeviceComplianceScheduledActionForRule> {
        EntityCollectionRequestBuilder::new(self.base(), &SCHEDULED_ACTIONS_FOR_RULE)
    }

    /// Aggregated device compliance counts.
    pub fn device_status_overview(&self) -> EntityItemRequestBuilder<StatusOverview> {
        EntityItemRequestBuilder::new(self.base().child(DEVICE_STATUS_OVERVIEW))
    }

    /// Aggregated user compliance counts.
    pub fn user_status_overview(&self) -> EntityItemRequestBuilder<StatusOverview> {
        EntityItemRequestBuilder::new(self.base().child(USER_STATUS_OVERVIEW))
    }

    /// Replaces the policy's assignments.
    pub fn assign(
        &self,
    ) -> ActionWithResponseRequestBuilder<AssignRequestBody, CollectionResponse<DeviceCompliancePolicyAssignment>>
    {
        ActionWithResponseRequestBuilder::new(self.base(), ASSIGN)
    }

    /// Replaces the scheduled actions of the policy's rules.
    pub fn schedule_actions_for_rules(&self) -> ActionWithBodyRequestBuilder<ScheduleActionsForRulesRequestBody> {
        ActionWithBodyRequestBuilder::new(self.base(), SCHEDULE_ACTIONS_FOR_RULES)
    }
}
