//! `deviceManagement/deviceConfigurations`: configuration profiles.
//!
//! The collection is polymorphic. Each profile carries its platform in
//! `@odata.type`, and `POST`/`PATCH` bodies must set it (see
//! [`DeviceConfiguration::of_kind`](crate::models::DeviceConfiguration::of_kind)).

use crate::action::ActionWithResponseRequestBuilder;
use crate::builder::BaseRequestBuilder;
use crate::collection::{
    CountRequestBuilder, EntityCollectionRequestBuilder, EntityItemRequestBuilder,
    EntitySetTemplates,
};
use crate::error::Result;
use crate::models::{
    AssignRequestBody, CollectionResponse, DeviceConfiguration, DeviceConfigurationAssignment,
    DeviceConfigurationDeviceStatus, DeviceConfigurationUserStatus, SettingStateDeviceSummary,
    StatusOverview, ValueResponse,
};
use crate::query::{CollectionQueryParameters, ItemQueryParameters};
use crate::request::{RequestConfiguration, RequestInformation};

pub(crate) static DEVICE_CONFIGURATIONS: EntitySetTemplates = EntitySetTemplates {
    collection: "{+baseurl}/deviceManagement/deviceConfigurations{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}",
    item: "{+baseurl}/deviceManagement/deviceConfigurations/{deviceConfiguration%2Did}{?%24expand,%24select}",
    count: "{+baseurl}/deviceManagement/deviceConfigurations/$count{?%24filter,%24search}",
    id_parameter: "deviceConfiguration%2Did",
};

pub(crate) static ASSIGNMENTS: EntitySetTemplates = EntitySetTemplates {
    collection: "{+baseurl}/deviceManagement/deviceConfigurations/{deviceConfiguration%2Did}/assignments{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}",
    item: "{+baseurl}/deviceManagement/deviceConfigurations/{deviceConfiguration%2Did}/assignments/{deviceConfigurationAssignment%2Did}{?%24expand,%24select}",
    count: "{+baseurl}/deviceManagement/deviceConfigurations/{deviceConfiguration%2Did}/assignments/$count{?%24filter,%24search}",
    id_parameter: "deviceConfigurationAssignment%2Did",
};

pub(crate) static DEVICE_STATUSES: EntitySetTemplates = EntitySetTemplates {
    collection: "{+baseurl}/deviceManagement/deviceConfigurations/{deviceConfiguration%2Did}/deviceStatuses{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}",
    item: "{+baseurl}/deviceManagement/deviceConfigurations/{deviceConfiguration%2Did}/deviceStatuses/{deviceConfigurationDeviceStatus%2Did}{?%24expand,%24select}",
    count: "{+baseurl}/deviceManagement/deviceConfigurations/{deviceConfiguration%2Did}/deviceStatuses/$count{?%24filter,%24search}",
    id_parameter: "deviceConfigurationDeviceStatus%2Did",
};

pub(crate) static USER_STATUSES: EntitySetTemplates = EntitySetTemplates {
    collection: "{+baseurl}/deviceManagement/deviceConfigurations/{deviceConfiguration%2Did}/userStatuses{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}",
    item: "{+baseurl}/deviceManagement/deviceConfigurations/{deviceConfiguration%2Did}/userStatuses/{deviceConfigurationUserStatus%2Did}{?%24expand,%24select}",
    count: "{+baseurl}/deviceManagement/deviceConfigurations/{deviceConfiguration%2Did}/userStatuses/$count{?%24filter,%24search}",
    id_parameter: "deviceConfigurationUserStatus%2Did",
};

pub(crate) static DEVICE_SETTING_STATE_SUMMARIES: EntitySetTemplates = EntitySetTemplates {
    collection: "{+baseurl}/deviceManagement/deviceConfigurations/{deviceConfiguration%2Did}/deviceSettingStateSummaries{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}",
    item: "{+baseurl}/deviceManagement/deviceConfigurations/{deviceConfiguration%2Did}/deviceSettingStateSummaries/{settingStateDeviceSummary%2Did}{?%24expand,%24select}",
    count: "{+baseurl}/deviceManagement/deviceConfigurations/{deviceConfiguration%2Did}/deviceSettingStateSummaries/$count{?%24filter,%24search}",
    id_parameter: "settingStateDeviceSummary%2Did",
};

pub(crate) const DEVICE_STATUS_OVERVIEW: &str =
    "{+baseurl}/deviceManagement/deviceConfigurations/{deviceConfiguration%2Did}/deviceStatusOverview{?%24expand,%24select}";
pub(crate) const USER_STATUS_OVERVIEW: &str =
    "{+baseurl}/deviceManagement/deviceConfigurations/{deviceConfiguration%2Did}/userStatusOverview{?%24expand,%24select}";
pub(crate) const ASSIGN: &str =
    "{+baseurl}/deviceManagement/deviceConfigurations/{deviceConfiguration%2Did}/assign";
pub(crate) const GET_OMA_SETTING_PLAIN_TEXT_VALUE: &str =
    "{+baseurl}/deviceManagement/deviceConfigurations/{deviceConfiguration%2Did}/getOmaSettingPlainTextValue(secretReferenceValueId='{secretReferenceValueId}')";

/// Builder for `deviceManagement/deviceConfigurations`.
#[derive(Debug, Clone)]
pub struct DeviceConfigurationsRequestBuilder {
    inner: EntityCollectionRequestBuilder<DeviceConfiguration>,
}

impl DeviceConfigurationsRequestBuilder {
    pub(crate) fn new(parent: &BaseRequestBuilder) -> Self {
        DeviceConfigurationsRequestBuilder {
            inner: EntityCollectionRequestBuilder::new(parent, &DEVICE_CONFIGURATIONS),
        }
    }

    /// Lists one page of profiles.
    pub async fn get(
        &self,
        config: Option<RequestConfiguration<CollectionQueryParameters>>,
    ) -> Result<Option<CollectionResponse<DeviceConfiguration>>> {
        self.inner.get(config).await
    }

    /// Creates a profile. `body.odata_type` selects the platform.
    pub async fn post(
        &self,
        body: &DeviceConfiguration,
        config: Option<RequestConfiguration>,
    ) -> Result<Option<DeviceConfiguration>> {
        self.inner.post(body, config).await
    }

    /// `deviceConfigurations/$count`.
    pub fn count(&self) -> CountRequestBuilder {
        self.inner.count()
    }

    /// Addresses one profile.
    pub fn by_device_configuration_id(&self, device_configuration_id: &str) -> DeviceConfigurationItemRequestBuilder {
        DeviceConfigurationItemRequestBuilder {
            inner: self.inner.by_id(device_configuration_id),
        }
    }

    /// The collection addressed by an absolute URL such as `@odata.nextLink`.
    pub fn with_url(&self, raw_url: &str) -> Self {
        DeviceConfigurationsRequestBuilder {
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
        body: &DeviceConfiguration,
        config: Option<RequestConfiguration>,
    ) -> Result<RequestInformation> {
        self.inner.to_post_request_information(body, config)
    }
}

/// Builder for `deviceManagement/deviceConfigurations/{id}`.
#[derive(Debug, Clone)]
pub struct DeviceConfigurationItemRequestBuilder {
    inner: EntityItemRequestBuilder<DeviceConfiguration>,
}

impl DeviceConfigurationItemRequestBuilder {
    fn base(&self) -> &BaseRequestBuilder {
        self.inner.base()
    }

    /// Reads the profile.
    pub async fn get(
        &self,
        config: Option<RequestConfiguration<ItemQueryParameters>>,
    ) -> Result<Option<DeviceConfiguration>> {
        self.inner.get(config).await
    }

    /// Updates the profile. `body.odata_type` must match the stored profile.
    pub async fn patch(
        &self,
        body: &DeviceConfiguration,
        config: Option<RequestConfiguration>,
    ) -> Result<Option<DeviceConfiguration>> {
        self.inner.patch(body, config).await
    }

    /// Deletes the profile.
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
        body: &DeviceConfiguration,
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

    /// Groups the profile is assigned to.
    pub fn assignments(&self) -> EntityCollectionRequestBuilder<DeviceConfigurationAssignment> {
        EntityCollectionRequestBuilder::new(self.base(), &ASSIGNMENTS)
    }

    /// Per-device deployment status.
    pub fn device_statuses(&self) -> EntityCollectionRequestBuilder<DeviceConfigurationDeviceStatus> {
        EntityCollectionRequestBuilder::new(self.base(), &DEVICE_STATUSES)
    }

    /// Per-user deployment status.
    pub fn user_statuses(&self) -> EntityCollectionRequestBuilder<DeviceConfigurationUserStatus> {
        EntityCollectionRequestBuilder::new(self.base(), &USER_STATUSES)
    }

    /// Per-setting deployment counts.
    pub fn device_setting_state_summaries(&self) -> EntityCollectionRequestBuilder<SettingStateDeviceSummary> {
        EntityCollectionRequestBuilder::new(self.base(), &DEVICE_SETTING_STATE_SUMMARIES)
    }

    /// Aggregated device deployment counts.
    pub fn device_status_overview(&self) -> EntityItemRequestBuilder<StatusOverview> {
        EntityItemRequestBuilder::new(self.base().child(DEVICE_STATUS_OVERVIEW))
    }

    /// Aggregated user deployment counts.
    pub fn user_status_overview(&self) -> EntityItemRequestBuilder<StatusOverview> {
        EntityItemRequestBuilder::new(self.base().child(USER_STATUS_OVERVIEW))
    }

    /// Replaces the profile's assignments.
    pub fn assign(
        &self,
    ) -> ActionWithResponseRequestBuilder<AssignRequestBody, CollectionResponse<DeviceConfigurationAssignment>>
    {
        ActionWithResponseRequestBuilder::new(self.base(), ASSIGN)
    }

    /// Reads the plain-text value of an encrypted OMA-URI setting.
    pub fn get_oma_setting_plain_text_value(
        &self,
        secret_reference_value_id: &str,
    ) -> GetOmaSettingPlainTextValueRequestBuilder {
        GetOmaSettingPlainTextValueRequestBuilder {
            base: self.base().child_with(
                GET_OMA_SETTING_PLAIN_TEXT_VALUE,
                "secretReferenceValueId",
                secret_reference_value_id,
            ),
        }
    }
}

/// Builder for the `getOmaSettingPlainTextValue` function.
#[derive(Debug, Clone)]
pub struct GetOmaSettingPlainTextValueRequestBuilder {
    base: BaseRequestBuilder,
}

impl GetOmaSettingPlainTextValueRequestBuilder {
    /// Calls the function and unwraps its `value`.
    pub async fn get(&self, config: Option<RequestConfiguration>) -> Result<Option<String>> {
        let response: Option<ValueResponse<String>> = self.base.get(config).await?;
        Ok(response.and_then(|r| r.value))
    }

    /// The request `get` would send.
    pub fn to_get_request_information(
        &self,
        config: Option<RequestConfiguration>,
    ) -> Result<RequestInformation> {
        self.base.request_information(reqwest::Method::GET, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::tests::StubAdapter;
    use crate::models::{Assignment, AssignmentTarget, AssignmentTargetKind, DeviceConfigurationKind};
    use crate::request::PathParameters;
    use std::sync::Arc;

    fn configs(stub: Arc<StubAdapter>) -> DeviceConfigurationsRequestBuilder {
        let root = BaseRequestBuilder::new(
            stub,
            "{+baseurl}/deviceManagement{?%24expand,%24select}",
            PathParameters::new(),
        );
        DeviceConfigurationsRequestBuilder::new(&root)
    }

    fn url(mut info: RequestInformation) -> String {
        info.set_base_url("https://graph.microsoft.com/v1.0");
        info.uri().unwrap().to_string()
    }

    #[test]
    fn function_parameter_is_encoded_inside_quotes() {
        let stub = StubAdapter::new(204, None, "");
        let info = configs(stub)
            .by_device_configuration_id("cfg-1")
            .get_oma_setting_plain_text_value("secret ref")
            .to_get_request_information(None)
            .unwrap();
        assert_eq!(
            url(info),
            "https://graph.microsoft.com/v1.0/deviceManagement/deviceConfigurations/cfg-1/getOmaSettingPlainTextValue(secretReferenceValueId='secret%20ref')"
        );
    }

    #[tokio::test]
    async fn function_value_is_unwrapped() {
        let stub = StubAdapter::new(200, Some("application/json"), r#"{"value":"p@ss"}"#);
        let value = configs(stub)
            .by_device_configuration_id("cfg-1")
            .get_oma_setting_plain_text_value("ref")
            .get(None)
            .await
            .unwrap();
        assert_eq!(value.as_deref(), Some("p@ss"));
    }

    #[tokio::test]
    async fn assign_posts_assignments_and_reads_result() {
        let stub = StubAdapter::new(
            200,
            Some("application/json"),
            r##"{"value":[{"id":"a1","target":{"@odata.type":"#microsoft.graph.allDevicesAssignmentTarget"}}]}"##,
        );
        let body = AssignRequestBody {
            assignments: vec![Assignment::to(AssignmentTarget::all_devices())],
            ..Default::default()
        };
        let result = configs(stub.clone())
            .by_device_configuration_id("cfg-1")
            .assign()
            .post(&body, None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            result.value[0].target.as_ref().and_then(|t| t.kind()),
            Some(AssignmentTargetKind::AllDevices)
        );
        assert!(url(stub.last()).ends_with("/deviceConfigurations/cfg-1/assign"));
    }

    #[test]
    fn post_body_carries_discriminator() {
        let stub = StubAdapter::new(204, None, "");
        let mut profile = DeviceConfiguration::of_kind(DeviceConfigurationKind::Windows10General);
        profile.display_name = Some("Baseline".to_string());
        let info = configs(stub)
            .to_post_request_information(&profile, None)
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(info.content.as_deref().unwrap()).unwrap();
        assert_eq!(body["@odata.type"], "#microsoft.graph.windows10GeneralConfiguration");
        assert_eq!(body["displayName"], "Baseline");
    }

    #[test]
    fn status_navigation_urls() {
        let stub = StubAdapter::new(204, None, "");
        let item = configs(stub).by_device_configuration_id("c");
        let cases = [
            (item.device_statuses().to_get_request_information(None).unwrap(), "deviceStatuses"),
            (item.user_statuses().to_get_request_information(None).unwrap(), "userStatuses"),
            (
                item.device_setting_state_summaries().to_get_request_information(None).unwrap(),
                "deviceSettingStateSummaries",
            ),
            (item.assignments().to_get_request_information(None).unwrap(), "assignments"),
            (item.device_status_overview().to_get_request_information(None).unwrap(), "deviceStatusOverview"),
            (item.user_status_overview().to_get_request_information(None).unwrap(), "userStatusOverview"),
        ];
        for (info, segment) in cases {
            assert!(url(info).ends_with(&format!("/deviceConfigurations/c/{segment}")));
        }
    }
}
