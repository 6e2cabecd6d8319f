//! The `deviceManagement` singleton, the root of every Intune resource.

use std::sync::Arc;

use reqwest::Method;

use crate::adapter::RequestAdapter;
use crate::builder::BaseRequestBuilder;
use crate::collection::{EntityCollectionRequestBuilder, EntitySetTemplates};
use crate::device_compliance_policies::DeviceCompliancePoliciesRequestBuilder;
use crate::device_configurations::DeviceConfigurationsRequestBuilder;
use crate::error::Result;
use crate::managed_devices::ManagedDevicesRequestBuilder;
use crate::models::{AuditEvent, DetectedApp, DeviceCategory, DeviceManagement, ManagedDeviceOverview};
use crate::query::ItemQueryParameters;
use crate::request::{PathParameters, RequestConfiguration, RequestInformation};

pub(crate) const DEVICE_MANAGEMENT: &str = "{+baseurl}/deviceManagement{?%24expand,%24select}";

pub(crate) const MANAGED_DEVICE_OVERVIEW: &str =
    "{+baseurl}/deviceManagement/managedDeviceOverview{?%24expand,%24select}";

pub(crate) static DEVICE_CATEGORIES: EntitySetTemplates = EntitySetTemplates {
    collection: "{+baseurl}/deviceManagement/deviceCategories{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}",
    item: "{+baseurl}/deviceManagement/deviceCategories/{deviceCategory%2Did}{?%24expand,%24select}",
    count: "{+baseurl}/deviceManagement/deviceCategories/$count{?%24filter,%24search}",
    id_parameter: "deviceCategory%2Did",
};

pub(crate) static DETECTED_APPS: EntitySetTemplates = EntitySetTemplates {
    collection: "{+baseurl}/deviceManagement/detectedApps{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}",
    item: "{+baseurl}/deviceManagement/detectedApps/{detectedApp%2Did}{?%24expand,%24select}",
    count: "{+baseurl}/deviceManagement/detectedApps/$count{?%24filter,%24search}",
    id_parameter: "detectedApp%2Did",
};

pub(crate) static AUDIT_EVENTS: EntitySetTemplates = EntitySetTemplates {
    collection: "{+baseurl}/deviceManagement/auditEvents{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}",
    item: "{+baseurl}/deviceManagement/auditEvents/{auditEvent%2Did}{?%24expand,%24select}",
    count: "{+baseurl}/deviceManagement/auditEvents/$count{?%24filter,%24search}",
    id_parameter: "auditEvent%2Did",
};

/// Builder for `deviceManagement`.
#[derive(Debug, Clone)]
pub struct DeviceManagementRequestBuilder {
    base: BaseRequestBuilder,
}

impl DeviceManagementRequestBuilder {
    /// The singleton, reached through `adapter`.
    pub fn new(adapter: Arc<dyn RequestAdapter>) -> Self {
        DeviceManagementRequestBuilder {
            base: BaseRequestBuilder::new(adapter, DEVICE_MANAGEMENT, PathParameters::new()),
        }
    }

    /// Reads the tenant's Intune settings.
    pub async fn get(
        &self,
        config: Option<RequestConfiguration<ItemQueryParameters>>,
    ) -> Result<Option<DeviceManagement>> {
        self.base.get(config).await
    }

    /// Updates the tenant's Intune settings.
    pub async fn patch(
        &self,
        body: &DeviceManagement,
        config: Option<RequestConfiguration>,
    ) -> Result<Option<DeviceManagement>> {
        self.base.patch(body, config).await
    }

    /// The request `get` would send.
    pub fn to_get_request_information(
        &self,
        config: Option<RequestConfiguration<ItemQueryParameters>>,
    ) -> Result<RequestInformation> {
        self.base.request_information(Method::GET, config)
    }

    /// The request `patch` would send.
    pub fn to_patch_request_information(
        &self,
        body: &DeviceManagement,
        config: Option<RequestConfiguration>,
    ) -> Result<RequestInformation> {
        self.base
            .request_information_with_body(Method::PATCH, body, config)
    }

    /// The singleton addressed by an absolute URL.
    pub fn with_url(&self, raw_url: &str) -> Self {
        DeviceManagementRequestBuilder {
            base: self.base.with_url(raw_url),
        }
    }

    /// Enrolled devices.
    pub fn managed_devices(&self) -> ManagedDevicesRequestBuilder {
        ManagedDevicesRequestBuilder::new(&self.base)
    }

    /// Configuration profiles.
    pub fn device_configurations(&self) -> DeviceConfigurationsRequestBuilder {
        DeviceConfigurationsRequestBuilder::new(&self.base)
    }

    /// Compliance policies.
    pub fn device_compliance_policies(&self) -> DeviceCompliancePoliciesRequestBuilder {
        DeviceCompliancePoliciesRequestBuilder::new(&self.base)
    }

    /// Device categories.
    pub fn device_categories(&self) -> EntityCollectionRequestBuilder<DeviceCategory> {
        EntityCollectionRequestBuilder::new(&self.base, &DEVICE_CATEGORIES)
    }

    /// Apps discovered on managed devices.
    pub fn detected_apps(&self) -> EntityCollectionRequestBuilder<DetectedApp> {
        EntityCollectionRequestBuilder::new(&self.base, &DETECTED_APPS)
    }

    /// Intune audit log.
    pub fn audit_events(&self) -> EntityCollectionRequestBuilder<AuditEvent> {
        EntityCollectionRequestBuilder::new(&self.base, &AUDIT_EVENTS)
    }

    /// Device counts by platform and state.
    pub fn managed_device_overview(&self) -> ManagedDeviceOverviewRequestBuilder {
        ManagedDeviceOverviewRequestBuilder {
            base: self.base.child(MANAGED_DEVICE_OVERVIEW),
        }
    }
}

/// Builder for the read-only `deviceManagement/managedDeviceOverview`.
#[derive(Debug, Clone)]
pub struct ManagedDeviceOverviewRequestBuilder {
    base: BaseRequestBuilder,
}

impl ManagedDeviceOverviewRequestBuilder {
    /// Reads the overview.
    pub async fn get(
        &self,
        config: Option<RequestConfiguration<ItemQueryParameters>>,
    ) -> Result<Option<ManagedDeviceOverview>> {
        self.base.get(config).await
    }

    /// The request `get` would send.
    pub fn to_get_request_information(
        &self,
        config: Option<RequestConfiguration<ItemQueryParameters>>,
    ) -> Result<RequestInformation> {
        self.base.request_information(Method::GET, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::tests::StubAdapter;
    use crate::request::RAW_URL_KEY;

    fn url(mut info: RequestInformation) -> String {
        info.set_base_url("https://graph.microsoft.com/v1.0");
        info.uri().unwrap().to_string()
    }

    #[test]
    fn get_with_select() {
        let root = DeviceManagementRequestBuilder::new(StubAdapter::new(204, None, ""));
        let info = root
            .to_get_request_information(Some(
                RequestConfiguration::new().query(ItemQueryParameters::default().select(["intuneAccountId"])),
            ))
            .unwrap();
        assert_eq!(
            url(info),
            "https://graph.microsoft.com/v1.0/deviceManagement?%24select=intuneAccountId"
        );
    }

    #[test]
    fn navigation_does_not_share_state() {
        let root = DeviceManagementRequestBuilder::new(StubAdapter::new(204, None, ""));
        let one = root.managed_devices().by_managed_device_id("1");
        let two = root.managed_devices().by_managed_device_id("2");
        assert!(url(one.to_get_request_information(None).unwrap()).ends_with("/managedDevices/1"));
        assert!(url(two.to_get_request_information(None).unwrap()).ends_with("/managedDevices/2"));
        assert!(url(root.to_get_request_information(None).unwrap()).ends_with("/deviceManagement"));
    }

    #[test]
    fn with_url_targets_raw_url() {
        let root = DeviceManagementRequestBuilder::new(StubAdapter::new(204, None, ""));
        let info = root
            .with_url("https://graph.microsoft.us/v1.0/deviceManagement")
            .to_get_request_information(None)
            .unwrap();
        assert!(info.path_parameters.contains_key(RAW_URL_KEY));
        assert_eq!(url(info), "https://graph.microsoft.us/v1.0/deviceManagement");
    }

    #[tokio::test]
    async fn overview_reads_counts() {
        let stub = StubAdapter::new(
            200,
            Some("application/json"),
            r#"{"id":"ov","enrolledDeviceCount":42,"mdmEnrolledCount":40}"#,
        );
        let overview = DeviceManagementRequestBuilder::new(stub.clone())
            .managed_device_overview()
            .get(None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(overview.enrolled_device_count, Some(42));
        assert!(url(stub.last()).ends_with("/deviceManagement/managedDeviceOverview"));
    }
}
