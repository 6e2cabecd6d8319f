//! `deviceManagement/managedDevices`: enrolled devices and remote actions.
//!
//! Remote actions are fire-and-forget on the Graph side: a `204` means
//! Intune queued the action, not that the device carried it out. Device
//! state changes show up later in the device's properties.

use crate::action::{ActionRequestBuilder, ActionWithBodyRequestBuilder};
use crate::builder::BaseRequestBuilder;
use crate::collection::{
    CountRequestBuilder, EntityCollectionRequestBuilder, EntityItemRequestBuilder,
    EntitySetTemplates,
};
use crate::error::Result;
use crate::models::{
    CleanWindowsDeviceRequestBody, CollectionResponse, DeleteUserFromSharedAppleDeviceRequestBody,
    DeviceCategory, DeviceCompliancePolicyState, DeviceConfigurationState, ManagedDevice,
    WindowsDefenderScanRequestBody, WipeRequestBody,
};
use crate::query::{CollectionQueryParameters, ItemQueryParameters};
use crate::request::{RequestConfiguration, RequestInformation};

// ── URL templates ────────────────────────────────────────────────────

pub(crate) static MANAGED_DEVICES: EntitySetTemplates = EntitySetTemplates {
    collection: "{+baseurl}/deviceManagement/managedDevices{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}",
    item: "{+baseurl}/deviceManagement/managedDevices/{managedDevice%2Did}{?%24expand,%24select}",
    count: "{+baseurl}/deviceManagement/managedDevices/$count{?%24filter,%24search}",
    id_parameter: "managedDevice%2Did",
};

pub(crate) const DEVICE_CATEGORY: &str =
    "{+baseurl}/deviceManagement/managedDevices/{managedDevice%2Did}/deviceCategory{?%24expand,%24select}";

pub(crate) static DEVICE_COMPLIANCE_POLICY_STATES: EntitySetTemplates = EntitySetTemplates {
    collection: "{+baseurl}/deviceManagement/managedDevices/{managedDevice%2Did}/deviceCompliancePolicyStates{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}",
    item: "{+baseurl}/deviceManagement/managedDevices/{managedDevice%2Did}/deviceCompliancePolicyStates/{deviceCompliancePolicyState%2Did}{?%24expand,%24select}",
    count: "{+baseurl}/deviceManagement/managedDevices/{managedDevice%2Did}/deviceCompliancePolicyStates/$count{?%24filter,%24search}",
    id_parameter: "deviceCompliancePolicyState%2Did",
};

pub(crate) static DEVICE_CONFIGURATION_STATES: EntitySetTemplates = EntitySetTemplates {
    collection: "{+baseurl}/deviceManagement/managedDevices/{managedDevice%2Did}/deviceConfigurationStates{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}",
    item: "{+baseurl}/deviceManagement/managedDevices/{managedDevice%2Did}/deviceConfigurationStates/{deviceConfigurationState%2Did}{?%24expand,%24select}",
    count: "{+baseurl}/deviceManagement/managedDevices/{managedDevice%2Did}/deviceConfigurationStates/$count{?%24filter,%24search}",
    id_parameter: "deviceConfigurationState%2Did",
};

pub(crate) const RETIRE: &str = "{+baseurl}/deviceManagement/managedDevices/{managedDevice%2Did}/retire";
pub(crate) const REBOOT_NOW: &str = "{+baseurl}/deviceManagement/managedDevices/{managedDevice%2Did}/rebootNow";
pub(crate) const SYNC_DEVICE: &str = "{+baseurl}/deviceManagement/managedDevices/{managedDevice%2Did}/syncDevice";
pub(crate) const REMOTE_LOCK: &str = "{+baseurl}/deviceManagement/managedDevices/{managedDevice%2Did}/remoteLock";
pub(crate) const SHUT_DOWN: &str = "{+baseurl}/deviceManagement/managedDevices/{managedDevice%2Did}/shutDown";
pub(crate) const LOCATE_DEVICE: &str = "{+baseurl}/deviceManagement/managedDevices/{managedDevice%2Did}/locateDevice";
pub(crate) const RESET_PASSCODE: &str = "{+baseurl}/deviceManagement/managedDevices/{managedDevice%2Did}/resetPasscode";
pub(crate) const DISABLE_LOST_MODE: &str = "{+baseurl}/deviceManagement/managedDevices/{managedDevice%2Did}/disableLostMode";
pub(crate) const RECOVER_PASSCODE: &str = "{+baseurl}/deviceManagement/managedDevices/{managedDevice%2Did}/recoverPasscode";
pub(crate) const REQUEST_REMOTE_ASSISTANCE: &str = "{+baseurl}/deviceManagement/managedDevices/{managedDevice%2Did}/requestRemoteAssistance";
pub(crate) const LOGOUT_SHARED_APPLE_DEVICE_ACTIVE_USER: &str = "{+baseurl}/deviceManagement/managedDevices/{managedDevice%2Did}/logoutSharedAppleDeviceActiveUser";
pub(crate) const BYPASS_ACTIVATION_LOCK: &str = "{+baseurl}/deviceManagement/managedDevices/{managedDevice%2Did}/bypassActivationLock";
pub(crate) const WINDOWS_DEFENDER_UPDATE_SIGNATURES: &str = "{+baseurl}/deviceManagement/managedDevices/{managedDevice%2Did}/windowsDefenderUpdateSignatures";
pub(crate) const WIPE: &str = "{+baseurl}/deviceManagement/managedDevices/{managedDevice%2Did}/wipe";
pub(crate) const WINDOWS_DEFENDER_SCAN: &str = "{+baseurl}/deviceManagement/managedDevices/{managedDevice%2Did}/windowsDefenderScan";
pub(crate) const CLEAN_WINDOWS_DEVICE: &str = "{+baseurl}/deviceManagement/managedDevices/{managedDevice%2Did}/cleanWindowsDevice";
pub(crate) const DELETE_USER_FROM_SHARED_APPLE_DEVICE: &str = "{+baseurl}/deviceManagement/managedDevices/{managedDevice%2Did}/deleteUserFromSharedAppleDevice";

// ── Collection ───────────────────────────────────────────────────────

/// Builder for `deviceManagement/managedDevices`.
#[derive(Debug, Clone)]
pub struct ManagedDevicesRequestBuilder {
    inner: EntityCollectionRequestBuilder<ManagedDevice>,
}

impl ManagedDevicesRequestBuilder {
    pub(crate) fn new(parent: &BaseRequestBuilder) -> Self {
        ManagedDevicesRequestBuilder {
            inner: EntityCollectionRequestBuilder::new(parent, &MANAGED_DEVICES),
        }
    }

    /// Lists one page of managed devices.
    ///
    /// Use `odata_next_link` with [`with_url`](Self::with_url) for the next page.
    pub async fn get(
        &self,
        config: Option<RequestConfiguration<CollectionQueryParameters>>,
    ) -> Result<Option<CollectionResponse<ManagedDevice>>> {
        self.inner.get(config).await
    }

    /// Creates a managed device record.
    pub async fn post(
        &self,
        body: &ManagedDevice,
        config: Option<RequestConfiguration>,
    ) -> Result<Option<ManagedDevice>> {
        self.inner.post(body, config).await
    }

    /// `managedDevices/$count`.
    pub fn count(&self) -> CountRequestBuilder {
        self.inner.count()
    }

    /// Addresses one device.
    pub fn by_managed_device_id(&self, managed_device_id: &str) -> ManagedDeviceItemRequestBuilder {
        ManagedDeviceItemRequestBuilder {
            inner: self.inner.by_id(managed_device_id),
        }
    }

    /// The collection addressed by an absolute URL such as `@odata.nextLink`.
    pub fn with_url(&self, raw_url: &str) -> Self {
        ManagedDevicesRequestBuilder {
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
        body: &ManagedDevice,
        config: Option<RequestConfiguration>,
    ) -> Result<RequestInformation> {
        self.inner.to_post_request_information(body, config)
    }
}

// ── Item ─────────────────────────────────────────────────────────────

/// Builder for `deviceManagement/managedDevices/{id}`.
#[derive(Debug, Clone)]
pub struct ManagedDeviceItemRequestBuilder {
    inner: EntityItemRequestBuilder<ManagedDevice>,
}

impl ManagedDeviceItemRequestBuilder {
    fn base(&self) -> &BaseRequestBuilder {
        self.inner.base()
    }

    /// Reads the device.
    pub async fn get(
        &self,
        config: Option<RequestConfiguration<ItemQueryParameters>>,
    ) -> Result<Option<ManagedDevice>> {
        self.inner.get(config).await
    }

    /// Updates writable properties such as `notes` or `managedDeviceOwnerType`.
    pub async fn patch(
        &self,
        body: &ManagedDevice,
        config: Option<RequestConfiguration>,
    ) -> Result<Option<ManagedDevice>> {
        self.inner.patch(body, config).await
    }

    /// Deletes the device record from Intune.
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
        body: &ManagedDevice,
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

    /// The device's category. Supports `get` and `patch`.
    pub fn device_category(&self) -> EntityItemRequestBuilder<DeviceCategory> {
        EntityItemRequestBuilder::new(self.base().child(DEVICE_CATEGORY))
    }

    /// Compliance policy states reported by the device.
    pub fn device_compliance_policy_states(
        &self,
    ) -> EntityCollectionRequestBuilder<DeviceCompliancePolicyState> {
        EntityCollectionRequestBuilder::new(self.base(), &DEVICE_COMPLIANCE_POLICY_STATES)
    }

    /// Configuration profile states reported by the device.
    pub fn device_configuration_states(&self) -> EntityCollectionRequestBuilder<DeviceConfigurationState> {
        EntityCollectionRequestBuilder::new(self.base(), &DEVICE_CONFIGURATION_STATES)
    }

    // ── Remote actions ───────────────────────────────────────────────

    /// Removes company data and the management profile, keeping personal data.
    pub fn retire(&self) -> ActionRequestBuilder {
        ActionRequestBuilder::new(self.base(), RETIRE)
    }

    /// Restarts the device.
    pub fn reboot_now(&self) -> ActionRequestBuilder {
        ActionRequestBuilder::new(self.base(), REBOOT_NOW)
    }

    /// Asks the device to check in with Intune.
    pub fn sync_device(&self) -> ActionRequestBuilder {
        ActionRequestBuilder::new(self.base(), SYNC_DEVICE)
    }

    /// Locks the screen.
    pub fn remote_lock(&self) -> ActionRequestBuilder {
        ActionRequestBuilder::new(self.base(), REMOTE_LOCK)
    }

    /// Powers the device off.
    pub fn shut_down(&self) -> ActionRequestBuilder {
        ActionRequestBuilder::new(self.base(), SHUT_DOWN)
    }

    /// Requests the device location.
    pub fn locate_device(&self) -> ActionRequestBuilder {
        ActionRequestBuilder::new(self.base(), LOCATE_DEVICE)
    }

    /// Removes the passcode (iOS/iPadOS) or resets it (Android).
    pub fn reset_passcode(&self) -> ActionRequestBuilder {
        ActionRequestBuilder::new(self.base(), RESET_PASSCODE)
    }

    /// Takes a supervised iOS device out of lost mode.
    pub fn disable_lost_mode(&self) -> ActionRequestBuilder {
        ActionRequestBuilder::new(self.base(), DISABLE_LOST_MODE)
    }

    /// Recovers the passcode.
    pub fn recover_passcode(&self) -> ActionRequestBuilder {
        ActionRequestBuilder::new(self.base(), RECOVER_PASSCODE)
    }

    /// Starts a TeamViewer remote assistance session.
    pub fn request_remote_assistance(&self) -> ActionRequestBuilder {
        ActionRequestBuilder::new(self.base(), REQUEST_REMOTE_ASSISTANCE)
    }

    /// Signs the current user out of a shared iPad.
    pub fn logout_shared_apple_device_active_user(&self) -> ActionRequestBuilder {
        ActionRequestBuilder::new(self.base(), LOGOUT_SHARED_APPLE_DEVICE_ACTIVE_USER)
    }

    /// Bypasses Activation Lock on a supervised iOS device.
    pub fn bypass_activation_lock(&self) -> ActionRequestBuilder {
        ActionRequestBuilder::new(self.base(), BYPASS_ACTIVATION_LOCK)
    }

    /// Updates Microsoft Defender Antivirus signatures.
    pub fn windows_defender_update_signatures(&self) -> ActionRequestBuilder {
        ActionRequestBuilder::new(self.base(), WINDOWS_DEFENDER_UPDATE_SIGNATURES)
    }

    /// Restores the device to factory settings.
    pub fn wipe(&self) -> ActionWithBodyRequestBuilder<WipeRequestBody> {
        ActionWithBodyRequestBuilder::new(self.base(), WIPE)
    }

    /// Runs a Microsoft Defender Antivirus scan.
    pub fn windows_defender_scan(&self) -> ActionWithBodyRequestBuilder<WindowsDefenderScanRequestBody> {
        ActionWithBodyRequestBuilder::new(self.base(), WINDOWS_DEFENDER_SCAN)
    }

    /// Removes pre-installed apps from a Windows device (Fresh Start).
    pub fn clean_windows_device(&self) -> ActionWithBodyRequestBuilder<CleanWindowsDeviceRequestBody> {
        ActionWithBodyRequestBuilder::new(self.base(), CLEAN_WINDOWS_DEVICE)
    }

    /// Removes a user and their cached data from a shared iPad.
    pub fn delete_user_from_shared_apple_device(
        &self,
    ) -> ActionWithBodyRequestBuilder<DeleteUserFromSharedAppleDeviceRequestBody> {
        ActionWithBodyRequestBuilder::new(self.base(), DELETE_USER_FROM_SHARED_APPLE_DEVICE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::tests::StubAdapter;
    use crate::request::PathParameters;
    use reqwest::Method;
    use std::sync::Arc;

    fn devices(stub: Arc<StubAdapter>) -> ManagedDevicesRequestBuilder {
        let root = BaseRequestBuilder::new(
            stub,
            "{+baseurl}/deviceManagement{?%24expand,%24select}",
            PathParameters::new(),
        );
        ManagedDevicesRequestBuilder::new(&root)
    }

    fn url(mut info: RequestInformation) -> String {
        info.set_base_url("https://graph.microsoft.com/v1.0");
        info.uri().unwrap().to_string()
    }

    #[test]
    fn item_url_carries_device_id() {
        let stub = StubAdapter::new(204, None, "");
        let info = devices(stub)
            .by_managed_device_id("0f6c7b3e")
            .to_get_request_information(None)
            .unwrap();
        assert_eq!(
            url(info),
            "https://graph.microsoft.com/v1.0/deviceManagement/managedDevices/0f6c7b3e"
        );
    }

    #[test]
    fn nested_collections_inherit_device_id() {
        let stub = StubAdapter::new(204, None, "");
        let info = devices(stub)
            .by_managed_device_id("dev-1")
            .device_configuration_states()
            .by_id("state-1")
            .to_get_request_information(None)
            .unwrap();
        assert_eq!(
            url(info),
            "https://graph.microsoft.com/v1.0/deviceManagement/managedDevices/dev-1/deviceConfigurationStates/state-1"
        );
    }

    #[test]
    fn every_action_targets_its_own_segment() {
        let stub = StubAdapter::new(204, None, "");
        let device = devices(stub).by_managed_device_id("d");
        let cases = [
            (device.retire(), "retire"),
            (device.reboot_now(), "rebootNow"),
            (device.sync_device(), "syncDevice"),
            (device.remote_lock(), "remoteLock"),
            (device.shut_down(), "shutDown"),
            (device.locate_device(), "locateDevice"),
            (device.reset_passcode(), "resetPasscode"),
            (device.disable_lost_mode(), "disableLostMode"),
            (device.recover_passcode(), "recoverPasscode"),
            (device.request_remote_assistance(), "requestRemoteAssistance"),
            (
                device.logout_shared_apple_device_active_user(),
                "logoutSharedAppleDeviceActiveUser",
            ),
            (device.bypass_activation_lock(), "bypassActivationLock"),
            (
                device.windows_defender_update_signatures(),
                "windowsDefenderUpdateSignatures",
            ),
        ];
        for (action, segment) in cases {
            let info = action.to_post_request_information(None).unwrap();
            assert_eq!(info.method, Method::POST);
            assert!(
                url(info).ends_with(&format!("/managedDevices/d/{segment}")),
                "wrong URL for {segment}"
            );
        }
    }

    #[tokio::test]
    async fn wipe_sends_body() {
        let stub = StubAdapter::new(204, None, "");
        devices(stub.clone())
            .by_managed_device_id("d")
            .wipe()
            .post(
                &WipeRequestBody {
                    keep_user_data: Some(true),
                    ..Default::default()
                },
                None,
            )
            .await
            .unwrap();
        let sent = stub.last();
        assert_eq!(sent.content.as_deref(), Some(&br#"{"keepUserData":true}"#[..]));
        assert!(url(sent).ends_with("/managedDevices/d/wipe"));
    }

    #[tokio::test]
    async fn device_category_reads_single_entity() {
        let stub = StubAdapter::new(
            200,
            Some("application/json"),
            r#"{"id":"cat-1","displayName":"Kiosk"}"#,
        );
        let category = devices(stub.clone())
            .by_managed_device_id("d")
            .device_category()
            .get(None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(category.display_name.as_deref(), Some("Kiosk"));
        assert!(url(stub.last()).ends_with("/managedDevices/d/deviceCategory"));
    }
}
