//! Inventory of every operation the builders implement.
//!
//! Entries are built from the same template constants the builders use, so
//! the catalog cannot drift from the code. `manifest/endpoints.toml` records
//! the Graph contract independently, and the manifest tests compare the two.

use reqwest::Method;

use crate::collection::EntitySetTemplates;
use crate::{device_compliance_policies as policies, device_configurations as configs};
use crate::{device_management as root, managed_devices as devices};

/// One implemented operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Dotted resource path, e.g. `deviceManagement.managedDevices`.
    pub family: &'static str,
    /// Operation name, unique within the family.
    pub name: &'static str,
    /// HTTP method.
    pub method: Method,
    /// RFC 6570 URL template.
    pub url_template: &'static str,
}

impl Endpoint {
    fn new(family: &'static str, name: &'static str, method: Method, url_template: &'static str) -> Self {
        Endpoint {
            family,
            name,
            method,
            url_template,
        }
    }
}

fn entity_set(out: &mut Vec<Endpoint>, family: &'static str, set: &'static EntitySetTemplates) {
    out.push(Endpoint::new(family, "list", Method::GET, set.collection));
    out.push(Endpoint::new(family, "create", Method::POST, set.collection));
    out.push(Endpoint::new(family, "count", Method::GET, set.count));
    entity(out, family, set.item);
}

fn entity(out: &mut Vec<Endpoint>, family: &'static str, template: &'static str) {
    out.push(Endpoint::new(family, "get", Method::GET, template));
    out.push(Endpoint::new(family, "update", Method::PATCH, template));
    out.push(Endpoint::new(family, "delete", Method::DELETE, template));
}

fn action(out: &mut Vec<Endpoint>, family: &'static str, name: &'static str, template: &'static str) {
    out.push(Endpoint::new(family, name, Method::POST, template));
}

/// Every operation, in builder order.
pub fn endpoints() -> Vec<Endpoint> {
    let mut out = Vec::new();

    const DM: &str = "deviceManagement";
    out.push(Endpoint::new(DM, "get", Method::GET, root::DEVICE_MANAGEMENT));
    out.push(Endpoint::new(DM, "update", Method::PATCH, root::DEVICE_MANAGEMENT));
    out.push(Endpoint::new(
        "deviceManagement.managedDeviceOverview",
        "get",
        Method::GET,
        root::MANAGED_DEVICE_OVERVIEW,
    ));
    entity_set(&mut out, "deviceManagement.deviceCategories", &root::DEVICE_CATEGORIES);
    entity_set(&mut out, "deviceManagement.detectedApps", &root::DETECTED_APPS);
    entity_set(&mut out, "deviceManagement.auditEvents", &root::AUDIT_EVENTS);

    const MD: &str = "deviceManagement.managedDevices";
    entity_set(&mut out, MD, &devices::MANAGED_DEVICES);
    entity(&mut out, "deviceManagement.managedDevices.deviceCategory", devices::DEVICE_CATEGORY);
    entity_set(
        &mut out,
        "deviceManagement.managedDevices.deviceCompliancePolicyStates",
        &devices::DEVICE_COMPLIANCE_POLICY_STATES,
    );
    entity_set(
        &mut out,
        "deviceManagement.managedDevices.deviceConfigurationStates",
        &devices::DEVICE_CONFIGURATION_STATES,
    );
    for (name, template) in [
        ("retire", devices::RETIRE),
        ("rebootNow", devices::REBOOT_NOW),
        ("syncDevice", devices::SYNC_DEVICE),
        ("remoteLock", devices::REMOTE_LOCK),
        ("shutDown", devices::SHUT_DOWN),
        ("locateDevice", devices::LOCATE_DEVICE),
        ("resetPasscode", devices::RESET_PASSCODE),
        ("disableLostMode", devices::DISABLE_LOST_MODE),
        ("recoverPasscode", devices::RECOVER_PASSCODE),
        ("requestRemoteAssistance", devices::REQUEST_REMOTE_ASSISTANCE),
        (
            "logoutSharedAppleDeviceActiveUser",
            devices::LOGOUT_SHARED_APPLE_DEVICE_ACTIVE_USER,
        ),
        ("bypassActivationLock", devices::BYPASS_ACTIVATION_LOCK),
        (
            "windowsDefenderUpdateSignatures",
            devices::WINDOWS_DEFENDER_UPDATE_SIGNATURES,
        ),
        ("wipe", devices::WIPE),
        ("windowsDefenderScan", devices::WINDOWS_DEFENDER_SCAN),
        ("cleanWindowsDevice", devices::CLEAN_WINDOWS_DEVICE),
        (
            "deleteUserFromSharedAppleDevice",
            devices::DELETE_USER_FROM_SHARED_APPLE_DEVICE,
        ),
    ] {
        action(&mut out, MD, name, template);
    }

    const DC: &str = "deviceManagement.deviceConfigurations";
    entity_set(&mut out, DC, &configs::DEVICE_CONFIGURATIONS);
    entity_set(&mut out, "deviceManagement.deviceConfigurations.assignments", &configs::ASSIGNMENTS);
    entity_set(&mut out, "deviceManagement.deviceConfigurations.deviceStatuses", &configs::DEVICE_STATUSES);
    entity_set(&mut out, "deviceManagement.deviceConfigurations.userStatuses", &configs::USER_STATUSES);
    entity_set(
        &mut out,
        "deviceManagement.deviceConfigurations.deviceSettingStateSummaries",
        &configs::DEVICE_SETTING_STATE_SUMMARIES,
    );
    entity(
        &mut out,
        "deviceManagement.deviceConfigurations.deviceStatusOverview",
        configs::DEVICE_STATUS_OVERVIEW,
    );
    entity(
        &mut out,
        "deviceManagement.deviceConfigurations.userStatusOverview",
        configs::USER_STATUS_OVERVIEW,
    );
    action(&mut out, DC, "assign", configs::ASSIGN);
    out.push(Endpoint::new(
        DC,
        "getOmaSettingPlainTextValue",
        Method::GET,
        configs::GET_OMA_SETTING_PLAIN_TEXT_VALUE,
    ));

    const CP: &str = "deviceManagement.deviceCompliancePolicies";
    entity_set(&mut out, CP, &policies::DEVICE_COMPLIANCE_POLICIES);
    entity_set(&mut out, "deviceManagement.deviceCompliancePolicies.assignments", &policies::ASSIGNMENTS);
    entity_set(&mut out, "deviceManagement.deviceCompliancePolicies.deviceStatuses", &policies::DEVICE_STATUSES);
    entity_set(&mut out, "deviceManagement.deviceCompliancePolicies.userStatuses", &policies::USER_STATUSES);
    entity_set(
        &mut out,
        "deviceManagement.deviceCompliancePolicies.deviceSettingStateSummaries",
        &policies::DEVICE_SETTING_STATE_SUMMARIES,
    );
    entity_set(
        &mut out,
        "deviceManagement.deviceCompliancePolicies.scheduledActionsForRule",
        &policies::SCHEDULED_ACTIONS_FOR_RULE,
    );
    entity(
        &mut out,
        "deviceManagement.deviceCompliancePolicies.deviceStatusOverview",
        policies::DEVICE_STATUS_OVERVIEW,
    );
    entity(
        &mut out,
        "deviceManagement.deviceCompliancePolicies.userStatusOverview",
        policies::USER_STATUS_OVERVIEW,
    );
    action(&mut out, CP, "assign", policies::ASSIGN);
    action(&mut out, CP, "scheduleActionsForRules", policies::SCHEDULE_ACTIONS_FOR_RULES);

    out
}
