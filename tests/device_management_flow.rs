//! Integration tests for the `deviceManagement` singleton and its
//! tenant-wide children using wiremock.

use std::sync::Arc;

use graph_devmgmt::auth::TokenProvider;
use graph_devmgmt::models::{DeviceManagement, DeviceManagementSettings};
use graph_devmgmt::query::{CollectionQueryParameters, ItemQueryParameters};
use graph_devmgmt::{GraphClient, GraphServiceClient, RequestConfiguration};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_graph(server: &MockServer) -> GraphServiceClient {
    let tp = TokenProvider::with_token("mock-token");
    let client = GraphClient::with_base_url(tp, &format!("{}/v1.0", server.uri()));
    GraphServiceClient::new(Arc::new(client))
}

#[tokio::test]
async fn get_singleton_with_select() {
    let server = MockServer::start().await;
    let graph = mock_graph(&server);

    Mock::given(method("GET"))
        .and(path("/v1.0/deviceManagement"))
        .and(query_param("$select", "id,subscriptionState"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "dm-1",
            "subscriptionState": "active"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = RequestConfiguration::new()
        .query(ItemQueryParameters::default().select(["id", "subscriptionState"]));
    let dm = graph
        .device_management()
        .get(Some(config))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(dm.subscription_state.as_deref(), Some("active"));
}

#[tokio::test]
async fn patch_singleton_settings() {
    let server = MockServer::start().await;
    let graph = mock_graph(&server);

    Mock::given(method("PATCH"))
        .and(path("/v1.0/deviceManagement"))
        .and(body_json(serde_json::json!({
            "settings": {"deviceComplianceCheckinThresholdDays": 30}
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let body = DeviceManagement {
        settings: Some(DeviceManagementSettings {
            device_compliance_checkin_threshold_days: Some(30),
            ..Default::default()
        }),
        ..Default::default()
    };
    let updated = graph.device_management().patch(&body, None).await.unwrap();
    assert!(updated.is_none(), "204 should decode to None");
}

#[tokio::test]
async fn managed_device_overview_reads_platform_counts() {
    let server = MockServer::start().await;
    let graph = mock_graph(&server);

    Mock::given(method("GET"))
        .and(path("/v1.0/deviceManagement/managedDeviceOverview"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "ov",
            "enrolledDeviceCount": 120,
            "mdmEnrolledCount": 118,
            "dualEnrolledDeviceCount": 2,
            "deviceOperatingSystemSummary": {
                "androidCount": 10,
                "iosCount": 30,
                "macOSCount": 5,
                "windowsMobileCount": 0,
                "windowsCount": 75,
                "unknownCount": 0
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let overview = graph
        .device_management()
        .managed_device_overview()
        .get(None)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(overview.enrolled_device_count, Some(120));
    let summary = overview.device_operating_system_summary.unwrap();
    assert_eq!(summary.windows_count, 75);
    assert_eq!(summary.mac_os_count, 5);
}

#[tokio::test]
async fn detected_apps_and_audit_events_are_listed() {
    let server = MockServer::start().await;
    let graph = mock_graph(&server);

    Mock::given(method("GET"))
        .and(path("/v1.0/deviceManagement/detectedApps"))
        .and(query_param("$top", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": [{"id": "app-1", "displayName": "Contoso Notes", "deviceCount": 12}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1.0/deviceManagement/auditEvents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": [{"id": "ev-1", "activity": "Wipe ManagedDevice", "activityResult": "Success"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dm = graph.device_management();
    let apps = dm
        .detected_apps()
        .get(Some(RequestConfiguration::new().query(CollectionQueryParameters::default().top(1))))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(apps.value[0].device_count, Some(12));

    let events = dm.audit_events().get(None).await.unwrap().unwrap();
    assert_eq!(events.value[0].activity_result.as_deref(), Some("Success"));
}

#[tokio::test]
async fn device_category_crud() {
    let server = MockServer::start().await;
    let graph = mock_graph(&server);

    Mock::given(method("GET"))
        .and(path("/v1.0/deviceManagement/deviceCategories/cat-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "cat-1",
            "displayName": "Kiosk"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1.0/deviceManagement/deviceCategories/cat-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let category = graph.device_management().device_categories().by_id("cat-1");
    let read = category.get(None).await.unwrap().unwrap();
    assert_eq!(read.display_name.as_deref(), Some("Kiosk"));
    category.delete(None).await.unwrap();
}
