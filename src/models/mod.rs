//! Serde models for the `deviceManagement` resource tree.
//!
//! Field names follow the Graph JSON contract (camelCase). Everything the
//! service may omit is an `Option`, and each entity keeps the properties it
//! does not model in a flattened `additional_data` map so that nothing is lost
//! on a read-modify-write cycle. [`AdditionalDataHolder`] gives typed access
//! to that property bag.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// Implements `AdditionalDataHolder` for models with an `additional_data` field.
macro_rules! additional_data_holder {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::models::AdditionalDataHolder for $ty {
                fn additional_data(&self) -> &$crate::models::AdditionalData {
                    &self.additional_data
                }

                fn additional_data_mut(&mut self) -> &mut $crate::models::AdditionalData {
                    &mut self.additional_data
                }
            }
        )+
    };
}

mod actions;
mod assignment;
mod device_compliance;
mod device_configuration;
mod device_management;
mod managed_device;
mod odata_error;
mod status;

pub use actions::*;
pub use assignment::*;
pub use device_compliance::*;
pub use device_configuration::*;
pub use device_management::*;
pub use managed_device::*;
pub use odata_error::*;
pub use status::*;

/// Untyped properties carried alongside the modelled ones.
pub type AdditionalData = serde_json::Map<String, serde_json::Value>;

/// Typed access to the flattened property bag of a model.
pub trait AdditionalDataHolder {
    /// The raw property bag.
    fn additional_data(&self) -> &AdditionalData;

    /// Mutable access to the raw property bag.
    fn additional_data_mut(&mut self) -> &mut AdditionalData;

    /// Reads an unmodelled property as `T`.
    ///
    /// Returns `None` if the property is absent, `null`, or not a `T`.
    fn property<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        self.additional_data()
            .get(name)
            .filter(|v| !v.is_null())
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Sets an unmodelled property, replacing any previous value.
    fn set_property<T: Serialize>(&mut self, name: &str, value: T) -> serde_json::Result<()> {
        let value = serde_json::to_value(value)?;
        self.additional_data_mut().insert(name.to_string(), value);
        Ok(())
    }
}

/// OData collection page: `{ "value": [...], "@odata.nextLink": "…" }`.
///
/// Only one page is returned per request. To fetch the next page, pass
/// `odata_next_link` to the collection builder's `with_url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionResponse<T> {
    /// The items on this page.
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,

    /// Total count, present when `$count=true` was requested.
    #[serde(
        rename = "@odata.count",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub odata_count: Option<i64>,

    /// Absolute URL of the next page, if any.
    #[serde(
        rename = "@odata.nextLink",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub odata_next_link: Option<String>,
}

/// Wrapper for function results shaped `{ "value": … }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueResponse<T> {
    /// The returned value.
    pub value: Option<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_response_reads_paging_metadata() {
        let json = r#"{
            "@odata.context": "https://graph.microsoft.com/v1.0/$metadata#deviceManagement/deviceCategories",
            "@odata.count": 12,
            "@odata.nextLink": "https://graph.microsoft.com/v1.0/deviceManagement/deviceCategories?$skiptoken=abc",
            "value": [{"id": "cat-1", "displayName": "Kiosk"}]
        }"#;
        let page: CollectionResponse<DeviceCategory> = serde_json::from_str(json).unwrap();
        assert_eq!(page.odata_count, Some(12));
        assert!(page.odata_next_link.unwrap().contains("skiptoken"));
        assert_eq!(page.value[0].display_name.as_deref(), Some("Kiosk"));
    }

    #[test]
    fn collection_response_tolerates_missing_value() {
        let page: CollectionResponse<DeviceCategory> = serde_json::from_str("{}").unwrap();
        assert!(page.value.is_empty());
        assert!(page.odata_next_link.is_none());
    }

    #[test]
    fn property_bag_reads_and_writes_typed_values() {
        let mut config: DeviceConfiguration = serde_json::from_str(
            r#"{"id": "cfg", "passwordRequired": true, "passwordMinimumLength": 8, "empty": null}"#,
        )
        .unwrap();
        assert_eq!(config.property::<bool>("passwordRequired"), Some(true));
        assert_eq!(config.property::<i32>("passwordMinimumLength"), Some(8));
        assert_eq!(config.property::<String>("passwordRequired"), None);
        assert_eq!(config.property::<bool>("empty"), None);

        config.set_property("cameraBlocked", true).unwrap();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["cameraBlocked"], true);
        assert_eq!(json["passwordMinimumLength"], 8);
    }
}
