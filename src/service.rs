//! Entry point tying an adapter to the request builder tree.

use std::sync::Arc;

use crate::adapter::RequestAdapter;
use crate::client::GraphClient;
use crate::device_management::DeviceManagementRequestBuilder;

/// Root of the request builder tree.
///
/// Cheap to clone; every builder it hands out shares the same adapter.
#[derive(Clone)]
pub struct GraphServiceClient {
    adapter: Arc<dyn RequestAdapter>,
}

impl GraphServiceClient {
    /// Wraps any adapter, e.g. a [`GraphClient`] or a test double.
    pub fn new(adapter: Arc<dyn RequestAdapter>) -> Self {
        GraphServiceClient { adapter }
    }

    /// The adapter requests are sent through.
    pub fn adapter(&self) -> &Arc<dyn RequestAdapter> {
        &self.adapter
    }

    /// `/deviceManagement`.
    pub fn device_management(&self) -> DeviceManagementRequestBuilder {
        DeviceManagementRequestBuilder::new(Arc::clone(&self.adapter))
    }
}

impl From<GraphClient> for GraphServiceClient {
    fn from(client: GraphClient) -> Self {
        GraphServiceClient::new(Arc::new(client))
    }
}
