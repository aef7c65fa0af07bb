use async_trait::async_trait;
use serde_json::Value;

use crate::planner::EndpointSelection;
use crate::Result;

/// Transport seam between the planner and the upstream API.
///
/// Implementations perform the GET described by a selection and return the
/// raw JSON payload, leaving envelope validation to the caller.
#[async_trait]
pub trait NewsBackend: Send + Sync {
    async fn fetch(&self, selection: &EndpointSelection) -> Result<Value>;
}
