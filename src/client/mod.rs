//! Query execution seam
//!
//! The HTTP call is owned by the caller. Implement [`EventsClient`] over
//! whatever transport is at hand; retries, timeouts and cancellation are the
//! implementation's business.

mod error;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;
use crate::request::{Endpoint, EventsRequest};

pub use error::ClientError;

/// Executes a request against the events API and returns the JSON body
#[async_trait]
pub trait EventsClient: Send + Sync {
    async fn execute(
        &self,
        endpoint: &Endpoint,
        params: &[(String, String)],
    ) -> Result<Value, ClientError>;
}

/// Send a built request through a client
pub async fn execute_request(
    client: &dyn EventsClient,
    request: &EventsRequest,
) -> Result<Value, ClientError> {
    let params = request.query_pairs();
    debug!(endpoint = %request.endpoint(), params = params.len(), "executing events request");
    client.execute(request.endpoint(), &params).await
}
