//! Async wrapper around the synchronous PipeRunClient.
//!
//! HTTP calls run through `tokio::task::spawn_blocking`, so the calling task
//! suspends only while its single round trip is in flight.

use crate::client::PipeRunClient;
use crate::error::{PipeRunApiError, PipeRunApiResult};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Async access to the PipeRun API.
#[async_trait]
pub trait AsyncPipeRunClient: Send + Sync {
    /// GET `endpoint` with the given query pairs and return the JSON body.
    async fn fetch(&self, endpoint: &str, params: &[(&'static str, String)])
        -> PipeRunApiResult<Value>;
}

/// Async wrapper around synchronous PipeRunClient.
#[derive(Clone)]
pub struct AsyncPipeRunClientImpl {
    client: Arc<PipeRunClient>,
}

impl AsyncPipeRunClientImpl {
    pub fn new(client: PipeRunClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncPipeRunClient for AsyncPipeRunClientImpl {
    async fn fetch(
        &self,
        endpoint: &str,
        params: &[(&'static str, String)],
    ) -> PipeRunApiResult<Value> {
        let client = self.client.clone();
        let endpoint = endpoint.to_string();
        let params = params.to_vec();

        tokio::task::spawn_blocking(move || client.fetch(&endpoint, &params))
            .await
            .map_err(|e| PipeRunApiError::TaskJoin(e.to_string()))?
    }
}
