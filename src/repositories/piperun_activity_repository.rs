use crate::client::AsyncPipeRunClient;
use crate::error::{PipeRunApiError, PipeRunApiResult};
use crate::models::{Activity, ActivityPage, ActivityQuery};
use crate::repositories::traits::ActivityRepository;
use async_trait::async_trait;
use serde::de::Error as _;
use serde_json::Value;
use std::sync::Arc;

const ACTIVITIES_ENDPOINT: &str = "activities";

/// Whether a response carries a non-empty `data` field.
///
/// Absent, `null`, `false`, `0`, `""`, `[]` and `{}` all count as empty.
pub fn has_data(payload: &Value) -> bool {
    match payload.get("data") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(fields)) => !fields.is_empty(),
    }
}

/// Activity repository backed by the PipeRun REST API.
pub struct PipeRunActivityRepository {
    client: Arc<dyn AsyncPipeRunClient>,
}

impl PipeRunActivityRepository {
    /// Create a new PipeRunActivityRepository with the given client.
    pub fn new(client: Arc<dyn AsyncPipeRunClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ActivityRepository for PipeRunActivityRepository {
    async fn list(&self, query: &ActivityQuery) -> PipeRunApiResult<Option<ActivityPage>> {
        let payload = self
            .client
            .fetch(ACTIVITIES_ENDPOINT, &query.to_params())
            .await?;

        if !has_data(&payload) {
            return Ok(None);
        }

        let page: ActivityPage = serde_json::from_value(payload)?;
        Ok(Some(page))
    }

    async fn get(&self, id: i64) -> PipeRunApiResult<Option<Activity>> {
        let endpoint = format!("{}/{}", ACTIVITIES_ENDPOINT, id);
        let mut payload = self.client.fetch(&endpoint, &[]).await?;

        if !has_data(&payload) {
            return Ok(None);
        }

        let data = payload["data"].take();
        if !data.is_object() {
            return Err(PipeRunApiError::Json(serde_json::Error::custom(
                "expected an activity object in `data`",
            )));
        }

        let activity: Activity = serde_json::from_value(data)?;
        Ok(Some(activity))
    }
}
