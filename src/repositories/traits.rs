use crate::error::PipeRunApiResult;
use crate::models::{Activity, ActivityPage, ActivityQuery};
use async_trait::async_trait;

/// Repository for reading activities.
///
/// An empty upstream payload is reported as `Ok(None)` so callers can render
/// their own sentinel instead of an empty report.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// List one page of activities matching the query.
    async fn list(&self, query: &ActivityQuery) -> PipeRunApiResult<Option<ActivityPage>>;

    /// Retrieve a single activity by ID.
    async fn get(&self, id: i64) -> PipeRunApiResult<Option<Activity>>;
}
