use async_trait::async_trait;
use piperun_mcp_server::error::{PipeRunApiError, PipeRunApiResult};
use piperun_mcp_server::models::{Activity, ActivityPage, ActivityQuery};
use piperun_mcp_server::repositories::ActivityRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock activity repository for testing.
///
/// Serves a fixed page for every list call and records the queries it saw.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockActivityRepository {
    page: Arc<Mutex<Option<ActivityPage>>>,
    activities: Arc<Mutex<HashMap<i64, Activity>>>,
    failure: Arc<Mutex<Option<(u16, String)>>>,
    queries: Arc<Mutex<Vec<ActivityQuery>>>,
}

#[allow(dead_code)]
impl MockActivityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_page(&self, page: ActivityPage) {
        *self.page.lock().unwrap() = Some(page);
    }

    pub fn add_activity(&self, id: i64, activity: Activity) {
        self.activities.lock().unwrap().insert(id, activity);
    }

    /// Make every call fail with an HTTP error.
    pub fn fail_with(&self, status: u16, body: &str) {
        *self.failure.lock().unwrap() = Some((status, body.to_string()));
    }

    pub fn queries(&self) -> Vec<ActivityQuery> {
        self.queries.lock().unwrap().clone()
    }

    fn check_failure(&self) -> PipeRunApiResult<()> {
        match self.failure.lock().unwrap().clone() {
            Some((status, body)) => Err(PipeRunApiError::Http { status, body }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ActivityRepository for MockActivityRepository {
    async fn list(&self, query: &ActivityQuery) -> PipeRunApiResult<Option<ActivityPage>> {
        self.queries.lock().unwrap().push(query.clone());
        self.check_failure()?;

        Ok(self.page.lock().unwrap().clone())
    }

    async fn get(&self, id: i64) -> PipeRunApiResult<Option<Activity>> {
        self.check_failure()?;

        Ok(self.activities.lock().unwrap().get(&id).cloned())
    }
}
