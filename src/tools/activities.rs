//! Activity query tools.
//!
//! Each operation performs one upstream request and always returns text:
//! a report, a sentinel for empty results, or an error message. No error
//! escapes an operation.

use crate::models::ActivityQuery;
use crate::repositories::ActivityRepository;
use crate::tools::report::{self, Subject};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Read-only activity tools over an [`ActivityRepository`].
pub struct ActivityTools {
    activity_repo: Arc<dyn ActivityRepository>,
}

impl ActivityTools {
    /// Create new activity tools.
    pub fn new(activity_repo: Arc<dyn ActivityRepository>) -> Self {
        Self { activity_repo }
    }

    /// List activities, optionally filtered by status.
    ///
    /// The status is forwarded as-is; PipeRun decides whether it is valid.
    pub async fn list_activities(&self, limit: i64, page: i64, status: Option<&str>) -> String {
        info!(limit, page, status, "Listing activities");
        let query = ActivityQuery::new(limit, page).with_status(status);

        match self.activity_repo.list(&query).await {
            Ok(Some(page)) => {
                debug!(count = page.data.len(), "Activities fetched");
                report::render_activity_list(&page)
            }
            Ok(None) => report::NO_ACTIVITIES.to_string(),
            Err(e) => {
                warn!(error = %e, "Listing activities failed");
                report::render_error(&e, Subject::Activities)
            }
        }
    }

    /// Show one activity with its deal, company and comments.
    pub async fn get_activity(&self, id: i64) -> String {
        info!(id, "Fetching activity");

        match self.activity_repo.get(id).await {
            Ok(Some(activity)) => report::render_activity_details(id, &activity),
            Ok(None) => report::activity_not_found(id),
            Err(e) => {
                warn!(id, error = %e, "Fetching activity failed");
                report::render_error(&e, Subject::Activity)
            }
        }
    }

    /// List activities of one type.
    pub async fn filter_by_type(&self, activity_type: &str, limit: i64, page: i64) -> String {
        info!(activity_type, limit, page, "Filtering activities by type");
        let query = ActivityQuery::new(limit, page).with_type(activity_type);

        match self.activity_repo.list(&query).await {
            Ok(Some(page)) => report::render_type_list(activity_type, &page),
            Ok(None) => report::no_activities_of_type(activity_type),
            Err(e) => {
                warn!(activity_type, error = %e, "Filtering activities by type failed");
                report::render_error(&e, Subject::Activities)
            }
        }
    }

    /// List activities assigned to one user, optionally filtered by status.
    pub async fn activities_by_user(
        &self,
        user_id: i64,
        limit: i64,
        page: i64,
        status: Option<&str>,
    ) -> String {
        info!(user_id, limit, page, status, "Listing activities by user");
        let query = ActivityQuery::new(limit, page)
            .with_user(user_id)
            .with_status(status);

        match self.activity_repo.list(&query).await {
            Ok(Some(page)) => report::render_user_list(user_id, &page),
            Ok(None) => report::no_activities_for_user(user_id),
            Err(e) => {
                warn!(user_id, error = %e, "Listing activities by user failed");
                report::render_error(&e, Subject::Activities)
            }
        }
    }
}
