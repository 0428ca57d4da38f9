//! Query parameters for the activities endpoint.

/// Default page size for activity listings.
pub const DEFAULT_LIMIT: i64 = 10;

/// Default page number (1-based).
pub const DEFAULT_PAGE: i64 = 1;

/// Filters and pagination for `GET /activities`.
///
/// Built per call and consumed by the request; nothing is retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityQuery {
    pub limit: i64,
    pub page: i64,
    pub activity_type: Option<String>,
    pub user_id: Option<i64>,
    pub status: Option<String>,
}

impl Default for ActivityQuery {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, DEFAULT_PAGE)
    }
}

impl ActivityQuery {
    pub fn new(limit: i64, page: i64) -> Self {
        Self {
            limit,
            page,
            activity_type: None,
            user_id: None,
            status: None,
        }
    }

    /// Filter by status. Passed through unvalidated; an empty status is dropped.
    pub fn with_status(mut self, status: Option<&str>) -> Self {
        self.status = status.filter(|s| !s.is_empty()).map(str::to_string);
        self
    }

    pub fn with_type(mut self, activity_type: &str) -> Self {
        self.activity_type = Some(activity_type.to_string());
        self
    }

    pub fn with_user(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Query pairs in wire order: limit, page, type, user_id, status.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("limit", self.limit.to_string()),
            ("page", self.page.to_string()),
        ];

        if let Some(activity_type) = &self.activity_type {
            params.push(("type", activity_type.clone()));
        }
        if let Some(user_id) = self.user_id {
            params.push(("user_id", user_id.to_string()));
        }
        if let Some(status) = &self.status {
            params.push(("status", status.clone()));
        }

        params
    }
}
