//! Data models for PipeRun entities.
//!
//! Activities are owned by PipeRun; these types only mirror the fields the
//! reports read. Query parameters describe a single `GET /activities` call.

pub mod activity;
pub mod query;

pub use activity::{Activity, ActivityPage, ActivityUser, Comment, Company, Deal, FieldValue};
pub use query::{ActivityQuery, DEFAULT_LIMIT, DEFAULT_PAGE};
