//! MCP tools for querying PipeRun activities.
//!
//! - **activities**: the four read-only query operations
//! - **report**: text rendering for reports, sentinels and errors

pub mod activities;
pub mod report;

pub use activities::ActivityTools;
pub use report::Subject;
