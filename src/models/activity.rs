//! Activity model representing a task or event tracked in PipeRun.
//!
//! PipeRun is loose about scalar types (ids and statuses may arrive as numbers
//! or strings, values as numbers), so every scalar is kept as a [`FieldValue`].
//! A JSON `null` deserializes to `None`, the same as an absent field.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Rendered when an activity has no due date.
pub const NO_DUE_DATE: &str = "Não definida";

/// Rendered when an activity has no assigned user.
pub const UNASSIGNED: &str = "Não atribuído";

/// Rendered when an activity has no description.
pub const NO_DESCRIPTION: &str = "Sem descrição";

/// A JSON scalar rendered for humans: strings verbatim, anything else in JSON form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValue(Value);

impl FieldValue {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

/// Render an optional field, empty when absent.
pub fn display_or_empty(field: &Option<FieldValue>) -> String {
    display_or(field, "")
}

/// Render an optional field, falling back to `default` when absent.
pub fn display_or(field: &Option<FieldValue>, default: &str) -> String {
    field
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| default.to_string())
}

/// A PipeRun user reference (assignee or comment author).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityUser {
    pub name: Option<FieldValue>,
}

/// The deal an activity belongs to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Deal {
    pub title: Option<FieldValue>,
    pub value: Option<FieldValue>,
    pub status: Option<FieldValue>,
}

/// The company an activity belongs to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    pub name: Option<FieldValue>,

    /// Tax id (CNPJ)
    pub document: Option<FieldValue>,
}

/// Nested objects count as linked when they carry any key at all, known or not.
/// `null` and `{}` both mean "not linked".
fn non_empty_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Map<String, Value>>::deserialize(deserializer)? {
        Some(fields) if !fields.is_empty() => serde_json::from_value(Value::Object(fields))
            .map(Some)
            .map_err(D::Error::custom),
        _ => Ok(None),
    }
}

/// A comment left on an activity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub text: Option<FieldValue>,
    pub user: Option<ActivityUser>,
    pub created_at: Option<FieldValue>,
}

impl Comment {
    /// Name of the comment author, empty when unknown.
    pub fn author(&self) -> String {
        self.user
            .as_ref()
            .map(|u| display_or_empty(&u.name))
            .unwrap_or_default()
    }
}

/// An activity (call, meeting, email, ...) in PipeRun.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    pub id: Option<FieldValue>,
    pub title: Option<FieldValue>,
    pub description: Option<FieldValue>,
    pub status: Option<FieldValue>,

    #[serde(rename = "type")]
    pub activity_type: Option<FieldValue>,

    pub created_at: Option<FieldValue>,
    pub due_date: Option<FieldValue>,

    /// Assigned user
    pub user: Option<ActivityUser>,

    #[serde(deserialize_with = "non_empty_object")]
    pub deal: Option<Deal>,

    #[serde(deserialize_with = "non_empty_object")]
    pub company: Option<Company>,

    pub comments: Option<Vec<Comment>>,
}

impl Activity {
    pub fn due_date_or_default(&self) -> String {
        display_or(&self.due_date, NO_DUE_DATE)
    }

    pub fn description_or_default(&self) -> String {
        display_or(&self.description, NO_DESCRIPTION)
    }

    /// Assignee name, or the unassigned literal when there is no user or no name.
    pub fn assignee_or_default(&self) -> String {
        self.user
            .as_ref()
            .and_then(|u| u.name.as_ref())
            .map(ToString::to_string)
            .unwrap_or_else(|| UNASSIGNED.to_string())
    }

    pub fn linked_deal(&self) -> Option<&Deal> {
        self.deal.as_ref()
    }

    pub fn linked_company(&self) -> Option<&Company> {
        self.company.as_ref()
    }

    /// Comments in upstream order; empty when absent.
    pub fn comment_list(&self) -> &[Comment] {
        self.comments.as_deref().unwrap_or(&[])
    }
}

/// One page of activities as returned by `GET /activities`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ActivityPage {
    pub data: Vec<Activity>,
    pub total: Option<FieldValue>,
}

impl ActivityPage {
    /// Total reported by the API, `0` when absent.
    pub fn total_or_zero(&self) -> String {
        display_or(&self.total, "0")
    }
}
