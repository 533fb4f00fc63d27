//! Wire types shared with the task-management API.
//!
//! NORMALIZATION
//! =============
//! The backend is loose about two shapes: a user's `role` may arrive as a
//! bare string or a full object, and `assignedTo` may be a user id or an
//! embedded user document. Both are normalized at the deserialization
//! boundary (`Role`'s `from` conversion, the `Assignee` union), so the rest
//! of the app never shape-sniffs JSON. Identifiers deserialize from JSON
//! strings or numbers into `String`, which keeps ownership checks a plain
//! string comparison.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// A role definition. Role name is the sole authorization key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RoleShape")]
pub struct Role {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Accepts either `"Admin"` or `{"_id": ..., "name": "Admin", ...}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RoleShape {
    Name(String),
    Object {
        #[serde(rename = "_id", alias = "id", default, deserialize_with = "opt_string_id")]
        id: Option<String>,
        #[serde(default)]
        name: String,
        #[serde(default)]
        description: Option<String>,
        #[serde(rename = "createdAt", default)]
        created_at: Option<String>,
        #[serde(rename = "updatedAt", default)]
        updated_at: Option<String>,
    },
}

impl From<RoleShape> for Role {
    fn from(shape: RoleShape) -> Self {
        match shape {
            RoleShape::Name(name) => Self { name, ..Self::default() },
            RoleShape::Object { id, name, description, created_at, updated_at } => {
                Self { id, name, description, created_at, updated_at }
            }
        }
    }
}

/// An authenticated user profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id", deserialize_with = "string_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(rename = "isActive", default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(rename = "avatarUrl", default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Task lifecycle status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

impl Status {
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Done];

    /// Wire/display name, matching the serialized form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Parse a `<select>` value back into a status. Unknown input maps to
    /// `Pending` so a stale option can never produce an invalid status.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.label() == value)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The user a task is assigned to: either a bare identifier or an embedded
/// user document, depending on whether the backend populated the reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Assignee {
    Embedded(User),
    Id(#[serde(deserialize_with = "string_id")] String),
}

impl Assignee {
    /// The assignee's user id, whichever shape it arrived in.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Embedded(user) => &user.id,
            Self::Id(id) => id,
        }
    }

    /// Display name, only available when the reference was populated.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Embedded(user) => Some(user.name.as_str()),
            Self::Id(_) => None,
        }
    }
}

/// A task in the shared list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id", alias = "id", deserialize_with = "string_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(rename = "createdBy", default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Assignee>,
    #[serde(rename = "assignedTo", default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<Assignee>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

// ---- request payloads ----

#[derive(Clone, Debug, Serialize)]
pub struct LoginPayload<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Full task payload, admin create/edit. `assignedTo` is always serialized:
/// an explicit `null` unassigns the task.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TaskPayload {
    pub title: String,
    pub description: String,
    pub status: Status,
    #[serde(rename = "assignedTo")]
    pub assigned_to: Option<String>,
}

/// Status-only payload for owners, who may not touch any other field.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct StatusPayload {
    pub status: Status,
}

#[derive(Clone, Debug, Serialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    /// Role id, not name.
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct RolePayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ---- responses ----

#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Deserialize a string or numeric id into its string form.
fn string_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

fn opt_string_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "string_id")] String);

    Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|w| w.0))
}
