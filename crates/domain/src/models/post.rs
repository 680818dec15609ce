//! Post models

use serde::{Deserialize, Serialize};

/// A post as stored by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Owning user
    pub user_id: u32,
    /// Post id, zero before creation
    #[serde(default)]
    pub id: u32,
    /// Title
    pub title: String,
    /// Body text
    pub body: String,
}

impl Post {
    /// Creates a post that has not been assigned an id yet.
    #[must_use]
    pub fn new(user_id: u32, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            user_id,
            id: 0,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Payload for creating or replacing a post.
///
/// Unset fields are left out of the serialized JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    /// Title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Body text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Owning user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u32>,
}

impl PostRequest {
    /// Creates a fully populated request.
    #[must_use]
    pub fn new(user_id: u32, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: Some(body.into()),
            user_id: Some(user_id),
        }
    }
}

/// A post returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    /// Post id
    #[serde(default)]
    pub id: Option<u32>,
    /// Title
    #[serde(default)]
    pub title: Option<String>,
    /// Body text
    #[serde(default)]
    pub body: Option<String>,
    /// Owning user
    #[serde(default)]
    pub user_id: Option<u32>,
}
