//! Comment model

use serde::Deserialize;

/// A comment returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    /// Parent post
    #[serde(default)]
    pub post_id: Option<u32>,
    /// Comment id
    #[serde(default)]
    pub id: Option<u32>,
    /// Subject line
    #[serde(default)]
    pub name: Option<String>,
    /// Author email
    #[serde(default)]
    pub email: Option<String>,
    /// Comment text
    #[serde(default)]
    pub body: Option<String>,
}
