// src/models/comment.rs
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;
use crate::error::CommentError;

/// One user's feedback entry on a board.
/// Fields missing from an incoming payload fall back to empty values.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Comment {
    #[serde(deserialize_with = "null_as_empty")]
    pub user_nickname: String,  // Display name of the commenter
    pub rating: Option<Number>, // Star rating, any JSON number shown as-is
    #[serde(deserialize_with = "null_as_empty")]
    pub body: String,           // Comment text
}

// A `null` string field renders the same as a missing one.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Comment {
    pub fn new(user_nickname: impl Into<String>, rating: i32, body: impl Into<String>) -> Self {
        Self {
            user_nickname: user_nickname.into(),
            rating: Some(Number::from(rating)),
            body: body.into(),
        }
    }
}

/// Parses a JSON array of comment records as a parent view receives it.
pub fn parse_comments(payload: &str) -> Result<Vec<Comment>, CommentError> {
    let comments: Vec<Comment> = serde_json::from_str(payload)?;
    Ok(comments)
}
