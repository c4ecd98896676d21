use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

use crate::id::Id;

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Id,
    pub title: String,
    pub summary: Option<String>,
    /// Markdown source of the post body.
    pub content: String,
    pub status: PostStatus,
    #[serde(with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::timestamp")]
    pub updated_at: DateTime<Utc>,
    pub slug: Option<String>,
    pub user_id: Option<Id>,
    pub user: Option<AuthorSummary>,
    /// Fields the client does not model, kept so they survive a round trip.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Post {
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }
}

#[derive(
    Serialize,
    Deserialize,
    Debug,
    Default,
    PartialEq,
    Eq,
    Clone,
    Copy,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
}

/// Author reference embedded in posts and comments.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSummary {
    pub id: Id,
    pub username: String,
    pub email_sha256: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `POST /posts` and `PUT /posts/{id}`.
///
/// The backend expects the markdown under `body`, not `content`.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct PostPayload {
    pub title: String,
    pub summary: Option<String>,
    pub body: String,
    pub status: PostStatus,
}

impl From<&Post> for PostPayload {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            summary: post.summary.clone(),
            body: post.content.clone(),
            status: post.status,
        }
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use chrono::{TimeZone, Utc};
    use serde_json::{json, Map};

    use super::{Post, PostPayload, PostStatus};
    use crate::id::Id;

    fn post() -> Post {
        Post {
            id: Id::new(3),
            title: "Hello".to_string(),
            summary: None,
            content: "# Hello".to_string(),
            status: PostStatus::Published,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 16, 8, 0, 0).unwrap(),
            slug: Some("hello".to_string()),
            user_id: None,
            user: None,
            extra: Map::new(),
        }
    }

    #[test]
    fn test_is_published() {
        let mut post = post();
        assert!(post.is_published());

        post.status = PostStatus::Draft;
        assert!(!post.is_published());
    }

    #[test]
    fn test_serialize_camel_case() {
        // Arrange
        let mut post = post();
        post.extra.insert("viewCount".to_string(), json!(12));

        // Act
        let value = serde_json::to_value(&post).unwrap();

        // Assert
        assert_eq!(
            value,
            json!({
                "id": 3,
                "title": "Hello",
                "content": "# Hello",
                "status": "published",
                "createdAt": "2024-01-15T10:30:00.000Z",
                "updatedAt": "2024-01-16T08:00:00.000Z",
                "slug": "hello",
                "viewCount": 12,
            })
        );
    }

    #[test]
    fn test_deserialize_keeps_unknown_fields() {
        let value = serde_json::to_value(post()).unwrap();
        let mut object = value.as_object().unwrap().clone();
        object.insert("pinned".to_string(), json!(true));

        let post: Post = serde_json::from_value(object.into()).unwrap();

        assert_eq!(post.extra.get("pinned"), Some(&json!(true)));
        assert_eq!(post.id, Id::new(3));
    }

    #[test]
    fn test_payload_moves_content_into_body() {
        let payload = PostPayload::from(&post());

        let value = serde_json::to_value(payload).unwrap();

        assert_eq!(
            value,
            json!({"title": "Hello", "body": "# Hello", "status": "published"})
        );
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            PostStatus::from_str("Published"),
            Ok(PostStatus::Published)
        );
        assert_eq!(PostStatus::from_str("draft"), Ok(PostStatus::Draft));
        assert!(PostStatus::from_str("archived").is_err());
        assert_eq!(PostStatus::Published.to_string(), "published");
    }
}
