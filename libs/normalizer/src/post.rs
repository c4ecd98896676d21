use std::str::FromStr;

use entity::prelude::*;
use serde_json::Value;
use tracing::debug;

use crate::{
    fields::{text, Fields},
    Normalizer, CREATED_AT, EMAIL_SHA256, UPDATED_AT, USER_ID,
};

const POST_ID: [&str; 4] = ["id", "ID", "postId", "postID"];
const CONTENT: [&str; 2] = ["content", "body"];
const AUTHOR_ID: [&str; 2] = ["id", "ID"];

impl Normalizer<'_> {
    pub fn post(&self, raw: Value) -> Post {
        let mut fields = Fields::new(raw, "post");

        let id = self.take_id(&mut fields, &POST_ID, "post");
        let content = fields.take_text(&CONTENT).unwrap_or_default();
        let status = self.status(&mut fields);
        let user = fields
            .take_or_keep(&["user"], |user| user.as_object().cloned())
            .map(|author| self.author(Value::Object(author)));

        Post {
            id,
            title: fields.take_text(&["title"]).unwrap_or_default(),
            summary: fields.take_text(&["summary"]),
            content,
            status,
            created_at: self.take_date(&mut fields, &CREATED_AT, "post"),
            updated_at: self.take_date(&mut fields, &UPDATED_AT, "post"),
            slug: fields.take_text(&["slug"]),
            user_id: fields
                .take_or_keep(&USER_ID, crate::coerce_id)
                .map(Id::new),
            user,
            extra: fields.into_extra(),
        }
    }

    /// Author reference embedded in a post or a comment.
    pub fn author(&self, raw: Value) -> AuthorSummary {
        let mut fields = Fields::new(raw, "author");

        AuthorSummary {
            id: self.take_id(&mut fields, &AUTHOR_ID, "author"),
            username: fields.take_text(&["username"]).unwrap_or_default(),
            email_sha256: fields.take_text(&EMAIL_SHA256),
            extra: fields.into_extra(),
        }
    }

    fn status(&self, fields: &mut Fields) -> PostStatus {
        let Some(raw) = fields.take_value(&["status"]) else {
            return PostStatus::default();
        };

        text(&raw)
            .and_then(|status| PostStatus::from_str(status.trim()).ok())
            .unwrap_or_else(|| {
                debug!(
                    task = "normalize post",
                    status = raw.to_string(),
                    "unknown status"
                );
                PostStatus::default()
            })
    }
}

#[cfg(test)]
mod test {
    use chrono::{TimeZone, Utc};
    use entity::prelude::*;
    use rstest::rstest;
    use serde_json::{json, Value};

    use crate::{test::fixed_now, IdAllocator, Normalizer};

    #[rstest]
    #[case(json!({"id": 42}), 42)]
    #[case(json!({"id": "42"}), 42)]
    #[case(json!({"ID": 7}), 7)]
    #[case(json!({"postId": "8"}), 8)]
    #[case(json!({"postID": 9}), 9)]
    #[case(json!({"id": null, "ID": 3}), 3)]
    #[case(json!({"id": "abc", "postId": 11}), 11)]
    #[case(json!({"id": 1, "ID": 2, "postId": 3}), 1)]
    fn test_id_aliases(#[case] raw: Value, #[case] expected: i64) {
        let ids = IdAllocator::new();

        let post = Normalizer::new(&ids).post(raw);

        assert_eq!(post.id, Id::new(expected));
        assert_eq!(ids.last(), None);
    }

    #[test]
    fn test_missing_id_gets_distinct_placeholders() {
        // Arrange
        let ids = IdAllocator::new();
        let normalizer = Normalizer::new(&ids);

        // Act
        let first = normalizer.post(json!({"title": "a"}));
        let second = normalizer.post(json!({"title": "b", "id": "n/a"}));

        // Assert
        assert!(first.id.is_synthetic());
        assert!(second.id.is_synthetic());
        assert_ne!(first.id, second.id);
    }

    #[rstest]
    #[case(json!({"body": "hello"}), "hello")]
    #[case(json!({"content": "a", "body": "b"}), "a")]
    #[case(json!({"content": null, "body": "b"}), "b")]
    #[case(json!({"content": ""}), "")]
    #[case(json!({}), "")]
    fn test_content_coalesces_body(#[case] raw: Value, #[case] expected: &str) {
        let ids = IdAllocator::new();

        let post = Normalizer::new(&ids).post(raw);

        assert_eq!(post.content, expected);
        assert!(!post.extra.contains_key("body"));
    }

    #[test]
    fn test_dates() {
        // Arrange
        let ids = IdAllocator::new();
        let normalizer = Normalizer::new(&ids).with_clock(fixed_now);

        // Act
        let post = normalizer.post(json!({
            "id": 1,
            "created_at": "2024-01-15 10:30:00",
            "updatedAt": "not-a-date",
        }));

        // Assert
        assert_eq!(
            post.created_at,
            Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
        );
        assert_eq!(post.updated_at, fixed_now());
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["createdAt"], "2024-01-15T10:30:00.000Z");
        assert_eq!(value["updatedAt"], "2030-06-01T12:00:00.000Z");
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_full_payload() {
        // Arrange
        let ids = IdAllocator::new();
        let raw = json!({
            "ID": "12",
            "title": "Tailwind",
            "summary": "Utility classes",
            "body": "## Why",
            "status": "published",
            "slug": "tailwind",
            "user_id": 3,
            "user": {"ID": 3, "username": "admin", "email_sha256": "abc"},
            "createdAt": "2024-02-01T08:00:00Z",
            "updated_at": "2024-02-02 09:00:00",
            "viewCount": 10,
        });

        // Act
        let post = Normalizer::new(&ids).post(raw);

        // Assert
        assert_eq!(
            serde_json::to_value(&post).unwrap(),
            json!({
                "id": 12,
                "title": "Tailwind",
                "summary": "Utility classes",
                "content": "## Why",
                "status": "published",
                "createdAt": "2024-02-01T08:00:00.000Z",
                "updatedAt": "2024-02-02T09:00:00.000Z",
                "slug": "tailwind",
                "userId": 3,
                "user": {"id": 3, "username": "admin", "emailSha256": "abc"},
                "viewCount": 10,
            })
        );
    }

    #[rstest]
    #[case(json!({}), PostStatus::Draft)]
    #[case(json!({"status": "published"}), PostStatus::Published)]
    #[case(json!({"status": "PUBLISHED"}), PostStatus::Published)]
    #[case(json!({"status": "archived"}), PostStatus::Draft)]
    #[case(json!({"status": 1}), PostStatus::Draft)]
    fn test_status(#[case] raw: Value, #[case] expected: PostStatus) {
        let ids = IdAllocator::new();

        let post = Normalizer::new(&ids).post(raw);

        assert_eq!(post.status, expected);
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!("post"))]
    #[case(json!([1, 2]))]
    fn test_non_object_gives_empty_draft(#[case] raw: Value) {
        let ids = IdAllocator::new();
        let normalizer = Normalizer::new(&ids).with_clock(fixed_now);

        let post = normalizer.post(raw);

        assert_eq!(post.id, Id::new(-1));
        assert_eq!(post.title, "");
        assert_eq!(post.content, "");
        assert_eq!(post.status, PostStatus::Draft);
        assert_eq!(post.created_at, fixed_now());
        assert!(post.extra.is_empty());
    }

    #[test]
    fn test_far_future_epoch_date_falls_back() {
        // Arrange
        let ids = IdAllocator::new();
        let normalizer = Normalizer::new(&ids).with_clock(fixed_now);

        // Act
        let once = normalizer.post(json!({
            "id": 1,
            "createdAt": 2_534_023_008_000_000_i64,
        }));
        let twice = normalizer.post(serde_json::to_value(&once).unwrap());

        // Assert
        assert_eq!(once.created_at, fixed_now());
        assert_eq!(twice.created_at, once.created_at);
    }

    #[test]
    fn test_unusable_author_fields_pass_through() {
        let ids = IdAllocator::new();

        let post = Normalizer::new(&ids).post(json!({
            "id": 1,
            "userId": "unknown",
            "user": "admin",
        }));

        assert_eq!(post.user_id, None);
        assert_eq!(post.user, None);
        assert_eq!(post.extra.get("userId"), Some(&json!("unknown")));
        assert_eq!(post.extra.get("user"), Some(&json!("admin")));
    }

    #[test]
    fn test_normalizing_twice_is_harmless() {
        // Arrange
        let ids = IdAllocator::new();
        let normalizer = Normalizer::new(&ids);
        let once = normalizer.post(json!({
            "id": 5,
            "content": "x",
            "createdAt": "2024-01-15 10:30:00",
            "updatedAt": "2024-01-16 10:30:00",
            "pinned": true,
        }));

        // Act
        let twice = normalizer.post(serde_json::to_value(&once).unwrap());

        // Assert
        assert_eq!(twice, once);
        assert_eq!(ids.last(), None);
    }

    #[test]
    fn test_normalizing_placeholder_twice_keeps_it() {
        let ids = IdAllocator::new();
        let normalizer = Normalizer::new(&ids);
        let once = normalizer.post(json!({"title": "no id"}));

        let twice = normalizer.post(serde_json::to_value(&once).unwrap());

        assert_eq!(twice.id, once.id);
        assert_eq!(twice.created_at, once.created_at);
    }
}
