use entity::prelude::*;
use serde_json::Value;

use crate::{fields::Fields, Normalizer, CREATED_AT, USER_ID};

const COMMENT_ID: [&str; 2] = ["id", "ID"];
const POST_ID: [&str; 2] = ["postId", "post_id"];
const BODY: [&str; 2] = ["body", "content"];

impl Normalizer<'_> {
    pub fn comment(&self, raw: Value) -> Comment {
        let mut fields = Fields::new(raw, "comment");

        let id = self.take_id(&mut fields, &COMMENT_ID, "comment");
        let user = fields
            .take_or_keep(&["user"], |user| user.as_object().cloned())
            .map(|author| self.author(Value::Object(author)));

        Comment {
            id,
            post_id: fields
                .take_or_keep(&POST_ID, crate::coerce_id)
                .map(Id::new),
            user_id: fields
                .take_or_keep(&USER_ID, crate::coerce_id)
                .map(Id::new),
            body: fields.take_text(&BODY).unwrap_or_default(),
            visible: fields.take(&["visible"], Value::as_bool).unwrap_or(true),
            created_at: self.take_date(&mut fields, &CREATED_AT, "comment"),
            user,
            extra: fields.into_extra(),
        }
    }
}

#[cfg(test)]
mod test {
    use chrono::{TimeZone, Utc};
    use entity::prelude::*;
    use serde_json::json;

    use crate::{test::fixed_now, IdAllocator, Normalizer};

    #[test]
    fn test_comment() {
        // Arrange
        let ids = IdAllocator::new();
        let raw = json!({
            "ID": 4,
            "post_id": "12",
            "userId": 3,
            "body": "Nice post",
            "visible": false,
            "created_at": "2024-03-01 07:15:00",
            "user": {"id": 3, "username": "reader"},
            "likes": 2,
        });

        // Act
        let comment = Normalizer::new(&ids).comment(raw);

        // Assert
        assert_eq!(comment.id, Id::new(4));
        assert_eq!(comment.post_id, Some(Id::new(12)));
        assert_eq!(comment.user_id, Some(Id::new(3)));
        assert_eq!(comment.body, "Nice post");
        assert!(!comment.visible);
        assert_eq!(
            comment.created_at,
            Utc.with_ymd_and_hms(2024, 3, 1, 7, 15, 0).unwrap()
        );
        assert_eq!(
            comment.user.as_ref().map(|u| u.username.as_str()),
            Some("reader")
        );
        assert_eq!(comment.extra.get("likes"), Some(&json!(2)));
        assert!(comment.is_authored_by(Id::new(3)));
    }

    #[test]
    fn test_empty_comment_defaults() {
        let ids = IdAllocator::new();
        let normalizer = Normalizer::new(&ids).with_clock(fixed_now);

        let comment = normalizer.comment(json!(null));

        assert_eq!(comment.id, Id::new(-1));
        assert_eq!(comment.post_id, None);
        assert_eq!(comment.user_id, None);
        assert_eq!(comment.body, "");
        assert!(comment.visible);
        assert_eq!(comment.created_at, fixed_now());
        assert_eq!(comment.user, None);
    }

    #[test]
    fn test_author_without_id_gets_placeholder() {
        let ids = IdAllocator::new();

        let comment = Normalizer::new(&ids)
            .comment(json!({"id": 1, "user": {"username": "anon"}}));

        assert_eq!(comment.user.map(|u| u.id), Some(Id::new(-1)));
    }

    #[test]
    fn test_unusable_references_pass_through() {
        let ids = IdAllocator::new();

        let comment = Normalizer::new(&ids).comment(json!({
            "id": 2,
            "postId": "latest",
            "userId": 7,
            "user": ["reader"],
        }));

        assert_eq!(comment.post_id, None);
        assert_eq!(comment.user_id, Some(Id::new(7)));
        assert_eq!(comment.user, None);
        assert_eq!(comment.extra.get("postId"), Some(&json!("latest")));
        assert_eq!(comment.extra.get("user"), Some(&json!(["reader"])));
        assert_eq!(comment.extra.get("userId"), None);
    }

    #[test]
    fn test_normalizing_twice_is_harmless() {
        // Arrange
        let ids = IdAllocator::new();
        let normalizer = Normalizer::new(&ids);
        let once = normalizer.comment(json!({
            "ID": "4",
            "post_id": 12,
            "user_id": 3,
            "content": "Nice post",
            "visible": false,
            "created_at": "2024-03-01 07:15:00",
            "user": {"id": 3, "username": "reader"},
            "likes": 2,
        }));

        // Act
        let twice = normalizer.comment(serde_json::to_value(&once).unwrap());

        // Assert
        assert_eq!(twice, once);
        assert_eq!(ids.last(), None);
    }
}
