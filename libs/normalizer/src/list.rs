use entity::prelude::*;
use serde_json::Value;
use tracing::debug;

use crate::{
    fields::{json_kind, Fields},
    Normalizer,
};

impl Normalizer<'_> {
    pub fn post_list(&self, raw: Value) -> PostList {
        self.list(raw, "post", |raw| self.post(raw))
    }

    pub fn comment_list(&self, raw: Value) -> CommentList {
        self.list(raw, "comment", |raw| self.comment(raw))
    }

    pub fn user_list(&self, raw: Value) -> UserList {
        self.list(raw, "user", |raw| self.user(raw))
    }

    pub fn role_list(&self, raw: Value) -> RoleList {
        self.list(raw, "role", |raw| self.role(raw))
    }

    /// Maps `items` through `item` and carries every other field over.
    ///
    /// `total` is lifted into the typed field when it is a non-negative
    /// integer and otherwise left in `extra` exactly as received.
    fn list<T>(
        &self,
        raw: Value,
        entity: &str,
        item: impl Fn(Value) -> T,
    ) -> ListResponse<T> {
        let mut fields = Fields::new(raw, entity);

        let items = match fields.remove("items") {
            Some(Value::Array(items)) => items.into_iter().map(item).collect(),
            Some(Value::Null) | None => Vec::new(),
            Some(other) => {
                debug!(
                    task = "normalize list",
                    entity,
                    kind = json_kind(&other),
                    "items is not an array"
                );
                Vec::new()
            }
        };

        let total = match fields.remove("total") {
            Some(total) => match total.as_u64() {
                Some(total) => Some(total),
                None => {
                    fields.insert("total", total);
                    None
                }
            },
            None => None,
        };

        ListResponse {
            items,
            total,
            extra: fields.into_extra(),
        }
    }
}
