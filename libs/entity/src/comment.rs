use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

use crate::{id::Id, post::AuthorSummary};

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Id,
    pub post_id: Option<Id>,
    pub user_id: Option<Id>,
    pub body: String,
    pub visible: bool,
    #[serde(with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,
    pub user: Option<AuthorSummary>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Comment {
    /// Whether `user` wrote this comment.
    pub fn is_authored_by(&self, user: Id) -> bool {
        self.user_id == Some(user)
            || self.user.as_ref().map(|u| u.id) == Some(user)
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct CreateCommentRequest {
    pub body: String,
}
