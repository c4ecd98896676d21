//! Turns backend JSON into the canonical entities in [`entity`].
//!
//! The backend is not consistent about field names, id types or timestamp
//! layouts. Each entity has a normalizer that accepts any JSON value and
//! always returns a well-formed record:
//!
//! * ids are integers; a payload without a usable id gets a negative
//!   placeholder from an [`IdAllocator`],
//! * timestamps are valid instants; naive `YYYY-MM-DD HH:MM:SS` strings are
//!   read as UTC and anything unreadable becomes "now",
//! * collections that are missing come back empty,
//! * fields the client does not know about are kept in `extra`.
//!
//! Normalizing never fails. Substituted defaults are logged at `debug`.

use chrono::{DateTime, SubsecRound, Utc};
use entity::prelude::*;
use serde_json::Value;
use tracing::debug;

mod allocator;
mod coerce;
mod comment;
mod fields;
mod list;
mod post;
mod role;
mod user;

pub use allocator::IdAllocator;
pub use coerce::{coerce_date, coerce_id};

use fields::Fields;

const CREATED_AT: [&str; 2] = ["createdAt", "created_at"];
const UPDATED_AT: [&str; 2] = ["updatedAt", "updated_at"];
const USER_ID: [&str; 2] = ["userId", "user_id"];
const EMAIL_SHA256: [&str; 2] = ["emailSha256", "email_sha256"];

#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    ids: &'a IdAllocator,
    clock: fn() -> DateTime<Utc>,
}

impl Normalizer<'static> {
    /// Normalizer backed by the process-wide allocator.
    pub fn global() -> Self {
        Self::new(IdAllocator::global())
    }
}

impl<'a> Normalizer<'a> {
    pub fn new(ids: &'a IdAllocator) -> Self {
        Self {
            ids,
            clock: Utc::now,
        }
    }

    /// Replaces the source of "now" used for unreadable timestamps.
    pub fn with_clock(self, clock: fn() -> DateTime<Utc>) -> Self {
        Self { clock, ..self }
    }

    /// Reads an id, minting a placeholder when `value` holds none.
    pub fn id(&self, value: Option<&Value>) -> Id {
        value
            .and_then(coerce_id)
            .map(Id::new)
            .unwrap_or_else(|| self.placeholder("id"))
    }

    /// Reads a timestamp, falling back to the current instant.
    ///
    /// Precision is cut to milliseconds, the finest the wire format carries.
    pub fn date(&self, value: Option<&Value>) -> DateTime<Utc> {
        value
            .and_then(coerce_date)
            .unwrap_or_else(|| self.now("timestamp"))
            .trunc_subsecs(3)
    }

    fn take_id(&self, fields: &mut Fields, keys: &[&str], entity: &str) -> Id {
        fields
            .take(keys, coerce_id)
            .map(Id::new)
            .unwrap_or_else(|| self.placeholder(entity))
    }

    fn take_date(
        &self,
        fields: &mut Fields,
        keys: &[&str],
        entity: &str,
    ) -> DateTime<Utc> {
        fields
            .take(keys, coerce_date)
            .unwrap_or_else(|| self.now(entity))
            .trunc_subsecs(3)
    }

    fn placeholder(&self, entity: &str) -> Id {
        let id = self.ids.next();
        debug!(task = "normalize id", entity, id = id.get(), "no usable id");
        id
    }

    fn now(&self, entity: &str) -> DateTime<Utc> {
        debug!(task = "normalize date", entity, "no usable timestamp");
        (self.clock)()
    }
}

impl Default for Normalizer<'static> {
    fn default() -> Self {
        Self::global()
    }
}

pub fn normalize_post(raw: Value) -> Post {
    Normalizer::global().post(raw)
}

pub fn normalize_post_list(raw: Value) -> PostList {
    Normalizer::global().post_list(raw)
}

pub fn normalize_comment(raw: Value) -> Comment {
    Normalizer::global().comment(raw)
}

pub fn normalize_comment_list(raw: Value) -> CommentList {
    Normalizer::global().comment_list(raw)
}

pub fn normalize_user(raw: Value) -> User {
    Normalizer::global().user(raw)
}

pub fn normalize_user_list(raw: Value) -> UserList {
    Normalizer::global().user_list(raw)
}

pub fn normalize_role(raw: Value) -> Role {
    Normalizer::global().role(raw)
}

pub fn normalize_role_list(raw: Value) -> RoleList {
    Normalizer::global().role_list(raw)
}

pub fn normalize_auth(raw: Value) -> AuthResponse {
    Normalizer::global().auth(raw)
}
