use entity::prelude::*;
use serde_json::Value;
use tracing::debug;

use crate::{
    fields::{json_kind, text, Fields},
    Normalizer, CREATED_AT, EMAIL_SHA256,
};

const USER_ID: [&str; 2] = ["id", "ID"];
const ROLES: [&str; 2] = ["roles", "Roles"];

impl Normalizer<'_> {
    pub fn user(&self, raw: Value) -> User {
        let mut fields = Fields::new(raw, "user");

        let id = self.take_id(&mut fields, &USER_ID, "user");
        let roles = fields
            .take_owned(&ROLES, |roles| match roles {
                Value::Array(roles) => Some(role_names(roles)),
                _ => None,
            })
            .unwrap_or_default();

        User {
            id,
            username: fields.take_text(&["username"]).unwrap_or_default(),
            email: fields.take_text(&["email"]).unwrap_or_default(),
            email_sha256: fields.take_text(&EMAIL_SHA256),
            roles,
            created_at: self.take_date(&mut fields, &CREATED_AT, "user"),
            extra: fields.into_extra(),
        }
    }

    pub fn auth(&self, raw: Value) -> AuthResponse {
        let mut fields = Fields::new(raw, "auth");

        AuthResponse {
            token: fields.take_text(&["token"]).unwrap_or_default(),
            user: self.user(fields.remove("user").unwrap_or_default()),
        }
    }
}

/// Role names from either plain strings or role objects, first occurrence
/// wins.
fn role_names(roles: Vec<Value>) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(roles.len());

    for role in roles {
        let name = match &role {
            Value::Object(role) => role.get("name").and_then(text),
            Value::String(name) => Some(name.clone()),
            _ => None,
        };
        let Some(name) = name else {
            debug!(
                task = "normalize user",
                kind = json_kind(&role),
                "skipping unreadable role"
            );
            continue;
        };
        if !names.contains(&name) {
            names.push(name);
        }
    }

    names
}
