use entity::prelude::*;
use serde_json::Value;
use tracing::debug;

use crate::{
    fields::{json_kind, text, Fields},
    Normalizer,
};

const ROLE_ID: [&str; 2] = ["id", "ID"];
const PERMISSIONS: [&str; 2] = ["permissions", "Permissions"];

impl Normalizer<'_> {
    pub fn role(&self, raw: Value) -> Role {
        let mut fields = Fields::new(raw, "role");

        let id = self.take_id(&mut fields, &ROLE_ID, "role");
        let permissions = fields
            .take_owned(&PERMISSIONS, |permissions| match permissions {
                Value::Array(permissions) => Some(
                    permissions
                        .iter()
                        .filter_map(permission)
                        .collect::<Vec<_>>(),
                ),
                _ => None,
            })
            .unwrap_or_default();

        Role {
            id,
            name: fields.take_text(&["name"]).unwrap_or_default(),
            permissions,
            extra: fields.into_extra(),
        }
    }
}

fn permission(raw: &Value) -> Option<Permission> {
    match raw {
        Value::Object(fields) => Some(Permission::new(
            fields.get("name").and_then(text).unwrap_or_default(),
            fields.get("description").and_then(text).unwrap_or_default(),
        )),
        Value::String(name) => Some(Permission::new(name.as_str(), "")),
        other => {
            debug!(
                task = "normalize role",
                kind = json_kind(other),
                "skipping unreadable permission"
            );
            None
        }
    }
}
