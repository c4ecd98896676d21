use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

use crate::id::Id;

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct Role {
    pub id: Id,
    pub name: String,
    pub permissions: Vec<Permission>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq, Clone)]
pub struct Permission {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Permission {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct CreateRoleRequest {
    pub name: String,
    pub permissions: Vec<Permission>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq, Clone)]
pub struct UpdateRoleRequest {
    pub name: Option<String>,
    pub permissions: Option<Vec<Permission>>,
}
