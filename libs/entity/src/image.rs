use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

use crate::id::Id;

/// Result of an image upload, decoded as the backend sends it.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: Id,
    pub filename: String,
    pub original_name: String,
    pub alt: Option<String>,
    pub mime_type: String,
    pub size: u64,
    pub width: u32,
    pub height: u32,
    pub url: String,
    pub user_id: Id,
    pub storage_backend: String,
    pub created_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Image {
    /// Markdown snippet that embeds the image in a post body.
    pub fn markdown(&self) -> String {
        let alt = self.alt.as_deref().unwrap_or(&self.original_name);
        format!("![{}]({})", alt, self.url)
    }
}
