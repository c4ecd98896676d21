use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Key-value site setting. The backend sends these well formed, so they are
/// decoded directly rather than normalized.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Setting {
    pub key: String,
    pub value: String,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq, Clone)]
pub struct SettingsResponse {
    #[serde(default)]
    pub items: Vec<Setting>,
}

impl SettingsResponse {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|setting| setting.key == key)
            .map(|setting| setting.value.as_str())
    }
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct UpdateSettingRequest {
    pub value: String,
    pub description: Option<String>,
}
