use entity::prelude::*;
use reqwest::Method;

use crate::{client::Access, response::IntoResponse, Client, ClientError};

use super::Settings;

impl Settings for Client {
    async fn list_settings(&self) -> Result<SettingsResponse, ClientError> {
        let builder = self.request(Method::GET, &["settings"], Access::Public)?;
        let body = self.execute(builder).await?;

        let Some(body) = body else {
            return Ok(SettingsResponse::default());
        };
        serde_json::from_value(body).into_response("failed to parse settings")
    }

    async fn update_setting(
        &self,
        key: &str,
        request: &UpdateSettingRequest,
    ) -> Result<Setting, ClientError> {
        let builder = self.request(
            Method::PUT,
            &["settings", key],
            Access::Authenticated,
        )?;
        let body = self
            .execute(builder.json(request))
            .await?
            .into_response("empty response to setting update")?;

        serde_json::from_value(body).into_response("failed to parse setting")
    }
}
