pub mod implementation;

use std::future::Future;

use entity::prelude::*;

use crate::ClientError;

pub trait Settings {
    fn list_settings(
        &self,
    ) -> impl Future<Output = Result<SettingsResponse, ClientError>> + Send;

    fn update_setting(
        &self,
        key: &str,
        request: &UpdateSettingRequest,
    ) -> impl Future<Output = Result<Setting, ClientError>> + Send;
}
