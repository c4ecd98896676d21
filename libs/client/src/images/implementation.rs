use std::path::Path;

use entity::prelude::*;
use reqwest::{
    multipart::{Form, Part},
    Method,
};

use crate::{
    client::Access,
    response::IntoResponse,
    Client, ClientError,
};

use super::{mime_type, Images};

impl Images for Client {
    async fn upload_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        alt: Option<&str>,
    ) -> Result<Image, ClientError> {
        let mut part = Part::bytes(bytes).file_name(file_name.to_string());
        if let Some(mime) = mime_type(file_name) {
            part = part.mime_str(mime).into_response("invalid mime type")?;
        }

        let mut form = Form::new().part("file", part);
        if let Some(alt) = alt {
            form = form.text("alt", alt.to_string());
        }

        let builder = self.request(
            Method::POST,
            &["images", "upload"],
            Access::Authenticated,
        )?;
        let body = self.fetch(builder.multipart(form)).await?;

        serde_json::from_value(body).into_response("failed to parse image")
    }

    async fn upload_image_file(
        &self,
        path: &Path,
        alt: Option<&str>,
    ) -> Result<Image, ClientError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .into_response("image path has no file name")?
            .to_string();
        let bytes = tokio::fs::read(path)
            .await
            .into_response("failed to read image")?;

        self.upload_image(&file_name, bytes, alt).await
    }
}
