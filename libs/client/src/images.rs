pub mod implementation;

use std::{future::Future, path::Path};

use entity::prelude::*;

use crate::ClientError;

pub trait Images {
    /// Uploads `bytes` as a multipart `file` field, with an optional `alt`
    /// text.
    fn upload_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        alt: Option<&str>,
    ) -> impl Future<Output = Result<Image, ClientError>> + Send;

    fn upload_image_file(
        &self,
        path: &Path,
        alt: Option<&str>,
    ) -> impl Future<Output = Result<Image, ClientError>> + Send;
}

/// Content type for an image file name, judged by its extension.
pub fn mime_type(file_name: &str) -> Option<&'static str> {
    let extension = Path::new(file_name).extension()?.to_str()?;

    match extension.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "avif" => Some("image/avif"),
        _ => None,
    }
}
