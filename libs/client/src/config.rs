use reqwest::Url;
use toml::{map::Map, Value};

use crate::{response::Response, ClientError};

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";
const DEFAULT_PAGE_SIZE: u64 = 20;
const BASE_URL_ENV: &str = "QUILL_API_BASE_URL";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub page_size: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Reads the `[api]` table. A missing table or key keeps the default,
    /// a key of the wrong type is an error.
    pub fn from_toml(config: &Map<String, Value>) -> Response<Self> {
        let mut result = Self::default();
        let Some(api) = config.get("api") else {
            return Ok(result);
        };

        if let Some(base_url) = api.get("base_url") {
            result.base_url = base_url
                .as_str()
                .ok_or_else(|| ClientError::Option {
                    message: "api.base_url must be a string".to_string(),
                })?
                .to_string();
        }

        if let Some(page_size) = api.get("page_size") {
            result.page_size = page_size
                .as_integer()
                .and_then(|size| u64::try_from(size).ok())
                .filter(|size| *size > 0)
                .ok_or_else(|| ClientError::Option {
                    message: "api.page_size must be a positive integer"
                        .to_string(),
                })?;
        }

        Ok(result)
    }

    /// Applies `QUILL_API_BASE_URL` when it is set and not blank.
    pub fn with_env(self) -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(base_url) if !base_url.trim().is_empty() => Self {
                base_url: base_url.trim().to_string(),
                ..self
            },
            _ => self,
        }
    }

    /// Appends `segments` to the base URL, percent-encoding each one.
    pub(crate) fn url(&self, segments: &[&str]) -> Response<Url> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ClientError::Option {
                message: format!(
                    "invalid api.base_url {}: {}",
                    self.base_url, e
                ),
            })?;

        url.path_segments_mut()
            .map_err(|_| ClientError::Option {
                message: format!(
                    "api.base_url {} cannot be a base",
                    self.base_url
                ),
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }
}
