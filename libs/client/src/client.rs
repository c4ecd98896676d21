use std::sync::{Arc, PoisonError, RwLock};

use entity::prelude::*;
use normalizer::Normalizer;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Method, RequestBuilder, StatusCode,
};
use serde_json::Value;
use toml::{map::Map, Value as TomlValue};
use tracing::{debug, error};

use crate::{
    config::Config,
    response::{IntoResponse, Response},
    ClientError,
};

const FALLBACK_ERROR: &str = "API Request Failed";

/// Credentials held after a successful login.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

#[derive(Clone, Debug)]
pub struct Client {
    config: Config,
    headers: HeaderMap,
    http: reqwest::Client,
    session: Arc<RwLock<Session>>,
    normalizer: Normalizer<'static>,
}

/// Whether a request carries the bearer token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Access {
    Public,
    Authenticated,
}

impl Client {
    pub fn new(
        token: Option<String>,
        config: &Map<String, TomlValue>,
    ) -> Result<Self, ClientError> {
        let config = Config::from_toml(config)?.with_env();

        Ok(Self::with_config(token, config))
    }

    pub fn with_config(token: Option<String>, config: Config) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Self {
            config,
            headers,
            http: reqwest::Client::new(),
            session: Arc::new(RwLock::new(Session {
                token: token.filter(|token| !token.is_empty()),
                user: None,
            })),
            normalizer: Normalizer::global(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> Session {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn token(&self) -> Option<String> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .token
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub(crate) fn normalizer(&self) -> Normalizer<'static> {
        self.normalizer
    }

    pub(crate) fn store_session(&self, auth: &AuthResponse) {
        let mut session =
            self.session.write().unwrap_or_else(PoisonError::into_inner);
        session.token = Some(auth.token.clone()).filter(|t| !t.is_empty());
        session.user = Some(auth.user.clone());
    }

    pub(crate) fn clear_session(&self) {
        let mut session =
            self.session.write().unwrap_or_else(PoisonError::into_inner);
        *session = Session::default();
    }

    pub(crate) fn request(
        &self,
        method: Method,
        path: &[&str],
        access: Access,
    ) -> Response<RequestBuilder> {
        let builder = self
            .http
            .request(method, self.config.url(path)?)
            .headers(self.headers.clone());

        Ok(match (access, self.token()) {
            (Access::Authenticated, Some(token)) => builder.bearer_auth(token),
            _ => builder,
        })
    }

    /// Like [`Client::execute`], with an absent body read as `null`.
    pub(crate) async fn fetch(
        &self,
        builder: RequestBuilder,
    ) -> Response<Value> {
        Ok(self.execute(builder).await?.unwrap_or_default())
    }

    /// Sends `builder` and returns the decoded body, or `None` for an empty
    /// or 204 response.
    pub(crate) async fn execute(
        &self,
        builder: RequestBuilder,
    ) -> Response<Option<Value>> {
        let request = builder.build().into_response("failed to build")?;
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(task = "request", method = %method, url = %url);

        let response = self
            .http
            .execute(request)
            .await
            .into_response("failed to send")?;

        let status = response.status();
        let text = response.text().await.into_response("failed to get text")?;

        self.read_body(status, &text).inspect_err(|e| {
            error!(
                task = "request",
                method = %method,
                url = %url,
                err = e.to_string()
            );
        })
    }

    pub(crate) fn read_body(
        &self,
        status: StatusCode,
        text: &str,
    ) -> Response<Option<Value>> {
        if status == StatusCode::UNAUTHORIZED {
            self.clear_session();
            return Err(ClientError::Unauthorized {
                message: error_message(text),
            });
        }

        if !status.is_success() {
            return Err(ClientError::FailedStatusCode {
                status_code: status,
                message: error_message(text),
            });
        }

        if status == StatusCode::NO_CONTENT || text.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(text)
            .map(Some)
            .into_response("failed to parse response body")
    }
}

/// The `error` field of a JSON error body, or a generic message.
fn error_message(text: &str) -> String {
    serde_json::from_str::<Value>(text)
        .ok()
        .and_then(|body| body.get("error")?.as_str().map(str::to_string))
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| FALLBACK_ERROR.to_string())
}

#[cfg(test)]
pub(crate) mod test {
    use entity::prelude::*;
    use reqwest::{Method, StatusCode};
    use rstest::rstest;
    use serde_json::json;

    use super::{error_message, Access, Client, Session};
    use crate::{Config, ClientError};

    pub(crate) fn client(token: Option<&str>) -> Client {
        Client::with_config(
            token.map(str::to_string),
            Config {
                base_url: "http://localhost:8080/api/v1".to_string(),
                page_size: 20,
            },
        )
    }

    #[rstest]
    #[case(r#"{"error":"post not found"}"#, "post not found")]
    #[case(r#"{"error":""}"#, "API Request Failed")]
    #[case(r#"{"message":"nope"}"#, "API Request Failed")]
    #[case("<html>bad gateway</html>", "API Request Failed")]
    #[case("", "API Request Failed")]
    fn test_error_message(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(error_message(text), expected);
    }

    #[test]
    fn test_read_body_failed_status() {
        let client = client(Some("jwt"));

        let result = client
            .read_body(StatusCode::NOT_FOUND, r#"{"error":"post not found"}"#);

        match result {
            Err(ClientError::FailedStatusCode {
                status_code,
                message,
            }) => {
                assert_eq!(status_code, StatusCode::NOT_FOUND);
                assert_eq!(message, "post not found");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(client.is_authenticated());
    }

    #[test]
    fn test_read_body_unauthorized_clears_session() {
        // Arrange
        let client = client(Some("jwt"));

        // Act
        let result = client.read_body(StatusCode::UNAUTHORIZED, "");

        // Assert
        assert!(matches!(result, Err(ClientError::Unauthorized { .. })));
        assert!(!client.is_authenticated());
        assert_eq!(client.session(), Session::default());
    }

    #[rstest]
    #[case(StatusCode::NO_CONTENT, "")]
    #[case(StatusCode::OK, "  ")]
    fn test_read_body_empty(#[case] status: StatusCode, #[case] text: &str) {
        let client = client(None);

        assert_eq!(client.read_body(status, text).unwrap(), None);
    }

    #[test]
    fn test_read_body_json() {
        let client = client(None);

        let body = client.read_body(StatusCode::OK, r#"{"id":1}"#).unwrap();

        assert_eq!(body, Some(json!({"id": 1})));
    }

    #[test]
    fn test_read_body_invalid_json() {
        let client = client(None);

        let result = client.read_body(StatusCode::OK, "{not json");

        assert!(matches!(result, Err(ClientError::SerdeJsonError { .. })));
    }

    #[test]
    fn test_request_attaches_token_only_when_authenticated() {
        let client = client(Some("jwt"));

        let authed = client
            .request(Method::GET, &["posts", "manage"], Access::Authenticated)
            .unwrap()
            .build()
            .unwrap();
        let public = client
            .request(Method::GET, &["settings"], Access::Public)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            authed.url().as_str(),
            "http://localhost:8080/api/v1/posts/manage"
        );
        assert_eq!(
            authed.headers().get("authorization").unwrap(),
            "Bearer jwt"
        );
        assert_eq!(authed.headers().get("accept").unwrap(), "application/json");
        assert!(public.headers().get("authorization").is_none());
    }

    #[test]
    fn test_empty_token_is_not_stored() {
        let client = client(Some(""));

        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_store_session() {
        let client = client(None);
        let auth = normalizer::normalize_auth(json!({
            "token": "jwt",
            "user": {"id": 1, "username": "admin"},
        }));

        client.store_session(&auth);

        assert_eq!(client.token().as_deref(), Some("jwt"));
        assert_eq!(client.session().user.map(|u| u.id), Some(Id::new(1)));
    }
}
