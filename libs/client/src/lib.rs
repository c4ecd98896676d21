//! REST client for the blog backend.
//!
//! Every response body goes through [`normalizer`] before it is returned, so
//! callers only ever see canonical entities.

mod client;
mod config;
mod request;
mod response;

pub mod auth;
pub mod comments;
pub mod images;
pub mod posts;
pub mod roles;
pub mod settings;
pub mod users;

pub use client::{Client, Session};
pub use config::Config;
pub use request::Pagination;

pub mod prelude {
    pub use crate::auth::Auth;
    pub use crate::comments::Comments;
    pub use crate::images::Images;
    pub use crate::posts::Posts;
    pub use crate::roles::Roles;
    pub use crate::settings::Settings;
    pub use crate::users::Users;
    pub use crate::{Client, ClientError, Config, Pagination};
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("in reqwest crate: {}: {}", message, source)]
    ReqwestError {
        message: String,
        source: reqwest::Error,
    },

    #[error("in serde_json crate: {}: {}", message, source)]
    SerdeJsonError {
        message: String,
        source: serde_json::Error,
    },

    #[error("in std io: {}: {}", message, source)]
    StdIoError {
        message: String,
        source: std::io::Error,
    },

    #[error("status code: {}, message: {}", status_code, message)]
    FailedStatusCode {
        status_code: reqwest::StatusCode,
        message: String,
    },

    #[error("unauthorized: {}", message)]
    Unauthorized { message: String },

    #[error("placeholder id {} was about to be sent to the backend", id)]
    SyntheticId { id: i64 },

    #[error("{}", message)]
    Option { message: String },
}
