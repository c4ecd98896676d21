pub mod implementation;

use std::future::Future;

use entity::prelude::*;

use crate::ClientError;

/// Login, registration and the current session.
///
/// Successful login, registration and admin initialisation store the
/// returned token and user on the client.
pub trait Auth {
    fn login(
        &self,
        request: &LoginRequest,
    ) -> impl Future<Output = Result<AuthResponse, ClientError>> + Send;

    fn register(
        &self,
        request: &RegisterRequest,
    ) -> impl Future<Output = Result<AuthResponse, ClientError>> + Send;

    /// Creates the first administrator on a fresh backend.
    fn init_admin(
        &self,
        request: &InitAdminRequest,
    ) -> impl Future<Output = Result<AuthResponse, ClientError>> + Send;

    fn me(&self) -> impl Future<Output = Result<User, ClientError>> + Send;

    /// Forgets the stored token and user. Nothing is sent to the backend.
    fn logout(&self);
}
