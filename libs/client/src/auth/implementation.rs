use entity::prelude::*;
use reqwest::Method;
use serde::Serialize;

use crate::{client::Access, Client, ClientError};

use super::Auth;

impl Client {
    async fn authenticate<T: Serialize + Sync>(
        &self,
        path: &[&str],
        request: &T,
    ) -> Result<AuthResponse, ClientError> {
        let builder = self.request(Method::POST, path, Access::Public)?;
        let body = self.fetch(builder.json(request)).await?;

        let auth = self.normalizer().auth(body);
        self.store_session(&auth);

        Ok(auth)
    }
}

impl Auth for Client {
    async fn login(
        &self,
        request: &LoginRequest,
    ) -> Result<AuthResponse, ClientError> {
        self.authenticate(&["auth", "login"], request).await
    }

    async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<AuthResponse, ClientError> {
        self.authenticate(&["auth", "register"], request).await
    }

    async fn init_admin(
        &self,
        request: &InitAdminRequest,
    ) -> Result<AuthResponse, ClientError> {
        self.authenticate(&["auth", "admin", "init"], request).await
    }

    async fn me(&self) -> Result<User, ClientError> {
        let builder =
            self.request(Method::GET, &["auth", "me"], Access::Authenticated)?;
        let body = self.fetch(builder).await?;

        Ok(self.normalizer().user(body))
    }

    fn logout(&self) {
        self.clear_session();
    }
}
