use entity::prelude::*;
use reqwest::Method;

use crate::{client::Access, request::real, Client, ClientError, Pagination};

use super::Users;

impl Users for Client {
    async fn list_users(
        &self,
        page: Pagination,
    ) -> Result<UserList, ClientError> {
        let query = page.query(self.config().page_size);
        let builder =
            self.request(Method::GET, &["users"], Access::Authenticated)?;
        let body = self.fetch(builder.query(&query)).await?;

        Ok(self.normalizer().user_list(body))
    }

    async fn get_user(&self, id: Id) -> Result<User, ClientError> {
        let id = real(id)?.to_string();
        let builder = self.request(
            Method::GET,
            &["users", id.as_str()],
            Access::Authenticated,
        )?;
        let body = self.fetch(builder).await?;

        Ok(self.normalizer().user(body))
    }

    async fn update_user(
        &self,
        id: Id,
        request: &UpdateUserRequest,
    ) -> Result<User, ClientError> {
        let id = real(id)?.to_string();
        let builder = self.request(
            Method::PUT,
            &["users", id.as_str()],
            Access::Authenticated,
        )?;
        let body = self.fetch(builder.json(request)).await?;

        Ok(self.normalizer().user(body))
    }

    async fn delete_user(&self, id: Id) -> Result<(), ClientError> {
        let id = real(id)?.to_string();
        let builder = self.request(
            Method::DELETE,
            &["users", id.as_str()],
            Access::Authenticated,
        )?;
        self.execute(builder).await?;

        Ok(())
    }

    async fn set_user_roles(
        &self,
        id: Id,
        role_ids: &[Id],
    ) -> Result<User, ClientError> {
        let id = real(id)?.to_string();
        let request = SetUserRolesRequest {
            role_ids: role_ids
                .iter()
                .map(|role_id| real(*role_id))
                .collect::<Result<_, _>>()?,
        };
        let builder = self.request(
            Method::PUT,
            &["users", id.as_str(), "roles"],
            Access::Authenticated,
        )?;
        let body = self.fetch(builder.json(&request)).await?;

        Ok(self.normalizer().user(body))
    }

    async fn create_admin(
        &self,
        request: &RegisterRequest,
    ) -> Result<User, ClientError> {
        let builder = self.request(
            Method::POST,
            &["users", "admin"],
            Access::Authenticated,
        )?;
        let body = self.fetch(builder.json(request)).await?;

        Ok(self.normalizer().user(body))
    }
}
