use entity::prelude::*;
use reqwest::Method;

use crate::{client::Access, request::real, Client, ClientError, Pagination};

use super::Roles;

impl Roles for Client {
    async fn list_roles(
        &self,
        page: Pagination,
    ) -> Result<RoleList, ClientError> {
        let query = page.query(self.config().page_size);
        let builder =
            self.request(Method::GET, &["roles"], Access::Authenticated)?;
        let body = self.fetch(builder.query(&query)).await?;

        Ok(self.normalizer().role_list(body))
    }

    async fn get_role(&self, id: Id) -> Result<Role, ClientError> {
        let id = real(id)?.to_string();
        let builder = self.request(
            Method::GET,
            &["roles", id.as_str()],
            Access::Authenticated,
        )?;
        let body = self.fetch(builder).await?;

        Ok(self.normalizer().role(body))
    }

    async fn create_role(
        &self,
        request: &CreateRoleRequest,
    ) -> Result<Role, ClientError> {
        let builder =
            self.request(Method::POST, &["roles"], Access::Authenticated)?;
        let body = self.fetch(builder.json(request)).await?;

        Ok(self.normalizer().role(body))
    }

    async fn update_role(
        &self,
        id: Id,
        request: &UpdateRoleRequest,
    ) -> Result<Role, ClientError> {
        let id = real(id)?.to_string();
        let builder = self.request(
            Method::PUT,
            &["roles", id.as_str()],
            Access::Authenticated,
        )?;
        let body = self.fetch(builder.json(request)).await?;

        Ok(self.normalizer().role(body))
    }

    async fn delete_role(&self, id: Id) -> Result<(), ClientError> {
        let id = real(id)?.to_string();
        let builder = self.request(
            Method::DELETE,
            &["roles", id.as_str()],
            Access::Authenticated,
        )?;
        self.execute(builder).await?;

        Ok(())
    }
}
