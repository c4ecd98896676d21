pub mod implementation;

use std::future::Future;

use entity::prelude::*;

use crate::{ClientError, Pagination};

pub trait Roles {
    fn list_roles(
        &self,
        page: Pagination,
    ) -> impl Future<Output = Result<RoleList, ClientError>> + Send;

    fn get_role(
        &self,
        id: Id,
    ) -> impl Future<Output = Result<Role, ClientError>> + Send;

    fn create_role(
        &self,
        request: &CreateRoleRequest,
    ) -> impl Future<Output = Result<Role, ClientError>> + Send;

    fn update_role(
        &self,
        id: Id,
        request: &UpdateRoleRequest,
    ) -> impl Future<Output = Result<Role, ClientError>> + Send;

    fn delete_role(
        &self,
        id: Id,
    ) -> impl Future<Output = Result<(), ClientError>> + Send;
}
