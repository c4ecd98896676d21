pub mod implementation;

use std::future::Future;

use entity::prelude::*;

use crate::{ClientError, Pagination};

pub trait Users {
    fn list_users(
        &self,
        page: Pagination,
    ) -> impl Future<Output = Result<UserList, ClientError>> + Send;

    fn get_user(
        &self,
        id: Id,
    ) -> impl Future<Output = Result<User, ClientError>> + Send;

    fn update_user(
        &self,
        id: Id,
        request: &UpdateUserRequest,
    ) -> impl Future<Output = Result<User, ClientError>> + Send;

    fn delete_user(
        &self,
        id: Id,
    ) -> impl Future<Output = Result<(), ClientError>> + Send;

    /// Replaces the user's roles with `role_ids`.
    fn set_user_roles(
        &self,
        id: Id,
        role_ids: &[Id],
    ) -> impl Future<Output = Result<User, ClientError>> + Send;

    fn create_admin(
        &self,
        request: &RegisterRequest,
    ) -> impl Future<Output = Result<User, ClientError>> + Send;
}
