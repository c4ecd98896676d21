pub mod implementation;

use std::future::Future;

use entity::prelude::*;

use crate::{ClientError, Pagination};

pub trait Posts {
    /// Published posts, newest first.
    fn list_posts(
        &self,
        page: Pagination,
    ) -> impl Future<Output = Result<PostList, ClientError>> + Send;

    fn get_post(
        &self,
        id: Id,
    ) -> impl Future<Output = Result<Post, ClientError>> + Send;

    /// Every post including drafts, for the admin dashboard.
    fn list_managed_posts(
        &self,
        page: Pagination,
    ) -> impl Future<Output = Result<PostList, ClientError>> + Send;

    fn create_post(
        &self,
        payload: &PostPayload,
    ) -> impl Future<Output = Result<Post, ClientError>> + Send;

    fn update_post(
        &self,
        id: Id,
        payload: &PostPayload,
    ) -> impl Future<Output = Result<Post, ClientError>> + Send;

    fn publish_post(
        &self,
        id: Id,
    ) -> impl Future<Output = Result<(), ClientError>> + Send;

    fn delete_post(
        &self,
        id: Id,
    ) -> impl Future<Output = Result<(), ClientError>> + Send;
}
