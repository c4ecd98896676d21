pub mod implementation;

use std::future::Future;

use entity::prelude::*;

use crate::{ClientError, Pagination};

pub trait Comments {
    fn list_comments(
        &self,
        post_id: Id,
        page: Pagination,
    ) -> impl Future<Output = Result<CommentList, ClientError>> + Send;

    fn create_comment(
        &self,
        post_id: Id,
        body: &str,
    ) -> impl Future<Output = Result<Comment, ClientError>> + Send;

    fn delete_comment(
        &self,
        post_id: Id,
        comment_id: Id,
    ) -> impl Future<Output = Result<(), ClientError>> + Send;
}
