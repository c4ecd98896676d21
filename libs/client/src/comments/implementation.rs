use entity::prelude::*;
use reqwest::Method;

use crate::{client::Access, request::real, Client, ClientError, Pagination};

use super::Comments;

impl Comments for Client {
    async fn list_comments(
        &self,
        post_id: Id,
        page: Pagination,
    ) -> Result<CommentList, ClientError> {
        let post_id = real(post_id)?.to_string();
        let query = page.query(self.config().page_size);
        let builder = self.request(
            Method::GET,
            &["posts", post_id.as_str(), "comments"],
            Access::Public,
        )?;
        let body = self.fetch(builder.query(&query)).await?;

        Ok(self.normalizer().comment_list(body))
    }

    async fn create_comment(
        &self,
        post_id: Id,
        body: &str,
    ) -> Result<Comment, ClientError> {
        let post_id = real(post_id)?.to_string();
        let request = CreateCommentRequest {
            body: body.to_string(),
        };
        let builder = self.request(
            Method::POST,
            &["posts", post_id.as_str(), "comments"],
            Access::Authenticated,
        )?;
        let body = self.fetch(builder.json(&request)).await?;

        Ok(self.normalizer().comment(body))
    }

    async fn delete_comment(
        &self,
        post_id: Id,
        comment_id: Id,
    ) -> Result<(), ClientError> {
        let post_id = real(post_id)?.to_string();
        let comment_id = real(comment_id)?.to_string();
        let builder = self.request(
            Method::DELETE,
            &["posts", post_id.as_str(), "comments", comment_id.as_str()],
            Access::Authenticated,
        )?;
        self.execute(builder).await?;

        Ok(())
    }
}
