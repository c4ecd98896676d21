use entity::prelude::*;
use reqwest::Method;

use crate::{client::Access, request::real, Client, ClientError, Pagination};

use super::Posts;

impl Posts for Client {
    async fn list_posts(
        &self,
        page: Pagination,
    ) -> Result<PostList, ClientError> {
        let mut query = page.query(self.config().page_size);
        query.push(("sort", "created_at".to_string()));
        query.push(("order", "desc".to_string()));

        let builder =
            self.request(Method::GET, &["posts"], Access::Authenticated)?;
        let body = self.fetch(builder.query(&query)).await?;

        Ok(self.normalizer().post_list(body))
    }

    async fn get_post(&self, id: Id) -> Result<Post, ClientError> {
        let id = real(id)?.to_string();
        let builder = self.request(
            Method::GET,
            &["posts", id.as_str()],
            Access::Authenticated,
        )?;
        let body = self.fetch(builder).await?;

        Ok(self.normalizer().post(body))
    }

    async fn list_managed_posts(
        &self,
        page: Pagination,
    ) -> Result<PostList, ClientError> {
        let query = page.query(self.config().page_size);
        let builder = self.request(
            Method::GET,
            &["posts", "manage"],
            Access::Authenticated,
        )?;
        let body = self.fetch(builder.query(&query)).await?;

        Ok(self.normalizer().post_list(body))
    }

    async fn create_post(
        &self,
        payload: &PostPayload,
    ) -> Result<Post, ClientError> {
        let builder =
            self.request(Method::POST, &["posts"], Access::Authenticated)?;
        let body = self.fetch(builder.json(payload)).await?;

        Ok(self.normalizer().post(body))
    }

    async fn update_post(
        &self,
        id: Id,
        payload: &PostPayload,
    ) -> Result<Post, ClientError> {
        let id = real(id)?.to_string();
        let builder = self.request(
            Method::PUT,
            &["posts", id.as_str()],
            Access::Authenticated,
        )?;
        let body = self.fetch(builder.json(payload)).await?;

        Ok(self.normalizer().post(body))
    }

    async fn publish_post(&self, id: Id) -> Result<(), ClientError> {
        let id = real(id)?.to_string();
        let builder = self.request(
            Method::POST,
            &["posts", id.as_str(), "publish"],
            Access::Authenticated,
        )?;
        self.execute(builder).await?;

        Ok(())
    }

    async fn delete_post(&self, id: Id) -> Result<(), ClientError> {
        let id = real(id)?.to_string();
        let builder = self.request(
            Method::DELETE,
            &["posts", id.as_str()],
            Access::Authenticated,
        )?;
        self.execute(builder).await?;

        Ok(())
    }
}
