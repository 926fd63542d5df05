use crate::domain::ResourceId;
use reqwest::{Client, Response};
use std::time::Duration;

/// One request of the verified surface.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    ListPosts,
    ListPostsByUser(ResourceId),
    GetPost(ResourceId),
    ListComments(ResourceId),
    DeletePost(ResourceId),
    /// `None` sends the request without any body.
    CreatePost(Option<serde_json::Value>),
}

impl ApiRequest {
    pub fn method(&self) -> reqwest::Method {
        match self {
            ApiRequest::DeletePost(_) => reqwest::Method::DELETE,
            ApiRequest::CreatePost(_) => reqwest::Method::POST,
            _ => reqwest::Method::GET,
        }
    }

    /// Path and query relative to the base url, e.g. `/posts?userId=5`.
    pub fn target(&self) -> String {
        match self {
            ApiRequest::ListPosts | ApiRequest::CreatePost(_) => "/posts".to_string(),
            ApiRequest::ListPostsByUser(user_id) => format!("/posts?userId={}", user_id),
            ApiRequest::GetPost(post_id) | ApiRequest::DeletePost(post_id) => {
                format!("/posts/{}", post_id)
            }
            ApiRequest::ListComments(post_id) => format!("/posts/{}/comments", post_id),
        }
    }
}

/// Thin client over the posts API.
///
/// Responses are handed back untouched: client error statuses are what
/// the contract is about, so nothing here turns them into errors.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http_client: Client,
}

impl ApiClient {
    pub fn new(base_url: String, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[tracing::instrument(
        name = "Sending API request",
        skip(self),
        fields(method = %request.method(), target = %request.target())
    )]
    pub async fn send(&self, request: &ApiRequest) -> Result<Response, reqwest::Error> {
        match request {
            ApiRequest::ListPosts => self.list_posts().await,
            ApiRequest::ListPostsByUser(user_id) => self.list_posts_by_user(user_id).await,
            ApiRequest::GetPost(post_id) => self.get_post(post_id).await,
            ApiRequest::ListComments(post_id) => self.list_comments(post_id).await,
            ApiRequest::DeletePost(post_id) => self.delete_post(post_id).await,
            ApiRequest::CreatePost(payload) => self.create_post(payload.as_ref()).await,
        }
    }

    pub async fn list_posts(&self) -> Result<Response, reqwest::Error> {
        self.http_client
            .get(format!("{}/posts", self.base_url))
            .send()
            .await
    }

    pub async fn list_posts_by_user(
        &self,
        user_id: &ResourceId,
    ) -> Result<Response, reqwest::Error> {
        // Sent verbatim so invalid tokens like `!` reach the server unescaped
        self.http_client
            .get(format!("{}/posts?userId={}", self.base_url, user_id))
            .send()
            .await
    }

    pub async fn get_post(&self, post_id: &ResourceId) -> Result<Response, reqwest::Error> {
        self.http_client
            .get(format!("{}/posts/{}", self.base_url, post_id))
            .send()
            .await
    }

    pub async fn list_comments(&self, post_id: &ResourceId) -> Result<Response, reqwest::Error> {
        self.http_client
            .get(format!("{}/posts/{}/comments", self.base_url, post_id))
            .send()
            .await
    }

    pub async fn delete_post(&self, post_id: &ResourceId) -> Result<Response, reqwest::Error> {
        self.http_client
            .delete(format!("{}/posts/{}", self.base_url, post_id))
            .send()
            .await
    }

    pub async fn create_post(
        &self,
        payload: Option<&serde_json::Value>,
    ) -> Result<Response, reqwest::Error> {
        let builder = self.http_client.post(format!("{}/posts", self.base_url));
        let builder = match payload {
            Some(payload) => builder.json(payload),
            None => builder,
        };
        builder.send().await
    }
}
