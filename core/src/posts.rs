//! Client for the `/posts` resource. Same header contract and status mapping
//! as [`TodoApiClient`](crate::TodoApiClient).

use crate::api::{self, Endpoint};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::Post;

const POSTS_PATH: &str = "/posts";

#[derive(Debug, Clone)]
pub struct PostsApiClient<T = UreqTransport> {
    endpoint: Endpoint,
    transport: T,
}

impl PostsApiClient {
    pub fn new(base_url: &str) -> Self {
        Self::from_config(ClientConfig::new(base_url))
    }

    pub fn from_config(config: ClientConfig) -> Self {
        let transport = UreqTransport::new(config.timeout);
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> PostsApiClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            endpoint: Endpoint::new(&config),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        self.endpoint.base_url()
    }

    pub fn get_all_posts(&self) -> Result<Option<Vec<Post>>, ApiError> {
        let response = api::send(&self.transport, &self.build_get_all_posts())?;
        self.parse_get_all_posts(&response)
    }

    pub fn build_get_all_posts(&self) -> HttpRequest {
        self.endpoint.get(POSTS_PATH)
    }

    pub fn parse_get_all_posts(&self, response: &HttpResponse) -> Result<Option<Vec<Post>>, ApiError> {
        api::parse_optional(response)
    }
}
