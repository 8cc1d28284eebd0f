//! Client for the `/todos` resource.
//!
//! # Design
//! `TodoApiClient` holds only its endpoint and a transport; it carries no
//! mutable state between calls. Each operation is split into a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that consumes
//! an `HttpResponse`. The I/O-performing methods (`get_all_tasks`,
//! `get_task_by_id`, `add_task`) run `build_*`, the transport, then
//! `parse_*`, so hosts that do their own I/O get identical semantics.

use crate::api::{self, Endpoint};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::Task;

const TODOS_PATH: &str = "/todos";

/// Synchronous client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoApiClient<T = UreqTransport> {
    endpoint: Endpoint,
    transport: T,
}

impl TodoApiClient {
    /// Client with default settings (`Accept-Language: es`, no timeout).
    pub fn new(base_url: &str) -> Self {
        Self::from_config(ClientConfig::new(base_url))
    }

    pub fn from_config(config: ClientConfig) -> Self {
        let transport = UreqTransport::new(config.timeout);
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> TodoApiClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            endpoint: Endpoint::new(&config),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        self.endpoint.base_url()
    }

    /// Fetch every task. `Ok(None)` means the server answered with an empty
    /// body on a success status.
    pub fn get_all_tasks(&self) -> Result<Option<Vec<Task>>, ApiError> {
        let response = api::send(&self.transport, &self.build_get_all_tasks())?;
        self.parse_get_all_tasks(&response)
    }

    pub fn get_task_by_id(&self, id: &str) -> Result<Option<Task>, ApiError> {
        let response = api::send(&self.transport, &self.build_get_task_by_id(id))?;
        self.parse_get_task_by_id(&response)
    }

    /// Create `task` and return the server's echo of it.
    pub fn add_task(&self, task: &Task) -> Result<Task, ApiError> {
        let request = self.build_add_task(task)?;
        let response = api::send(&self.transport, &request)?;
        self.parse_add_task(&response)
    }

    pub fn build_get_all_tasks(&self) -> HttpRequest {
        self.endpoint.get(TODOS_PATH)
    }

    pub fn build_get_task_by_id(&self, id: &str) -> HttpRequest {
        self.endpoint
            .get(&format!("{TODOS_PATH}/{}", urlencoding::encode(id)))
    }

    pub fn build_add_task(&self, task: &Task) -> Result<HttpRequest, ApiError> {
        self.endpoint.post_json(TODOS_PATH, task)
    }

    pub fn parse_get_all_tasks(&self, response: &HttpResponse) -> Result<Option<Vec<Task>>, ApiError> {
        api::parse_optional(response)
    }

    pub fn parse_get_task_by_id(&self, response: &HttpResponse) -> Result<Option<Task>, ApiError> {
        api::parse_optional(response)
    }

    pub fn parse_add_task(&self, response: &HttpResponse) -> Result<Task, ApiError> {
        api::parse_required(response)
    }
}
