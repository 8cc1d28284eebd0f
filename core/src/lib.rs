//! Synchronous API clients for the todo and posts REST resources.
//!
//! # Overview
//! `TodoApiClient` lists, fetches and creates tasks under `/todos`;
//! `PostsApiClient` lists `/posts`. Every request carries
//! `Accept: application/json` and the configured `Accept-Language`
//! (`es` by default). HTTP statuses map onto [`ApiError`]: 404 becomes
//! `ItemNotFound`, any other non-2xx becomes `UnknownError`, and bodies that
//! cannot be decoded become `NetworkError`.
//!
//! # Design
//! - Clients are stateless: they hold an endpoint and a [`Transport`].
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit and hosts
//!   can execute requests themselves.
//! - [`UreqTransport`] is the default blocking transport.
//!
//! ```no_run
//! use todo_api_client::{Task, TodoApiClient};
//!
//! let client = TodoApiClient::new("https://jsonplaceholder.typicode.com");
//! let tasks = client.get_all_tasks()?.unwrap_or_default();
//! let created = client.add_task(&Task::new("201", "1", "Finish this kata", false))?;
//! # let _ = (tasks, created);
//! # Ok::<(), todo_api_client::ApiError>(())
//! ```

mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod posts;
pub mod transport;
pub mod types;

pub use client::TodoApiClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use posts::PostsApiClient;
pub use transport::{Transport, UreqTransport};
pub use types::{Post, Task};
