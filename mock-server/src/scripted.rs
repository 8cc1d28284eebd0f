//! Scripted HTTP server for client tests.
//!
//! Every request is recorded and answered with the next queued
//! [`MockResponse`]; with nothing queued the answer is `200` with an empty
//! body. The server runs on its own thread and runtime so blocking clients
//! can be tested from plain `#[test]` functions.

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::{
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use tokio::sync::oneshot;
use tracing::{debug, error};

/// A canned reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl MockResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: String::new(),
        }
    }

    /// Reply with a JSON body and a matching `Content-Type`.
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self::new(status)
            .with_header("content-type", "application/json")
            .with_body(body)
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

impl Default for MockResponse {
    fn default() -> Self {
        Self::new(200)
    }
}

impl IntoResponse for MockResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, self.body).into_response();
        for (name, value) in self.headers {
            match (HeaderName::try_from(name), HeaderValue::try_from(value)) {
                (Ok(name), Ok(value)) => {
                    response.headers_mut().insert(name, value);
                }
                _ => error!("skipping invalid mock response header"),
            }
        }
        response
    }
}

/// A request as the server saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    /// Path plus query string, e.g. `/todos/1`.
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    /// Case-insensitive header lookup; returns the first match.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Default)]
struct Script {
    responses: VecDeque<MockResponse>,
    requests: VecDeque<RecordedRequest>,
}

type SharedScript = Arc<Mutex<Script>>;

fn lock(script: &SharedScript) -> MutexGuard<'_, Script> {
    script.lock().unwrap_or_else(PoisonError::into_inner)
}

fn router(script: SharedScript) -> Router {
    Router::new().fallback(respond).with_state(script)
}

async fn respond(
    State(script): State<SharedScript>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> MockResponse {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    debug!(%method, %path, "mock server received request");

    let recorded = RecordedRequest {
        method: method.as_str().to_string(),
        path,
        headers: headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect(),
        body,
    };

    let mut guard = lock(&script);
    guard.requests.push_back(recorded);
    guard.responses.pop_front().unwrap_or_default()
}

/// Handle to a running scripted server. Stops serving when dropped.
pub struct MockServer {
    addr: SocketAddr,
    script: SharedScript,
    shutdown: Option<oneshot::Sender<()>>,
}

impl MockServer {
    /// Bind a random local port and start serving on a background thread.
    pub fn start() -> std::io::Result<Self> {
        let std_listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        let addr = std_listener.local_addr()?;
        std_listener.set_nonblocking(true)?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let script = SharedScript::default();
        let app = router(script.clone());
        let (shutdown, stopped) = oneshot::channel::<()>();

        std::thread::spawn(move || {
            runtime.block_on(async move {
                let listener = match tokio::net::TcpListener::from_std(std_listener) {
                    Ok(listener) => listener,
                    Err(e) => {
                        error!(error = %e, "mock server failed to adopt listener");
                        return;
                    }
                };
                let served = axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = stopped.await;
                    })
                    .await;
                if let Err(e) = served {
                    error!(error = %e, "mock server stopped");
                }
            });
        });

        Ok(Self {
            addr,
            script,
            shutdown: Some(shutdown),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// `http://127.0.0.1:<port>`, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn enqueue(&self, response: MockResponse) {
        lock(&self.script).responses.push_back(response);
    }

    /// Oldest request not yet taken.
    pub fn take_request(&self) -> Option<RecordedRequest> {
        lock(&self.script).requests.pop_front()
    }

    pub fn request_count(&self) -> usize {
        lock(&self.script).requests.len()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}
