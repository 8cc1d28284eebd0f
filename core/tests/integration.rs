//! Client behaviour over real HTTP against the scripted mock server.
//!
//! Each test queues canned responses, runs one client operation through the
//! default ureq transport, then asserts on the parsed result and on the
//! request the server recorded.

use mock_server::{MockResponse, MockServer, RecordedRequest};
use todo_api_client::{ApiError, ClientConfig, PostsApiClient, Task, TodoApiClient};

const GET_TASKS_RESPONSE: &str = include_str!("fixtures/get_tasks_response.json");
const EMPTY_LIST_RESPONSE: &str = include_str!("fixtures/empty_list_response.json");
const EMPTY_RESPONSE: &str = include_str!("fixtures/empty_response.json");
const GET_TASK_BY_ID_RESPONSE: &str = include_str!("fixtures/get_task_by_id_response.json");
const ADD_TASK_REQUEST: &str = include_str!("fixtures/add_task_request.json");
const ADD_TASK_RESPONSE: &str = include_str!("fixtures/add_task_response.json");
const MALFORMED_RESPONSE: &str = include_str!("fixtures/malformed_response.json");
const GET_POSTS_RESPONSE: &str = include_str!("fixtures/get_posts_response.json");

fn setup() -> (MockServer, TodoApiClient) {
    let server = MockServer::start().unwrap();
    let client = TodoApiClient::new(&server.base_url());
    (server, client)
}

fn enqueue_json(server: &MockServer, status: u16, body: &str) {
    server.enqueue(MockResponse::json(status, body));
}

fn taken(server: &MockServer) -> RecordedRequest {
    server.take_request().expect("server recorded no request")
}

fn assert_task_contains_expected_values(task: &Task) {
    assert_eq!(task.id, "1");
    assert_eq!(task.user_id, "1");
    assert_eq!(task.title, "delectus aut autem");
    assert!(!task.finished);
}

// --- headers ---

#[test]
fn sends_accept_header() {
    let (server, client) = setup();
    server.enqueue(MockResponse::default());

    client.get_all_tasks().unwrap();

    assert_eq!(taken(&server).header("Accept"), Some("application/json"));
}

#[test]
fn sends_accept_language_header() {
    let (server, client) = setup();
    server.enqueue(MockResponse::default());

    client.get_all_tasks().unwrap();

    assert_eq!(taken(&server).header("Accept-Language"), Some("es"));
}

#[test]
fn every_operation_sends_default_headers() {
    let (server, client) = setup();
    enqueue_json(&server, 200, EMPTY_LIST_RESPONSE);
    enqueue_json(&server, 200, GET_TASK_BY_ID_RESPONSE);
    enqueue_json(&server, 201, ADD_TASK_RESPONSE);

    client.get_all_tasks().unwrap();
    client.get_task_by_id("1").unwrap();
    client.add_task(&Task::new("1", "2", "Finish this kata", false)).unwrap();

    assert_eq!(server.request_count(), 3);
    while let Some(request) = server.take_request() {
        assert_eq!(request.header("Accept"), Some("application/json"), "{}", request.path);
        assert_eq!(request.header("Accept-Language"), Some("es"), "{}", request.path);
    }
}

#[test]
fn accept_language_is_configurable() {
    let server = MockServer::start().unwrap();
    let client = TodoApiClient::from_config(
        ClientConfig::new(&server.base_url()).with_accept_language("en"),
    );
    server.enqueue(MockResponse::default());

    client.get_all_tasks().unwrap();

    assert_eq!(taken(&server).header("Accept-Language"), Some("en"));
}

// --- get all tasks ---

#[test]
fn sends_get_all_tasks_request_to_the_correct_endpoint() {
    let (server, client) = setup();
    server.enqueue(MockResponse::default());

    client.get_all_tasks().unwrap();

    let request = taken(&server);
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/todos");
}

#[test]
fn parses_tasks_properly_getting_all_the_tasks() {
    let (server, client) = setup();
    enqueue_json(&server, 200, GET_TASKS_RESPONSE);

    let tasks = client.get_all_tasks().unwrap().unwrap();

    assert_eq!(tasks.len(), 200);
    assert_task_contains_expected_values(&tasks[0]);
}

#[test]
fn parses_properly_getting_an_empty_task_list() {
    let (server, client) = setup();
    enqueue_json(&server, 200, EMPTY_LIST_RESPONSE);

    let tasks = client.get_all_tasks().unwrap().unwrap();

    assert!(tasks.is_empty());
}

#[test]
fn get_all_tasks_404_is_item_not_found() {
    let (server, client) = setup();
    server.enqueue(MockResponse::new(404));

    let err = client.get_all_tasks().unwrap_err();

    assert_eq!(err, ApiError::ItemNotFound);
}

#[test]
fn empty_body_yields_no_result() {
    let (server, client) = setup();
    enqueue_json(&server, 200, EMPTY_RESPONSE);

    let tasks = client.get_all_tasks().unwrap();

    assert!(tasks.is_none());
}

#[test]
fn get_all_tasks_unexpected_status_carries_code() {
    let (server, client) = setup();
    server.enqueue(MockResponse::new(418).with_body("teapot"));

    let err = client.get_all_tasks().unwrap_err();

    assert_eq!(err, ApiError::UnknownError { status: 418 });
    assert_eq!(err.status(), Some(418));
}

// --- get task by id ---

#[test]
fn sends_get_task_by_id_request_to_the_correct_endpoint() {
    let (server, client) = setup();
    enqueue_json(&server, 200, GET_TASK_BY_ID_RESPONSE);

    client.get_task_by_id("fakeId").unwrap();

    let request = taken(&server);
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/todos/fakeId");
}

#[test]
fn parses_task_properly_getting_by_id() {
    let (server, client) = setup();
    enqueue_json(&server, 200, GET_TASK_BY_ID_RESPONSE);

    let task = client.get_task_by_id("1").unwrap().unwrap();

    assert_task_contains_expected_values(&task);
}

#[test]
fn get_task_by_id_404_is_item_not_found() {
    let (server, client) = setup();
    server.enqueue(MockResponse::new(404));

    let err = client.get_task_by_id("fakeId").unwrap_err();

    assert_eq!(err, ApiError::ItemNotFound);
}

#[test]
fn get_task_by_id_malformed_json_is_network_error() {
    let (server, client) = setup();
    enqueue_json(&server, 200, MALFORMED_RESPONSE);

    let err = client.get_task_by_id("1").unwrap_err();

    assert!(matches!(err, ApiError::NetworkError(_)), "got {err:?}");
}

// --- add task ---

#[test]
fn sends_add_task_request_with_json_body() {
    let (server, client) = setup();
    enqueue_json(&server, 201, ADD_TASK_RESPONSE);

    client
        .add_task(&Task::new("1", "2", "Finish this kata", false))
        .unwrap();

    let request = taken(&server);
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/todos");
    assert_eq!(request.header("Content-Type"), Some("application/json"));
    let sent: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    let expected: serde_json::Value = serde_json::from_str(ADD_TASK_REQUEST).unwrap();
    assert_eq!(sent, expected);
}

#[test]
fn parses_task_properly_adding_a_task() {
    let (server, client) = setup();
    enqueue_json(&server, 201, ADD_TASK_RESPONSE);

    let task = client
        .add_task(&Task::new("1", "2", "Finish this kata", false))
        .unwrap();

    assert_eq!(task.id, "1");
    assert_eq!(task.user_id, "2");
    assert_eq!(task.title, "Finish this kata");
    assert!(!task.finished);
}

#[test]
fn add_task_server_error_is_unknown_error() {
    let (server, client) = setup();
    server.enqueue(MockResponse::new(500));

    let err = client
        .add_task(&Task::new("1", "2", "Finish this kata", false))
        .unwrap_err();

    assert_eq!(err, ApiError::UnknownError { status: 500 });
}

// --- transport ---

#[test]
fn unreachable_server_is_network_error() {
    // Bind-and-drop leaves a port with nothing listening.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let dead = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = TodoApiClient::new(&dead).get_all_tasks().unwrap_err();

    assert!(matches!(err, ApiError::NetworkError(_)), "got {err:?}");
}

// --- posts ---

#[test]
fn get_all_posts_sends_headers_properly() {
    let server = MockServer::start().unwrap();
    let client = PostsApiClient::new(&server.base_url());
    server.enqueue(MockResponse::default());

    client.get_all_posts().unwrap();

    let request = taken(&server);
    assert_eq!(request.path, "/posts");
    assert_eq!(request.header("Accept"), Some("application/json"));
    assert_eq!(request.header("Accept-Language"), Some("es"));
}

#[test]
fn parses_posts_properly() {
    let server = MockServer::start().unwrap();
    let client = PostsApiClient::new(&server.base_url());
    enqueue_json(&server, 200, GET_POSTS_RESPONSE);

    let posts = client.get_all_posts().unwrap().unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[1].id, "2");
    assert_eq!(posts[1].title, "qui est esse");
}

#[test]
fn get_all_posts_404_is_item_not_found() {
    let server = MockServer::start().unwrap();
    let client = PostsApiClient::new(&server.base_url());
    server.enqueue(MockResponse::new(404));

    assert_eq!(client.get_all_posts().unwrap_err(), ApiError::ItemNotFound);
}
