//! In-memory todos/posts server for manual runs and end-to-end tests.
//!
//! DTOs here are defined independently of the client crate; the client's
//! integration tests catch any schema drift between the two.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub finished: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: String,
    pub id: String,
    pub title: String,
    pub body: String,
}

/// Insertion-ordered contents of the server.
#[derive(Clone, Debug, Default)]
pub struct Store {
    pub todos: Vec<Task>,
    pub posts: Vec<Post>,
}

impl Store {
    /// A handful of records so a fresh server has something to list.
    pub fn seeded() -> Self {
        let todos = [
            ("1", "1", "delectus aut autem", false),
            ("2", "1", "quis ut nam facilis et officia qui", false),
            ("3", "1", "fugiat veniam minus", false),
            ("4", "1", "et porro tempora", true),
        ]
        .into_iter()
        .map(|(id, user_id, title, finished)| Task {
            id: id.to_string(),
            user_id: user_id.to_string(),
            title: title.to_string(),
            finished,
        })
        .collect();
        let posts = vec![Post {
            user_id: "1".to_string(),
            id: "1".to_string(),
            title: "sunt aut facere repellat provident".to_string(),
            body: "quia et suscipit".to_string(),
        }];
        Self { todos, posts }
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with(Store::default())
}

pub fn app_with(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo))
        .route("/posts", get(list_posts))
        .with_state(db)
}

pub async fn run(listener: TcpListener, store: Store) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(store)).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Task>> {
    Json(db.read().await.todos.clone())
}

async fn create_todo(
    State(db): State<Db>,
    Json(task): Json<Task>,
) -> Result<(StatusCode, Json<Task>), StatusCode> {
    let mut store = db.write().await;
    if store.todos.iter().any(|t| t.id == task.id) {
        return Err(StatusCode::CONFLICT);
    }
    info!(id = %task.id, "created task");
    store.todos.push(task.clone());
    Ok((StatusCode::CREATED, Json(task)))
}

async fn get_todo(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Task>, StatusCode> {
    let store = db.read().await;
    store
        .todos
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    Json(db.read().await.posts.clone())
}
