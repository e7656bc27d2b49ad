//! In-memory todo REST service used to exercise generated endpoints over real
//! HTTP.
//!
//! Besides plain CRUD it serves 1-based pages (`/todos/page`), a filtered
//! list (`/todos/search`) and filtered pages (`/todos/search/page`). Todos are
//! listed in creation order so pages are stable.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

/// Page envelope, same wire shape the client library expects.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPage {
    pub content: Vec<Todo>,
    pub total_elements: u64,
    pub total_pages: u64,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: usize,
    pub size: usize,
}

#[derive(Debug, Default, Deserialize)]
pub struct TodoFilter {
    pub completed: Option<bool>,
    /// Case-insensitive substring match.
    pub title: Option<String>,
}

impl TodoFilter {
    fn matches(&self, todo: &Todo) -> bool {
        if self.completed.is_some_and(|c| c != todo.completed) {
            return false;
        }
        match &self.title {
            Some(title) => todo.title.to_lowercase().contains(&title.to_lowercase()),
            None => true,
        }
    }
}

pub type Db = Arc<RwLock<Vec<Todo>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/page", get(page_todos))
        .route("/todos/search", get(search_todos))
        .route("/todos/search/page", get(search_page_todos))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn paginate(todos: Vec<Todo>, query: &PageQuery) -> Result<TodoPage, StatusCode> {
    if query.page == 0 || query.size == 0 {
        return Err(StatusCode::BAD_REQUEST);
    }
    let total = todos.len();
    let content = todos
        .into_iter()
        .skip((query.page - 1) * query.size)
        .take(query.size)
        .collect();
    Ok(TodoPage {
        content,
        total_elements: total as u64,
        total_pages: total.div_ceil(query.size) as u64,
    })
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.clone())
}

async fn page_todos(
    State(db): State<Db>,
    Query(query): Query<PageQuery>,
) -> Result<Json<TodoPage>, StatusCode> {
    let todos = db.read().await.clone();
    paginate(todos, &query).map(Json)
}

async fn search_todos(State(db): State<Db>, Query(filter): Query<TodoFilter>) -> Json<Vec<Todo>> {
    let todos = db.read().await;
    Json(todos.iter().filter(|t| filter.matches(t)).cloned().collect())
}

async fn search_page_todos(
    State(db): State<Db>,
    Query(filter): Query<TodoFilter>,
    Query(query): Query<PageQuery>,
) -> Result<Json<TodoPage>, StatusCode> {
    let matching = db
        .read()
        .await
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect();
    paginate(matching, &query).map(Json)
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let todo = Todo {
        id: Uuid::new_v4(),
        title: input.title,
        completed: input.completed,
    };
    db.write().await.push(todo.clone());
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Todo>, StatusCode> {
    let todos = db.read().await;
    todos
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut todos = db.write().await;
    let todo = todos
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = input.title {
        todo.title = title;
    }
    if let Some(completed) = input.completed {
        todo.completed = completed;
    }
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let mut todos = db.write().await;
    let index = todos
        .iter()
        .position(|t| t.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    todos.remove(index);
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(title: &str, completed: bool) -> Todo {
        Todo {
            id: Uuid::new_v4(),
            title: title.to_string(),
            completed,
        }
    }

    #[test]
    fn page_serializes_camel_case() {
        let page = TodoPage {
            content: Vec::new(),
            total_elements: 3,
            total_pages: 1,
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalElements"], 3);
        assert_eq!(json["totalPages"], 1);
    }

    #[test]
    fn paginate_slices_and_counts() {
        let todos: Vec<_> = (0..5).map(|i| todo(&format!("t{i}"), false)).collect();
        let page = paginate(todos, &PageQuery { page: 2, size: 2 }).unwrap();
        assert_eq!(page.content.len(), 2);
        assert_eq!(page.content[0].title, "t2");
        assert_eq!(page.total_elements, 5);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn paginate_past_the_end_is_empty() {
        let todos = vec![todo("only", false)];
        let page = paginate(todos, &PageQuery { page: 4, size: 10 }).unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn paginate_rejects_zero() {
        assert_eq!(
            paginate(Vec::new(), &PageQuery { page: 0, size: 10 }).unwrap_err(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn filter_matches_title_case_insensitively() {
        let filter = TodoFilter {
            completed: None,
            title: Some("MILK".to_string()),
        };
        assert!(filter.matches(&todo("Buy milk", false)));
        assert!(!filter.matches(&todo("Walk dog", false)));
    }

    #[test]
    fn filter_matches_completed_flag() {
        let filter = TodoFilter {
            completed: Some(true),
            title: None,
        };
        assert!(filter.matches(&todo("a", true)));
        assert!(!filter.matches(&todo("a", false)));
        assert!(TodoFilter::default().matches(&todo("a", false)));
    }

    #[test]
    fn create_todo_defaults_completed_to_false() {
        let input: CreateTodo = serde_json::from_str(r#"{"title":"No completed field"}"#).unwrap();
        assert_eq!(input.title, "No completed field");
        assert!(!input.completed);
    }

    #[test]
    fn update_todo_all_fields_optional() {
        let input: UpdateTodo = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.title.is_none());
        assert!(input.completed.is_none());
    }
}
