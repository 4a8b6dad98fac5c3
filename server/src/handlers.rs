use actix_web::http::header::ContentType;
use actix_web::{delete, get, post, put, routes, web, HttpResponse};
use bson::oid::ObjectId;
use todo_shared::{CreateTaskRequest, Message, Task, TaskCreated, TaskList, UpdateTaskRequest};

use crate::error::ApiError;
use crate::store::{StoreError, StoredTask, TaskChanges};
use crate::AppState;

const HOME_PAGE: &str = include_str!("../static/home.html");

#[get("/")]
pub async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(HOME_PAGE)
}

#[routes]
#[get("")]
#[get("/")]
pub async fn list_todos(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let stored = state.store.list().await.map_err(|err| match err {
        StoreError::Decode(_) => ApiError::store("Failed to decode todos")(err),
        StoreError::Database(_) => ApiError::store("Failed to fetch todos")(err),
    })?;

    let data = stored.into_iter().map(Task::from).collect();
    Ok(HttpResponse::Ok().json(TaskList { data }))
}

#[routes]
#[post("")]
#[post("/")]
pub async fn create_todo(
    state: web::Data<AppState>,
    body: web::Json<CreateTaskRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    if request.title.is_empty() {
        return Err(ApiError::MissingTitle("The title is required"));
    }

    let task = StoredTask::new(request.title);
    state
        .store
        .insert(&task)
        .await
        .map_err(ApiError::store("Failed to save todo"))?;

    log::debug!("created todo {}", task.id);
    Ok(HttpResponse::Created().json(TaskCreated {
        message: "Todo created successfully".to_string(),
        todo_id: task.id.to_hex(),
    }))
}

// The body is parsed by hand so a bad id is reported before a bad payload.
#[put("/{id}")]
pub async fn update_todo(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&id)?;
    let request: UpdateTaskRequest =
        serde_json::from_slice(&body).map_err(|err| ApiError::MalformedBody(err.to_string()))?;
    if request.title.is_empty() {
        return Err(ApiError::MissingTitle("The title field is missing"));
    }

    let changes = TaskChanges {
        title: request.title,
        completed: request.completed,
    };
    let matched = state
        .store
        .update(&id, &changes)
        .await
        .map_err(ApiError::store("Failed to update todo"))?;
    if !matched {
        log::debug!("update matched no todo with id {}", id);
    }

    Ok(HttpResponse::Ok().json(Message::new("Todo updated successfully")))
}

#[delete("/{id}")]
pub async fn delete_todo(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&id)?;
    let removed = state
        .store
        .delete(&id)
        .await
        .map_err(ApiError::store("Failed to delete todo"))?;
    if !removed {
        log::debug!("delete matched no todo with id {}", id);
    }

    Ok(HttpResponse::Ok().json(Message::new("Todo deleted successfully")))
}

fn parse_id(raw: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw.trim()).map_err(|_| ApiError::InvalidId)
}
