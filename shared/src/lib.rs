use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A todo as it travels over the wire.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TaskList {
    pub data: Vec<Task>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TaskCreated {
    pub message: String,
    pub todo_id: String,
}

/// Body of every response that only carries a status message.
#[derive(Debug, Deserialize, Serialize)]
pub struct Message {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: Some(error.into()),
        }
    }
}
